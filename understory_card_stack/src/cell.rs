// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index-addressed cell access.

use crate::{CardStackHost, ItemPosition};

/// Dequeues a reusable cell for the card at `index`.
///
/// This only translates the card index into the host's position token
/// (`row: index`, `section: 0`); the returned handle is exactly what the host
/// produced. Registering a cell type for `identifier` beforehand is the
/// caller's job, and the host reports it if that was skipped.
pub fn dequeue_card_cell<H>(host: &mut H, identifier: &str, index: usize) -> H::Cell
where
    H: CardStackHost + ?Sized,
{
    debug_assert!(
        !identifier.is_empty(),
        "reuse identifier for card {index} must not be empty"
    );
    host.dequeue_reusable_cell(identifier, ItemPosition::card(index))
}
