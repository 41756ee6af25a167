// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position tokens exchanged with the host view.

/// Section that every card lives in.
///
/// Card stacks are a single dense strip, so the host's sectioned addressing is
/// always pinned to the first section.
pub const CARD_SECTION: usize = 0;

/// Location of an on-screen slot in the host's virtualized surface.
///
/// Hosts that address items by `(row, section)` report their on-screen slots as
/// `ItemPosition`s. Card stacks only ever use [`CARD_SECTION`], so the card index
/// is the [`row`](Self::row).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemPosition {
    /// Row within the section.
    pub row: usize,
    /// Section containing the row.
    pub section: usize,
}

impl ItemPosition {
    /// Creates a position from an explicit row and section.
    #[must_use]
    pub const fn new(row: usize, section: usize) -> Self {
        Self { row, section }
    }

    /// Position of the card at `index`.
    #[must_use]
    pub const fn card(index: usize) -> Self {
        Self::new(index, CARD_SECTION)
    }

    /// Returns the row, which is the card index for card-stack positions.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }
}

impl From<usize> for ItemPosition {
    fn from(index: usize) -> Self {
        Self::card(index)
    }
}
