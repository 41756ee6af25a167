// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interface a virtualized host view exposes to card-stack logic.

use crate::{ItemPosition, ScrollActivity};

/// A virtualized list/grid surface that hosts a card stack.
///
/// The host owns rendering, layout, scrolling, and cell recycling. Card-stack
/// logic only needs three things from it:
///
/// - which positions are currently kept on screen,
/// - a way to dequeue a reusable cell for a position,
/// - and (optionally) whether the surface is currently scrolling.
///
/// Implementations are expected to be called from the thread or event loop that
/// owns the host's rendering state; nothing here is shared across threads.
pub trait CardStackHost {
    /// Opaque handle to a reusable visual cell.
    type Cell;

    /// Positions the host currently keeps rendered on screen.
    ///
    /// Order is unspecified, and a well-behaved host never reports the same
    /// position twice.
    fn on_screen_positions(&self) -> impl Iterator<Item = ItemPosition>;

    /// Dequeues a reusable cell registered under `identifier` for `position`.
    ///
    /// Hosts are responsible for reporting misuse, such as an identifier that
    /// has no registered cell type.
    fn dequeue_reusable_cell(&mut self, identifier: &str, position: ItemPosition) -> Self::Cell;

    /// Current scroll interaction state.
    ///
    /// Hosts that do not track interaction can rely on the default, which
    /// reports an idle surface.
    fn scroll_activity(&self) -> ScrollActivity {
        ScrollActivity::empty()
    }
}

impl<H: CardStackHost + ?Sized> CardStackHost for &mut H {
    type Cell = H::Cell;

    fn on_screen_positions(&self) -> impl Iterator<Item = ItemPosition> {
        (**self).on_screen_positions()
    }

    fn dequeue_reusable_cell(&mut self, identifier: &str, position: ItemPosition) -> Self::Cell {
        (**self).dequeue_reusable_cell(identifier, position)
    }

    fn scroll_activity(&self) -> ScrollActivity {
        (**self).scroll_activity()
    }
}


#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::CardStackHost;
    use super::testing::FakeHost;
    use crate::{ItemPosition, ScrollActivity};

    fn drive<H: CardStackHost>(mut host: H) -> (Vec<usize>, bool, H::Cell) {
        let mut rows: Vec<usize> = host.on_screen_positions().map(ItemPosition::row).collect();
        rows.sort_unstable();
        let scrolling = host.scroll_activity().is_scrolling();
        let cell = host.dequeue_reusable_cell("card", ItemPosition::card(4));
        (rows, scrolling, cell)
    }

    #[test]
    fn borrowed_host_forwards_every_call() {
        let mut host = FakeHost::showing(&[3, 4]);
        host.activity = ScrollActivity::DECELERATING;

        let (rows, scrolling, cell) = drive(&mut host);
        assert_eq!(rows, [3, 4]);
        assert!(scrolling);
        assert_eq!(cell.position, ItemPosition::card(4));
        assert_eq!(host.dequeued.len(), 1);
    }

    #[test]
    fn default_scroll_activity_is_idle() {
        struct Static;

        impl CardStackHost for Static {
            type Cell = ();

            fn on_screen_positions(&self) -> impl Iterator<Item = ItemPosition> {
                core::iter::empty()
            }

            fn dequeue_reusable_cell(&mut self, _: &str, _: ItemPosition) -> Self::Cell {}
        }

        assert_eq!(Static.scroll_activity(), ScrollActivity::empty());
    }
}
