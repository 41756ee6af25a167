// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A card-stack view over a virtualized host.

use crate::{
    CardStackHost, LayeredStack, OcclusionPolicy, VisibleCards, dequeue_card_cell,
    visible_card_indexes_with,
};

/// Card-stack view wrapping a virtualized host.
///
/// This type:
/// - owns the host and an [`OcclusionPolicy`],
/// - resolves which cards count as visible from the host's on-screen positions,
/// - dequeues cells by card index instead of by position token.
///
/// Nothing is cached between calls: every query reads the host afresh.
#[derive(Debug)]
pub struct CardStackView<H, P = LayeredStack> {
    host: H,
    policy: P,
}

impl<H: CardStackHost> CardStackView<H> {
    /// Creates a new [`CardStackView`] whose cards layer lower indexes behind higher ones.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_policy(host, LayeredStack)
    }
}

impl<H: CardStackHost, P: OcclusionPolicy> CardStackView<H, P> {
    /// Creates a new [`CardStackView`] with an explicit occlusion `policy`.
    #[must_use]
    pub fn with_policy(host: H, policy: P) -> Self {
        Self { host, policy }
    }

    /// Returns a shared reference to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns a mutable reference to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the view and returns the host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Returns the occlusion policy.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Indexes of the cards currently visible, ascending.
    ///
    /// Cards hidden behind the focused card are not included. The result may
    /// be empty even while the host has cards on screen.
    #[must_use]
    pub fn indexes_for_visible_cards(&self) -> VisibleCards {
        let on_screen = self.host.on_screen_positions().map(|position| position.row());
        visible_card_indexes_with(&self.policy, on_screen)
    }

    /// Dequeues a reusable cell registered under `identifier` for the card at `index`.
    pub fn dequeue_reusable_cell(&mut self, identifier: &str, index: usize) -> H::Cell {
        dequeue_card_cell(&mut self.host, identifier, index)
    }

    /// Returns `true` if the host is dragging, tracking, or decelerating.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.host.scroll_activity().is_scrolling()
    }
}

#[cfg(test)]
mod tests {
    use super::CardStackView;
    use crate::host::testing::FakeHost;
    use crate::{CardStackHost, ItemPosition, NoOcclusion, ReversedStack, ScrollActivity};

    #[test]
    fn visible_cards_follow_the_host() {
        let mut view = CardStackView::new(FakeHost::showing(&[0, 1]));
        assert_eq!(view.indexes_for_visible_cards().as_slice(), &[0, 1]);

        // Scroll past the first card: card 1 now peeks out behind card 2.
        view.host_mut().on_screen = [1, 2].into_iter().map(ItemPosition::card).collect();
        assert_eq!(view.indexes_for_visible_cards().as_slice(), &[2]);

        // Settled on a single card.
        view.host_mut().on_screen = [2].into_iter().map(ItemPosition::card).collect();
        assert!(view.indexes_for_visible_cards().is_empty());
    }

    #[test]
    fn policy_is_swappable() {
        let view = CardStackView::with_policy(FakeHost::showing(&[3, 4]), NoOcclusion);
        assert_eq!(view.indexes_for_visible_cards().as_slice(), &[3, 4]);

        let view =
            CardStackView::with_policy(FakeHost::showing(&[3, 4]), ReversedStack { last_index: 9 });
        assert_eq!(view.indexes_for_visible_cards().as_slice(), &[3]);
        assert_eq!(view.policy().last_index, 9);
    }

    #[test]
    fn dequeue_uses_card_positions() {
        let mut view = CardStackView::new(FakeHost::default());
        let cell = view.dequeue_reusable_cell("card", 7);
        assert_eq!(cell.position, ItemPosition::card(7));

        let host = view.into_host();
        assert_eq!(host.dequeued.len(), 1);
    }

    #[test]
    fn scrolling_reflects_host_activity() {
        let mut view = CardStackView::new(FakeHost::default());
        assert!(!view.is_scrolling());

        view.host_mut().activity = ScrollActivity::DRAGGING | ScrollActivity::TRACKING;
        assert!(view.is_scrolling());

        view.host_mut().activity = ScrollActivity::empty();
        assert!(!view.host().scroll_activity().is_scrolling());
    }

    #[test]
    fn borrowed_hosts_can_back_a_view() {
        let mut host = FakeHost::showing(&[2, 5, 7]);
        {
            let mut view = CardStackView::new(&mut host);
            assert_eq!(view.indexes_for_visible_cards().as_slice(), &[5, 7]);
            let _ = view.dequeue_reusable_cell("card", 5);
        }
        assert_eq!(host.dequeued.len(), 1);
    }
}
