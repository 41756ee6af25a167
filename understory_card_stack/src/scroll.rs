// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll interaction state reported by the host.

bitflags::bitflags! {
    /// What the host's scroll surface is currently doing.
    ///
    /// Hosts usually track these independently: a finger can be down
    /// (`TRACKING`) without having moved far enough to count as a drag, and
    /// deceleration continues after the finger lifts.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ScrollActivity: u8 {
        /// The user has started dragging the content.
        const DRAGGING = 1 << 0;
        /// The user has touched the content, possibly without dragging yet.
        const TRACKING = 1 << 1;
        /// The content is still moving after the user lifted their finger.
        const DECELERATING = 1 << 2;
    }
}

impl ScrollActivity {
    /// Returns `true` if the surface is dragging, tracking, or decelerating.
    #[must_use]
    pub const fn is_scrolling(self) -> bool {
        !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollActivity;

    #[test]
    fn idle_surface_is_not_scrolling() {
        assert!(!ScrollActivity::empty().is_scrolling());
        assert!(!ScrollActivity::default().is_scrolling());
    }

    #[test]
    fn any_activity_counts_as_scrolling() {
        assert!(ScrollActivity::DRAGGING.is_scrolling());
        assert!(ScrollActivity::TRACKING.is_scrolling());
        assert!(ScrollActivity::DECELERATING.is_scrolling());
        assert!((ScrollActivity::TRACKING | ScrollActivity::DECELERATING).is_scrolling());
    }
}
