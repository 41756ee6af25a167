// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Policies deciding which on-screen card sits behind the focused one.

/// Chooses the on-screen card that is occluded by the focused card.
///
/// Layered card stacks keep the card behind the focused card rendered so it
/// can peek out from underneath. That card is on screen but should not count
/// as visible for focus-driven interaction and animation.
///
/// `on_screen` is sorted ascending. It keeps the host's raw count, so a
/// misbehaving host that reports a position twice shows up as a repeated value.
/// Returning `Some(index)` excludes every member equal to `index`; returning
/// `None` keeps them all.
///
/// Closures of the shape `Fn(&[usize]) -> Option<usize>` are policies too.
pub trait OcclusionPolicy {
    /// Returns the index whose on-screen members are hidden behind the focused card.
    fn occluded(&self, on_screen: &[usize]) -> Option<usize>;
}

impl<F> OcclusionPolicy for F
where
    F: Fn(&[usize]) -> Option<usize>,
{
    fn occluded(&self, on_screen: &[usize]) -> Option<usize> {
        self(on_screen)
    }
}

/// Cards are layered so that lower indexes sit behind higher ones.
///
/// The lowest on-screen index is the card peeking out behind the focused card,
/// except when exactly two cards are on screen and the lowest is card `0`: the
/// first card has nothing behind it, so both are kept.
///
/// With nothing on screen the lowest index falls back to `0`; the result is
/// empty either way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayeredStack;

impl OcclusionPolicy for LayeredStack {
    fn occluded(&self, on_screen: &[usize]) -> Option<usize> {
        let lowest = on_screen.first().copied().unwrap_or(0);
        if on_screen.len() == 2 && lowest == 0 {
            return None;
        }
        Some(lowest)
    }
}

/// Cards are layered so that higher indexes sit behind lower ones.
///
/// Mirror image of [`LayeredStack`]: the highest on-screen index is occluded,
/// except when exactly two cards are on screen and the highest one is the last
/// card of the stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReversedStack {
    /// Index of the last card in the stack (`len - 1`).
    pub last_index: usize,
}

impl OcclusionPolicy for ReversedStack {
    fn occluded(&self, on_screen: &[usize]) -> Option<usize> {
        let highest = *on_screen.last()?;
        if on_screen.len() == 2 && highest == self.last_index {
            return None;
        }
        Some(highest)
    }
}

/// Nothing is occluded; every on-screen card counts as visible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoOcclusion;

impl OcclusionPolicy for NoOcclusion {
    fn occluded(&self, _on_screen: &[usize]) -> Option<usize> {
        None
    }
}
