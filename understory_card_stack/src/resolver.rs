// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of on-screen positions into visible card indexes.

use smallvec::SmallVec;

use crate::{LayeredStack, OcclusionPolicy};

/// Card indexes considered visible, ascending and duplicate-free.
///
/// Card stacks rarely keep more than a handful of cards on screen, so results
/// stay inline.
pub type VisibleCards = SmallVec<[usize; 4]>;

/// Lowest on-screen index, or `0` if nothing is on screen.
#[must_use]
pub fn lowest_index<I>(on_screen: I) -> usize
where
    I: IntoIterator<Item = usize>,
{
    on_screen.into_iter().min().unwrap_or(0)
}

/// Resolves visible card indexes for a [`LayeredStack`].
///
/// The lowest on-screen card is the one peeking out behind the focused card
/// and is left out, unless the focused card is the first card of the stack.
///
/// A single on-screen card resolves to an empty result: it is the lowest
/// index, and the first-card exemption only covers a pair.
///
/// ```rust
/// use understory_card_stack::visible_card_indexes;
///
/// assert_eq!(visible_card_indexes([4, 3]).as_slice(), &[4]);
/// assert_eq!(visible_card_indexes([1, 0]).as_slice(), &[0, 1]);
/// assert_eq!(visible_card_indexes([7, 2, 5]).as_slice(), &[5, 7]);
/// assert!(visible_card_indexes([5]).is_empty());
/// ```
#[must_use]
pub fn visible_card_indexes<I>(on_screen: I) -> VisibleCards
where
    I: IntoIterator<Item = usize>,
{
    visible_card_indexes_with(&LayeredStack, on_screen)
}

/// Resolves visible card indexes using an arbitrary [`OcclusionPolicy`].
///
/// `on_screen` may arrive in any order. Every member equal to the occluded
/// index is dropped, the rest are returned ascending. Repeated members, which
/// a well-behaved host never reports, are collapsed.
#[must_use]
pub fn visible_card_indexes_with<P, I>(policy: &P, on_screen: I) -> VisibleCards
where
    P: OcclusionPolicy + ?Sized,
    I: IntoIterator<Item = usize>,
{
    let mut indexes: VisibleCards = on_screen.into_iter().collect();
    indexes.sort_unstable();
    #[cfg(feature = "tracing")]
    let reported = indexes.len();

    let occluded = policy.occluded(&indexes);
    if let Some(occluded) = occluded {
        indexes.retain(|index| *index != occluded);
    }
    indexes.dedup();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        reported,
        ?occluded,
        visible = ?indexes.as_slice(),
        "resolved visible cards"
    );

    indexes
}
