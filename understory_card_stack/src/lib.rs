// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Card Stack: visible-card resolution for virtualized card stacks.
//!
//! A card stack is a vertical strip of cards where the focused card sits on top
//! of the card before it, which peeks out from underneath. The host view (any
//! virtualized list or grid) keeps both rendered, but only the focused card
//! should count as visible for interaction and animation.
//!
//! The core concepts are:
//!
//! - [`CardStackHost`]: the interface a virtualized host provides. It reports
//!   on-screen [`ItemPosition`]s, dequeues reusable cells, and exposes its
//!   [`ScrollActivity`].
//! - [`visible_card_indexes`]: resolves on-screen indexes into the ascending
//!   [`VisibleCards`] that count as visible, dropping the card behind the focused
//!   card.
//! - [`OcclusionPolicy`]: decides which on-screen card is occluded.
//!   [`LayeredStack`] is the default; [`ReversedStack`], [`NoOcclusion`], and
//!   closures can be plugged in through [`visible_card_indexes_with`].
//! - [`dequeue_card_cell`]: dequeues a cell by card index instead of by
//!   position token.
//! - [`CardStackView`]: a small wrapper that owns a host and a policy and exposes
//!   all of the above as methods.
//!
//! This crate deliberately does **not** know about rendering, layout, gestures,
//! or cell pooling. Host frameworks are responsible for:
//!
//! - Owning the scroll surface and its cells.
//! - Reporting on-screen positions when asked.
//! - Registering cell types before cells are dequeued.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_card_stack::{visible_card_indexes, LayeredStack, visible_card_indexes_with};
//!
//! // Focused on card 4, with card 3 peeking out behind it.
//! assert_eq!(visible_card_indexes([4, 3]).as_slice(), &[4]);
//!
//! // Focused on the first card: there is nothing behind it.
//! assert_eq!(visible_card_indexes([0, 1]).as_slice(), &[0, 1]);
//!
//! // The default policy can also be named explicitly.
//! assert_eq!(visible_card_indexes_with(&LayeredStack, [7, 5, 2]).as_slice(), &[5, 7]);
//! ```
//!
//! ## Driving a host
//!
//! ```rust
//! use understory_card_stack::{CardStackHost, CardStackView, ItemPosition};
//!
//! struct Surface {
//!     on_screen: Vec<ItemPosition>,
//! }
//!
//! impl CardStackHost for Surface {
//!     type Cell = String;
//!
//!     fn on_screen_positions(&self) -> impl Iterator<Item = ItemPosition> {
//!         self.on_screen.iter().copied()
//!     }
//!
//!     fn dequeue_reusable_cell(&mut self, identifier: &str, position: ItemPosition) -> String {
//!         format!("{identifier}@{}:{}", position.section, position.row)
//!     }
//! }
//!
//! let surface = Surface {
//!     on_screen: vec![ItemPosition::card(6), ItemPosition::card(5)],
//! };
//! let mut view = CardStackView::new(surface);
//!
//! assert_eq!(view.indexes_for_visible_cards().as_slice(), &[6]);
//! assert_eq!(view.dequeue_reusable_cell("card", 6), "card@0:6");
//! assert!(!view.is_scrolling());
//! ```
//!
//! ## Features
//!
//! - `std`: enables `std` support for dependencies that have it.
//! - `tracing`: emits a `trace!` event for every visible-card resolution.
//!
//! This crate is `no_std` and does not allocate for typical stacks.

#![no_std]

#[cfg(test)]
extern crate std;

mod cell;
mod host;
mod occlusion;
mod position;
mod resolver;
mod scroll;
mod view;

pub use cell::dequeue_card_cell;
pub use host::CardStackHost;
pub use occlusion::{LayeredStack, NoOcclusion, OcclusionPolicy, ReversedStack};
pub use position::{CARD_SECTION, ItemPosition};
pub use resolver::{VisibleCards, lowest_index, visible_card_indexes, visible_card_indexes_with};
pub use scroll::ScrollActivity;
pub use view::CardStackView;
