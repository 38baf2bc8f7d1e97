//! Serpentile is the chain layout core of a browser-based multiplayer
//! dominoes game.
//!
//! The host (game state, viewport observer, renderer) feeds an append-only
//! sequence of played dominoes plus the current canvas size into one
//! [`ChainLayoutEngine`] per round; the engine answers with a
//! [`LayoutSnapshot`]: per-tile pixel placements, the two playable chain
//! ends, and the uniform scale factor that fits the chain into the canvas.
//!
//! # Pipeline overview
//!
//! 1. **Play**: the game state appends a tile to a [`Board`] end
//! 2. **Recompute**: the host calls [`ChainLayoutEngine::recompute`]
//! 3. **Render**: the renderer consumes the snapshot's [`Placement`]s
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a snapshot is a pure function of the
//!   board, the viewport, and the engine's cache.
//! - **Stability**: placements for previously seen tiles are returned
//!   unchanged across calls until a geometry change forces a reset, so the
//!   renderer never jitters tiles that are already on the table.
//! - **Total hot path**: layout never fails; validation happens up front on
//!   boards and parameters.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod board;
mod foundation;
mod layout;

pub use board::model::{Board, BoardEnds, Domino, MAX_PIP, PlacedDomino, domino_set};
pub use foundation::core::{Direction, Placement, Point, Rect, Vec2, Viewport};
pub use foundation::error::{SerpentileError, SerpentileResult};
pub use layout::chain::{ChainEnd, ChainLayoutEngine, LayoutSnapshot};
pub use layout::geometry::{LayoutParams, MAX_SCALE, MIN_SCALE, SCALE_TOLERANCE};
pub use layout::row::{RowWrapParams, TraySlot, wrap_tray};
