//! Conway's Game of Life simulation core: a fixed-size grid, bounded Moore
//! neighborhoods, a deferred-apply generation stepper, and the time-seeded
//! xorshift generator that scatters the starting generation.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod error;
mod grid;
mod neighborhood;
mod render;
mod rng;
mod seed;
mod step;

pub use error::GridError;
pub use grid::{CellState, LifeGrid, Loc};
pub use neighborhood::{NEIGHBOR_OFFSETS, neighbors};
pub use render::{ALIVE_GLYPH, DEAD_GLYPH, display_string};
pub use rng::{Clock, Random, SystemClock};
pub use seed::{random_state, random_state_with};
