#![warn(clippy::all, clippy::cargo)]

mod bounded;
mod cell;
mod config;
mod error;
mod pattern;
mod rule;
mod traits;
mod unbounded;

pub use bounded::BoundedGrid;
pub use cell::{Cell, CellEvent, NextState};
pub use config::{get_config, set_shift_magnitude, ConfigSnapshot};
pub use error::{GridError, GridResult};
pub use pattern::Pattern;
pub use rule::next_state;
pub use traits::{Direction, GoLGrid};
pub use unbounded::UnboundedGrid;

pub type DefaultGrid = UnboundedGrid;
