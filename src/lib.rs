#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
mod level;
#[cfg(feature = "std")]
mod logging;
mod shape;
mod target;
mod vessel;

pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use level::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use shape::*;
pub use target::*;
pub use vessel::*;
