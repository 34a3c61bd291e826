mod bitgrid;
mod board;
mod cell;
mod cli;
mod common;
mod config;
mod logging;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::*;
pub use cell::*;
pub use cli::*;
pub use common::*;
pub use config::*;
pub use logging::init_logging;
