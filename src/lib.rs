// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod render;
pub mod runner;
pub mod splice;

#[doc(hidden)]
pub use tracing;

pub use catalog::Catalog;
pub use error::GenError;
pub use runner::{Outcome, generate, run};
