#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod log;
pub mod selectors;
pub mod tools;
pub mod types;

mod tests;

pub use engine::*;
pub use error::{Result, ScrapeError};
pub use tools::parse::{parse, parse_page};
pub use types::*;
