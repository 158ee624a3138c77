pub mod config;
mod error;
mod outcome;
mod target;

pub use error::*;
pub use outcome::*;
pub use target::*;
