pub mod config;
pub mod error;
pub mod io;
pub mod irclog;
pub mod paths;
mod raw;
pub mod render;
pub mod standup;
pub mod types;

pub use error::{Result, SupError};
