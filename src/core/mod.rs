//! Engine, result types and the ambient pieces around them.

pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod time;
pub mod types;
