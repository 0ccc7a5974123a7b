//! Command execution functions for both tools.

mod build;
mod pack;

pub use build::execute_build;
pub use pack::execute_pack;
