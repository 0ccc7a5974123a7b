//! Shared utilities: filesystem helpers, HTTP fetching, process execution
//! and ZIP writing.

pub mod archive;
pub mod fs;
pub mod http;
pub mod process;
