//! Configuration for packaging runs.
//!
//! [`Settings`] is built once per run with [`SettingsBuilder`] and never
//! mutated afterwards. [`ToolEnvironment`] carries the process state used to
//! find external tools.

mod arch;
mod builder;
mod core;
mod environment;
mod package;

// Re-export all public types
pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use core::{BUILD_DIR_NAME, DEFAULT_DOWNLOAD_URL, RESOURCES_ZIP_NAME, Settings};
pub use environment::{PROGRAM_FILES_VARS, ToolEnvironment};
pub use package::{ARCHIVE_EXTENSION, Library, PackageId, TOOLCHAIN_TAG};
