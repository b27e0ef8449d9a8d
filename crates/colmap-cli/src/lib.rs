//! Library components of the `colmap` command-line tool.

pub mod assign;
pub mod logging;
pub mod summary;
