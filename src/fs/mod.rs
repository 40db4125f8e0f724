//! Validated filesystem paths.
//!
//! Provides [`BasePath`](base_path::BasePath), an absolute path usable as a search root, and
//! [`BasePaths`](base_path::BasePaths), an ordered list of them.

pub mod base_path;

pub use base_path::{BasePath, BasePaths, InvalidPath, MatchError};
