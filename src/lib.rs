//! Basedirs - XDG Base Directory resolution.
//!
//! This crate resolves the standard data, configuration, cache and runtime directories from the
//! environment, validates them, and offers lookup helpers (join, find, glob) over single paths and
//! ordered search lists.

pub mod base_dirs;
pub mod fs;
pub mod os;
