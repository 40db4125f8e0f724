//! Standard base directories.
//!
//! Resolves the XDG Base Directory locations from the environment, and scopes them to a single
//! application.
//!
//! ```rust,no_run
//! # use basedirs::base_dirs::xdg::Xdg;
//! # use basedirs::os::env::Env;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let env = Env::new();
//! let xdg = Xdg::from_env(&env)?.with_suffix("myapp");
//!
//! // First existing `settings.toml`, user config taking precedence over system ones.
//! let settings = xdg.config().find(["settings.toml"]).into_iter().next();
//! # Ok(())
//! # }
//! ```

use std::{env::home_dir, path::PathBuf};

pub mod xdg;

pub use xdg::{Xdg, XdgError};

/// Wrapper around [`std::env::home_dir`].
///
/// Consults `$HOME` of the process first, then the password database.
pub fn home() -> Option<PathBuf> {
    home_dir()
}
