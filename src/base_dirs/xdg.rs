//! XDG Base Directory Specification support.
//!
//! Resolves the base directories from `$XDG_*` variables, falling back to the defaults from
//! <https://specifications.freedesktop.org/basedir-spec/basedir-spec-latest.html> when a variable
//! is unset or holds an invalid (empty or relative) path.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use thiserror::Error;
use tracing::{debug, trace};

use crate::base_dirs::home;
use crate::fs::{BasePath, BasePaths};
use crate::os::env::{Env, EnvStrError};

const DATA_DIRS_DEFAULT: [&str; 2] = ["/usr/local/share", "/usr/share"];
const CONFIG_DIRS_DEFAULT: [&str; 1] = ["/etc/xdg"];

/// Errors encountered when resolving base directories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XdgError {
    /// Variable `$HomeUnavailable.0` is unset or invalid, and its default can't be derived,
    /// because neither `$HOME` nor [`home`] is a valid path.
    #[error("`${0}` is not set, and no absolute home directory is known")]
    HomeUnavailable(&'static str),
}

/// Resolved base directories.
///
/// Immutable once resolved. [`Xdg::with_suffix`] returns a new value instead of changing this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xdg {
    data_home: BasePath,
    data_dirs: BasePaths,
    config_home: BasePath,
    config_dirs: BasePaths,
    cache_home: BasePath,
    runtime_dir: Option<BasePath>,
}

/// Value of `key`, where missing and non UTF-8 variables read as empty, hence invalid.
fn var<'a>(env: &'a Env, key: &str) -> &'a str {
    match env.get(key) {
        Ok(value) => value,
        Err(EnvStrError::Missing(_)) => "",
        Err(err @ EnvStrError::NonUTF8(_)) => {
            trace!(%err, "ignoring variable");
            ""
        }
    }
}

fn home_dir(
    env: &Env,
    key: &'static str,
    home: Option<&BasePath>,
    suffix: &[&str],
) -> Result<BasePath, XdgError> {
    let value = var(env, key);
    match home {
        Some(home) => Ok(BasePath::with_default(
            value,
            BasePath::trusted(home.join(suffix)),
        )),
        None => BasePath::new(value).ok_or(XdgError::HomeUnavailable(key)),
    }
}

fn search_dirs(env: &Env, key: &str, default: &[&str]) -> BasePaths {
    let default = default.iter().copied().map(BasePath::trusted).collect();
    BasePaths::with_default(var(env, key).split(':'), default)
}

impl Xdg {
    /// Resolve base directories from the current process environment.
    ///
    /// Shorthand for [`Xdg::from_env(&Env::new())`](Xdg::from_env).
    pub fn new() -> Result<Self, XdgError> {
        Self::from_env(&Env::new())
    }

    /// Resolve base directories from `env`.
    ///
    /// | Directory   | Variable          | Default                          |
    /// |-------------|-------------------|----------------------------------|
    /// | data home   | `XDG_DATA_HOME`   | `$HOME/.local/share`             |
    /// | data dirs   | `XDG_DATA_DIRS`   | `/usr/local/share`, `/usr/share` |
    /// | config home | `XDG_CONFIG_HOME` | `$HOME/.config`                  |
    /// | config dirs | `XDG_CONFIG_DIRS` | `/etc/xdg`                       |
    /// | cache home  | `XDG_CACHE_HOME`  | `$HOME/.cache`                   |
    /// | runtime dir | `XDG_RUNTIME_DIR` | none                             |
    ///
    /// `*_DIRS` are `:`-separated lists. Invalid entries are skipped, and if none is left, the
    /// whole default list is used.
    ///
    /// `$HOME` of `env` is the base of the home defaults. If it is unset or invalid, the home
    /// directory of the current user is used instead, see [`home`].
    ///
    /// # Returns
    /// Most of time it should be [`Ok`] variant.
    /// [`Err`] is returned if and only if no valid home directory is known, and one of the home
    /// directories has no valid override.
    ///
    /// # Examples
    /// ```rust
    /// # use basedirs::base_dirs::xdg::Xdg;
    /// # use basedirs::os::env::Env;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let env: Env = [("HOME", "/home/alice"), ("XDG_CONFIG_DIRS", "/etc/xdg:/opt/xdg:bad")]
    ///     .into_iter()
    ///     .collect();
    /// let xdg = Xdg::from_env(&env)?;
    /// assert_eq!(xdg.data_home().as_path(), std::path::Path::new("/home/alice/.local/share"));
    /// assert_eq!(xdg.config_dirs().len(), 2);
    /// assert!(xdg.runtime_dir().is_none());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_env(env: &Env) -> Result<Self, XdgError> {
        Self::resolve(env, home)
    }

    fn resolve(
        env: &Env,
        fallback_home: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<Self, XdgError> {
        let home = BasePath::new(var(env, "HOME")).or_else(|| {
            let home = fallback_home().and_then(BasePath::new);
            trace!(home = ?home.as_ref().map(BasePath::as_path), "`$HOME` is unusable");
            home
        });
        let home = home.as_ref();

        let xdg = Self {
            data_home: home_dir(env, "XDG_DATA_HOME", home, &[".local", "share"])?,
            data_dirs: search_dirs(env, "XDG_DATA_DIRS", &DATA_DIRS_DEFAULT),
            config_home: home_dir(env, "XDG_CONFIG_HOME", home, &[".config"])?,
            config_dirs: search_dirs(env, "XDG_CONFIG_DIRS", &CONFIG_DIRS_DEFAULT),
            cache_home: home_dir(env, "XDG_CACHE_HOME", home, &[".cache"])?,
            runtime_dir: BasePath::new(var(env, "XDG_RUNTIME_DIR")),
        };
        debug!(
            data_home = %xdg.data_home,
            config_home = %xdg.config_home,
            cache_home = %xdg.cache_home,
            runtime_dir = ?xdg.runtime_dir.as_ref().map(BasePath::as_path),
            "resolved base directories"
        );
        Ok(xdg)
    }

    /// Directory to write user-specific data files.
    pub fn data_home(&self) -> &BasePath {
        &self.data_home
    }

    /// Directories to search for data files, in preference order.
    pub fn data_dirs(&self) -> &BasePaths {
        &self.data_dirs
    }

    /// Both user-specific and system directories to search for data files: [`Xdg::data_home`]
    /// followed by [`Xdg::data_dirs`].
    pub fn data(&self) -> BasePaths {
        combined(&self.data_home, &self.data_dirs)
    }

    /// Directory to write user-specific config files.
    pub fn config_home(&self) -> &BasePath {
        &self.config_home
    }

    /// Directories to search for config files, in preference order.
    pub fn config_dirs(&self) -> &BasePaths {
        &self.config_dirs
    }

    /// Both user-specific and system directories to search for config files:
    /// [`Xdg::config_home`] followed by [`Xdg::config_dirs`].
    pub fn config(&self) -> BasePaths {
        combined(&self.config_home, &self.config_dirs)
    }

    /// Directory to write user-specific, non-essential (cached) data files.
    pub fn cache_home(&self) -> &BasePath {
        &self.cache_home
    }

    /// Directory for user-specific runtime files, like sockets.
    ///
    /// [`None`] if `$XDG_RUNTIME_DIR` is unset or invalid, it has no default.
    pub fn runtime_dir(&self) -> Option<&BasePath> {
        self.runtime_dir.as_ref()
    }

    /// Join `name` to each of the resolved directories.
    ///
    /// Useful for scoping all lookups to the calling application. Order of the search lists is
    /// preserved. An unset [`Xdg::runtime_dir`] stays unset.
    ///
    /// ```rust
    /// # use basedirs::base_dirs::xdg::Xdg;
    /// # use basedirs::os::env::Env;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let env: Env = [("HOME", "/home/alice")].into_iter().collect();
    /// let xdg = Xdg::from_env(&env)?.with_suffix("myapp");
    /// assert_eq!(xdg.cache_home().as_path(), std::path::Path::new("/home/alice/.cache/myapp"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_suffix(&self, name: impl AsRef<Path>) -> Self {
        let name = name.as_ref();
        Self {
            data_home: self.data_home.scoped(name),
            data_dirs: self.data_dirs.scoped(name),
            config_home: self.config_home.scoped(name),
            config_dirs: self.config_dirs.scoped(name),
            cache_home: self.cache_home.scoped(name),
            runtime_dir: self.runtime_dir.as_ref().map(|dir| dir.scoped(name)),
        }
    }
}

fn combined(home: &BasePath, dirs: &BasePaths) -> BasePaths {
    std::iter::once(home.clone())
        .chain(dirs.iter().cloned())
        .collect()
}

/// Base directories of the current process, resolved on first call.
///
/// Later changes to the process environment are not observed. Prefer [`Xdg::from_env`] where the
/// environment should be explicit.
pub fn global() -> Result<&'static Xdg, XdgError> {
    static GLOBAL: OnceLock<Result<Xdg, XdgError>> = OnceLock::new();
    GLOBAL.get_or_init(Xdg::new).as_ref().map_err(Clone::clone)
}
