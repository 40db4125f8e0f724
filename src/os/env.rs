//! Snapshot of environmental variables.
//!
//! Base directories are resolved from an [`Env`] rather than from [`std::env`] directly, so the
//! same resolution can run against the live process environment or against a hand-built map.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Immutable snapshot of environmental variables.
///
/// On Windows variable names are case-insensitive, so lookups that miss an exact match fall back
/// to an ASCII-uppercased copy of the keys.
#[derive(Debug, Clone)]
pub struct Env {
    vars: HashMap<OsString, OsString>,

    normalised_vars: HashMap<OsString, OsString>,
}

/// Errors encountered when getting environmental variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvStrError {
    /// Variable `$Missing.0` is not set.
    #[error("there is no environmental variable `${0:?}`")]
    Missing(OsString),

    /// Variable `$NonUTF8.0` is set, but is not an UTF-8 string.
    #[error("environmental variable `${0:?}` is not an UTF-8 string")]
    NonUTF8(OsString),
}

impl Env {
    /// Snapshot the current process environment, as reported by [`std::env::vars_os`].
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create [`Env`] using `vars` as the existing environmental variables.
    ///
    /// ```rust
    /// use basedirs::os::env::Env;
    /// use std::collections::HashMap;
    /// use std::ffi::OsString;
    ///
    /// let env = Env::new_from(HashMap::from([(
    ///     OsString::from("HOME"),
    ///     OsString::from("/home/alice"),
    /// )]));
    /// assert_eq!(env.get("HOME"), Ok("/home/alice"));
    /// ```
    pub fn new_from(vars: HashMap<OsString, OsString>) -> Self {
        let normalised_vars = vars
            .iter()
            .map(|(key, value)| (Env::normalize_key(key), value.clone()))
            .collect();
        Self {
            vars,
            normalised_vars,
        }
    }

    fn normalize_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }

    /// Get environmental variable pointed by `key`, without any encoding check.
    ///
    /// # Returns
    /// `None` variant indicates missing key, `Some`: existing key.
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.vars.get(key) {
            Some(value) => Some(value),
            None if cfg!(windows) => self
                .normalised_vars
                .get(&Env::normalize_key(key))
                .map(OsString::as_os_str),
            None => None,
        }
    }

    /// Get environmental variable pointed by `key` and convert it to UTF-8.
    ///
    /// # Returns
    /// `Ok` variant indicates existing UTF-8 variable, `Err` says why it could not be read. See
    /// [`EnvStrError`] for details.
    ///
    /// # Examples
    /// ```rust,no_run
    /// use basedirs::os::env::Env;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let env = Env::new();
    /// let _home = env.get("HOME")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvStrError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| EnvStrError::NonUTF8(key.to_os_string()))
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new_from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
