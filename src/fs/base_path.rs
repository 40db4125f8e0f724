use std::{
    fmt, fs, io,
    ops::Deref,
    path::{Component, MAIN_SEPARATOR, Path, PathBuf, is_separator},
};

use glob::{MatchOptions, Pattern};
use thiserror::Error;
use tracing::trace;

/// Returns whether `path` can be used as a [`BasePath`].
///
/// A valid path is a non-empty, absolute path. The path need not exist.
///
/// ```rust
/// # use basedirs::fs::base_path::is_valid;
/// assert!(!is_valid(""));
/// assert!(!is_valid("relative/dir"));
/// ```
pub fn is_valid(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Error returned when converting an empty or relative path into a [`BasePath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{}` is not a non-empty absolute path", .0.display())]
pub struct InvalidPath(pub PathBuf);

/// Errors encountered by [`BasePath::glob`] and [`BasePaths::glob`].
#[derive(Debug, Error)]
pub enum MatchError {
    /// Pattern is malformed, eg. has an unclosed `[`.
    #[error("invalid glob pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Directory entry could not be read while matching.
    #[error("failed to read `{}` while matching", .0.path().display())]
    Io(#[from] glob::GlobError),

    /// Base path can't be expressed as a glob pattern, since it is not an UTF-8 string.
    #[error("path `{}` is not an UTF-8 string", .0.display())]
    NonUtf8(PathBuf),
}

/// Joins `segments` onto `base` without touching the filesystem.
///
/// `.` is dropped, `..` removes the previous normal component, and roots or prefixes inside
/// `segments` are ignored, so a segment is always appended and never replaces `base`.
fn join_lexically<S: AsRef<Path>>(base: &Path, segments: impl IntoIterator<Item = S>) -> PathBuf {
    let mut joined = PathBuf::new();
    for component in base.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => joined.push(component),
            _ => push_component(&mut joined, component),
        }
    }
    for segment in segments {
        for component in segment.as_ref().components() {
            push_component(&mut joined, component);
        }
    }
    joined
}

fn push_component(joined: &mut PathBuf, component: Component<'_>) {
    match component {
        Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
        Component::ParentDir => match joined.components().next_back() {
            Some(Component::Normal(_)) => {
                joined.pop();
            }
            // `/..` is `/`.
            Some(Component::RootDir | Component::Prefix(_)) => {}
            _ => joined.push(".."),
        },
        Component::Normal(name) => joined.push(name),
    }
}

/// Collapses runs of `*` outside of `[...]` into a single `*`, so `**` never recurses.
///
/// Returns the collapsed pattern, and for each of its chars (plus one past the end) the index of
/// the char in `pattern` it came from.
fn collapse_stars(pattern: &str) -> (String, Vec<usize>) {
    let chars: Vec<char> = pattern.chars().collect();
    let mut collapsed = String::with_capacity(pattern.len());
    let mut origins = Vec::with_capacity(chars.len() + 1);
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                collapsed.push('*');
                origins.push(i);
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => {
                // `]` right after `[` or `[!` is a member, not the end of the class.
                let mut first = i + 1;
                if chars.get(first) == Some(&'!') {
                    first += 1;
                }
                let close = chars
                    .get(first + 1..)
                    .and_then(|rest| rest.iter().position(|&c| c == ']'))
                    .map(|pos| first + 1 + pos);
                let end = close.unwrap_or(i);
                for (offset, &c) in chars[i..=end].iter().enumerate() {
                    collapsed.push(c);
                    origins.push(i + offset);
                }
                i = end;
            }
            c => {
                collapsed.push(c);
                origins.push(i);
            }
        }
        i += 1;
    }
    origins.push(chars.len());
    (collapsed, origins)
}

/// A single valid path: non-empty and absolute.
///
/// Validity is purely syntactic, a [`BasePath`] may point to nothing.
///
/// ```rust
/// # use basedirs::fs::BasePath;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let share = BasePath::new("/usr/share").ok_or("invalid path")?;
/// assert_eq!(share.join(["fonts", "conf.d"]), std::path::Path::new("/usr/share/fonts/conf.d"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BasePath(PathBuf);

impl BasePath {
    /// Returns [`Some`] if `path` is valid, see [`is_valid`].
    pub fn new(path: impl Into<PathBuf>) -> Option<Self> {
        let path: PathBuf = path.into();
        is_valid(&path).then_some(Self(path))
    }

    /// Returns `path` if it is valid, `default` otherwise.
    ///
    /// `default` is returned as is.
    pub fn with_default(path: impl Into<PathBuf>, default: BasePath) -> Self {
        Self::new(path).unwrap_or(default)
    }

    /// Wraps a path known to be valid, like a hardcoded default.
    pub(crate) fn trusted(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns a new [`BasePath`] with `name` appended as the last component.
    pub(crate) fn scoped(&self, name: impl AsRef<Path>) -> Self {
        // Joining keeps the root of `self`, so the result is still absolute.
        Self(self.join([name]))
    }

    /// Borrow the underlying [`Path`].
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Unwrap into the underlying [`PathBuf`].
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    /// Returns the path joined with additional `segments`.
    ///
    /// This is a purely lexical operation, see [`BasePath`] docs for an example.
    pub fn join<S: AsRef<Path>>(&self, segments: impl IntoIterator<Item = S>) -> PathBuf {
        join_lexically(&self.0, segments)
    }

    /// Searches for an existing file or directory at `segments` under the path.
    ///
    /// # Returns
    /// [`None`] if and only if [`std::fs::metadata`] reports
    /// [`ErrorKind::NotFound`](io::ErrorKind::NotFound). Other failures (eg. permission denied)
    /// don't prove absence, so the joined path is returned.
    pub fn find<S: AsRef<Path>>(&self, segments: impl IntoIterator<Item = S>) -> Option<PathBuf> {
        let file = self.join(segments);
        match fs::metadata(&file) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            _ => Some(file),
        }
    }

    /// Matches files or directories contained in the path.
    ///
    /// Uses shell syntax: `*`, `?` and `[...]`, none of which match a path separator. `**` is the
    /// same as `*`, it doesn't recurse. Metacharacters in the path itself are matched literally.
    ///
    /// # Returns
    /// Matches in alphabetical order, possibly empty. [`Err`] on malformed `pattern`, or if some
    /// directory entry could not be read. [`MatchError::Pattern`] reports the position of the
    /// offending char within `pattern`.
    ///
    /// ```rust,no_run
    /// # use basedirs::fs::BasePath;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let autostart = BasePath::new("/etc/xdg/autostart").ok_or("invalid path")?;
    /// for entry in autostart.glob("*.desktop")? {
    ///     println!("{}", entry.display());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, MatchError> {
        let root = self
            .0
            .to_str()
            .ok_or_else(|| MatchError::NonUtf8(self.0.clone()))?;
        let relative = pattern.trim_start_matches(is_separator);
        let skipped = pattern.chars().count() - relative.chars().count();
        let (relative, origins) = collapse_stars(relative);
        let invalid = |source: glob::PatternError| MatchError::Pattern {
            pattern: pattern.to_owned(),
            source,
        };
        // The escaped root is always valid, so this catches every pattern error.
        Pattern::new(&relative).map_err(|mut source| {
            source.pos = skipped + origins.get(source.pos).copied().unwrap_or(source.pos);
            invalid(source)
        })?;

        let mut full = Pattern::escape(root);
        if !full.ends_with(is_separator) {
            full.push(MAIN_SEPARATOR);
        }
        full.push_str(&relative);

        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };
        let entries = glob::glob_with(&full, options).map_err(invalid)?;
        entries
            .collect::<Result<Vec<_>, _>>()
            .map_err(MatchError::from)
    }
}

impl AsRef<Path> for BasePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.display(), f)
    }
}

impl From<BasePath> for PathBuf {
    fn from(value: BasePath) -> Self {
        value.0
    }
}

impl TryFrom<PathBuf> for BasePath {
    type Error = InvalidPath;

    fn try_from(value: PathBuf) -> Result<Self, Self::Error> {
        if is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidPath(value))
        }
    }
}

impl TryFrom<String> for BasePath {
    type Error = InvalidPath;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PathBuf::from(value).try_into()
    }
}

impl TryFrom<&str> for BasePath {
    type Error = InvalidPath;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        PathBuf::from(value).try_into()
    }
}

/// Ordered list of [`BasePath`]s, in preference order.
///
/// Lookups visit the paths in order, so earlier paths take precedence. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BasePaths(Vec<BasePath>);

impl BasePaths {
    /// Wrap `paths`, keeping their order.
    pub fn new(paths: Vec<BasePath>) -> Self {
        Self(paths)
    }

    /// Returns all valid entries of `paths`, in their original order.
    ///
    /// Invalid entries are dropped silently. If no entry is valid, `default` is returned as is.
    ///
    /// ```rust
    /// # use basedirs::fs::{BasePath, BasePaths};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let default: BasePaths = [BasePath::try_from("/etc/xdg")?].into_iter().collect();
    /// let paths = BasePaths::with_default("relative:/opt/xdg".split(':'), default.clone());
    /// assert_eq!(paths.len(), 1);
    ///
    /// let paths = BasePaths::with_default("".split(':'), default.clone());
    /// assert_eq!(paths, default);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_default<S: Into<PathBuf>>(
        paths: impl IntoIterator<Item = S>,
        default: BasePaths,
    ) -> Self {
        let valid: Vec<_> = paths
            .into_iter()
            .filter_map(|path| {
                let path: PathBuf = path.into();
                if is_valid(&path) {
                    Some(BasePath(path))
                } else {
                    trace!(path = %path.display(), "skipping invalid search path");
                    None
                }
            })
            .collect();

        if valid.is_empty() {
            default
        } else {
            Self(valid)
        }
    }

    /// Returns a new list with `name` appended to every path, preserving order.
    pub(crate) fn scoped(&self, name: impl AsRef<Path>) -> Self {
        let name = name.as_ref();
        self.iter().map(|path| path.scoped(name)).collect()
    }

    /// Iterate over the paths in preference order.
    pub fn iter(&self) -> std::slice::Iter<'_, BasePath> {
        self.0.iter()
    }

    /// Returns every path joined with additional `segments`, one entry per path.
    pub fn join<S: AsRef<Path>>(&self, segments: impl IntoIterator<Item = S>) -> Vec<PathBuf> {
        let segments: Vec<S> = segments.into_iter().collect();
        self.iter().map(|path| path.join(&segments)).collect()
    }

    /// Searches for existing files or directories at `segments` under each path.
    ///
    /// # Returns
    /// Found paths in list order. Paths, where [`BasePath::find`] returns [`None`], are omitted.
    pub fn find<S: AsRef<Path>>(&self, segments: impl IntoIterator<Item = S>) -> Vec<PathBuf> {
        let segments: Vec<S> = segments.into_iter().collect();
        self.iter()
            .filter_map(|path| path.find(&segments))
            .collect()
    }

    /// Matches `pattern` under each path, see [`BasePath::glob`].
    ///
    /// # Returns
    /// Matches concatenated in list order. The first error aborts the whole search.
    pub fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, MatchError> {
        let mut matches = Vec::new();
        for path in self.iter() {
            matches.extend(path.glob(pattern)?);
        }
        Ok(matches)
    }
}

impl Deref for BasePaths {
    type Target = [BasePath];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<BasePath> for BasePaths {
    fn from_iter<I: IntoIterator<Item = BasePath>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for BasePaths {
    type Item = BasePath;
    type IntoIter = std::vec::IntoIter<BasePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BasePaths {
    type Item = &'a BasePath;
    type IntoIter = std::slice::Iter<'a, BasePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use claim::{assert_err, assert_matches, assert_none, assert_ok, assert_some};
    use tempfile::tempdir;

    fn base(path: &str) -> BasePath {
        BasePath::new(path).expect("valid in tests")
    }

    fn bases(paths: &[&str]) -> BasePaths {
        paths.iter().copied().map(base).collect()
    }

    fn temp_base(dir: &tempfile::TempDir) -> BasePath {
        BasePath::new(dir.path()).expect("tempdir is absolute")
    }

    #[test]
    fn validity() {
        assert!(!is_valid(""));
        assert!(!is_valid("relative"));
        assert!(!is_valid("./relative"));
        assert!(!is_valid("../relative"));
        assert!(!is_valid("~/relative"));
        assert!(is_valid("/"));
        assert!(is_valid("/usr/share"));
        assert!(is_valid("/does/not/exist"));
    }

    #[test]
    fn construct() {
        assert_none!(BasePath::new(""));
        assert_none!(BasePath::new("relative/bad"));
        assert_eq!(assert_some!(BasePath::new("/etc/xdg")).as_path(), Path::new("/etc/xdg"));

        assert_eq!(
            BasePath::try_from("relative"),
            Err(InvalidPath(PathBuf::from("relative")))
        );
        assert_ok!(BasePath::try_from(String::from("/opt")));
    }

    #[test]
    fn with_default() {
        let default = base("/fallback");
        assert_eq!(BasePath::with_default("/valid", default.clone()), base("/valid"));
        assert_eq!(BasePath::with_default("", default.clone()), default);
        assert_eq!(BasePath::with_default("not/absolute", default.clone()), default);
    }

    #[test]
    fn join() {
        let share = base("/usr/share");
        assert_eq!(share.join(["myapp"]), Path::new("/usr/share/myapp"));
        assert_eq!(share.join(["a", "b/c"]), Path::new("/usr/share/a/b/c"));
        assert_eq!(share.join(Vec::<&str>::new()), Path::new("/usr/share"));
        assert_eq!(share.join(["", "."]), Path::new("/usr/share"));
        assert_eq!(share.join(["../lib"]), Path::new("/usr/lib"));
        // Absolute segments are appended, not substituted.
        assert_eq!(share.join(["/etc"]), Path::new("/usr/share/etc"));
        assert_eq!(base("/").join(["..", ".."]), Path::new("/"));
        assert_eq!(base("/a/./b/../c/").join(["d"]), Path::new("/a/c/d"));
    }

    #[test]
    fn find_hit_and_miss() {
        let tmp = tempdir().expect("needed for tests");
        std::fs::create_dir(tmp.path().join("myapp")).expect("needed for tests");
        std::fs::write(tmp.path().join("myapp/settings.json"), "{}").expect("needed for tests");
        let path = temp_base(&tmp);

        assert_eq!(
            path.find(["myapp", "settings.json"]),
            Some(tmp.path().join("myapp/settings.json"))
        );
        assert_eq!(path.find(["myapp"]), Some(tmp.path().join("myapp")));
        assert_none!(path.find(["myapp", "missing.json"]));
        assert_none!(path.find(["missing", "settings.json"]));
    }

    #[test]
    fn glob_matches_in_order() {
        let tmp = tempdir().expect("needed for tests");
        for name in ["b.txt", "a.txt", "c.md"] {
            std::fs::write(tmp.path().join(name), "").expect("needed for tests");
        }
        let path = temp_base(&tmp);

        let matches = assert_ok!(path.glob("*.txt"));
        assert_eq!(matches, vec![tmp.path().join("a.txt"), tmp.path().join("b.txt")]);

        let matches = assert_ok!(path.glob("?.md"));
        assert_eq!(matches, vec![tmp.path().join("c.md")]);
    }

    #[test]
    fn glob_star_does_not_cross_separator() {
        let tmp = tempdir().expect("needed for tests");
        std::fs::create_dir(tmp.path().join("sub")).expect("needed for tests");
        std::fs::write(tmp.path().join("sub/x.conf"), "").expect("needed for tests");
        let path = temp_base(&tmp);

        assert_eq!(assert_ok!(path.glob("*.conf")), Vec::<PathBuf>::new());
        assert_eq!(
            assert_ok!(path.glob("*/*.conf")),
            vec![tmp.path().join("sub/x.conf")]
        );
    }

    #[test]
    fn glob_double_star_does_not_recurse() {
        let tmp = tempdir().expect("needed for tests");
        std::fs::create_dir(tmp.path().join("sub")).expect("needed for tests");
        std::fs::write(tmp.path().join("sub/x.conf"), "").expect("needed for tests");
        std::fs::write(tmp.path().join("y.conf"), "").expect("needed for tests");
        std::fs::write(tmp.path().join("abc"), "").expect("needed for tests");
        let path = temp_base(&tmp);

        assert_eq!(
            assert_ok!(path.glob("**/*.conf")),
            vec![tmp.path().join("sub/x.conf")]
        );
        assert_eq!(assert_ok!(path.glob("a**")), vec![tmp.path().join("abc")]);
        assert_eq!(
            assert_ok!(path.glob("***.conf")),
            vec![tmp.path().join("y.conf")]
        );
    }

    #[test]
    fn glob_class_keeps_stars() {
        let tmp = tempdir().expect("needed for tests");
        std::fs::write(tmp.path().join("*"), "").expect("needed for tests");
        std::fs::write(tmp.path().join("x"), "").expect("needed for tests");
        let path = temp_base(&tmp);

        assert_eq!(assert_ok!(path.glob("[**]")), vec![tmp.path().join("*")]);
        assert_eq!(assert_ok!(path.glob("[]x]")), vec![tmp.path().join("x")]);
    }

    #[test]
    fn collapse_stars_maps_positions() {
        assert_eq!(collapse_stars("a**b"), ("a*b".to_owned(), vec![0, 1, 3, 4]));
        assert_eq!(collapse_stars("[**]*"), ("[**]*".to_owned(), vec![0, 1, 2, 3, 4, 5]));
        assert_eq!(collapse_stars("**["), ("*[".to_owned(), vec![0, 2, 3]));
    }

    #[test]
    fn glob_without_matches_is_empty() {
        let tmp = tempdir().expect("needed for tests");
        assert_eq!(assert_ok!(temp_base(&tmp).glob("*.nothing")), Vec::<PathBuf>::new());
        assert_eq!(
            assert_ok!(base("/does/not/exist/anywhere").glob("*")),
            Vec::<PathBuf>::new()
        );
    }

    #[test]
    fn glob_escapes_base_path() {
        let tmp = tempdir().expect("needed for tests");
        let weird = tmp.path().join("[weird]");
        std::fs::create_dir(&weird).expect("needed for tests");
        std::fs::write(weird.join("file"), "").expect("needed for tests");

        let path = assert_some!(BasePath::new(&weird));
        assert_eq!(assert_ok!(path.glob("*")), vec![weird.join("file")]);
    }

    #[test]
    fn glob_malformed_pattern() {
        let tmp = tempdir().expect("needed for tests");
        match assert_err!(temp_base(&tmp).glob("[")) {
            MatchError::Pattern { pattern, .. } => assert_eq!(pattern, "["),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn glob_pattern_error_position_is_relative_to_pattern() {
        let tmp = tempdir().expect("needed for tests");
        let path = temp_base(&tmp);
        for (pattern, pos) in [("[", 0), ("a[", 1), ("**[", 2), ("/x/[", 3)] {
            match assert_err!(path.glob(pattern)) {
                MatchError::Pattern { source, .. } => assert_eq!(source.pos, pos, "{pattern}"),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn glob_non_utf8_base() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let tmp = tempdir().expect("needed for tests");
        let dir = tmp.path().join(OsString::from_vec(b"\xff".to_vec()));
        std::fs::create_dir(&dir).expect("needed for tests");
        let path = assert_some!(BasePath::new(&dir));

        match assert_err!(path.glob("*")) {
            MatchError::NonUtf8(reported) => assert_eq!(reported, dir),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn glob_unreadable_directory() {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().expect("needed for tests");
        let locked = tmp.path().join("locked");
        std::fs::create_dir(&locked).expect("needed for tests");
        std::fs::set_permissions(&locked, Permissions::from_mode(0o000)).expect("needed for tests");

        // Privileged users can read the directory anyway.
        let readable = std::fs::read_dir(&locked).is_ok();
        let result = temp_base(&tmp).glob("*/*");
        std::fs::set_permissions(&locked, Permissions::from_mode(0o755)).expect("needed for tests");
        if readable {
            assert_ok!(result);
            return;
        }

        match assert_err!(result) {
            MatchError::Io(err) => assert_eq!(err.path(), locked.as_path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn list_with_default() {
        let default = bases(&["/usr/local/share", "/usr/share"]);

        let all_invalid = BasePaths::with_default(["", "relative", "./x"], default.clone());
        assert_eq!(all_invalid, default);

        let empty = BasePaths::with_default(Vec::<String>::new(), default.clone());
        assert_eq!(empty, default);

        let mixed = BasePaths::with_default(["/b", "bad", "/a", "/b"], default.clone());
        assert_eq!(mixed, bases(&["/b", "/a", "/b"]));
    }

    #[test]
    fn list_default_is_not_filtered() {
        let default = BasePaths::new(vec![BasePath::trusted("not/validated")]);
        assert_eq!(BasePaths::with_default(["bad"], default.clone()), default);
    }

    #[test]
    fn list_join() {
        let paths = bases(&["/etc/xdg", "/opt/xdg", "/etc/xdg"]);
        assert_eq!(
            paths.join(["myapp", "config.toml"]),
            vec![
                PathBuf::from("/etc/xdg/myapp/config.toml"),
                PathBuf::from("/opt/xdg/myapp/config.toml"),
                PathBuf::from("/etc/xdg/myapp/config.toml"),
            ]
        );
        assert!(BasePaths::default().join(["x"]).is_empty());
    }

    #[test]
    fn list_find_keeps_only_hits() {
        let dirs: Vec<_> = (0..3).map(|_| tempdir().expect("needed for tests")).collect();
        std::fs::write(dirs[1].path().join("settings.json"), "{}").expect("needed for tests");
        let paths: BasePaths = dirs.iter().map(temp_base).collect();

        assert_eq!(
            paths.find(["settings.json"]),
            vec![dirs[1].path().join("settings.json")]
        );
        assert!(paths.find(["missing.json"]).is_empty());
    }

    #[test]
    fn list_find_preserves_order() {
        let dirs: Vec<_> = (0..3).map(|_| tempdir().expect("needed for tests")).collect();
        for dir in [&dirs[2], &dirs[0]] {
            std::fs::write(dir.path().join("settings.json"), "{}").expect("needed for tests");
        }
        let paths: BasePaths = dirs.iter().map(temp_base).collect();

        assert_eq!(
            paths.find(["settings.json"]),
            vec![
                dirs[0].path().join("settings.json"),
                dirs[2].path().join("settings.json"),
            ]
        );
    }

    #[test]
    fn list_glob_concatenates_in_order() {
        let first = tempdir().expect("needed for tests");
        let second = tempdir().expect("needed for tests");
        std::fs::write(first.path().join("z.desktop"), "").expect("needed for tests");
        std::fs::write(second.path().join("a.desktop"), "").expect("needed for tests");
        std::fs::write(second.path().join("b.desktop"), "").expect("needed for tests");
        let paths: BasePaths = [temp_base(&second), temp_base(&first)].into_iter().collect();

        assert_eq!(
            assert_ok!(paths.glob("*.desktop")),
            vec![
                second.path().join("a.desktop"),
                second.path().join("b.desktop"),
                first.path().join("z.desktop"),
            ]
        );
    }

    #[test]
    fn list_glob_fails_fast() {
        let tmp = tempdir().expect("needed for tests");
        let paths: BasePaths = [temp_base(&tmp), base("/usr/share")].into_iter().collect();
        assert_matches!(assert_err!(paths.glob("[")), MatchError::Pattern { .. });
    }
}
