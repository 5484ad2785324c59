//! Path prefix construction and joining.
//!
//! This module provides the [`PathPrefix`] value type, which wraps a base
//! text and a separator and builds paths under that base:
//! - Absolute joins that always carry exactly one leading separator
//! - Relative joins that never carry a leading separator
//! - Duplicate-separator collapsing with the `"scheme://"` carve-out

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::normalize;

fn default_separator() -> String {
    PathPrefix::DEFAULT_SEPARATOR.to_string()
}

/// A prefix for building paths under a fixed base.
///
/// The base text is stored exactly as provided; normalization happens in the
/// join operations, never at construction. Equality, ordering, and hashing
/// consider only the base text, so two prefixes with the same base but
/// different separators compare equal, and a prefix compares directly
/// against plain strings.
///
/// # Examples
///
/// ```
/// use path_prefix::PathPrefix;
///
/// let admin = PathPrefix::new("/admin");
/// assert_eq!(admin.join(["users"]), "/admin/users");
/// assert_eq!(admin.relative_join(["users"]), "admin/users");
///
/// let underscore = PathPrefix::new("/admin").with_separator("_");
/// assert_eq!(admin, underscore);
/// assert_eq!(admin, "/admin");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathPrefix {
    #[serde(default)]
    base: String,
    #[serde(default = "default_separator")]
    separator: String,
}

impl PathPrefix {
    /// The separator used when none is configured.
    pub const DEFAULT_SEPARATOR: &str = "/";

    /// Creates a prefix over the given base text with the default separator.
    ///
    /// The base is kept verbatim, leading separators and all.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_prefix::PathPrefix;
    ///
    /// let prefix = PathPrefix::new("posts");
    /// assert_eq!(prefix.as_str(), "posts");
    /// assert_eq!(prefix.separator(), "/");
    /// ```
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            separator: Self::DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Replaces the separator used by join operations.
    ///
    /// An empty separator glues fragments together with nothing between
    /// them, and leaves nothing to collapse or strip.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_prefix::PathPrefix;
    ///
    /// let prefix = PathPrefix::new("posts").with_separator("_");
    /// assert_eq!(prefix.join(["new"]), "_posts_new");
    /// ```
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Joins the tokens onto the base and returns an absolute path.
    ///
    /// The base and tokens are glued with the configured separator. Runs of
    /// the separator collapse to a single occurrence, except after a colon,
    /// where `"scheme://"` markers keep their double. The result always
    /// begins with exactly one separator; the stored base is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_prefix::PathPrefix;
    ///
    /// let posts = PathPrefix::new("/posts");
    /// assert_eq!(posts.join(["new"]), "/posts/new");
    /// assert_eq!(posts.join(["/new"]), "/posts/new");
    ///
    /// // A relative base still produces an absolute path.
    /// let relative = PathPrefix::new("posts");
    /// assert_eq!(relative.join(["new"]), "/posts/new");
    ///
    /// let myapp = PathPrefix::new("myapp");
    /// assert_eq!(
    ///     myapp.join(["/assets", "application.js"]),
    ///     "/myapp/assets/application.js"
    /// );
    /// ```
    #[must_use]
    pub fn join<I, S>(&self, tokens: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let relative = self.glue_and_relativize(tokens, &self.separator);
        let joined = normalize::absolutize(relative, &self.separator);
        log::trace!("Joined under {:?}: {joined:?}", self.base);
        joined
    }

    /// Joins the tokens onto the base without forcing a leading separator.
    ///
    /// Runs of the separator collapse exactly as in [`join`](Self::join),
    /// and a leading separator is stripped rather than added, so the result
    /// never begins with the separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_prefix::PathPrefix;
    ///
    /// let posts = PathPrefix::new("posts");
    /// assert_eq!(posts.relative_join(["new"]), "posts/new");
    ///
    /// // The colon carve-out keeps URL authority markers intact.
    /// let feed = PathPrefix::new("http://example.com");
    /// assert_eq!(feed.relative_join(["feed.xml"]), "http://example.com/feed.xml");
    /// ```
    #[must_use]
    pub fn relative_join<I, S>(&self, tokens: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.glue_and_relativize(tokens, &self.separator)
    }

    /// Joins the tokens onto the base with an explicitly supplied separator.
    ///
    /// The stored separator is ignored for this call. Passing `None` is an
    /// error; use [`relative_join`](Self::relative_join) to join with the
    /// configured separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `separator` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_prefix::PathPrefix;
    ///
    /// let posts = PathPrefix::new("posts");
    /// let joined = posts.relative_join_with(["new"], Some("_")).unwrap();
    /// assert_eq!(joined, "posts_new");
    ///
    /// assert!(posts.relative_join_with(["new"], None).is_err());
    /// ```
    pub fn relative_join_with<I, S>(&self, tokens: I, separator: Option<&str>) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let separator = separator.ok_or_else(|| Error::InvalidArgument {
            argument: "separator".to_string(),
            reason: "must be present".to_string(),
        })?;
        let joined = self.glue_and_relativize(tokens, separator);
        log::trace!("Joined under {:?} with separator {separator:?}: {joined:?}", self.base);
        Ok(joined)
    }

    /// Returns the base text, exactly as provided at construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_prefix::PathPrefix;
    ///
    /// let prefix = PathPrefix::new("/posts/");
    /// assert_eq!(prefix.as_str(), "/posts/");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Returns the separator used by join operations.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Consumes the prefix and returns the base text.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_prefix::PathPrefix;
    ///
    /// let prefix = PathPrefix::new("/posts");
    /// assert_eq!(prefix.into_string(), "/posts");
    /// ```
    #[must_use]
    pub fn into_string(self) -> String {
        self.base
    }

    /// Glue the base and tokens with the separator, then relativize.
    fn glue_and_relativize<I, S>(&self, tokens: I, separator: &str) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut glued = self.base.clone();
        for token in tokens {
            glued.push_str(separator);
            glued.push_str(token.as_ref());
        }
        normalize::relativize(&glued, separator)
    }
}

impl Default for PathPrefix {
    fn default() -> Self {
        Self::new("")
    }
}

// Equality, ordering, and hashing all delegate to the base text; the
// separator is join configuration, not identity. The `Borrow<str>` impl
// requires all three to agree with the borrowed `str`.

impl PartialEq for PathPrefix {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl Eq for PathPrefix {}

impl PartialOrd for PathPrefix {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathPrefix {
    fn cmp(&self, other: &Self) -> Ordering {
        self.base.cmp(&other.base)
    }
}

impl Hash for PathPrefix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialEq<str> for PathPrefix {
    fn eq(&self, other: &str) -> bool {
        self.base == other
    }
}

impl PartialEq<&str> for PathPrefix {
    fn eq(&self, other: &&str) -> bool {
        self.base == *other
    }
}

impl PartialEq<String> for PathPrefix {
    fn eq(&self, other: &String) -> bool {
        self.base == *other
    }
}

impl PartialEq<PathPrefix> for str {
    fn eq(&self, other: &PathPrefix) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<PathPrefix> for &str {
    fn eq(&self, other: &PathPrefix) -> bool {
        *self == other.as_str()
    }
}

impl PartialEq<PathPrefix> for String {
    fn eq(&self, other: &PathPrefix) -> bool {
        self == other.as_str()
    }
}

impl Borrow<str> for PathPrefix {
    fn borrow(&self) -> &str {
        &self.base
    }
}

impl AsRef<str> for PathPrefix {
    fn as_ref(&self) -> &str {
        &self.base
    }
}

impl From<&str> for PathPrefix {
    fn from(base: &str) -> Self {
        Self::new(base)
    }
}

impl From<String> for PathPrefix {
    fn from(base: String) -> Self {
        Self::new(base)
    }
}

impl fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}
