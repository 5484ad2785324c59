#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # path-prefix
//!
//! A library for joining path fragments under a fixed prefix.
//!
//! This library provides a prefix value type for building paths under a
//! fixed base. Fragments are glued with a configurable separator and
//! duplicate separators collapse, with `"scheme://"` markers kept intact.
//! Absolute joins anchor the result with exactly one leading separator.
//!
//! ## Core Types
//!
//! - [`PathPrefix`]: The prefix value type and its join operations
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use path_prefix::PathPrefix;
//!
//! // Absolute joins always carry exactly one leading separator
//! let posts = PathPrefix::new("/posts");
//! assert_eq!(posts.join(["new", "edit"]), "/posts/new/edit");
//!
//! // Relative joins never do
//! let posts = PathPrefix::new("posts");
//! assert_eq!(posts.relative_join(["new"]), "posts/new");
//!
//! // Separators are configurable
//! let scoped = PathPrefix::new("reports").with_separator("::");
//! assert_eq!(scoped.join(["2024", "q1"]), "::reports::2024::q1");
//! ```

pub mod error;
mod normalize;
pub mod prefix;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use prefix::PathPrefix;
