//! Canonical project names used as the registry's uniqueness key.

use std::fmt;
use std::path::{Component, Path};

/// The canonical name of a project.
///
/// Names are lower-cased once, at construction, so comparisons downstream
/// are plain string equality.
///
/// `Unknown` never compares equal to anything, itself included. This forces
/// callers to resolve an identity (usually via [`Identity::deduce_from_path`])
/// before using it as a key. For that reason `Identity` implements
/// `PartialEq` but deliberately not `Eq` or `Hash`.
#[derive(Debug, Clone)]
pub enum Identity {
    /// A resolved, lower-cased project name
    Known(Name),
    /// No name was supplied
    Unknown,
}

/// A lower-cased project name. Only [`Identity::new`] can build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Identity {
    /// Build an identity from optional user or stored input.
    ///
    /// Absent or empty input yields [`Identity::Unknown`].
    pub fn new(input: Option<&str>) -> Self {
        match input {
            Some(name) if !name.is_empty() => Self::Known(Name(name.to_lowercase())),
            _ => Self::Unknown,
        }
    }

    /// Shorthand for `Identity::new(Some(name))`.
    pub fn from_name(name: &str) -> Self {
        Self::new(Some(name))
    }

    /// Derive an identity from the last component of a path.
    ///
    /// Trailing separators are ignored (`/code/demo/` yields `demo`). A path
    /// with no final named component (the filesystem root, an empty path,
    /// or one ending in `..`) yields [`Identity::Unknown`] rather than a
    /// degenerate name.
    pub fn deduce_from_path(path: &Path) -> Self {
        match path.components().next_back() {
            Some(Component::Normal(name)) => Self::from_name(&name.to_string_lossy()),
            _ => Self::Unknown,
        }
    }

    /// Whether this identity carries a name.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// The stored name, if known.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Known(name) => Some(name.as_str()),
            Self::Unknown => None,
        }
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Known(a), Self::Known(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(name) => write!(f, "{}", name),
            Self::Unknown => Ok(()),
        }
    }
}

impl From<&str> for Identity {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
