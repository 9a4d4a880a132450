//! Paths to fields in nested data.
//!
//! [`FieldPath`] locates a value inside a nested form, e.g.
//! `shipping.items[2].qty`. Paths are produced when flattening an
//! [`ErrorTree`](crate::ErrorTree) into per-field messages.

use std::fmt::{self, Display};

/// One step of a [`FieldPath`]: a named field or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field access (e.g. `email`).
    Field(String),
    /// A list index access (e.g. `[2]`).
    Index(usize),
}

/// A path to a field in nested data.
///
/// Paths are immutable; the `push` methods return extended copies so a shared
/// prefix can branch without copying state back out.
///
/// # Example
///
/// ```rust
/// use faultline::FieldPath;
///
/// let path = FieldPath::root()
///     .push_field("shipping")
///     .push_field("items")
///     .push_index(2)
///     .push_field("qty");
///
/// assert_eq!(path.to_string(), "shipping.items[2].qty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates an empty path naming the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
