//! Errors returned by tree operations.

/// The value passed to [`Tree::delete`][crate::Tree::delete] is not stored in the tree. The tree
/// is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl std::fmt::Display for NotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "value is not present in the tree")
    }
}

impl std::error::Error for NotFound {}
