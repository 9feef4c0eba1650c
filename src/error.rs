//! Errors reported by [`OrderedTree`](crate::OrderedTree).

/// Shorthand for results whose error is this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The ways a tree operation can fail. Inserting a duplicate key or removing
/// an absent one are not failures; those calls simply leave the tree as it was.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An operation that needs at least one key was called on an empty tree.
    #[error("`{op}` called on an empty tree")]
    EmptyTree {
        /// Name of the operation that was called.
        op: &'static str,
    },
}
