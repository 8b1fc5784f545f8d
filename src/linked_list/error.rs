use thiserror::Error;

/// Non-fatal outcomes of list operations that search for a node.
///
/// The list is left exactly as it was whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// `add_after` found no node holding the anchor value.
    #[error("anchor node not found, nothing was inserted")]
    AnchorNotFound,
    /// `remove` found no node holding the requested value.
    #[error("node not found, nothing was removed")]
    NotFound,
}
