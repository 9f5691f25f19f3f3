//! Error type for platform operations.
//!
//! None of these reach the host: the controller logs them and carries on.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("editable surface is not mounted")]
    NotMounted,
    #[error("node is not an element")]
    NotAnElement,
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("could not read file: {0}")]
    File(String),
}

