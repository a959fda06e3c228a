use thiserror::Error;

use crate::statistics::Statistics;

/// Error produced when a search fails.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("No search result found after generating {} nodes", .0.nodes_expanded)]
    NoResultFound(Statistics),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
