use searcher::SearchError;
use thiserror::Error;

use crate::topology::Offset;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Not a permutation of 0-8: {0:?}")]
    InvalidLayout(Vec<u8>),

    #[error("The blank at position {0} can not move by {1}")]
    IllegalMove(usize, Offset),

    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),

    #[error("Unknown frontier implementation: {0}")]
    UnknownFrontier(String),

    #[error("Unknown closed list implementation: {0}")]
    UnknownClosed(String),

    #[error(transparent)]
    Search(#[from] SearchError),
}

pub type Result<T> = ::std::result::Result<T, PuzzleError>;
