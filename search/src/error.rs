//! Typed search errors.
//!
//! `SearchError` represents internal-consistency failures only. Running out
//! of frontier without reaching a goal is a normal outcome and is expressed
//! via [`crate::search::TerminationReason::FrontierExhausted`].

/// Fatal failure raised by the problem contract, the frontier, or the driver.
///
/// None of these occur for a well-formed problem; when they do they
/// propagate to the caller and the search is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The problem was asked to apply an action its own `actions` would not offer.
    #[error("invalid action: {detail}")]
    InvalidAction { detail: String },
    /// `pop_min` on an empty frontier.
    #[error("pop from empty frontier")]
    EmptyFrontier,
    /// `lookup`/`remove` for a state with no frontier entry.
    #[error("state not in frontier: {state}")]
    KeyNotFound { state: String },
    /// `insert` for a state that already has a frontier entry.
    #[error("state already in frontier: {state}")]
    DuplicateState { state: String },
}
