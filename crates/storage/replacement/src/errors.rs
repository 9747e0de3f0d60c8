use thiserror::Error;

/// Errors raised by [`crate::ReplacementPolicy::choose_victim`].
#[derive(Debug, Error)]
pub enum ReplacementError {
    /// No page is currently tracked as eviction-eligible.
    #[error("no page is tracked by the replacement policy")]
    Empty,
}
