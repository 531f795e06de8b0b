use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// Expression text doesn't conform to the cron grammar.
    ///
    /// `expected` names the construct the parser was looking for and
    /// `position` is the 1-based character offset of the first character
    /// that didn't match it (one past the end if input was exhausted).
    #[error("expecting '{expected}' at position {position}")]
    MalformedExpression {
        /// Name of the expected grammar construct, i.e. `month value`.
        expected: &'static str,
        /// 1-based character offset of the failure.
        position: usize,
    },
}
