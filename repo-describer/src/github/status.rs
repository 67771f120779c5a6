//! Description update status types.

/// Result of a description update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionUpdate {
    /// GitHub accepted the new description.
    Updated,

    /// GitHub answered with a non-200 status.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, for the operator.
        body: String,
    },
}
