use thiserror::Error;

/// Errors that may occur when evaluating thermophysical properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The requested state is outside the provider's valid range.
    ///
    /// For example, a brine correlation fitted only up to 12% salinity.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The calculation failed due to a numerical or internal error.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
