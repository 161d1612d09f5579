use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised by strict variant parsing.
///
/// Rendering never fails on an unknown key; strict parsing exists for development-time
/// validation of props that arrive as text (catalogs, query strings, fixtures).
pub enum VariantError {
    /// The key is not part of the closed enumeration declared for `kind`.
    #[error("unknown {kind} `{value}` (expected one of: {expected})")]
    Unknown {
        /// Enumeration name, for example `badge variant`.
        kind: &'static str,
        /// Rejected caller input.
        value: String,
        /// Comma-separated list of accepted tokens.
        expected: String,
    },
}
