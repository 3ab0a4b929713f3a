/// Errors surfaced by the codec.
///
/// Every parse, build and mutate operation is total; the only failure is
/// naming a character set that cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The label does not name a character set known to the encoding table
    #[error("unsupported charset: {label:?}")]
    UnsupportedCharset { label: String },
}

/// Result type for charset resolution
pub type Result<T> = core::result::Result<T, Error>;
