use thiserror::Error;

// CONFIG ERROR
// ================================================================================================

/// Errors raised while resolving benchmark parameters, before any timing work
/// begins. A trial that fails configuration never reports a timing result.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested variant name is not present in the registry.
    #[error("unknown hash variant `{0}`")]
    UnknownVariant(String),
    /// A variant with this name is already registered.
    #[error("hash variant `{0}` is already registered")]
    DuplicateVariant(&'static str),
}

// COMPUTATION ERROR
// ================================================================================================

/// An unexpected failure inside a hash invocation.
///
/// All built-in variants are infallible for arbitrary byte input, so this is
/// a defensive boundary for externally registered variants. It aborts the
/// current trial immediately: a partially accumulated result would be a
/// misleading measurement, and retrying would corrupt timing semantics.
#[derive(Debug, Error)]
#[error("hash variant `{variant}` failed after {completed} of {requested} repetitions: {reason}")]
pub struct ComputationError {
    /// Name of the variant that failed.
    pub variant: &'static str,
    /// Repetitions completed before the failure.
    pub completed: u64,
    /// Repetitions the trial run had requested.
    pub requested: u64,
    /// Variant-supplied description of the failure.
    pub reason: String,
}
