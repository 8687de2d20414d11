//! Named hash-function variants and the registry that resolves them.
//!
//! Every variant exposes the same capability: reduce an arbitrary byte
//! sequence to a `u64`. Variants whose native digest is narrower than 64
//! bits define their own widening rule as part of their identity; the
//! built-ins zero-extend 32-bit results and truncate wider digests to their
//! low 64 bits.

use crate::error::ConfigError;

mod fast;
mod md5;
mod murmur;

pub use fast::{FastHash32, FastHash64};
pub use md5::Md5Digest;
pub use murmur::{Murmur3_128, Murmur3_32};


// HASH VARIANT
// ================================================================================================

/// Boxed error returned by a fallible hash invocation.
pub type VariantError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A named, pluggable hash function.
///
/// Implementations must be pure functions of the input bytes: no retained
/// seed state, no side effects, identical output for identical input within
/// a process. `Send + Sync` is required so that isolated trials may run on
/// separate worker threads without coordination.
pub trait HashVariant: Send + Sync {
    /// Name under which the variant is selected by an external runner.
    fn name(&self) -> &'static str;

    /// Computes a 64-bit summary of `bytes`. Must accept empty input.
    fn compute(&self, bytes: &[u8]) -> u64;

    /// Fallible entry point used by checked trial runs.
    ///
    /// The built-in variants are infallible, so the default simply defers to
    /// [`Self::compute`]. Externally registered variants that can fail
    /// (e.g. ones dispatching to hardware offload) override this instead.
    fn try_compute(&self, bytes: &[u8]) -> Result<u64, VariantError> {
        Ok(self.compute(bytes))
    }
}

impl std::fmt::Debug for dyn HashVariant + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// VARIANT REGISTRY
// ================================================================================================

/// An ordered, name-keyed set of hash variants.
///
/// The registry is the only lookup surface exposed to external runners:
/// resolution failures surface as [`ConfigError`] before any input data is
/// allocated or any timing begins. Iteration order is registration order.
pub struct VariantRegistry {
    variants: Vec<Box<dyn HashVariant>>,
}

impl VariantRegistry {
    /// Returns an empty registry.
    pub fn new() -> Self {
        Self { variants: Vec::new() }
    }

    /// Returns a registry pre-populated with the five built-in variants.
    pub fn with_builtins() -> Self {
        Self {
            variants: vec![
                Box::new(FastHash32) as Box<dyn HashVariant>,
                Box::new(FastHash64),
                Box::new(Murmur3_32),
                Box::new(Murmur3_128),
                Box::new(Md5Digest),
            ],
        }
    }

    /// Adds a variant under its own name.
    ///
    /// # Errors
    /// Returns [`ConfigError::DuplicateVariant`] if the name is taken.
    pub fn register(&mut self, variant: Box<dyn HashVariant>) -> Result<(), ConfigError> {
        if self.variants.iter().any(|v| v.name() == variant.name()) {
            return Err(ConfigError::DuplicateVariant(variant.name()));
        }
        self.variants.push(variant);
        Ok(())
    }

    /// Returns the registered variant names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variants.iter().map(|v| v.name())
    }

    /// Looks up a variant by name.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownVariant`] if no variant carries `name`.
    pub fn resolve(&self, name: &str) -> Result<&dyn HashVariant, ConfigError> {
        self.variants
            .iter()
            .find(|v| v.name() == name)
            .map(|v| v.as_ref())
            .ok_or_else(|| ConfigError::UnknownVariant(name.to_string()))
    }
}

impl Default for VariantRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
