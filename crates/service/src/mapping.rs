//! Conversion between storage rows and transfer objects.
//!
//! Profiles are plain values handed to each service, so callers and tests
//! can supply their own.

/// Storage row (or partial view) into a transfer object.
pub trait Mapping<S, D> {
    fn map(&self, source: &S) -> D;
}

/// Copy the writable fields of a request onto a storage row.
pub trait Apply<R, E> {
    fn apply(&self, request: &R, target: &mut E);
}
