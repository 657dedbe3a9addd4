//! Uniform status-plus-payload result wrapper.

use serde::Serialize;

/// Immutable pairing of a numeric status code with a response payload.
///
/// Every task store operation wraps its result in an envelope so the
/// external interface layer has a single shape to unwrap. The envelope is
/// purely a transport shape; it holds no behaviour beyond its two fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    status_code: u16,
    body: T,
}

impl<T> ResponseEnvelope<T> {
    /// Creates an envelope from a status code and payload.
    #[must_use]
    pub const fn new(status_code: u16, body: T) -> Self {
        Self { status_code, body }
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns a reference to the payload.
    #[must_use]
    pub const fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the envelope, returning the payload.
    #[must_use]
    pub fn into_body(self) -> T {
        self.body
    }
}
