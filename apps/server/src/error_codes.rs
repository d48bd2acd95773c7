//! Numeric error codes exposed by the API.
//!
//! These values are part of the public contract; clients switch on them.

/// The request body was missing entirely.
pub const EMPTY_REQUEST_BODY: u32 = 1001;

/// Generic processing failure.
pub const TAS_ERROR: u32 = 1003;

/// The request body could not be decoded, was not in the expected
/// envelope format, or declared an unsupported content type.
pub const INVALID_REQUEST_BODY: u32 = 1004;

/// The html payload failed structural validation.
pub const INVALID_HTML_CONTENT: u32 = 1005;
