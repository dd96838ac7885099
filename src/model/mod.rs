//! Snippet data shapes that cross the API boundary

mod expiry;
mod format;
mod text;

pub use expiry::{Expiry, ExpiryUnit, MAX_EXPIRY_VALUE};
pub use format::Format;
pub use text::{TextData, TextRecord, TextResponse};
