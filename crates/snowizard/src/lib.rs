#![doc = include_str!("../README.md")]

mod client;
pub mod decode;
mod error;
mod format;
mod response;

pub use crate::client::*;
pub use crate::error::*;
pub use crate::format::*;
pub use crate::response::*;

/// The identifier value reported when no ID could be obtained.
///
/// [`SnowizardClient::next_id`] never returns this value inside `Ok`; it is
/// provided for callers that flatten a [`Result`] into a plain integer.
///
/// ```
/// use snowizard::{NOT_OBTAINED, WireFormat};
///
/// let id = WireFormat::Text.decode(b"oops").unwrap_or(NOT_OBTAINED);
/// assert_eq!(id, NOT_OBTAINED);
///
/// let id = WireFormat::Text.decode(b"42").unwrap_or(NOT_OBTAINED);
/// assert_eq!(id, 42);
/// ```
pub const NOT_OBTAINED: i64 = -1;
