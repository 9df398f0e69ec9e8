//! OTP collaborators that sit next to the store.
//!
//! - `uri`: turns an otpauth:// URL into a `TotpEntry`
//! - `code`: computes the current one-time code for an entry
//!
//! The store never calls into these; the CLI commands do.

pub mod code;
pub mod uri;

pub use code::{generate_code, generate_current_code, seconds_remaining};
pub use uri::parse_otpauth_url;
