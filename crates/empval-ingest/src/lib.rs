pub mod json;

pub use json::{DecodeError, decode_records};
