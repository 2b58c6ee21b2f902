//! JSON decoding for response bodies and the settings file.

mod json;

pub use json::*;
