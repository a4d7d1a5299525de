//! Shared foundational types for the Strobe test vector generator.
//!
//! This crate provides the validated bit-width type and the fixed-width
//! word type used to represent and format counter values.

#![warn(missing_docs)]

pub mod width;
pub mod word;

pub use width::{BitWidth, WidthError};
pub use word::Word;
