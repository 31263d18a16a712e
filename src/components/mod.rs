//! UI components.

pub mod sparkle_field;
