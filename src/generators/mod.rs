// src/generators/mod.rs
pub mod password;
pub mod strength;

pub use password::{GeneratorError, LengthPolicy, PasswordGenerator};
pub use strength::{analyze, classify, is_digit, StrengthReport};
