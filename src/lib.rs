//! Random password generation with a coarse strength rating.
//!
//! The core lives in [`generators`]: [`PasswordGenerator`] builds passwords that contain
//! every requested [`CharacterClass`], and [`classify`] maps any password to a
//! [`StrengthTier`]. Everything else is a shell around those two operations.

pub mod api;
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::generators::{analyze, classify, GeneratorError, LengthPolicy, PasswordGenerator};
pub use crate::models::{CharacterClass, ClassSelection, GenerationRequest, Password, StrengthTier};
