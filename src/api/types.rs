// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CharacterClass, ClassSelection, StrengthTier};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length (default: 10)
    pub length: Option<usize>,
    /// Include every character class
    pub all: Option<bool>,
    /// Include uppercase letters
    pub uppercase: Option<bool>,
    /// Include lowercase letters
    pub lowercase: Option<bool>,
    /// Include digits
    pub digits: Option<bool>,
    /// Include symbols
    pub symbols: Option<bool>,
}

impl PasswordGenerationRequest {
    /// Resolves the requested classes the same way the CLI flags are resolved.
    pub fn selection(&self, fallback: ClassSelection) -> ClassSelection {
        if self.all.unwrap_or(false) {
            return ClassSelection::all();
        }

        let mut selection = ClassSelection::empty();
        selection.set(CharacterClass::Uppercase, self.uppercase.unwrap_or(false));
        selection.set(CharacterClass::Lowercase, self.lowercase.unwrap_or(false));
        selection.set(CharacterClass::Digit, self.digits.unwrap_or(false));
        selection.set(CharacterClass::Symbol, self.symbols.unwrap_or(false));

        if selection.is_empty() {
            fallback
        } else {
            selection
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Strength tier of the generated password
    pub strength: Option<StrengthTier>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisRequest {
    /// Password to analyze
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength tier
    pub strength: StrengthTier,
    /// Number of satisfied criteria (0-5)
    pub score: u8,
    /// Suggestions for every unmet criterion
    pub feedback: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
