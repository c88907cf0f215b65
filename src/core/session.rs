// src/core/session.rs
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::generators::{classify, GeneratorError, PasswordGenerator};
use crate::models::{ClassSelection, GenerationRequest, Password, StrengthTier};
use crate::utils::{ClipboardError, ClipboardSink};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No generated password to copy")]
    NothingToCopy,

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Length and classes used for the next generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub length: usize,
    pub classes: ClassSelection,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            length: 8,
            classes: ClassSelection::default_set(),
        }
    }
}

/// Interactive generation session. Owns the most recently generated password.
pub struct Session {
    generator: PasswordGenerator,
    settings: SessionSettings,
    rng: Box<dyn RngCore + Send>,
    current: Option<(Password, StrengthTier)>,
}

impl Session {
    pub fn new(generator: PasswordGenerator, settings: SessionSettings) -> Self {
        Self::with_rng(generator, settings, Box::new(ChaCha20Rng::from_entropy()))
    }

    pub fn seeded(generator: PasswordGenerator, settings: SessionSettings, seed: u64) -> Self {
        Self::with_rng(generator, settings, Box::new(ChaCha20Rng::seed_from_u64(seed)))
    }

    pub fn with_rng(
        generator: PasswordGenerator,
        settings: SessionSettings,
        rng: Box<dyn RngCore + Send>,
    ) -> Self {
        Self {
            generator,
            settings,
            rng,
            current: None,
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SessionSettings {
        &mut self.settings
    }

    pub fn generator(&self) -> &PasswordGenerator {
        &self.generator
    }

    /// Generates a new password from the current settings.
    ///
    /// On failure the previously generated password is kept.
    pub fn generate(&mut self) -> Result<(&Password, StrengthTier), GeneratorError> {
        let request = GenerationRequest::new(self.settings.length, self.settings.classes);
        let password = self.generator.generate_with(&request, &mut *self.rng)?;
        let tier = classify(password.as_str());
        log::info!("Session generated a {} password", tier);

        let (password, tier) = self.current.insert((password, tier));
        Ok((&*password, *tier))
    }

    pub fn current(&self) -> Option<&Password> {
        self.current.as_ref().map(|(password, _)| password)
    }

    pub fn current_tier(&self) -> Option<StrengthTier> {
        self.current.as_ref().map(|(_, tier)| *tier)
    }

    pub fn copy_current<C: ClipboardSink + ?Sized>(&self, sink: &mut C) -> Result<(), SessionError> {
        let password = self.current().ok_or(SessionError::NothingToCopy)?;
        sink.set_contents(password.as_str())?;
        log::info!("Copied current password to clipboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharacterClass;
    use crate::utils::MemoryClipboard;

    struct FailingClipboard;

    impl ClipboardSink for FailingClipboard {
        fn set_contents(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Backend("no display".into()))
        }
    }

    fn session() -> Session {
        Session::seeded(PasswordGenerator::default(), SessionSettings::default(), 11)
    }

    #[test]
    fn starts_empty() {
        let session = session();
        assert!(session.current().is_none());
        assert_eq!(session.settings().length, 8);
        assert_eq!(session.settings().classes, ClassSelection::default_set());
    }

    #[test]
    fn generate_replaces_current_password() {
        let mut session = session();
        let first = session.generate().unwrap().0.clone();
        assert_eq!(first.len(), 8);
        assert_eq!(session.current(), Some(&first));

        session.settings_mut().length = 20;
        session.settings_mut().classes.insert(CharacterClass::Symbol);
        let (second, tier) = session.generate().unwrap();
        assert_eq!(second.len(), 20);
        assert_eq!(tier, StrengthTier::Strong);
        assert_eq!(session.current_tier(), Some(StrengthTier::Strong));
    }

    #[test]
    fn failed_generation_keeps_previous_password() {
        let mut session = session();
        let first = session.generate().unwrap().0.clone();

        session.settings_mut().length = 4;
        assert!(matches!(
            session.generate(),
            Err(GeneratorError::InvalidLength { length: 4, .. })
        ));

        session.settings_mut().length = 12;
        session.settings_mut().classes = ClassSelection::empty();
        assert_eq!(session.generate().unwrap_err(), GeneratorError::NoClassSelected);

        assert_eq!(session.current(), Some(&first));
    }

    #[test]
    fn copy_requires_a_generated_password() {
        let session = session();
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(
            session.copy_current(&mut clipboard),
            Err(SessionError::NothingToCopy)
        );
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn copy_puts_current_password_on_clipboard() {
        let mut session = session();
        session.generate().unwrap();
        let mut clipboard = MemoryClipboard::new();
        session.copy_current(&mut clipboard).unwrap();
        assert_eq!(clipboard.contents(), session.current().map(|p| p.as_str()));
    }

    #[test]
    fn clipboard_failures_are_reported() {
        let mut session = session();
        session.generate().unwrap();
        assert!(matches!(
            session.copy_current(&mut FailingClipboard),
            Err(SessionError::Clipboard(ClipboardError::Backend(_)))
        ));
    }
}
