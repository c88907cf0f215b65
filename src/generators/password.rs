use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::{GenerationRequest, Password};

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("Invalid password length {length}: {}", describe_bounds(.min, .max))]
    InvalidLength {
        length: usize,
        min: usize,
        max: Option<usize>,
    },

    #[error("At least one character class must be selected")]
    NoClassSelected,
}

fn describe_bounds(min: &usize, max: &Option<usize>) -> String {
    match max {
        Some(max) => format!("must be between {} and {}", min, max),
        None => format!("must be at least {}", min),
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Accepted password lengths. `max: None` leaves the length unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    pub min: usize,
    pub max: Option<usize>,
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LENGTH,
            max: Some(DEFAULT_MAX_LENGTH),
        }
    }
}

impl LengthPolicy {
    pub fn unbounded(min: usize) -> Self {
        Self { min, max: None }
    }

    pub fn allows(&self, length: usize) -> bool {
        length >= self.min && self.max.map_or(true, |max| length <= max)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator {
    policy: LengthPolicy,
}

impl PasswordGenerator {
    pub fn new(policy: LengthPolicy) -> Self {
        PasswordGenerator { policy }
    }

    pub fn policy(&self) -> LengthPolicy {
        self.policy
    }

    /// Generates a password using the thread-local CSPRNG.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Password> {
        self.generate_with(request, &mut rand::thread_rng())
    }

    /// Generates a password drawing every random choice from `rng`.
    ///
    /// One character of each selected class is placed first, the rest is filled from
    /// the combined alphabet, and the whole sequence is shuffled so the guaranteed
    /// characters land at uniformly random positions.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<Password> {
        self.validate(request)?;

        let combined: Vec<u8> = request
            .classes
            .iter()
            .flat_map(|class| class.alphabet().iter().copied())
            .collect();

        let mut password: Vec<char> = Vec::with_capacity(request.length);
        for class in request.classes.iter() {
            let alphabet = class.alphabet();
            password.push(alphabet[rng.gen_range(0..alphabet.len())] as char);
        }

        while password.len() < request.length {
            password.push(combined[rng.gen_range(0..combined.len())] as char);
        }

        password.shuffle(rng);

        log::debug!(
            "Generated password of length {} from {} character classes",
            password.len(),
            request.classes.len()
        );

        Ok(Password::from(password))
    }

    /// Checks a request without consuming any randomness.
    pub fn validate(&self, request: &GenerationRequest) -> Result<()> {
        if request.classes.is_empty() {
            return Err(GeneratorError::NoClassSelected);
        }

        // A length shorter than the class count cannot hold one character of each class.
        if !self.policy.allows(request.length) || request.length < request.classes.len() {
            return Err(GeneratorError::InvalidLength {
                length: request.length,
                min: self.policy.min.max(request.classes.len()),
                max: self.policy.max,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CharacterClass, ClassSelection};
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn classes(list: &[CharacterClass]) -> ClassSelection {
        list.iter().copied().collect()
    }

    /// Fails the test if validation ever touches the random source.
    struct UntouchableRng;

    impl RngCore for UntouchableRng {
        fn next_u32(&mut self) -> u32 {
            panic!("random source used before validation finished")
        }
        fn next_u64(&mut self) -> u64 {
            panic!("random source used before validation finished")
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("random source used before validation finished")
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            panic!("random source used before validation finished")
        }
    }

    #[test]
    fn digits_only_password() {
        let generator = PasswordGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let request = GenerationRequest::new(8, classes(&[CharacterClass::Digit]));

        for _ in 0..50 {
            let password = generator.generate_with(&request, &mut rng).unwrap();
            assert_eq!(password.len(), 8);
            assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn every_selected_class_is_represented() {
        let generator = PasswordGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let selections = [
            ClassSelection::all(),
            ClassSelection::default_set(),
            classes(&[CharacterClass::Symbol, CharacterClass::Lowercase]),
            classes(&[CharacterClass::Uppercase]),
        ];

        for selection in selections {
            for length in [8, 9, 12, 33, 100] {
                let request = GenerationRequest::new(length, selection);
                let password = generator.generate_with(&request, &mut rng).unwrap();
                assert_eq!(password.len(), length);
                for class in selection.iter() {
                    assert!(
                        password.as_str().chars().any(|c| class.contains(c)),
                        "missing {} in a {}-character password",
                        class,
                        length
                    );
                }
                assert!(password
                    .as_str()
                    .chars()
                    .all(|c| selection.iter().any(|class| class.contains(c))));
            }
        }
    }

    #[test]
    fn rejects_length_outside_policy() {
        let generator = PasswordGenerator::default();
        let all = ClassSelection::all();

        let err = generator
            .generate_with(&GenerationRequest::new(7, all), &mut UntouchableRng)
            .unwrap_err();
        assert_eq!(
            err,
            GeneratorError::InvalidLength {
                length: 7,
                min: 8,
                max: Some(100)
            }
        );

        let err = generator
            .generate_with(&GenerationRequest::new(101, all), &mut UntouchableRng)
            .unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidLength { length: 101, .. }));
    }

    #[test]
    fn unbounded_policy_accepts_long_passwords() {
        let generator = PasswordGenerator::new(LengthPolicy::unbounded(8));
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let request = GenerationRequest::new(500, ClassSelection::all());
        let password = generator.generate_with(&request, &mut rng).unwrap();
        assert_eq!(password.len(), 500);
    }

    #[test]
    fn rejects_empty_selection_before_drawing() {
        let generator = PasswordGenerator::default();
        let request = GenerationRequest::new(12, ClassSelection::empty());
        assert_eq!(
            generator.generate_with(&request, &mut UntouchableRng),
            Err(GeneratorError::NoClassSelected)
        );
    }

    #[test]
    fn rejects_length_shorter_than_class_count() {
        let generator = PasswordGenerator::new(LengthPolicy { min: 1, max: None });
        let request = GenerationRequest::new(3, ClassSelection::all());
        let err = generator
            .generate_with(&request, &mut UntouchableRng)
            .unwrap_err();
        assert_eq!(
            err,
            GeneratorError::InvalidLength {
                length: 3,
                min: 4,
                max: None
            }
        );

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let exact = GenerationRequest::new(4, ClassSelection::all());
        assert_eq!(generator.generate_with(&exact, &mut rng).unwrap().len(), 4);
    }

    #[test]
    fn same_seed_reproduces_password() {
        let generator = PasswordGenerator::default();
        let request = GenerationRequest::new(16, ClassSelection::all());
        let first = generator
            .generate_with(&request, &mut ChaCha8Rng::seed_from_u64(42))
            .unwrap();
        let second = generator
            .generate_with(&request, &mut ChaCha8Rng::seed_from_u64(42))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn error_messages_name_the_bounds() {
        let bounded = GeneratorError::InvalidLength {
            length: 5,
            min: 8,
            max: Some(100),
        };
        assert_eq!(
            bounded.to_string(),
            "Invalid password length 5: must be between 8 and 100"
        );

        let open = GeneratorError::InvalidLength {
            length: 5,
            min: 8,
            max: None,
        };
        assert_eq!(open.to_string(), "Invalid password length 5: must be at least 8");
    }
}
