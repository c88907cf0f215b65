// src/cli/menu.rs
use inquire::{InquireError, MultiSelect, Select, Text};
use std::error::Error;

use crate::cli::handlers::styled_tier;
use crate::core::{Session, SessionError};
use crate::models::{CharacterClass, ClassSelection};
use crate::utils::SystemClipboard;

const GENERATE: &str = "🔐  Generate password";
const COPY: &str = "📋  Copy password";
const LENGTH: &str = "📏  Set length";
const CLASSES: &str = "🔤  Choose character classes";
const EXIT: &str = "🚪  Exit";

fn class_label(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Uppercase => "Uppercase letters",
        CharacterClass::Lowercase => "Lowercase letters",
        CharacterClass::Digit => "Digits",
        CharacterClass::Symbol => "Symbols",
    }
}

/// Returns `Ok(None)` when the user cancels or interrupts the prompt.
fn prompt<T>(result: Result<T, InquireError>) -> Result<Option<T>, InquireError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn run_cli_menu(mut session: Session) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🦀 PASSWORD GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let settings = session.settings();
        println!(
            "\nLength: {} | Classes: {}",
            settings.length, settings.classes
        );

        let choice = match Select::new("What would you like to do?", vec![GENERATE, COPY, LENGTH, CLASSES, EXIT]).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        };

        match choice {
            GENERATE => match session.generate() {
                Ok((password, tier)) => {
                    println!("\nGenerated password: {}", password);
                    println!("Strength: {}", styled_tier(tier));
                }
                Err(e) => eprintln!("❌ {}", e),
            },
            COPY => {
                let result = SystemClipboard::new()
                    .map_err(SessionError::from)
                    .and_then(|mut clipboard| session.copy_current(&mut clipboard));
                match result {
                    Ok(()) => println!("✅ Password copied to clipboard"),
                    Err(e) => eprintln!("❌ {}", e),
                }
            }
            LENGTH => {
                let current = session.settings().length.to_string();
                let Some(input) = prompt(Text::new("Password length:").with_default(&current).prompt())? else {
                    continue;
                };
                match input.trim().parse::<usize>() {
                    // Range checks happen in the generator so every entry point agrees.
                    Ok(length) => session.settings_mut().length = length,
                    Err(_) => eprintln!("❌ '{}' is not a number", input.trim()),
                }
            }
            CLASSES => {
                let current = session.settings().classes;
                let defaults: Vec<usize> = CharacterClass::ALL
                    .iter()
                    .enumerate()
                    .filter(|(_, class)| current.contains(**class))
                    .map(|(i, _)| i)
                    .collect();
                let options: Vec<&str> = CharacterClass::ALL.iter().map(|c| class_label(*c)).collect();

                let Some(selected) = prompt(
                    MultiSelect::new("Include:", options)
                        .with_default(&defaults)
                        .prompt(),
                )?
                else {
                    continue;
                };

                let classes: ClassSelection = CharacterClass::ALL
                    .into_iter()
                    .filter(|class| selected.contains(&class_label(*class)))
                    .collect();
                if classes.is_empty() {
                    println!("⚠️  No class selected; generation will fail until one is chosen.");
                }
                session.settings_mut().classes = classes;
            }
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
