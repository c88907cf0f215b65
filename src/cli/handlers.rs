// src/cli/handlers.rs
use console::style;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::error::Error;

use crate::cli::GenerateArgs;
use crate::core::Config;
use crate::generators::{analyze, classify, GeneratorError, PasswordGenerator, StrengthReport};
use crate::models::{GenerationRequest, Password, StrengthTier};
use crate::utils::{ClipboardSink, SystemClipboard};

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthTier,
    pub length: usize,
}

impl GeneratedPassword {
    pub fn new(password: &Password, strength: StrengthTier) -> Self {
        Self {
            password: password.to_string(),
            strength,
            length: password.len(),
        }
    }
}

/// Builds the request from flags and config defaults and runs the generator.
pub fn generate_from_args(
    generator: &PasswordGenerator,
    config: &Config,
    args: &GenerateArgs,
    seed: Option<u64>,
) -> Result<(Password, StrengthTier), GeneratorError> {
    let request = GenerationRequest::new(
        args.length.unwrap_or(config.default_length),
        args.selection(config.default_classes),
    );

    let password = match seed {
        Some(seed) => generator.generate_with(&request, &mut ChaCha20Rng::seed_from_u64(seed))?,
        None => generator.generate(&request)?,
    };
    let tier = classify(password.as_str());
    Ok((password, tier))
}

pub fn styled_tier(tier: StrengthTier) -> String {
    match tier {
        StrengthTier::Weak => style(tier).red().bold().to_string(),
        StrengthTier::Medium => style(tier).yellow().bold().to_string(),
        StrengthTier::Strong => style(tier).green().bold().to_string(),
    }
}

pub fn handle_generate(
    generator: &PasswordGenerator,
    config: &Config,
    args: &GenerateArgs,
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    let (password, tier) = generate_from_args(generator, config, args, seed)?;

    if args.json {
        let output = GeneratedPassword::new(&password, tier);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Generated password: {}", password);
        println!("Strength: {}", styled_tier(tier));
    }

    if args.copy {
        let mut clipboard = SystemClipboard::new()?;
        clipboard.set_contents(password.as_str())?;
        if !args.json {
            println!("📋 Password copied to clipboard");
        }
    }

    Ok(())
}

pub fn render_report(report: &StrengthReport) -> String {
    let mut out = format!(
        "Strength: {} ({}/5 criteria met)",
        styled_tier(report.tier),
        report.score
    );
    for suggestion in &report.feedback {
        out.push_str("\n  • ");
        out.push_str(suggestion);
    }
    out
}

pub fn handle_check(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let report = analyze(password);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report));
    }
    Ok(())
}
