// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};

use crate::models::{CharacterClass, ClassSelection};

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Generate a password
    Generate(GenerateArgs),

    /// Rate the strength of an existing password
    Check {
        /// Password to analyze
        #[arg(required = true)]
        password: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive generation session
    Menu,

    /// Serve the generator over HTTP
    Serve {
        /// API server port
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        address: Option<String>,
    },
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Password length (default: 10)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Include uppercase, lowercase, digits and symbols
    #[arg(short, long)]
    pub all: bool,

    /// Include uppercase letters
    #[arg(short, long)]
    pub uppercase: bool,

    /// Include lowercase letters
    #[arg(short = 'L', long)]
    pub lowercase: bool,

    /// Include digits
    #[arg(short, long)]
    pub digits: bool,

    /// Include symbols
    #[arg(short, long)]
    pub symbols: bool,

    /// Copy the password to the clipboard (needs a build with the `clipboard` feature)
    #[arg(short, long)]
    pub copy: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Resolves the class flags; `fallback` applies when no class flag was given.
    pub fn selection(&self, fallback: ClassSelection) -> ClassSelection {
        if self.all {
            return ClassSelection::all();
        }

        let mut selection = ClassSelection::empty();
        selection.set(CharacterClass::Uppercase, self.uppercase);
        selection.set(CharacterClass::Lowercase, self.lowercase);
        selection.set(CharacterClass::Digit, self.digits);
        selection.set(CharacterClass::Symbol, self.symbols);

        if selection.is_empty() {
            fallback
        } else {
            selection
        }
    }
}
