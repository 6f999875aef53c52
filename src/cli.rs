use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::boardtype::{BoardType, nvidia, raspberrypi};

#[derive(Parser)]
#[command(
    name = "sbcid",
    about = "Identify exactly which single-board computer this system is",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log every detection step to stderr (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Detect the board and print its name (the default)
    Identify,

    /// Exit 0 if the detected board belongs to the given category, 1 otherwise
    Is {
        /// Board category to test against
        #[arg(value_enum)]
        category: Category,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (auto-detected if omitted)
        shell: Option<Shell>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Category {
    /// Any NVIDIA board
    Nvidia,
    /// Any NVIDIA Jetson
    Jetson,
    /// Any Raspberry Pi
    RaspberryPi,
}

impl Category {
    /// The generic catalog node this category name stands for.
    pub fn board(&self) -> &'static BoardType {
        match self {
            Category::Nvidia => &nvidia::NVIDIA,
            Category::Jetson => &nvidia::JETSON,
            Category::RaspberryPi => &raspberrypi::RASPBERRY_PI,
        }
    }
}

/// Print shell completions to stdout.
pub fn print_completions(shell: Option<Shell>) {
    let shell = shell.or_else(Shell::from_env).unwrap_or_else(|| {
        eprintln!(
            "Could not detect shell. Specify one: sbcid completions bash|zsh|fish|elvish|powershell"
        );
        std::process::exit(1);
    });
    clap_complete::generate(shell, &mut Cli::command(), "sbcid", &mut std::io::stdout());
}
