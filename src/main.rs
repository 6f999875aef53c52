use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use sbcid::cli::{Category, Cli, Command};
use sbcid::identify::Registry;
use sbcid::sysfs::SysfsRoot;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    match cli.command.unwrap_or(Command::Identify) {
        Command::Identify => cmd_identify(cli.json),
        Command::Is { category } => cmd_is(category),
        Command::Completions { shell } => {
            sbcid::cli::print_completions(shell);
            Ok(())
        }
    }
}

fn init_tracing(debug: bool) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `--debug` turns on the detection trace without requiring users to know
    // target names; an explicit RUST_LOG still wins.
    if debug {
        if let Ok(directive) = "sbcid=debug".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_identify(json: bool) -> Result<()> {
    let sysfs = SysfsRoot::system();
    let registry = Registry::with_defaults();

    match registry.identify(&sysfs) {
        Ok(board) => {
            if json {
                sbcid::output::print_board_json(board);
            } else {
                sbcid::output::print_board(board);
            }
            Ok(())
        }
        Err(err) => {
            if json {
                sbcid::output::print_failure_json(&err);
            } else {
                sbcid::output::print_identify_failure(&err);
            }
            std::process::exit(1);
        }
    }
}

fn cmd_is(category: Category) -> Result<()> {
    let sysfs = SysfsRoot::system();
    let registry = Registry::with_defaults();

    if registry.is_board_type(&sysfs, category.board()) {
        println!("{}", "yes".green());
        Ok(())
    } else {
        println!("{}", "no".red());
        std::process::exit(1);
    }
}
