use colored::Colorize;
use serde::Serialize;

use crate::boardtype::BoardType;
use crate::error::Error;

#[derive(Serialize)]
struct BoardReport<'a> {
    manufacturer: &'a str,
    model: &'a str,
    sub_model: &'a str,
    ram_mb: u32,
    pretty_name: String,
}

impl<'a> BoardReport<'a> {
    fn new(board: &'a BoardType) -> Self {
        Self {
            manufacturer: board.manufacturer,
            model: board.model,
            sub_model: board.sub_model,
            ram_mb: board.ram_mb,
            pretty_name: board.pretty_name(),
        }
    }
}

pub fn print_board(board: &BoardType) {
    println!("{}", board.pretty_name().bold());
}

pub fn print_board_json(board: &BoardType) {
    println!(
        "{}",
        serde_json::to_string_pretty(&BoardReport::new(board)).unwrap()
    );
}

/// Render a detection failure, listing every identifier's individual cause
/// when the whole registry came up empty.
pub fn print_identify_failure(err: &Error) {
    match err {
        Error::Unknown { causes } => {
            eprintln!("{}", "Could not identify this board.".red().bold());
            for cause in causes {
                eprintln!("  {} {}", "-".dimmed(), cause);
            }
        }
        other => eprintln!("{} {}", "Error:".red().bold(), other),
    }
}

pub fn print_failure_json(err: &Error) {
    let causes: Vec<String> = err.causes().iter().map(|c| c.to_string()).collect();
    let report = serde_json::json!({
        "error": err.to_string(),
        "causes": causes,
    });
    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}
