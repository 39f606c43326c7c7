//! notekeep - note export and daily planning CLI
//!
//! ## Quick Start
//!
//! ```bash
//! # Save a note as HTML
//! notekeep export notes.txt -o notes.html
//!
//! # Find every occurrence of a word
//! notekeep find notes.html todo
//!
//! # Keep today's plan
//! notekeep plan focus "Ship the release"
//! notekeep plan add "Write changelog"
//! notekeep plan show
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
