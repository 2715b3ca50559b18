//! # ask-name
//!
//! A tiny companion utility: it prints the name given with `--name`, and asks for one when the
//! option is missing or empty. Without a terminal, the name is read from standard input instead.

#![expect(
    unused_crate_dependencies,
    reason = "Only the prompt and argument crates are needed here; the rest serve the game."
)]

use std::io::{self, BufRead as _};

use anyhow::Result;
use clap::Parser;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// This struct holds the only argument of the utility.
#[derive(Parser)]
#[command(name = "ask-name", version, about = "Print a name, asking for it if none is given")]
struct Cli {
    /// The name to print.
    #[arg(short, long, value_name = "NAME")]
    name: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let term = Term::stdout();

    let name = match cli.name.filter(|name| !name.is_empty()) {
        Some(name) => name,
        None if term.is_term() => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Please enter your name")
            .allow_empty(true)
            .interact_text_on(&term)?,
        None => read_piped_name()?,
    };

    term.write_line(&name)?;
    Ok(())
}

/// This function reads the name from the first line of a non-interactive standard input, so the
/// utility can be scripted. An empty input gives an empty name.
fn read_piped_name() -> Result<String> {
    let mut line = String::new();
    let _read = io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
