use anyhow::Context;
use clap::Parser;
use std::io::BufRead;
use std::process;

mod cli;
mod errors;
mod handlers;
mod logging;
mod state;
mod ui;

use cli::Cli;
use errors::report_load_error;
use handlers::{handle_command, parse_command, Outcome};
use logging::Verbosity;
use state::AppState;
use ui::format_menu;

fn main() {
    let cli = Cli::parse();
    logging::init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    if !std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        colored::control::set_override(false);
    }

    let mut state = AppState::new(cli.menu_options());

    if let Err(err) = state.load_from_file(cli.file.clone(), !cli.no_validate) {
        report_load_error(&err, &cli.file);
        process::exit(1);
    }

    if let Some(field) = &cli.group_by {
        if !state.group_by(field) {
            tracing::warn!(field = %field, "collection is already grouped, ignoring --group-by");
        }
    }

    state.set_query(cli.query.clone());

    let result = if cli.interactive {
        run_interactive(&mut state)
    } else {
        print_menu(&state, cli.json)
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn print_menu(state: &AppState, json: bool) -> anyhow::Result<()> {
    let menu = state.menu_state();

    if json {
        let output = serde_json::to_string_pretty(&menu.results).context("failed to serialize results")?;
        println!("{}", output);
    } else {
        println!(
            "{}",
            format_menu(&state.get_title(), &menu, &state.options, state.highlight)
        );
    }

    Ok(())
}

fn run_interactive(state: &mut AppState) -> anyhow::Result<()> {
    print_menu(state, false)?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;

        match handle_command(state, parse_command(&line)) {
            Outcome::Render => {
                println!();
                print_menu(state, false)?;
            }
            Outcome::Print(text) => println!("{}", text),
            Outcome::Quit => break,
        }
    }

    Ok(())
}
