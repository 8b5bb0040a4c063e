use std::{env, process};

use expense_tracker::{cli, init, utils::build_info};

fn main() {
    init();

    match env::args().nth(1).as_deref() {
        Some("--version") | Some("-V") => {
            println!("{}", build_info::current());
            return;
        }
        Some("--help") | Some("-h") => {
            print_usage();
            return;
        }
        Some(other) => {
            eprintln!("Unknown argument: {other}");
            print_usage();
            process::exit(2);
        }
        None => {}
    }

    if let Err(err) = cli::run_cli() {
        cli::output::error(format!("Error: {err}"));
        process::exit(1);
    }
}

fn print_usage() {
    println!("Usage: expense_tracker [--version | --help]");
    println!();
    println!("Runs the interactive expense tracker. Set EXPENSE_TRACKER_SCRIPT=1 to read");
    println!("one answer per line from stdin instead of prompting on the terminal.");
}
