//! Todo Agenda - Main Entry Point
//!
//! The actual implementation is in the `todo_agenda` library.

use clap::{CommandFactory, Parser};
use todo_agenda::{Args, SystemHome, run};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_level(false)
        .without_time()
        .init();
}

fn main() {
    // No control file given: show usage and fail
    if std::env::args_os().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(1);
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print().ok();
            std::process::exit(code);
        }
    };
    init_logging(args.verbose);

    let now = chrono::Local::now().naive_local();
    match run(&args.control_file, &SystemHome, now, &args.agenda_config()) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            println!("{e:#}");
            std::process::exit(1);
        }
    }
}
