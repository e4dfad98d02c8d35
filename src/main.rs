#![cfg_attr(feature = "server", feature(proc_macro_hygiene, decl_macro))]

#[cfg(feature = "server")]
#[macro_use]
extern crate rocket;

use colored::Colorize;
use computer_club::{load_file, run, LoadError};
use failure::Error;
use std::env;
use std::process;
use tracing::{info, warn, Level};

#[cfg(feature = "server")]
mod server;

fn init_logging() {
    let level = env::var("CLUB_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_local(path: &str, json: bool) -> Result<(), Error> {
    info!(path, "loading input");

    let loaded = match load_file(path) {
        Ok(loaded) => loaded,
        Err(error) => match error.downcast::<LoadError>() {
            Ok(error) => {
                warn!(%error, "input rejected");
                println!("{}", error.line);

                return Ok(());
            }
            Err(error) => return Err(error),
        },
    };

    let report = run(loaded.config, loaded.actions);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}

fn usage() -> Result<(), Error> {
    eprintln!("{} computer-club <file> [-json]", "usage:".yellow().bold());

    #[cfg(feature = "server")]
    eprintln!("       computer-club -server");

    process::exit(1);
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let result = match args.as_slice() {
        #[cfg(feature = "server")]
        ["-server"] => server::run_server(),
        [path] => run_local(path, false),
        [path, "-json"] => run_local(path, true),
        _ => usage(),
    };

    if let Err(error) = result {
        eprintln!("{} {}", "error:".red().bold(), error);
        process::exit(1);
    }
}
