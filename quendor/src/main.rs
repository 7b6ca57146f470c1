use std::{env, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use quendor::{LoadError, Program, SearchPath};

mod cli;
mod logging;

use cli::Args;

fn run(args: &Args) -> Result<Program> {
    let search = SearchPath::with_search_dir(args.search_path.as_deref())
        .context("failed to determine the current directory")?;
    debug!("Search directories: {:?}", search.candidates());

    let program = Program::load(&args.zcode, &search)?;
    Ok(program)
}

fn main() -> ExitCode {
    println!("\nQuendor Z-Machine Interpreter\n");

    let args = Args::parse();
    logging::init(args.log_level());

    let raw: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    debug!("Argument count: {:>4}", raw.len());
    for (i, arg) in raw.iter().enumerate() {
        debug!("Argument {i}: {:>8}", arg);
    }
    debug!("Parsed arguments: {args:?}");

    match run(&args) {
        Ok(program) => {
            let image = program.image();
            println!(
                "Loaded '{}' as {} ({} bytes)",
                program.location().path().display(),
                program.format(),
                image.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            match err.downcast_ref::<LoadError>() {
                Some(load) => ExitCode::from(load.kind().exit_code()),
                None => ExitCode::FAILURE,
            }
        }
    }
}
