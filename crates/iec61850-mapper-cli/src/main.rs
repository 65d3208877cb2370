// crates/iec61850-mapper-cli/src/main.rs
//! Command-line front end: maps IEC 61850 SCL files against an OpenPLC
//! Structured Text program and writes the server or client mapping file.

mod error;
mod run;

use clap::{ArgGroup, CommandFactory, Parser};
use iec61850_mapper::Role;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "iec61850-mapper")]
#[command(about = "Map IEC 61850 SCL data attributes to PLC located variables")]
#[command(version)]
#[command(group(ArgGroup::new("target").required(true).args(["server", "client"])))]
pub struct Cli {
    #[arg(long, help = "Generate the mapping for the IEC 61850 server (exactly one SCL file)")]
    pub server: bool,
    #[arg(long, help = "Generate the mapping for the IEC 61850 client (one or more SCL files)")]
    pub client: bool,
    #[arg(long = "st", value_name = "ST-FILE", help = "Structured Text program declaring the located variables")]
    pub st: PathBuf,
    #[arg(
        long = "scl",
        value_name = "SCL-FILE",
        num_args = 1..,
        required = true,
        help = "SCL file(s) to map"
    )]
    pub scl: Vec<PathBuf>,
    #[arg(short = 'o', long = "output", value_name = "OUTPUT", help = "Write the mapping here instead of stdout")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn role(&self) -> Role {
        if self.server { Role::Server } else { Role::Client }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are reported through clap's error path too.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, CliError::Usage(_)) {
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}
