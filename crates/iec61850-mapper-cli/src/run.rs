// crates/iec61850-mapper-cli/src/run.rs

//! The sequential pipeline behind the command line: load, map, write.

use crate::Cli;
use crate::error::CliError;
use iec61850_mapper::{Mapper, MappingOutput, load_bindings_from_str};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Executes one run. Nothing is written unless every input mapped.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let role = cli.role();
    if let Some(limit) = role.document_limit() {
        if cli.scl.len() > limit {
            return Err(CliError::Usage(format!(
                "only {} SCL file(s) allowed for {} target, got {}",
                limit,
                role,
                cli.scl.len()
            )));
        }
    }

    info!("Target: {}", role);
    info!("ST file: {}", cli.st.display());
    for path in &cli.scl {
        info!("SCL file: {}", path.display());
    }
    if let Some(path) = &cli.output {
        info!("Outfile: {}", path.display());
    }

    info!("Parsing ST file {}", cli.st.display());
    let bindings = load_bindings_from_str(&read_source(&cli.st)?).map_err(|source| {
        CliError::Bindings {
            path: cli.st.clone(),
            source,
        }
    })?;
    info!("Loaded {} located variables", bindings.len());

    let mut mapper = Mapper::new(role, bindings);
    for path in &cli.scl {
        info!("Parsing SCL file {}", path.display());
        let text = read_source(path)?;
        mapper
            .process_document(&text)
            .map_err(|source| CliError::Document {
                path: path.clone(),
                source,
            })?;
    }

    let output = mapper.finish();
    write_output(cli.output.as_deref(), &output)?;
    info!("Mapping done");
    Ok(())
}

/// Reads a text input. Invalid UTF-8 is replaced rather than rejected.
fn read_source(path: &Path) -> Result<String, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_output(destination: Option<&Path>, output: &MappingOutput) -> Result<(), CliError> {
    let rendered = output.to_string();
    let output_error = |source| CliError::Output {
        path: destination.map(PathBuf::from),
        source,
    };

    match destination {
        Some(path) => fs::write(path, rendered).map_err(output_error),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(output_error)
        }
    }
}
