use std::fs;

use tracing::info;

use fwpack::{CollectOptions, FlashImage, PackError, collect_segments};

use crate::cli::{Cli, Operation};

pub fn run(cli: &Cli, operation: &Operation) -> Result<(), PackError> {
    match operation {
        Operation::Pack3 { addr_filename } => pack3(cli, addr_filename),
    }
}

fn pack3(cli: &Cli, addr_filename: &[String]) -> Result<(), PackError> {
    let output = cli
        .output
        .as_ref()
        .ok_or(PackError::MissingArgument("--output"))?;
    let app = cli.app.as_ref().ok_or(PackError::MissingArgument("--app"))?;

    let options = CollectOptions {
        app_name: app.clone(),
        exclude: (!cli.exclude.is_empty()).then(|| cli.exclude.clone()),
    };
    let segments = collect_segments(addr_filename, &options)?;
    let image = FlashImage::new(segments, app)?;

    // Fully assembled in memory; a failure anywhere above leaves no output.
    let packed = image.pack();
    fs::write(output, &packed).map_err(|source| PackError::Write {
        path: output.clone(),
        source,
    })?;

    info!(
        bytes = packed.len(),
        app_offset = format_args!("{:#x}", image.app_offset()),
        output = %output.display(),
        "packed firmware image"
    );
    Ok(())
}
