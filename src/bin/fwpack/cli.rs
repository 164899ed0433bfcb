//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fwpack::DEFAULT_EXCLUDE;

#[derive(Parser)]
#[command(name = "fwpack")]
#[command(about = "ESP8266 ROM bootloader firmware packing utility")]
#[command(version)]
pub struct Cli {
    /// Output file name with full path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Application binary file name
    #[arg(short, long, value_name = "NAME")]
    pub app: Option<String>,

    /// Drop any pair whose filename contains this substring
    /// (empty disables exclusion)
    #[arg(long, value_name = "SUBSTRING", default_value = DEFAULT_EXCLUDE)]
    pub exclude: String,

    #[command(subcommand)]
    pub operation: Option<Operation>,
}

/// Closed set of supported operations.
#[derive(Subcommand)]
pub enum Operation {
    /// Pack the V3 firmware
    Pack3 {
        /// Address followed by binary filename, separated by space
        #[arg(value_name = "<address> <filename>", required = true, num_args = 1..)]
        addr_filename: Vec<String>,
    },
}
