use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("address {0:?} must be a number")]
    InvalidAddress(String),

    #[error("address {0:?} has no filename following it")]
    UnpairedToken(String),

    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("duplicate address {address:#x} for file: {}", path.display())]
    DuplicateAddress { address: u32, path: PathBuf },

    #[error("segment at {address:#x} exceeds the 32-bit address space: {}", path.display())]
    AddressOverflow { address: u32, path: PathBuf },

    #[error("detected overlap at address {address:#x} for file: {}", path.display())]
    Overlap { address: u32, path: PathBuf },

    #[error("partition {} cannot be placed behind application binary {app}", path.display())]
    SegmentBehindApp { path: PathBuf, app: String },

    #[error("failed to find application binary {0} in all arguments")]
    AppNotFound(String),
}
