//! Turns the flat `<address> <filename>` argument list into segments.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::{FLASH_SECTOR_SIZE, PackError, Segment};

/// The OTA state partition is initialized on device and must never be packed.
pub const DEFAULT_EXCLUDE: &str = "ota_data_initial.bin";

#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Filename substring identifying the application binary.
    pub app_name: String,
    /// Pairs whose filename contains this substring are dropped entirely,
    /// before the file is even opened.
    pub exclude: Option<String>,
}

/// Parse an address token with automatic base selection: `0x` hex, `0o`
/// octal, `0b` binary, decimal otherwise.
pub fn parse_address(token: &str) -> Result<u32, PackError> {
    let t = token.trim();
    let parsed = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else if let Some(oct) = t.strip_prefix("0o").or_else(|| t.strip_prefix("0O")) {
        u32::from_str_radix(oct, 8)
    } else if let Some(bin) = t.strip_prefix("0b").or_else(|| t.strip_prefix("0B")) {
        u32::from_str_radix(bin, 2)
    } else {
        t.parse::<u32>()
    };
    parsed.map_err(|_| PackError::InvalidAddress(token.to_string()))
}

/// Build unvalidated segments from an even-length `[address, filename, ...]`
/// token list. Reads every non-excluded file fully; any read failure aborts
/// the run. The result is not yet sorted or checked for overlap.
pub fn collect_segments(
    tokens: &[String],
    options: &CollectOptions,
) -> Result<Vec<Segment>, PackError> {
    if !tokens.len().is_multiple_of(2) {
        let last = tokens.last().cloned().unwrap_or_default();
        return Err(PackError::UnpairedToken(last));
    }

    let mut segments = Vec::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks_exact(2) {
        let mut address = parse_address(&pair[0])?;
        // Address 0 is the boot header sector; data destined there actually
        // starts one sector in.
        if address == 0 {
            address = FLASH_SECTOR_SIZE;
        }

        let filename = &pair[1];
        if let Some(marker) = options.exclude.as_deref()
            && filename.contains(marker)
        {
            debug!(file = %filename, "skipping excluded partition");
            continue;
        }

        let path = PathBuf::from(filename);
        let data = fs::read(&path).map_err(|source| PackError::Read {
            path: path.clone(),
            source,
        })?;
        let is_app = filename.contains(&options.app_name);
        debug!(file = %filename, address = format_args!("{address:#x}"), bytes = data.len(), is_app);
        segments.push(Segment::new(address, data, path, is_app));
    }

    Ok(segments)
}
