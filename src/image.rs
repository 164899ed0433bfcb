//! Flash image layout validation and serialization.

use tracing::debug;

use crate::{FLASH_SECTOR_SIZE, PackError, Segment, bootloader_crc32};

/// Erased-flash convention; gaps between segments read back as all ones.
pub const FILL_BYTE: u8 = 0xFF;

/// A validated, address-sorted set of segments ready for serialization.
#[derive(Debug, Clone)]
pub struct FlashImage {
    segments: Vec<Segment>,
    app_offset: u32,
}

impl FlashImage {
    /// Sort segments by address and enforce the layout invariants:
    /// unique addresses, sector-aligned spans that do not collide, and a
    /// single application binary behind every other partition.
    ///
    /// `app_name` only appears in error messages; the application segment
    /// itself is identified by the `is_app` flag set during collection.
    pub fn new(mut segments: Vec<Segment>, app_name: &str) -> Result<Self, PackError> {
        segments.sort_by_key(|s| s.address);

        for seg in &segments {
            let sector_ceiling =
                seg.address as u64 + seg.data.len() as u64 + (FLASH_SECTOR_SIZE - 1) as u64;
            if sector_ceiling > u32::MAX as u64 {
                return Err(PackError::AddressOverflow {
                    address: seg.address,
                    path: seg.source.clone(),
                });
            }
        }

        let mut end = 0u32;
        for (i, seg) in segments.iter().enumerate() {
            if i > 0 && segments[i - 1].address == seg.address {
                return Err(PackError::DuplicateAddress {
                    address: seg.address,
                    path: seg.source.clone(),
                });
            }
            if seg.sector_start() < end {
                return Err(PackError::Overlap {
                    address: seg.address,
                    path: seg.source.clone(),
                });
            }
            end = seg.sector_end();
        }

        // app_offset 0 is the "not found yet" sentinel; an application at
        // exactly FLASH_SECTOR_SIZE is indistinguishable from absent, which
        // matches the bootloader's packing convention.
        let mut app_offset = 0u32;
        for seg in &segments {
            if app_offset != 0 {
                return Err(PackError::SegmentBehindApp {
                    path: seg.source.clone(),
                    app: app_name.to_string(),
                });
            }
            if seg.is_app {
                app_offset = seg.address.saturating_sub(FLASH_SECTOR_SIZE);
            }
        }
        if app_offset == 0 {
            return Err(PackError::AppNotFound(app_name.to_string()));
        }

        Ok(Self {
            segments,
            app_offset,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Application segment address minus one sector, recorded for
    /// downstream tooling.
    pub fn app_offset(&self) -> u32 {
        self.app_offset
    }

    /// Gap-filled concatenation of all segments, without the trailing
    /// checksum. The buffer implicitly starts at the first segment's address.
    pub fn image_bytes(&self) -> Vec<u8> {
        let total: usize = self.segments.iter().map(|s| s.len()).sum();
        let mut out = Vec::with_capacity(total);

        let mut end_addr: Option<u32> = None;
        for seg in &self.segments {
            if let Some(end) = end_addr
                && seg.address > end
            {
                let gap = (seg.address - end) as usize;
                debug!(
                    from = format_args!("{end:#x}"),
                    to = format_args!("{:#x}", seg.address),
                    bytes = gap,
                    "filling gap"
                );
                out.resize(out.len() + gap, FILL_BYTE);
            }
            out.extend_from_slice(&seg.data);
            end_addr = Some(seg.end_address());
        }
        out
    }

    /// The final flash image: gap-filled data followed by the 4-byte
    /// little-endian bootloader checksum.
    pub fn pack(&self) -> Vec<u8> {
        let mut out = self.image_bytes();
        let checksum = bootloader_crc32(&out);
        out.extend_from_slice(&checksum.to_le_bytes());
        out
    }
}
