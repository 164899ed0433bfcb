use std::path::PathBuf;

/// Smallest erasable flash unit. Overlap validation works at this
/// granularity; gap fill does not.
pub const FLASH_SECTOR_SIZE: u32 = 0x1000;

/// One (address, data) unit to be placed into the output image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub address: u32,
    pub data: Vec<u8>,
    /// File the data was read from, kept for diagnostics.
    pub source: PathBuf,
    /// True if this is the designated application binary.
    pub is_app: bool,
}

impl Segment {
    pub fn new(address: u32, data: Vec<u8>, source: impl Into<PathBuf>, is_app: bool) -> Self {
        debug_assert!(
            data.len() <= u32::MAX as usize,
            "segment data exceeds u32::MAX bytes"
        );
        Self {
            address,
            data,
            source: source.into(),
            is_app,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// One past the last data byte. Gap fill uses exact byte extents.
    pub fn end_address(&self) -> u32 {
        self.address + self.data.len() as u32
    }

    pub fn sector_start(&self) -> u32 {
        self.address & !(FLASH_SECTOR_SIZE - 1)
    }

    /// Inclusive end of the last sector touched by this segment.
    ///
    /// Callers must have rejected segments whose sector span overflows the
    /// 32-bit address space (see `FlashImage::new`).
    pub fn sector_end(&self) -> u32 {
        ((self.address + self.data.len() as u32 + FLASH_SECTOR_SIZE - 1) & !(FLASH_SECTOR_SIZE - 1))
            - 1
    }
}
