pub mod checksum;
pub mod collect;
pub mod error;
pub mod image;
pub mod segment;

pub use checksum::bootloader_crc32;
pub use collect::{CollectOptions, DEFAULT_EXCLUDE, collect_segments, parse_address};
pub use error::PackError;
pub use image::{FILL_BYTE, FlashImage};
pub use segment::{FLASH_SECTOR_SIZE, Segment};
