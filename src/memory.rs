use std::fs;
use std::path::Path;

use crate::error::{Error, ErrorKind};
use crate::tile::TILE_BYTES;

/// A memory dump read from disk in one shot and never modified afterwards.
/// The file is an opaque flat byte array; no header is parsed.
#[derive(Debug)]
pub struct Dump {
    bytes: Vec<u8>,
}

impl Dump {
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let bytes = fs::read(path).map_err(|e| {
            Error::new(
                ErrorKind::Io,
                Some(path.display().to_string()),
                format!("failed to read dump: {}", e).as_str(),
            )
        })?;
        verbose_println!("loaded {} bytes from \"{}\"", bytes.len(), path.display());
        Ok(Dump { bytes })
    }

    #[allow(unused)]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Dump { bytes }
    }

    /// Returns the 16-byte tile window starting at addr. A window that
    /// extends past the end of the dump is an out-of-range error; missing
    /// bytes are never zero-filled.
    pub fn tile(&self, addr: u32) -> Result<&[u8; TILE_BYTES], Error> {
        let start = addr as usize;
        let end = start.saturating_add(TILE_BYTES);
        if end > self.bytes.len() {
            return Err(Error::new(
                ErrorKind::Range,
                None,
                format!(
                    "tile at ${:04x} extends past end of dump ({} bytes)",
                    addr,
                    self.bytes.len()
                )
                .as_str(),
            ));
        }
        let window = &self.bytes[start..end];
        // the window is exactly TILE_BYTES long
        Ok(window.try_into().unwrap())
    }
}
