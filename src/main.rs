//! # A memory dump tile viewer
//!
//! Reads a raw memory dump and renders 8x8 2bpp planar tiles as ascii art
//! on stdout. By default it reads `./mem_dump.dat` and decodes the tiles at
//! 0x8010, 0x8020, 0x8030 and 0x8190.
//!
//! Help for command line options is available using -h or --help.
#[macro_use]
mod macros;
mod config;
mod error;
mod memory;
mod tile;
use std::io::{self, Write};

use crate::error::Error;
use crate::memory::Dump;
use crate::tile::Tile;

fn main() {
    config::init();
    if let Err(e) = run() {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let path = config::dump_path();
    let dump = Dump::from_file(&path)?;
    let offsets = config::offsets();
    if offsets.is_empty() {
        return Err(general_err!("no tile offsets to decode"));
    }
    info!("decoding {} tile(s) from \"{}\"", offsets.len(), path.display());
    let stdout = io::stdout();
    dump_tiles(&dump, &offsets, &mut stdout.lock())
}

/// Decodes and prints one tile per offset, strictly in the given order.
/// Every tile, the last included, is followed by a blank line, the "-----"
/// separator and another blank line.
fn dump_tiles<W: Write>(dump: &Dump, offsets: &[u32], out: &mut W) -> Result<(), Error> {
    for &addr in offsets {
        verbose_println!("tile at ${:04x}", addr);
        let tile = Tile::decode(dump.tile(addr)?);
        for line in tile.render() {
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "\n-----\n")?;
    }
    Ok(())
}
