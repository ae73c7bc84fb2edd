use std::path::PathBuf;

use clap::Parser;
use clap_num::maybe_hex;
use lazy_static::lazy_static;
use serde::Deserialize;

/// The four tile offsets the original diagnostic examined, in print order.
pub const DEFAULT_OFFSETS: [u32; 4] = [0x8010, 0x8020, 0x8030, 0x8190];
/// Companion file written by the emulator's debugger `d`ump command.
pub const DEFAULT_DUMP_PATH: &str = "./mem_dump.dat";

#[derive(Parser, Debug)]
#[command(author,version,about,long_about=None)]
pub struct Args {
    /// Path to the binary memory dump file
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Tile offset to decode (hex ok with '0x'); may be given more than once
    #[arg(long = "offset", value_parser=maybe_hex::<u32>)]
    pub offsets: Vec<u32>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to yaml config file
    #[arg(long, default_value_os_t=PathBuf::from("./tiledump.yaml"))]
    pub config_file_path: PathBuf,

    /// Config loaded from file
    #[arg(skip)]
    pub config_file: Option<ConfigFile>,
}

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    // alternate dump file to read
    pub dump: Option<PathBuf>,
    // tile offsets to decode, in print order
    pub offsets: Option<Vec<u32>>,
}

lazy_static! {
    pub static ref ARGS: Args = if cfg!(test) {
        // manually set parameters for running tests
        Args::parse_from(["test"])
    } else {
        let mut args = Args::parse();
        if let Ok(s) = std::fs::read_to_string(&args.config_file_path) {
            match serde_yaml::from_str(&s) {
                Ok(c) => args.config_file = Some(c),
                Err(e) => warn!(
                    "Ignoring malformed config file \"{}\": {}",
                    args.config_file_path.display(),
                    e
                ),
            }
        }
        args
    };
}

pub fn init() {}

/// Dump path resolution: command line, then config file, then the default.
pub fn dump_path() -> PathBuf {
    if let Some(p) = ARGS.dump.as_ref() {
        return p.clone();
    }
    if let Some(p) = ARGS.config_file.as_ref().and_then(|c| c.dump.as_ref()) {
        return p.clone();
    }
    PathBuf::from(DEFAULT_DUMP_PATH)
}

/// Offset resolution: command line, then config file, then the defaults.
pub fn offsets() -> Vec<u32> {
    if !ARGS.offsets.is_empty() {
        return ARGS.offsets.clone();
    }
    if let Some(o) = ARGS.config_file.as_ref().and_then(|c| c.offsets.as_ref()) {
        return o.clone();
    }
    DEFAULT_OFFSETS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        // under cfg(test) ARGS carries no command line or config file values
        assert_eq!(dump_path(), PathBuf::from(DEFAULT_DUMP_PATH));
        assert_eq!(offsets(), DEFAULT_OFFSETS.to_vec());
    }

    #[test]
    fn config_file_yaml_shape() {
        let c: ConfigFile = serde_yaml::from_str("dump: ./other.dat\noffsets: [32784, 33168]\n")
            .expect("failed to parse config yaml");
        assert_eq!(c.dump, Some(PathBuf::from("./other.dat")));
        assert_eq!(c.offsets, Some(vec![0x8010, 0x8190]));
    }
}
