use std::path::{Path, PathBuf};

use clap::Parser;

pub mod circuit;
pub mod dsu;
pub mod part1;
pub mod part2;

#[derive(Debug, Parser)]
#[command(about = "Wires junction boxes into circuits, closest pairs first")]
pub struct CliArgs {
    /// Puzzle input, one `x,y,z` junction box per line.
    pub input_path: Option<PathBuf>,
}

impl CliArgs {
    /// The given path, or `file_name` next to this crate's manifest.
    pub fn input_path_or(&self, file_name: &str) -> PathBuf {
        self.input_path
            .clone()
            .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(file_name))
    }
}
