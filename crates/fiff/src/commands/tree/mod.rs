use fiff_tree::Directory;
use miette::{Context, IntoDiagnostic, Result};
use std::{fs::File, io::BufReader, path::Path};

pub mod copy;
pub mod find;
pub mod show;

#[derive(clap::Subcommand)]
pub enum TreeCommands {
    /// Copy every block of a kind into a new FIFF file
    Copy(copy::CopyArgs),
    /// List the blocks of a kind
    Find(find::FindArgs),
    /// Print the block tree of a FIFF file
    Show(show::ShowArgs),
}

impl TreeCommands {
    pub fn handle(&self) -> Result<()> {
        match self {
            TreeCommands::Copy(copy) => copy.handle(),
            TreeCommands::Find(find) => find.handle(),
            TreeCommands::Show(show) => show.handle(),
        }
    }
}

/// Open a FIFF file and read its directory
fn open(path: &Path) -> Result<(BufReader<File>, Directory)> {
    let f = File::open(path)
        .into_diagnostic()
        .context(format!("path: {}", path.display()))?;
    let mut reader = BufReader::new(f);

    let directory = Directory::open(&mut reader).context(format!("reading {}", path.display()))?;
    Ok((reader, directory))
}

/// Human readable name of a block kind
fn block_name(block: i32) -> String {
    match fiff_tree::constants::block::name(block) {
        Some(name) => name.to_string(),
        None => format!("block {}", block),
    }
}
