use clap::Args;
use fiff_tree::{copy_tree, tree::Node, types::FileId, write::FiffWriterOptions, FiffWriter};
use miette::{miette, Context, IntoDiagnostic, Result};
use std::{fs::File, io::BufWriter, path::PathBuf};
use tracing::info;

#[derive(Args)]
pub struct CopyArgs {
    /// An input FIFF file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target FIFF file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// The block kind to copy
    #[arg(short, long, value_name = "KIND", allow_negative_numbers = true)]
    block: i32,

    /// Identify the copies with a new identifier instead of the source file's
    #[arg(long, default_value_t = false)]
    fresh_id: bool,

    /// Store a tag directory in the target
    #[arg(long, default_value_t = false)]
    directory: bool,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl CopyArgs {
    pub fn handle(&self) -> Result<()> {
        let (mut reader, directory) = super::open(&self.file)?;
        let tree = Node::build(&mut reader, &directory)
            .context(format!("building the block tree of {}", self.file.display()))?;

        let found = tree.find(self.block);
        if found.is_empty() {
            return Err(miette!(
                "no {} blocks in {}",
                super::block_name(self.block),
                self.file.display()
            ));
        }

        let out_id = if self.fresh_id {
            Some(FileId::generate())
        } else {
            tree.id
        };

        info!("creating {}", &self.output.display());
        let out = if !self.overwrite {
            File::create_new(&self.output)
                .into_diagnostic()
                .context(format!("creating {}", &self.output.display()))?
        } else {
            File::create(&self.output)
                .into_diagnostic()
                .context(format!("creating {}", &self.output.display()))?
        };

        let mut fiff = FiffWriter::new(
            BufWriter::new(out),
            FiffWriterOptions::builder()
                .directory(self.directory)
                .build(),
        );

        fiff.start_file(FileId::generate())
            .context("writing the file header")?;

        info!("copying {} blocks", found.len());
        copy_tree(&mut reader, out_id, found, &mut fiff)
            .context(format!("copying from {}", self.file.display()))?;

        fiff.finish()
            .context("finalizing fiff file")?
            .into_inner()
            .map_err(|e| e.into_error())
            .into_diagnostic()
            .context(format!("flushing {}", &self.output.display()))?;

        Ok(())
    }
}
