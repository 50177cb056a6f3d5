use clap::Args;
use fiff_tree::tree::Node;
use itertools::Itertools;
use miette::{Context, Result};
use owo_colors::{OwoColorize, Stream::Stdout};
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct FindArgs {
    /// An input FIFF file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// The block kind to look for, e.g. 101 for measurement info
    #[arg(short, long, value_name = "KIND", allow_negative_numbers = true)]
    block: i32,
}

impl FindArgs {
    pub fn handle(&self) -> Result<()> {
        let (mut reader, directory) = super::open(&self.file)?;
        let tree = Node::build(&mut reader, &directory)
            .context(format!("building the block tree of {}", self.file.display()))?;

        let found = tree.find(self.block);
        if found.is_empty() {
            info!("no {} blocks in {}", super::block_name(self.block), self.file.display());
            return Ok(());
        }

        for (i, node) in found.iter().enumerate() {
            let first = node
                .entries
                .as_ref()
                .and_then(|entries| entries.first())
                .map(|entry| format!("{:#010x}", entry.pos))
                .unwrap_or("-".into());

            let children = node
                .children
                .iter()
                .map(|child| super::block_name(child.block))
                .join(", ");

            println!(
                "{} {} at {}: {} entries [{}]",
                format!("#{}", i).if_supports_color(Stdout, |t| t.dimmed()),
                super::block_name(node.block).if_supports_color(Stdout, |t| t.bold()),
                first,
                node.nent(),
                children,
            );
        }

        Ok(())
    }
}
