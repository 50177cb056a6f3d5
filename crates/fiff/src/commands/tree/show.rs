use clap::Args;
use fiff_tree::tree::Node;
use miette::{Context, Result};
use owo_colors::{OwoColorize, Stream::Stdout};
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct ShowArgs {
    /// An input FIFF file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Also print the identifiers of every block
    #[arg(long, default_value_t = false)]
    ids: bool,
}

impl ShowArgs {
    fn render(&self, tree: &Node<'_>) -> String {
        let mut out = String::new();
        for (depth, node) in tree.walk() {
            out.push_str(&"  ".repeat(depth));
            out.push_str(&format!(
                "{} ({}): {} entries, {} children",
                super::block_name(node.block).if_supports_color(Stdout, |t| t.bold()),
                node.block,
                node.nent(),
                node.nchild(),
            ));

            if self.ids {
                if let Some(id) = &node.id {
                    out.push_str(&format!(
                        " {}",
                        format!("id {}", id).if_supports_color(Stdout, |t| t.green())
                    ));
                }
                if let Some(parent) = &node.parent_id {
                    out.push_str(&format!(
                        " {}",
                        format!("from {}", parent).if_supports_color(Stdout, |t| t.blue())
                    ));
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn handle(&self) -> Result<()> {
        let (mut reader, directory) = super::open(&self.file)?;
        info!("{} tags in {}", directory.len(), self.file.display());

        let tree = Node::build(&mut reader, &directory)
            .context(format!("building the block tree of {}", self.file.display()))?;

        print!("{}", self.render(&tree));
        Ok(())
    }
}
