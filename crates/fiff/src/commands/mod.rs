pub mod stc;
pub mod tree;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Inspect and restructure the block tree of FIFF files
    Tree {
        #[command(subcommand)]
        command: tree::TreeCommands,
    },
    /// Handle STC source estimate files
    Stc {
        #[command(subcommand)]
        command: stc::StcCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Tree { command } => command.handle(),
            Commands::Stc { command } => command.handle(),
        }
    }
}
