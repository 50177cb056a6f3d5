pub mod show;

#[derive(clap::Subcommand)]
pub enum StcCommands {
    /// Summarize or dump an STC file
    Show(show::ShowArgs),
}

impl StcCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            StcCommands::Show(show) => show.handle(),
        }
    }
}
