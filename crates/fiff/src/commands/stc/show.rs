use clap::Args;
use fiff_stc::read_stc;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream::Stdout};
use std::path::PathBuf;

#[derive(Args)]
pub struct ShowArgs {
    /// An input STC file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Dump the whole estimate as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl ShowArgs {
    pub fn handle(&self) -> Result<()> {
        let stc = read_stc(&self.file).context(format!("path: {}", &self.file.display()))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&stc).into_diagnostic()?);
            return Ok(());
        }

        let (min, max) = stc
            .data
            .iter()
            .flatten()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), v| {
                (min.min(*v), max.max(*v))
            });

        println!("{}", self.file.display().if_supports_color(Stdout, |t| t.bold()));
        println!("  vertices: {}", stc.vertices.len());
        println!(
            "  times:    {} from {} s, step {} s",
            stc.n_times(),
            stc.tmin,
            stc.tstep
        );
        if stc.n_times() > 0 && !stc.vertices.is_empty() {
            println!("  range:    {} to {}", min, max);
        }

        Ok(())
    }
}
