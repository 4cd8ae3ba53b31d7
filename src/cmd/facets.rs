use std::path::PathBuf;

use clap::Args;
use jobboard::{
    conf::Settings,
    pkg::{
        board::{render_facets, state::AppState, OutputFormat},
        internal::source::FileSource,
    },
    prelude::Result,
};

#[derive(Args)]
pub struct FacetsArgs {
    /// JSON file holding an array of job postings
    pub file: PathBuf,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub async fn apply(args: FacetsArgs, settings: &Settings) -> Result<()> {
    let mut state = AppState::new();
    state.load(&FileSource::new(&args.file)).await?;
    let format = args.format.unwrap_or_else(|| settings.format());
    let out = render_facets(&state.facets(), format)?;
    println!("{}", out);
    Ok(())
}
