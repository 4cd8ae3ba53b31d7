use std::path::PathBuf;

use clap::Args;
use jobboard::{
    conf::Settings,
    pkg::{
        board::{render_listings, state::AppState, OutputFormat},
        internal::{
            adaptors::jobs::{ordering::SortKey, selectors::Criteria},
            source::FileSource,
        },
    },
    prelude::Result,
};

#[derive(Args)]
pub struct ListArgs {
    /// JSON file holding an array of job postings
    pub file: PathBuf,
    #[arg(long)]
    pub level: Option<String>,
    #[arg(long = "type")]
    pub job_type: Option<String>,
    #[arg(long)]
    pub skill: Option<String>,
    /// title-asc, title-desc, posted-asc or posted-desc
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub async fn apply(args: ListArgs, settings: &Settings) -> Result<()> {
    let mut state = AppState::new();
    state.load(&FileSource::new(&args.file)).await?;

    let criteria = Criteria {
        level: args.level,
        job_type: args.job_type,
        skill: args.skill,
    };
    let key = match args.sort.as_deref() {
        Some(literal) => SortKey::parse(literal),
        None => settings.sort_key(),
    };
    let view = state.view(&criteria, key);
    tracing::info!("showing {} of {} jobs", view.len(), state.store().len());

    let format = args.format.unwrap_or_else(|| settings.format());
    let out = render_listings(view, format, &settings.service_name)?;
    println!("{}", out);
    Ok(())
}
