use clap::{Parser, Subcommand};
use jobboard::{conf::Settings, prelude::Result};

mod facets;
mod list;

#[derive(Parser)]
#[command(about = "filters and sorts job listings from a JSON file")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Print the listings matching the given filters
    List(list::ListArgs),
    /// Print the choices available for each filter
    Facets(facets::FacetsArgs),
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    let settings = Settings::new()?;
    match args.command {
        Some(SubCommandType::List(args)) => {
            list::apply(args, &settings).await?;
        }
        Some(SubCommandType::Facets(args)) => {
            facets::apply(args, &settings).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
