pub mod state;
pub mod uispec;

use std::str::FromStr;

use askama::Template;
use clap::ValueEnum;

use crate::{
    pkg::internal::adaptors::jobs::spec::JobRecord,
    prelude::{Error, Result},
};
use state::{Facets, NO_CONSTRAINT};
use uispec::{FacetsPage, FacetsText, ListingsPage, ListingsText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        <OutputFormat as ValueEnum>::from_str(s, true)
    }
}

/// Presents an already filtered and sorted view.
pub fn render_listings(
    jobs: Vec<&JobRecord>,
    format: OutputFormat,
    service_name: &str,
) -> Result<String> {
    tracing::debug!("rendering {} jobs as {:?}", jobs.len(), format);
    match format {
        OutputFormat::Text => Ok(ListingsText { jobs }.render()?),
        OutputFormat::Json => serde_json::to_string_pretty(&jobs).map_err(Error::Encode),
        OutputFormat::Html => Ok(ListingsPage {
            service_name,
            jobs,
        }
        .render()?),
    }
}

pub fn render_facets(facets: &Facets, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(facets).map_err(Error::Encode),
        OutputFormat::Text => Ok(FacetsText {
            no_constraint: NO_CONSTRAINT,
            facets,
        }
        .render()?),
        OutputFormat::Html => Ok(FacetsPage {
            no_constraint: NO_CONSTRAINT,
            facets,
        }
        .render()?),
    }
}
