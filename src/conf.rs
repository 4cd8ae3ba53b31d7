use config::{Config, Environment};
use serde::Deserialize;

use crate::{
    pkg::{board::OutputFormat, internal::adaptors::jobs::ordering::SortKey},
    prelude::Result,
};

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub service_name: String,
    pub default_sort: String,
    pub output_format: String,
}

impl Settings {
    pub fn new() -> Result<Self> {
        let conf = Config::builder()
            .set_default("service_name", "jobboard")?
            .set_default("default_sort", "")?
            .set_default("output_format", "text")?
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        match s.output_format.to_lowercase().as_str() {
            "text" | "json" | "html" => {
                s.output_format = s.output_format.to_lowercase();
            }
            other => {
                tracing::warn!("unknown output format {:?}, falling back to text", other);
                s.output_format = "text".into();
            }
        }
        Ok(s)
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::parse(&self.default_sort)
    }

    pub fn format(&self) -> OutputFormat {
        self.output_format.parse().unwrap_or(OutputFormat::Text)
    }
}
