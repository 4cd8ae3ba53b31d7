use std::fmt::{self, Display};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::posted::{normalize_posted, UNKNOWN_TIME};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_TYPE: &str = "Unknown Type";
pub const UNKNOWN_LEVEL: &str = "Unknown Level";
pub const UNKNOWN_SKILL: &str = "Unknown Skill";
pub const NO_DETAILS: &str = "No Details Available";
pub const NO_LINK: &str = "#";

/// One element of an uploaded listing document, before defaulting.
///
/// Every field is optional. Values that are not non-empty strings are kept as
/// `None` so that defaulting has a single presence check to make.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct RawJob {
    #[serde(rename = "Title", default, deserialize_with = "deserialize_present_string")]
    pub title: Option<String>,
    #[serde(rename = "Posted", default, deserialize_with = "deserialize_present_string")]
    pub posted: Option<String>,
    #[serde(rename = "Type", default, deserialize_with = "deserialize_present_string")]
    pub job_type: Option<String>,
    #[serde(rename = "Level", default, deserialize_with = "deserialize_present_string")]
    pub level: Option<String>,
    #[serde(rename = "Skill", default, deserialize_with = "deserialize_present_string")]
    pub skill: Option<String>,
    #[serde(rename = "Detail", default, deserialize_with = "deserialize_present_string")]
    pub detail: Option<String>,
    #[serde(
        rename = "Job Page Link",
        default,
        deserialize_with = "deserialize_present_string"
    )]
    pub link: Option<String>,
}

fn deserialize_present_string<'de, D>(deserializer: D) -> core::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Canonical posting. Every field is always populated.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub title: String,
    pub posted_minutes: u64,
    #[serde(rename = "type")]
    pub job_type: String,
    pub level: String,
    pub skill: String,
    pub detail: String,
    pub link: String,
}

impl From<RawJob> for JobRecord {
    fn from(raw: RawJob) -> Self {
        let posted = raw.posted.as_deref().unwrap_or(UNKNOWN_TIME);
        JobRecord {
            posted_minutes: normalize_posted(posted),
            title: raw.title.unwrap_or_else(|| UNKNOWN_TITLE.into()),
            job_type: raw.job_type.unwrap_or_else(|| UNKNOWN_TYPE.into()),
            level: raw.level.unwrap_or_else(|| UNKNOWN_LEVEL.into()),
            skill: raw.skill.unwrap_or_else(|| UNKNOWN_SKILL.into()),
            detail: raw.detail.unwrap_or_else(|| NO_DETAILS.into()),
            link: raw.link.unwrap_or_else(|| NO_LINK.into()),
        }
    }
}

impl JobRecord {
    pub fn field(&self, field: JobField) -> &str {
        match field {
            JobField::Level => &self.level,
            JobField::Type => &self.job_type,
            JobField::Skill => &self.skill,
        }
    }

    pub fn formatted_posted(&self) -> String {
        format!("{} minutes ago", self.posted_minutes)
    }
}

/// The categorical fields that selection inputs are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobField {
    Level,
    Type,
    Skill,
}

impl JobField {
    pub const ALL: [JobField; 3] = [JobField::Level, JobField::Type, JobField::Skill];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobField::Level => "level",
            JobField::Type => "type",
            JobField::Skill => "skill",
        }
    }
}

impl Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
