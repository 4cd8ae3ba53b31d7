use super::spec::{JobField, JobRecord};

/// Exact-match constraints on the categorical fields.
///
/// `None` and `Some("")` both leave the field unconstrained.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub level: Option<String>,
    pub job_type: Option<String>,
    pub skill: Option<String>,
}

impl Criteria {
    pub fn new() -> Self {
        Criteria::default()
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = Some(job_type.into());
        self
    }

    pub fn skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    pub fn get(&self, field: JobField) -> Option<&str> {
        let value = match field {
            JobField::Level => self.level.as_deref(),
            JobField::Type => self.job_type.as_deref(),
            JobField::Skill => self.skill.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        JobField::ALL.iter().all(|field| self.get(*field).is_none())
    }

    pub fn matches(&self, job: &JobRecord) -> bool {
        JobField::ALL.iter().all(|field| match self.get(*field) {
            Some(wanted) => job.field(*field) == wanted,
            None => true,
        })
    }
}

/// Records satisfying every active criterion, in their original order.
pub fn filter<'a, I>(records: I, criteria: &Criteria) -> Vec<&'a JobRecord>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    if criteria.is_empty() {
        return records.into_iter().collect();
    }
    let selected: Vec<&JobRecord> = records
        .into_iter()
        .filter(|job| criteria.matches(job))
        .collect();
    tracing::debug!("criteria {:?} selected {} jobs", criteria, selected.len());
    selected
}
