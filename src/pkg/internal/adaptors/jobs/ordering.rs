use std::cmp::Ordering;

use feruca::Collator;

use super::spec::JobRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    TitleAsc,
    TitleDesc,
    PostedAsc,
    PostedDesc,
    /// Keeps the input order.
    #[default]
    Unsorted,
}

impl SortKey {
    /// Maps a sort literal to its key. Anything unrecognised keeps input order.
    pub fn parse(key: &str) -> Self {
        match key {
            "title-asc" => SortKey::TitleAsc,
            "title-desc" => SortKey::TitleDesc,
            "posted-asc" => SortKey::PostedAsc,
            "posted-desc" => SortKey::PostedDesc,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::PostedAsc => "posted-asc",
            SortKey::PostedDesc => "posted-desc",
            SortKey::Unsorted => "",
        }
    }

    fn compare(&self, collator: &mut Collator, a: &JobRecord, b: &JobRecord) -> Ordering {
        match self {
            SortKey::TitleAsc => collator.collate(a.title.as_str(), b.title.as_str()),
            SortKey::TitleDesc => collator.collate(b.title.as_str(), a.title.as_str()),
            SortKey::PostedAsc => a.posted_minutes.cmp(&b.posted_minutes),
            SortKey::PostedDesc => b.posted_minutes.cmp(&a.posted_minutes),
            SortKey::Unsorted => Ordering::Equal,
        }
    }
}

/// Orders `records` by `key` into a new sequence. Ties keep input order.
///
/// Titles are compared with the CLDR root collation, so case and accents are
/// secondary to the base letters.
pub fn sort<'a, I>(records: I, key: SortKey) -> Vec<&'a JobRecord>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    let mut ordered: Vec<&JobRecord> = records.into_iter().collect();
    if key != SortKey::Unsorted {
        let mut collator = Collator::default();
        ordered.sort_by(|a, b| key.compare(&mut collator, a, b));
    }
    tracing::debug!("sorted {} jobs by {:?}", ordered.len(), key.as_str());
    ordered
}
