use meet_profile::ProfileRecord;
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32String};

/// Fuzzy index over the three searchable profile fields: idea text,
/// interest verticals (element-wise) and first name.
///
/// Built once per roster snapshot and frozen; queries only read it. The
/// matcher held inside is scratch space, which is why [`SearchIndex::search`]
/// takes `&mut self`.
pub struct SearchIndex {
    matcher: Matcher,
    entries: Vec<IndexedFields>,
}

/// Pre-encoded haystacks for one record.
struct IndexedFields {
    idea: Option<Utf32String>,
    verticals: Vec<Utf32String>,
    first_name: Option<Utf32String>,
}

impl SearchIndex {
    /// Encode the searchable fields of every record.
    pub fn build(records: &[ProfileRecord]) -> Self {
        let entries = records
            .iter()
            .map(|record| IndexedFields {
                idea: record.idea.as_deref().map(Utf32String::from),
                verticals: record
                    .verticals
                    .iter()
                    .map(|v| Utf32String::from(v.as_str()))
                    .collect(),
                first_name: if record.first_name.is_empty() {
                    None
                } else {
                    Some(Utf32String::from(record.first_name.as_str()))
                },
            })
            .collect::<Vec<_>>();

        log::debug!("search index built over {} records", entries.len());
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            entries,
        }
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Positions of the records matching `query`, best match first.
    ///
    /// A record scores as its best field: the idea text, any single
    /// vertical, or the first name. Records with no overlap on any field
    /// are excluded. Ties keep roster order (stable sort), so a fixed
    /// index and query always produce the same sequence. Empty queries
    /// belong to the browsing path and match nothing here.
    pub fn search(&mut self, query: &str) -> Vec<usize> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
        let matcher = &mut self.matcher;

        let mut scored: Vec<(usize, u32)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(idx, fields)| {
                let idea = fields
                    .idea
                    .as_ref()
                    .and_then(|text| pattern.score(text.slice(..), matcher));

                let vertical = fields
                    .verticals
                    .iter()
                    .filter_map(|tag| pattern.score(tag.slice(..), matcher))
                    .max();

                let first_name = fields
                    .first_name
                    .as_ref()
                    .and_then(|name| pattern.score(name.slice(..), matcher));

                let best = [idea, vertical, first_name].into_iter().flatten().max()?;
                Some((idx, best))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        log::debug!("query '{query}': {} of {} records match", scored.len(), self.entries.len());
        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(first_name: &str, idea: Option<&str>, verticals: &[&str]) -> ProfileRecord {
        ProfileRecord {
            id: first_name.to_string(),
            first_name: first_name.to_string(),
            last_name: String::new(),
            idea: idea.map(str::to_string),
            verticals: verticals.iter().map(|v| v.to_string()).collect(),
            visible: true,
        }
    }

    fn sample() -> Vec<ProfileRecord> {
        vec![
            record("amy", Some("AI for crops"), &["sustainability"]),
            record("ben", Some("VR museum tours"), &["AR/VR"]),
            record("cleo", None, &["healthcare", "education"]),
        ]
    }

    #[test]
    fn test_idea_text_match() {
        let mut index = SearchIndex::build(&sample());
        assert_eq!(index.search("crops"), vec![0]);
    }

    #[test]
    fn test_vertical_matches_element_wise() {
        let mut index = SearchIndex::build(&sample());
        assert_eq!(index.search("healthcare"), vec![2]);
    }

    #[test]
    fn test_first_name_match() {
        let mut index = SearchIndex::build(&sample());
        let hits = index.search("ben");
        assert!(hits.contains(&1), "hits: {hits:?}");
    }

    #[test]
    fn test_typo_still_matches() {
        let mut index = SearchIndex::build(&sample());
        // Dropped letter: "helthcare" should still reach "healthcare".
        assert_eq!(index.search("helthcare"), vec![2]);
    }

    #[test]
    fn test_no_overlap_returns_nothing() {
        let mut index = SearchIndex::build(&sample());
        assert!(index.search("zzzqqq").is_empty());
    }

    #[test]
    fn test_same_query_same_order() {
        let mut index = SearchIndex::build(&sample());
        let first = index.search("ar");
        let second = index.search("ar");
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let mut index = SearchIndex::build(&sample());
        assert!(index.search("").is_empty());
        assert!(index.search("   ").is_empty());
    }

    #[test]
    fn test_records_without_any_field_are_unmatchable() {
        let mut index = SearchIndex::build(&[record("", None, &[])]);
        assert_eq!(index.len(), 1);
        assert!(index.search("anything").is_empty());
    }
}
