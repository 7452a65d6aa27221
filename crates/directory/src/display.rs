//! Display-only derivations: name casing, tag coloring and the contact
//! reference. All pure and total; partial records degrade to empty strings
//! rather than failing.

use meet_profile::ProfileRecord;
use serde::Serialize;

/// Fixed tag palette; [`color_bucket`] indexes into it.
pub const COLOR_PALETTE: [&str; 3] = ["#34b2cb", "#E51B5D", "#F46E20"];

/// Render-ready projection of one profile record. Derived per read, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub id: String,
    pub display_name: String,
    pub idea: Option<String>,
    pub tags: Vec<TagBadge>,
    pub contact_url: String,
}

/// One interest vertical with its palette color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagBadge {
    pub label: String,
    pub color: &'static str,
}

impl DisplayEntry {
    pub fn from_record(record: &ProfileRecord, contact_base: &str) -> Self {
        Self {
            id: record.id.clone(),
            display_name: display_name(&record.first_name, &record.last_name),
            idea: record.idea.clone(),
            tags: record
                .verticals
                .iter()
                .map(|label| TagBadge {
                    label: label.clone(),
                    color: tag_color(label),
                })
                .collect(),
            contact_url: contact_url(contact_base, &record.id),
        }
    }
}

/// Capitalized first name plus the uppercased initial of the last name:
/// `("ana", "lopez")` → `"Ana L"`. Empty inputs stay empty, so `("", "x")`
/// is `" X"` and `("ana", "")` is just `"Ana"`.
pub fn display_name(first_name: &str, last_name: &str) -> String {
    let mut name = capitalize_first(first_name);
    if let Some(initial) = last_name.chars().next() {
        name.push(' ');
        name.extend(initial.to_uppercase());
    }
    name
}

/// Uppercase the first character, keep the rest untouched.
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Palette bucket for a tag, split on the lowercased first character:
/// before `'f'` → 0, before `'j'` → 1, rest → 2. A coarse lexicographic
/// heuristic to spread colors, not a semantic grouping; empty tags land in
/// bucket 0.
pub fn color_bucket(tag: &str) -> usize {
    match tag.chars().next().map(|c| c.to_ascii_lowercase()) {
        None => 0,
        Some(c) if c < 'f' => 0,
        Some(c) if c < 'j' => 1,
        Some(_) => 2,
    }
}

/// Palette color for a tag.
pub fn tag_color(tag: &str) -> &'static str {
    COLOR_PALETTE[color_bucket(tag)]
}

/// Contact link for a record id. Purely structural; nothing here ever
/// resolves it.
pub fn contact_url(base: &str, id: &str) -> String {
    format!("{}/users/{}/contact", base.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_name_capitalizes_and_abbreviates() {
        assert_eq!(display_name("ana", "lopez"), "Ana L");
        assert_eq!(display_name("Ana", "Lopez"), "Ana L");
        assert_eq!(display_name("amy", "w"), "Amy W");
    }

    #[test]
    fn test_display_name_handles_empty_fields() {
        assert_eq!(display_name("", "x"), " X");
        assert_eq!(display_name("ana", ""), "Ana");
        assert_eq!(display_name("", ""), "");
    }

    #[test]
    fn test_display_name_only_touches_the_first_character() {
        assert_eq!(display_name("aNA", "lopez"), "ANA L");
        assert_eq!(display_name("émile", "zola"), "Émile Z");
    }

    #[test]
    fn test_color_bucket_boundaries() {
        assert_eq!(color_bucket("education"), 0); // 'e' < 'f'
        assert_eq!(color_bucket("fintech"), 1); // 'f'
        assert_eq!(color_bucket("healthcare"), 1); // 'h'
        assert_eq!(color_bucket("iot"), 1); // 'i' < 'j'
        assert_eq!(color_bucket("justice"), 2); // 'j'
        assert_eq!(color_bucket("sustainability"), 2);
    }

    #[test]
    fn test_color_bucket_is_case_insensitive() {
        assert_eq!(color_bucket("AR/VR"), 0);
        assert_eq!(color_bucket("Healthcare"), 1);
        assert_eq!(color_bucket("Systems"), 2);
    }

    #[test]
    fn test_color_bucket_tolerates_empty_and_odd_tags() {
        assert_eq!(color_bucket(""), 0);
        assert_eq!(color_bucket("3d printing"), 0);
        assert_eq!(tag_color("education"), COLOR_PALETTE[0]);
        assert_eq!(tag_color("sustainability"), COLOR_PALETTE[2]);
    }

    #[test]
    fn test_contact_url_concatenation() {
        assert_eq!(
            contact_url("https://api.meet.dev", "u1"),
            "https://api.meet.dev/users/u1/contact"
        );
        assert_eq!(
            contact_url("https://api.meet.dev/", "u1"),
            "https://api.meet.dev/users/u1/contact"
        );
    }

    #[test]
    fn test_from_record_derives_everything() {
        let record = ProfileRecord {
            id: "u1".into(),
            first_name: "amy".into(),
            last_name: "lopez".into(),
            idea: Some("AI for crops".into()),
            verticals: vec!["education".into(), "sustainability".into()],
            visible: true,
        };

        let entry = DisplayEntry::from_record(&record, "https://api.meet.dev");
        assert_eq!(entry.display_name, "Amy L");
        assert_eq!(entry.idea.as_deref(), Some("AI for crops"));
        assert_eq!(
            entry.tags,
            vec![
                TagBadge {
                    label: "education".into(),
                    color: COLOR_PALETTE[0],
                },
                TagBadge {
                    label: "sustainability".into(),
                    color: COLOR_PALETTE[2],
                },
            ]
        );
        assert_eq!(entry.contact_url, "https://api.meet.dev/users/u1/contact");
    }
}
