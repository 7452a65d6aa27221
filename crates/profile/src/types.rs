use serde::{Deserialize, Serialize};

/// One raw roster entry as served by the profile store.
///
/// The store nests everything under `forms`; a participant who never opened
/// the profile form has no `meet_info` at all. Deserialization must succeed
/// for any such partial shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawProfile {
    /// Top-level record identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Account reference; older payloads carry the identifier here instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,

    /// Submitted forms, keyed by form name.
    #[serde(default)]
    pub forms: Forms,
}

impl RawProfile {
    /// Stable identifier for this entry: `_id`, else `user.id`, else empty.
    ///
    /// An entry with neither is still displayable; uniqueness across the
    /// roster is the store's invariant, not enforced here.
    pub fn record_id(&self) -> &str {
        self.id
            .as_deref()
            .or_else(|| self.user.as_ref().and_then(|u| u.id.as_deref()))
            .unwrap_or("")
    }
}

/// Nested account object carrying an alternate identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// The forms a participant may have submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Forms {
    /// Teammate-finding profile; absent until the participant submits one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meet_info: Option<MeetInfo>,

    /// Application form; source of the participant's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_info: Option<ApplicationInfo>,
}

/// Name fields from the application form (snake_case on the wire).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApplicationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// The full teammate-finding profile payload (camelCase on the wire).
///
/// This is both the nested `forms.meet_info` object of a roster entry and
/// the body fetched/submitted through the profile-edit endpoints. Values
/// outside the fixed vocabularies (`VERTICALS`, `SKILLS`, ...) are kept
/// as-is; the directory never rejects a record over them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetInfo {
    /// Free-text self description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_desc: Option<String>,

    /// Free-text project idea; one of the three searchable fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idea: Option<String>,

    /// Interest verticals; searchable element-wise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verticals: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,

    /// Commitment level: `"High"`, `"Medium"` or `"Low"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<String>,

    /// Timezone as a GMT offset string, e.g. `GMT +0230`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_offset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devpost_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_link: Option<String>,

    /// Opt-in flag; only `Some(true)` makes the entry eligible for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_profile: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_object_deserializes() {
        let raw: RawProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(raw.id, None);
        assert_eq!(raw.forms.meet_info, None);
        assert_eq!(raw.record_id(), "");
    }

    #[test]
    fn test_record_id_prefers_top_level_id() {
        let raw: RawProfile = serde_json::from_value(serde_json::json!({
            "_id": "abc",
            "user": { "id": "nested" }
        }))
        .unwrap();
        assert_eq!(raw.record_id(), "abc");
    }

    #[test]
    fn test_record_id_falls_back_to_user_id() {
        let raw: RawProfile = serde_json::from_value(serde_json::json!({
            "user": { "id": "nested" }
        }))
        .unwrap();
        assert_eq!(raw.record_id(), "nested");
    }

    #[test]
    fn test_meet_info_wire_names_are_camel_case() {
        let info: MeetInfo = serde_json::from_value(serde_json::json!({
            "profileDesc": "hi",
            "idea": "AI for crops",
            "verticals": ["sustainability"],
            "timezoneOffset": "GMT +0800",
            "githubLink": "https://github.com/amy",
            "showProfile": true
        }))
        .unwrap();
        assert_eq!(info.profile_desc.as_deref(), Some("hi"));
        assert_eq!(info.timezone_offset.as_deref(), Some("GMT +0800"));
        assert_eq!(info.show_profile, Some(true));

        let back = serde_json::to_value(&info).unwrap();
        assert_eq!(back["timezoneOffset"], "GMT +0800");
        assert_eq!(back["showProfile"], true);
        // Unset fields stay off the wire entirely.
        assert!(back.get("pronouns").is_none());
    }

    #[test]
    fn test_unknown_fields_and_values_are_tolerated() {
        let raw: RawProfile = serde_json::from_value(serde_json::json!({
            "_id": "1",
            "status": "admitted",
            "forms": {
                "meet_info": {
                    "commitment": "Extreme",
                    "showProfile": true,
                    "somethingNew": 42
                }
            }
        }))
        .unwrap();
        let meet = raw.forms.meet_info.unwrap();
        assert_eq!(meet.commitment.as_deref(), Some("Extreme"));
    }
}
