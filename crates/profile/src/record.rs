use serde::{Deserialize, Serialize};

use crate::types::RawProfile;

/// A roster entry normalized to the fields the directory engine needs.
///
/// Built only from entries that opted in to being shown; every string field
/// defaults to empty when the wire payload lacks it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileRecord {
    /// Stable key, also the basis of the contact reference.
    pub id: String,

    pub first_name: String,

    pub last_name: String,

    /// Free-text project idea, if the participant wrote one.
    pub idea: Option<String>,

    /// Interest verticals, in submission order.
    pub verticals: Vec<String>,

    /// Always true for records produced by [`ProfileRecord::from_raw`].
    pub visible: bool,
}

impl ProfileRecord {
    /// Normalize one raw entry, or `None` when it is not eligible for
    /// display.
    ///
    /// Eligible means: a submitted `meet_info` whose `show_profile` flag is
    /// explicitly true. Anything else (no form, flag false, flag absent) is
    /// skipped silently; a missing name or identifier is defaulted, never an
    /// error.
    pub fn from_raw(raw: &RawProfile) -> Option<Self> {
        let meet = raw.forms.meet_info.as_ref()?;
        if meet.show_profile != Some(true) {
            return None;
        }

        let application = raw.forms.application_info.as_ref();
        Some(Self {
            id: raw.record_id().to_string(),
            first_name: application
                .and_then(|a| a.first_name.clone())
                .unwrap_or_default(),
            last_name: application
                .and_then(|a| a.last_name.clone())
                .unwrap_or_default(),
            idea: meet.idea.clone(),
            verticals: meet.verticals.clone(),
            visible: true,
        })
    }
}
