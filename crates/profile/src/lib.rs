//! # Meet Profile
//!
//! Data model for participant profiles: the duck-typed wire payloads served
//! by the remote profile store, the normalized record the directory engine
//! works with, the fixed form vocabulary, and the timezone-offset validation
//! applied before a profile submission.
//!
//! Roster entries arrive as loosely-shaped nested JSON. Every field that may
//! be absent on the wire is an `Option` here; absence is ordinary data, never
//! an error.

mod record;
mod timezone;
mod types;
mod vocab;

pub use record::ProfileRecord;
pub use timezone::is_valid_gmt_offset;
pub use types::{ApplicationInfo, Forms, MeetInfo, RawProfile, UserRef};
pub use vocab::{
    is_known_commitment, is_known_skill, is_known_vertical, COMMITMENT_LEVELS, SKILLS, VERTICALS,
};
