//! Fixed vocabularies offered by the profile form.
//!
//! These mirror the choices rendered to participants. They are advisory:
//! roster payloads carrying values outside these lists still display and
//! still match searches.

/// Interest verticals a participant can pick.
pub const VERTICALS: [&str; 6] = [
    "healthcare",
    "education",
    "civic engagement",
    "sustainability",
    "social (inter)connectivity",
    "anything cool!",
];

/// Skills a participant can pick.
pub const SKILLS: [&str; 12] = [
    "AI",
    "Data Mining",
    "NLP",
    "Web Development",
    "IOS",
    "Android",
    "Pitching",
    "Marketing",
    "Design",
    "AR/VR",
    "Game Development",
    "Systems",
];

/// Commitment levels as `(value, description)` pairs.
pub const COMMITMENT_LEVELS: [(&str, &str); 3] = [
    (
        "High",
        "Shooting for a prize, will spend majority of time hacking",
    ),
    (
        "Medium",
        "Will submit a substantial project, but with long breaks (e.g lots of rest, workshops)",
    ),
    (
        "Low",
        "Wants to submit something, but won't spend majority of time hacking",
    ),
];

pub fn is_known_vertical(value: &str) -> bool {
    VERTICALS.contains(&value)
}

pub fn is_known_skill(value: &str) -> bool {
    SKILLS.contains(&value)
}

pub fn is_known_commitment(value: &str) -> bool {
    COMMITMENT_LEVELS.iter().any(|(level, _)| *level == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_membership() {
        assert!(is_known_vertical("sustainability"));
        assert!(!is_known_vertical("Sustainability"));
        assert!(!is_known_vertical("blockchain"));
    }

    #[test]
    fn test_skill_membership() {
        assert!(is_known_skill("AR/VR"));
        assert!(!is_known_skill("ar/vr"));
    }

    #[test]
    fn test_commitment_membership() {
        assert!(is_known_commitment("High"));
        assert!(is_known_commitment("Low"));
        assert!(!is_known_commitment("None"));
    }
}
