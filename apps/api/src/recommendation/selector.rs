//! Deterministic template selection.
//!
//! The fingerprint is `militaryOccupationCode + branch + technicalSkills`
//! (skills concatenated with no separator), hashed with a 31-multiplier
//! rolling hash over UTF-16 code units with 32-bit signed wraparound. The
//! absolute value modulo the catalogue size picks the template.
//!
//! Changing any part of this (hash, separator, code units, catalogue order)
//! remaps existing profiles to different templates.

use crate::models::profile::Profile;
use crate::recommendation::catalogue::{PathwayTemplate, TEMPLATES};

/// Builds the string that identifies a profile for template selection.
pub fn fingerprint(profile: &Profile) -> String {
    let mut key = String::with_capacity(
        profile.military_occupation_code.len()
            + profile.branch.len()
            + profile.technical_skills.iter().map(String::len).sum::<usize>(),
    );
    key.push_str(&profile.military_occupation_code);
    key.push_str(&profile.branch);
    for skill in &profile.technical_skills {
        key.push_str(skill);
    }
    key
}

/// `hash = hash * 31 + code_unit`, wrapping at 32 bits.
pub fn rolling_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Index into a catalogue of `len` templates for the given fingerprint.
pub fn template_index(input: &str, len: usize) -> usize {
    // unsigned_abs keeps i32::MIN well-defined (2^31) instead of overflowing.
    rolling_hash(input).unsigned_abs() as usize % len
}

pub fn select_template(profile: &Profile) -> &'static PathwayTemplate {
    &TEMPLATES[template_index(&fingerprint(profile), TEMPLATES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::fixtures::army_infantry;

    #[test]
    fn test_rolling_hash_of_empty_string_is_zero() {
        assert_eq!(rolling_hash(""), 0);
    }

    #[test]
    fn test_rolling_hash_known_values() {
        // "a" = 97; "ab" = 97*31 + 98 = 3105
        assert_eq!(rolling_hash("a"), 97);
        assert_eq!(rolling_hash("ab"), 3105);
        // Same values Java's String.hashCode produces.
        assert_eq!(rolling_hash("hello"), 99162322);
        assert_eq!(rolling_hash("11BArmyLeadership"), -1136023804);
    }

    #[test]
    fn test_rolling_hash_wraps_instead_of_overflowing() {
        let long = "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz";
        // Must not panic in debug builds.
        let _ = rolling_hash(long);
    }

    #[test]
    fn test_rolling_hash_is_order_sensitive() {
        assert_ne!(rolling_hash("ab"), rolling_hash("ba"));
    }

    #[test]
    fn test_rolling_hash_uses_utf16_code_units() {
        // U+1F600 is a surrogate pair: 0xD83D, 0xDE00
        let expected = 0xD83Di32.wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(rolling_hash("\u{1F600}"), expected);
    }

    #[test]
    fn test_template_index_handles_i32_min() {
        // |i32::MIN| = 2^31, and 2^31 % 5 = 3
        assert_eq!((i32::MIN.unsigned_abs() as usize) % 5, 3);
        assert!(template_index("anything", 5) < 5);
    }

    #[test]
    fn test_negative_hash_uses_absolute_value() {
        let input = "zzzzzz";
        let hash = rolling_hash(input);
        assert!(hash < 0, "fixture should wrap negative, got {hash}");
        assert_eq!(
            template_index(input, 5),
            (hash as i64).unsigned_abs() as usize % 5
        );
    }

    #[test]
    fn test_fingerprint_concatenates_mos_branch_and_skills() {
        let mut profile = army_infantry();
        profile.technical_skills = vec!["Radio".to_string(), "Leadership".to_string()];
        assert_eq!(fingerprint(&profile), "11BArmyRadioLeadership");
    }

    #[test]
    fn test_empty_skills_contribute_nothing() {
        let mut profile = army_infantry();
        profile.technical_skills.clear();
        assert_eq!(fingerprint(&profile), "11BArmy");
        let first = select_template(&profile).id;
        let second = select_template(&profile).id;
        assert_eq!(first, second);
    }

    #[test]
    fn test_known_profile_maps_to_pinned_template() {
        // |-1136023804| % 5 = 4
        assert_eq!(select_template(&army_infantry()).id, "aviation");
    }

    #[test]
    fn test_same_profile_selects_same_template() {
        let a = army_infantry();
        let b = army_infantry();
        assert!(std::ptr::eq(select_template(&a), select_template(&b)));
    }

    #[test]
    fn test_selection_ignores_non_fingerprint_fields() {
        let a = army_infantry();
        let mut b = army_infantry();
        b.career_goals = "Something completely different".to_string();
        b.willing_to_relocate = false;
        assert_eq!(select_template(&a).id, select_template(&b).id);
    }
}
