//! Static reference tables driving the consultation questionnaire.
//!
//! The same keys are used for intent matching and for response
//! interpolation, so matched values always round-trip into the replies.
//! Tables are ordered; matching takes the first hit.

/// Design styles offered by the studio, `key -> description`.
///
/// `mid-century` is listed before `modern` so first-match-wins resolves
/// "mid-century modern" to the more specific key.
pub static DESIGN_STYLES: &[(&str, &str)] = &[
    ("mid-century", "Retro silhouettes, organic curves, and a 1950s sensibility"),
    ("modern", "Clean lines, minimal decoration, and a focus on function"),
    ("contemporary", "Current trends with fluid, comfortable spaces"),
    ("minimalist", "Pared-back palettes and clutter-free living"),
    ("scandinavian", "Light woods, cozy textiles, and airy simplicity"),
    ("industrial", "Exposed brick, raw metal, and utilitarian character"),
    ("bohemian", "Layered patterns, plants, and collected treasures"),
    ("traditional", "Classic furnishings, rich tones, and timeless symmetry"),
    ("rustic", "Natural materials, weathered finishes, and cabin warmth"),
    ("farmhouse", "Relaxed country comfort with modern touches"),
    ("coastal", "Sea-inspired hues, natural light, and breezy textures"),
    ("art-deco", "Bold geometry, glamour, and statement pieces"),
];

/// Budget bands, `key -> display label`.
pub static BUDGET_BANDS: &[(&str, &str)] = &[
    ("under-10k", "Under $10,000"),
    ("10k-25k", "$10,000 - $25,000"),
    ("25k-50k", "$25,000 - $50,000"),
    ("50k-100k", "$50,000 - $100,000"),
    ("over-100k", "Over $100,000"),
];

/// Timeline bands, `key -> display label`.
pub static TIMELINE_BANDS: &[(&str, &str)] = &[
    ("asap", "As soon as possible"),
    ("1-3-months", "1-3 months"),
    ("3-6-months", "3-6 months"),
    ("6-plus-months", "6+ months"),
];

/// Room types the questionnaire recognizes, matched in order.
pub static ROOM_TYPES: &[&str] = &[
    "living room",
    "bedroom",
    "kitchen",
    "bathroom",
    "dining room",
    "office",
    "basement",
    "outdoor",
];

/// Looks up a design style description by key.
pub fn style_description(key: &str) -> Option<&'static str> {
    DESIGN_STYLES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, desc)| *desc)
}

/// Looks up a budget band label by key.
pub fn budget_label(key: &str) -> Option<&'static str> {
    BUDGET_BANDS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}

/// Looks up a timeline band label by key.
pub fn timeline_label(key: &str) -> Option<&'static str> {
    TIMELINE_BANDS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}

/// Returns true if `key` names a known design style.
pub fn is_style_key(key: &str) -> bool {
    style_description(key).is_some()
}

/// Returns true if `key` names a known budget band.
pub fn is_budget_key(key: &str) -> bool {
    budget_label(key).is_some()
}

/// Returns true if `key` names a known timeline band.
pub fn is_timeline_key(key: &str) -> bool {
    timeline_label(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_design_styles() {
        assert_eq!(DESIGN_STYLES.len(), 12);
    }

    #[test]
    fn five_budget_bands() {
        assert_eq!(BUDGET_BANDS.len(), 5);
    }

    #[test]
    fn four_timeline_bands() {
        assert_eq!(TIMELINE_BANDS.len(), 4);
    }

    #[test]
    fn eight_room_types() {
        assert_eq!(ROOM_TYPES.len(), 8);
    }

    #[test]
    fn modern_carries_expected_description() {
        assert_eq!(
            style_description("modern"),
            Some("Clean lines, minimal decoration, and a focus on function")
        );
    }

    #[test]
    fn mid_century_precedes_modern() {
        let mid = DESIGN_STYLES.iter().position(|(k, _)| *k == "mid-century");
        let modern = DESIGN_STYLES.iter().position(|(k, _)| *k == "modern");
        assert!(mid < modern);
    }

    #[test]
    fn budget_labels_resolve() {
        assert_eq!(budget_label("10k-25k"), Some("$10,000 - $25,000"));
        assert_eq!(budget_label("over-100k"), Some("Over $100,000"));
        assert_eq!(budget_label("no-such-band"), None);
    }

    #[test]
    fn key_predicates_agree_with_lookups() {
        assert!(is_style_key("modern"));
        assert!(!is_style_key("baroque"));
        assert!(is_budget_key("under-10k"));
        assert!(!is_budget_key("free"));
        assert!(is_timeline_key("asap"));
        assert!(!is_timeline_key("someday"));
    }

    #[test]
    fn timeline_labels_resolve() {
        assert_eq!(timeline_label("3-6-months"), Some("3-6 months"));
        assert_eq!(timeline_label("asap"), Some("As soon as possible"));
    }

    #[test]
    fn keys_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for (key, _) in DESIGN_STYLES.iter().chain(BUDGET_BANDS).chain(TIMELINE_BANDS) {
            assert_eq!(*key, key.to_lowercase());
            assert!(seen.insert(*key), "duplicate key {}", key);
        }
    }
}
