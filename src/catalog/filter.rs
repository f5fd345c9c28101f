use crate::models::HealerProfile;

use super::ALL_CATEGORY;

/// Whether a healer matches a search term and category.
///
/// The term is matched case-insensitively as a substring of name, specialty
/// or location. An empty term matches everything.
pub fn matches(healer: &HealerProfile, term: &str, category: &str) -> bool {
    let needle = term.to_lowercase();
    let matches_search = healer.name.to_lowercase().contains(&needle)
        || healer.specialty.to_lowercase().contains(&needle)
        || healer.location.to_lowercase().contains(&needle);
    let matches_category = category == ALL_CATEGORY || healer.has_category(category);
    matches_search && matches_category
}

/// Filter healers, keeping catalog declaration order.
pub fn filter_healers(healers: &[HealerProfile], term: &str, category: &str) -> Vec<HealerProfile> {
    healers
        .iter()
        .filter(|h| matches(h, term, category))
        .cloned()
        .collect()
}

/// Number of online healers in a set.
pub fn online_count(healers: &[HealerProfile]) -> usize {
    healers.iter().filter(|h| h.is_online).count()
}
