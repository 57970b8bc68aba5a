//! Free-text advocate search.
//!
//! A linear substring scan over the fields a visitor would type into the
//! directory search box. Text fields compare case-insensitively; years of
//! experience compare against the raw term.

use crate::models::Advocate;

/// Whether `term` selects nothing (every advocate passes).
fn is_blank(term: &str) -> bool {
    term.trim().is_empty()
}

fn matches_lowered(advocate: &Advocate, term: &str, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&advocate.first_name)
        || contains(&advocate.last_name)
        || contains(&advocate.city)
        || contains(&advocate.degree)
        || advocate.specialties.iter().any(|s| contains(s))
        || advocate.years_of_experience.to_string().contains(term)
}

/// Whether a single advocate matches the search term.
pub fn advocate_matches(advocate: &Advocate, term: &str) -> bool {
    if is_blank(term) {
        return true;
    }
    matches_lowered(advocate, term, &term.to_lowercase())
}

/// Advocates matching `term`, in input order. A blank term returns the
/// input unchanged.
pub fn filter_advocates(advocates: &[Advocate], term: &str) -> Vec<Advocate> {
    if is_blank(term) {
        return advocates.to_vec();
    }

    let needle = term.to_lowercase();
    advocates
        .iter()
        .filter(|advocate| matches_lowered(advocate, term, &needle))
        .cloned()
        .collect()
}
