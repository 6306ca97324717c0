use crate::domain::model::Graduate;

/// True when any searchable field contains the (lowercased) term: full name,
/// university, degree, stringified graduation year, or any skill.
pub fn matches_term(graduate: &Graduate, term: &str) -> bool {
    let search = term.to_lowercase();
    graduate.full_name.to_lowercase().contains(&search)
        || graduate.university.to_lowercase().contains(&search)
        || graduate.degree.to_lowercase().contains(&search)
        || graduate.graduation_year.to_string().contains(&search)
        || graduate
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&search))
}

/// Visible subset of the cache for a search term. No ranking; relative cache
/// order is preserved. An empty term matches everything.
pub fn filter_graduates<'a>(cache: &'a [Graduate], term: &str) -> Vec<&'a Graduate> {
    cache.iter().filter(|g| matches_term(g, term)).collect()
}
