//! The fixed set of cities the widget can show

use std::collections::HashMap;

use crate::state::City;

/// Every selectable city, in display order. İstanbul and Başakşehir share
/// id 9541 in the upstream fixture; see [`duplicate_id_warning`].
pub fn all() -> Vec<City> {
    [
        ("İstanbul", 9541),
        ("Ankara", 9206),
        ("İzmir", 9560),
        ("Bursa", 9335),
        ("Antalya", 9225),
        ("Başakşehir", 9541),
    ]
    .into_iter()
    .map(|(name, external_id)| City {
        name: name.to_string(),
        external_id,
    })
    .collect()
}

/// Look up a city by its display name
pub fn find(name: &str) -> Option<City> {
    all().into_iter().find(|city| city.name == name)
}

/// Scan the fixture for external ids shared by more than one city.
///
/// The duplicate is a known inconsistency in the source data and is
/// reported rather than repaired: the remote API keys on the id, so both
/// entries resolve to the same data.
pub fn duplicate_id_warning() -> Option<String> {
    let cities = all();
    let mut names_by_id: HashMap<u32, Vec<&str>> = HashMap::new();
    for city in &cities {
        names_by_id
            .entry(city.external_id)
            .or_default()
            .push(city.name.as_str());
    }

    let mut duplicates: Vec<(u32, Vec<&str>)> = names_by_id
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .collect();
    if duplicates.is_empty() {
        return None;
    }
    duplicates.sort_by_key(|(id, _)| *id);

    let parts: Vec<String> = duplicates
        .into_iter()
        .map(|(id, names)| format!("{} aynı şehir kodunu paylaşıyor ({})", names.join(" ve "), id))
        .collect();
    Some(parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_has_six_cities_with_unique_names() {
        let cities = all();
        assert_eq!(cities.len(), 6);

        let mut names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6, "display names are the lookup key");
    }

    #[test]
    fn test_find_by_name() {
        let ankara = find("Ankara").unwrap();
        assert_eq!(ankara.external_id, 9206);

        assert!(find("Adana").is_none());
    }

    #[test]
    fn test_duplicate_id_is_reported_not_fixed() {
        let warning = duplicate_id_warning().unwrap();
        assert!(warning.contains("İstanbul"));
        assert!(warning.contains("Başakşehir"));
        assert!(warning.contains("9541"));

        // Both entries keep the shared id
        assert_eq!(find("İstanbul").unwrap().external_id, 9541);
        assert_eq!(find("Başakşehir").unwrap().external_id, 9541);
    }
}
