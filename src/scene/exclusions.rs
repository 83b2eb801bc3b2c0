//! Things that must not appear in a scene from a given year.

/// Excluded from every scene regardless of period.
pub const ALWAYS_EXCLUDED: &[&str] = &[
    "cars",
    "power lines",
    "asphalt roads",
    "plastic",
    "modern buildings",
    "street lights",
];

/// Each entry applies to every year strictly before its threshold. Entries
/// are ordered by descending threshold so earlier years accumulate more.
pub const EXCLUSION_THRESHOLDS: &[(i32, &[&str])] = &[
    (1900, &["automobiles", "electricity", "telephone poles", "concrete buildings"]),
    (1800, &["factories", "steam engines", "iron bridges", "gas lamps"]),
    (1600, &["baroque architecture", "wigs", "cannons", "printed books"]),
    (1000, &["stone churches", "castles", "knights in armor", "windmills"]),
    (400, &["Christian symbols", "runic stones with crosses", "longships with sails"]),
    (-500, &["iron tools", "coins", "written text"]),
    (-1700, &["bronze weapons", "wheeled carts", "horses for riding"]),
    (-4000, &["farming", "domestic cattle", "pottery", "permanent houses"]),
];

pub fn historical_exclusions(year_start: i32) -> Vec<&'static str> {
    let mut exclusions = ALWAYS_EXCLUDED.to_vec();
    for (threshold, items) in EXCLUSION_THRESHOLDS {
        if year_start < *threshold {
            exclusions.extend_from_slice(items);
        }
    }
    exclusions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_descend() {
        for pair in EXCLUSION_THRESHOLDS.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
    }

    #[test]
    fn modern_years_only_exclude_the_base_set() {
        assert_eq!(historical_exclusions(1900), ALWAYS_EXCLUDED.to_vec());
        assert_eq!(historical_exclusions(2024).len(), 6);
    }

    #[test]
    fn stone_age_excludes_everything() {
        let all = historical_exclusions(-10_000);
        let expected: usize =
            ALWAYS_EXCLUDED.len() + EXCLUSION_THRESHOLDS.iter().map(|(_, i)| i.len()).sum::<usize>();
        assert_eq!(all.len(), expected);
        assert!(all.contains(&"pottery"));
        assert!(all.contains(&"cars"));
    }

    #[test]
    fn viking_age_keeps_iron_but_not_churches() {
        let viking = historical_exclusions(800);
        assert!(viking.contains(&"stone churches"));
        assert!(!viking.contains(&"iron tools"));
        assert!(!viking.contains(&"Christian symbols"));
    }
}
