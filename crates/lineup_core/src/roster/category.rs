/// Age categories the club fields, youngest first.
pub const CLUB_CATEGORIES: &[&str] = &[
    "Sub-8",
    "Sub-10",
    "Sub-12",
    "Sub-14",
    "Sub-16",
    "Sub-18",
    "Sub-20",
    "Sub-23",
    "Profesional",
];

pub fn is_club_category(category: &str) -> bool {
    CLUB_CATEGORIES.contains(&category)
}

/// Categories a coach may build call-ups for. `None` means unrestricted (admin).
pub fn categories_for_coach(allowed: Option<&[String]>) -> Vec<&'static str> {
    match allowed {
        None => CLUB_CATEGORIES.to_vec(),
        Some(allowed) => CLUB_CATEGORIES
            .iter()
            .copied()
            .filter(|cat| allowed.iter().any(|a| a == cat))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_coach_sees_all_categories() {
        assert_eq!(categories_for_coach(None).len(), CLUB_CATEGORIES.len());
    }

    #[test]
    fn test_restricted_coach_keeps_club_order() {
        let allowed = vec!["Sub-20".to_string(), "Sub-8".to_string(), "Veteranos".to_string()];
        assert_eq!(categories_for_coach(Some(&allowed)), vec!["Sub-8", "Sub-20"]);
    }

    #[test]
    fn test_is_club_category() {
        assert!(is_club_category("Profesional"));
        assert!(!is_club_category("sub-8"));
    }
}
