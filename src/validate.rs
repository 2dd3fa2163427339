//! Form validation
//!
//! Pure checks behind the admin forms, kept free of DOM types so they
//! run under plain `cargo test`. Every error is the user-facing
//! message, so callers just surface whatever comes back.

use crate::api::SegmentDistance;

/// Sentinel dropdown choice that reveals the custom title input
pub const OTHER_TITLE: &str = "Other";

/// Choices offered by the link title dropdown, sentinel last
pub const LINK_TITLES: &[&str] = &[
    "Official website",
    "Start list",
    "Live tracking",
    "Results",
    OTHER_TITLE,
];

/// Validate a favorite-link form: resolve the title from the dropdown
/// (the sentinel requires a non-empty custom title), then check the URL.
/// Returns the cleaned (title, url) pair.
pub fn validate_link(choice: &str, custom: &str, url: &str) -> Result<(String, String), String> {
    let title = if choice == OTHER_TITLE {
        let custom = custom.trim();
        if custom.is_empty() {
            return Err(format!(
                "The custom title cannot be empty when '{}' is selected.",
                OTHER_TITLE
            ));
        }
        custom.to_string()
    } else {
        choice.trim().to_string()
    };

    let url = url.trim();
    if title.is_empty() || url.is_empty() {
        return Err("Title and URL are required.".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://.".to_string());
    }
    Ok((title, url.to_string()))
}

/// Order for a new link; an empty or unparseable input falls back to 0.
pub fn order_or_zero(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

/// Order for an edited link; must be a number.
pub fn parse_order(raw: &str) -> Result<i32, String> {
    raw.trim()
        .parse()
        .map_err(|_| "Order must be a number.".to_string())
}

/// Final id sequence for the reorder call: rows sorted by their edited
/// order value, ties broken by id.
pub fn reorder_ids(rows: &[(u32, i32)]) -> Vec<u32> {
    let mut rows = rows.to_vec();
    rows.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
    rows.into_iter().map(|(id, _)| id).collect()
}

/// Raw state of the race creation form
pub struct RaceFormInput {
    pub title: String,
    pub race_format_id: Option<u32>,
    pub event_date: String,
    pub gender_category: String,
    pub segments: Vec<SegmentInput>,
}

/// One segment distance row; `name` is the label used in messages
pub struct SegmentInput {
    pub segment_id: u32,
    pub name: String,
    pub transition: bool,
    pub distance: String,
}

/// Check the whole race form at once, collecting every problem rather
/// than stopping at the first. Transitions may be 0 km, every other
/// segment must be strictly positive.
pub fn validate_race(input: &RaceFormInput) -> Result<Vec<SegmentDistance>, Vec<String>> {
    let mut errors = Vec::new();

    if input.title.trim().is_empty() {
        errors.push("Race title is required.".to_string());
    }
    if input.race_format_id.is_none() {
        errors.push("Race format is required.".to_string());
    }
    if input.event_date.trim().is_empty() {
        errors.push("Event date is required.".to_string());
    }
    if input.gender_category.trim().is_empty() {
        errors.push("Gender category is required.".to_string());
    }

    let mut segments = Vec::new();
    for segment in &input.segments {
        match segment.distance.trim().parse::<f64>() {
            Ok(km) if km.is_finite() && km >= 0.0 => {
                if km <= 0.0 && !segment.transition {
                    errors.push(format!(
                        "Distance for {} must be a positive number.",
                        segment.name
                    ));
                } else {
                    segments.push(SegmentDistance {
                        segment_id: segment.segment_id,
                        distance_km: km,
                    });
                }
            }
            _ => errors.push(format!(
                "Distance for {} must be a non-negative number.",
                segment.name
            )),
        }
    }

    if errors.is_empty() {
        Ok(segments)
    } else {
        Err(errors)
    }
}

pub fn validate_league_name(name: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("League name is required.".to_string());
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_title_comes_from_the_custom_field_for_other() {
        assert_eq!(
            validate_link(OTHER_TITLE, "  Club page ", "https://x.example"),
            Ok(("Club page".to_string(), "https://x.example".to_string()))
        );
        assert!(validate_link(OTHER_TITLE, "   ", "https://x.example").is_err());
        assert_eq!(
            validate_link("Results", "ignored", "http://x.example"),
            Ok(("Results".to_string(), "http://x.example".to_string()))
        );
    }

    #[test]
    fn test_link_url_must_carry_a_web_scheme() {
        assert!(validate_link("Results", "", "ftp://x.example").is_err());
        assert!(validate_link("Results", "", "x.example").is_err());
        assert!(validate_link("Results", "", "   ").is_err());
        assert!(validate_link("Results", "", " https://x.example ").is_ok());
    }

    #[test]
    fn test_order_parsing() {
        assert_eq!(order_or_zero(""), 0);
        assert_eq!(order_or_zero("oops"), 0);
        assert_eq!(order_or_zero(" 7 "), 7);
        assert_eq!(parse_order("3"), Ok(3));
        assert_eq!(parse_order("-2"), Ok(-2));
        assert!(parse_order("").is_err());
        assert!(parse_order("abc").is_err());
    }

    #[test]
    fn test_reorder_sorts_by_order_then_id() {
        let rows = [(10, 2), (11, 1), (12, 2), (13, 0)];
        assert_eq!(reorder_ids(&rows), vec![13, 11, 10, 12]);
    }

    fn race_input() -> RaceFormInput {
        RaceFormInput {
            title: "Ironman Lanzarote".to_string(),
            race_format_id: Some(1),
            event_date: "2026-05-23".to_string(),
            gender_category: "Mixed".to_string(),
            segments: vec![
                SegmentInput {
                    segment_id: 1,
                    name: "Swimming".to_string(),
                    transition: false,
                    distance: "3.8".to_string(),
                },
                SegmentInput {
                    segment_id: 4,
                    name: "Transition 1 (T1)".to_string(),
                    transition: true,
                    distance: "0".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_race_validation_passes_a_complete_form() {
        let segments = validate_race(&race_input()).expect("form should validate");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].segment_id, 1);
        assert_eq!(segments[0].distance_km, 3.8);
        assert_eq!(segments[1].distance_km, 0.0);
    }

    #[test]
    fn test_race_validation_collects_every_error() {
        let mut input = race_input();
        input.title = "  ".to_string();
        input.race_format_id = None;
        input.segments[0].distance = "abc".to_string();
        let errors = validate_race(&input).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("title"));
        assert!(errors[1].contains("format"));
        assert!(errors[2].contains("Swimming"));
    }

    #[test]
    fn test_race_validation_allows_zero_only_for_transitions() {
        let mut input = race_input();
        input.segments[0].distance = "0".to_string();
        let errors = validate_race(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("positive"));

        input.segments[0].distance = "-1".to_string();
        let errors = validate_race(&input).unwrap_err();
        assert!(errors[0].contains("non-negative"));
    }

    #[test]
    fn test_league_name_is_trimmed_and_required() {
        assert_eq!(validate_league_name(" Club "), Ok("Club".to_string()));
        assert!(validate_league_name("   ").is_err());
    }
}
