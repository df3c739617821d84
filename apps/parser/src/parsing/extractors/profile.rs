//! Profile extractor: name, contact details and summary from the lines above
//! the first section title.
//!
//! ```text
//! Field        Unique attribute
//! Name         bold or all caps, letters/spaces/periods only
//! Email        has `@`
//! Phone        has a (xxx)-xxx-xxxx pattern
//! Location     has a "City, ST" pattern
//! Url          has a slash
//! Summary      has 4 or more words
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{flatten, Fragment, ResumeProfile};
use crate::parsing::features::{
    has_comma, has_letter, has_letter_and_is_all_uppercase, has_number, is_bold, word_count,
};
use crate::parsing::scoring::{
    get_text_with_highest_feature_score, Feature, SelectOptions, TextScore,
};
use crate::parsing::section_lookup::get_section_lines_by_keywords;
use crate::parsing::sections::SectionMap;

static ONLY_LETTER_SPACE_OR_PERIOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s.]+$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(?[0-9]{3}\)?[\s-]?[0-9]{3}[\s-]?[0-9]{4}").unwrap());
static PARENTHESIZED_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([0-9]+\)").unwrap());
static CITY_AND_STATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-zA-Z\s]+, [A-Z]{2}").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+\.[a-z]+/\S+").unwrap());
static URL_HTTP_FALLBACK: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+\.\S+").unwrap());
static URL_WWW_FALLBACK: Lazy<Regex> = Lazy::new(|| Regex::new(r"www\.\S+\.\S+").unwrap());

fn find(re: &Regex, item: &Fragment) -> Option<String> {
    re.find(&item.text).map(|m| m.as_str().to_string())
}

fn match_only_letter_space_or_period(item: &Fragment) -> Option<String> {
    find(&ONLY_LETTER_SPACE_OR_PERIOD, item)
}

fn match_email(item: &Fragment) -> Option<String> {
    find(&EMAIL, item)
}

fn match_phone(item: &Fragment) -> Option<String> {
    find(&PHONE, item)
}

fn match_city_and_state(item: &Fragment) -> Option<String> {
    find(&CITY_AND_STATE, item)
}

fn match_url(item: &Fragment) -> Option<String> {
    find(&URL, item)
}

fn match_url_http_fallback(item: &Fragment) -> Option<String> {
    find(&URL_HTTP_FALLBACK, item)
}

fn match_url_www_fallback(item: &Fragment) -> Option<String> {
    find(&URL_WWW_FALLBACK, item)
}

fn has_at(item: &Fragment) -> bool {
    item.text.contains('@')
}

fn has_parenthesis(item: &Fragment) -> bool {
    PARENTHESIZED_NUMBER.is_match(&item.text)
}

fn has_slash(item: &Fragment) -> bool {
    item.text.contains('/')
}

fn has_4_or_more_words(item: &Fragment) -> bool {
    word_count(&item.text) >= 4
}

fn name_features() -> Vec<Feature<'static>> {
    vec![
        Feature::extractive(match_only_letter_space_or_period, 3),
        Feature::discriminative(is_bold, 2),
        Feature::discriminative(has_letter_and_is_all_uppercase, 2),
        Feature::discriminative(has_at, -4),
        Feature::discriminative(has_number, -4),
        Feature::discriminative(has_parenthesis, -4),
        Feature::discriminative(has_comma, -4),
        Feature::discriminative(has_slash, -4),
        Feature::discriminative(has_4_or_more_words, -2),
    ]
}

fn email_features() -> Vec<Feature<'static>> {
    vec![
        Feature::extractive(match_email, 4),
        Feature::discriminative(is_bold, -1),
        Feature::discriminative(has_letter_and_is_all_uppercase, -1),
        Feature::discriminative(has_parenthesis, -4),
        Feature::discriminative(has_comma, -4),
        Feature::discriminative(has_slash, -4),
        Feature::discriminative(has_4_or_more_words, -4),
    ]
}

fn phone_features() -> Vec<Feature<'static>> {
    vec![
        Feature::extractive(match_phone, 4),
        Feature::discriminative(has_letter, -4),
    ]
}

fn location_features() -> Vec<Feature<'static>> {
    vec![
        Feature::extractive(match_city_and_state, 4),
        Feature::discriminative(is_bold, -1),
        Feature::discriminative(has_at, -4),
        Feature::discriminative(has_parenthesis, -3),
        Feature::discriminative(has_slash, -4),
    ]
}

fn url_features() -> Vec<Feature<'static>> {
    vec![
        Feature::extractive(match_url, 4),
        Feature::extractive(match_url_http_fallback, 3),
        Feature::extractive(match_url_www_fallback, 3),
        Feature::discriminative(is_bold, -1),
        Feature::discriminative(has_at, -4),
        Feature::discriminative(has_parenthesis, -3),
        Feature::discriminative(has_comma, -4),
        Feature::discriminative(has_4_or_more_words, -4),
    ]
}

fn summary_features() -> Vec<Feature<'static>> {
    vec![
        Feature::discriminative(has_4_or_more_words, 4),
        Feature::discriminative(is_bold, -1),
        Feature::discriminative(has_at, -4),
        Feature::discriminative(has_parenthesis, -3),
        Feature::discriminative(|item: &Fragment| match_city_and_state(item).is_some(), -4),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileScores {
    pub name: Vec<TextScore>,
    pub email: Vec<TextScore>,
    pub phone: Vec<TextScore>,
    pub location: Vec<TextScore>,
    pub url: Vec<TextScore>,
    pub summary: Vec<TextScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileExtraction {
    pub profile: ResumeProfile,
    pub scores: ProfileScores,
}

fn section_text(sections: &SectionMap, keyword: &str) -> String {
    flatten(get_section_lines_by_keywords(sections, &[keyword]))
        .iter()
        .map(|item| item.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts the profile. A summary or objective section, when present, takes
/// precedence over the summary guessed from the profile lines.
pub fn extract_profile(sections: &SectionMap) -> ProfileExtraction {
    let items = flatten(sections.profile());

    let name = get_text_with_highest_feature_score(&items, &name_features(), SelectOptions::default());
    let email =
        get_text_with_highest_feature_score(&items, &email_features(), SelectOptions::default());
    let phone =
        get_text_with_highest_feature_score(&items, &phone_features(), SelectOptions::default());
    let location =
        get_text_with_highest_feature_score(&items, &location_features(), SelectOptions::default());
    let url = get_text_with_highest_feature_score(&items, &url_features(), SelectOptions::default());
    let summary = get_text_with_highest_feature_score(
        &items,
        &summary_features(),
        SelectOptions {
            concatenate_ties: true,
            ..SelectOptions::default()
        },
    );

    let summary_section = section_text(sections, "summary");
    let objective_section = section_text(sections, "objective");
    let summary_text = [summary_section, objective_section]
        .into_iter()
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| summary.text.clone());

    ProfileExtraction {
        profile: ResumeProfile {
            name: name.text,
            email: email.text,
            phone: phone.text,
            url: url.text,
            summary: summary_text,
            location: location.text,
        },
        scores: ProfileScores {
            name: name.scores,
            email: email.scores,
            phone: phone.scores,
            location: location.scores,
            url: url.scores,
            summary: summary.scores,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Line;
    use crate::parsing::sections::group_lines_into_sections;

    fn profile_lines() -> Vec<Line> {
        vec![
            Line::new(vec![Fragment::bold("John Doe")]),
            Line::new(vec![
                Fragment::plain("Software engineer building reliable distributed systems"),
            ]),
            Line::new(vec![
                Fragment::plain("john.doe@example.com"),
                Fragment::plain("(555) 123-4567"),
                Fragment::plain("Austin, TX"),
                Fragment::plain("linkedin.com/in/johndoe"),
            ]),
        ]
    }

    #[test]
    fn test_extracts_all_profile_fields() {
        let sections = group_lines_into_sections(&profile_lines());
        let profile = extract_profile(&sections).profile;
        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.email, "john.doe@example.com");
        assert_eq!(profile.phone, "(555) 123-4567");
        assert_eq!(profile.location, "Austin, TX");
        assert_eq!(profile.url, "linkedin.com/in/johndoe");
        assert_eq!(
            profile.summary,
            "Software engineer building reliable distributed systems"
        );
    }

    #[test]
    fn test_summary_section_overrides_guessed_summary() {
        let mut lines = profile_lines();
        lines.push(Line::new(vec![Fragment::bold("SUMMARY")]));
        lines.push(Line::new(vec![Fragment::plain("Backend engineer")]));
        lines.push(Line::new(vec![Fragment::plain("with ten years of Rust")]));
        let sections = group_lines_into_sections(&lines);
        let profile = extract_profile(&sections).profile;
        assert_eq!(profile.summary, "Backend engineer with ten years of Rust");
    }

    #[test]
    fn test_objective_section_used_when_no_summary() {
        let mut lines = profile_lines();
        lines.push(Line::new(vec![Fragment::bold("OBJECTIVE")]));
        lines.push(Line::new(vec![Fragment::plain("Seeking a platform role")]));
        let sections = group_lines_into_sections(&lines);
        assert_eq!(
            extract_profile(&sections).profile.summary,
            "Seeking a platform role"
        );
    }

    #[test]
    fn test_empty_document_yields_empty_profile() {
        let sections = group_lines_into_sections(&[]);
        let extraction = extract_profile(&sections);
        assert_eq!(extraction.profile, ResumeProfile::default());
        assert!(extraction.scores.name.is_empty());
    }

    #[test]
    fn test_url_http_fallback() {
        let item = Fragment::plain("https://janedoe.dev");
        assert_eq!(match_url(&item), None);
        assert_eq!(
            match_url_http_fallback(&item),
            Some("https://janedoe.dev".to_string())
        );
    }

    #[test]
    fn test_email_from_earlier_fragment_wins_tie() {
        let lines = vec![
            Line::new(vec![Fragment::bold("Jane Doe")]),
            Line::new(vec![
                Fragment::plain("Email: jane@first.com"),
                Fragment::plain("jane@second.com"),
            ]),
        ];
        let sections = group_lines_into_sections(&lines);
        assert_eq!(extract_profile(&sections).profile.email, "jane@first.com");
    }
}
