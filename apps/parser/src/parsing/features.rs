//! Feature predicates: atomic tests over a single fragment.
//!
//! Discriminative predicates return `bool`; extractive ones return the matched
//! value. Lexical predicates go through the bilingual [`lexicon`](crate::lexicon)
//! and match in either script; structural predicates are script-agnostic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::Concept;
use crate::models::Fragment;
use crate::parsing::scoring::Feature;

static LATIN_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]").unwrap());
static HAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\u{4e00}-\u{9fa5}]").unwrap());
static ONLY_LETTERS_SPACES_AMPERSANDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s&]+$").unwrap());
static ONLY_HAN_OR_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\u{4e00}-\u{9fa5}A-Za-z\s·•]+$").unwrap());
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:19|20)[0-9]{2}").unwrap());
// AA, B.S., MBA, M.Eng and friends.
static DEGREE_ABBREVIATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ABM][A-Z.]").unwrap());
static GPA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-4]\.[0-9]{1,2}").unwrap());
static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Structural predicates
// ────────────────────────────────────────────────────────────────────────────

pub fn is_bold(item: &Fragment) -> bool {
    item.is_bold()
}

pub fn has_letter(item: &Fragment) -> bool {
    LATIN_LETTER.is_match(&item.text)
}

pub fn has_chinese(item: &Fragment) -> bool {
    HAN.is_match(&item.text)
}

pub fn has_number(item: &Fragment) -> bool {
    item.text.chars().any(|c| c.is_ascii_digit())
}

/// ASCII or full-width comma.
pub fn has_comma(item: &Fragment) -> bool {
    item.text.contains(',') || item.text.contains('，')
}

pub fn has_only_letters_spaces_ampersands(item: &Fragment) -> bool {
    ONLY_LETTERS_SPACES_AMPERSANDS.is_match(&item.text)
}

pub fn has_only_chinese_or_letters(item: &Fragment) -> bool {
    ONLY_HAN_OR_LETTERS.is_match(&item.text)
}

pub fn has_letter_and_is_all_uppercase(item: &Fragment) -> bool {
    has_letter(item) && item.text.to_uppercase() == item.text
}

/// Builds a predicate matching fragments that contain `text`.
///
/// An empty `text` matches nothing, so an unresolved sibling field never
/// penalizes every candidate at once.
pub fn has_text(text: &str) -> impl Fn(&Fragment) -> bool + '_ {
    move |item| !text.is_empty() && item.text.contains(text)
}

pub fn word_count(text: &str) -> usize {
    text.split(char::is_whitespace).count()
}

// ────────────────────────────────────────────────────────────────────────────
// Lexical predicates (bilingual)
// ────────────────────────────────────────────────────────────────────────────

pub fn has_job_title(item: &Fragment) -> bool {
    Concept::JobTitle.matches(&item.text)
}

pub fn has_school(item: &Fragment) -> bool {
    Concept::School.matches(&item.text)
}

pub fn has_degree(item: &Fragment) -> bool {
    Concept::Degree.matches(&item.text) || DEGREE_ABBREVIATION.is_match(&item.text)
}

pub fn has_year(item: &Fragment) -> bool {
    YEAR.is_match(&item.text)
}

pub fn has_month(item: &Fragment) -> bool {
    Concept::Month.matches(&item.text)
}

pub fn has_season(item: &Fragment) -> bool {
    Concept::Season.matches(&item.text)
}

pub fn has_present(item: &Fragment) -> bool {
    Concept::PresentMarker.matches(&item.text)
}

pub fn has_date_marker(item: &Fragment) -> bool {
    Concept::DateMarker.matches(&item.text)
}

// ────────────────────────────────────────────────────────────────────────────
// Extractive predicates
// ────────────────────────────────────────────────────────────────────────────

pub fn match_gpa(item: &Fragment) -> Option<String> {
    GPA.find(&item.text).map(|m| m.as_str().to_string())
}

/// Reads the fragment's leading number and keeps it when it looks like a grade
/// (at most 110, which covers percentage and Italian-style scales).
pub fn match_grade(item: &Fragment) -> Option<String> {
    let number = LEADING_NUMBER.find(item.text.trim_start())?;
    let grade: f64 = number.as_str().parse().ok()?;
    (grade.is_finite() && grade <= 110.0).then(|| grade.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Shared feature sets
// ────────────────────────────────────────────────────────────────────────────

/// Date feature set used by every entity kind with a date field.
pub fn date_features() -> Vec<Feature<'static>> {
    vec![
        Feature::discriminative(has_year, 1),
        Feature::discriminative(has_month, 1),
        Feature::discriminative(has_season, 1),
        Feature::discriminative(has_present, 1),
        Feature::discriminative(has_date_marker, 1),
        Feature::discriminative(has_comma, -1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str) -> Fragment {
        Fragment::plain(text)
    }

    #[test]
    fn test_has_comma_accepts_full_width() {
        assert!(has_comma(&item("北京，海淀")));
        assert!(has_comma(&item("Austin, TX")));
        assert!(!has_comma(&item("Austin TX")));
    }

    #[test]
    fn test_all_uppercase_requires_a_letter() {
        assert!(has_letter_and_is_all_uppercase(&item("WORK EXPERIENCE")));
        assert!(!has_letter_and_is_all_uppercase(&item("2020 - 2021")));
        assert!(!has_letter_and_is_all_uppercase(&item("Education")));
    }

    #[test]
    fn test_only_chinese_or_letters_allows_interpunct() {
        assert!(has_only_chinese_or_letters(&item("教育·背景")));
        assert!(!has_only_chinese_or_letters(&item("2020年")));
    }

    #[test]
    fn test_degree_matches_abbreviation_and_chinese() {
        assert!(has_degree(&item("B.S. in Computer Science")));
        assert!(has_degree(&item("Master of Science")));
        assert!(has_degree(&item("计算机科学 硕士")));
        assert!(!has_degree(&item("Computer Science")));
    }

    #[test]
    fn test_year_detection() {
        assert!(has_year(&item("Jan 2020 - Present")));
        assert!(has_year(&item("1998")));
        assert!(!has_year(&item("2100")));
    }

    #[test]
    fn test_chinese_date_markers() {
        assert!(has_date_marker(&item("2019年9月")));
        assert!(has_present(&item("2021.07 - 至今")));
    }

    #[test]
    fn test_has_text_ignores_empty_needle() {
        let empty = has_text("");
        assert!(!empty(&item("anything")));
        let acme = has_text("Acme");
        assert!(acme(&item("Acme Corp")));
    }

    #[test]
    fn test_match_gpa_extracts_number_only() {
        assert_eq!(match_gpa(&item("GPA: 3.85/4.0")), Some("3.85".to_string()));
        assert_eq!(match_gpa(&item("Graduated")), None);
    }

    #[test]
    fn test_match_grade_reads_leading_number() {
        assert_eq!(match_grade(&item("3.80")), Some("3.8".to_string()));
        assert_eq!(match_grade(&item("95/100")), Some("95".to_string()));
        assert_eq!(match_grade(&item("2020 - 2024")), None);
        assert_eq!(match_grade(&item("GPA 3.9")), None);
    }

    #[test]
    fn test_word_count_splits_on_single_whitespace() {
        assert_eq!(word_count("a b c d"), 4);
        assert_eq!(word_count("one"), 1);
    }

    #[test]
    fn test_numeric_predicates_only_accept_ascii_digits() {
        let full_width = item("２０２０ ３.５");
        assert!(!has_number(&full_width));
        assert!(!has_year(&full_width));
        assert_eq!(match_gpa(&full_width), None);
        assert_eq!(match_grade(&full_width), None);
    }
}
