//! Section Grouper: splits the page's lines into named sections.
//!
//! Every section except the profile starts with a title line that takes up the
//! whole row. Lines are assigned to the closest title above them in one
//! left-to-right pass; lines before the first title belong to the profile.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lexicon::{Concept, Script};
use crate::models::Line;
use crate::parsing::features::{
    has_chinese, has_letter_and_is_all_uppercase, has_only_chinese_or_letters,
    has_only_letters_spaces_ampersands, is_bold,
};

/// Reserved name of the section holding everything before the first title.
pub const PROFILE_SECTION: &str = "profile";

const CHINESE_TITLE_MIN_CHARS: usize = 2;
const CHINESE_TITLE_MAX_CHARS: usize = 8;

/// One named run of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    /// The heading line, absent for the profile section.
    pub title: Option<Line>,
    /// Lines following the heading, in reading order.
    pub lines: Vec<Line>,
}

impl Section {
    /// Title line (if any) followed by the body lines.
    pub fn all_lines(&self) -> impl Iterator<Item = &Line> {
        self.title.iter().chain(self.lines.iter())
    }
}

/// Sections in first-appearance order.
///
/// The profile section always comes first, even when empty. Heading texts may
/// repeat; each occurrence keeps its own entry and lookups return the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    /// Body lines of the first section called `name`.
    pub fn get(&self, name: &str) -> Option<&[Line]> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.lines.as_slice())
    }

    pub fn profile(&self) -> &[Line] {
        self.get(PROFILE_SECTION).unwrap_or(&[])
    }

    /// Every line of every section, titles included, in map order.
    pub fn all_lines(&self) -> impl Iterator<Item = &Line> {
        self.sections.iter().flat_map(Section::all_lines)
    }
}

/// Groups `lines` into sections, keyed by the trimmed title text.
pub fn group_lines_into_sections(lines: &[Line]) -> SectionMap {
    let mut sections = Vec::new();
    let mut current = Section {
        name: PROFILE_SECTION.to_string(),
        title: None,
        lines: Vec::new(),
    };

    for (i, line) in lines.iter().enumerate() {
        if is_section_title(line, i) {
            let name = line
                .first()
                .map(|item| item.text.trim().to_string())
                .unwrap_or_default();
            debug!(line = i, title = %name, "Detected section title");
            let next = Section {
                name,
                title: Some(line.clone()),
                lines: Vec::new(),
            };
            sections.push(std::mem::replace(&mut current, next));
        } else {
            current.lines.push(line.clone());
        }
    }
    sections.push(current);

    SectionMap { sections }
}

/// Decides whether `line`, at position `line_number` on the page, is a section title.
pub fn is_section_title(line: &Line, line_number: usize) -> bool {
    let is_first_two_lines = line_number < 2;
    if is_first_two_lines || line.len() != 1 {
        return false;
    }
    let Some(item) = line.first() else {
        return false;
    };
    let text = item.text.trim();

    // Secondary script: bold Chinese heading, either a known title or a short label.
    if has_chinese(item) {
        if is_bold(item) && Concept::SectionTitle.matches_script(Script::Han, text) {
            return true;
        }
        let char_count = text.chars().count();
        if is_bold(item)
            && has_only_chinese_or_letters(item)
            && (CHINESE_TITLE_MIN_CHARS..=CHINESE_TITLE_MAX_CHARS).contains(&char_count)
        {
            return true;
        }
    }

    // Primary heuristic: double emphasis, bold and all uppercase.
    if is_bold(item) && has_letter_and_is_all_uppercase(item) {
        return true;
    }

    // Fallback: a short capitalized heading containing a section keyword.
    let has_at_most_two_words = text.split(' ').filter(|word| *word != "&").count() <= 2;
    let starts_with_capital = text.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    has_at_most_two_words
        && has_only_letters_spaces_ampersands(item)
        && starts_with_capital
        && Concept::SectionTitle.matches_script(Script::Latin, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fragment;
    use proptest::prelude::*;

    fn line(items: Vec<Fragment>) -> Line {
        Line::new(items)
    }

    fn page(body: Vec<Line>) -> Vec<Line> {
        let mut lines = vec![
            line(vec![Fragment::bold("JANE DOE")]),
            line(vec![Fragment::plain("jane@example.com")]),
        ];
        lines.extend(body);
        lines
    }

    #[test]
    fn test_bold_uppercase_line_is_title() {
        let lines = page(vec![
            line(vec![Fragment::bold("EDUCATION")]),
            line(vec![Fragment::plain("State University")]),
        ]);
        let sections = group_lines_into_sections(&lines);
        let names: Vec<&str> = sections.names().collect();
        assert_eq!(names, vec!["profile", "EDUCATION"]);
        assert_eq!(sections.get("EDUCATION").unwrap().len(), 1);
        assert_eq!(sections.profile().len(), 2);
    }

    #[test]
    fn test_first_two_lines_never_titles() {
        let l = line(vec![Fragment::bold("EDUCATION")]);
        assert!(!is_section_title(&l, 0));
        assert!(!is_section_title(&l, 1));
        assert!(is_section_title(&l, 2));
    }

    #[test]
    fn test_multi_fragment_or_empty_line_never_title() {
        let two = line(vec![Fragment::bold("WORK"), Fragment::bold("EXPERIENCE")]);
        assert!(!is_section_title(&two, 5));
        assert!(!is_section_title(&Line::default(), 5));
    }

    #[test]
    fn test_bold_chinese_heading_is_title() {
        let l = line(vec![Fragment::bold("教育背景")]);
        assert!(is_section_title(&l, 4));
    }

    #[test]
    fn test_short_bold_chinese_label_is_title() {
        let l = line(vec![Fragment::bold("荣誉·证明")]);
        assert!(is_section_title(&l, 4));
    }

    #[test]
    fn test_plain_chinese_keyword_line_is_not_title() {
        let l = line(vec![Fragment::plain("教育背景")]);
        assert!(!is_section_title(&l, 4));
    }

    #[test]
    fn test_long_bold_chinese_sentence_is_not_title() {
        let l = line(vec![Fragment::bold("负责公司核心交易系统的设计与开发")]);
        assert!(!is_section_title(&l, 4));
    }

    #[test]
    fn test_bold_mixed_case_is_not_title_without_keyword() {
        let l = line(vec![Fragment::bold("Acme Corp")]);
        assert!(!is_section_title(&l, 4));
    }

    #[test]
    fn test_keyword_fallback_detects_plain_heading() {
        assert!(is_section_title(&line(vec![Fragment::plain("Work Experience")]), 3));
        assert!(is_section_title(&line(vec![Fragment::plain("Honors & Awards")]), 3));
        assert!(!is_section_title(
            &line(vec![Fragment::plain("Relevant Work Experience")]),
            3
        ));
        assert!(!is_section_title(&line(vec![Fragment::plain("skills")]), 3));
    }

    #[test]
    fn test_no_titles_puts_everything_in_profile() {
        let lines = page(vec![line(vec![Fragment::plain("Hello there")])]);
        let sections = group_lines_into_sections(&lines);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.profile().len(), 3);
    }

    #[test]
    fn test_empty_input_yields_empty_profile() {
        let sections = group_lines_into_sections(&[]);
        assert_eq!(sections.len(), 1);
        assert!(sections.profile().is_empty());
    }

    #[test]
    fn test_repeated_title_keeps_both_sections() {
        let lines = page(vec![
            line(vec![Fragment::bold("PROJECTS")]),
            line(vec![Fragment::plain("a")]),
            line(vec![Fragment::bold("SKILLS")]),
            line(vec![Fragment::plain("b")]),
            line(vec![Fragment::bold("PROJECTS")]),
            line(vec![Fragment::plain("c")]),
        ]);
        let sections = group_lines_into_sections(&lines);
        let names: Vec<&str> = sections.names().collect();
        assert_eq!(names, vec!["profile", "PROJECTS", "SKILLS", "PROJECTS"]);
        assert_eq!(sections.get("PROJECTS").unwrap()[0].text(), "a");
        assert_eq!(sections.all_lines().count(), lines.len());
    }

    fn arb_fragment() -> impl Strategy<Value = Fragment> {
        (
            prop_oneof![
                Just("EDUCATION".to_string()),
                Just("教育背景".to_string()),
                Just("Work Experience".to_string()),
                Just("Acme Corp".to_string()),
                "[a-zA-Z0-9 ]{0,12}",
            ],
            any::<bool>(),
        )
            .prop_map(|(text, bold)| {
                if bold {
                    Fragment::bold(text)
                } else {
                    Fragment::plain(text)
                }
            })
    }

    fn arb_lines() -> impl Strategy<Value = Vec<Line>> {
        prop::collection::vec(
            prop::collection::vec(arb_fragment(), 0..3).prop_map(Line::new),
            0..25,
        )
    }

    proptest! {
        #[test]
        fn test_sections_partition_input(lines in arb_lines()) {
            let sections = group_lines_into_sections(&lines);
            let rebuilt: Vec<Line> = sections.all_lines().cloned().collect();
            prop_assert_eq!(rebuilt, lines);
        }

        #[test]
        fn test_grouping_is_deterministic(lines in arb_lines()) {
            prop_assert_eq!(group_lines_into_sections(&lines), group_lines_into_sections(&lines));
        }
    }
}
