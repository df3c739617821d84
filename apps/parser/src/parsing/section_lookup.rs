//! Keyword Section Lookup: resolves a canonical field name to a section,
//! whatever the literal heading text and whichever script it is written in.

use crate::lexicon::section_synonyms;
use crate::models::Line;
use crate::parsing::sections::SectionMap;

/// Returns the body lines of the first section whose name contains one of the
/// canonical `keywords` (case-insensitive) or one of their Chinese synonyms.
/// An unmatched lookup yields an empty slice.
pub fn get_section_lines_by_keywords<'a>(sections: &'a SectionMap, keywords: &[&str]) -> &'a [Line] {
    let chinese_keywords: Vec<&str> = keywords
        .iter()
        .flat_map(|keyword| section_synonyms(keyword).iter().copied())
        .collect();

    sections
        .iter()
        .find(|section| {
            let name_lower = section.name.to_lowercase();
            keywords.iter().any(|keyword| name_lower.contains(keyword))
                || chinese_keywords.iter().any(|keyword| section.name.contains(keyword))
        })
        .map(|section| section.lines.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fragment;
    use crate::parsing::sections::group_lines_into_sections;

    fn sample() -> SectionMap {
        let lines = vec![
            Line::new(vec![Fragment::bold("张三")]),
            Line::new(vec![Fragment::plain("zhangsan@example.com")]),
            Line::new(vec![Fragment::bold("教育经历")]),
            Line::new(vec![Fragment::plain("北京大学")]),
            Line::new(vec![Fragment::bold("WORK EXPERIENCE")]),
            Line::new(vec![Fragment::bold("Acme Corp")]),
        ];
        group_lines_into_sections(&lines)
    }

    #[test]
    fn test_english_keyword_is_case_insensitive() {
        let sections = sample();
        let lines = get_section_lines_by_keywords(&sections, &["work", "experience"]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "Acme Corp");
    }

    #[test]
    fn test_canonical_keyword_expands_to_chinese_synonyms() {
        let sections = sample();
        let lines = get_section_lines_by_keywords(&sections, &["education"]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "北京大学");
    }

    #[test]
    fn test_missing_section_returns_empty() {
        let sections = sample();
        assert!(get_section_lines_by_keywords(&sections, &["project"]).is_empty());
    }

    #[test]
    fn test_empty_keywords_match_nothing() {
        let sections = sample();
        assert!(get_section_lines_by_keywords(&sections, &[]).is_empty());
    }
}
