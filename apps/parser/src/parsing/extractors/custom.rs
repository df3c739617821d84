//! Free-form section extractor: awards and honors as plain descriptions.

use crate::models::ResumeCustom;
use crate::parsing::bullet_points::get_bullet_points_from_lines;
use crate::parsing::section_lookup::get_section_lines_by_keywords;
use crate::parsing::sections::SectionMap;

const CUSTOM_SECTION_KEYWORDS: &[&str] = &["award", "honor"];

pub fn extract_custom(sections: &SectionMap) -> ResumeCustom {
    let lines = get_section_lines_by_keywords(sections, CUSTOM_SECTION_KEYWORDS);
    ResumeCustom {
        descriptions: get_bullet_points_from_lines(lines),
    }
}
