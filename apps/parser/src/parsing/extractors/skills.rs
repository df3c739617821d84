//! Skills extractor: short header fragments become featured skills, the rest
//! become skill descriptions.

use tracing::debug;

use crate::models::{flatten, FeaturedSkill, ResumeSkills};
use crate::parsing::bullet_points::{get_bullet_points_from_lines, get_descriptions_line_idx};
use crate::parsing::extractors::EntityKind;
use crate::parsing::section_lookup::get_section_lines_by_keywords;
use crate::parsing::sections::SectionMap;

/// Extracts skills. `featured_slots` empty featured skills, each rated
/// `default_rating`, are always returned; header fragments fill them in order.
pub fn extract_skills(
    sections: &SectionMap,
    featured_slots: usize,
    default_rating: u8,
) -> ResumeSkills {
    let kind = EntityKind::Skill;
    let lines = get_section_lines_by_keywords(sections, kind.section_keywords());

    let descriptions_idx = get_descriptions_line_idx(lines)
        .or(kind.default_header_lines())
        .unwrap_or(0)
        .min(lines.len());
    let (header, body) = lines.split_at(descriptions_idx);
    let descriptions = get_bullet_points_from_lines(body);

    let mut featured_skills = vec![
        FeaturedSkill {
            skill: String::new(),
            rating: default_rating,
        };
        featured_slots
    ];
    let header_items = flatten(header);
    let names = header_items
        .iter()
        .map(|item| item.text.as_str())
        .filter(|text| !text.trim().is_empty());
    for (slot, name) in featured_skills.iter_mut().zip(names) {
        slot.skill = name.to_string();
    }

    debug!(
        descriptions = descriptions.len(),
        featured = header_items.len().min(featured_slots),
        "Extracted skills"
    );
    ResumeSkills {
        featured_skills,
        descriptions,
    }
}
