//! Education extractor.
//!
//! ```text
//! Field        Unique attribute
//! School       has a school keyword
//! Degree       has a degree keyword
//! GPA          has a GPA-shaped number
//! Date         has a year, month, season or present marker
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{flatten, ResumeEducation};
use crate::parsing::bullet_points::{get_bullet_points_from_lines, get_descriptions_line_idx};
use crate::parsing::extractors::EntityKind;
use crate::parsing::features::{
    date_features, has_comma, has_degree, has_letter, has_number, has_school, match_gpa,
    match_grade,
};
use crate::parsing::scoring::{
    get_text_with_highest_feature_score, Feature, SelectOptions, TextScore,
};
use crate::parsing::section_lookup::get_section_lines_by_keywords;
use crate::parsing::sections::SectionMap;
use crate::parsing::subsections::divide_section_into_subsections;

fn school_features() -> Vec<Feature<'static>> {
    vec![
        Feature::discriminative(has_school, 4),
        Feature::discriminative(has_degree, -4),
        Feature::discriminative(has_number, -4),
    ]
}

fn degree_features() -> Vec<Feature<'static>> {
    vec![
        Feature::discriminative(has_degree, 4),
        Feature::discriminative(has_school, -4),
        Feature::discriminative(has_number, -3),
    ]
}

fn gpa_features() -> Vec<Feature<'static>> {
    vec![
        Feature::extractive(match_gpa, 4),
        Feature::extractive(match_grade, 3),
        Feature::discriminative(has_comma, -3),
        Feature::discriminative(has_letter, -4),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationScores {
    pub school: Vec<TextScore>,
    pub degree: Vec<TextScore>,
    pub gpa: Vec<TextScore>,
    pub date: Vec<TextScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationExtraction {
    pub educations: Vec<ResumeEducation>,
    pub scores: Vec<EducationScores>,
}

/// Extracts one education entry per subsection of the education section.
///
/// Header fields are scored over the lines above the description boundary, or
/// over the whole subsection when it has no descriptions. When a course section
/// exists its text is appended to the first entry as a `Courses:` description.
pub fn extract_education(sections: &SectionMap, course_prefix: &str) -> EducationExtraction {
    let kind = EntityKind::Education;
    let mut educations = Vec::new();
    let mut scores = Vec::new();

    let lines = get_section_lines_by_keywords(sections, kind.section_keywords());
    for subsection in divide_section_into_subsections(lines) {
        let descriptions_idx =
            get_descriptions_line_idx(subsection).or(kind.default_header_lines());
        let (header, body) = match descriptions_idx {
            Some(idx) => subsection.split_at(idx.min(subsection.len())),
            None => (subsection, &[][..]),
        };
        let items = flatten(header);

        let school =
            get_text_with_highest_feature_score(&items, &school_features(), SelectOptions::default());
        let degree =
            get_text_with_highest_feature_score(&items, &degree_features(), SelectOptions::default());
        let gpa =
            get_text_with_highest_feature_score(&items, &gpa_features(), SelectOptions::default());
        let date =
            get_text_with_highest_feature_score(&items, &date_features(), SelectOptions::default());

        educations.push(ResumeEducation {
            school: school.text,
            degree: degree.text,
            date: date.text,
            gpa: gpa.text,
            descriptions: get_bullet_points_from_lines(body),
        });
        scores.push(EducationScores {
            school: school.scores,
            degree: degree.scores,
            gpa: gpa.scores,
            date: date.scores,
        });
    }

    if let Some(first) = educations.first_mut() {
        let course_lines = get_section_lines_by_keywords(sections, &["course"]);
        if !course_lines.is_empty() {
            let courses = flatten(course_lines)
                .iter()
                .map(|item| item.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            first.descriptions.push(format!("{course_prefix}{courses}"));
        }
    }

    debug!(count = educations.len(), "Extracted education entries");
    EducationExtraction { educations, scores }
}
