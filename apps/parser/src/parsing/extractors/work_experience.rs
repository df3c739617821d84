//! Work experience extractor.
//!
//! Date and job title are resolved first; the company is then the boldest
//! header fragment that does not repeat either of them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{flatten, Fragment, ResumeWorkExperience};
use crate::parsing::bullet_points::{get_bullet_points_from_lines, get_descriptions_line_idx};
use crate::parsing::extractors::EntityKind;
use crate::parsing::features::{date_features, has_job_title, has_number, has_text, is_bold, word_count};
use crate::parsing::scoring::{
    get_text_with_highest_feature_score, Feature, SelectOptions, TextScore,
};
use crate::parsing::section_lookup::get_section_lines_by_keywords;
use crate::parsing::sections::SectionMap;
use crate::parsing::subsections::divide_section_into_subsections;

fn has_more_than_5_words(item: &Fragment) -> bool {
    word_count(&item.text) > 5
}

fn job_title_features() -> Vec<Feature<'static>> {
    vec![
        Feature::discriminative(has_job_title, 4),
        Feature::discriminative(has_number, -4),
        Feature::discriminative(has_more_than_5_words, -2),
    ]
}

fn company_features<'a>(date: &'a str, job_title: &'a str) -> Vec<Feature<'a>> {
    vec![
        Feature::discriminative(is_bold, 2),
        Feature::discriminative(has_text(date), -4),
        Feature::discriminative(has_text(job_title), -4),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceScores {
    pub company: Vec<TextScore>,
    pub job_title: Vec<TextScore>,
    pub date: Vec<TextScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkExperienceExtraction {
    pub work_experiences: Vec<ResumeWorkExperience>,
    pub scores: Vec<WorkExperienceScores>,
}

/// Extracts one work experience per subsection of the work section.
pub fn extract_work_experience(sections: &SectionMap) -> WorkExperienceExtraction {
    let kind = EntityKind::WorkExperience;
    let mut work_experiences = Vec::new();
    let mut scores = Vec::new();

    let lines = get_section_lines_by_keywords(sections, kind.section_keywords());
    for subsection in divide_section_into_subsections(lines) {
        let descriptions_idx = get_descriptions_line_idx(subsection)
            .or(kind.default_header_lines())
            .unwrap_or(0)
            .min(subsection.len());
        let (header, body) = subsection.split_at(descriptions_idx);
        let items = flatten(header);

        let date =
            get_text_with_highest_feature_score(&items, &date_features(), SelectOptions::default());
        let job_title = get_text_with_highest_feature_score(
            &items,
            &job_title_features(),
            SelectOptions::default(),
        );
        let company = get_text_with_highest_feature_score(
            &items,
            &company_features(&date.text, &job_title.text),
            SelectOptions::best_effort(),
        );

        work_experiences.push(ResumeWorkExperience {
            company: company.text,
            job_title: job_title.text,
            date: date.text,
            descriptions: get_bullet_points_from_lines(body),
        });
        scores.push(WorkExperienceScores {
            company: company.scores,
            job_title: job_title.scores,
            date: date.scores,
        });
    }

    debug!(count = work_experiences.len(), "Extracted work experiences");
    WorkExperienceExtraction {
        work_experiences,
        scores,
    }
}
