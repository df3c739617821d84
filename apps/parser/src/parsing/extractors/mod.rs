// Field extractors: one orchestrator per résumé entity.
// Each resolves its section, divides it into entries, splits header from
// descriptions and scores the header fragments per scalar field.

pub mod custom;
pub mod education;
pub mod profile;
pub mod project;
pub mod skills;
pub mod work_experience;

use serde::{Deserialize, Serialize};

use crate::models::Resume;
use crate::parsing::sections::SectionMap;
use crate::ParserOptions;

pub use education::EducationScores;
pub use profile::ProfileScores;
pub use project::ProjectScores;
pub use work_experience::WorkExperienceScores;

/// Entity kinds that repeat inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Education,
    WorkExperience,
    Project,
    Skill,
}

impl EntityKind {
    /// Canonical keywords used to look the section up.
    pub fn section_keywords(self) -> &'static [&'static str] {
        match self {
            EntityKind::Education => &["education"],
            EntityKind::WorkExperience => &["work", "experience", "employment", "history", "job"],
            EntityKind::Project => &["project"],
            EntityKind::Skill => &["skill"],
        }
    }

    /// Header height used when no description boundary is found.
    /// `None` means the whole subsection is header.
    pub fn default_header_lines(self) -> Option<usize> {
        match self {
            EntityKind::Education => None,
            EntityKind::WorkExperience => Some(2),
            EntityKind::Project => Some(1),
            EntityKind::Skill => Some(0),
        }
    }
}

/// Candidate score tables for every scalar field the extractors resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeScores {
    pub profile: ProfileScores,
    pub work_experiences: Vec<WorkExperienceScores>,
    pub educations: Vec<EducationScores>,
    pub projects: Vec<ProjectScores>,
}

/// Runs every extractor over `sections` and assembles the résumé record.
pub fn extract_resume_from_sections(
    sections: &SectionMap,
    options: &ParserOptions,
) -> (Resume, ResumeScores) {
    let profile = profile::extract_profile(sections);
    let education = education::extract_education(sections, &options.course_prefix);
    let work = work_experience::extract_work_experience(sections);
    let project = project::extract_project(sections);
    let skills = skills::extract_skills(
        sections,
        options.featured_skill_slots,
        options.featured_skill_rating,
    );
    let custom = custom::extract_custom(sections);

    let resume = Resume {
        profile: profile.profile,
        work_experiences: work.work_experiences,
        educations: education.educations,
        projects: project.projects,
        skills,
        custom,
    };
    let scores = ResumeScores {
        profile: profile.scores,
        work_experiences: work.scores,
        educations: education.scores,
        projects: project.scores,
    };
    (resume, scores)
}
