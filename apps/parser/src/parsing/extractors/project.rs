//! Project extractor: project name and date from a one-line header by default.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{flatten, ResumeProject};
use crate::parsing::bullet_points::{get_bullet_points_from_lines, get_descriptions_line_idx};
use crate::parsing::extractors::EntityKind;
use crate::parsing::features::{date_features, has_text, is_bold};
use crate::parsing::scoring::{
    get_text_with_highest_feature_score, Feature, SelectOptions, TextScore,
};
use crate::parsing::section_lookup::get_section_lines_by_keywords;
use crate::parsing::sections::SectionMap;
use crate::parsing::subsections::divide_section_into_subsections;

fn project_features(date: &str) -> Vec<Feature<'_>> {
    vec![
        Feature::discriminative(is_bold, 2),
        Feature::discriminative(has_text(date), -4),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectScores {
    pub project: Vec<TextScore>,
    pub date: Vec<TextScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectExtraction {
    pub projects: Vec<ResumeProject>,
    pub scores: Vec<ProjectScores>,
}

pub fn extract_project(sections: &SectionMap) -> ProjectExtraction {
    let kind = EntityKind::Project;
    let mut projects = Vec::new();
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
        let project = get_text_with_highest_feature_score(
            &items,
            &project_features(&date.text),
            SelectOptions::best_effort(),
        );

        projects.push(ResumeProject {
            project: project.text,
            date: date.text,
            descriptions: get_bullet_points_from_lines(body),
        });
        scores.push(ProjectScores {
            project: project.scores,
            date: date.scores,
        });
    }

    debug!(count = projects.len(), "Extracted projects");
    ProjectExtraction { projects, scores }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fragment, Line};
    use crate::parsing::sections::group_lines_into_sections;

    #[test]
    fn test_project_name_and_date() {
        let lines = vec![
            Line::new(vec![Fragment::bold("JANE DOE")]),
            Line::new(vec![Fragment::plain("jane@example.com")]),
            Line::new(vec![Fragment::bold("PROJECTS")]),
            Line::new(vec![
                Fragment::bold("OpenResume Parser"),
                Fragment::plain("Fall 2022"),
            ]),
            Line::new(vec![Fragment::plain("Parsed résumés from PDF text layers")]),
            Line::new(vec![Fragment::bold("Chess Engine")]),
            Line::new(vec![Fragment::plain("• Alpha-beta search in Rust")]),
        ];
        let sections = group_lines_into_sections(&lines);
        let extraction = extract_project(&sections);
        assert_eq!(extraction.projects.len(), 2);

        let first = &extraction.projects[0];
        assert_eq!(first.project, "OpenResume Parser");
        assert_eq!(first.date, "Fall 2022");
        assert_eq!(first.descriptions, vec!["Parsed résumés from PDF text layers"]);

        let second = &extraction.projects[1];
        assert_eq!(second.project, "Chess Engine");
        assert_eq!(second.date, "");
        assert_eq!(second.descriptions, vec!["Alpha-beta search in Rust"]);
    }

    #[test]
    fn test_chinese_project_section_resolved() {
        let lines = vec![
            Line::new(vec![Fragment::bold("李四")]),
            Line::new(vec![Fragment::plain("lisi@example.com")]),
            Line::new(vec![Fragment::bold("项目经历")]),
            Line::new(vec![Fragment::bold("智能客服系统"), Fragment::plain("2022年")]),
        ];
        let sections = group_lines_into_sections(&lines);
        let project = &extract_project(&sections).projects[0];
        assert_eq!(project.project, "智能客服系统");
        assert_eq!(project.date, "2022年");
    }

    #[test]
    fn test_no_project_section() {
        let sections = group_lines_into_sections(&[]);
        assert!(extract_project(&sections).projects.is_empty());
    }
}
