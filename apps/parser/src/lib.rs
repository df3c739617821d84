//! Résumé parser.
//!
//! Turns the text fragments of a rendered résumé page, already grouped into
//! visual lines in reading order, into a structured [`Resume`]. English and
//! Chinese layouts are both recognized. Parsing never fails: fields that
//! cannot be resolved with confidence come back empty.

pub mod errors;
pub mod lexicon;
pub mod models;
pub mod parsing;

use tracing::{info, warn};

pub use errors::ParseError;
pub use models::{Fragment, Line, Resume};
pub use parsing::{ResumeScores, SectionMap};

use parsing::{extract_resume_from_sections, group_lines_into_sections};

/// Tunables for record assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Number of featured skill slots always present in the output.
    pub featured_skill_slots: usize,
    /// Rating given to every featured skill slot.
    pub featured_skill_rating: u8,
    /// Prefix of the course description appended to the first education entry.
    pub course_prefix: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            featured_skill_slots: 6,
            featured_skill_rating: 4,
            course_prefix: "Courses: ".to_string(),
        }
    }
}

/// Parses `lines` with the default options.
pub fn parse_resume(lines: &[Line]) -> Resume {
    parse_resume_with_options(lines, &ParserOptions::default())
}

pub fn parse_resume_with_options(lines: &[Line], options: &ParserOptions) -> Resume {
    parse_resume_with_scores(lines, options).0
}

/// Parses `lines` and also returns the candidate score tables behind every
/// scalar field.
pub fn parse_resume_with_scores(lines: &[Line], options: &ParserOptions) -> (Resume, ResumeScores) {
    if lines.is_empty() {
        warn!("Parsing a document with no lines");
    }

    let sections = group_lines_into_sections(lines);
    let (resume, scores) = extract_resume_from_sections(&sections, options);

    info!(
        lines = lines.len(),
        sections = sections.len(),
        work_experiences = resume.work_experiences.len(),
        educations = resume.educations.len(),
        projects = resume.projects.len(),
        "Parsed résumé"
    );
    (resume, scores)
}

/// Decodes lines from `[[{"text": "...", "fontName": "..."}]]`.
pub fn lines_from_json(input: &str) -> Result<Vec<Line>, ParseError> {
    serde_json::from_str(input).map_err(ParseError::InvalidInput)
}

/// Decodes lines from JSON and parses them with the default options.
pub fn parse_resume_from_json(input: &str) -> Result<Resume, ParseError> {
    let lines = lines_from_json(input)?;
    Ok(parse_resume(&lines))
}

pub fn resume_to_json(resume: &Resume, pretty: bool) -> Result<String, ParseError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(resume)
    } else {
        serde_json::to_string(resume)
    };
    encoded.map_err(ParseError::Serialize)
}
