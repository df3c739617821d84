// Résumé parsing pipeline.
// lines → sections → keyword lookup → subsections → header/description split
// → per-field scoring → assembled record.

pub mod bullet_points;
pub mod extractors;
pub mod features;
pub mod scoring;
pub mod section_lookup;
pub mod sections;
pub mod subsections;

pub use extractors::{extract_resume_from_sections, EntityKind, ResumeScores};
pub use scoring::{Feature, SelectOptions, Selection, TextScore};
pub use sections::{group_lines_into_sections, Section, SectionMap};
