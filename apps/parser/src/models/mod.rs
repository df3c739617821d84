pub mod fragment;
pub mod resume;

pub use fragment::{flatten, Fragment, Line};
pub use resume::{
    FeaturedSkill, Resume, ResumeCustom, ResumeEducation, ResumeProfile, ResumeProject,
    ResumeSkills, ResumeWorkExperience,
};
