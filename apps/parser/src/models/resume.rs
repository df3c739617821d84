//! The structured résumé record handed to rendering and persistence collaborators.
//!
//! Every field has a typed empty default; nothing is optional on the wire.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub profile: ResumeProfile,
    pub work_experiences: Vec<ResumeWorkExperience>,
    pub educations: Vec<ResumeEducation>,
    pub projects: Vec<ResumeProject>,
    pub skills: ResumeSkills,
    pub custom: ResumeCustom,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub url: String,
    pub summary: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeWorkExperience {
    pub company: String,
    pub job_title: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeEducation {
    pub school: String,
    pub degree: String,
    pub date: String,
    pub gpa: String,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeProject {
    pub project: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedSkill {
    pub skill: String,
    /// 1 to 5 dots in the rendered template.
    pub rating: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSkills {
    pub featured_skills: Vec<FeaturedSkill>,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeCustom {
    pub descriptions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resume_serializes_with_all_fields() {
        let json = serde_json::to_value(Resume::default()).unwrap();
        for key in [
            "profile",
            "workExperiences",
            "educations",
            "projects",
            "skills",
            "custom",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["profile"]["name"], "");
        assert!(json["skills"]["featuredSkills"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_work_experience_uses_camel_case_job_title() {
        let exp = ResumeWorkExperience {
            job_title: "Engineer".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&exp).unwrap();
        assert_eq!(json["jobTitle"], "Engineer");
    }

    #[test]
    fn test_resume_round_trips_through_json() {
        let resume = Resume {
            educations: vec![ResumeEducation {
                school: "State University".to_string(),
                gpa: "3.85".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&resume).unwrap();
        let back: Resume = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resume);
    }
}
