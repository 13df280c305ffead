//! Candidate profile - the record extracted from one resume
//!
//! Every nested entity has its own type so that field coverage is checked at
//! compile time. Wire keys match the schema template sent to the model; the
//! only keys that differ from the Rust field names are `linkedIn` and
//! `gitHub`.
//!
//! Records only implement `Serialize`. They are constructed by the validator
//! from a single model response and are never mutated afterwards.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use url::Url;

/// Lowest accepted value for education years
pub const MIN_YEAR: i64 = 1900;

/// The validated, strongly-typed extraction result for one resume
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    /// Contact details
    pub personal_information: PersonalInfo,

    /// One-line headline, e.g. "Backend Engineer with 6 years"
    pub title: String,

    /// Skill inventory
    pub skills: Skills,

    /// Highest education entry
    pub education: Education,

    /// Employment history, most recent first as returned by the model
    pub experience: Vec<Experience>,

    /// Side projects unrelated to any employer
    pub projects_outside_of_work: Vec<Project>,

    /// Free-form keyed summary of experience totals
    pub additional_experience_summary: Map<String, Value>,

    /// Free-form keyed summary of achievements and awards
    pub achievements_awards: Map<String, Value>,

    /// Free-text summary of the candidate
    pub overall_summary_of_candidate: String,
}

/// Contact details of the candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalInfo {
    /// Full name
    pub name: String,
    /// Email address, kept as written
    pub email: String,
    /// Phone number, kept as written
    pub mobile: String,
    /// City of residence or current workplace
    pub city: String,
    /// Country
    pub country: String,
    /// LinkedIn profile, absolute http(s) URL
    #[serde(rename = "linkedIn")]
    pub linkedin: Option<Url>,
    /// GitHub profile, absolute http(s) URL
    #[serde(rename = "gitHub")]
    pub github: Option<Url>,
}

/// Skills grouped by category and proficiency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skills {
    /// Programming languages
    pub languages: SkillTiers,
    /// Frameworks and libraries
    pub frameworks: SkillTiers,
    /// Tools, platforms and other technologies
    pub technologies: SkillTiers,
    /// Years of experience keyed by skill name
    pub total_skill_experience: BTreeMap<String, f64>,
    /// Has worked with large language models
    pub llm_experience: bool,
    /// Has worked on generative AI
    pub gen_ai_experience: bool,
}

/// Skill names keyed by proficiency tier
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillTiers {
    /// Skills the candidate is strongest in
    pub proficient: Vec<String>,
    /// Remaining skills
    pub average: Vec<String>,
}

impl SkillTiers {
    /// Iterate over all skill names, proficient first
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.proficient
            .iter()
            .chain(self.average.iter())
            .map(String::as_str)
    }
}

/// Education entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Education {
    /// Institution name
    pub school_name: String,
    /// Degree name
    pub degree_name: String,
    /// City of the institution
    pub city: String,
    /// Country of the institution
    pub country: String,
    /// Start year, never below [`MIN_YEAR`]
    pub year_of_start: i32,
    /// Graduation year, never below [`MIN_YEAR`]
    pub year_of_graduation: i32,
    /// Duration of the programme in years
    pub duration_in_years: f64,
    /// Study mode (offline/online)
    pub mode: String,
    /// Degree level (bachelors/masters/PhD)
    pub degree_level: String,
    /// Computer-science degree
    pub is_cs_degree: bool,
    /// Machine-learning degree
    pub is_ml_degree: bool,
    /// Kind of institute
    pub institute_type: String,
}

/// One employer and the positions held there
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experience {
    /// Facts about the employer
    pub company_information: CompanyInformation,
    /// Positions in the order the model listed them
    pub positions_held_within_the_company: Vec<Position>,
}

/// Employer details
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyInformation {
    /// Company name
    pub name: String,
    /// Last position held at the company
    pub last_position_held: String,
    /// City
    pub city: String,
    /// Country
    pub country: String,
    /// Joining date as MM-YYYY
    pub joining_month_and_year: String,
    /// Leaving date as MM-YYYY
    pub leaving_month_and_year: String,
    /// Tenure in years
    pub total_duration_in_years: f64,
    /// Headcount range
    pub company_size_range: String,
    /// Capital raised, as written
    pub total_capital_raised: String,
    /// Product or service company
    pub company_type: String,
    /// One of the FAANG companies
    pub is_faang: bool,
    /// Raised capital in the last five years, when known
    pub has_the_company_raised_capital_in_last_5_years: Option<bool>,
    /// Startup, when known
    pub is_startup: Option<bool>,
}

/// A position held within one company
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    /// Position title
    pub position_name: String,
    /// Start date as MM-YYYY
    pub position_starting_date: String,
    /// End date as MM-YYYY
    pub position_ending_date: String,
    /// Projects delivered in this position
    pub projects: Vec<Project>,
}

/// A named project with a short description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    /// Project name
    pub project_name: String,
    /// Short description
    pub project_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal(linkedin: Option<&str>) -> PersonalInfo {
        PersonalInfo {
            name: "Ada Lovelace".to_string(),
            email: "a@x.com".to_string(),
            mobile: "123".to_string(),
            city: "London".to_string(),
            country: "UK".to_string(),
            linkedin: linkedin.map(|u| Url::parse(u).unwrap()),
            github: None,
        }
    }

    #[test]
    fn test_personal_info_wire_keys() {
        let json = serde_json::to_value(personal(Some("https://linkedin.com/in/ada"))).unwrap();
        assert_eq!(json["linkedIn"], "https://linkedin.com/in/ada");
        assert!(json["gitHub"].is_null());
        assert!(json.get("linkedin").is_none());
    }

    #[test]
    fn test_skill_tiers_all_orders_proficient_first() {
        let tiers = SkillTiers {
            proficient: vec!["rust".to_string()],
            average: vec!["go".to_string(), "c".to_string()],
        };
        let all: Vec<&str> = tiers.all().collect();
        assert_eq!(all, vec!["rust", "go", "c"]);
    }

    #[test]
    fn test_position_serializes_projects() {
        let position = Position {
            position_name: "Engineer".to_string(),
            position_starting_date: "01-2020".to_string(),
            position_ending_date: "12-2022".to_string(),
            projects: vec![Project {
                project_name: "Engine".to_string(),
                project_description: "Analytical".to_string(),
            }],
        };
        let json = serde_json::to_value(&position).unwrap();
        assert_eq!(json["projects"][0]["project_name"], "Engine");
        assert_eq!(json["position_starting_date"], "01-2020");
    }
}
