//! Candidate profile validation logic

use crate::error::ValidationError;
use crate::fields::{coerce_number, join, Fields, Violations};
use resume_domain::{
    CandidateProfile, CompanyInformation, Education, Experience, PersonalInfo, Position, Project,
    SkillTiers, Skills,
};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Proficiency tiers recognized inside a skill category
const PROFICIENT: &str = "proficient";
const AVERAGE: &str = "average";

/// Validate a raw model response and build the candidate profile
///
/// Every field is checked, including the fields of nested records, even after
/// an earlier field has failed. The returned error lists every failing path.
///
/// # Errors
///
/// Returns a [`ValidationError`] with one entry per failing field.
pub fn validate(raw: &Value) -> Result<CandidateProfile, ValidationError> {
    let mut errs = Violations::default();
    let profile = candidate_profile(raw, &mut errs);

    match profile {
        Some(profile) if errs.is_empty() => Ok(profile),
        _ => {
            let entries = errs.into_entries();
            debug!("Response rejected with {} violation(s)", entries.len());
            Err(ValidationError::new(entries))
        }
    }
}

fn candidate_profile(raw: &Value, errs: &mut Violations) -> Option<CandidateProfile> {
    let root = match raw {
        Value::Object(_) => Fields::open(Some(raw), String::new(), errs)?,
        _ => {
            errs.wrong_type("<root>", "object");
            return None;
        }
    };

    let personal_information = root
        .object("personal_information", errs)
        .and_then(|f| personal_info(&f, errs));
    let title = root.string("title", errs);
    let skills = root.object("skills", errs).and_then(|f| skills(&f, errs));
    let education = root
        .object("education", errs)
        .and_then(|f| education(&f, errs));
    let experience = root
        .list("experience", errs)
        .and_then(|items| each(items, errs, experience));
    let projects_outside_of_work = root
        .list("projects_outside_of_work", errs)
        .and_then(|items| each(items, errs, project));
    let additional_experience_summary = root.free_map("additional_experience_summary", errs);
    let achievements_awards = root.free_map("achievements_awards", errs);
    let overall_summary_of_candidate = root.string("overall_summary_of_candidate", errs);

    Some(CandidateProfile {
        personal_information: personal_information?,
        title: title?,
        skills: skills?,
        education: education?,
        experience: experience?,
        projects_outside_of_work: projects_outside_of_work?,
        additional_experience_summary: additional_experience_summary?,
        achievements_awards: achievements_awards?,
        overall_summary_of_candidate: overall_summary_of_candidate?,
    })
}

/// Validate every element of a list, keeping going after failures
fn each<T>(
    items: Vec<(String, &Value)>,
    errs: &mut Violations,
    build: fn(&Fields<'_>, &mut Violations) -> Option<T>,
) -> Option<Vec<T>> {
    let built: Vec<Option<T>> = items
        .into_iter()
        .map(|(path, value)| Fields::open(Some(value), path, errs).and_then(|f| build(&f, errs)))
        .collect();
    built.into_iter().collect()
}

fn personal_info(f: &Fields<'_>, errs: &mut Violations) -> Option<PersonalInfo> {
    let name = f.string("name", errs);
    let email = f.string("email", errs);
    let mobile = f.string("mobile", errs);
    let city = f.string("city", errs);
    let country = f.string("country", errs);
    let linkedin = f.optional_url("linkedIn", errs);
    let github = f.optional_url("gitHub", errs);

    Some(PersonalInfo {
        name: name?,
        email: email?,
        mobile: mobile?,
        city: city?,
        country: country?,
        linkedin: linkedin?,
        github: github?,
    })
}

fn skills(f: &Fields<'_>, errs: &mut Violations) -> Option<Skills> {
    let languages = f.object("languages", errs).and_then(|t| skill_tiers(&t, errs));
    let frameworks = f.object("frameworks", errs).and_then(|t| skill_tiers(&t, errs));
    let technologies = f
        .object("technologies", errs)
        .and_then(|t| skill_tiers(&t, errs));
    let total_skill_experience = f
        .object("total_skill_experience", errs)
        .and_then(|t| skill_years(&t, errs));
    let llm_experience = f.boolean("llm_experience", errs);
    let gen_ai_experience = f.boolean("gen_ai_experience", errs);

    Some(Skills {
        languages: languages?,
        frameworks: frameworks?,
        technologies: technologies?,
        total_skill_experience: total_skill_experience?,
        llm_experience: llm_experience?,
        gen_ai_experience: gen_ai_experience?,
    })
}

/// Tiers are optional inside a category; other keys are ignored
fn skill_tiers(f: &Fields<'_>, errs: &mut Violations) -> Option<SkillTiers> {
    for (key, _) in f.entries() {
        if key != PROFICIENT && key != AVERAGE {
            debug!("Ignoring unknown proficiency tier '{}' at {}", key, f.path());
        }
    }

    let proficient = skill_names(f, PROFICIENT, errs);
    let average = skill_names(f, AVERAGE, errs);

    Some(SkillTiers {
        proficient: proficient?,
        average: average?,
    })
}

fn skill_names(f: &Fields<'_>, tier: &str, errs: &mut Violations) -> Option<Vec<String>> {
    let items = f.optional_list(tier, errs)?;
    let names: Vec<Option<String>> = items
        .into_iter()
        .map(|(path, value)| match value {
            Value::String(s) => Some(s.clone()),
            _ => {
                errs.wrong_type(&path, "string");
                None
            }
        })
        .collect();
    names.into_iter().collect()
}

fn skill_years(f: &Fields<'_>, errs: &mut Violations) -> Option<BTreeMap<String, f64>> {
    let mut years = BTreeMap::new();
    let mut failed = false;

    for (skill, value) in f.entries() {
        match coerce_number(value) {
            Some(n) => {
                years.insert(skill.clone(), n);
            }
            None => {
                errs.wrong_type(&join(f.path(), skill), "number");
                failed = true;
            }
        }
    }

    (!failed).then_some(years)
}

fn education(f: &Fields<'_>, errs: &mut Violations) -> Option<Education> {
    let school_name = f.string("school_name", errs);
    let degree_name = f.string("degree_name", errs);
    let city = f.string("city", errs);
    let country = f.string("country", errs);
    let year_of_start = f.year("year_of_start", errs);
    let year_of_graduation = f.year("year_of_graduation", errs);
    let duration_in_years = f.number("duration_in_years", errs);
    let mode = f.string("mode", errs);
    let degree_level = f.string("degree_level", errs);
    let is_cs_degree = f.boolean("is_cs_degree", errs);
    let is_ml_degree = f.boolean("is_ml_degree", errs);
    let institute_type = f.string("institute_type", errs);

    Some(Education {
        school_name: school_name?,
        degree_name: degree_name?,
        city: city?,
        country: country?,
        year_of_start: year_of_start?,
        year_of_graduation: year_of_graduation?,
        duration_in_years: duration_in_years?,
        mode: mode?,
        degree_level: degree_level?,
        is_cs_degree: is_cs_degree?,
        is_ml_degree: is_ml_degree?,
        institute_type: institute_type?,
    })
}

fn experience(f: &Fields<'_>, errs: &mut Violations) -> Option<Experience> {
    let company_information = f
        .object("company_information", errs)
        .and_then(|c| company_information(&c, errs));
    let positions = f
        .list("positions_held_within_the_company", errs)
        .and_then(|items| each(items, errs, position));

    Some(Experience {
        company_information: company_information?,
        positions_held_within_the_company: positions?,
    })
}

fn company_information(f: &Fields<'_>, errs: &mut Violations) -> Option<CompanyInformation> {
    let name = f.string("name", errs);
    let last_position_held = f.string("last_position_held", errs);
    let city = f.string("city", errs);
    let country = f.string("country", errs);
    let joining_month_and_year = f.string("joining_month_and_year", errs);
    let leaving_month_and_year = f.string("leaving_month_and_year", errs);
    let total_duration_in_years = f.number("total_duration_in_years", errs);
    let company_size_range = f.string("company_size_range", errs);
    let total_capital_raised = f.string("total_capital_raised", errs);
    let company_type = f.string("company_type", errs);
    let is_faang = f.boolean("is_faang", errs);
    let raised_recently = f.optional_boolean("has_the_company_raised_capital_in_last_5_years", errs);
    let is_startup = f.optional_boolean("is_startup", errs);

    Some(CompanyInformation {
        name: name?,
        last_position_held: last_position_held?,
        city: city?,
        country: country?,
        joining_month_and_year: joining_month_and_year?,
        leaving_month_and_year: leaving_month_and_year?,
        total_duration_in_years: total_duration_in_years?,
        company_size_range: company_size_range?,
        total_capital_raised: total_capital_raised?,
        company_type: company_type?,
        is_faang: is_faang?,
        has_the_company_raised_capital_in_last_5_years: raised_recently?,
        is_startup: is_startup?,
    })
}

fn position(f: &Fields<'_>, errs: &mut Violations) -> Option<Position> {
    let position_name = f.string("position_name", errs);
    let position_starting_date = f.string("position_starting_date", errs);
    let position_ending_date = f.string("position_ending_date", errs);
    let projects = f
        .optional_list("projects", errs)
        .and_then(|items| each(items, errs, project));

    Some(Position {
        position_name: position_name?,
        position_starting_date: position_starting_date?,
        position_ending_date: position_ending_date?,
        projects: projects?,
    })
}

fn project(f: &Fields<'_>, errs: &mut Violations) -> Option<Project> {
    let project_name = f.string("project_name", errs);
    let project_description = f.string("project_description", errs);

    Some(Project {
        project_name: project_name?,
        project_description: project_description?,
    })
}
