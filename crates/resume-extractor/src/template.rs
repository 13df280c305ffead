//! Schema template embedded in the extraction prompt
//!
//! An annotated example of the profile JSON: every value is a placeholder
//! describing what belongs there. Keys are exactly the keys the validator
//! reads, and every field the validator reads as a number says so.

use serde_json::{json, Value};
use std::sync::LazyLock;

static SCHEMA_TEMPLATE: LazyLock<Value> = LazyLock::new(build_template);

/// The annotated profile template
pub fn schema_template() -> &'static Value {
    &SCHEMA_TEMPLATE
}

fn build_template() -> Value {
    json!({
        "personal_information": {
            "name": "<full name>",
            "email": "<email>",
            "mobile": "<mobile number>",
            "city": "<city, or the city of the current workplace if absent>",
            "country": "<country>",
            "linkedIn": "<LinkedIn URL or null>",
            "gitHub": "<GitHub URL or null>"
        },
        "title": "<type of engineer> with <total years of experience>",
        "skills": {
            "languages": {
                "proficient": ["<first 3-4 languages>"],
                "average": ["<remaining languages>"]
            },
            "frameworks": {
                "proficient": ["<first 2-3 frameworks>"],
                "average": ["<remaining frameworks>"]
            },
            "technologies": {
                "proficient": ["<first 2-3 technologies>"],
                "average": ["<remaining technologies>"]
            },
            "total_skill_experience": {
                "<skill name>": "<years as a number>"
            },
            "llm_experience": false,
            "gen_ai_experience": false
        },
        "education": {
            "school_name": "<school name>",
            "degree_name": "<degree name>",
            "city": "<city>",
            "country": "<country>",
            "year_of_start": "<start year as a number>",
            "year_of_graduation": "<graduation year as a number>",
            "duration_in_years": "<duration in years as a number>",
            "mode": "<offline/online>",
            "degree_level": "<bachelors/masters/PhD>",
            "is_cs_degree": false,
            "is_ml_degree": false,
            "institute_type": "<type of institute>"
        },
        "experience": [
            {
                "company_information": {
                    "name": "<company name>",
                    "last_position_held": "<last position held>",
                    "city": "<city>",
                    "country": "<country>",
                    "joining_month_and_year": "<MM-YYYY>",
                    "leaving_month_and_year": "<MM-YYYY>",
                    "total_duration_in_years": "<total duration in years as a number>",
                    "company_size_range": "<company size range>",
                    "total_capital_raised": "<total capital raised>",
                    "company_type": "<Product/Service>",
                    "is_faang": false,
                    "has_the_company_raised_capital_in_last_5_years": "<true/false/null if unknown>",
                    "is_startup": "<true/false/null if unknown>"
                },
                "positions_held_within_the_company": [
                    {
                        "position_name": "<position name>",
                        "position_starting_date": "<MM-YYYY>",
                        "position_ending_date": "<MM-YYYY>",
                        "projects": [
                            {
                                "project_name": "<project name>",
                                "project_description": "<project description>"
                            }
                        ]
                    }
                ]
            }
        ],
        "projects_outside_of_work": [
            {
                "project_name": "<project name>",
                "project_description": "<project description>"
            }
        ],
        "additional_experience_summary": {
            "years_of_full_time_experience_after_graduation": "<years>",
            "total_startup_experience": "<years>",
            "total_early_stage_startup_experience": "<years>",
            "product_company_experience": "<years>",
            "service_company_experience": "<years>",
            "gen_ai_experience": false
        },
        "achievements_awards": {
            "summary_of_achievements_awards": ["<summary of achievements and awards>"],
            "position_blurbs": [
                {
                    "position_name": "<position name>",
                    "blurb": "<blurb for position>"
                }
            ]
        },
        "overall_summary_of_candidate": "<brief summary of the candidate>"
    })
}
