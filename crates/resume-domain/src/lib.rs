//! Resume Extract Domain Layer
//!
//! This crate contains the target record of the extraction pipeline and the
//! trait seams the other layers plug into. It holds no I/O and no parsing
//! logic: records are built by `resume-validator`, and language-model access
//! is implemented by `resume-llm`.
//!
//! ## Key Concepts
//!
//! - **CandidateProfile**: the validated, strongly-typed result for one resume
//! - **Nested records**: one explicit type per entity (personal information,
//!   skills, education, experience, projects)
//! - **LlmProvider**: the boundary to whatever answers the extraction prompt
//!
//! ## Architecture
//!
//! - No network or filesystem access
//! - Records are immutable once built; there is no `Deserialize` path that
//!   bypasses validation
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod profile;
pub mod traits;

// Re-exports for convenience
pub use profile::{
    CandidateProfile, CompanyInformation, Education, Experience, PersonalInfo, Position, Project,
    SkillTiers, Skills,
};
pub use traits::LlmProvider;
