// Skill-gap analysis: required skills from a live job listing, user skills
// from free text, the gap between them, and a learning link per missing skill.
// All third-party calls go through `crate::providers`.

pub mod enricher;
pub mod gap;
pub mod gate;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod requirements;
pub mod user_skills;

#[cfg(test)]
pub(crate) mod mocks;
