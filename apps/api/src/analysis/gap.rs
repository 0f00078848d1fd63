//! Splits the required skills into matched and missing.

use crate::vocabulary::SkillSet;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGap {
    /// required ∩ user, in `required` order.
    pub matched: SkillSet,
    /// required − user, in `required` order.
    pub missing: Vec<String>,
}

pub fn compute_gap(required: &SkillSet, user: &SkillSet) -> SkillGap {
    let (matched, missing): (Vec<&str>, Vec<&str>) =
        required.iter().partition(|skill| user.contains(skill));

    SkillGap {
        matched: matched.into_iter().collect(),
        missing: missing.into_iter().map(str::to_string).collect(),
    }
}
