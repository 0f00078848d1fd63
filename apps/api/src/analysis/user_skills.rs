//! User Skill Extractor — skills mentioned in free text.
//!
//! Whole-word matching only: "going" must not count as "go". Pure and
//! deterministic for a given vocabulary.

use crate::vocabulary::{SkillSet, Vocabulary};

pub fn extract_user_skills(vocabulary: &Vocabulary, user_text: &str) -> SkillSet {
    let lowered = user_text.to_lowercase();
    vocabulary.whole_word_matches(&lowered).collect()
}
