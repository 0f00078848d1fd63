use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::vocabulary::SkillSet;

pub const MISSING_INPUT_MESSAGE: &str = "Job role and user text are required";

/// Body of `POST /api/analyze` as received. Both fields are optional at the
/// wire level so an absent field is a validation error, not a decode error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub job_role: Option<String>,
    #[serde(default)]
    pub user_text: Option<String>,
}

/// A request that passed validation: both fields present and non-blank.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub job_role: String,
    pub user_text: String,
}

impl AnalyzeRequest {
    pub fn validate(self) -> Result<AnalysisRequest, AppError> {
        match (non_blank(self.job_role), non_blank(self.user_text)) {
            (Some(job_role), Some(user_text)) => Ok(AnalysisRequest {
                job_role,
                user_text,
            }),
            _ => Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string())),
        }
    }
}

/// Whitespace-only counts as empty, so it gets the same 400.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A missing skill plus the first learning resource found for it, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedSkill {
    pub skill: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub job_title: String,
    pub required_skills: SkillSet,
    pub matched_skills: SkillSet,
    pub missing_skills: Vec<EnrichedSkill>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(job_role: Option<&str>, user_text: Option<&str>) -> AnalyzeRequest {
        AnalyzeRequest {
            job_role: job_role.map(str::to_string),
            user_text: user_text.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_accepts_both_fields() {
        let validated = request(Some("Data Analyst"), Some("I use SQL"))
            .validate()
            .unwrap();
        assert_eq!(validated.job_role, "Data Analyst");
        assert_eq!(validated.user_text, "I use SQL");
    }

    #[test]
    fn test_validate_rejects_missing_or_blank_fields() {
        for req in [
            request(None, Some("text")),
            request(Some("role"), None),
            request(Some(""), Some("text")),
            request(Some("role"), Some("   ")),
        ] {
            let err = req.validate().unwrap_err();
            assert!(matches!(err, AppError::Validation(ref m) if m == MISSING_INPUT_MESSAGE));
        }
    }

    #[test]
    fn test_request_uses_camel_case_keys() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"jobRole": "QA", "userText": "selenium"}"#).unwrap();
        assert_eq!(req.job_role.as_deref(), Some("QA"));
        assert_eq!(req.user_text.as_deref(), Some("selenium"));
    }

    #[test]
    fn test_result_serializes_with_null_urls() {
        let result = AnalysisResult {
            job_title: "Frontend".to_string(),
            required_skills: ["react", "css"].into_iter().collect(),
            matched_skills: ["react"].into_iter().collect(),
            missing_skills: vec![EnrichedSkill {
                skill: "css".to_string(),
                url: None,
            }],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "jobTitle": "Frontend",
                "requiredSkills": ["react", "css"],
                "matchedSkills": ["react"],
                "missingSkills": [{"skill": "css", "url": null}]
            })
        );
    }
}
