//! Skill matching and scoring.
//!
//! Detection is plain substring containment of each lowercase vocabulary skill in the
//! lowercased résumé text. There is no tokenisation or word-boundary check, so short
//! entries can hit inside longer words ("r" in "project").

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::skills::vocabulary::{SkillVocabulary, TargetSkills};

const MATCHED_COLOR: &str = "#10B981";
const MISSING_COLOR: &str = "#EF4444";

#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("No target skills are defined for role '{0}'")]
    EmptyTargetSkills(String),
}

/// Comparison of extracted skills against a role's target skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub role: String,
    pub role_recognized: bool,
    pub target_skills: Vec<String>,
    /// 1 = matched, 0 = missing; parallel to `target_skills`.
    pub indicators: Vec<u8>,
    pub matched_count: usize,
    /// Percentage in [0, 100], two decimals.
    pub score: f64,
    /// Target skills with indicator 0, in vocabulary order.
    pub missing_skills: Vec<String>,
    pub extracted_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStatus {
    Matched,
    Missing,
}

impl SkillStatus {
    fn from_indicator(indicator: u8) -> Self {
        if indicator == 1 {
            SkillStatus::Matched
        } else {
            SkillStatus::Missing
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SkillStatus::Matched => MATCHED_COLOR,
            SkillStatus::Missing => MISSING_COLOR,
        }
    }
}

/// Chart-ready view of a report: labels, values, and per-bar status and color.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<u8>,
    pub statuses: Vec<SkillStatus>,
    pub colors: Vec<&'static str>,
}

impl MatchReport {
    pub fn chart(&self) -> ChartData {
        let statuses: Vec<SkillStatus> = self
            .indicators
            .iter()
            .map(|&v| SkillStatus::from_indicator(v))
            .collect();
        ChartData {
            labels: self.target_skills.clone(),
            values: self.indicators.clone(),
            colors: statuses.iter().map(|s| s.color()).collect(),
            statuses,
        }
    }
}

/// Detects vocabulary skills present in `text`. Results use the vocabulary's display
/// spelling, deduplicated, in vocabulary order.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    let normalized = text.to_lowercase();
    vocabulary
        .known_skills()
        .iter()
        .filter(|skill| normalized.contains(skill.lower.as_str()))
        .map(|skill| skill.display.to_string())
        .collect()
}

/// Matches `text` against the target skills of `role`.
pub fn match_resume(
    text: &str,
    role: &str,
    vocabulary: &SkillVocabulary,
) -> Result<MatchReport, MatchError> {
    let extracted = extract_skills(text, vocabulary);
    let target = vocabulary.target_skills(role);
    compare(extracted, &target)
}

/// Builds a report from already-extracted skills and resolved target skills.
pub fn compare(extracted: Vec<String>, target: &TargetSkills) -> Result<MatchReport, MatchError> {
    if target.skills.is_empty() {
        return Err(MatchError::EmptyTargetSkills(target.role.clone()));
    }

    let extracted_lower: HashSet<String> = extracted.iter().map(|s| s.to_lowercase()).collect();

    let indicators: Vec<u8> = target
        .skills
        .iter()
        .map(|skill| u8::from(extracted_lower.contains(&skill.to_lowercase())))
        .collect();

    let matched_count = indicators.iter().filter(|&&v| v == 1).count();

    let missing_skills = target
        .skills
        .iter()
        .zip(&indicators)
        .filter(|(_, v)| **v == 0)
        .map(|(skill, _)| skill.to_string())
        .collect();

    Ok(MatchReport {
        role: target.role.clone(),
        role_recognized: target.recognized,
        target_skills: target.skills.iter().map(|s| s.to_string()).collect(),
        indicators,
        matched_count,
        score: percentage(matched_count, target.skills.len()),
        missing_skills,
        extracted_skills: extracted,
    })
}

/// `matched / total * 100`, rounded to two decimals. `total` must be non-zero.
fn percentage(matched: usize, total: usize) -> f64 {
    let raw = matched as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> SkillVocabulary {
        SkillVocabulary::builtin()
    }

    #[test]
    fn test_software_engineer_python_sql_docker() {
        let report = match_resume("PyThOn, SQL, docker", "Software Engineer", &vocab()).unwrap();

        for (skill, &indicator) in report.target_skills.iter().zip(&report.indicators) {
            let expected = matches!(skill.as_str(), "Python" | "SQL" | "Docker");
            assert_eq!(indicator == 1, expected, "indicator for {skill}");
        }
        assert_eq!(report.matched_count, 3);
        assert_eq!(report.score, 14.29);
    }

    #[test]
    fn test_substring_matching_is_loose() {
        // "r" is a vocabulary skill (Data Scientist) and hits inside "project".
        let skills = extract_skills("Led a project", &vocab());
        assert!(skills.contains(&"R".to_string()));
    }

    #[test]
    fn test_multi_word_skills_detected() {
        let skills = extract_skills("Strong in machine learning and Version Control (Git).", &vocab());
        assert!(skills.contains(&"Machine Learning".to_string()));
        assert!(skills.contains(&"Version Control (Git)".to_string()));
    }

    #[test]
    fn test_extracted_skills_are_deduplicated_and_display_cased() {
        let skills = extract_skills("sql SQL Sql attention to detail", &vocab());
        assert_eq!(skills.iter().filter(|s| *s == "SQL").count(), 1);
        assert!(skills.contains(&"Attention to Detail".to_string()));
    }

    #[test]
    fn test_score_zero_when_nothing_extracted() {
        let report = compare(Vec::new(), &vocab().target_skills("Project Manager")).unwrap();
        assert_eq!(report.score, 0.0);
        assert_eq!(report.matched_count, 0);
        assert_eq!(report.missing_skills.len(), 15);
    }

    #[test]
    fn test_score_hundred_when_every_target_present() {
        let vocab = vocab();
        let target = vocab.target_skills("Business Analyst");
        let text = target.skills.join(" | ").to_uppercase();
        let report = match_resume(&text, "Business Analyst", &vocab).unwrap();
        assert_eq!(report.score, 100.0);
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_score_always_within_bounds() {
        let vocab = vocab();
        for text in ["", "python", "scrum jira uml agile", "communication teamwork"] {
            for role in ["Software Engineer", "Data Scientist", "Astronaut"] {
                let report = match_resume(text, role, &vocab).unwrap();
                assert!((0.0..=100.0).contains(&report.score));
            }
        }
    }

    #[test]
    fn test_unknown_role_uses_default_list() {
        let report = match_resume("teamwork", "Astronaut", &vocab()).unwrap();
        assert!(!report.role_recognized);
        assert_eq!(
            report.target_skills,
            vec!["Communication", "Problem Solving", "Teamwork", "Adaptability"]
        );
        assert_eq!(report.indicators, vec![0, 0, 1, 0]);
        assert_eq!(report.score, 25.0);
    }

    #[test]
    fn test_missing_skills_follow_vocabulary_order() {
        // Mention skills in reverse vocabulary order; missing order must not change.
        let report = match_resume("conflict resolution, scrum", "Project Manager", &vocab()).unwrap();
        let target = vocab().target_skills("Project Manager");
        let expected: Vec<String> = target
            .skills
            .iter()
            .filter(|s| **s != "Conflict Resolution" && **s != "Scrum")
            .map(|s| s.to_string())
            .collect();
        assert_eq!(report.missing_skills, expected);
    }

    #[test]
    fn test_empty_target_list_is_error() {
        const EMPTY: &[&str] = &[];
        let vocab = SkillVocabulary::from_tables(&[("Ghost", EMPTY)], &[]);
        let err = match_resume("anything", "Ghost", &vocab).unwrap_err();
        assert_eq!(err, MatchError::EmptyTargetSkills("Ghost".to_string()));
    }

    #[test]
    fn test_chart_colors_follow_indicators() {
        let report = match_resume("teamwork", "Astronaut", &vocab()).unwrap();
        let chart = report.chart();
        assert_eq!(chart.labels, report.target_skills);
        assert_eq!(chart.values, vec![0, 0, 1, 0]);
        assert_eq!(chart.colors, vec![MISSING_COLOR, MISSING_COLOR, MATCHED_COLOR, MISSING_COLOR]);
        assert_eq!(chart.statuses[2], SkillStatus::Matched);
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(4, 4), 100.0);
    }
}
