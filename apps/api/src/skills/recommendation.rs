//! Rule-based career recommendations.
//!
//! Everything here is table-driven: alignment picks the role-advice lines, keyword
//! rules pick a suggestion per missing skill, and the general advice is fixed.

use pulldown_cmark::{html, Parser};
use serde::Serialize;

use crate::skills::matcher::MatchReport;

/// Alignment requires fewer missing skills than this...
const WELL_ALIGNED_MAX_MISSING: usize = 3;
/// ...and more extracted skills than this.
const WELL_ALIGNED_MIN_EXTRACTED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    WellAligned,
    Broaden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    OnlineCourse,
    SoftSkill,
    General,
}

struct SuggestionRule {
    keywords: &'static [&'static str],
    kind: SuggestionKind,
}

/// First rule with a keyword contained in the skill name wins.
const SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        keywords: &["Python", "SQL", "Machine Learning", "Java", "JavaScript"],
        kind: SuggestionKind::OnlineCourse,
    },
    SuggestionRule {
        keywords: &["Communication", "Problem Solving", "Leadership", "Management"],
        kind: SuggestionKind::SoftSkill,
    },
];

const ADJACENT_ROLES: &[(&str, &str)] = &[
    (
        "Software Engineer",
        "Consider roles like **Full-Stack Developer** or **Backend Engineer**.",
    ),
    (
        "Data Scientist",
        "Explore positions such as **Machine Learning Engineer** or **Data Analyst**.",
    ),
    (
        "Business Analyst",
        "Look into roles like **Systems Analyst** or **Product Owner**.",
    ),
    (
        "Project Manager",
        "Roles like **Program Manager** or **Scrum Master** might also be a good fit.",
    ),
];

const GENERAL_ADVICE: &[&str] = &[
    "**Build a Strong Portfolio:** Showcase your projects and practical experience, especially for technical roles.",
    "**Networking:** Connect with professionals in your target industry on LinkedIn and attend industry events.",
    "**Continuous Learning:** The job market evolves rapidly. Always be open to learning new technologies and methodologies.",
    "**Tailor Your Resume:** Always customize your resume and cover letter for each specific job application.",
];

const NO_GAPS_LINE: &str =
    "Great job! You possess many of the target skills. Continue to refine your expertise in these areas.";

impl SuggestionKind {
    pub fn for_skill(skill: &str) -> Self {
        SUGGESTION_RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| skill.contains(k)))
            .map(|rule| rule.kind)
            .unwrap_or(SuggestionKind::General)
    }

    pub fn text(self) -> &'static str {
        match self {
            SuggestionKind::OnlineCourse => {
                "Consider online courses on Coursera, Udemy, or edX. Practice with coding challenges on LeetCode or HackerRank."
            }
            SuggestionKind::SoftSkill => {
                "Join Toastmasters, participate in group projects, or take online courses on soft skills. Look for relevant certifications."
            }
            SuggestionKind::General => {
                "Search for online tutorials, workshops, or practical projects related to this skill."
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillSuggestion {
    pub skill: String,
    pub kind: SuggestionKind,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub role: String,
    pub alignment: Alignment,
    pub role_advice: Vec<String>,
    pub skill_suggestions: Vec<SkillSuggestion>,
    pub general_advice: Vec<&'static str>,
    pub markdown: String,
    pub html: String,
}

pub fn alignment_for(report: &MatchReport) -> Alignment {
    if report.missing_skills.len() < WELL_ALIGNED_MAX_MISSING
        && report.extracted_skills.len() > WELL_ALIGNED_MIN_EXTRACTED
    {
        Alignment::WellAligned
    } else {
        Alignment::Broaden
    }
}

fn role_advice(alignment: Alignment, report: &MatchReport) -> Vec<String> {
    match alignment {
        Alignment::WellAligned => {
            let mut lines = vec![format!(
                "You seem well-aligned for a **{}** role. Focus on highlighting your strengths in your applications.",
                report.role
            )];
            if let Some((_, line)) = ADJACENT_ROLES.iter().find(|(role, _)| *role == report.role) {
                lines.push(line.to_string());
            }
            lines
        }
        Alignment::Broaden => {
            let related = if report.extracted_skills.is_empty() {
                "general tech/business roles".to_string()
            } else {
                report
                    .extracted_skills
                    .iter()
                    .take(3)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            vec![
                "Given your current skill set, you might also find opportunities in roles that require a broader range of skills, or roles that align with your strongest extracted skills.".to_string(),
                format!("Consider exploring roles related to: {related}."),
            ]
        }
    }
}

/// Builds the recommendation for a stored match report.
pub fn build_recommendation(report: &MatchReport) -> Recommendation {
    let alignment = alignment_for(report);
    let role_advice = role_advice(alignment, report);
    let skill_suggestions: Vec<SkillSuggestion> = report
        .missing_skills
        .iter()
        .map(|skill| {
            let kind = SuggestionKind::for_skill(skill);
            SkillSuggestion {
                skill: skill.clone(),
                kind,
                text: kind.text(),
            }
        })
        .collect();

    let markdown = render_markdown(&report.role, &role_advice, &skill_suggestions);
    let html = markdown_to_html(&markdown);

    Recommendation {
        role: report.role.clone(),
        alignment,
        role_advice,
        skill_suggestions,
        general_advice: GENERAL_ADVICE.to_vec(),
        markdown,
        html,
    }
}

fn render_markdown(role: &str, role_advice: &[String], suggestions: &[SkillSuggestion]) -> String {
    let mut md = format!("## Personalized Career Recommendations for {role}\n\n");
    md.push_str("Based on your current skills and the target role, here are some recommendations:\n\n");

    md.push_str("### 1. Specific Job Roles\n");
    for line in role_advice {
        md.push_str(&format!("* {line}\n"));
    }
    md.push('\n');

    md.push_str("### 2. Skill Improvement Suggestions\n");
    if suggestions.is_empty() {
        md.push_str(&format!("* {NO_GAPS_LINE}\n"));
    } else {
        md.push_str("To bridge the gaps for your target role, focus on these skills:\n");
        for s in suggestions {
            md.push_str(&format!("* **{}:** {}\n", s.skill, s.text));
        }
    }
    md.push('\n');

    md.push_str("### 3. General Career Advice\n");
    for line in GENERAL_ADVICE {
        md.push_str(&format!("* {line}\n"));
    }
    md.push('\n');

    md
}

fn markdown_to_html(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, Parser::new(markdown));
    out
}
