//! Static skill vocabulary: job roles, their ordered target skills, and the flattened
//! set of every known skill used for text matching.

use serde::Serialize;

/// Target skills used when the requested role is not in the vocabulary.
pub const DEFAULT_ROLE_SKILLS: &[&str] = &["Communication", "Problem Solving", "Teamwork", "Adaptability"];

const ROLE_SKILLS: &[(&str, &[&str])] = &[
    (
        "Software Engineer",
        &[
            "Python",
            "Java",
            "C++",
            "JavaScript",
            "SQL",
            "Data Structures",
            "Algorithms",
            "Object-Oriented Programming",
            "Web Development",
            "Cloud Computing",
            "Version Control (Git)",
            "Problem Solving",
            "Communication",
            "Teamwork",
            "Agile Methodologies",
            "REST API",
            "Docker",
            "Kubernetes",
            "Microservices",
            "Unit Testing",
            "CI/CD",
        ],
    ),
    (
        "Data Scientist",
        &[
            "Python",
            "R",
            "SQL",
            "Machine Learning",
            "Deep Learning",
            "Statistical Modeling",
            "Data Visualization",
            "Data Wrangling",
            "Big Data Technologies",
            "Cloud Computing",
            "Communication",
            "Problem Solving",
            "Critical Thinking",
            "Business Acumen",
            "Pandas",
            "NumPy",
            "Scikit-learn",
            "TensorFlow",
            "PyTorch",
            "Spark",
        ],
    ),
    (
        "Business Analyst",
        &[
            "Requirements Gathering",
            "Data Analysis",
            "SQL",
            "Process Modeling",
            "Stakeholder Management",
            "Communication",
            "Problem Solving",
            "Project Management",
            "Microsoft Excel",
            "Presentation Skills",
            "Critical Thinking",
            "Business Process Improvement",
            "UML",
            "Agile",
            "User Stories",
            "Jira",
            "Confluence",
        ],
    ),
    (
        "Project Manager",
        &[
            "Project Planning",
            "Risk Management",
            "Budget Management",
            "Stakeholder Management",
            "Team Leadership",
            "Communication",
            "Negotiation",
            "Problem Solving",
            "Agile Methodologies",
            "Scrum",
            "Time Management",
            "Decision Making",
            "Gantt Charts",
            "Resource Allocation",
            "Conflict Resolution",
        ],
    ),
];

/// Common soft skills recognised in résumé text even though no role targets them.
const EXTRA_SOFT_SKILLS: &[&str] = &[
    "Leadership",
    "Adaptability",
    "Creativity",
    "Time Management",
    "Analytical Skills",
    "Attention to Detail",
    "Customer Service",
    "Negotiation",
    "Public Speaking",
];

#[derive(Debug, Clone, Serialize)]
pub struct RoleProfile {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// A vocabulary entry: lowercase form for matching, display form for presentation.
#[derive(Debug, Clone)]
pub struct KnownSkill {
    pub display: &'static str,
    pub lower: String,
}

/// Target skills resolved for a requested role.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSkills {
    pub role: String,
    pub skills: &'static [&'static str],
    pub recognized: bool,
}

#[derive(Debug)]
pub struct SkillVocabulary {
    roles: Vec<RoleProfile>,
    known: Vec<KnownSkill>,
}

impl SkillVocabulary {
    /// The built-in vocabulary. Built once at startup and shared through `AppState`.
    pub fn builtin() -> Self {
        Self::from_tables(ROLE_SKILLS, EXTRA_SOFT_SKILLS)
    }

    pub fn from_tables(
        roles: &[(&'static str, &'static [&'static str])],
        extras: &[&'static str],
    ) -> Self {
        let roles: Vec<RoleProfile> = roles
            .iter()
            .map(|&(name, skills)| RoleProfile { name, skills })
            .collect();

        // Deduplicated on the lowercase form; the first spelling seen wins.
        let mut known: Vec<KnownSkill> = Vec::new();
        let all = roles
            .iter()
            .flat_map(|r| r.skills.iter().copied())
            .chain(extras.iter().copied());
        for display in all {
            let lower = display.to_lowercase();
            if !known.iter().any(|k| k.lower == lower) {
                known.push(KnownSkill { display, lower });
            }
        }

        Self { roles, known }
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    /// Every known skill in vocabulary order (roles first, then extra soft skills).
    pub fn known_skills(&self) -> &[KnownSkill] {
        &self.known
    }

    /// Resolves a role name (trimmed, case-insensitive). Unknown roles fall back to
    /// `DEFAULT_ROLE_SKILLS` and keep the requested name.
    pub fn target_skills(&self, role: &str) -> TargetSkills {
        let requested = role.trim();
        match self
            .roles
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(requested))
        {
            Some(profile) => TargetSkills {
                role: profile.name.to_string(),
                skills: profile.skills,
                recognized: true,
            },
            None => TargetSkills {
                role: requested.to_string(),
                skills: DEFAULT_ROLE_SKILLS,
                recognized: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_four_roles() {
        let vocab = SkillVocabulary::builtin();
        let names: Vec<_> = vocab.roles().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["Software Engineer", "Data Scientist", "Business Analyst", "Project Manager"]
        );
    }

    #[test]
    fn test_software_engineer_has_21_skills() {
        let vocab = SkillVocabulary::builtin();
        let target = vocab.target_skills("Software Engineer");
        assert!(target.recognized);
        assert_eq!(target.skills.len(), 21);
        assert_eq!(target.skills[0], "Python");
        assert_eq!(target.skills[20], "CI/CD");
    }

    #[test]
    fn test_unknown_role_falls_back_to_default() {
        let vocab = SkillVocabulary::builtin();
        let target = vocab.target_skills("Astronaut");
        assert!(!target.recognized);
        assert_eq!(target.role, "Astronaut");
        assert_eq!(
            target.skills,
            &["Communication", "Problem Solving", "Teamwork", "Adaptability"]
        );
    }

    #[test]
    fn test_role_lookup_ignores_case_and_padding() {
        let vocab = SkillVocabulary::builtin();
        let target = vocab.target_skills("  data scientist ");
        assert!(target.recognized);
        assert_eq!(target.role, "Data Scientist");
    }

    #[test]
    fn test_known_skills_are_deduplicated_case_insensitively() {
        let vocab = SkillVocabulary::builtin();
        let sql_count = vocab
            .known_skills()
            .iter()
            .filter(|k| k.lower == "sql")
            .count();
        assert_eq!(sql_count, 1);
        // "Negotiation" appears in Project Manager and in the extras.
        let negotiation = vocab
            .known_skills()
            .iter()
            .filter(|k| k.lower == "negotiation")
            .count();
        assert_eq!(negotiation, 1);
    }

    #[test]
    fn test_extra_soft_skills_are_known() {
        let vocab = SkillVocabulary::builtin();
        assert!(vocab
            .known_skills()
            .iter()
            .any(|k| k.display == "Attention to Detail" && k.lower == "attention to detail"));
    }
}
