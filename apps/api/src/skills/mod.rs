// Skill matching: static vocabulary, substring detection, scoring,
// the upload pipeline and rule-based recommendations.

pub mod analysis;
pub mod handlers;
pub mod matcher;
pub mod recommendation;
pub mod vocabulary;
