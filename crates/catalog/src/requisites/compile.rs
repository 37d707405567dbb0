use super::normalize::is_incomplete;
use crate::courses::index::CourseCodeIndex;
use lazy_static::lazy_static;
use log::debug;
use models::{
    course::{CourseCode, CourseId},
    requisite::RequirementNode,
};
use regex::Regex;
use strum::Display;

lazy_static! {
    static ref COURSE_CODE: Regex = Regex::new(r"\b([A-Z]{2,4})\s*(\d{2,3}[A-Z]?)\b").unwrap();
}

/// How the course references found in one requisite text are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    fn combine(self, nodes: Vec<RequirementNode>) -> RequirementNode {
        match self {
            Self::And => RequirementNode::all(nodes),
            Self::Or => RequirementNode::any(nodes),
        }
    }
}

/// Connective used when text mentions both "and" and "or", or neither.
///
/// A requisite gate that is too strict is safer than one that is too lax, so
/// ambiguous lists are read as conjunctions.
pub const AMBIGUOUS_CONNECTIVE: Connective = Connective::And;

/// Turns normalized requisite text into a requirement tree
pub trait RequirementCompiler {
    /// Compiles `text` against a finished code index.
    ///
    /// `None` means there was nothing to compile and always yields `TRUE`.
    fn compile(&self, text: Option<&str>, index: &CourseCodeIndex) -> RequirementNode;
}

/// Single-level compiler that picks one connective for the whole text.
///
/// Parentheses and mixed "X or Y and Z" chains are flattened into one
/// `AND`/`OR` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatCompiler {
    pub ambiguous: Connective,
}

impl Default for FlatCompiler {
    fn default() -> Self {
        Self {
            ambiguous: AMBIGUOUS_CONNECTIVE,
        }
    }
}

impl FlatCompiler {
    /// Picks the connective from the words " and " / " or " in the text
    pub fn connective(&self, text: &str) -> Connective {
        let lower = text.to_lowercase();

        match (lower.contains(" and "), lower.contains(" or ")) {
            (true, false) => Connective::And,
            (false, true) => Connective::Or,
            _ => self.ambiguous,
        }
    }
}

impl RequirementCompiler for FlatCompiler {
    fn compile(&self, text: Option<&str>, index: &CourseCodeIndex) -> RequirementNode {
        let Some(text) = text else {
            return RequirementNode::True;
        };

        // Truncated text must never turn into a hard requirement
        if is_incomplete(text) {
            return RequirementNode::True;
        }

        let nodes: Vec<_> = extract_course_codes(text)
            .iter()
            .map(|code| RequirementNode::course(resolve_or_placeholder(code, index)))
            .collect();

        let connective = self.connective(text);
        if nodes.len() > 1 {
            debug!("Joining {} references with {connective}: {text:?}", nodes.len());
        }

        connective.combine(nodes)
    }
}

/// Finds every course code in `text`, left to right, keeping repeats
///
/// # Arguments
/// * `text` - Normalized requisite text
///
/// # Returns
/// The codes in the order they appear
pub fn extract_course_codes(text: &str) -> Vec<CourseCode> {
    COURSE_CODE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

fn resolve_or_placeholder(code: &CourseCode, index: &CourseCodeIndex) -> CourseId {
    index
        .resolve(code)
        .cloned()
        .unwrap_or_else(|| CourseId::placeholder(code))
}

/// Compiles requisite text with the default [`FlatCompiler`]
pub fn compile(text: Option<&str>, index: &CourseCodeIndex) -> RequirementNode {
    FlatCompiler::default().compile(text, index)
}
