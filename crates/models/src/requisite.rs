use crate::course::CourseId;
use serde::{Deserialize, Serialize};

/// Represents a node in a requirement tree
///
/// Serialized as a closed union tagged by `kind`:
/// `{"kind":"TRUE"}`, `{"kind":"COURSE","courseId":..}`,
/// `{"kind":"AND","nodes":[..]}` and `{"kind":"OR","nodes":[..]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "UPPERCASE")]
pub enum RequirementNode {
    /// No enforceable requirement
    #[default]
    True,
    /// Requires the course with this identifier
    Course {
        #[serde(rename = "courseId")]
        course_id: CourseId,
    },
    /// Every child must hold
    And { nodes: Vec<RequirementNode> },
    /// At least one child must hold
    Or { nodes: Vec<RequirementNode> },
}

impl RequirementNode {
    pub fn course(course_id: CourseId) -> Self {
        Self::Course { course_id }
    }

    /// Conjunction of `nodes`, collapsing an empty list to `TRUE` and a singleton to its child
    pub fn all(nodes: Vec<RequirementNode>) -> Self {
        Self::collapse(nodes, |nodes| Self::And { nodes })
    }

    /// Disjunction of `nodes`, collapsing an empty list to `TRUE` and a singleton to its child
    pub fn any(nodes: Vec<RequirementNode>) -> Self {
        Self::collapse(nodes, |nodes| Self::Or { nodes })
    }

    fn collapse(
        mut nodes: Vec<RequirementNode>,
        wrap: impl FnOnce(Vec<RequirementNode>) -> Self,
    ) -> Self {
        match nodes.len() {
            0 => Self::True,
            1 => nodes.remove(0),
            _ => wrap(nodes),
        }
    }

    /// Evaluate if this requirement is satisfied by the given completed courses
    pub fn evaluate(&self, completed_courses: &[CourseId]) -> bool {
        match self {
            Self::True => true,
            Self::Course { course_id } => completed_courses.contains(course_id),
            Self::And { nodes } => nodes.iter().all(|n| n.evaluate(completed_courses)),
            Self::Or { nodes } => nodes.iter().any(|n| n.evaluate(completed_courses)),
        }
    }

    /// Simplifies this requirement based on completed courses
    /// - Returns None if the requirement is already satisfied
    /// - Returns a simplified [`RequirementNode`] showing only remaining requirements otherwise
    pub fn simplify(&self, completed_courses: &[CourseId]) -> Option<RequirementNode> {
        match self {
            Self::True => None,
            Self::Course { course_id } => {
                (!completed_courses.contains(course_id)).then(|| self.clone())
            }

            // Keep only the children that are still unmet
            Self::And { nodes } => {
                let remaining: Vec<_> = nodes
                    .iter()
                    .filter_map(|n| n.simplify(completed_courses))
                    .collect();

                (!remaining.is_empty()).then(|| Self::all(remaining))
            }

            // Any satisfied child satisfies the whole disjunction
            Self::Or { nodes } => {
                let remaining: Option<Vec<_>> =
                    nodes.iter().map(|n| n.simplify(completed_courses)).collect();

                remaining.map(Self::any)
            }
        }
    }

    /// Every course identifier referenced by this tree, left to right
    pub fn course_ids(&self) -> Vec<&CourseId> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids<'a>(&'a self, ids: &mut Vec<&'a CourseId>) {
        match self {
            Self::True => {}
            Self::Course { course_id } => ids.push(course_id),
            Self::And { nodes } | Self::Or { nodes } => {
                nodes.iter().for_each(|n| n.collect_ids(ids));
            }
        }
    }

    /// Referenced identifiers that were never resolved to a catalogued course
    pub fn placeholders(&self) -> Vec<&CourseId> {
        self.course_ids()
            .into_iter()
            .filter(|id| id.is_placeholder())
            .collect()
    }
}
