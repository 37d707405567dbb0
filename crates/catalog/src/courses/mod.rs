pub mod aliases;
pub mod departments;
pub mod first_pass;
pub mod fulfillments;
pub mod index;
pub mod second_pass;

use crate::{
    error::IndexError,
    requisites::compile::{FlatCompiler, RequirementCompiler},
};
use aliases::attach_cross_listings;
use first_pass::{ScrapedCourse, first_pass};
use index::CourseCodeIndex;
use log::{info, warn};
use models::course::{CourseCode, CourseId, CourseRecord};
use second_pass::second_pass;
use serde::Serialize;

/// A requisite that points at a course code missing from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedReference {
    /// Course whose requisites contain the reference
    pub course: CourseCode,
    pub placeholder: CourseId,
}

/// Lists every placeholder identifier left in compiled requisite trees
///
/// # Arguments
/// * `records` - Records after the second pass
///
/// # Returns
/// One entry per placeholder occurrence, prerequisites before corequisites,
/// in record order
pub fn unresolved_references(records: &[CourseRecord]) -> Vec<UnresolvedReference> {
    records
        .iter()
        .flat_map(|record| {
            [&record.prerequisites, &record.corequisites]
                .into_iter()
                .flat_map(|tree| tree.placeholders())
                .map(move |placeholder| UnresolvedReference {
                    course: record.code.clone(),
                    placeholder: placeholder.clone(),
                })
        })
        .collect()
}

/// Resolves requisites across a complete course set with a given compiler.
///
/// Builds the code index from every record, then compiles each record's
/// requisite text against it. References to uncatalogued codes are logged and
/// kept as placeholders.
///
/// # Arguments
/// * `records` - Every first-pass record of the catalog
/// * `compiler` - Turns each requisite text into a tree
///
/// # Returns
/// The records with compiled trees, or an error if the index is inconsistent
pub fn resolve_requisites_with<C>(
    records: Vec<CourseRecord>,
    compiler: &C,
) -> Result<Vec<CourseRecord>, IndexError>
where
    C: RequirementCompiler + Sync,
{
    let index = CourseCodeIndex::build(&records)?;
    info!("Indexed {} course codes", index.len());

    let records = second_pass(records, &index, compiler);

    let unresolved = unresolved_references(&records);
    for reference in &unresolved {
        warn!(
            "{} references uncatalogued course {}",
            reference.course, reference.placeholder
        );
    }
    info!(
        "Compiled requisites for {} courses ({} unresolved references)",
        records.len(),
        unresolved.len()
    );

    Ok(records)
}

/// Resolves requisites across a complete course set with the default [`FlatCompiler`]
pub fn resolve_requisites(records: Vec<CourseRecord>) -> Result<Vec<CourseRecord>, IndexError> {
    resolve_requisites_with(records, &FlatCompiler::default())
}

/// Runs both passes over everything the scraper returned
///
/// # Arguments
/// * `scraped` - Every scraped course, in page order
///
/// # Returns
/// The finished records, in input order
pub fn build_catalog(scraped: Vec<ScrapedCourse>) -> Result<Vec<CourseRecord>, IndexError> {
    info!("First pass over {} scraped courses", scraped.len());
    let mut records = first_pass(scraped);
    attach_cross_listings(&mut records);

    resolve_requisites(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::requisite::RequirementNode;

    fn scraped(code: &str, prerequisites: Option<&str>, corequisites: Option<&str>) -> ScrapedCourse {
        ScrapedCourse {
            code: code.to_string(),
            title: format!("{code} title"),
            prerequisite_text: prerequisites.map(str::to_string),
            corequisite_text: corequisites.map(str::to_string),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<ScrapedCourse> {
        vec![
            scraped("CSE 216", Some("CSE 214 or CSE 260"), Some("AMS 210")),
            scraped("CSE 220", Some("CSE 214 and MAT 125 and"), None),
            scraped("CSE 214", Some("CSE 114; XYZ 101"), None),
            scraped("CSE 114", Some("None"), None),
            scraped("CSE 260", Some("Permission of instructor"), None),
            scraped("AMS 210", None, None),
        ]
    }

    fn id(code: &str) -> CourseId {
        CourseId::for_code(&code.parse().unwrap())
    }

    #[test]
    fn test_build_catalog() {
        let records = build_catalog(catalog()).unwrap();

        assert_eq!(records.len(), 6);
        assert_eq!(
            records[0].prerequisites,
            RequirementNode::Or {
                nodes: vec![
                    RequirementNode::course(id("CSE 214")),
                    RequirementNode::course(id("CSE 260")),
                ]
            }
        );
        assert_eq!(records[0].corequisites, RequirementNode::course(id("AMS 210")));
        // Truncated text stays unenforced
        assert_eq!(records[1].prerequisites, RequirementNode::True);
        assert_eq!(
            records[2].prerequisites,
            RequirementNode::And {
                nodes: vec![
                    RequirementNode::course(id("CSE 114")),
                    RequirementNode::course(CourseId::from("pending-xyz101")),
                ]
            }
        );
        assert_eq!(records[3].prerequisites, RequirementNode::True);
        assert_eq!(records[4].prerequisites, RequirementNode::True);
    }

    #[test]
    fn test_unresolved_references() {
        let records = build_catalog(catalog()).unwrap();

        assert_eq!(
            unresolved_references(&records),
            vec![UnresolvedReference {
                course: "CSE 214".parse().unwrap(),
                placeholder: CourseId::from("pending-xyz101"),
            }]
        );
    }

    #[test]
    fn test_two_runs_are_byte_identical() {
        let first = serde_json::to_string(&build_catalog(catalog()).unwrap()).unwrap();
        let second = serde_json::to_string(&build_catalog(catalog()).unwrap()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_requisites_rejects_conflicting_ids() {
        let mut duplicate = CourseRecord::new("CSE 214".parse().unwrap(), String::new());
        duplicate.id = CourseId::from("some-other-id");
        let records = vec![
            CourseRecord::new("CSE 214".parse().unwrap(), String::new()),
            duplicate,
        ];

        assert!(matches!(
            resolve_requisites(records),
            Err(IndexError::ConflictingIdentifier { .. })
        ));
    }

    #[test]
    fn test_build_catalog_attaches_cross_listings() {
        let mut course = scraped("CSE 301", None, None);
        course.description = "History of computing. Also offered as ISE 301.".to_string();

        let records = build_catalog(vec![course]).unwrap();
        assert_eq!(records[0].cross_listed, vec!["ISE301".parse::<CourseCode>().unwrap()]);
    }
}
