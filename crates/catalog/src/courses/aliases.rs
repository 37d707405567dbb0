use lazy_static::lazy_static;
use models::course::{CourseCode, CourseId, CourseRecord};
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref ALIAS: Regex = Regex::new(
        r"(?i)\b(?:also offered as|same as|cross-listed (?:as|with))\s+([A-Z]{2,4}\s*\d{2,3}[A-Z]?)\b"
    )
    .unwrap();
}

/// Another code under which a course is offered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAlias {
    pub course_id: CourseId,
    pub alias_code: CourseCode,
}

/// Codes a description says the course is also offered as, first mention first
fn alias_codes(record: &CourseRecord) -> Vec<CourseCode> {
    let mut codes: Vec<CourseCode> = Vec::new();

    for caps in ALIAS.captures_iter(&record.description) {
        let Ok(code) = caps[1].parse::<CourseCode>() else {
            continue;
        };
        if code != record.code && !codes.contains(&code) {
            codes.push(code);
        }
    }

    codes
}

/// Collects cross-listings ("Also offered as", "Same as", "Cross-listed as")
/// mentioned in course descriptions
///
/// # Arguments
/// * `records` - The scraped courses
///
/// # Returns
/// One [`CourseAlias`] per mention, in record order
pub fn find_aliases(records: &[CourseRecord]) -> Vec<CourseAlias> {
    records
        .iter()
        .flat_map(|record| {
            alias_codes(record)
                .into_iter()
                .map(move |alias_code| CourseAlias {
                    course_id: record.id.clone(),
                    alias_code,
                })
        })
        .collect()
}

/// Fills in `cross_listed` on every record from its description
pub fn attach_cross_listings(records: &mut [CourseRecord]) {
    for record in records.iter_mut() {
        record.cross_listed = alias_codes(record);
    }
}
