use super::fulfillments::extract_fulfillments;
use crate::{
    requisites::{
        extract::{RequisiteLabel, extract_requisite_text},
        normalize::normalize,
    },
    util::collapse_whitespace,
};
use log::{debug, warn};
use models::course::{CourseCode, CourseRecord};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

/// One course as handed over by the page scraper, with markup already stripped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedCourse {
    /// Course code as printed on the page (e.g., "CSE 214")
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub credits: Option<u32>,
    pub url: Option<String>,
    pub dept_name: Option<String>,
    /// Text after the "Prerequisite(s):" label
    pub prerequisite_text: Option<String>,
    /// Text after the "Corequisite(s):" label
    pub corequisite_text: Option<String>,
    /// Plain text of the whole course block, searched when a requisite field is missing
    pub block: Option<String>,
    pub advisor_notes: Option<String>,
}

impl ScrapedCourse {
    /// Raw text of one requisite field, falling back to the course block
    fn requisite_text(&self, label: RequisiteLabel) -> Option<String> {
        let field = match label {
            RequisiteLabel::Prerequisite => &self.prerequisite_text,
            RequisiteLabel::Corequisite => &self.corequisite_text,
        };

        field.clone().or_else(|| {
            let block = self.block.as_deref()?;
            debug!("{}: reading {label} text from the course block", self.code);
            extract_requisite_text(block, label)
        })
    }
}

/// Converts one scraped course into a record with uncompiled requisites
///
/// # Arguments
/// * `course` - The scraped course
///
/// # Returns
/// `None` (after logging a warning) if the course code cannot be parsed
fn to_record(course: ScrapedCourse) -> Option<CourseRecord> {
    let code: CourseCode = match course.code.parse() {
        Ok(code) => code,
        Err(e) => {
            warn!("Skipping course with unusable code: {e}");
            return None;
        }
    };

    let raw_prerequisites = course.requisite_text(RequisiteLabel::Prerequisite);
    let raw_corequisites = course.requisite_text(RequisiteLabel::Corequisite);

    let fulfills = extract_fulfillments(
        std::iter::once(course.description.as_str()).chain(course.block.as_deref()),
    );

    let mut record = CourseRecord::new(code, collapse_whitespace(&course.title));
    record.dept_name = course.dept_name.filter(|name| !name.trim().is_empty());
    record.description = collapse_whitespace(&course.description);
    record.credits = course.credits;
    record.url = course.url;
    record.fulfills = fulfills;
    record.advisor_notes = course
        .advisor_notes
        .map(|notes| collapse_whitespace(&notes))
        .filter(|notes| !notes.is_empty());
    record.raw_prerequisites = raw_prerequisites.as_deref().and_then(normalize);
    record.raw_corequisites = raw_corequisites.as_deref().and_then(normalize);

    Some(record)
}

/// Turns every scraped course into a [`CourseRecord`] with a stable identifier.
///
/// Requisite text is normalized but not compiled; trees stay `TRUE` until the
/// second pass runs against the complete code index. Courses whose code does
/// not parse are dropped.
///
/// # Arguments
/// * `scraped` - Every course returned by the scraper
///
/// # Returns
/// The records, in input order
pub fn first_pass(scraped: Vec<ScrapedCourse>) -> Vec<CourseRecord> {
    scraped.into_par_iter().filter_map(to_record).collect()
}
