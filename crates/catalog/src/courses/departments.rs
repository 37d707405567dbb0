use models::course::{CourseRecord, Department};
use std::collections::BTreeMap;

/// Lists every department that offers a scraped course, sorted by code
///
/// The first non-empty department name scraped for a code wins; departments
/// without one are named by their code.
pub fn departments(records: &[CourseRecord]) -> Vec<Department> {
    let mut names: BTreeMap<&str, Option<&str>> = BTreeMap::new();

    for record in records {
        let name = names.entry(record.dept_code.as_str()).or_default();
        if name.is_none() {
            *name = record
                .dept_name
                .as_deref()
                .filter(|name| !name.trim().is_empty());
        }
    }

    names
        .into_iter()
        .map(|(code, name)| Department {
            code: code.to_string(),
            name: name.unwrap_or(code).to_string(),
        })
        .collect()
}
