use super::index::CourseCodeIndex;
use crate::requisites::compile::RequirementCompiler;
use log::debug;
use models::course::CourseRecord;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Compiles the requisite text of every record against the finished code index.
///
/// The index must already hold the complete course set, so that a course can
/// refer to courses scraped after it.
///
/// # Arguments
/// * `records` - Records from the first pass
/// * `index` - Index built from all of `records`
/// * `compiler` - Turns each requisite text into a tree
///
/// # Returns
/// The records with `prerequisites` and `corequisites` filled in, in input order
pub fn second_pass<C>(
    records: Vec<CourseRecord>,
    index: &CourseCodeIndex,
    compiler: &C,
) -> Vec<CourseRecord>
where
    C: RequirementCompiler + Sync,
{
    records
        .into_par_iter()
        .map(|mut record| {
            record.prerequisites = compiler.compile(record.raw_prerequisites.as_deref(), index);
            record.corequisites = compiler.compile(record.raw_corequisites.as_deref(), index);

            debug!(
                "Compiled {}: prerequisites {:?}, corequisites {:?}",
                record.code, record.prerequisites, record.corequisites
            );
            record
        })
        .collect()
}
