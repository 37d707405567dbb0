use lazy_static::lazy_static;
use models::course::{Fulfillment, SbcCategory};
use regex::Regex;

lazy_static! {
    static ref SBC_LIST: Regex = Regex::new(r"(?i:\bSBC)\s*:\s*([A-Z+\s,]+)").unwrap();
    static ref SBC_CODE: Regex = Regex::new(r"[A-Z]+").unwrap();
}

/// Collects the SBC categories listed after "SBC:" labels
///
/// A trailing `+` on a category ("STEM+") is dropped, and names that are not
/// a known [`SbcCategory`] are skipped.
///
/// # Arguments
/// * `texts` - Course text to search, e.g. the description and the course block
///
/// # Returns
/// Each category once, first mention first
pub fn extract_fulfillments<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<Fulfillment> {
    let mut fulfills = Vec::new();

    for text in texts {
        for caps in SBC_LIST.captures_iter(text) {
            for name in SBC_CODE.find_iter(&caps[1]) {
                let Ok(category) = name.as_str().parse::<SbcCategory>() else {
                    continue;
                };
                let fulfillment = Fulfillment { category };
                if !fulfills.contains(&fulfillment) {
                    fulfills.push(fulfillment);
                }
            }
        }
    }

    fulfills
}
