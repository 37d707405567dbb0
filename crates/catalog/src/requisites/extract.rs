use lazy_static::lazy_static;
use regex::Regex;
use strum::Display;

lazy_static! {
    static ref PREREQUISITE_LABEL: Regex =
        Regex::new(r"(?i)\bpre-?req(?:uisite)?s?(?:\(s\))?\s*:").unwrap();
    static ref COREQUISITE_LABEL: Regex =
        Regex::new(r"(?i)\bco-?req(?:uisite)?s?(?:\(s\))?\s*:").unwrap();
    static ref PREREQUISITE_BOUNDARY: Regex = Regex::new(r"(?i)\bpre-?requisite").unwrap();
    static ref COREQUISITE_BOUNDARY: Regex =
        Regex::new(r"(?i)\bpre-\s*or\s+co-?req|\bco-?req(?:uisite)?").unwrap();
    /// Page chrome that follows the last field of a course block
    static ref FIELD_END: Regex = Regex::new(r"\s(?:Print|Help)\b").unwrap();
}

/// Which requisite field of a course block to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RequisiteLabel {
    Prerequisite,
    Corequisite,
}

impl RequisiteLabel {
    fn label(self) -> &'static Regex {
        match self {
            Self::Prerequisite => &*PREREQUISITE_LABEL,
            Self::Corequisite => &*COREQUISITE_LABEL,
        }
    }

    /// Start of the other requisite field, which ends this one
    fn other_boundary(self) -> &'static Regex {
        match self {
            Self::Prerequisite => &*COREQUISITE_BOUNDARY,
            Self::Corequisite => &*PREREQUISITE_BOUNDARY,
        }
    }
}

/// Pulls the text of one requisite field out of a course block's plain text.
///
/// The field runs from just after its label ("Prerequisite(s):", "Corequisites:",
/// "Co-req:", ...) to the next recognized field label ("Print", "Help", the other
/// requisite label) or the end of the block.
///
/// # Arguments
/// * `block` - The course block with markup already stripped
/// * `label` - The field to read
///
/// # Returns
/// The raw field text, or `None` if the label is missing or nothing follows it
pub fn extract_requisite_text(block: &str, label: RequisiteLabel) -> Option<String> {
    let start = label.label().find(block)?.end();
    let rest = &block[start..];

    let end = [FIELD_END.find(rest), label.other_boundary().find(rest)]
        .into_iter()
        .flatten()
        .map(|m| m.start())
        .min()
        .unwrap_or(rest.len());

    let text = rest[..end].trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "CSE 216 - Programming Abstractions Prerequisite(s): CSE 214 or CSE 260; \
                         CSE major Corequisite: AMS 210 4 credits Print-Friendly Page Help";

    #[test]
    fn test_extract_prerequisite() {
        assert_eq!(
            extract_requisite_text(BLOCK, RequisiteLabel::Prerequisite).as_deref(),
            Some("CSE 214 or CSE 260; CSE major")
        );
    }

    #[test]
    fn test_extract_corequisite() {
        assert_eq!(
            extract_requisite_text(BLOCK, RequisiteLabel::Corequisite).as_deref(),
            Some("AMS 210 4 credits")
        );
    }

    #[test]
    fn test_pre_or_corequisite_label_ends_prerequisites() {
        let block = "Prerequisite(s): CSE 214, CSE 215 Pre- or corequisite: AMS 210 Print";

        assert_eq!(
            extract_requisite_text(block, RequisiteLabel::Prerequisite).as_deref(),
            Some("CSE 214, CSE 215")
        );
        assert_eq!(
            extract_requisite_text(block, RequisiteLabel::Corequisite).as_deref(),
            Some("AMS 210")
        );
    }

    #[test]
    fn test_label_spellings() {
        for (block, expected) in [
            ("Prerequisites: MAT 125 Print", "MAT 125"),
            ("PREREQUISITE: MAT 125", "MAT 125"),
            ("Pre-requisite : MAT 125 Help", "MAT 125"),
            ("Prereq: MAT 125", "MAT 125"),
        ] {
            assert_eq!(
                extract_requisite_text(block, RequisiteLabel::Prerequisite).as_deref(),
                Some(expected),
                "block: {block}"
            );
        }

        assert_eq!(
            extract_requisite_text("Co-requisites: PHY 133", RequisiteLabel::Corequisite).as_deref(),
            Some("PHY 133")
        );
    }

    #[test]
    fn test_missing_or_empty_field() {
        for label in [RequisiteLabel::Prerequisite, RequisiteLabel::Corequisite] {
            assert_eq!(extract_requisite_text("An introduction to nothing.", label), None);
        }
        assert_eq!(
            extract_requisite_text("Prerequisite: Print", RequisiteLabel::Prerequisite),
            None
        );
    }

    #[test]
    fn test_label_display() {
        assert_eq!(RequisiteLabel::Prerequisite.to_string(), "prerequisite");
        assert_eq!(RequisiteLabel::Corequisite.to_string(), "corequisite");
    }
}
