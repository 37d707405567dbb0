use crate::requisite::RequirementNode;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::EnumString;
use thiserror::Error;
use uuid::Uuid;

lazy_static! {
    static ref COURSE_CODE: Regex = Regex::new(r"^([A-Z]{2,4})(\d{2,3}[A-Z]?)$").unwrap();
}

/// Error returned when a string is not a course code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCodeError {
    #[error("empty course code")]
    EmptyInput,
    #[error("not a course code: {0:?}")]
    Malformed(String),
}

/// A department prefix plus a course number (e.g. "CSE 214", "BIO 201L")
///
/// Stored in normalized form, so `"cse214"` and `"CSE 214"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseCode {
    dept: String,
    number: String,
}

impl CourseCode {
    /// Department prefix, e.g. `"CSE"`
    pub fn dept(&self) -> &str {
        &self.dept
    }

    /// Number with any letter suffix, e.g. `"201L"`
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Spelling without a space, e.g. `"CSE214"`
    pub fn compact(&self) -> String {
        format!("{}{}", self.dept, self.number)
    }

    /// Spelling with a space, e.g. `"CSE 214"`
    pub fn spaced(&self) -> String {
        format!("{} {}", self.dept, self.number)
    }
}

impl FromStr for CourseCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        if normalized.is_empty() {
            return Err(ParseCodeError::EmptyInput);
        }

        let caps = COURSE_CODE
            .captures(&normalized)
            .ok_or_else(|| ParseCodeError::Malformed(s.to_string()))?;

        Ok(Self {
            dept: caps[1].to_string(),
            number: caps[2].to_string(),
        })
    }
}

impl Display for CourseCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.dept, self.number)
    }
}

impl Serialize for CourseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.spaced())
    }
}

impl<'de> Deserialize<'de> for CourseCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Stable identifier of a course within a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Namespace for name-based course identifiers
    const NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a4e_93d5_4b8a_9c07_5e21_d8f3_a610);

    /// Prefix marking an identifier synthesized for a code missing from the index
    pub const PLACEHOLDER_PREFIX: &'static str = "pending-";

    /// The identifier a catalogued course is assigned, derived only from its code
    pub fn for_code(code: &CourseCode) -> Self {
        Self(Uuid::new_v5(&Self::NAMESPACE, code.compact().as_bytes()).to_string())
    }

    /// Stand-in identifier for a referenced course that is not in the index
    pub fn placeholder(code: &CourseCode) -> Self {
        Self(format!(
            "{}{}",
            Self::PLACEHOLDER_PREFIX,
            code.compact().to_lowercase()
        ))
    }

    pub fn is_placeholder(&self) -> bool {
        self.0.starts_with(Self::PLACEHOLDER_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CourseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for CourseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// A department that offers at least one scraped course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub code: String,
    pub name: String,
}

/// A Stony Brook Curriculum (SBC) category a course can satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum SbcCategory {
    Exp,
    Hum,
    Art,
    Sbs,
    Stem,
    Div,
    Usa,
    Lang,
    Wrt,
}

/// A curriculum requirement a course counts toward, serialized as `{"category":"STEM"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fulfillment {
    pub category: SbcCategory,
}

/// One scraped course with its compiled requisites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Derived from `code` with [`CourseId::for_code`]
    pub id: CourseId,
    pub dept_code: String,
    pub dept_name: Option<String>,
    pub number: String,
    /// Display form of the code (e.g., "CSE 214")
    pub code: CourseCode,
    pub title: String,
    pub description: String,
    pub credits: Option<u32>,
    pub active: bool,
    pub url: Option<String>,
    /// Codes this course is also offered as
    #[serde(default)]
    pub cross_listed: Vec<CourseCode>,
    /// SBC categories listed in the course text
    #[serde(default)]
    pub fulfills: Vec<Fulfillment>,
    #[serde(default)]
    pub advisor_notes: Option<String>,
    /// Normalized prerequisite text, kept for diagnostics
    pub raw_prerequisites: Option<String>,
    /// Normalized corequisite text, kept for diagnostics
    pub raw_corequisites: Option<String>,
    #[serde(default)]
    pub prerequisites: RequirementNode,
    #[serde(default)]
    pub corequisites: RequirementNode,
}

impl CourseRecord {
    /// Creates a record with no requisites compiled yet
    pub fn new(code: CourseCode, title: String) -> Self {
        Self {
            id: CourseId::for_code(&code),
            dept_code: code.dept().to_string(),
            dept_name: None,
            number: code.number().to_string(),
            code,
            title,
            description: String::new(),
            credits: None,
            active: true,
            url: None,
            cross_listed: Vec::new(),
            fulfills: Vec::new(),
            advisor_notes: None,
            raw_prerequisites: None,
            raw_corequisites: None,
            prerequisites: RequirementNode::True,
            corequisites: RequirementNode::True,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_code_from_str() {
        let code: CourseCode = "CSE 214".parse().unwrap();
        assert_eq!(code.dept(), "CSE");
        assert_eq!(code.number(), "214");
        assert_eq!(code.compact(), "CSE214");
        assert_eq!(code.spaced(), "CSE 214");

        let lab: CourseCode = "bio201l".parse().unwrap();
        assert_eq!(lab.compact(), "BIO201L");
        assert_eq!(lab.number(), "201L");

        // Spelling does not affect equality
        assert_eq!(
            "CSE214".parse::<CourseCode>().unwrap(),
            " cse  214 ".parse::<CourseCode>().unwrap()
        );
    }

    #[test]
    fn test_course_code_rejects_malformed() {
        assert_eq!("".parse::<CourseCode>(), Err(ParseCodeError::EmptyInput));
        assert!(matches!(
            "C 101".parse::<CourseCode>(),
            Err(ParseCodeError::Malformed(_))
        ));
        assert!("CSE 1014".parse::<CourseCode>().is_err());
        assert!("COMPSCI 101".parse::<CourseCode>().is_err());
    }

    #[test]
    fn test_course_id_is_stable() {
        let a = CourseId::for_code(&"CSE 214".parse().unwrap());
        let b = CourseId::for_code(&"cse214".parse().unwrap());
        let c = CourseId::for_code(&"CSE 215".parse().unwrap());

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!a.is_placeholder());
    }

    #[test]
    fn test_course_id_placeholder() {
        let code: CourseCode = "ABC 999".parse().unwrap();
        let placeholder = CourseId::placeholder(&code);

        assert_eq!(placeholder.as_str(), "pending-abc999");
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder, CourseId::placeholder(&code));
    }

    #[test]
    fn test_course_record_serialization() {
        let record = CourseRecord::new("CSE 214".parse().unwrap(), "Data Structures".into());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["code"], "CSE 214");
        assert_eq!(json["deptCode"], "CSE");
        assert_eq!(json["number"], "214");
        assert_eq!(json["prerequisites"]["kind"], "TRUE");
        assert_eq!(json["fulfills"], serde_json::json!([]));
        assert!(json["advisorNotes"].is_null());

        let back: CourseRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_fulfillment_shape() {
        let stem = Fulfillment {
            category: "STEM".parse().unwrap(),
        };

        assert_eq!(stem.category, SbcCategory::Stem);
        assert_eq!(
            serde_json::to_string(&stem).unwrap(),
            r#"{"category":"STEM"}"#
        );
        assert!("TECH".parse::<SbcCategory>().is_err());
        assert!("stem".parse::<SbcCategory>().is_err());
    }
}
