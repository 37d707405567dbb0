use crate::error::IndexError;
use models::course::{CourseCode, CourseId, CourseRecord};
use std::collections::{HashMap, hash_map::Entry};

/// Lookup from course code to identifier, built once from a complete course set
///
/// Both spellings of every code ("CSE 214" and "CSE214") are keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseCodeIndex {
    ids: HashMap<String, CourseId>,
}

impl CourseCodeIndex {
    /// Builds the index from every scraped record
    ///
    /// # Arguments
    /// * `records` - The full first-pass course set
    ///
    /// # Returns
    /// The index, or [`IndexError::ConflictingIdentifier`] if one code was
    /// assigned two different identifiers
    pub fn build(records: &[CourseRecord]) -> Result<Self, IndexError> {
        Self::from_pairs(
            records
                .iter()
                .map(|record| (record.code.clone(), record.id.clone())),
        )
    }

    /// Builds the index from explicit (code, identifier) pairs
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (CourseCode, CourseId)>,
    ) -> Result<Self, IndexError> {
        let mut index = Self::default();
        for (code, id) in pairs {
            index.insert(&code, &id)?;
        }

        Ok(index)
    }

    fn insert(&mut self, code: &CourseCode, id: &CourseId) -> Result<(), IndexError> {
        for key in [code.spaced(), code.compact()] {
            match self.ids.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(id.clone());
                }
                Entry::Occupied(slot) if slot.get() == id => {}
                Entry::Occupied(slot) => {
                    return Err(IndexError::ConflictingIdentifier {
                        code: code.clone(),
                        existing: slot.get().clone(),
                        incoming: id.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Looks up the identifier of a course code under either spelling
    pub fn resolve(&self, code: &CourseCode) -> Option<&CourseId> {
        self.ids
            .get(&code.spaced())
            .or_else(|| self.ids.get(&code.compact()))
    }

    /// Looks up a course code given as text, e.g. `"CSE 214"` or `"cse214"`
    pub fn get(&self, code: &str) -> Option<&CourseId> {
        code.parse().ok().and_then(|code| self.resolve(&code))
    }

    /// Number of distinct course codes
    pub fn len(&self) -> usize {
        self.ids.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
