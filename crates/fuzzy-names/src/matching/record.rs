use super::person::{Person, PersonId};
use serde::{Deserialize, Serialize};

/// Raw record as supplied by a reference or query source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(alias = "first_name")]
    pub first: String,
    #[serde(alias = "last_name")]
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("record is missing a {field} name")]
    MissingField { field: &'static str },
    #[error("record id cannot be blank")]
    BlankId,
    #[error("record {position}: {source}")]
    AtPosition {
        position: usize,
        #[source]
        source: Box<RecordError>,
    },
}

impl NameRecord {
    pub fn new(id: Option<&str>, first: &str, last: &str) -> Self {
        Self {
            id: id.map(str::to_string),
            first: first.to_string(),
            last: last.to_string(),
        }
    }

    /// Rejects records the matcher cannot reason about, then builds the [`Person`].
    pub fn into_person(self) -> Result<Person, RecordError> {
        if self.first.trim().is_empty() {
            return Err(RecordError::MissingField { field: "first" });
        }
        if self.last.trim().is_empty() {
            return Err(RecordError::MissingField { field: "last" });
        }

        let id = match self.id {
            Some(id) if id.trim().is_empty() => return Err(RecordError::BlankId),
            Some(id) => Some(PersonId(id)),
            None => None,
        };

        Ok(Person::new(id, self.first, self.last))
    }
}

impl TryFrom<NameRecord> for Person {
    type Error = RecordError;

    fn try_from(record: NameRecord) -> Result<Self, Self::Error> {
        record.into_person()
    }
}

/// Converts a whole source, stopping at the first invalid record.
pub fn people_from_records<I>(records: I) -> Result<Vec<Person>, RecordError>
where
    I: IntoIterator<Item = NameRecord>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            record
                .into_person()
                .map_err(|source| RecordError::AtPosition {
                    position,
                    source: Box::new(source),
                })
        })
        .collect()
}
