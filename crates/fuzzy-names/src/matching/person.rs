use super::normalizer::{full_name_key, is_compound, normalize_name};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier carried over from the source record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A person record with its normalized name forms computed once at construction.
///
/// Persons have no `PartialEq`; equal names never imply the same person. Compare ids with
/// [`Person::same_identity`].
#[derive(Debug, Clone)]
pub struct Person {
    id: Option<PersonId>,
    first_name: String,
    last_name: String,
    normalized_first: String,
    normalized_last: String,
    normalized_full: String,
}

impl Person {
    pub fn new(
        id: Option<PersonId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let normalized_first = normalize_name(&first_name);
        let normalized_last = normalize_name(&last_name);
        let normalized_full = full_name_key(&normalized_first, &normalized_last);

        Self {
            id,
            first_name,
            last_name,
            normalized_first,
            normalized_last,
            normalized_full,
        }
    }

    pub fn with_id(
        id: impl Into<PersonId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self::new(Some(id.into()), first_name, last_name)
    }

    pub fn id(&self) -> Option<&PersonId> {
        self.id.as_ref()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn normalized_first(&self) -> &str {
        &self.normalized_first
    }

    pub fn normalized_last(&self) -> &str {
        &self.normalized_last
    }

    pub fn normalized_full(&self) -> &str {
        &self.normalized_full
    }

    /// True when either normalized name holds more than one word.
    pub fn has_compound_name(&self) -> bool {
        is_compound(&self.normalized_first) || is_compound(&self.normalized_last)
    }

    /// Both persons carry an id and the ids are equal.
    pub fn same_identity(&self, other: &Person) -> bool {
        matches!((&self.id, &other.id), (Some(left), Some(right)) if left == right)
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saurabh() -> Person {
        Person::with_id("1", "Saurabh", "Shah")
    }

    fn andrew() -> Person {
        Person::with_id("2", "Andrew", "Zamler-Carhart")
    }

    fn yao() -> Person {
        Person::with_id("3", "Yao (丁尧)", "Ding")
    }

    fn samantha() -> Person {
        Person::with_id("4", "Samantha", "Grone, Esq.")
    }

    #[test]
    fn normalized_first() {
        assert_eq!(saurabh().normalized_first(), "saurabh");
        assert_eq!(andrew().normalized_first(), "andrew");
        assert_eq!(yao().normalized_first(), "yao 丁尧");
        assert_eq!(samantha().normalized_first(), "samantha");
    }

    #[test]
    fn normalized_last() {
        assert_eq!(saurabh().normalized_last(), "shah");
        assert_eq!(andrew().normalized_last(), "zamler carhart");
        assert_eq!(yao().normalized_last(), "ding");
        assert_eq!(samantha().normalized_last(), "grone");
    }

    #[test]
    fn normalized_full() {
        assert_eq!(saurabh().normalized_full(), "saurabhshah");
        assert_eq!(andrew().normalized_full(), "andrewzamlercarhart");
        assert_eq!(yao().normalized_full(), "yao丁尧ding");
        assert_eq!(samantha().normalized_full(), "samanthagrone");
    }

    #[test]
    fn raw_names_are_kept_verbatim() {
        let person = samantha();
        assert_eq!(person.first_name(), "Samantha");
        assert_eq!(person.last_name(), "Grone, Esq.");
        assert_eq!(person.display_name(), "Samantha Grone, Esq.");
    }

    #[test]
    fn compound_detection() {
        assert!(andrew().has_compound_name());
        assert!(yao().has_compound_name());
        assert!(!saurabh().has_compound_name());
    }

    #[test]
    fn identity_is_by_id_not_by_name() {
        let twin = Person::with_id("99", "Saurabh", "Shah");
        assert!(!saurabh().same_identity(&twin));
        assert!(saurabh().same_identity(&Person::with_id("1", "S.", "Shah")));

        let anonymous = Person::new(None, "Saurabh", "Shah");
        assert!(!anonymous.same_identity(&anonymous.clone()));
    }

    #[test]
    fn identical_raw_names_produce_identical_derived_fields() {
        let left = Person::new(None, "Cheuk Kwan", "Chan");
        let right = Person::with_id("x", "Cheuk Kwan", "Chan");
        assert_eq!(left.normalized_first(), right.normalized_first());
        assert_eq!(left.normalized_last(), right.normalized_last());
        assert_eq!(left.normalized_full(), right.normalized_full());
    }
}
