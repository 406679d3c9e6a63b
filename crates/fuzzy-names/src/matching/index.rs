use super::person::Person;
use std::collections::HashMap;
use tracing::debug;

/// Which normalized form a lookup runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexField {
    First,
    Last,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStats {
    pub people: usize,
    pub first_keys: usize,
    pub last_keys: usize,
    pub full_keys: usize,
}

/// Reference persons plus three insertion-ordered lookup tables.
///
/// Persons are stored once; buckets hold their positions, so the first position in a bucket
/// is always the earliest inserted person sharing that key. Compound names are also
/// indexed under every single first word joined with every single last word, which lets a
/// query that only carries one of those words resolve through the full-name table.
#[derive(Debug, Clone, Default)]
pub struct PersonIndex {
    people: Vec<Person>,
    by_first: HashMap<String, Vec<usize>>,
    by_last: HashMap<String, Vec<usize>>,
    by_full: HashMap<String, Vec<usize>>,
}

impl PersonIndex {
    pub fn build<I>(people: I) -> Self
    where
        I: IntoIterator<Item = Person>,
    {
        let mut index = Self::default();
        for person in people {
            index.insert(person);
        }

        let stats = index.stats();
        debug!(
            people = stats.people,
            first_keys = stats.first_keys,
            last_keys = stats.last_keys,
            full_keys = stats.full_keys,
            "built person index"
        );
        index
    }

    fn insert(&mut self, person: Person) {
        let position = self.people.len();

        push_unique(&mut self.by_first, person.normalized_first(), position);
        push_unique(&mut self.by_last, person.normalized_last(), position);
        push_unique(&mut self.by_full, person.normalized_full(), position);

        if person.has_compound_name() {
            for first in person.normalized_first().split(' ') {
                for last in person.normalized_last().split(' ') {
                    push_unique(&mut self.by_full, &format!("{first}{last}"), position);
                }
            }
        }

        self.people.push(person);
    }

    /// Arena positions stored under `key`, in insertion order.
    pub fn positions(&self, field: IndexField, key: &str) -> &[usize] {
        self.table(field)
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn lookup<'a>(&'a self, field: IndexField, key: &str) -> impl Iterator<Item = &'a Person> {
        self.positions(field, key)
            .iter()
            .map(move |&position| &self.people[position])
    }

    /// The earliest inserted person stored under `key`.
    pub fn first(&self, field: IndexField, key: &str) -> Option<&Person> {
        self.positions(field, key)
            .first()
            .map(|&position| &self.people[position])
    }

    pub fn contains_key(&self, field: IndexField, key: &str) -> bool {
        self.table(field).contains_key(key)
    }

    pub fn get(&self, position: usize) -> Option<&Person> {
        self.people.get(position)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            people: self.people.len(),
            first_keys: self.by_first.len(),
            last_keys: self.by_last.len(),
            full_keys: self.by_full.len(),
        }
    }

    fn table(&self, field: IndexField) -> &HashMap<String, Vec<usize>> {
        match field {
            IndexField::First => &self.by_first,
            IndexField::Last => &self.by_last,
            IndexField::Full => &self.by_full,
        }
    }
}

// A person lands in a bucket at most once, even when several word pairs collide.
fn push_unique(table: &mut HashMap<String, Vec<usize>>, key: &str, position: usize) {
    let bucket = table.entry(key.to_string()).or_default();
    if bucket.last() != Some(&position) {
        bucket.push(position);
    }
}
