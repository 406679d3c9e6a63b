use super::index::{IndexField, PersonIndex};
use super::nicknames::NicknameTable;
use super::normalizer::name_variations;
use super::person::Person;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// How the nickname tier treats several reference persons sharing the query's last name
/// and a nickname-equivalent first name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NicknamePolicy {
    /// Take the first candidate (nickname group order, then reference order).
    #[default]
    FirstCandidate,
    /// Only match when exactly one candidate remains.
    UniqueCandidate,
}

impl NicknamePolicy {
    pub fn label(&self) -> &'static str {
        match self {
            NicknamePolicy::FirstCandidate => "first",
            NicknamePolicy::UniqueCandidate => "unique",
        }
    }
}

impl FromStr for NicknamePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first" | "first_candidate" => Ok(Self::FirstCandidate),
            "unique" | "unique_candidate" => Ok(Self::UniqueCandidate),
            other => Err(format!(
                "unknown nickname policy '{other}' (expected 'first' or 'unique')"
            )),
        }
    }
}

impl fmt::Display for NicknamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatcherConfig {
    pub nickname_policy: NicknamePolicy,
}

/// Stage of the fallback strategy that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    ExactFullName,
    CompoundVariation,
    Nickname,
}

impl MatchTier {
    pub fn ordered() -> [MatchTier; 3] {
        [
            MatchTier::ExactFullName,
            MatchTier::CompoundVariation,
            MatchTier::Nickname,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::ExactFullName => "exact full name",
            MatchTier::CompoundVariation => "compound name variation",
            MatchTier::Nickname => "nickname",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MatchOutcome<'a> {
    pub person: &'a Person,
    pub position: usize,
    pub tier: MatchTier,
}

/// Resolves query persons against an immutable reference index.
#[derive(Debug, Clone)]
pub struct Matcher {
    index: PersonIndex,
    nicknames: Arc<NicknameTable>,
    config: MatcherConfig,
}

impl Matcher {
    pub fn new<I>(reference: I) -> Self
    where
        I: IntoIterator<Item = Person>,
    {
        Self::with_config(reference, MatcherConfig::default())
    }

    pub fn with_config<I>(reference: I, config: MatcherConfig) -> Self
    where
        I: IntoIterator<Item = Person>,
    {
        Self {
            index: PersonIndex::build(reference),
            nicknames: NicknameTable::standard(),
            config,
        }
    }

    /// Swaps the compiled-in nickname table for a caller supplied one.
    pub fn with_nicknames(mut self, nicknames: NicknameTable) -> Self {
        self.nicknames = Arc::new(nicknames);
        self
    }

    pub fn index(&self) -> &PersonIndex {
        &self.index
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn match_person(&self, query: &Person) -> Option<&Person> {
        self.resolve(query).map(|outcome| outcome.person)
    }

    /// Runs the exact, compound and nickname tiers in order and stops at the first hit.
    pub fn resolve(&self, query: &Person) -> Option<MatchOutcome<'_>> {
        let outcome = self
            .exact_full_name(query)
            .map(|position| (position, MatchTier::ExactFullName))
            .or_else(|| {
                self.compound_variation(query)
                    .map(|position| (position, MatchTier::CompoundVariation))
            })
            .or_else(|| {
                self.nickname(query)
                    .map(|position| (position, MatchTier::Nickname))
            })
            .map(|(position, tier)| MatchOutcome {
                person: &self.index.people()[position],
                position,
                tier,
            });

        match &outcome {
            Some(found) => debug!(
                query = %query.display_name(),
                matched = %found.person.display_name(),
                tier = found.tier.label(),
                "query resolved"
            ),
            None => debug!(query = %query.display_name(), "no match"),
        }

        outcome
    }

    fn exact_full_name(&self, query: &Person) -> Option<usize> {
        self.index
            .positions(IndexField::Full, query.normalized_full())
            .first()
            .copied()
    }

    fn compound_variation(&self, query: &Person) -> Option<usize> {
        if !query.has_compound_name() {
            return None;
        }

        let last_variations = name_variations(query.normalized_last());
        for first in name_variations(query.normalized_first()) {
            for last in &last_variations {
                let key = format!("{first}{last}");
                if let Some(&position) = self.index.positions(IndexField::Full, &key).first() {
                    return Some(position);
                }
            }
        }
        None
    }

    fn nickname(&self, query: &Person) -> Option<usize> {
        let last_candidates = self
            .index
            .positions(IndexField::Last, query.normalized_last());
        if last_candidates.is_empty() {
            return None;
        }

        let group = self
            .nicknames
            .first_group_containing(query.normalized_first())?;

        let mut candidates: Vec<usize> = Vec::new();
        for name in group.names() {
            for &position in self.index.positions(IndexField::First, name) {
                if last_candidates.contains(&position) && !candidates.contains(&position) {
                    candidates.push(position);
                }
            }
        }

        match self.config.nickname_policy {
            NicknamePolicy::FirstCandidate => candidates.first().copied(),
            NicknamePolicy::UniqueCandidate => match candidates.as_slice() {
                [only] => Some(*only),
                [] => None,
                _ => {
                    debug!(
                        query = %query.display_name(),
                        candidates = candidates.len(),
                        "nickname match is not unique"
                    );
                    None
                }
            },
        }
    }
}
