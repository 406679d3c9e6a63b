//! Name normalization, reference indexing and tiered matching.
//!
//! Reference persons are indexed once by normalized first, last and full name. Each query
//! is then tried against the full-name table, against compound-name variations, and finally
//! through nickname groups restricted to reference persons sharing the query's last name.

pub mod engine;
pub mod index;
pub mod nicknames;
pub mod normalizer;
pub mod person;
pub mod record;
pub mod resolution;

#[cfg(test)]
mod tests;

pub use engine::{MatchOutcome, MatchTier, Matcher, MatcherConfig, NicknamePolicy};
pub use index::{IndexField, IndexStats, PersonIndex};
pub use nicknames::{NicknameGroup, NicknameTable};
pub use normalizer::{full_name_key, name_variations, normalize_name};
pub use person::{Person, PersonId};
pub use record::{people_from_records, NameRecord, RecordError};
pub use resolution::{
    BatchResolution, ResolutionSummary, ResolvedQuery, ResolvedQueryView, TierCounts,
};
