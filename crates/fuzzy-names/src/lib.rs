pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;

pub use matching::{
    normalize_name, BatchResolution, MatchOutcome, MatchTier, Matcher, MatcherConfig,
    NameRecord, NicknameTable, NicknamePolicy, Person, PersonId, PersonIndex, RecordError,
    ResolutionSummary,
};
