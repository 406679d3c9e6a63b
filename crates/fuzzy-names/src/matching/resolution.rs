use super::engine::{MatchOutcome, MatchTier, Matcher};
use super::person::{Person, PersonId};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

/// One query person alongside whatever the matcher found for it.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedQuery<'a> {
    pub query: &'a Person,
    pub outcome: Option<MatchOutcome<'a>>,
}

impl<'a> ResolvedQuery<'a> {
    pub fn matched(&self) -> Option<&'a Person> {
        self.outcome.map(|outcome| outcome.person)
    }

    pub fn tier(&self) -> Option<MatchTier> {
        self.outcome.map(|outcome| outcome.tier)
    }

    pub fn to_view(&self) -> ResolvedQueryView {
        ResolvedQueryView {
            query_id: self.query.id().cloned(),
            query_first: self.query.first_name().to_string(),
            query_last: self.query.last_name().to_string(),
            matched_id: self.matched().and_then(|person| person.id().cloned()),
            matched_first: self.matched().map(|person| person.first_name().to_string()),
            matched_last: self.matched().map(|person| person.last_name().to_string()),
            tier: self.tier(),
        }
    }
}

/// Match results for a batch of queries, kept outside the person entities.
#[derive(Debug, Clone, Default)]
pub struct BatchResolution<'a> {
    resolved: Vec<ResolvedQuery<'a>>,
}

impl<'a> BatchResolution<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedQuery<'a>> {
        self.resolved.iter()
    }

    pub fn matched(&self) -> impl Iterator<Item = &ResolvedQuery<'a>> {
        self.resolved.iter().filter(|entry| entry.outcome.is_some())
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &'a Person> + '_ {
        self.resolved
            .iter()
            .filter(|entry| entry.outcome.is_none())
            .map(|entry| entry.query)
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Query id to matched reference id, for pairs where both sides carry an id.
    pub fn id_mapping(&self) -> BTreeMap<PersonId, PersonId> {
        self.matched()
            .filter_map(|entry| {
                let query_id = entry.query.id()?;
                let matched_id = entry.matched()?.id()?;
                Some((query_id.clone(), matched_id.clone()))
            })
            .collect()
    }

    pub fn summary(&self) -> ResolutionSummary {
        let mut summary = ResolutionSummary {
            total: self.resolved.len(),
            ..ResolutionSummary::default()
        };

        for tier in self.resolved.iter().filter_map(ResolvedQuery::tier) {
            summary.matched += 1;
            match tier {
                MatchTier::ExactFullName => summary.by_tier.exact_full_name += 1,
                MatchTier::CompoundVariation => summary.by_tier.compound_variation += 1,
                MatchTier::Nickname => summary.by_tier.nickname += 1,
            }
        }

        summary
    }

    pub fn views(&self) -> Vec<ResolvedQueryView> {
        self.resolved.iter().map(ResolvedQuery::to_view).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TierCounts {
    pub exact_full_name: usize,
    pub compound_variation: usize,
    pub nickname: usize,
}

impl TierCounts {
    pub fn get(&self, tier: MatchTier) -> usize {
        match tier {
            MatchTier::ExactFullName => self.exact_full_name,
            MatchTier::CompoundVariation => self.compound_variation,
            MatchTier::Nickname => self.nickname,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResolutionSummary {
    pub matched: usize,
    pub total: usize,
    pub by_tier: TierCounts,
}

impl ResolutionSummary {
    pub fn unmatched(&self) -> usize {
        self.total - self.matched
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedQueryView {
    pub query_id: Option<PersonId>,
    pub query_first: String,
    pub query_last: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_id: Option<PersonId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<MatchTier>,
}

impl Matcher {
    /// Resolves every query in order.
    pub fn resolve_all<'a, I>(&'a self, queries: I) -> BatchResolution<'a>
    where
        I: IntoIterator<Item = &'a Person>,
    {
        let resolved: Vec<ResolvedQuery<'a>> = queries
            .into_iter()
            .map(|query| ResolvedQuery {
                query,
                outcome: self.resolve(query),
            })
            .collect();

        let batch = BatchResolution { resolved };
        let summary = batch.summary();
        info!(
            matched = summary.matched,
            total = summary.total,
            exact = summary.by_tier.exact_full_name,
            compound = summary.by_tier.compound_variation,
            nickname = summary.by_tier.nickname,
            "resolved query batch"
        );
        batch
    }
}
