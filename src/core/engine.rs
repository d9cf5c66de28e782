use crate::core::{
    error::EngineError,
    filters::passes_hard_constraints,
    relevance::{highlights, query_relevance},
    scoring::{score_candidate, CandidateScore},
    tiers::classify,
};
use crate::models::{Candidate, FilterSpec, ReferencePoint, ScoredCandidate};

/// Default cap on authoritative search results
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Result of the authoritative search
#[derive(Debug)]
pub struct SearchResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
    /// Candidates rejected by a hard constraint
    pub excluded: usize,
}

/// Scoring orchestrator shared by the shading and search paths
///
/// Both entry points validate the filter spec first and resolve distance,
/// aggregate score and tiers through the same functions, so a candidate is
/// measured identically on either path.
///
/// # Search pipeline
/// 1. Validate the filter spec
/// 2. Resolve nearest venue and aggregate score
/// 3. Hard-constraint filtering
/// 4. Keyword relevance and ranking
/// 5. Tier classification over the returned set
#[derive(Debug, Clone)]
pub struct Recommender {
    max_results: usize,
}

impl Recommender {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    pub fn with_default_limit() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Score and tier every displayed candidate for map shading
    ///
    /// Nothing is excluded; output order matches `candidates`.
    pub fn shade(
        &self,
        candidates: &[Candidate],
        references: &[ReferencePoint],
        spec: &FilterSpec,
    ) -> Result<Vec<ScoredCandidate>, EngineError> {
        spec.validate()?;

        let scores: Vec<CandidateScore> = candidates
            .iter()
            .map(|candidate| score_candidate(candidate, references, spec))
            .collect();

        let aggregates: Vec<f64> = scores.iter().map(|score| score.aggregate_score).collect();
        let tiers = classify(&aggregates);

        tracing::debug!(
            "Shaded {} candidates against {} venues",
            candidates.len(),
            references.len()
        );

        Ok(candidates
            .iter()
            .zip(scores)
            .zip(tiers)
            .map(|((candidate, score), tier)| ScoredCandidate {
                candidate: candidate.clone(),
                proximity: score.proximity,
                aggregate_score: score.aggregate_score,
                tier,
                relevance: None,
                highlights: Vec::new(),
            })
            .collect())
    }

    /// Authoritative search: exclude on hard bounds, then rank
    ///
    /// Results are ordered by keyword relevance, then aggregate score, with
    /// ties keeping catalog order. `limit` is capped at the configured
    /// maximum.
    pub fn search(
        &self,
        candidates: &[Candidate],
        references: &[ReferencePoint],
        spec: &FilterSpec,
        business_type: &str,
        limit: Option<usize>,
    ) -> Result<SearchResult, EngineError> {
        spec.validate()?;

        let total_candidates = candidates.len();

        let mut survivors: Vec<(&Candidate, CandidateScore, f64)> = candidates
            .iter()
            .map(|candidate| (candidate, score_candidate(candidate, references, spec)))
            .filter(|(candidate, score)| passes_hard_constraints(candidate, &score.proximity, spec))
            .map(|(candidate, score)| {
                let relevance = query_relevance(&spec.query, business_type, candidate);
                (candidate, score, relevance)
            })
            .collect();

        let excluded = total_candidates - survivors.len();

        survivors.sort_by(|a, b| {
            b.2.total_cmp(&a.2)
                .then_with(|| b.1.aggregate_score.total_cmp(&a.1.aggregate_score))
        });

        let limit = limit.map_or(self.max_results, |requested| requested.min(self.max_results));
        survivors.truncate(limit);

        let aggregates: Vec<f64> = survivors.iter().map(|(_, score, _)| score.aggregate_score).collect();
        let tiers = classify(&aggregates);

        let matches: Vec<ScoredCandidate> = survivors
            .into_iter()
            .zip(tiers)
            .map(|((candidate, score, relevance), tier)| ScoredCandidate {
                candidate: candidate.clone(),
                proximity: score.proximity,
                aggregate_score: score.aggregate_score,
                tier,
                relevance: Some(relevance),
                highlights: highlights(&spec.query, candidate),
            })
            .collect();

        tracing::debug!(
            "Search kept {} of {} candidates ({} excluded)",
            matches.len(),
            total_candidates,
            excluded
        );

        Ok(SearchResult {
            matches,
            total_candidates,
            excluded,
        })
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_limit()
    }
}
