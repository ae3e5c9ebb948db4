use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::{AssetResolver, CatalogRecord};
use crate::preprocess;
use crate::script::ScriptConverter;

const EXACT_SCORE: u32 = 100;
const PHRASE_SCORE: u32 = 80;
const NAME_WEIGHT: u32 = 60;
const DESC_WEIGHT: u32 = 40;
const TAG_WEIGHT: u32 = 20;
const LENGTH_BONUS: u32 = 10;
const PREFIX_BONUS: u32 = 5;

/// Scoring breakdown kept on every result for diagnostics and the popup.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDetail {
    pub name_match: f32,
    pub desc_match: f32,
    pub tag_score: u32,
}

/// One ranked candidate produced by [`MatchEngine::search`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult {
    pub asset: PathBuf,
    pub label: String,
    pub score: u32,
    pub detail: MatchDetail,
}

/// Fuzzy bilingual matcher over an in-memory catalog.
///
/// Pure and synchronous: a call allocates only its own result list, so a
/// shared engine serves concurrent searches against the same read-only
/// catalog without coordination.
pub struct MatchEngine {
    converter: Arc<dyn ScriptConverter>,
    resolver: Arc<dyn AssetResolver>,
}

impl MatchEngine {
    pub fn new(converter: Arc<dyn ScriptConverter>, resolver: Arc<dyn AssetResolver>) -> Self {
        Self {
            converter,
            resolver,
        }
    }

    /// Score, filter, deduplicate and rank `catalog` against `query`.
    ///
    /// A blank query yields an empty list, the same shape as "nothing
    /// matched". The full filtered sequence is returned; top-N truncation is
    /// the caller's presentation policy.
    pub fn search(
        &self,
        query: &str,
        catalog: &[CatalogRecord],
        threshold: u32,
    ) -> Vec<ScoredResult> {
        let query = preprocess::clean(query);
        if query.is_empty() {
            return Vec::new();
        }

        let query_simp = self.converter.to_simplified(&query);
        let query_trad = self.converter.to_traditional(&query);
        // Non-empty for any non-blank query, so the overlap ratios below are
        // always well defined.
        let query_chars: HashSet<char> = query_simp.chars().chain(query_trad.chars()).collect();
        let query_len = query_simp.chars().count();

        let mut best: HashMap<PathBuf, ScoredResult> = HashMap::new();

        for record in catalog {
            if record.file_name.is_empty() || record.name.trim().is_empty() {
                tracing::warn!(file_name = %record.file_name, "skipping malformed catalog record");
                continue;
            }

            let (score, detail) =
                self.score_record(record, &query_simp, &query_trad, &query_chars, query_len);
            if score < threshold {
                continue;
            }

            let asset = self.resolver.resolve(&record.file_name);
            let candidate = ScoredResult {
                asset: asset.clone(),
                label: record.name.clone(),
                score,
                detail,
            };

            // Duplicate assets keep the strictly higher score
            match best.get(&asset) {
                Some(existing) if existing.score >= score => {}
                _ => {
                    best.insert(asset, candidate);
                }
            }
        }

        let mut results: Vec<ScoredResult> = best.into_values().collect();
        results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.label.cmp(&b.label)));
        results
    }

    fn score_record(
        &self,
        record: &CatalogRecord,
        query_simp: &str,
        query_trad: &str,
        query_chars: &HashSet<char>,
        query_len: usize,
    ) -> (u32, MatchDetail) {
        let name = preprocess::clean(&record.name);
        let name_simp = self.converter.to_simplified(&name);
        let name_trad = self.converter.to_traditional(&name);

        let desc = preprocess::clean(record.description.as_deref().unwrap_or(""));
        let desc_simp = self.converter.to_simplified(&desc);
        let desc_trad = self.converter.to_traditional(&desc);

        let contains_query = |simp: &str, trad: &str| {
            simp.contains(query_simp) || trad.contains(query_trad)
        };

        let (mut score, detail) = if contains_query(&name_simp, &name_trad)
            || contains_query(&desc_simp, &desc_trad)
        {
            // Whole-query containment in name or description
            (
                EXACT_SCORE,
                MatchDetail {
                    name_match: 1.0,
                    desc_match: 0.0,
                    tag_score: 0,
                },
            )
        } else if query_len > 1
            && (contains_query(&name_simp, &name_trad) || contains_query(&desc_simp, &desc_trad))
        {
            // Multi-character phrase containment
            (
                PHRASE_SCORE,
                MatchDetail {
                    name_match: 1.0,
                    desc_match: 0.0,
                    tag_score: 0,
                },
            )
        } else {
            self.partial_score(record, query_chars, &name_simp, &name_trad, &desc_simp, &desc_trad)
        };

        // Bonuses stack on top of whichever tier scored the record
        if query_len == name_simp.chars().count() {
            score += LENGTH_BONUS;
        }
        if name_simp.starts_with(query_simp) {
            score += PREFIX_BONUS;
        }

        (score, detail)
    }

    fn partial_score(
        &self,
        record: &CatalogRecord,
        query_chars: &HashSet<char>,
        name_simp: &str,
        name_trad: &str,
        desc_simp: &str,
        desc_trad: &str,
    ) -> (u32, MatchDetail) {
        let name_chars: HashSet<char> = name_simp.chars().chain(name_trad.chars()).collect();
        let desc_chars: HashSet<char> = desc_simp.chars().chain(desc_trad.chars()).collect();

        let total = query_chars.len() as u32;
        let name_overlap = query_chars.intersection(&name_chars).count() as u32;
        let desc_overlap = query_chars.intersection(&desc_chars).count() as u32;

        let name_score = NAME_WEIGHT * name_overlap / total;
        let desc_score = DESC_WEIGHT * desc_overlap / total;

        let tag_score = match &record.tags {
            Some(tags) => {
                let joined: String = tags
                    .iter()
                    .map(|tag| self.converter.to_simplified(&preprocess::clean(tag)))
                    .collect();
                let tag_chars: HashSet<char> = joined.chars().collect();
                let tag_overlap = query_chars.intersection(&tag_chars).count() as u32;
                TAG_WEIGHT * tag_overlap / total
            }
            None => 0,
        };

        (
            name_score + desc_score + tag_score,
            MatchDetail {
                name_match: name_overlap as f32 / total as f32,
                desc_match: desc_overlap as f32 / total as f32,
                tag_score,
            },
        )
    }
}
