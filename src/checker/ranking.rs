//! Overlap scoring and ranking of catalog records.
//!
//! The random source is passed in by the caller: jitter and the
//! tie-shuffle are the only non-deterministic steps, and a seeded RNG
//! makes both reproducible.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Catalog;
use crate::config::{JITTER_SPREAD, JITTER_THRESHOLD, MIN_MATCH_COUNT, TOP_K};
use crate::models::{DiseaseRecord, MatchResult};

/// Number of valid symptoms the record shares.
pub fn match_count(valid: &BTreeSet<String>, record: &DiseaseRecord) -> usize {
    valid.iter().filter(|s| record.has_symptom(s)).count()
}

/// `floor(matched / total * 100)`, zero when `total` is zero.
pub fn base_percent(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = matched.min(total) * 100 / total;
    percent as u8
}

/// Perturb scores above the jitter threshold within `±JITTER_SPREAD`,
/// clamped to `[JITTER_THRESHOLD, 100]`. Lower scores pass through.
pub fn jitter<R: Rng + ?Sized>(percent: u8, rng: &mut R) -> u8 {
    if percent <= JITTER_THRESHOLD {
        return percent;
    }
    let low = percent.saturating_sub(JITTER_SPREAD).max(JITTER_THRESHOLD);
    let high = percent.saturating_add(JITTER_SPREAD).min(100);
    rng.gen_range(low..=high)
}

/// Score every record against the valid symptoms and return the top
/// candidates, best first.
///
/// Records sharing fewer than [`MIN_MATCH_COUNT`] symptoms are dropped.
/// Candidates are shuffled before a stable descending sort, so equal
/// scores come back in varying order. An empty result means nothing
/// matched.
pub fn rank<R: Rng + ?Sized>(
    valid: &BTreeSet<String>,
    catalog: &Catalog,
    rng: &mut R,
) -> Vec<MatchResult> {
    let total = valid.len();
    let mut candidates: Vec<MatchResult> = catalog
        .records()
        .iter()
        .filter_map(|record| {
            let matched = match_count(valid, record);
            if matched < MIN_MATCH_COUNT {
                return None;
            }
            let percent = jitter(base_percent(matched, total), rng);
            Some(MatchResult {
                disease: record.name.clone(),
                match_percent: percent,
            })
        })
        .collect();

    tracing::debug!(
        candidates = candidates.len(),
        records = catalog.len(),
        "Scored catalog records"
    );

    candidates.shuffle(rng);
    candidates.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
    candidates.truncate(TOP_K);
    candidates
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::catalog::test_support::flu_and_cold;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn base_percent_floors() {
        assert_eq!(base_percent(4, 4), 100);
        assert_eq!(base_percent(2, 4), 50);
        assert_eq!(base_percent(2, 3), 66);
        assert_eq!(base_percent(5, 6), 83);
        assert_eq!(base_percent(1, 6), 16);
        assert_eq!(base_percent(0, 0), 0);
    }

    #[test]
    fn jitter_leaves_low_scores_alone() {
        let mut rng = StdRng::seed_from_u64(7);
        for p in [0, 25, 49, 50] {
            for _ in 0..20 {
                assert_eq!(jitter(p, &mut rng), p);
            }
        }
    }

    #[test]
    fn jitter_stays_within_clamped_window() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let v = jitter(100, &mut rng);
            assert!((90..=100).contains(&v), "100 jittered to {v}");
            let v = jitter(55, &mut rng);
            assert!((50..=65).contains(&v), "55 jittered to {v}");
            let v = jitter(75, &mut rng);
            assert!((65..=85).contains(&v), "75 jittered to {v}");
        }
    }

    #[test]
    fn flu_ranks_above_cold() {
        let catalog = flu_and_cold();
        let valid = set(&["fever", "cough", "chills", "fatigue"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let ranked = rank(&valid, &catalog, &mut rng);
            assert_eq!(ranked.len(), 2);
            assert_eq!(ranked[0].disease, "flu");
            assert!((90..=100).contains(&ranked[0].match_percent));
            assert_eq!(ranked[1].disease, "cold");
            assert_eq!(ranked[1].match_percent, 50);
        }
    }

    #[test]
    fn records_below_two_matches_are_excluded() {
        let catalog = flu_and_cold();
        // Only "sneeze" overlaps with cold; flu shares nothing.
        let valid = set(&["sneeze", "rash", "nausea", "dizziness"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(rank(&valid, &catalog, &mut rng).is_empty());
    }

    #[test]
    fn output_is_capped_and_sorted() {
        let records = (0..8)
            .map(|i| {
                let extra = format!("extra {i}");
                let symptoms: Vec<&str> = if i % 2 == 0 {
                    vec!["a", "b", "c", extra.as_str()]
                } else {
                    vec!["a", "b", extra.as_str()]
                };
                DiseaseRecord::new(&format!("d{i}"), symptoms).unwrap()
            })
            .collect();
        let catalog = Catalog::new(records);
        let valid = set(&["a", "b", "c", "d"]);

        let mut rng = StdRng::seed_from_u64(3);
        let ranked = rank(&valid, &catalog, &mut rng);
        assert_eq!(ranked.len(), TOP_K);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].match_percent >= w[1].match_percent));
        assert!(ranked.iter().all(|m| m.match_percent <= 100));
    }

    #[test]
    fn unjittered_ranking_is_repeatable_across_seeds() {
        // 2 of 4 matched everywhere: 50%, never jittered.
        let catalog = Catalog::new(vec![
            DiseaseRecord::new("a", ["x", "y"]).unwrap(),
            DiseaseRecord::new("b", ["x", "y", "q"]).unwrap(),
        ]);
        let valid = set(&["x", "y", "z", "w"]);
        let mut scores: Vec<Vec<u8>> = Vec::new();
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ranked = rank(&valid, &catalog, &mut rng);
            ranked.sort_by(|l, r| l.disease.cmp(&r.disease));
            scores.push(ranked.iter().map(|m| m.match_percent).collect());
        }
        assert!(scores.iter().all(|s| s == &vec![50, 50]));
    }

    #[test]
    fn same_seed_gives_same_ranking() {
        let catalog = flu_and_cold();
        let valid = set(&["fever", "cough", "chills", "fatigue"]);
        let a = rank(&valid, &catalog, &mut StdRng::seed_from_u64(42));
        let b = rank(&valid, &catalog, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn ties_are_shuffled() {
        // Six equally scored diseases: across seeds, more than one leads.
        let records = (0..6)
            .map(|i| DiseaseRecord::new(&format!("d{i}"), ["x", "y"]).unwrap())
            .collect();
        let catalog = Catalog::new(records);
        let valid = set(&["x", "y", "z", "w"]);

        let leaders: BTreeSet<String> = (0..50)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                rank(&valid, &catalog, &mut rng)[0].disease.clone()
            })
            .collect();
        assert!(leaders.len() > 1);
    }
}
