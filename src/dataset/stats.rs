//! Descriptive statistics and accuracy measurement over a typo dataset.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::correction::engine::CorrectionEngine;
use crate::correction::map::CorrectionMap;

/// Coarse typo-type histogram, classified by comparing lengths of the typo
/// and its correction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoTypeCounts {
    /// Typo is shorter than the correction.
    pub missing_letters: usize,
    /// Typo is longer than the correction.
    pub extra_letters: usize,
    /// Typo and correction have the same length.
    pub wrong_letters: usize,
}

/// A token and how often it occurs across typo keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Descriptive statistics for a typo dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total_entries: usize,
    pub single_word_typos: usize,
    pub multi_word_typos: usize,
    pub avg_words_per_typo: f64,
    pub typo_types: TypoTypeCounts,
    pub common_words: Vec<WordCount>,
}

/// A dataset entry scored against the engine's correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub typo: String,
    pub expected: String,
    pub corrected: String,
    pub matches: bool,
}

/// Accuracy of the engine over a random dataset subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// Percentage of exact matches, in [0, 100].
    pub accuracy: f64,
    pub correct_count: usize,
    pub total_tested: usize,
    pub results: Vec<Sample>,
}

/// Compute descriptive statistics for a correction map.
pub fn compute_stats(map: &CorrectionMap) -> DatasetStats {
    let total_entries = map.len();

    let mut single_word = 0;
    let mut word_count_sum = 0usize;
    let mut typo_types = TypoTypeCounts::default();
    let mut token_counts: HashMap<String, usize> = HashMap::new();

    for (typo, correction) in map.entries() {
        let words = typo.split_whitespace().count();
        word_count_sum += words;
        if words == 1 {
            single_word += 1;
        }

        if typo.len() < correction.len() {
            typo_types.missing_letters += 1;
        } else if typo.len() > correction.len() {
            typo_types.extra_letters += 1;
        } else {
            typo_types.wrong_letters += 1;
        }

        for token in typo.split_whitespace() {
            *token_counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    let avg_words_per_typo = if total_entries == 0 {
        0.0
    } else {
        round2(word_count_sum as f64 / total_entries as f64)
    };

    // Top 10 tokens, ties broken alphabetically for reproducible output
    let mut common_words: Vec<WordCount> = token_counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    common_words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    common_words.truncate(10);

    DatasetStats {
        total_entries,
        single_word_typos: single_word,
        multi_word_typos: total_entries - single_word,
        avg_words_per_typo,
        typo_types,
        common_words,
    }
}

/// Draw up to `count` random dataset entries and run each through the
/// engine.
///
/// Every sample is flagged by case-insensitive equality with the expected
/// correction. The dataset is the ground truth here; the engine corrects
/// from its own map, which need not coincide with it.
pub fn draw_samples<R: Rng + ?Sized>(
    dataset: &CorrectionMap,
    engine: &CorrectionEngine,
    count: usize,
    rng: &mut R,
) -> Vec<Sample> {
    sample_entries(dataset, count, rng)
        .into_iter()
        .map(|(typo, expected)| {
            let corrected = engine.correct(&typo);
            let matches = corrected.to_lowercase() == expected.to_lowercase();
            Sample {
                typo,
                expected,
                corrected,
                matches,
            }
        })
        .collect()
}

/// Measure the engine's exact-match accuracy over a random dataset subset.
pub fn measure_accuracy<R: Rng + ?Sized>(
    dataset: &CorrectionMap,
    engine: &CorrectionEngine,
    sample_size: usize,
    rng: &mut R,
) -> AccuracyReport {
    let results = draw_samples(dataset, engine, sample_size, rng);
    let total_tested = results.len();
    let correct_count = results.iter().filter(|s| s.matches).count();

    let accuracy = if total_tested == 0 {
        0.0
    } else {
        round2(correct_count as f64 / total_tested as f64 * 100.0)
    };

    AccuracyReport {
        accuracy,
        correct_count,
        total_tested,
        results,
    }
}

/// Pick up to `count` distinct entries at random.
///
/// Entries are indexed over the sorted key view, so a seeded rng yields a
/// reproducible sample.
fn sample_entries<R: Rng + ?Sized>(
    map: &CorrectionMap,
    count: usize,
    rng: &mut R,
) -> Vec<(String, String)> {
    let keys = map.sorted_keys();
    if keys.is_empty() || count == 0 {
        return Vec::new();
    }

    let amount = count.min(keys.len());
    rand::seq::index::sample(rng, keys.len(), amount)
        .into_iter()
        .map(|i| {
            let typo = keys[i].clone();
            let expected = map.get(&typo).unwrap_or_default().to_string();
            (typo, expected)
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_stats_on_builtin_map() {
        let map = CorrectionMap::builtin();
        let stats = compute_stats(&map);

        assert_eq!(stats.total_entries, map.len());
        assert_eq!(
            stats.single_word_typos + stats.multi_word_typos,
            stats.total_entries
        );
        assert!(stats.avg_words_per_typo >= 1.0);
        assert_eq!(
            stats.typo_types.missing_letters
                + stats.typo_types.extra_letters
                + stats.typo_types.wrong_letters,
            stats.total_entries
        );
        assert!(stats.common_words.len() <= 10);
    }

    #[test]
    fn test_typo_type_classification() {
        let map = CorrectionMap::from_pairs([
            ("gas mowe", "gas mower"),   // shorter than correction
            ("toliet", "toilet"),        // same length
            ("helllo", "hello"),         // longer than correction
        ]);
        let stats = compute_stats(&map);

        assert_eq!(stats.typo_types.missing_letters, 1);
        assert_eq!(stats.typo_types.extra_letters, 1);
        assert_eq!(stats.typo_types.wrong_letters, 1);
    }

    #[test]
    fn test_common_words_counts_tokens_across_keys() {
        let map = CorrectionMap::from_pairs([
            ("lawn sprkinler", "lawn sprinkler"),
            ("lawn mowe", "lawn mower"),
        ]);
        let stats = compute_stats(&map);

        assert_eq!(stats.common_words[0].word, "lawn");
        assert_eq!(stats.common_words[0].count, 2);
    }

    #[test]
    fn test_stats_on_empty_map() {
        let stats = compute_stats(&CorrectionMap::new());
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.avg_words_per_typo, 0.0);
        assert!(stats.common_words.is_empty());
    }

    #[test]
    fn test_draw_samples_distinct_and_flagged() {
        let dataset = CorrectionMap::builtin();
        let engine = CorrectionEngine::with_map(CorrectionMap::builtin());
        let mut rng = StdRng::seed_from_u64(7);

        let samples = draw_samples(&dataset, &engine, 5, &mut rng);
        assert_eq!(samples.len(), 5);

        let mut typos: Vec<&str> = samples.iter().map(|s| s.typo.as_str()).collect();
        typos.sort();
        typos.dedup();
        assert_eq!(typos.len(), 5, "samples must be distinct");

        // Every dataset entry is also in the engine's map here, so each
        // sample resolves by exact lookup and must match
        assert!(samples.iter().all(|s| s.matches));
    }

    #[test]
    fn test_sample_count_capped_at_dataset_size() {
        let dataset = CorrectionMap::builtin();
        let engine = CorrectionEngine::with_map(CorrectionMap::builtin());
        let mut rng = StdRng::seed_from_u64(7);

        let samples = draw_samples(&dataset, &engine, 1000, &mut rng);
        assert_eq!(samples.len(), dataset.len());
    }

    #[test]
    fn test_accuracy_when_engine_knows_every_entry() {
        let dataset = CorrectionMap::builtin();
        let engine = CorrectionEngine::with_map(CorrectionMap::builtin());
        let mut rng = StdRng::seed_from_u64(42);

        let report = measure_accuracy(&dataset, &engine, 10, &mut rng);
        assert_eq!(report.total_tested, 10);
        assert_eq!(report.results.len(), 10);
        assert!((0.0..=100.0).contains(&report.accuracy));
        assert_eq!(report.correct_count, 10);
        assert_eq!(report.accuracy, 100.0);
    }

    #[test]
    fn test_accuracy_with_unknown_entries() {
        let dataset = CorrectionMap::from_pairs([
            ("cieling", "ceiling"),
            ("zqxwv", "zebra"), // nothing in the engine comes close
        ]);
        let engine = CorrectionEngine::with_map(CorrectionMap::builtin());
        let mut rng = StdRng::seed_from_u64(42);

        let report = measure_accuracy(&dataset, &engine, 2, &mut rng);
        assert_eq!(report.total_tested, 2);
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.accuracy, 50.0);
    }

    #[test]
    fn test_accuracy_on_empty_dataset() {
        let dataset = CorrectionMap::new();
        let engine = CorrectionEngine::with_map(CorrectionMap::builtin());
        let mut rng = StdRng::seed_from_u64(42);

        let report = measure_accuracy(&dataset, &engine, 20, &mut rng);
        assert_eq!(report.total_tested, 0);
        assert_eq!(report.accuracy, 0.0);
        assert!(report.results.is_empty());
    }
}
