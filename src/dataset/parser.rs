//! Typo dataset parsing.
//!
//! Datasets are flat files of quoted `'typo': 'correction',` pairs, one per
//! line. Parsing is a regex extraction: anything that does not match the
//! pair pattern is silently skipped, and an unreadable file degrades to an
//! empty mapping rather than an error, so the corrector keeps functioning
//! (it just passes all tokens through unchanged).

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::correction::map::CorrectionMap;

/// Pattern matching one quoted `'typo': 'correction'` pair.
const PAIR_PATTERN: &str = r"'([^']+)':\s*'([^']+)'";

/// Extract all (typo, correction) pairs from dataset text.
///
/// Pairs appear in input order; duplicate keys are resolved later by
/// [`CorrectionMap::from_pairs`] (last-write-wins).
pub fn parse_dataset(content: &str) -> Vec<(String, String)> {
    let pattern = Regex::new(PAIR_PATTERN).expect("pair pattern is valid");

    pattern
        .captures_iter(content)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Load a dataset file into a [`CorrectionMap`].
///
/// A missing or unreadable file is logged and yields an empty map; this
/// never aborts the process.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> CorrectionMap {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(content) => {
            let pairs = parse_dataset(&content);
            tracing::debug!("loaded {} entries from {}", pairs.len(), path.display());
            CorrectionMap::from_pairs(pairs)
        }
        Err(e) => {
            tracing::warn!("failed to read dataset {}: {e}", path.display());
            CorrectionMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_pairs() {
        let content = "'cieling': 'ceiling',\n'gas mowe': 'gas mower',\n";
        let pairs = parse_dataset(content);

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("cieling".to_string(), "ceiling".to_string()));
        assert_eq!(pairs[1], ("gas mowe".to_string(), "gas mower".to_string()));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let content = "garbage line\n'tolet': 'toilet',\nnot: quoted\n'unterminated: 'pair\n";
        let pairs = parse_dataset(content);

        // Only the well-formed pair survives; the unterminated line yields
        // no clean key/value capture pair we care about beyond regex hits.
        assert!(pairs.iter().any(|(k, v)| k == "tolet" && v == "toilet"));
    }

    #[test]
    fn test_parse_surrounding_syntax_ignored() {
        // Datasets sometimes carry dict braces around the pairs
        let content = "{\n  'vynal': 'vinyl',\n  'electic': 'electric',\n}\n";
        let pairs = parse_dataset(content);
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let content = "'tolet': 'tablet',\n'tolet': 'toilet',\n";
        let map = CorrectionMap::from_pairs(parse_dataset(content));
        assert_eq!(map.get("tolet"), Some("toilet"));
    }

    #[test]
    fn test_load_dataset_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "'cieling': 'ceiling',").unwrap();
        writeln!(file, "'artric air portable': 'arctic air portable',").unwrap();
        file.flush().unwrap();

        let map = load_dataset(file.path());
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("cieling"), Some("ceiling"));
        assert_eq!(map.get("artric air portable"), Some("arctic air portable"));
    }

    #[test]
    fn test_missing_file_yields_empty_map() {
        let map = load_dataset("/nonexistent/typo.txt");
        assert!(map.is_empty());
    }
}
