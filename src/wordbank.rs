use crate::info_log;
use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// Used when no word list is available or it has no words.
pub const DEFAULT_WORD: &str = "programming";

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// `<data dir>/hangman/words.txt`, if the platform has a data directory.
pub fn get_default_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("hangman").join("words.txt"))
}

/// Pick the word list for a session.
///
/// An explicit path that cannot be read yields an empty list so the caller
/// falls back to [`DEFAULT_WORD`]. Without a path, the user's data-dir list
/// is preferred over the embedded one.
pub fn resolve_wordbank(path: Option<&Path>) -> Vec<String> {
    if let Some(path) = path {
        return match load_wordbank_from_file(path) {
            Ok(words) => {
                info_log!("Loaded {} words from {}", words.len(), path.display());
                words
            }
            Err(e) => {
                log::warn!("Cannot open word list {}: {e}", path.display());
                Vec::new()
            }
        };
    }

    if let Some(default_path) = get_default_wordbank_path()
        && default_path.is_file()
    {
        match load_wordbank_from_file(&default_path) {
            Ok(words) => {
                info_log!(
                    "Loaded {} words from {}",
                    words.len(),
                    default_path.display()
                );
                return words;
            }
            Err(e) => {
                log::warn!("Cannot read {}: {e}", default_path.display());
            }
        }
    }

    load_wordbank_from_str(EMBEDDED_WORDBANK)
}

/// Uniformly random word from `words`, or [`DEFAULT_WORD`] when empty.
pub fn choose_random_word<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> String {
    if words.is_empty() {
        log::warn!("Word list has no usable words, using '{DEFAULT_WORD}'");
        return DEFAULT_WORD.to_string();
    }
    let index = rng.random_range(0..words.len());
    words[index].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use std::io::Write;

    #[test]
    fn test_load_trims_and_skips_blank_lines() {
        let words = load_wordbank_from_str("  chat \n\n\tchien\r\n   \nOiseau");
        assert_eq!(words, vec!["chat", "chien", "Oiseau"]);
    }

    #[test]
    fn test_embedded_wordbank_not_empty() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        assert!(words.len() > 50);
        assert!(words.iter().all(|w| !w.is_empty() && w.trim() == w));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("hangman_wordbank_load_test.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "apple").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "  lemon  ").unwrap();
        }
        let words = load_wordbank_from_file(&path).unwrap();
        assert_eq!(words, vec!["apple", "lemon"]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_errors() {
        let path = std::env::temp_dir().join("hangman_no_such_wordbank.txt");
        let _ = fs::remove_file(&path);
        assert!(load_wordbank_from_file(&path).is_err());
    }

    #[test]
    fn test_resolve_missing_path_gives_empty_list() {
        let path = std::env::temp_dir().join("hangman_no_such_wordbank_resolve.txt");
        let _ = fs::remove_file(&path);
        assert!(resolve_wordbank(Some(&path)).is_empty());
    }

    #[test]
    fn test_choose_from_empty_list_falls_back() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose_random_word(&[], &mut rng), DEFAULT_WORD);
    }

    #[test]
    fn test_choose_returns_member() {
        let words = load_wordbank_from_str("alpha\nbravo\ncharlie");
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let word = choose_random_word(&words, &mut rng);
            assert!(words.contains(&word));
        }
    }

    #[test]
    fn test_choose_is_deterministic_for_seed() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(
            choose_random_word(&words, &mut rng1),
            choose_random_word(&words, &mut rng2)
        );
    }

    #[test]
    fn test_default_path_under_hangman_dir() {
        if let Some(path) = get_default_wordbank_path() {
            assert!(path.ends_with("hangman/words.txt"));
        }
    }
}
