//! Weak-word list management
//!
//! Handles loading and querying the list of dictionary words that flag a
//! password as weak. A small built-in list is always available; a larger one
//! can be loaded from a file at startup.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Always-available fallback, used until a file-backed list is loaded.
const DEFAULT_WEAK_WORDS: [&str; 5] = ["password", "123456", "qwerty", "admin", "letmein"];

static WEAK_WORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `PASSGUARD_WORDLIST_PATH`
/// 2. Default path `./assets/weak-words.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var("PASSGUARD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/weak-words.txt"))
}

/// Loads the weak-word list from an external file.
///
/// Optional: until this succeeds, queries fall back to the built-in list, so
/// classification works without any setup.
///
/// # Environment Variable
///
/// Set `PASSGUARD_WORDLIST_PATH` to specify a custom wordlist file location.
/// If not set, defaults to `./assets/weak-words.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist() -> Result<usize, WordlistError> {
    let path = get_wordlist_path();
    init_wordlist_from_path(&path)
}

/// Loads the weak-word list from a specific file path.
///
/// Use this when you need to pass the path directly instead of relying on
/// environment variables. Idempotent: a second call returns the size of the
/// already-loaded list.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, WordlistError> {
    {
        let guard = WEAK_WORDS.read().unwrap();
        if let Some(words) = guard.as_ref() {
            return Ok(words.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: FileNotFound {}", path.display());
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: Empty file {}", path.display());
        return Err(WordlistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = WEAK_WORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist initialized: {} words from {:?}", count, path);

    Ok(count)
}

/// Checks if the password contains any weak word as a substring.
///
/// Matching is case-insensitive: the password is lowercased and every entry
/// is searched inside it, so "MyPassword1" matches "password". Uses the
/// built-in list when no file-backed list has been loaded.
pub fn contains_weak_word(password: &str) -> bool {
    let lowered = password.to_lowercase();
    let guard = WEAK_WORDS.read().unwrap();
    match guard.as_ref() {
        Some(words) => words.iter().any(|word| lowered.contains(word.as_str())),
        None => DEFAULT_WEAK_WORDS.iter().any(|word| lowered.contains(word)),
    }
}

/// Resets the wordlist for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    let mut guard = WEAK_WORDS.write().unwrap();
    *guard = None;
}
