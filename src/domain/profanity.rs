//! Whole-word profanity masking for chirp bodies.

use std::collections::HashSet;

/// Replacement written in place of every banned token.
pub const MASK: &str = "****";

/// Words masked when no explicit list is configured.
pub const DEFAULT_BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replaces banned tokens in `text` with [`MASK`].
///
/// # Tokenization Rules
///
/// 1. **Delimiter**: a single literal space (`' '`), not general whitespace
/// 2. **Empty tokens**: consecutive spaces yield empty tokens, kept in place
/// 3. **Matching**: case-insensitive, whole token only (`"kerfuffles"` is kept)
/// 4. **Rejoin**: tokens are joined back with single spaces
///
/// `banned` is expected to hold lower-case words.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use chirpy::domain::profanity::sanitize;
///
/// let banned: HashSet<String> = ["kerfuffle".to_string()].into_iter().collect();
/// assert_eq!(sanitize("a  Kerfuffle b", &banned), "a  **** b");
/// ```
pub fn sanitize(text: &str, banned: &HashSet<String>) -> String {
    text.split(' ')
        .map(|token| {
            if banned.contains(&token.to_lowercase()) {
                MASK
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Profanity filter holding an injectable banned-word set.
///
/// Words are lower-cased on construction, so a configuration listing
/// `"Fornax"` masks `"fornax"`, `"FORNAX"`, and so on.
#[derive(Debug, Clone)]
pub struct ProfanityFilter {
    banned: HashSet<String>,
}

impl ProfanityFilter {
    /// Builds a filter from any list of words. Empty entries are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let banned = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { banned }
    }

    /// Masks banned tokens in `text`. See [`sanitize`].
    pub fn sanitize(&self, text: &str) -> String {
        sanitize(text, &self.banned)
    }

    /// Returns the lower-cased banned words.
    pub fn banned_words(&self) -> &HashSet<String> {
        &self.banned
    }
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BANNED_WORDS)
    }
}
