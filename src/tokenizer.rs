//! Text tokenization shared by training and correction.
//!
//! Text is lower-cased and split into four kinds of tokens, tried in this
//! order at every position:
//!
//! 1. URLs (`http://`, `https://` or `www.` prefixed)
//! 2. Email addresses
//! 3. Words: letters of the extended Latin/French alphabet plus apostrophes,
//!    optionally hyphenated (`l'`, `aujourd'hui`, `peut-être`)
//! 4. A single ASCII punctuation character
//!
//! Anything else (whitespace, stray digits, other scripts) is skipped by
//! [`Tokenizer::tokenize`]. The request-side splitters,
//! [`Tokenizer::tokenize_runs`] and [`Tokenizer::split_whitespace`], keep such
//! text as [`TokenKind::Other`] tokens instead, so nothing typed is lost.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const URL_PATTERN: &str = r"(?:https?://|www\.)[^\s/$.?#].[^\s]*";
const EMAIL_PATTERN: &str = r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}";
const WORD_PATTERN: &str =
    r"[a-zàâäçéèêëîïôöûùüÿœæ']+(?:-[a-zàâäçéèêëîïôöûùüÿœæ']+)*";
const PUNCT_PATTERN: &str = r"[[:punct:]]";

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| {
        let pattern = format!(
            "(?P<url>{URL_PATTERN})|(?P<email>{EMAIL_PATTERN})|(?P<word>{WORD_PATTERN})|(?P<punct>{PUNCT_PATTERN})"
        );
        Regex::new(&pattern).expect("token pattern is a valid constant regex")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Punctuation,
    Url,
    Email,
    /// A whitespace-delimited run the patterns do not fully cover
    /// (numbers, `14h`, other scripts). Never produced by `tokenize`.
    Other,
}

/// A lower-cased token produced by [`Tokenizer::tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Stateless tokenizer. The compiled pattern is shared process-wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into tokens, in order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let normalized = normalize(text);

        token_pattern()
            .captures_iter(&normalized)
            .filter_map(|caps| {
                let (kind, m) = if let Some(m) = caps.name("url") {
                    (TokenKind::Url, m)
                } else if let Some(m) = caps.name("email") {
                    (TokenKind::Email, m)
                } else if let Some(m) = caps.name("word") {
                    (TokenKind::Word, m)
                } else {
                    (TokenKind::Punctuation, caps.name("punct")?)
                };

                Some(Token {
                    kind,
                    text: m.as_str().to_string(),
                })
            })
            .collect()
    }

    /// Split on whitespace, then tokenize each run.
    ///
    /// A run the patterns cover completely yields its tokens (`chat,` gives
    /// `chat` and `,`). Any other run is kept whole as one `Other` token.
    pub fn tokenize_runs(&self, text: &str) -> Vec<Token> {
        let normalized = normalize(text);
        let mut tokens = Vec::new();

        for run in normalized.split_whitespace() {
            let pieces = self.tokenize(run);
            let covered: usize = pieces.iter().map(|token| token.text.len()).sum();
            if covered == run.len() {
                tokens.extend(pieces);
            } else {
                tokens.push(Token {
                    kind: TokenKind::Other,
                    text: run.to_string(),
                });
            }
        }

        tokens
    }

    /// One token per whitespace-delimited run. The kind is the run's kind
    /// when a single pattern matches all of it, `Other` otherwise.
    pub fn split_whitespace(&self, text: &str) -> Vec<Token> {
        normalize(text)
            .split_whitespace()
            .map(|run| Token {
                kind: self.classify(run),
                text: run.to_string(),
            })
            .collect()
    }

    fn classify(&self, run: &str) -> TokenKind {
        match self.tokenize(run).as_slice() {
            [token] if token.text.len() == run.len() => token.kind,
            _ => TokenKind::Other,
        }
    }
}

/// Lower-case and fold the typographic apostrophe into `'`.
fn normalize(text: &str) -> String {
    text.to_lowercase().replace('\u{2019}', "'")
}
