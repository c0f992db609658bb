//! Lexicon-driven entity extractor
//!
//! Heuristic backend for the unstructured categories. Person names are
//! surname-anchored windows of two to four codepoints fenced by stop
//! characters; addresses are administrative-division prefixes with optional
//! street-level detail. The lexicon ships embedded in the crate and can be
//! replaced from a TOML file.
//!
//! The backend resolves lazily on first scan: Uninitialized becomes Ready or
//! Unavailable exactly once, and the outcome is cached for the extractor's
//! lifetime. Unavailable is the distinguished initialization failure the
//! recognition engine propagates.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use tracing::{info, warn};

use super::EntityExtractor;
use crate::domain::{Category, LetheError, Result, Span};
use crate::recognition::CharCursor;

/// Confidence attached to extractor spans unless overridden
pub const DEFAULT_CONFIDENCE: f32 = 0.8;

/// Maximum given-name codepoints following a surname
const MAX_GIVEN_NAME_LEN: usize = 2;

const EMBEDDED_LEXICON: &str = include_str!("../../../lexicons/zh_entities.toml");

#[derive(Debug, Deserialize)]
struct LexiconFile {
    names: NamesSection,
    addresses: AddressesSection,
}

#[derive(Debug, Deserialize)]
struct NamesSection {
    surnames: Vec<String>,
    #[serde(default)]
    compound_surnames: Vec<String>,
    #[serde(default)]
    stop_chars: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AddressesSection {
    patterns: Vec<String>,
}

/// Compiled lexicon, the backend's ready state
struct Lexicon {
    surnames: HashSet<char>,
    compound_surnames: HashSet<(char, char)>,
    stop_chars: HashSet<char>,
    address_patterns: Vec<Regex>,
}

impl Lexicon {
    fn from_toml(content: &str) -> Result<Self> {
        let file: LexiconFile = toml::from_str(content)?;

        let mut surnames = HashSet::new();
        for entry in &file.names.surnames {
            surnames.insert(single_char(entry, "surname")?);
        }

        let mut compound_surnames = HashSet::new();
        for entry in &file.names.compound_surnames {
            let mut chars = entry.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => {
                    compound_surnames.insert((a, b));
                }
                _ => {
                    return Err(LetheError::Configuration(format!(
                        "compound surname must be exactly two characters: {entry}"
                    )))
                }
            }
        }

        let mut stop_chars = HashSet::new();
        for entry in &file.names.stop_chars {
            stop_chars.insert(single_char(entry, "stop character")?);
        }

        let mut address_patterns = Vec::with_capacity(file.addresses.patterns.len());
        for pattern in &file.addresses.patterns {
            address_patterns.push(Regex::new(pattern)?);
        }

        Ok(Self {
            surnames,
            compound_surnames,
            stop_chars,
            address_patterns,
        })
    }
}

fn single_char(entry: &str, kind: &str) -> Result<char> {
    let mut chars = entry.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LetheError::Configuration(format!(
            "{kind} must be exactly one character: {entry}"
        ))),
    }
}

fn is_han(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}')
}

enum LexiconSource {
    Embedded,
    File(PathBuf),
}

/// Lexicon-driven extractor for person names and addresses
pub struct LexiconExtractor {
    source: LexiconSource,
    confidence: f32,
    state: OnceLock<std::result::Result<Lexicon, String>>,
}

impl LexiconExtractor {
    /// Extractor over the embedded lexicon
    pub fn new() -> Self {
        Self {
            source: LexiconSource::Embedded,
            confidence: DEFAULT_CONFIDENCE,
            state: OnceLock::new(),
        }
    }

    /// Extractor over a lexicon TOML file
    ///
    /// The file is not touched until the first scan; a missing or malformed
    /// file surfaces then as the unavailable state.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: LexiconSource::File(path.into()),
            confidence: DEFAULT_CONFIDENCE,
            state: OnceLock::new(),
        }
    }

    /// Sets the confidence attached to produced spans
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Resolves the backend state, initializing at most once
    fn lexicon(&self) -> Result<&Lexicon> {
        let state = self.state.get_or_init(|| {
            let loaded = match &self.source {
                LexiconSource::Embedded => {
                    info!(source = "embedded", "loading entity lexicon");
                    Lexicon::from_toml(EMBEDDED_LEXICON)
                }
                LexiconSource::File(path) => {
                    info!(source = %path.display(), "loading entity lexicon");
                    std::fs::read_to_string(path)
                        .map_err(|e| {
                            LetheError::Configuration(format!(
                                "failed to read lexicon {}: {e}",
                                path.display()
                            ))
                        })
                        .and_then(|content| Lexicon::from_toml(&content))
                }
            };
            match loaded {
                Ok(lexicon) => Ok(lexicon),
                Err(e) => {
                    warn!(error = %e, "entity lexicon failed to load");
                    Err(e.to_string())
                }
            }
        });

        state
            .as_ref()
            .map_err(|msg| LetheError::ExtractorUnavailable(msg.clone()))
    }

    fn scan_names(&self, lexicon: &Lexicon, text: &str) -> Result<Vec<Span>> {
        let chars: Vec<char> = text.chars().collect();
        let mut spans = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let surname_len = if i + 1 < chars.len()
                && lexicon.compound_surnames.contains(&(chars[i], chars[i + 1]))
            {
                2
            } else if lexicon.surnames.contains(&chars[i]) {
                1
            } else {
                0
            };
            if surname_len == 0 {
                i += 1;
                continue;
            }

            let mut given = 0;
            while given < MAX_GIVEN_NAME_LEN {
                let idx = i + surname_len + given;
                if idx >= chars.len() {
                    break;
                }
                let c = chars[idx];
                if !is_han(c) || lexicon.stop_chars.contains(&c) {
                    break;
                }
                given += 1;
            }
            if given == 0 {
                // Bare surname, no span
                i += 1;
                continue;
            }

            let end = i + surname_len + given;
            let value: String = chars[i..end].iter().collect();
            spans.push(Span::new(Category::Name, value, i, end, self.confidence)?);
            i = end;
        }

        Ok(spans)
    }

    fn scan_addresses(&self, lexicon: &Lexicon, text: &str) -> Result<Vec<Span>> {
        let mut spans = Vec::new();

        for pattern in &lexicon.address_patterns {
            let mut cursor = CharCursor::new(text);
            for found in pattern.find_iter(text) {
                let start = cursor.char_offset(found.start());
                let end = cursor.char_offset(found.end());
                spans.push(Span::new(
                    Category::Address,
                    found.as_str(),
                    start,
                    end,
                    self.confidence,
                )?);
            }
        }

        Ok(spans)
    }
}

impl Default for LexiconExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor for LexiconExtractor {
    fn scan(&self, text: &str) -> Result<Vec<Span>> {
        let lexicon = self.lexicon()?;
        let mut spans = self.scan_addresses(lexicon, text)?;
        spans.extend(self.scan_names(lexicon, text)?);
        Ok(spans)
    }
}
