//! Rule-based person-name recognizer
//!
//! Finds runs of capitalised words such as `Jane Doe`, `J. R. Tolkien` or
//! `Smith J.`. A run ends at trailing punctuation (`Smith,`), a footnote
//! marker (`Smith¹`), a lowercase word, or a stop word (`University`,
//! `Dept.`). Runs shorter than two tokens are dropped.
//!
//! Author paragraphs arrive joined with spaces, so a title-cased title can
//! run straight into the first author's name. Runs of three or more tokens
//! therefore also yield their trailing name. Runs that follow a title
//! connector (`to`, `for`) yield only that trailing name, and runs directly
//! followed by a connector are title text and yield nothing.

use super::{EntitySpan, NameRecognizer};
use crate::config::RecognizerConfig;
use crate::domain::{Result, VeilError};
use regex::Regex;
use std::collections::HashSet;

/// Words that never form part of a person name in front matter
const DEFAULT_STOP_WORDS: &[&str] = &[
    // headings and labels
    "abstract",
    "introduction",
    "keywords",
    "author",
    "authors",
    "affiliation",
    "affiliations",
    "corresponding",
    "correspondence",
    "email",
    "e-mail",
    "orcid",
    "received",
    "accepted",
    "published",
    // institutions
    "department",
    "dept",
    "university",
    "institute",
    "institution",
    "college",
    "school",
    "center",
    "centre",
    "faculty",
    "laboratory",
    "lab",
    "hospital",
    "clinic",
    "foundation",
    "society",
    "academy",
    "division",
    "research",
    "science",
    "sciences",
    "technology",
    "engineering",
    "graduate",
    // honorifics
    "dr",
    "prof",
    "professor",
    "mr",
    "mrs",
    "ms",
    // function words that may be capitalised in titles
    "the",
    "and",
    "of",
    "for",
    "in",
    "on",
    "at",
    "a",
    "an",
];

/// Lowercase words that join title-cased words in a title but not in an
/// author list
const TITLE_CONNECTORS: &[&str] = &[
    "to", "for", "of", "in", "on", "at", "with", "from", "via", "into", "towards", "toward",
    "through", "using", "under", "over", "between", "among", "beyond", "within", "without",
    "versus", "vs", "the", "a", "an", "is", "are", "as", "or",
];

/// How one whitespace-delimited token contributes to a name run
#[derive(Debug, PartialEq, Eq)]
enum TokenKind {
    /// Part of a name; `closes` ends the run after this token
    Name {
        start: usize,
        end: usize,
        initial: bool,
        opens: bool,
        closes: bool,
    },
    /// Cannot be part of a name
    Break,
}

/// Rule-based recognizer that tags capitalised word runs as persons
pub struct HeuristicNameRecognizer {
    token_pattern: Regex,
    stop_words: HashSet<String>,
    max_name_tokens: usize,
}

impl HeuristicNameRecognizer {
    /// Create a recognizer with the default stop-word list
    pub fn new() -> Result<Self> {
        Self::from_config(&RecognizerConfig::default())
    }

    /// Create a recognizer from configuration
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::RecognizerUnavailable`] if `max_name_tokens` is
    /// below 2.
    pub fn from_config(config: &RecognizerConfig) -> Result<Self> {
        if config.max_name_tokens < 2 {
            return Err(VeilError::RecognizerUnavailable(format!(
                "max_name_tokens must be at least 2, got {}",
                config.max_name_tokens
            )));
        }

        let token_pattern = Regex::new(r"\S+")
            .map_err(|e| VeilError::RecognizerUnavailable(format!("token pattern: {e}")))?;

        let stop_words = DEFAULT_STOP_WORDS
            .iter()
            .map(|w| w.to_string())
            .chain(config.extra_stop_words.iter().map(|w| w.to_lowercase()))
            .collect();

        Ok(Self {
            token_pattern,
            stop_words,
            max_name_tokens: config.max_name_tokens,
        })
    }

    /// Classify a raw token found at byte offset `offset`
    fn classify(&self, raw: &str, offset: usize) -> TokenKind {
        let lead = raw
            .char_indices()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, _)| i);
        let Some(lead) = lead else {
            return TokenKind::Break;
        };
        let prefix = &raw[..lead];

        let tail = raw
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(raw.len());

        let core = &raw[lead..tail];
        let suffix = &raw[tail..];

        if !core
            .chars()
            .all(|c| c.is_alphabetic() || c == '-' || c == '\'' || c == '’')
        {
            return TokenKind::Break;
        }

        if !core.chars().next().is_some_and(|c| c.is_uppercase()) {
            return TokenKind::Break;
        }

        let single_letter = core.chars().count() == 1;
        let initial = single_letter && suffix.starts_with('.');

        // "A." is an initial, "A" on its own is an article
        let lower = core.to_lowercase();
        if !initial
            && (self.stop_words.contains(&lower) || TITLE_CONNECTORS.contains(&lower.as_str()))
        {
            return TokenKind::Break;
        }

        if !single_letter && !core.chars().any(|c| c.is_lowercase()) {
            // acronyms such as ORCID or USA
            return TokenKind::Break;
        }

        // spans end on the last letter so `\b` still matches after "J."
        let rest = if initial { &suffix[1..] } else { suffix };

        // a prefix such as "(" or "²" means the token starts a new run
        let opens = !prefix.is_empty();
        TokenKind::Name {
            start: offset + lead,
            end: offset + tail,
            initial,
            opens,
            closes: !rest.is_empty(),
        }
    }

    /// Emit the names found in the pending run
    ///
    /// `before_connector` is set when the token ending the run is a title
    /// connector.
    fn flush(
        &self,
        text: &str,
        run: &mut NameRun,
        before_connector: bool,
        spans: &mut Vec<EntitySpan>,
    ) {
        let tokens = std::mem::take(&mut run.tokens);
        let after_connector = std::mem::take(&mut run.after_connector);

        if tokens.len() < 2 || before_connector || !has_word(&tokens) {
            return;
        }

        let mut push = |tokens: &[RunToken]| {
            let start = tokens[0].0;
            let end = tokens[tokens.len() - 1].1;
            if !spans.iter().any(|s| s.start == start && s.end == end) {
                spans.push(EntitySpan::person(&text[start..end], start, end));
            }
        };

        if tokens.len() <= self.max_name_tokens && !after_connector {
            push(&tokens[..]);
        }

        if tokens.len() > 2 {
            let mut first = tokens.len() - 2;
            while first > 0 && tokens[first - 1].2 {
                first -= 1;
            }
            let trailing = &tokens[first..];
            if has_word(trailing) {
                push(trailing);
            }
        }
    }
}

/// Byte range of a name token and whether it is an initial
type RunToken = (usize, usize, bool);

/// Capitalised tokens collected since the last break
#[derive(Debug, Default)]
struct NameRun {
    tokens: Vec<RunToken>,
    after_connector: bool,
}

fn has_word(tokens: &[RunToken]) -> bool {
    tokens.iter().any(|(_, _, initial)| !initial)
}

fn is_title_connector(raw: &str) -> bool {
    let word = raw.trim_matches(|c: char| !c.is_alphabetic()).to_lowercase();
    TITLE_CONNECTORS.contains(&word.as_str())
}

impl NameRecognizer for HeuristicNameRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>> {
        let mut spans = Vec::new();
        let mut run = NameRun::default();
        let mut prev_connector = false;

        for token in self.token_pattern.find_iter(text) {
            match self.classify(token.as_str(), token.start()) {
                TokenKind::Name {
                    start,
                    end,
                    initial,
                    opens,
                    closes,
                } => {
                    if opens {
                        self.flush(text, &mut run, false, &mut spans);
                    }
                    if run.tokens.is_empty() {
                        run.after_connector = prev_connector;
                    }
                    run.tokens.push((start, end, initial));
                    if closes {
                        self.flush(text, &mut run, false, &mut spans);
                    }
                    prev_connector = false;
                }
                TokenKind::Break => {
                    let connector = is_title_connector(token.as_str());
                    self.flush(text, &mut run, connector, &mut spans);
                    prev_connector = connector;
                }
            }
        }
        self.flush(text, &mut run, false, &mut spans);

        Ok(spans)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
