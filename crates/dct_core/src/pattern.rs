//! Pattern compilation and the ordered, name-keyed catalog.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use aho_corasick::AhoCorasick;
use regex::{Regex, RegexBuilder};

use crate::config::UserPattern;
use crate::error::PatternError;

pub use dct_patterns::{Group, PatternDef, Severity};

/// Where a pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Shipped with the built-in catalog.
    Builtin,
    /// Supplied by caller configuration.
    User,
}

/// A compiled secret detection pattern ready for scanning.
///
/// Each pattern combines a regular expression with reporting metadata
/// (severity, confidence) and keywords used for Aho-Corasick pre-filtering.
/// Immutable once constructed; the `name` is the sole pattern identity.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Unique display name (e.g. `"AWS Access Key ID"`).
    pub name: Arc<str>,
    /// Category this pattern belongs to.
    pub group: Group,
    /// Longer description of what the pattern detects.
    pub description: Box<str>,
    /// Severity assigned to findings from this pattern.
    pub severity: Severity,
    /// How likely a match is to be a real secret, in `[0, 1]`.
    pub confidence: f64,
    /// Compiled regular expression that matches the secret.
    pub regex: Regex,
    /// Case-insensitive keywords for Aho-Corasick pre-filtering. If non-empty,
    /// the pattern is only tested against content that contains at least one keyword.
    pub keywords: Box<[Box<str>]>,
    /// Whether the pattern is built-in or user-supplied.
    pub origin: Origin,
}

impl Pattern {
    fn from_def(def: &PatternDef) -> Result<Self, PatternError> {
        let regex = compile_regex(def.name, def.regex, def.case_insensitive, def.multi_line)?;

        Ok(Self {
            name: Arc::from(def.name),
            group: def.group,
            description: def.description.into(),
            severity: def.severity,
            confidence: def.confidence,
            regex,
            keywords: def.keywords.iter().map(|&k| k.into()).collect(),
            origin: Origin::Builtin,
        })
    }

    /// Returns the key synthesised from this pattern's name when a matched
    /// line has no usable `key=value` shape: uppercased, with every
    /// non-alphanumeric character replaced by an underscore.
    #[must_use]
    pub fn fallback_key(&self) -> String {
        self.name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}

/// Compiles a pattern regex with the declared flag set.
///
/// Multiline patterns also enable CRLF mode so `$` matches before `\r\n`.
pub(crate) fn compile_regex(
    name: &str,
    source: &str,
    case_insensitive: bool,
    multi_line: bool,
) -> Result<Regex, PatternError> {
    RegexBuilder::new(source)
        .case_insensitive(case_insensitive)
        .multi_line(multi_line)
        .crlf(multi_line)
        .build()
        .map_err(|source| PatternError::InvalidRegex {
            name: name.to_string(),
            source,
        })
}

/// Result of loading a catalog from built-ins plus user configuration.
#[derive(Debug)]
pub struct CatalogLoad {
    /// The merged catalog.
    pub catalog: Catalog,
    /// User patterns that failed to compile and were dropped. Never fatal.
    pub skipped: Vec<PatternError>,
}

/// Ordered, name-keyed collection of patterns with keyword pre-filtering.
///
/// The order of the pattern list is the scan precedence order: built-ins keep
/// their fixed positions (a user pattern with the same name replaces the
/// built-in in place), and user-only patterns append at the end. The catalog
/// builds an Aho-Corasick keyword automaton at construction time so the
/// scanner can cheaply skip patterns whose keywords are absent.
pub struct Catalog {
    patterns: Vec<Pattern>,
    keyword_automaton: Option<AhoCorasick>,
    keyword_to_patterns: Vec<Vec<usize>>,
    patterns_without_keywords: Vec<usize>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("patterns", &self.patterns.len())
            .field("patterns_without_keywords", &self.patterns_without_keywords.len())
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Creates a catalog containing all built-in patterns in their fixed order.
    pub fn builtin() -> Result<Self, PatternError> {
        let registry = dct_patterns::ProviderRegistry::builtin();
        let patterns = registry
            .all_patterns()
            .map(Pattern::from_def)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(patterns))
    }

    /// Loads the catalog from built-ins merged with user pattern overrides.
    ///
    /// User patterns that fail to compile are dropped and reported in
    /// [`CatalogLoad::skipped`]; a malformed entry never aborts the load.
    pub fn load(user_patterns: &[UserPattern]) -> Result<CatalogLoad, PatternError> {
        let mut skipped = Vec::new();
        let mut compiled = Vec::with_capacity(user_patterns.len());

        for raw in user_patterns {
            match raw.compile() {
                Ok(pattern) => compiled.push(pattern),
                Err(err) => skipped.push(err),
            }
        }

        let catalog = Self::builtin()?.merge_user(compiled);
        Ok(CatalogLoad { catalog, skipped })
    }

    /// Creates a catalog from a pattern list, building the keyword index.
    #[must_use]
    pub fn new(patterns: Vec<Pattern>) -> Self {
        let keyword_index = build_keyword_index(&patterns);
        let keyword_automaton = build_automaton(&keyword_index.keywords);

        Self {
            patterns,
            keyword_automaton,
            keyword_to_patterns: keyword_index.keyword_to_patterns,
            patterns_without_keywords: keyword_index.patterns_without_keywords,
        }
    }

    /// Merges user patterns into this catalog, name-keyed, last write wins.
    ///
    /// A user pattern whose name matches an existing pattern replaces it in
    /// place, keeping its precedence position; new names append at the end.
    #[must_use]
    pub fn merge_user(self, user_patterns: Vec<Pattern>) -> Self {
        let mut patterns = self.patterns;
        let mut index: HashMap<Arc<str>, usize> = patterns
            .iter()
            .enumerate()
            .map(|(i, p)| (Arc::clone(&p.name), i))
            .collect();

        for pattern in user_patterns {
            if let Some(&i) = index.get(pattern.name.as_ref()) {
                patterns[i] = pattern;
            } else {
                index.insert(Arc::clone(&pattern.name), patterns.len());
                patterns.push(pattern);
            }
        }

        Self::new(patterns)
    }

    /// Consumes the catalog and returns the underlying pattern list.
    #[must_use]
    pub fn into_patterns(self) -> Vec<Pattern> {
        self.patterns
    }

    /// Returns all patterns in precedence order.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Looks up a pattern by its unique name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name.as_ref() == name)
    }

    /// Returns the total number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if the catalog contains no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the Aho-Corasick automaton built from pattern keywords, if any
    /// keywords were registered.
    #[must_use]
    pub(crate) fn keyword_automaton(&self) -> Option<&AhoCorasick> {
        self.keyword_automaton.as_ref()
    }

    /// Maps each keyword index to the pattern indices that declared it.
    #[must_use]
    pub(crate) fn keyword_to_patterns(&self) -> &[Vec<usize>] {
        &self.keyword_to_patterns
    }

    /// Returns indices of patterns that have no keywords and must be tested
    /// against all content unconditionally.
    #[must_use]
    pub(crate) fn patterns_without_keywords(&self) -> &[usize] {
        &self.patterns_without_keywords
    }
}

struct KeywordIndex {
    keywords: Vec<String>,
    keyword_to_patterns: Vec<Vec<usize>>,
    patterns_without_keywords: Vec<usize>,
}

fn build_keyword_index(patterns: &[Pattern]) -> KeywordIndex {
    let mut keywords = Vec::new();
    let mut keyword_to_patterns: Vec<Vec<usize>> = Vec::new();
    let mut patterns_without_keywords = Vec::new();
    let mut keyword_positions: HashMap<String, usize> = HashMap::new();

    for (pattern_idx, pattern) in patterns.iter().enumerate() {
        if pattern.keywords.is_empty() {
            patterns_without_keywords.push(pattern_idx);
            continue;
        }

        for keyword in &pattern.keywords {
            let keyword_str = keyword.to_string();

            if let Some(&existing_idx) = keyword_positions.get(&keyword_str) {
                keyword_to_patterns[existing_idx].push(pattern_idx);
            } else {
                let new_idx = keywords.len();
                keyword_positions.insert(keyword_str.clone(), new_idx);
                keywords.push(keyword_str);
                keyword_to_patterns.push(vec![pattern_idx]);
            }
        }
    }

    KeywordIndex {
        keywords,
        keyword_to_patterns,
        patterns_without_keywords,
    }
}

fn build_automaton(keywords: &[String]) -> Option<AhoCorasick> {
    if keywords.is_empty() {
        return None;
    }

    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(aho_corasick::MatchKind::LeftmostLongest)
        .build(keywords)
        .ok()
}
