//! Shapes of the fields a contact is built from.
//!
//! Fixed shapes (email, phone, serial number, name) are compiled once as
//! statics. The parts that vary between source documents (member-id shape,
//! stoplist, look-ahead windows) live in [`PatternConfig`] and are compiled into
//! an immutable [`PatternLibrary`] that is shared by reference.

pub mod classifier;

pub use classifier::{classify_line, LineField};

use regex::Regex;
use serde::{Deserialize, Serialize};
use shared_types::ExtractionError;
use std::collections::HashSet;
use std::sync::LazyLock;

static EMAIL_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("Invalid email regex")
});

static STRICT_PHONE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,11}$").expect("Invalid strict phone regex"));

// Optional country code, optional area code, then 3 + 4 digits. Group 1 is the
// phone; the surrounding non-digits keep it from being cut out of a longer run.
static LOOSE_PHONE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[^0-9])((?:\+?[0-9]{1,3}[-.\s]?)?(?:\(?[0-9]{3}\)?[-.\s]?)?[0-9]{3}[-.\s]?[0-9]{4})(?:[^0-9]|$)",
    )
    .expect("Invalid loose phone regex")
});

static SERIAL_NUMBER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,4}[.)]?$").expect("Invalid serial number regex"));

static NAME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s.'-]+$").expect("Invalid name regex"));

static SHOUTED_NAME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z\s.'-]{5,}$").expect("Invalid shouted name regex"));

static LABELED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:full name|name|contact)\s*:\s*(.+)$").expect("Invalid labeled name regex")
});

// First Last, First M. Last, First Middle Last
static TITLE_CASE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]+(?:\s+[A-Z]\.|\s+[A-Z][a-z]+)?\s+[A-Z][a-z]+$")
        .expect("Invalid title case name regex")
});

static DEFAULT_LIBRARY: LazyLock<PatternLibrary> = LazyLock::new(|| {
    PatternLibrary::new(PatternConfig::default()).expect("Default pattern config must compile")
});

const DEFAULT_STOPLIST: &[&str] = &[
    "FELLOW", "MEMBER", "NAME", "CATEGORY", "EMAIL", "TEL1", "Lagos", "Edo", "Rivers", "Abuja",
    "Kano", "Ogun", "Oyo", "Delta", "Anambra", "Kaduna",
];

/// Which phone convention a strategy accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneShape {
    /// The whole line is 10 or 11 digits.
    Strict,
    /// A phone-like run anywhere in the line, at least 7 digits.
    Loose,
}

/// Tunable parts of the pattern library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Lines that look like names but never are (regions, column headers).
    /// Compared case-insensitively.
    pub stoplist: Vec<String>,
    /// Whole-line shape of a member identifier.
    pub member_id_pattern: String,
    /// Lines inspected after a member-id anchor.
    pub anchor_window: usize,
    /// Lines inspected after a shouted name.
    pub sequential_window: usize,
    /// Chunks shorter than this are ignored by the chunk-split strategy.
    pub min_chunk_lines: usize,
    /// Append the labeled-field strategy to the chain.
    pub labeled_fields: bool,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            stoplist: DEFAULT_STOPLIST.iter().map(|s| s.to_string()).collect(),
            member_id_pattern: r"[A-Z]{2}[0-9]{5}".to_string(),
            anchor_window: 2,
            sequential_window: 5,
            min_chunk_lines: 3,
            labeled_fields: false,
        }
    }
}

/// Compiled, read-only pattern set.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    member_id: Regex,
    stoplist: HashSet<String>,
    config: PatternConfig,
}

impl PatternLibrary {
    pub fn new(config: PatternConfig) -> Result<Self, ExtractionError> {
        if config.anchor_window == 0 || config.sequential_window == 0 {
            return Err(ExtractionError::ConfigError(
                "look-ahead windows must be at least 1 line".to_string(),
            ));
        }

        let pattern = config.member_id_pattern.trim();
        if pattern.is_empty() {
            return Err(ExtractionError::ConfigError(
                "member_id_pattern must not be empty".to_string(),
            ));
        }

        let member_id = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            ExtractionError::ConfigError(format!("Invalid member_id_pattern: {}", e))
        })?;

        let stoplist = config
            .stoplist
            .iter()
            .map(|word| word.trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        Ok(Self {
            member_id,
            stoplist,
            config,
        })
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// First email-shaped token in the line.
    pub fn find_email<'a>(&self, line: &'a str) -> Option<&'a str> {
        EMAIL_TOKEN.find(line).map(|m| m.as_str())
    }

    pub fn find_emails<'a>(&self, line: &'a str) -> Vec<&'a str> {
        EMAIL_TOKEN.find_iter(line).map(|m| m.as_str()).collect()
    }

    pub fn is_email_token(&self, line: &str) -> bool {
        EMAIL_TOKEN.is_match(line)
    }

    /// Every loose phone token in the line, in order.
    ///
    /// Digit runs longer than a phone are skipped rather than truncated.
    pub fn find_phones<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut phones = Vec::new();
        let mut start = 0;

        // Resume at the end of the phone itself so a single separator can be
        // shared by two neighbouring numbers.
        while let Some(phone) = LOOSE_PHONE_TOKEN
            .captures_at(line, start)
            .and_then(|caps| caps.get(1))
        {
            phones.push(phone.as_str().trim());
            start = phone.end();
        }

        phones
    }

    /// The phone carried by `line` under the given convention.
    pub fn find_phone<'a>(&self, line: &'a str, shape: PhoneShape) -> Option<&'a str> {
        match shape {
            PhoneShape::Strict => STRICT_PHONE_LINE.is_match(line).then_some(line),
            PhoneShape::Loose => self.find_phones(line).into_iter().next(),
        }
    }

    pub fn is_phone_token(&self, line: &str, shape: PhoneShape) -> bool {
        self.find_phone(line, shape).is_some()
    }

    pub fn is_member_id(&self, line: &str) -> bool {
        self.member_id.is_match(line)
    }

    pub fn is_serial_number(&self, line: &str) -> bool {
        SERIAL_NUMBER_LINE.is_match(line)
    }

    pub fn is_stopword(&self, line: &str) -> bool {
        self.stoplist.contains(&line.trim().to_uppercase())
    }

    /// Letters, spaces, periods, apostrophes and hyphens only, longer than 3
    /// characters, and not a stopword.
    pub fn is_name_candidate(&self, line: &str) -> bool {
        line.chars().count() > 3 && NAME_SHAPE.is_match(line) && !self.is_stopword(line)
    }

    /// All-caps line of at least two words, e.g. `JANE DOE`.
    pub fn is_shouted_name(&self, line: &str) -> bool {
        SHOUTED_NAME_SHAPE.is_match(line)
            && line.split_whitespace().count() >= 2
            && !self.is_stopword(line)
            && !self.is_member_id(line)
    }

    /// Name given by a `Name:` style label or written as `First Last`.
    pub fn labeled_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        if let Some(caps) = LABELED_NAME.captures(line) {
            return caps.get(1).map(|m| m.as_str().trim()).filter(|s| !s.is_empty());
        }

        TITLE_CASE_NAME.is_match(line).then_some(line)
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        DEFAULT_LIBRARY.clone()
    }
}

/// Number of ASCII digits in `value`.
pub fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}
