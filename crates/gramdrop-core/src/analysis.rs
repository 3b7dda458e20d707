//! Caption analysis - topic tags and "comment keyword" extraction.
//!
//! Both operations are table-driven: extend [`TAG_RULES`] or
//! [`KEYWORD_PATTERNS`] rather than the functions that read them.

use once_cell::sync::Lazy;
use regex::Regex;

/// A topic label and the substrings that imply it.
#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub tag: &'static str,
    pub cues: &'static [&'static str],
}

pub const TAG_RULES: &[TagRule] = &[
    TagRule {
        tag: "tutorial",
        cues: &["tutorial", "how to", "step by step", "guide"],
    },
    TagRule {
        tag: "tips",
        cues: &["tips", "tricks", "hacks", "mistakes", "avoid"],
    },
    TagRule {
        tag: "resource",
        cues: &["resource", "download", "template", "freebie", "bundle", "swipe"],
    },
    TagRule {
        tag: "career",
        cues: &["career", "job", "resume", "interview", "portfolio"],
    },
    TagRule {
        tag: "study",
        cues: &["study", "notes", "cheat sheet", "exam", "learn"],
    },
    TagRule {
        tag: "ai",
        cues: &["ai", "gpt", "chatgpt", "prompt"],
    },
    TagRule {
        tag: "design",
        cues: &["design", "ui", "ux", "figma"],
    },
];

/// Call-to-action phrasings, tried in order. Group 1 captures the keyword.
pub const KEYWORD_PATTERNS: &[&str] = &[
    r#"comment\s+["“']?([a-z0-9]+)["”']?"#,
    r#"drop\s+(?:the\s+)?word\s+["“']?([a-z0-9]+)["”']?"#,
    r#"type\s+["“']?([a-z0-9]+)["”']?\s+to\s+(?:get|receive|grab)"#,
    r#"reply\s+["“']?([a-z0-9]+)["”']?\s+below"#,
];

static KEYWORD_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    KEYWORD_PATTERNS
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::error!(pattern, error = %e, "Skipping invalid keyword pattern");
                None
            }
        })
        .collect()
});

/// Derive topic tags from a caption, in rule-table order.
///
/// A tag is emitted when any of its cues occurs as a substring of the
/// lower-cased caption. Each tag appears at most once.
pub fn classify_tags(caption: &str) -> Vec<&'static str> {
    let text = caption.to_lowercase();

    TAG_RULES
        .iter()
        .filter(|rule| rule.cues.iter().any(|cue| text.contains(cue)))
        .map(|rule| rule.tag)
        .collect()
}

/// Extract the keyword a caption asks readers to comment, lower-cased.
pub fn extract_keyword(caption: &str) -> Option<String> {
    let text = caption.to_lowercase();

    KEYWORD_REGEXES.iter().find_map(|re| {
        re.captures(&text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}
