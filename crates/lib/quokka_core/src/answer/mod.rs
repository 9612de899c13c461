//! Answer resolution — maps a free-text question to a canned response.
//!
//! Resolution is a single ordered scan: the phrase table first, then the
//! pattern rules, then a fallback that quotes the question back. The first
//! match wins; nothing is scored or ranked.

pub mod patterns;
pub mod phrases;

use std::fmt;

use serde::Serialize;
use tracing::trace;

/// A question together with its normalized (lowercased) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question<'a> {
    /// Text exactly as received.
    pub original: &'a str,
    /// Lowercased text. Not trimmed.
    pub normalized: String,
}

impl<'a> Question<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            normalized: original.to_lowercase(),
        }
    }
}

/// Which part of the resolver produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "camelCase")]
pub enum MatchKind {
    /// A phrase table entry, identified by its trigger phrase.
    Phrase(&'static str),
    /// A pattern rule, identified by its name.
    Pattern(&'static str),
    /// Nothing matched; the default template was used.
    Fallback,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Phrase(p) => write!(f, "phrase '{p}'"),
            MatchKind::Pattern(name) => write!(f, "pattern '{name}'"),
            MatchKind::Fallback => f.write_str("fallback"),
        }
    }
}

/// A rendered answer and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub answer: String,
    pub matched: MatchKind,
}

/// Resolves a question to its answer text.
///
/// Total over all input: the empty string falls through to the default
/// template, which is never empty.
pub fn resolve(question: &str) -> String {
    resolve_detailed(question).answer
}

/// Like [`resolve`], but also reports which rule matched.
pub fn resolve_detailed(question: &str) -> Resolution {
    let question = Question::new(question);

    let resolution = if let Some(entry) = phrases::lookup(&question.normalized) {
        Resolution {
            answer: entry.response.to_string(),
            matched: MatchKind::Phrase(entry.phrase),
        }
    } else if let Some(rule) = patterns::first_match(&question.normalized) {
        Resolution {
            answer: (rule.respond)(&question),
            matched: MatchKind::Pattern(rule.name),
        }
    } else {
        Resolution {
            answer: fallback(question.original),
            matched: MatchKind::Fallback,
        }
    };

    trace!(matched = %resolution.matched, "resolved question");
    resolution
}

/// Default template. Quotes the original, non-normalized question.
fn fallback(original: &str) -> String {
    format!(
        "That's an interesting question! Based on your query about \"{original}\", I can provide insights:\n\n• This topic involves multiple considerations and perspectives\n• Understanding the context is key to a complete answer\n• There are both theoretical and practical aspects to consider\n\nCould you provide more specific details about what aspect you'd like to explore? This will help me give you a more targeted and useful answer."
    )
}
