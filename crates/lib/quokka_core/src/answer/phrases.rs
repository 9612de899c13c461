//! Fixed trigger phrases and their canned responses.

/// A trigger phrase paired with the response it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseEntry {
    /// Lowercase literal searched for anywhere in the normalized question.
    pub phrase: &'static str,
    /// Response returned verbatim on a match.
    pub response: &'static str,
}

/// Phrase table, checked in order before any pattern rule.
///
/// Matching is by substring, so short phrases such as `hi` also fire inside
/// longer words (`this`, `which`).
pub static PHRASE_TABLE: &[PhraseEntry] = &[
    PhraseEntry {
        phrase: "hello",
        response: "Hello! I'm your autonomous QA assistant. How can I help you today?",
    },
    PhraseEntry {
        phrase: "hi",
        response: "Hi there! What would you like to know?",
    },
    PhraseEntry {
        phrase: "how are you",
        response: "I'm doing great! Ready to answer your questions.",
    },
    PhraseEntry {
        phrase: "what is your name",
        response: "I'm an Autonomous QA Assistant, designed to help answer your questions intelligently.",
    },
    PhraseEntry {
        phrase: "who are you",
        response: "I'm an AI-powered question answering assistant. I can help you with various topics and provide information autonomously.",
    },
    PhraseEntry {
        phrase: "what can you do",
        response: "I can answer questions on various topics, provide information, help with problem-solving, and engage in meaningful conversations. Try asking me anything!",
    },
    PhraseEntry {
        phrase: "help",
        response: "I'm here to answer your questions! You can ask me about:\n• General knowledge\n• Technology and programming\n• Science and math\n• Definitions and explanations\n• Problem-solving\n\nJust type your question and I'll do my best to help!",
    },
];

/// Returns the first entry whose phrase occurs in `normalized`.
pub fn lookup(normalized: &str) -> Option<&'static PhraseEntry> {
    PHRASE_TABLE
        .iter()
        .find(|entry| normalized.contains(entry.phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_seven_lowercase_phrases() {
        assert_eq!(PHRASE_TABLE.len(), 7);
        for entry in PHRASE_TABLE {
            assert_eq!(entry.phrase, entry.phrase.to_lowercase());
            assert!(!entry.response.is_empty());
        }
    }

    #[test]
    fn lookup_returns_first_entry_in_table_order() {
        // "hi" precedes "how are you" in the table.
        let entry = lookup("hi, how are you").expect("match");
        assert_eq!(entry.phrase, "hi");
    }

    #[test]
    fn lookup_matches_inside_words() {
        let entry = lookup("is this thing on").expect("match");
        assert_eq!(entry.phrase, "hi");
    }

    #[test]
    fn lookup_misses_unrelated_text() {
        assert!(lookup("xyzzy plugh").is_none());
    }

    #[test]
    fn help_response_lists_topics_as_bullets() {
        let entry = lookup("please help").expect("match");
        assert_eq!(entry.phrase, "help");
        assert!(entry.response.contains("\n• General knowledge"));
    }
}
