//! Pattern rules evaluated after the phrase table misses.

use super::Question;

/// Builds the reply for a matched rule.
pub type Responder = fn(&Question<'_>) -> String;

/// A predicate/responder pair.
///
/// The predicate holds when any trigger occurs in the normalized question.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    /// Stable rule name, reported in [`MatchKind::Pattern`](super::MatchKind::Pattern).
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub respond: Responder,
}

impl PatternRule {
    /// Whether this rule fires for the normalized question.
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t))
    }
}

/// Pattern rules in evaluation order. First match wins.
pub static PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        name: "definition",
        triggers: &["what is", "what are"],
        respond: definition,
    },
    PatternRule {
        name: "how_to",
        triggers: &["how to", "how do"],
        respond: how_to,
    },
    PatternRule {
        name: "why",
        triggers: &["why"],
        respond: why,
    },
    PatternRule {
        name: "when",
        triggers: &["when"],
        respond: when,
    },
    PatternRule {
        name: "where",
        triggers: &["where"],
        respond: where_,
    },
    PatternRule {
        name: "programming",
        triggers: &["programming", "code", "developer"],
        respond: programming,
    },
    PatternRule {
        name: "ai",
        triggers: &["ai", "artificial intelligence", "machine learning"],
        respond: ai,
    },
    PatternRule {
        name: "thanks",
        triggers: &["thank"],
        respond: thanks,
    },
];

/// Returns the first rule that fires for `normalized`.
pub fn first_match(normalized: &str) -> Option<&'static PatternRule> {
    PATTERN_RULES.iter().find(|rule| rule.matches(normalized))
}

const HOW_TO: &str = "Great question! Here's a step-by-step approach:\n\n1. Start by understanding the fundamentals\n2. Break down the task into smaller steps\n3. Practice and iterate\n4. Learn from mistakes and refine your approach\n\nFeel free to ask more specific questions for detailed guidance!";

const WHY: &str = "That's a thought-provoking question! The reasons can be multifaceted:\n\n• Historical context and evolution\n• Practical necessity or benefits\n• Natural principles or laws\n• Human behavior and decision-making\n\nWould you like me to elaborate on any specific aspect?";

const WHEN: &str = "Timing is important! The answer depends on several factors:\n\n• Context and circumstances\n• Historical timeline (if applicable)\n• Current state and future projections\n\nCould you provide more details so I can give you a more precise answer?";

const WHERE: &str = "Location and context matter! The answer varies based on:\n\n• Geographical considerations\n• Virtual vs physical spaces\n• Specific use cases\n\nPlease share more details for a more targeted response.";

const PROGRAMMING: &str = "Programming is a powerful skill! Here's some insight:\n\n• Start with fundamentals (variables, loops, functions)\n• Practice with real projects\n• Learn debugging and problem-solving\n• Explore different languages and frameworks\n• Join communities and collaborate\n\nWhat specific aspect of programming interests you?";

const AI: &str = "AI is transforming our world! Key points:\n\n• Machine learning enables systems to learn from data\n• Applications include automation, prediction, and analysis\n• Ethical considerations are crucial\n• Continuous advancement in capabilities\n\nI'm an example of AI in action! What would you like to know more about?";

const THANKS: &str = "You're welcome! I'm always here to help. Feel free to ask more questions anytime!";

/// Prefixes removed from a definition question. Trailing space is significant.
const DEFINITION_PREFIXES: [&str; 2] = ["what is ", "what are "];

fn definition(question: &Question<'_>) -> String {
    let subject = extract_subject(&question.normalized);
    format!(
        "{} is an interesting topic. Let me explain:\n\nThis refers to a concept, entity, or phenomenon. To provide you with accurate information, I'd be happy to share knowledge about various aspects related to {subject}, including its definition, characteristics, and real-world applications.",
        capitalize(&subject)
    )
}

fn how_to(_: &Question<'_>) -> String {
    HOW_TO.to_string()
}

fn why(_: &Question<'_>) -> String {
    WHY.to_string()
}

fn when(_: &Question<'_>) -> String {
    WHEN.to_string()
}

fn where_(_: &Question<'_>) -> String {
    WHERE.to_string()
}

fn programming(_: &Question<'_>) -> String {
    PROGRAMMING.to_string()
}

fn ai(_: &Question<'_>) -> String {
    AI.to_string()
}

fn thanks(_: &Question<'_>) -> String {
    THANKS.to_string()
}

/// Removes the leftmost `what is ` / `what are ` and trims the rest.
///
/// The prefix is removed wherever it first occurs, not only at the start.
pub fn extract_subject(normalized: &str) -> String {
    let stripped = DEFINITION_PREFIXES
        .iter()
        .filter_map(|prefix| normalized.find(prefix).map(|at| (at, prefix.len())))
        .min_by_key(|&(at, _)| at)
        .map(|(at, len)| format!("{}{}", &normalized[..at], &normalized[at + len..]));

    match stripped {
        Some(s) => s.trim().to_string(),
        None => normalized.trim().to_string(),
    }
}

/// Uppercases the first character only.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_name(normalized: &str) -> Option<&'static str> {
        first_match(normalized).map(|r| r.name)
    }

    #[test]
    fn rules_are_checked_in_fixed_order() {
        let names: Vec<&str> = PATTERN_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "definition",
                "how_to",
                "why",
                "when",
                "where",
                "programming",
                "ai",
                "thanks"
            ]
        );
    }

    #[test]
    fn why_wins_over_programming() {
        assert_eq!(rule_name("why learn programming"), Some("why"));
    }

    #[test]
    fn definition_wins_over_why() {
        assert_eq!(rule_name("what is the reason why"), Some("definition"));
    }

    #[test]
    fn each_alternate_trigger_fires() {
        assert_eq!(rule_name("how to swim"), Some("how_to"));
        assert_eq!(rule_name("how do magnets work"), Some("how_to"));
        assert_eq!(rule_name("when does it rain"), Some("when"));
        assert_eq!(rule_name("where is paris"), Some("where"));
        assert_eq!(rule_name("source code review"), Some("programming"));
        assert_eq!(rule_name("becoming a developer"), Some("programming"));
        assert_eq!(rule_name("machine learning"), Some("ai"));
        assert_eq!(rule_name("artificial intelligence"), Some("ai"));
        assert_eq!(rule_name("thanks a lot"), Some("thanks"));
    }

    #[test]
    fn ai_trigger_matches_inside_words() {
        assert_eq!(rule_name("explain rain"), Some("ai"));
    }

    #[test]
    fn no_rule_for_unrelated_text() {
        assert_eq!(rule_name("xyzzy plugh"), None);
    }

    #[test]
    fn extract_subject_strips_leading_prefix() {
        assert_eq!(extract_subject("what is photosynthesis"), "photosynthesis");
        assert_eq!(extract_subject("what are   black holes  "), "black holes");
    }

    #[test]
    fn extract_subject_strips_first_occurrence_anywhere() {
        assert_eq!(extract_subject("so what is rust"), "so rust");
        assert_eq!(
            extract_subject("what are tides and what is the moon"),
            "tides and what is the moon"
        );
    }

    #[test]
    fn extract_subject_keeps_text_without_trailing_space() {
        assert_eq!(extract_subject("what is?"), "what is?");
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize("rust"), "Rust");
    }
}
