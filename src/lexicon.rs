//! Vocabulary tables backing the response classifier.
//!
//! The classifier works from closed word lists tuned to the corpus rather
//! than a general lexicon. The lists are data, not logic: they are expected
//! to grow with the corpus, so they live here as versioned tables and the
//! classifier takes a [`Lexicon`] value that callers may have loaded from a
//! vocabulary file instead of the built-in defaults.

/// Lexical roots that open a gerund-form response ("getting drunk",
/// "doomscrolling at 3am" style fragments all open with one of these).
pub const GERUND_ROOTS: &[&str] = &[
    "getting",
    "being",
    "having",
    "doing",
    "making",
    "thinking",
    "watching",
    "texting",
    "saying",
    "working",
    "living",
    "pretending",
    "writing",
    "napping",
    "sleeping",
    "avoiding",
    "fighting",
    "tweeting",
    "oversharing",
    "committing",
    "touching",
    "running",
    "loving",
    "rotting",
    "eating",
    "drinking",
    "slapping",
    "using",
    "asking",
    "calling",
    "putting",
    "bargaining",
    "planning",
    "paying",
    "surviving",
    "dodging",
    "collecting",
    "mastering",
    "stealing",
    "buying",
    "raising",
    "comparing",
    "considering",
    "wishing",
    "realizing",
    "looking",
    "remembering",
    "becoming",
    "finding",
    "existing",
    "knowing",
    "revolting",
    "waking",
    "recovering",
    "setting",
    "complaining",
    "shopping",
    "saving",
    "turning",
    "worrying",
    "budgeting",
    "romanticizing",
    "resenting",
    "hiding",
    "forgetting",
    "canceling",
    "going",
    "checking",
    "groaning",
    "falling",
    "missing",
    "dealing",
    "hearing",
    "wanting",
    "needing",
    "aching",
    "seeing",
];

/// Adverb intensifiers and state adjectives that open an adjective-form
/// response ("chronically online", "absolutely feral").
pub const ADJECTIVE_LEADS: &[&str] = &[
    "chronically",
    "absolutely",
    "literally",
    "genuinely",
    "mentally",
    "emotionally",
    "professionally",
    "seriously",
    "honestly",
    "completely",
    "desperately",
    "secretly",
    "actively",
    "currently",
    "already",
    "still",
    "actually",
    "basically",
    "essentially",
    "fake",
    "down",
    "weird",
    "aesthetic",
    "main",
    "parasocially",
    "two-faced",
    "rent-free",
    "maidenless",
    "broke",
];

/// Bare nouns that open a noun-phrase response without an article
/// ("people who clap when the plane lands", "nothing, ever").
pub const NOUN_INDICATORS: &[&str] = &[
    "people",
    "stuff",
    "things",
    "positions",
    "situations",
    "regrets",
    "fantasies",
    "substances",
    "comfort",
    "potential",
    "betrayal",
    "beautiful",
    "absolute",
    "nothing",
    "time",
    "nobody",
];

/// The vocabulary a [`classify_form`](crate::form::classify_form) call
/// works from. Construct with [`Lexicon::builtin`] for the built-in tables
/// or [`Lexicon::new`] for tables loaded from a vocabulary file.
#[derive(Debug, Clone)]
pub struct Lexicon {
    gerund_roots: Vec<String>,
    adjective_leads: Vec<String>,
    noun_indicators: Vec<String>,
}

impl Lexicon {
    /// A lexicon backed by the built-in tables above.
    pub fn builtin() -> Self {
        Self::new(
            GERUND_ROOTS.iter().map(|w| w.to_string()).collect(),
            ADJECTIVE_LEADS.iter().map(|w| w.to_string()).collect(),
            NOUN_INDICATORS.iter().map(|w| w.to_string()).collect(),
        )
    }

    pub fn new(
        gerund_roots: Vec<String>,
        adjective_leads: Vec<String>,
        noun_indicators: Vec<String>,
    ) -> Self {
        Self {
            gerund_roots,
            adjective_leads,
            noun_indicators,
        }
    }

    pub fn gerund_roots(&self) -> &[String] {
        &self.gerund_roots
    }

    pub fn adjective_leads(&self) -> &[String] {
        &self.adjective_leads
    }

    pub fn noun_indicators(&self) -> &[String] {
        &self.noun_indicators
    }

    /// True when the fragment opens with one of the gerund roots.
    pub fn opens_with_gerund(&self, fragment: &str) -> bool {
        self.gerund_roots
            .iter()
            .any(|w| fragment.starts_with(w.as_str()))
    }

    /// True when the fragment opens with one of the adjective leads.
    pub fn opens_with_adjective(&self, fragment: &str) -> bool {
        self.adjective_leads
            .iter()
            .any(|w| fragment.starts_with(w.as_str()))
    }

    /// True when the fragment opens with one of the bare-noun indicators.
    pub fn opens_with_noun_indicator(&self, fragment: &str) -> bool {
        self.noun_indicators
            .iter()
            .any(|w| fragment.starts_with(w.as_str()))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_populated() {
        let lex = Lexicon::builtin();
        assert!(!lex.gerund_roots().is_empty());
        assert!(!lex.adjective_leads().is_empty());
        assert!(!lex.noun_indicators().is_empty());
    }

    #[test]
    fn test_builtin_tables_have_no_duplicates() {
        for table in [GERUND_ROOTS, ADJECTIVE_LEADS, NOUN_INDICATORS] {
            let mut seen = std::collections::HashSet::new();
            for word in table {
                assert!(seen.insert(*word), "duplicate table entry: {word}");
            }
        }
    }

    #[test]
    fn test_opens_with_matches_prefix() {
        let lex = Lexicon::builtin();
        assert!(lex.opens_with_gerund("getting drunk"));
        assert!(lex.opens_with_adjective("chronically online"));
        assert!(lex.opens_with_noun_indicator("nothing, ever"));
        assert!(!lex.opens_with_gerund("a complete mess"));
    }

    #[test]
    fn test_custom_tables_replace_builtin() {
        let lex = Lexicon::new(vec!["yeeting".to_string()], Vec::new(), Vec::new());
        assert!(lex.opens_with_gerund("yeeting my phone"));
        assert!(!lex.opens_with_gerund("getting drunk"));
    }
}
