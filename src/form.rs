//! Grammatical shape classification for response fragments.

use crate::lexicon::Lexicon;

/// Case-insensitive prefix marking a trump card. A trump response is
/// playable in any slot and is never classified grammatically.
pub const TRUMP_PREFIX: &str = "trump:";

/// The grammatical shape of a response fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormType {
    /// Opens with an "-ing" verb: "getting drunk".
    Gerund,
    /// Opens with an article, determiner, possessive, or bare noun:
    /// "a complete mess", "people who clap".
    NounPhrase,
    /// Opens with an intensifier or state adjective: "chronically online".
    Adjective,
    /// A short label-like fragment, at most four words: "sober".
    ShortLabel,
    /// Opens with a preposition or focusing adverb: "at the gym".
    PrepPhrase,
    /// A verb-led clause continuing a sentence: "can't even adult".
    SentenceFragment,
    /// A trump card; fits every slot.
    Trump,
}

impl FormType {
    pub const ALL: [FormType; 7] = [
        FormType::Gerund,
        FormType::NounPhrase,
        FormType::Adjective,
        FormType::ShortLabel,
        FormType::PrepPhrase,
        FormType::SentenceFragment,
        FormType::Trump,
    ];

    /// Tag used in reports.
    pub fn label(self) -> &'static str {
        match self {
            FormType::Gerund => "GERUND",
            FormType::NounPhrase => "NOUN_PHRASE",
            FormType::Adjective => "ADJECTIVE",
            FormType::ShortLabel => "SHORT_LABEL",
            FormType::PrepPhrase => "PREP_PHRASE",
            FormType::SentenceFragment => "SENTENCE_FRAGMENT",
            FormType::Trump => "TRUMP",
        }
    }
}

/// Articles, determiners, and possessives that open a noun phrase.
const NOUN_PHRASE_LEADS: &[&str] = &[
    "a", "an", "the", "my", "your", "our", "that", "this", "some", "one", "no", "every",
];

/// Prepositions and focusing adverbs that open a prepositional phrase.
const PREP_LEADS: &[&str] = &["at", "in", "on", "just", "only", "way"];

/// Negation contractions that open a sentence fragment.
const FRAGMENT_CONTRACTIONS: &[&str] = &["can't", "won't", "didn't"];

/// True when `fragment` starts with `word` followed by a space.
fn leads_with_word(fragment: &str, word: &str) -> bool {
    fragment
        .strip_prefix(word)
        .is_some_and(|rest| rest.starts_with(' '))
}

/// True when the fragment opens like a sentence continuation ("i ..." or a
/// negation contraction). Such fragments only read well in verb slots.
fn opens_as_fragment(fragment: &str) -> bool {
    leads_with_word(fragment, "i")
        || FRAGMENT_CONTRACTIONS
            .iter()
            .any(|w| fragment.starts_with(w))
}

/// Classify the grammatical shape of a response fragment.
///
/// Works on the lowercased, trimmed fragment with trailing periods
/// stripped. Checks run in priority order and the first match wins; an
/// unrecognized surface falls through to the most permissive non-trump
/// shape, [`FormType::ShortLabel`].
pub fn classify_form(fragment: &str, lexicon: &Lexicon) -> FormType {
    let lowered = fragment.trim().to_lowercase();
    let fragment = lowered.trim_end_matches('.');

    if fragment.starts_with(TRUMP_PREFIX) {
        return FormType::Trump;
    }
    if lexicon.opens_with_gerund(fragment) {
        return FormType::Gerund;
    }
    if NOUN_PHRASE_LEADS.iter().any(|w| leads_with_word(fragment, w)) {
        return FormType::NounPhrase;
    }
    if lexicon.opens_with_adjective(fragment) {
        return FormType::Adjective;
    }
    if lexicon.opens_with_noun_indicator(fragment) {
        return FormType::NounPhrase;
    }
    if PREP_LEADS.iter().any(|w| leads_with_word(fragment, w)) {
        return FormType::PrepPhrase;
    }
    if fragment.split_whitespace().count() <= 4 && !opens_as_fragment(fragment) {
        return FormType::ShortLabel;
    }
    if opens_as_fragment(fragment) {
        return FormType::SentenceFragment;
    }
    FormType::ShortLabel
}
