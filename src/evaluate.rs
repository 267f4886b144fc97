//! Pair evaluation: one scenario, one response, one verdict.

use crate::blank;
use crate::form::{FormType, classify_form};
use crate::lexicon::Lexicon;
use crate::matrix::compatible;
use crate::slot::{SlotType, classify_slot};

/// The outcome of testing one scenario/response pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// The scenario template as authored (before normalization).
    pub scenario: String,
    /// The response fragment as authored.
    pub response: String,
    /// The normalized template with the response substituted, for
    /// diagnostics.
    pub filled: String,
    /// What form the blank expects.
    pub slot: SlotType,
    /// What shape the response has.
    pub form: FormType,
    /// Whether the pairing reads correctly.
    pub ok: bool,
}

/// Evaluate one scenario/response pairing.
///
/// Returns `None` when the scenario is unusable (no blank, or a
/// multi-blank template that does not collapse cleanly); such pairs are
/// excluded from analysis entirely rather than counted either way.
pub fn evaluate(scenario: &str, response: &str, lexicon: &Lexicon) -> Option<Verdict> {
    evaluate_with_form(scenario, response, classify_form(response, lexicon))
}

/// [`evaluate`] with a pre-classified response form.
///
/// Responses are invariant within a category, so callers crossing one
/// response against many scenarios classify it once and reuse the form.
pub fn evaluate_with_form(scenario: &str, response: &str, form: FormType) -> Option<Verdict> {
    let normalized = blank::normalize(scenario)?;
    let (slot, _) = classify_slot(&normalized)?;
    Some(Verdict {
        scenario: scenario.to_string(),
        response: response.to_string(),
        filled: blank::fill(&normalized, response),
        slot,
        form,
        ok: compatible(slot, form),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(scenario: &str, response: &str) -> Verdict {
        evaluate(scenario, response, &Lexicon::builtin()).expect("scenario should be usable")
    }

    #[test]
    fn test_noun_phrase_after_copula_is_ok() {
        let verdict = run("The tea is: _____.", "a complete mess");
        assert_eq!(verdict.slot, SlotType::IsPredicate);
        assert_eq!(verdict.form, FormType::NounPhrase);
        assert!(verdict.ok);
    }

    #[test]
    fn test_fragment_after_copula_is_bad() {
        let verdict = run("The tea is: _____.", "can't even adult");
        assert_eq!(verdict.form, FormType::SentenceFragment);
        assert!(!verdict.ok);
        assert_eq!(verdict.filled, "The tea is: can't even adult.");
    }

    #[test]
    fn test_gerund_object_examples() {
        let bad = run("Caught myself simping over: _____.", "getting drunk");
        assert_eq!(bad.slot, SlotType::GerundObject);
        assert_eq!(bad.form, FormType::Gerund);
        assert!(!bad.ok);

        let good = run("Caught myself simping over: _____.", "a dead meme");
        assert!(good.ok);
    }

    #[test]
    fn test_adjective_modifier_examples() {
        let good = run("It's giving _____ energy.", "chronically online");
        assert!(good.ok);

        let bad = run("It's giving _____ energy.", "a complete mess");
        assert!(!bad.ok);
        assert_eq!(bad.filled, "It's giving a complete mess energy.");
    }

    #[test]
    fn test_trump_short_circuits_every_slot() {
        for scenario in [
            "The cope is real when I: _____.",
            "It's giving _____ energy.",
            "I respect people who: _____.",
        ] {
            let verdict = run(scenario, "trump: reverses the question");
            assert_eq!(verdict.form, FormType::Trump);
            assert!(verdict.ok);
        }
    }

    #[test]
    fn test_blankless_scenario_is_excluded() {
        assert!(evaluate("No blank at all.", "sober", &Lexicon::builtin()).is_none());
    }

    #[test]
    fn test_filled_uses_normalized_template() {
        let verdict = run("When I: _____ I always _____ after.", "can't even adult");
        assert_eq!(verdict.scenario, "When I: _____ I always _____ after.");
        assert_eq!(verdict.filled, "When I: can't even adult after.");
        assert!(verdict.ok);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let a = run("Lowkey addicted to: _____.", "doomscrolling till 3am");
        let b = run("Lowkey addicted to: _____.", "doomscrolling till 3am");
        assert_eq!(a, b);
    }

    #[test]
    fn test_sentence_fragment_in_verb_slot_is_ok() {
        let verdict = run("The cope is real when I: _____.", "can't even adult");
        assert_eq!(verdict.slot, SlotType::IVerb);
        assert!(verdict.ok);
    }
}
