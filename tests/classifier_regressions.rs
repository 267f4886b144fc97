//! Regressions pinned from real corpus content. Each case is a pairing
//! that once read wrong (or was wrongly flagged) in review; the expected
//! classification is the contract.

use fitcheck::{FormType, Lexicon, SlotType, classify_form, classify_slot, evaluate};

fn slot_of(template: &str) -> SlotType {
    classify_slot(template).expect("template should be usable").0
}

fn form_of(fragment: &str) -> FormType {
    classify_form(fragment, &Lexicon::builtin())
}

fn is_ok(scenario: &str, response: &str) -> bool {
    evaluate(scenario, response, &Lexicon::builtin())
        .expect("scenario should be usable")
        .ok
}

#[test]
fn copula_with_colon_label_reads_as_predicate_not_label() {
    // The colon alone would classify as a label slot; the trailing "is"
    // is the stronger cue and must win.
    assert_eq!(slot_of("The red flag is: _____."), SlotType::IsPredicate);
}

#[test]
fn who_label_is_not_a_generic_label() {
    assert_eq!(slot_of("Shoutout to the one who: _____."), SlotType::WhoClause);
}

#[test]
fn from_outranks_the_generic_preposition_set() {
    assert_eq!(
        slot_of("One paycheck away from: _____."),
        SlotType::FromGerund
    );
    // "from" slots accept gerunds, the generic object slot also does, so
    // the distinction only matters for adjectives and must still hold.
    assert!(is_ok("One paycheck away from: _____.", "getting drunk"));
    assert!(!is_ok("One paycheck away from: _____.", "chronically online"));
}

#[test]
fn caught_anywhere_before_the_blank_wins() {
    assert_eq!(
        slot_of("My roommate caught me doing: _____."),
        SlotType::GerundObject
    );
}

#[test]
fn question_templates_accept_fragments() {
    assert_eq!(slot_of("What's your _____ confession?"), SlotType::Answer);
    assert!(is_ok("What's your _____ confession?", "can't even adult"));
}

#[test]
fn giving_energy_accepts_only_modifiers() {
    let scenario = "It's giving _____ energy.";
    assert_eq!(slot_of(scenario), SlotType::AdjectiveModifier);
    assert!(is_ok(scenario, "chronically online"));
    assert!(is_ok(scenario, "maidenless"));
    assert!(is_ok(scenario, "sober"));
    assert!(!is_ok(scenario, "a complete mess"));
    assert!(!is_ok(scenario, "getting drunk"));
    assert!(!is_ok(scenario, "at the gym"));
}

#[test]
fn trump_cards_pass_the_strictest_slots() {
    assert!(is_ok("The cope is real when I: _____.", "Trump: skip the turn"));
    assert!(is_ok("It's giving _____ energy.", "TRUMP: reverse it."));
}

#[test]
fn possessives_and_determiners_read_as_noun_phrases() {
    assert_eq!(form_of("my sleep schedule"), FormType::NounPhrase);
    assert_eq!(form_of("that one group chat"), FormType::NounPhrase);
    assert_eq!(form_of("every red flag at once"), FormType::NounPhrase);
}

#[test]
fn bare_noun_indicators_read_as_noun_phrases() {
    assert_eq!(form_of("people who clap when the plane lands"), FormType::NounPhrase);
    assert_eq!(form_of("nothing, and I mean it"), FormType::NounPhrase);
}

#[test]
fn short_fragments_stay_labels_until_a_subject_appears() {
    assert_eq!(form_of("sober"), FormType::ShortLabel);
    assert_eq!(form_of("rock bottom again"), FormType::ShortLabel);
    assert_eq!(form_of("i lost the plot"), FormType::SentenceFragment);
    assert_eq!(form_of("won't elaborate further"), FormType::SentenceFragment);
}

#[test]
fn multi_blank_template_collapses_and_still_classifies() {
    let scenario = "When I: _____ I always _____ after.";
    let (slot, normalized) = classify_slot(scenario).expect("collapses to one blank");
    assert_eq!(slot, SlotType::IVerb);
    assert_eq!(normalized, "when i: _____ after.");
    assert!(is_ok(scenario, "can't even adult"));
    assert!(!is_ok(scenario, "a complete mess"));
}

#[test]
fn blankless_strings_are_not_templates() {
    assert!(classify_slot("Straight up facts.").is_none());
    assert!(
        evaluate("Straight up facts.", "sober", &Lexicon::builtin()).is_none(),
        "blankless scenarios are excluded, not judged"
    );
}
