//! The slot/form compatibility table.
//!
//! One row per slot type listing the response forms that read correctly in
//! that slot. Trump is not a column: a trump card fits every slot and
//! bypasses the table entirely.

use crate::form::FormType;
use crate::slot::SlotType;

const EVERY_FORM: &[FormType] = &[
    FormType::Gerund,
    FormType::NounPhrase,
    FormType::Adjective,
    FormType::ShortLabel,
    FormType::PrepPhrase,
    FormType::SentenceFragment,
];

const PREDICATE_FORMS: &[FormType] = &[
    FormType::Gerund,
    FormType::NounPhrase,
    FormType::Adjective,
    FormType::ShortLabel,
    FormType::PrepPhrase,
];

impl SlotType {
    /// The non-trump response forms that read correctly in this slot.
    pub fn accepted_forms(self) -> &'static [FormType] {
        match self {
            // Anything that can follow "is" except a bare verb clause.
            SlotType::IsPredicate => PREDICATE_FORMS,
            SlotType::Identity => PREDICATE_FORMS,
            // The verb is implied, so gerunds read doubled here.
            SlotType::GerundObject => &[FormType::NounPhrase, FormType::ShortLabel],
            SlotType::AdjectiveModifier => &[FormType::Adjective, FormType::ShortLabel],
            SlotType::IVerb => &[FormType::SentenceFragment],
            SlotType::VerbInf => &[FormType::NounPhrase, FormType::ShortLabel],
            SlotType::WhoClause => &[FormType::SentenceFragment],
            SlotType::SomeoneVerb => &[FormType::SentenceFragment],
            SlotType::FromGerund => &[
                FormType::Gerund,
                FormType::NounPhrase,
                FormType::ShortLabel,
            ],
            SlotType::Object => &[
                FormType::Gerund,
                FormType::NounPhrase,
                FormType::ShortLabel,
            ],
            SlotType::NounLabel => PREDICATE_FORMS,
            SlotType::Answer => EVERY_FORM,
            SlotType::Open => EVERY_FORM,
        }
    }
}

/// Whether a response of the given form reads correctly in the given slot.
/// Trump responses are compatible with every slot.
pub fn compatible(slot: SlotType, form: FormType) -> bool {
    form == FormType::Trump || slot.accepted_forms().contains(&form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trump_fits_every_slot() {
        for slot in SlotType::ALL {
            assert!(compatible(slot, FormType::Trump));
        }
    }

    #[test]
    fn test_table_is_total() {
        // Every slot/form pairing answers from an explicit row.
        for slot in SlotType::ALL {
            for form in FormType::ALL {
                let _ = compatible(slot, form);
            }
            assert!(!slot.accepted_forms().contains(&FormType::Trump));
        }
    }

    #[test]
    fn test_predicate_rows_reject_fragments() {
        for slot in [SlotType::IsPredicate, SlotType::Identity, SlotType::NounLabel] {
            assert!(compatible(slot, FormType::NounPhrase));
            assert!(compatible(slot, FormType::PrepPhrase));
            assert!(!compatible(slot, FormType::SentenceFragment));
        }
    }

    #[test]
    fn test_gerund_object_row() {
        assert!(!compatible(SlotType::GerundObject, FormType::Gerund));
        assert!(compatible(SlotType::GerundObject, FormType::NounPhrase));
        assert!(!compatible(SlotType::GerundObject, FormType::Adjective));
        assert!(compatible(SlotType::GerundObject, FormType::ShortLabel));
        assert!(!compatible(SlotType::GerundObject, FormType::PrepPhrase));
        assert!(!compatible(SlotType::GerundObject, FormType::SentenceFragment));
    }

    #[test]
    fn test_adjective_modifier_row() {
        assert!(compatible(SlotType::AdjectiveModifier, FormType::Adjective));
        assert!(compatible(SlotType::AdjectiveModifier, FormType::ShortLabel));
        assert!(!compatible(SlotType::AdjectiveModifier, FormType::NounPhrase));
        assert!(!compatible(SlotType::AdjectiveModifier, FormType::Gerund));
    }

    #[test]
    fn test_verb_slots_accept_only_fragments() {
        for slot in [SlotType::IVerb, SlotType::WhoClause, SlotType::SomeoneVerb] {
            assert!(compatible(slot, FormType::SentenceFragment));
            for form in [
                FormType::Gerund,
                FormType::NounPhrase,
                FormType::Adjective,
                FormType::ShortLabel,
                FormType::PrepPhrase,
            ] {
                assert!(!compatible(slot, form), "{:?} should reject {:?}", slot, form);
            }
        }
    }

    #[test]
    fn test_object_rows_accept_gerunds() {
        for slot in [SlotType::FromGerund, SlotType::Object] {
            assert!(compatible(slot, FormType::Gerund));
            assert!(compatible(slot, FormType::NounPhrase));
            assert!(!compatible(slot, FormType::Adjective));
            assert!(!compatible(slot, FormType::PrepPhrase));
            assert!(!compatible(slot, FormType::SentenceFragment));
        }
    }

    #[test]
    fn test_verb_inf_row() {
        assert!(!compatible(SlotType::VerbInf, FormType::Gerund));
        assert!(compatible(SlotType::VerbInf, FormType::NounPhrase));
        assert!(compatible(SlotType::VerbInf, FormType::ShortLabel));
        assert!(!compatible(SlotType::VerbInf, FormType::SentenceFragment));
    }

    #[test]
    fn test_open_rows_accept_everything() {
        for slot in [SlotType::Answer, SlotType::Open] {
            for form in FormType::ALL {
                assert!(compatible(slot, form));
            }
        }
    }
}
