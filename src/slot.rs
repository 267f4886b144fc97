//! Slot classification for scenario templates.
//!
//! A template's blank expects a particular grammatical form depending on
//! the text around it. Classification walks an ordered rule table over the
//! trimmed text before and after the blank; the first matching rule wins.

use crate::blank;

/// What grammatical form a scenario's blank expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotType {
    /// The blank follows a copula: "The tea is: _____".
    IsPredicate,
    /// The blank completes "I'm ..." / "I am ...": "I'm literally: _____".
    Identity,
    /// The blank is the object of "caught me/myself":
    /// "Caught myself simping over: _____".
    GerundObject,
    /// The blank is a bare modifier: "It's giving _____ energy".
    AdjectiveModifier,
    /// The blank must be a verb-led clause: "... when I: _____".
    IVerb,
    /// The blank names a witnessed act: "Twitter saw me do: _____".
    VerbInf,
    /// The blank continues "who ...": "I respect people who: _____".
    WhoClause,
    /// The blank continues "someone ...": "... if someone: _____".
    SomeoneVerb,
    /// The blank follows "from": "stopping me from: _____".
    FromGerund,
    /// The blank is the object of a preposition: "addicted to: _____".
    Object,
    /// A label before a colon: "My guilty pleasure: _____".
    NounLabel,
    /// The template is a question; the blank is its answer.
    Answer,
    /// No cue matched; anything goes.
    Open,
}

impl SlotType {
    pub const ALL: [SlotType; 13] = [
        SlotType::IsPredicate,
        SlotType::Identity,
        SlotType::GerundObject,
        SlotType::AdjectiveModifier,
        SlotType::IVerb,
        SlotType::VerbInf,
        SlotType::WhoClause,
        SlotType::SomeoneVerb,
        SlotType::FromGerund,
        SlotType::Object,
        SlotType::NounLabel,
        SlotType::Answer,
        SlotType::Open,
    ];

    /// Tag used in reports.
    pub fn label(self) -> &'static str {
        match self {
            SlotType::IsPredicate => "IS_PREDICATE",
            SlotType::Identity => "IDENTITY",
            SlotType::GerundObject => "GERUND_OBJECT",
            SlotType::AdjectiveModifier => "ADJECTIVE_MODIFIER",
            SlotType::IVerb => "I_VERB",
            SlotType::VerbInf => "VERB_INF",
            SlotType::WhoClause => "WHO_CLAUSE",
            SlotType::SomeoneVerb => "SOMEONE_VERB",
            SlotType::FromGerund => "FROM_GERUND",
            SlotType::Object => "OBJECT",
            SlotType::NounLabel => "NOUN_LABEL",
            SlotType::Answer => "ANSWER",
            SlotType::Open => "OPEN",
        }
    }
}

/// The lowercased, normalized template and its text around the blank, as
/// seen by the rule predicates.
#[derive(Debug, Clone, Copy)]
pub struct SlotContext<'a> {
    /// Full normalized template.
    pub template: &'a str,
    /// Trimmed text before the blank.
    pub before: &'a str,
    /// Trimmed text after the blank.
    pub after: &'a str,
}

/// One classification rule: a textual cue and the slot it implies.
pub struct SlotRule {
    pub slot: SlotType,
    pub applies: fn(&SlotContext) -> bool,
}

/// The rule table, most specific first. Order matters: several cues can
/// co-occur ("... people who:" contains a colon but must classify as
/// WhoClause, "... from:" ends in a preposition but must classify as
/// FromGerund), so each template takes the first rule that matches.
pub const SLOT_RULES: &[SlotRule] = &[
    SlotRule {
        slot: SlotType::IsPredicate,
        applies: ends_in_is,
    },
    SlotRule {
        slot: SlotType::Identity,
        applies: ends_in_i_am,
    },
    SlotRule {
        slot: SlotType::GerundObject,
        applies: mentions_caught,
    },
    SlotRule {
        slot: SlotType::AdjectiveModifier,
        applies: giving_energy,
    },
    SlotRule {
        slot: SlotType::IVerb,
        applies: ends_in_when_i,
    },
    SlotRule {
        slot: SlotType::VerbInf,
        applies: ends_in_saw_me,
    },
    SlotRule {
        slot: SlotType::WhoClause,
        applies: ends_in_who,
    },
    SlotRule {
        slot: SlotType::SomeoneVerb,
        applies: ends_in_someone,
    },
    SlotRule {
        slot: SlotType::FromGerund,
        applies: ends_in_from,
    },
    SlotRule {
        slot: SlotType::Object,
        applies: ends_in_preposition,
    },
    SlotRule {
        slot: SlotType::Answer,
        applies: is_question,
    },
    SlotRule {
        slot: SlotType::NounLabel,
        applies: has_label_colon,
    },
];

/// Classify what form a template's blank expects.
///
/// Lowercases and normalizes the template first; returns `None` when no
/// single blank survives normalization (such templates are excluded from
/// analysis). The second element is the lowercased normalized template the
/// classification was made on.
pub fn classify_slot(template: &str) -> Option<(SlotType, String)> {
    let lowered = template.to_lowercase();
    let normalized = blank::normalize(lowered.trim())?;
    let (before, after) = blank::split_at_blank(&normalized)?;
    let ctx = SlotContext {
        template: &normalized,
        before,
        after,
    };
    let slot = SLOT_RULES
        .iter()
        .find(|rule| (rule.applies)(&ctx))
        .map(|rule| rule.slot)
        .unwrap_or(SlotType::Open);
    Some((slot, normalized))
}

/// Strip a trailing colon and whitespace, the way cues are written before
/// a blank ("is:", "when I:").
fn trim_label_tail(text: &str) -> &str {
    text.trim_end_matches(|ch: char| ch == ':' || ch.is_whitespace())
}

/// True when `text` ends with `tail` on a word boundary.
fn ends_with_word(text: &str, tail: &str) -> bool {
    text.strip_suffix(tail).is_some_and(|rest| {
        rest.chars()
            .next_back()
            .is_none_or(|ch| !ch.is_alphanumeric())
    })
}

fn ends_in_is(ctx: &SlotContext) -> bool {
    ends_with_word(trim_label_tail(ctx.before), "is")
}

fn ends_in_i_am(ctx: &SlotContext) -> bool {
    let mut tail = trim_label_tail(ctx.before);
    if ends_with_word(tail, "literally") {
        tail = trim_label_tail(&tail[..tail.len() - "literally".len()]);
    }
    ends_with_word(tail, "i'm") || ends_with_word(tail, "im") || ends_with_word(tail, "i am")
}

fn mentions_caught(ctx: &SlotContext) -> bool {
    ctx.before.contains("caught")
}

fn giving_energy(ctx: &SlotContext) -> bool {
    ctx.before.contains("giving") && ctx.after.contains("energy")
}

fn ends_in_when_i(ctx: &SlotContext) -> bool {
    ends_with_word(trim_label_tail(ctx.before), "when i")
}

fn ends_in_saw_me(ctx: &SlotContext) -> bool {
    let tail = trim_label_tail(ctx.before);
    ends_with_word(tail, "saw me") || ends_with_word(tail, "saw me do")
}

fn ends_in_who(ctx: &SlotContext) -> bool {
    ends_with_word(trim_label_tail(ctx.before), "who")
}

fn ends_in_someone(ctx: &SlotContext) -> bool {
    ends_with_word(trim_label_tail(ctx.before), "someone")
}

fn ends_in_from(ctx: &SlotContext) -> bool {
    ends_with_word(trim_label_tail(ctx.before), "from")
}

/// Prepositions whose object the blank becomes.
const OBJECT_PREPOSITIONS: &[&str] = &[
    "of", "to", "over", "about", "for", "at", "from", "into", "with", "doing",
];

fn ends_in_preposition(ctx: &SlotContext) -> bool {
    let tail = trim_label_tail(ctx.before);
    OBJECT_PREPOSITIONS
        .iter()
        .any(|prep| ends_with_word(tail, prep))
}

fn is_question(ctx: &SlotContext) -> bool {
    ctx.template.ends_with('?')
}

fn has_label_colon(ctx: &SlotContext) -> bool {
    ctx.before.contains(':')
}
