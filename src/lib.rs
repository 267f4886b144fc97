pub mod analyze;
pub mod blank;
pub mod corpus;
pub mod evaluate;
pub mod form;
pub mod lexicon;
pub mod matrix;
pub mod slot;


pub use analyze::{
    AnalyzeConfig, BadGroup, CategoryReport, FormCount, Report, ScenarioIssue, SlotCount, analyze,
    analyze_with,
};
pub use blank::{BLANK, fill, normalize, split_at_blank};
pub use corpus::{Category, Corpus};
pub use evaluate::{Verdict, evaluate, evaluate_with_form};
pub use form::{FormType, TRUMP_PREFIX, classify_form};
pub use lexicon::{ADJECTIVE_LEADS, GERUND_ROOTS, Lexicon, NOUN_INDICATORS};
pub use matrix::compatible;
pub use slot::{SLOT_RULES, SlotContext, SlotRule, SlotType, classify_slot};
