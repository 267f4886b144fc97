//! Corpus analysis: the full scenario × response cross product per
//! category, aggregated into per-category and overall reports.

use std::collections::HashMap;

use crate::blank;
use crate::corpus::{Category, Corpus};
use crate::evaluate::Verdict;
use crate::form::{FormType, classify_form};
use crate::lexicon::Lexicon;
use crate::matrix::compatible;
use crate::slot::{SlotType, classify_slot};

/// Analysis knobs.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeConfig {
    /// How many example verdicts to keep per bad (slot, form) group.
    pub examples_per_group: usize,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            examples_per_group: 5,
        }
    }
}

/// Bad pairings sharing one (slot, form) combination, with a bounded set
/// of illustrative examples. Groups appear in first-encounter order.
#[derive(Debug, Clone)]
pub struct BadGroup {
    pub slot: SlotType,
    pub form: FormType,
    /// Total bad pairings in this group, not just the retained examples.
    pub count: usize,
    pub examples: Vec<Verdict>,
}

/// A scenario implicated in bad pairings, with how many responses it
/// rejects. Listed in first-encounter order.
#[derive(Debug, Clone)]
pub struct ScenarioIssue {
    /// The template as authored.
    pub scenario: String,
    pub bad_pairs: usize,
}

/// How many of a category's responses classified into one form.
#[derive(Debug, Clone, Copy)]
pub struct FormCount {
    pub form: FormType,
    pub count: usize,
}

/// How many of a category's usable scenarios classified into one slot.
#[derive(Debug, Clone, Copy)]
pub struct SlotCount {
    pub slot: SlotType,
    pub count: usize,
}

/// Everything the analyzer learned about one category.
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub key: String,
    pub name: String,
    /// Pairs evaluated (usable scenarios × responses; trump pairs count).
    pub total_pairs: usize,
    pub bad_pairs: usize,
    /// Scenarios excluded for having no blank or an unresolvable
    /// multi-blank pattern.
    pub skipped_scenarios: usize,
    pub bad_groups: Vec<BadGroup>,
    pub scenario_issues: Vec<ScenarioIssue>,
    /// Response form distribution, descending by count.
    pub form_distribution: Vec<FormCount>,
    /// Slot distribution over usable scenarios, descending by count.
    pub slot_distribution: Vec<SlotCount>,
}

impl CategoryReport {
    pub fn ok_pairs(&self) -> usize {
        self.total_pairs - self.bad_pairs
    }

    pub fn bad_pct(&self) -> f64 {
        percentage(self.bad_pairs, self.total_pairs)
    }

    pub fn ok_pct(&self) -> f64 {
        percentage(self.ok_pairs(), self.total_pairs)
    }
}

/// Aggregated result over the whole corpus.
#[derive(Debug, Clone)]
pub struct Report {
    pub categories: Vec<CategoryReport>,
    pub total_pairs: usize,
    pub bad_pairs: usize,
}

impl Report {
    pub fn ok_pairs(&self) -> usize {
        self.total_pairs - self.bad_pairs
    }

    pub fn bad_pct(&self) -> f64 {
        percentage(self.bad_pairs, self.total_pairs)
    }

    pub fn ok_pct(&self) -> f64 {
        percentage(self.ok_pairs(), self.total_pairs)
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Analyze the corpus with default settings.
pub fn analyze(corpus: &Corpus, lexicon: &Lexicon) -> Report {
    analyze_with(corpus, lexicon, &AnalyzeConfig::default())
}

/// Analyze the corpus. Categories are independent: each report is a pure
/// function of its own category's content.
pub fn analyze_with(corpus: &Corpus, lexicon: &Lexicon, config: &AnalyzeConfig) -> Report {
    let categories: Vec<CategoryReport> = corpus
        .categories
        .iter()
        .map(|category| analyze_category(category, lexicon, config))
        .collect();
    let total_pairs = categories.iter().map(|c| c.total_pairs).sum();
    let bad_pairs = categories.iter().map(|c| c.bad_pairs).sum();
    Report {
        categories,
        total_pairs,
        bad_pairs,
    }
}

fn analyze_category(
    category: &Category,
    lexicon: &Lexicon,
    config: &AnalyzeConfig,
) -> CategoryReport {
    // Responses are fixed for the category; classify each once.
    let response_forms: Vec<(&String, FormType)> = category
        .responses
        .iter()
        .map(|response| (response, classify_form(response, lexicon)))
        .collect();

    let mut total_pairs = 0usize;
    let mut bad_pairs = 0usize;
    let mut skipped_scenarios = 0usize;
    let mut bad_groups: Vec<BadGroup> = Vec::new();
    let mut scenario_issues: Vec<ScenarioIssue> = Vec::new();
    let mut slot_counts: HashMap<SlotType, usize> = HashMap::new();

    for raw in &category.scenarios {
        let Some(normalized) = blank::normalize(raw) else {
            skipped_scenarios += 1;
            continue;
        };
        let Some((slot, _)) = classify_slot(&normalized) else {
            skipped_scenarios += 1;
            continue;
        };
        *slot_counts.entry(slot).or_insert(0) += 1;

        for (response, form) in &response_forms {
            total_pairs += 1;
            if compatible(slot, *form) {
                continue;
            }
            bad_pairs += 1;
            let verdict = Verdict {
                scenario: raw.clone(),
                response: (*response).clone(),
                filled: blank::fill(&normalized, response),
                slot,
                form: *form,
                ok: false,
            };
            record_bad_group(&mut bad_groups, config.examples_per_group, verdict);
            record_scenario_issue(&mut scenario_issues, raw);
        }
    }

    let form_distribution = form_distribution(&response_forms);
    let slot_distribution = slot_distribution(slot_counts);

    CategoryReport {
        key: category.key.clone(),
        name: category.name.clone(),
        total_pairs,
        bad_pairs,
        skipped_scenarios,
        bad_groups,
        scenario_issues,
        form_distribution,
        slot_distribution,
    }
}

fn record_bad_group(groups: &mut Vec<BadGroup>, examples_cap: usize, verdict: Verdict) {
    match groups
        .iter_mut()
        .find(|group| group.slot == verdict.slot && group.form == verdict.form)
    {
        Some(group) => {
            group.count += 1;
            if group.examples.len() < examples_cap {
                group.examples.push(verdict);
            }
        }
        None => {
            let (slot, form) = (verdict.slot, verdict.form);
            let examples = if examples_cap > 0 {
                vec![verdict]
            } else {
                Vec::new()
            };
            groups.push(BadGroup {
                slot,
                form,
                count: 1,
                examples,
            });
        }
    }
}

fn record_scenario_issue(issues: &mut Vec<ScenarioIssue>, scenario: &str) {
    match issues.iter_mut().find(|issue| issue.scenario == scenario) {
        Some(issue) => issue.bad_pairs += 1,
        None => issues.push(ScenarioIssue {
            scenario: scenario.to_string(),
            bad_pairs: 1,
        }),
    }
}

fn form_distribution(response_forms: &[(&String, FormType)]) -> Vec<FormCount> {
    let mut counts: HashMap<FormType, usize> = HashMap::new();
    for (_, form) in response_forms {
        *counts.entry(*form).or_insert(0) += 1;
    }
    let mut distribution: Vec<FormCount> = counts
        .into_iter()
        .map(|(form, count)| FormCount { form, count })
        .collect();
    distribution.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.form.label().cmp(b.form.label()))
    });
    distribution
}

fn slot_distribution(counts: HashMap<SlotType, usize>) -> Vec<SlotCount> {
    let mut distribution: Vec<SlotCount> = counts
        .into_iter()
        .map(|(slot, count)| SlotCount { slot, count })
        .collect();
    distribution.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.slot.label().cmp(b.slot.label()))
    });
    distribution
}
