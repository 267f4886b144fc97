//! Fitcheck - grammar fit report for fill-in-the-blank card content.
//!
//! Crosses every scenario against every response per category, classifies
//! both sides, and reports the pairings that do not read correctly.
//!
//! ## Usage
//!
//! ```
//! fitcheck [OPTIONS]
//!
//! Options:
//!   --cards <path>      Content file (default: data/cards.json)
//!   --category <key>    Also print a per-scenario deep dive for one category
//!   --examples <n>      Bad examples kept per issue group (default: 5)
//!   --lexicon <path>    Vocabulary override file
//!   --json-out <path>   Write the full report as JSON
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fitcheck::{
    AnalyzeConfig, Category, CategoryReport, Corpus, FormType, Lexicon, Report, analyze_with,
    classify_form, classify_slot, compatible,
};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
struct Args {
    cards: PathBuf,
    category: Option<String>,
    examples: usize,
    lexicon: Option<PathBuf>,
    json_out: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct CategoryJson {
    name: String,
    #[serde(default)]
    scenarios: Vec<String>,
    #[serde(default)]
    responses: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LexiconJson {
    gerund_roots: Option<Vec<String>>,
    adjective_leads: Option<Vec<String>>,
    noun_indicators: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    total_pairs: usize,
    ok_pairs: usize,
    bad_pairs: usize,
    bad_pct: f64,
    categories: Vec<JsonCategory>,
}

#[derive(Debug, Serialize)]
struct JsonCategory {
    key: String,
    name: String,
    total_pairs: usize,
    ok_pairs: usize,
    bad_pairs: usize,
    bad_pct: f64,
    skipped_scenarios: usize,
    bad_groups: Vec<JsonBadGroup>,
    scenarios_implicated: Vec<JsonScenarioIssue>,
    form_distribution: Vec<JsonCount>,
    slot_distribution: Vec<JsonSlotCount>,
}

#[derive(Debug, Serialize)]
struct JsonBadGroup {
    slot: String,
    form: String,
    count: usize,
    examples: Vec<JsonBadPair>,
}

#[derive(Debug, Serialize)]
struct JsonBadPair {
    scenario: String,
    response: String,
    filled: String,
}

#[derive(Debug, Serialize)]
struct JsonScenarioIssue {
    scenario: String,
    bad_pairs: usize,
}

#[derive(Debug, Serialize)]
struct JsonCount {
    label: String,
    count: usize,
}

#[derive(Debug, Serialize)]
struct JsonSlotCount {
    label: String,
    count: usize,
    accepts: Vec<String>,
}

fn usage() {
    eprintln!(
        "Usage: fitcheck [--cards <path>] [--category <key>] [--examples <n>] \\
  [--lexicon <path>] [--json-out <path>]"
    );
}

fn parse_args() -> Result<Args, String> {
    let mut cards = PathBuf::from("data/cards.json");
    let mut category = None;
    let mut examples = 5usize;
    let mut lexicon = None;
    let mut json_out = None;

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--cards" => {
                cards = PathBuf::from(
                    iter.next()
                        .ok_or_else(|| "--cards requires a path".to_string())?,
                );
            }
            "--category" => {
                category = Some(
                    iter.next()
                        .ok_or_else(|| "--category requires a key".to_string())?,
                );
            }
            "--examples" => {
                let raw = iter
                    .next()
                    .ok_or_else(|| "--examples requires a number".to_string())?;
                examples = raw
                    .parse::<usize>()
                    .map_err(|e| format!("invalid --examples value '{raw}': {e}"))?;
            }
            "--lexicon" => {
                lexicon = Some(PathBuf::from(
                    iter.next()
                        .ok_or_else(|| "--lexicon requires a path".to_string())?,
                ));
            }
            "--json-out" => {
                json_out = Some(PathBuf::from(
                    iter.next()
                        .ok_or_else(|| "--json-out requires a path".to_string())?,
                ));
            }
            "-h" | "--help" => {
                usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument '{arg}'"));
            }
        }
    }

    Ok(Args {
        cards,
        category,
        examples,
        lexicon,
        json_out,
    })
}

fn load_corpus(path: &Path) -> Result<Corpus, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let parsed: BTreeMap<String, CategoryJson> = serde_json::from_str(&raw)?;
    Ok(Corpus::new(
        parsed
            .into_iter()
            .map(|(key, cat)| Category {
                key,
                name: cat.name,
                scenarios: cat.scenarios,
                responses: cat.responses,
            })
            .collect(),
    ))
}

fn load_lexicon(path: Option<&Path>) -> Result<Lexicon, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(Lexicon::builtin());
    };
    let raw = fs::read_to_string(path)?;
    let parsed: LexiconJson = serde_json::from_str(&raw)?;
    let builtin = Lexicon::builtin();
    Ok(Lexicon::new(
        parsed
            .gerund_roots
            .unwrap_or_else(|| builtin.gerund_roots().to_vec()),
        parsed
            .adjective_leads
            .unwrap_or_else(|| builtin.adjective_leads().to_vec()),
        parsed
            .noun_indicators
            .unwrap_or_else(|| builtin.noun_indicators().to_vec()),
    ))
}

/// Clip a string for one-line display, on a char boundary.
fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(max_chars).collect();
        clipped.push_str("...");
        clipped
    }
}

fn banner(ch: char) -> String {
    ch.to_string().repeat(100)
}

fn render_category(cat: &CategoryReport) {
    println!("\n{}", banner('-'));
    println!("  Category: {}", cat.name);
    println!(
        "  Total pairs: {} | OK: {} ({:.1}%) | BAD: {} ({:.1}%)",
        cat.total_pairs,
        cat.ok_pairs(),
        cat.ok_pct(),
        cat.bad_pairs,
        cat.bad_pct()
    );
    if cat.skipped_scenarios > 0 {
        println!(
            "  Skipped: {} template(s) without a usable blank",
            cat.skipped_scenarios
        );
    }

    if !cat.bad_groups.is_empty() {
        let mut groups: Vec<_> = cat.bad_groups.iter().collect();
        groups.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.slot.label().cmp(b.slot.label()))
        });
        println!("  Issue breakdown:");
        for group in groups {
            println!(
                "    {} + {}: {} bad pairs",
                group.slot.label(),
                group.form.label(),
                group.count
            );
            if let Some(example) = group.examples.first() {
                println!("      e.g. \"{}\"", excerpt(&example.filled, 90));
            }
        }
    }

    if !cat.scenario_issues.is_empty() {
        let mut issues: Vec<_> = cat.scenario_issues.iter().collect();
        issues.sort_by(|a, b| b.bad_pairs.cmp(&a.bad_pairs));
        println!(
            "  Scenarios causing most issues ({}):",
            cat.scenario_issues.len()
        );
        for issue in issues.into_iter().take(5) {
            println!(
                "    \"{}\" -> {} bad responses",
                excerpt(&issue.scenario, 70),
                issue.bad_pairs
            );
        }
    }
}

fn render_distributions(report: &Report) {
    println!("\n{}", banner('='));
    println!("RESPONSE FORM DISTRIBUTION PER CATEGORY");
    println!("{}", banner('='));
    for cat in &report.categories {
        let total: usize = cat.form_distribution.iter().map(|f| f.count).sum();
        println!("\n  {}:", cat.name);
        for entry in &cat.form_distribution {
            let pct = if total > 0 {
                entry.count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            println!("    {}: {} ({:.0}%)", entry.form.label(), entry.count, pct);
        }
    }

    println!("\n{}", banner('='));
    println!("SCENARIO SLOT DISTRIBUTION PER CATEGORY");
    println!("{}", banner('='));
    for cat in &report.categories {
        let total: usize =
            cat.slot_distribution.iter().map(|s| s.count).sum::<usize>() + cat.skipped_scenarios;
        println!("\n  {}:", cat.name);
        for entry in &cat.slot_distribution {
            let pct = if total > 0 {
                entry.count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            let accepts: Vec<&str> = entry
                .slot
                .accepted_forms()
                .iter()
                .map(|form| form.label())
                .collect();
            println!(
                "    {}: {} ({:.0}%) - accepts: {}",
                entry.slot.label(),
                entry.count,
                pct,
                accepts.join(", ")
            );
        }
        if cat.skipped_scenarios > 0 {
            println!("    (not analyzable: {})", cat.skipped_scenarios);
        }
    }
}

fn render_report(report: &Report) {
    println!("{}", banner('='));
    println!("GRAMMAR FIT ANALYSIS - every scenario x every response");
    println!("{}", banner('='));

    for cat in &report.categories {
        render_category(cat);
    }

    println!("\n{}", banner('='));
    println!(
        "OVERALL: {} pairs tested | {} OK ({:.1}%) | {} BAD ({:.1}%)",
        report.total_pairs,
        report.ok_pairs(),
        report.ok_pct(),
        report.bad_pairs,
        report.bad_pct()
    );
    println!("{}", banner('='));

    render_distributions(report);
}

fn render_deep_dive(category: &Category, lexicon: &Lexicon) {
    println!("\n{}", banner('='));
    println!("DEEP DIVE: {}", category.name);
    println!("{}", banner('='));

    let response_forms: Vec<(&String, FormType)> = category
        .responses
        .iter()
        .map(|response| (response, classify_form(response, lexicon)))
        .collect();

    for scenario in &category.scenarios {
        let Some((slot, _)) = classify_slot(scenario) else {
            println!("\n  \"{}\" [no usable blank]", excerpt(scenario, 70));
            continue;
        };
        let mut ok = 0usize;
        let mut bad_responses: Vec<(&String, FormType)> = Vec::new();
        for (response, form) in &response_forms {
            if compatible(slot, *form) {
                ok += 1;
            } else {
                bad_responses.push((response, *form));
            }
        }
        let total = ok + bad_responses.len();
        let pct_ok = if total > 0 {
            ok as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        println!("\n  \"{}\" [{}]", excerpt(scenario, 70), slot.label());
        println!(
            "    OK: {ok}/{total} ({pct_ok:.0}%) | BAD: {}",
            bad_responses.len()
        );
        for (response, form) in bad_responses.iter().take(3) {
            println!("      x \"{}\" [{}]", excerpt(response, 60), form.label());
        }
    }
}

fn json_report(report: &Report) -> JsonReport {
    JsonReport {
        total_pairs: report.total_pairs,
        ok_pairs: report.ok_pairs(),
        bad_pairs: report.bad_pairs,
        bad_pct: report.bad_pct(),
        categories: report
            .categories
            .iter()
            .map(|cat| JsonCategory {
                key: cat.key.clone(),
                name: cat.name.clone(),
                total_pairs: cat.total_pairs,
                ok_pairs: cat.ok_pairs(),
                bad_pairs: cat.bad_pairs,
                bad_pct: cat.bad_pct(),
                skipped_scenarios: cat.skipped_scenarios,
                bad_groups: cat
                    .bad_groups
                    .iter()
                    .map(|group| JsonBadGroup {
                        slot: group.slot.label().to_string(),
                        form: group.form.label().to_string(),
                        count: group.count,
                        examples: group
                            .examples
                            .iter()
                            .map(|v| JsonBadPair {
                                scenario: v.scenario.clone(),
                                response: v.response.clone(),
                                filled: v.filled.clone(),
                            })
                            .collect(),
                    })
                    .collect(),
                scenarios_implicated: cat
                    .scenario_issues
                    .iter()
                    .map(|issue| JsonScenarioIssue {
                        scenario: issue.scenario.clone(),
                        bad_pairs: issue.bad_pairs,
                    })
                    .collect(),
                form_distribution: cat
                    .form_distribution
                    .iter()
                    .map(|entry| JsonCount {
                        label: entry.form.label().to_string(),
                        count: entry.count,
                    })
                    .collect(),
                slot_distribution: cat
                    .slot_distribution
                    .iter()
                    .map(|entry| JsonSlotCount {
                        label: entry.slot.label().to_string(),
                        count: entry.count,
                        accepts: entry
                            .slot
                            .accepted_forms()
                            .iter()
                            .map(|form| form.label().to_string())
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args().map_err(io::Error::other)?;

    let corpus = load_corpus(&args.cards)?;
    let lexicon = load_lexicon(args.lexicon.as_deref())?;
    eprintln!(
        "[INFO] loaded {} categories from {}",
        corpus.len(),
        args.cards.display()
    );

    let config = AnalyzeConfig {
        examples_per_group: args.examples,
    };
    let report = analyze_with(&corpus, &lexicon, &config);

    render_report(&report);

    if let Some(key) = &args.category {
        let Some(category) = corpus.get(key) else {
            return Err(io::Error::other(format!("unknown category '{key}'")).into());
        };
        render_deep_dive(category, &lexicon);
    }

    if let Some(path) = &args.json_out {
        let payload = serde_json::to_string_pretty(&json_report(&report))?;
        fs::write(path, payload)?;
        eprintln!("[INFO] JSON report: {}", path.display());
    }

    Ok(())
}
