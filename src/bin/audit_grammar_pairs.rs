//! Emits a JSONL row for every scenario/response pairing that does not
//! read correctly, plus a summary of the worst (slot, form) combinations.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use fitcheck::{Category, Corpus, FormType, Lexicon, classify_form, classify_slot, compatible};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
struct Args {
    cards: PathBuf,
    out: String,
    limit: Option<usize>,
    examples: usize,
    all: bool,
}

#[derive(Debug, Deserialize)]
struct CategoryJson {
    name: String,
    #[serde(default)]
    scenarios: Vec<String>,
    #[serde(default)]
    responses: Vec<String>,
}

#[derive(Debug, Serialize)]
struct AuditRow {
    index: usize,
    category: String,
    scenario: String,
    response: String,
    filled: String,
    slot: String,
    form: String,
    ok: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut cards = PathBuf::from("data/cards.json");
    let mut out = "/tmp/grammar_audit.jsonl".to_string();
    let mut limit = None;
    let mut examples = 20usize;
    let mut all = false;

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--cards" => {
                cards = PathBuf::from(
                    iter.next()
                        .ok_or_else(|| "--cards requires a path".to_string())?,
                );
            }
            "--out" => {
                out = iter
                    .next()
                    .ok_or_else(|| "--out requires a path".to_string())?;
            }
            "--limit" => {
                let raw = iter
                    .next()
                    .ok_or_else(|| "--limit requires a number".to_string())?;
                limit = Some(
                    raw.parse::<usize>()
                        .map_err(|e| format!("invalid --limit value '{raw}': {e}"))?,
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
            "--all" => {
                all = true;
            }
            _ => {
                return Err(format!(
                    "unknown argument '{arg}'. supported: --cards <path> --out <path> --limit <n> --examples <n> --all"
                ));
            }
        }
    }

    Ok(Args {
        cards,
        out,
        limit,
        examples,
        all,
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args().map_err(io::Error::other)?;

    let corpus = load_corpus(&args.cards)?;
    let lexicon = Lexicon::builtin();

    let out_file = File::create(&args.out)?;
    let mut writer = BufWriter::new(out_file);

    let mut total = 0usize;
    let mut bad = 0usize;
    let mut skipped_scenarios = 0usize;
    let mut rows_written = 0usize;
    let mut group_counts: HashMap<(String, String), usize> = HashMap::new();

    'categories: for category in &corpus.categories {
        let response_forms: Vec<(&String, FormType)> = category
            .responses
            .iter()
            .map(|response| (response, classify_form(response, &lexicon)))
            .collect();

        for scenario in &category.scenarios {
            // Normalize the authored casing for the filled text; the
            // classifier lowercases on its own.
            let Some(normalized) = fitcheck::normalize(scenario) else {
                skipped_scenarios += 1;
                continue;
            };
            let Some((slot, _)) = classify_slot(&normalized) else {
                skipped_scenarios += 1;
                continue;
            };
            for (response, form) in &response_forms {
                if let Some(limit) = args.limit
                    && total >= limit
                {
                    break 'categories;
                }
                total += 1;
                let ok = compatible(slot, *form);
                if !ok {
                    bad += 1;
                    *group_counts
                        .entry((slot.label().to_string(), form.label().to_string()))
                        .or_insert(0) += 1;
                }
                if ok && !args.all {
                    continue;
                }
                rows_written += 1;
                let row = AuditRow {
                    index: total,
                    category: category.key.clone(),
                    scenario: scenario.clone(),
                    response: (*response).clone(),
                    filled: fitcheck::fill(&normalized, response),
                    slot: slot.label().to_string(),
                    form: form.label().to_string(),
                    ok,
                };
                serde_json::to_writer(&mut writer, &row)?;
                writer.write_all(b"\n")?;
            }
        }
    }

    writer.flush()?;

    println!("Audit complete");
    println!("- Total pairs evaluated: {total}");
    println!("- Bad pairs: {bad}");
    println!("- Scenarios skipped (no usable blank): {skipped_scenarios}");
    println!("- Rows written: {rows_written}");
    println!("- JSONL report: {}", args.out);

    if !group_counts.is_empty() {
        let mut top: Vec<((String, String), usize)> = group_counts.into_iter().collect();
        top.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        println!("Worst slot/form combinations:");
        for ((slot, form), count) in top.into_iter().take(args.examples) {
            println!("  - {slot} + {form}: {count}");
        }
    }

    Ok(())
}
