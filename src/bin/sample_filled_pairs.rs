//! Deals random scenario/response pairings and prints the filled text
//! with its classification, for eyeballing how the content plays.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fitcheck::{Category, Corpus, Lexicon, evaluate};
use rand::prelude::IndexedRandom;
use serde::Deserialize;

#[derive(Debug)]
struct Args {
    cards: PathBuf,
    count: usize,
    category: Option<String>,
    bad_only: bool,
}

#[derive(Debug, Deserialize)]
struct CategoryJson {
    name: String,
    #[serde(default)]
    scenarios: Vec<String>,
    #[serde(default)]
    responses: Vec<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut cards = PathBuf::from("data/cards.json");
    let mut count = 10usize;
    let mut category = None;
    let mut bad_only = false;

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--cards" => {
                cards = PathBuf::from(
                    iter.next()
                        .ok_or_else(|| "--cards requires a path".to_string())?,
                );
            }
            "--count" => {
                let raw = iter
                    .next()
                    .ok_or_else(|| "--count requires a number".to_string())?;
                count = raw
                    .parse::<usize>()
                    .map_err(|e| format!("invalid --count value '{raw}': {e}"))?;
            }
            "--category" => {
                category = Some(
                    iter.next()
                        .ok_or_else(|| "--category requires a key".to_string())?,
                );
            }
            "--bad-only" => {
                bad_only = true;
            }
            _ => {
                return Err(format!(
                    "unknown argument '{arg}'. supported: --cards <path> --count <n> --category <key> --bad-only"
                ));
            }
        }
    }

    Ok(Args {
        cards,
        count,
        category,
        bad_only,
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

fn sample_category(category: &Category, lexicon: &Lexicon, count: usize, bad_only: bool) {
    let mut rng = rand::rng();

    println!("\n  {}:", category.name);
    if category.scenarios.is_empty() || category.responses.is_empty() {
        println!("    (nothing to deal)");
        return;
    }

    let mut dealt = 0usize;
    // Bad pairings can be rare; cap the redraws so a clean category
    // terminates.
    let mut attempts = 0usize;
    let max_attempts = count.saturating_mul(50).max(100);

    while dealt < count && attempts < max_attempts {
        attempts += 1;
        let Some(scenario) = category.scenarios.choose(&mut rng) else {
            break;
        };
        let Some(response) = category.responses.choose(&mut rng) else {
            break;
        };
        let Some(verdict) = evaluate(scenario, response, lexicon) else {
            continue;
        };
        if bad_only && verdict.ok {
            continue;
        }
        dealt += 1;
        let tag = if verdict.ok { "OK " } else { "BAD" };
        println!(
            "    [{tag}] {} ({} + {})",
            verdict.filled,
            verdict.slot.label(),
            verdict.form.label()
        );
    }

    if dealt < count {
        println!("    ({dealt} dealt; no more matching pairings found)");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args().map_err(io::Error::other)?;

    let corpus = load_corpus(&args.cards)?;
    let lexicon = Lexicon::builtin();
    eprintln!(
        "[INFO] dealing {} pairing(s) per category from {}",
        args.count,
        args.cards.display()
    );

    match &args.category {
        Some(key) => {
            let Some(category) = corpus.get(key) else {
                return Err(io::Error::other(format!("unknown category '{key}'")).into());
            };
            sample_category(category, &lexicon, args.count, args.bad_only);
        }
        None => {
            for category in &corpus.categories {
                sample_category(category, &lexicon, args.count, args.bad_only);
            }
        }
    }

    Ok(())
}
