//! petforge: command-line front end for petforge-core.
//!
//! Usage:
//!   petforge pet --seed guest-12345
//!   petforge pet --seed batch --count 100
//!   petforge pet --seed guest-12345 --stamp
//!   petforge adventure --seed quest-seed-1 --party 4
//!   petforge summary --seed batch --count 10000
//!   petforge check --config petforge.json

use anyhow::{bail, Result};
use chrono::Utc;
use petforge_core::{config::GeneratorConfig, fresh_seed, Generator, RarityTier};
use std::collections::BTreeMap;
use std::env;
use std::io::{self, Write};
use std::str::FromStr;

const USAGE: &str =
    "usage: petforge <pet|adventure|summary|check> [--seed S] [--count N] [--party N] [--stamp] [--config path]";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(command) = args.get(1).map(String::as_str) else {
        eprintln!("{USAGE}");
        bail!("missing subcommand");
    };

    let config = match flag_value(&args, "--config") {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    config.validate()?;
    let generator = Generator::new(config);

    let count: usize = parse_flag(&args, "--count")?.unwrap_or(0);
    let stamp = args.iter().any(|a| a == "--stamp");
    let party: Option<u8> = parse_flag(&args, "--party")?;
    let seed = match flag_value(&args, "--seed") {
        Some(s) => s.to_string(),
        None => {
            let minted = fresh_seed();
            log::info!("no --seed given, minted {minted}");
            minted
        }
    };
    let seeds = expand_seeds(&seed, count);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        "pet" => {
            for s in &seeds {
                let pet = if stamp {
                    generator.generate_pet_at(s, Utc::now())
                } else {
                    generator.generate_pet(s)
                };
                writeln!(out, "{}", serde_json::to_string(&pet)?)?;
            }
        }
        "adventure" => {
            for s in &seeds {
                let adventure = generator.generate_adventure(s, party)?;
                writeln!(out, "{}", serde_json::to_string(&adventure)?)?;
            }
        }
        "summary" => print_summary(&mut out, &generator, &seeds)?,
        "check" => {
            let missing = generator.missing_tokens();
            if missing.is_empty() {
                writeln!(out, "vocabulary ok: {} token families", generator.registry().len())?;
            } else {
                for token in &missing {
                    writeln!(out, "missing: ${{{token}}}")?;
                }
                bail!("{} unresolved token(s)", missing.len());
            }
        }
        other => {
            eprintln!("{USAGE}");
            bail!("unknown subcommand {other:?}");
        }
    }

    Ok(())
}

/// `--count N` turns one base seed into `S-0 .. S-(N-1)`.
fn expand_seeds(base: &str, count: usize) -> Vec<String> {
    if count == 0 {
        vec![base.to_string()]
    } else {
        (0..count).map(|i| format!("{base}-{i}")).collect()
    }
}

fn print_summary(out: &mut impl Write, generator: &Generator, seeds: &[String]) -> Result<()> {
    let mut tiers: BTreeMap<RarityTier, usize> = RarityTier::ALL.iter().map(|t| (*t, 0)).collect();
    let mut species: BTreeMap<String, usize> = BTreeMap::new();

    for s in seeds {
        let pet = generator.generate_pet(s);
        *tiers.entry(pet.rarity_tier).or_default() += 1;
        *species.entry(pet.species.to_string()).or_default() += 1;
    }

    let total = seeds.len().max(1) as f64;
    writeln!(out, "=== RARITY SUMMARY ({} pets) ===", seeds.len())?;
    for (tier, n) in &tiers {
        writeln!(out, "  {:<10} {n:>7}  {:>6.2}%", tier.label(), *n as f64 / total * 100.0)?;
    }
    writeln!(out)?;
    writeln!(out, "=== SPECIES ===")?;
    for (name, n) in &species {
        writeln!(out, "  {name:<10} {n:>7}  {:>6.2}%", *n as f64 / total * 100.0)?;
    }
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

/// Value of `flag`, parsed. A present but malformed value is an error,
/// never a silent default.
fn parse_flag<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match flag_value(args, flag) {
        Some(raw) => match raw.parse() {
            Ok(v) => Ok(Some(v)),
            Err(e) => bail!("invalid value {raw:?} for {flag}: {e}"),
        },
        None => Ok(None),
    }
}
