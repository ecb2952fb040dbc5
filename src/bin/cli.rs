// File: ./src/bin/cli.rs
use anyhow::{Result, bail};
use chrono::{Local, NaiveDate, NaiveDateTime};
use parlance::model::IntentDisplay;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::io::{self, BufRead, Write};

fn parse_reference(value: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Ok(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(d.and_hms_opt(0, 0, 0).expect("midnight is always valid"));
    }
    bail!("Invalid --date '{}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM", value)
}

fn render(intent: &parlance::ParsedIntent, as_json: bool) -> Result<String> {
    if as_json {
        Ok(serde_json::to_string_pretty(intent)?)
    } else {
        Ok(intent.confirmation())
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let binary_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("parlance")
        .to_string();

    let mut as_json = false;
    let mut verbose = false;
    let mut reference: Option<NaiveDateTime> = None;
    let mut words: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" | "help" => {
                parlance::cli::print_help(&binary_name);
                return Ok(());
            }
            "-j" | "--json" => as_json = true,
            "-v" | "--verbose" => verbose = true,
            "-d" | "--date" => {
                let Some(value) = args.get(i + 1) else {
                    bail!("--date requires a value");
                };
                reference = Some(parse_reference(value)?);
                i += 1;
            }
            other => words.push(other.to_string()),
        }
        i += 1;
    }

    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();

    let reference = reference.unwrap_or_else(|| Local::now().naive_local());

    if !words.is_empty() {
        let intent = parlance::parse_at(&words.join(" "), reference);
        println!("{}", render(&intent, as_json)?);
        return Ok(());
    }

    // No utterance given: parse stdin line by line.
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let intent = parlance::parse_at(&line, reference);
        writeln!(stdout, "{}", render(&intent, as_json)?)?;
    }
    Ok(())
}
