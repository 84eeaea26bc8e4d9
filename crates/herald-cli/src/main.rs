use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use herald_core::typed::classify;
use herald_core::{DynDescriptor, Event, EventRegistry, HeraldError, Predicate};

#[derive(Debug, Serialize, Deserialize)]
struct OrderPlaced {
    order_id: String,
    amount_cents: u64,
}

struct OrderPlacedEvent;

impl Event for OrderPlacedEvent {
    const NAME: &'static str = "shop.order.placed";
    type Payload = OrderPlaced;
}

/// 入力を分類するための descriptor 一式
fn catalog(registry: &EventRegistry) -> Vec<Box<dyn DynDescriptor>> {
    vec![
        Box::new(registry.define::<serde_json::Value>(
            "user.login",
            Some(Predicate::has_field("userId")),
        )),
        Box::new(registry.define_no_payload("user.logout")),
        Box::new(registry.define_event::<OrderPlacedEvent>()),
    ]
}

/// 1 行 1 JSON を読んで、行ごとに一致した event か不一致の理由を出す
fn run(
    input: impl BufRead,
    catalog: &[Box<dyn DynDescriptor>],
    out: &mut impl Write,
) -> Result<(), HeraldError> {
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let candidate: serde_json::Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(line = lineno, error = %e, "skipping invalid json");
                writeln!(out, "{lineno}: invalid json")?;
                continue;
            }
        };

        match classify(catalog, &candidate) {
            Ok(event) => writeln!(out, "{lineno}: {event}")?,
            Err(reasons) => {
                let reasons: Vec<String> = reasons.iter().map(ToString::to_string).collect();
                writeln!(out, "{lineno}: unmatched ({})", reasons.join("; "))?;
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env("HERALD_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // (A) registry と descriptor を用意
    let registry = EventRegistry::new();
    let catalog = catalog(&registry);

    // (B) 入力: 引数があればファイル、なければ stdin
    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => match File::open(&path) {
            Ok(f) => Box::new(BufReader::new(f)),
            Err(e) => {
                tracing::error!(path = %path, error = %e, "cannot open input");
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(BufReader::new(io::stdin())),
    };

    // (C) 分類
    let mut stdout = io::stdout().lock();
    match run(input, &catalog, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "failed to read input");
            ExitCode::FAILURE
        }
    }
}
