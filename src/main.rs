use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use serde_json::{Value, json};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use match_insight::api::{self, ApiResponse};
use match_insight::config;
use match_insight::engine::PredictionEngine;

struct CliArgs {
    engine: Option<PredictionEngine>,
    batch: bool,
    input: Option<PathBuf>,
}

fn main() {
    init_logging();

    // Every outcome prints a JSON body; the exit code says whether it succeeded.
    let ok = match run() {
        Ok(ok) => ok,
        Err(err) => {
            warn!("{err:#}");
            println!("{:#}", json!({ "error": format!("{err:#}") }));
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn run() -> Result<bool> {
    let args = parse_args()?;
    let cfg = (*config::engine_config()).with_engine(args.engine);
    info!(engine = cfg.engine.name(), "engine selected");

    let raw = read_input(args.input.as_ref())?;

    if args.batch {
        let requests: Vec<Value> =
            serde_json::from_str(raw.trim()).context("batch input must be a JSON array")?;
        let responses: Vec<ApiResponse> = requests
            .par_iter()
            .map(|body| api::handle_predict_value(cfg.engine, body))
            .collect();
        let failed = responses.iter().filter(|r| !r.is_success()).count();
        info!(total = responses.len(), failed, "batch complete");
        let bodies = responses.into_iter().map(|r| r.body).collect::<Vec<_>>();
        println!("{:#}", Value::Array(bodies));
        Ok(failed == 0)
    } else {
        let response = api::handle_predict(cfg.engine, &raw);
        println!("{:#}", response.body);
        Ok(response.is_success())
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,match_insight=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read request from stdin")?;
            Ok(buf)
        }
    }
}

fn parse_args() -> Result<CliArgs> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut out = CliArgs {
        engine: None,
        batch: false,
        input: None,
    };

    let mut idx = 0;
    while idx < args.len() {
        let arg = &args[idx];
        if let Some(name) = arg.strip_prefix("--engine=") {
            out.engine = Some(name.parse::<PredictionEngine>().map_err(|e: String| anyhow!(e))?);
        } else if arg == "--engine" {
            let name = args
                .get(idx + 1)
                .context("--engine needs a value (consistent or heuristic)")?;
            out.engine = Some(name.parse::<PredictionEngine>().map_err(|e: String| anyhow!(e))?);
            idx += 1;
        } else if arg == "--batch" {
            out.batch = true;
        } else if arg.starts_with("--") {
            return Err(anyhow!(
                "unknown flag {arg}\nusage: match_insight [--engine=<consistent|heuristic>] [--batch] [FILE]"
            ));
        } else if !arg.trim().is_empty() {
            out.input = Some(PathBuf::from(arg));
        }
        idx += 1;
    }

    Ok(out)
}
