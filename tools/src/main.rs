//! Recognize intents in command-line utterances with a pattern model.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use libintent_core::{Config, IntentRecognizer, PatternModel};

#[derive(Parser)]
#[command(about = "Match utterances against a pattern model JSON")]
struct Args {
    /// Model JSON document.
    #[arg(long)]
    model: PathBuf,

    /// Locale tag for tokenization and numeral tables.
    #[arg(long, default_value = "en-us")]
    locale: String,

    /// Optional TOML config with ranking knobs.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit one JSON object per utterance instead of plain text.
    #[arg(long)]
    json: bool,

    /// Emit matching traces to stderr.
    #[arg(long)]
    verbose: bool,

    /// Utterances to recognize.
    #[arg(required = true)]
    utterances: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = match &args.config {
        Some(path) => Config::load_toml(path)?,
        None => Config::default(),
    };
    let recognizer = IntentRecognizer::with_config(&args.locale, config);

    let model_id = args
        .model
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("model");
    let model = PatternModel::from_json_file(model_id, &args.model)?;
    recognizer.apply_models(&[model])?;

    for utterance in &args.utterances {
        let result = recognizer.recognize_once(utterance);
        if args.json {
            let entities: serde_json::Map<String, serde_json::Value> = result
                .entities()
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect();
            let detailed: serde_json::Value =
                serde_json::from_str(&result.detailed_json()).unwrap_or_default();
            let line = serde_json::json!({
                "utterance": utterance,
                "intentId": result.intent_id(),
                "entities": entities,
                "detailed": detailed,
            });
            println!("{line}");
            continue;
        }
        println!("{utterance}");
        if result.is_match() {
            println!("  intent: {}", result.intent_id());
            for (key, value) in result.entities() {
                println!("  {key} = {value}");
            }
            println!("  detailed: {}", result.detailed_json());
        } else {
            println!("  no match");
        }
    }
    Ok(())
}
