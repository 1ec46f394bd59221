//! Dump the compiled form of a model JSON: the entity catalog plus one
//! atom sequence per pattern.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use libintent_core::pattern::compile;
use libintent_core::{Locale, PatternAtom, PatternModel};

#[derive(Parser)]
#[command(about = "Inspect the compiled patterns and entities of a model JSON")]
struct Args {
    /// Model JSON document.
    #[arg(long)]
    model: PathBuf,

    /// Locale the patterns compile under.
    #[arg(long, default_value = "en-us")]
    locale: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let locale = Locale::parse(&args.locale);
    let model = PatternModel::from_json_file("inspect", &args.model)?;

    println!("entities:");
    for decl in model.entities() {
        println!("  {} = {:?}", decl.name, decl.build(&locale));
    }
    println!("patterns:");
    for intent in model.intents() {
        let atoms = compile(&intent.phrase, &locale)?;
        println!("  [{}] {}", intent.intent_id, render(&atoms));
    }
    Ok(())
}

fn render(atoms: &[PatternAtom]) -> String {
    atoms
        .iter()
        .map(|atom| match atom {
            PatternAtom::Literal(word) => word.clone(),
            PatternAtom::Slot { key, .. } => format!("{{{key}}}"),
            PatternAtom::Optional(alts) => format!("[{}]", render_alternatives(alts)),
            PatternAtom::AltGroup(alts) => format!("({})", render_alternatives(alts)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_alternatives(alternatives: &[Vec<PatternAtom>]) -> String {
    alternatives
        .iter()
        .map(|seq| render(seq))
        .collect::<Vec<_>>()
        .join("|")
}
