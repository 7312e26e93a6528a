//! cclp - ChronoCode language packer
//!
//! Encodes word squares into the fixed 1814-byte pack files the watchface
//! loads at runtime.
//!
//! Usage:
//!   cclp -o packs                     # every shipped language
//!   cclp -o packs -l de_DE -l fr_FR   # selected languages
//!   cclp -o packs --json custom.json  # a hand-authored pack
//!   cclp --dump-json pt_PT > pt.json  # starting point for authoring

use anyhow::{Context, Result};
use chronocode_core::languages;
use chronocode_core::logging;
use chronocode_core::persistence::write_pack_file;
use chronocode_core::{LanguageId, LanguagePack};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cclp")]
#[command(about = "Pack ChronoCode language tables")]
struct Args {
    /// Directory the pack files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Shipped language to pack, by code or id (repeatable)
    #[arg(short, long = "language")]
    languages: Vec<String>,

    /// JSON pack definition to pack (repeatable)
    #[arg(long)]
    json: Vec<PathBuf>,

    /// Print a shipped language as JSON instead of packing
    #[arg(long, value_name = "CODE")]
    dump_json: Option<String>,
}

fn read_json_pack(path: &PathBuf) -> Result<LanguagePack> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    logging::init(LevelFilter::INFO);

    let args = Args::parse();

    if let Some(code) = &args.dump_json {
        let pack = languages::builtin(LanguageId::from_code(code)?);
        println!("{}", serde_json::to_string_pretty(&pack)?);
        return Ok(());
    }

    let mut packs = Vec::new();
    for code in &args.languages {
        packs.push(languages::builtin(LanguageId::from_code(code)?));
    }
    for path in &args.json {
        packs.push(read_json_pack(path)?);
    }
    if packs.is_empty() {
        packs.extend(languages::all());
    }

    for pack in &packs {
        pack.validate()
            .with_context(|| format!("{} failed validation, nothing written for it", pack.id()))?;
        let path = write_pack_file(pack, &args.out_dir)
            .with_context(|| format!("writing {}", pack.id()))?;
        println!("{}", path.display());
    }
    tracing::info!(count = packs.len(), dir = %args.out_dir.display(), "packing complete");
    Ok(())
}
