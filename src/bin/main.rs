//! Line-protocol bridge between a host display and the watchface engine.
//!
//! Commands arrive on stdin, one per line:
//!
//!   TICK <hour> <minute>
//!   LANGUAGE <id|code>
//!   SETTINGS <json>
//!   SYNC <key> <value>
//!   EXIT
//!
//! Replies go to stdout: `WORD <index> ON|OFF <text>` for every word whose
//! visible state changed, `MINUTE <offset>` when the corner dot moves, and
//! `ERROR <message>` for rejected commands. Logs go to stderr.
use anyhow::{bail, Context, Result};
use chronocode_core::core::types::WORD_COUNT;
use chronocode_core::logging;
use chronocode_core::persistence::{load_settings_or_default, save_settings};
use chronocode_core::render::{MinuteIndicator, WordRenderer};
use chronocode_core::settings::SettingsUpdate;
use chronocode_core::{BuiltinPacks, DirectoryPacks, LanguageId, PackSource, WatchFace, WordIndex};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chronocode_engine")]
#[command(about = "Drive a ChronoCode word square over stdin/stdout")]
struct Args {
    /// Settings file, created on first save
    #[arg(long, default_value = "chronocode.settings.bin")]
    settings: PathBuf,

    /// Directory of packed languages; the compiled-in tables are used when absent
    #[arg(long)]
    packs: Option<PathBuf>,
}

/// The word states the host currently shows, so only changes are sent.
struct WordLines {
    shown: [Option<bool>; WORD_COUNT],
    pending: Vec<(WordIndex, bool)>,
}

impl WordLines {
    fn new() -> Self {
        Self {
            shown: [None; WORD_COUNT],
            pending: Vec::new(),
        }
    }

    fn flush(&mut self, face: &WatchFace, out: &mut impl Write) -> io::Result<()> {
        let pack = face.pack();
        let all_caps = face.settings().all_caps_when_off;
        for (index, on) in self.pending.drain(..) {
            let Some(word) = pack.words().get(index) else {
                continue;
            };
            if word.is_blank() {
                continue;
            }
            let state = if on { "ON" } else { "OFF" };
            writeln!(out, "WORD {} {} {}", index, state, word.display_text(on, all_caps))?;
        }
        Ok(())
    }
}

impl WordRenderer for WordLines {
    fn set_word_state(&mut self, index: WordIndex, on: bool) {
        let slot = &mut self.shown[index as usize];
        if *slot != Some(on) {
            *slot = Some(on);
            self.pending.push((index, on));
        }
    }
}

#[derive(Default)]
struct CornerDot {
    shown: Option<u8>,
    changed: bool,
}

impl CornerDot {
    fn flush(&mut self, out: &mut impl Write) -> io::Result<()> {
        if let (true, Some(offset)) = (self.changed, self.shown) {
            writeln!(out, "MINUTE {}", offset)?;
        }
        self.changed = false;
        Ok(())
    }
}

impl MinuteIndicator for CornerDot {
    fn set_minute_offset(&mut self, offset: u8) {
        if self.shown != Some(offset) {
            self.shown = Some(offset);
            self.changed = true;
        }
    }
}

struct Bridge {
    face: WatchFace,
    source: Box<dyn PackSource>,
    words: WordLines,
    dot: CornerDot,
    settings_path: PathBuf,
    last_tick: Option<(u8, u8)>,
}

impl Bridge {
    fn tick(&mut self, hour: u8, minute: u8, out: &mut impl Write) -> io::Result<()> {
        self.last_tick = Some((hour, minute));
        let resolved = self.face.update(hour, minute, &mut self.words, &mut self.dot);
        tracing::debug!(hour, minute, words = resolved.active.len(), "tick");
        self.words.flush(&self.face, out)?;
        self.dot.flush(out)?;
        out.flush()
    }

    /// Saves settings and repaints the last frame in full, since both the
    /// language and the all-caps flag change the text of unlit words.
    fn settings_changed(&mut self, out: &mut impl Write) -> Result<()> {
        if let Err(e) = save_settings(self.face.settings(), &self.settings_path) {
            tracing::warn!(error = %e, "could not save settings");
        }
        self.words = WordLines::new();
        self.dot = CornerDot::default();
        if let Some((hour, minute)) = self.last_tick {
            self.tick(hour, minute, out)?;
        }
        Ok(())
    }

    fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim();

        match command {
            "TICK" => {
                let (hour, minute) = parse_time(rest)?;
                self.tick(hour, minute, out)?;
            }
            "LANGUAGE" => {
                let id = LanguageId::from_code(rest)?;
                let result = self.face.set_language(id, self.source.as_ref());
                self.settings_changed(out)?;
                result.with_context(|| format!("loading {}", id))?;
            }
            "SETTINGS" => {
                let update = SettingsUpdate::from_json(rest).context("bad settings message")?;
                let mut settings = *self.face.settings();
                settings.apply(&update);
                let result = self.face.apply_settings(settings, self.source.as_ref());
                self.settings_changed(out)?;
                result?;
            }
            "SYNC" => {
                let mut fields = rest.split_whitespace();
                let key: u32 = fields.next().context("missing key")?.parse().context("bad key")?;
                let value: u8 = fields.next().context("missing value")?.parse().context("bad value")?;
                let mut settings = *self.face.settings();
                settings.apply_tuple(key, value)?;
                let result = self.face.apply_settings(settings, self.source.as_ref());
                self.settings_changed(out)?;
                result?;
            }
            "EXIT" => {
                tracing::info!("received EXIT, saving settings");
                save_settings(self.face.settings(), &self.settings_path)?;
                return Ok(false);
            }
            "" => {}
            other => bail!("unknown command {}", other),
        }
        Ok(true)
    }
}

fn parse_time(args: &str) -> Result<(u8, u8)> {
    let mut fields = args.split_whitespace();
    let hour: u8 = fields.next().context("missing hour")?.parse().context("bad hour")?;
    let minute: u8 = fields.next().context("missing minute")?.parse().context("bad minute")?;
    if hour > 23 || minute > 59 {
        bail!("time out of range: {}:{:02}", hour, minute);
    }
    Ok((hour, minute))
}

fn main() -> Result<()> {
    logging::init(LevelFilter::INFO);

    let args = Args::parse();
    let source: Box<dyn PackSource> = match &args.packs {
        Some(dir) => Box::new(DirectoryPacks::new(dir)),
        None => Box::new(BuiltinPacks),
    };
    let settings = load_settings_or_default(&args.settings);
    let face = WatchFace::new(settings, source.as_ref());
    tracing::info!(language = %face.language(), "engine starting");

    let mut bridge = Bridge {
        face,
        source,
        words: WordLines::new(),
        dot: CornerDot::default(),
        settings_path: args.settings,
        last_tick: None,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        tracing::debug!(line = %line, "<-");
        match bridge.handle(&line, &mut stdout) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "rejected command");
                writeln!(stdout, "ERROR {:#}", e)?;
                stdout.flush()?;
            }
        }
    }
    tracing::info!("engine shutting down");
    Ok(())
}
