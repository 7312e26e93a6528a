//! Terminal rendition of the word square.
//!
//! Follows the wall clock until `q`/Esc, or draws one `--time HH:MM` frame and
//! exits. Keys: `l` next language, `c` all caps, `i` invert, `f` two-minute dots.
use anyhow::{bail, Context, Result};
use chrono::{Local, Timelike};
use chronocode_core::core::types::{GRID_COLS, GRID_ROWS};
use chronocode_core::logging;
use chronocode_core::render::{Corner, GridCanvas};
use chronocode_core::{BuiltinPacks, DirectoryPacks, LanguageId, PackSource, Settings, WatchFace};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "simulator")]
#[command(about = "Show the ChronoCode word square in a terminal")]
struct Args {
    /// Language code or id
    #[arg(short, long, default_value = "en_US")]
    language: String,

    /// Draw unlit words in capitals too
    #[arg(long)]
    all_caps: bool,

    /// Dark text on a light square
    #[arg(long)]
    inverted: bool,

    /// Centre the minute buckets on the five-minute marks
    #[arg(long)]
    two_min_dots: bool,

    /// Directory of packed languages; the compiled-in tables are used when absent
    #[arg(long)]
    packs: Option<PathBuf>,

    /// Render this time once instead of following the clock
    #[arg(long, value_name = "HH:MM")]
    time: Option<String>,
}

const DOT: char = '●';
/// Left margin before the first grid column; also where the left dots sit.
const MARGIN: usize = 2;

struct Palette {
    bg: Color,
    lit: Color,
    dark: Color,
}

impl Palette {
    fn for_settings(settings: &Settings) -> Self {
        if settings.inverted_colors {
            Self {
                bg: Color::White,
                lit: Color::Black,
                dark: Color::Grey,
            }
        } else {
            Self {
                bg: Color::Black,
                lit: Color::White,
                dark: Color::DarkGrey,
            }
        }
    }
}

fn paint(out: &mut impl Write, ch: char, fg: Color, bg: Color, attr: Attribute) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(attr),
        SetForegroundColor(fg),
        SetBackgroundColor(bg),
        Print(ch),
        SetAttribute(Attribute::Reset)
    )
}

/// Lines are addressed with `MoveTo` on the alternate screen and simply
/// terminated when printing a single frame to a normal terminal.
fn begin_line(out: &mut impl Write, line: u16, anchored: bool) -> io::Result<()> {
    if anchored {
        queue!(out, MoveTo(0, line))
    } else if line > 0 {
        queue!(out, ResetColor, Print("\n"))
    } else {
        Ok(())
    }
}

fn dot_line(out: &mut impl Write, palette: &Palette, left: bool, right: bool) -> io::Result<()> {
    let width = MARGIN + GRID_COLS as usize * 2;
    for x in 0..=width {
        let ch = match x {
            0 if left => DOT,
            x if x == width && right => DOT,
            _ => ' ',
        };
        paint(out, ch, palette.lit, palette.bg, Attribute::Bold)?;
    }
    Ok(())
}

fn draw(out: &mut impl Write, face: &WatchFace, hour: u8, minute: u8, anchored: bool) -> io::Result<()> {
    let resolved = face.resolve(hour, minute);
    let settings = face.settings();
    let palette = Palette::for_settings(settings);
    let canvas = GridCanvas::compose(&face.pack(), &resolved.active, settings.all_caps_when_off);
    let corner = Corner::for_offset(resolved.minute_offset);

    let mut line = 0;
    begin_line(out, line, anchored)?;
    dot_line(
        out,
        &palette,
        corner == Some(Corner::TopLeft),
        corner == Some(Corner::TopRight),
    )?;

    for row in 0..GRID_ROWS as usize {
        line += 1;
        begin_line(out, line, anchored)?;
        for _ in 0..MARGIN {
            paint(out, ' ', palette.lit, palette.bg, Attribute::Reset)?;
        }
        for col in 0..GRID_COLS as usize {
            let (ch, on) = canvas.cell(row, col).unwrap_or((' ', false));
            if on {
                paint(out, ch, palette.lit, palette.bg, Attribute::Bold)?;
            } else {
                paint(out, ch, palette.dark, palette.bg, Attribute::Dim)?;
            }
            paint(out, ' ', palette.lit, palette.bg, Attribute::Reset)?;
        }
        paint(out, ' ', palette.lit, palette.bg, Attribute::Reset)?;
    }

    line += 1;
    begin_line(out, line, anchored)?;
    dot_line(
        out,
        &palette,
        corner == Some(Corner::BottomLeft),
        corner == Some(Corner::BottomRight),
    )?;

    line += 2;
    begin_line(out, line, anchored)?;
    queue!(
        out,
        ResetColor,
        Clear(ClearType::UntilNewLine),
        Print(format!("{:02}:{:02}  {}  {}", hour, minute, face.language(), canvas.lit_text()))
    )?;
    if anchored {
        begin_line(out, line + 1, anchored)?;
        queue!(
            out,
            Print("q quit  l language  c caps  i invert  f two-minute dots")
        )?;
    } else {
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

fn parse_time(text: &str) -> Result<(u8, u8)> {
    let (hour, minute) = text.split_once(':').context("expected HH:MM")?;
    let hour: u8 = hour.trim().parse().context("bad hour")?;
    let minute: u8 = minute.trim().parse().context("bad minute")?;
    if hour > 23 || minute > 59 {
        bail!("time out of range: {}", text);
    }
    Ok((hour, minute))
}

fn next_language(id: LanguageId) -> LanguageId {
    let all = LanguageId::ALL;
    let position = all.iter().position(|&lang| lang == id).unwrap_or(0);
    all[(position + 1) % all.len()]
}

fn run(out: &mut impl Write, face: &mut WatchFace, source: &dyn PackSource) -> Result<()> {
    let mut shown = None;
    let mut dirty = true;
    loop {
        let now = Local::now();
        let time = (now.hour() as u8, now.minute() as u8);
        if dirty || shown != Some(time) {
            queue!(out, Clear(ClearType::All))?;
            draw(out, face, time.0, time.1, true)?;
            shown = Some(time);
            dirty = false;
        }

        if !event::poll(Duration::from_millis(500))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let mut settings = *face.settings();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Char('l') => settings.language = next_language(face.language()),
            KeyCode::Char('c') => settings.all_caps_when_off = !settings.all_caps_when_off,
            KeyCode::Char('i') => settings.inverted_colors = !settings.inverted_colors,
            KeyCode::Char('f') => {
                settings.fine_grained_minute_buckets = !settings.fine_grained_minute_buckets
            }
            _ => continue,
        }
        if let Err(e) = face.apply_settings(settings, source) {
            tracing::warn!(error = %e, "settings change only partly applied");
        }
        dirty = true;
    }
    Ok(())
}

fn main() -> Result<()> {
    logging::init(LevelFilter::WARN);

    let args = Args::parse();
    let source: Box<dyn PackSource> = match &args.packs {
        Some(dir) => Box::new(DirectoryPacks::new(dir)),
        None => Box::new(BuiltinPacks),
    };
    let settings = Settings {
        all_caps_when_off: args.all_caps,
        inverted_colors: args.inverted,
        fine_grained_minute_buckets: args.two_min_dots,
        language: LanguageId::from_code(&args.language)?,
    };
    let mut face = WatchFace::new(settings, source.as_ref());
    let mut stdout = io::stdout();

    if let Some(time) = &args.time {
        let (hour, minute) = parse_time(time)?;
        draw(&mut stdout, &face, hour, minute, false)?;
        return Ok(());
    }

    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;
    let result = run(&mut stdout, &mut face, source.as_ref());
    execute!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
