//! Jaword - Japanese-aware word boundaries for text editors
//! Command line entry point

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::style::{StyledContent, Stylize};
use jaword::buffer::api::TextSource;
use jaword::buffer::TextBuffer;
use jaword::editor::Editor;
use jaword::error::JawordError;
use jaword::movement::{class_runs, classify_char, next_word_end, prev_word_start, CharClass};
use jaword::position::Position;
use jaword::settings::{create_settings_registry, EditorSettings};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

/// Inspect and exercise Japanese-aware word boundaries
#[derive(Debug, Parser)]
#[command(name = "jaword", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word separator chars (replaces the default set)
    #[arg(long, global = true, value_name = "CHARS")]
    separators: Option<String>,

    /// Set an option, e.g. `--set multicursor=off` (repeatable)
    #[arg(long = "set", global = true, value_name = "NAME=VALUE")]
    options: Vec<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every char with its class
    Classify(InputArgs),

    /// Print the class runs of every line
    Runs(InputArgs),

    /// Print where "next word end" lands
    Next(PositionArgs),

    /// Print where "previous word start" lands
    Prev(PositionArgs),

    /// Print every position visited by repeated scans
    Walk {
        #[command(flatten)]
        input: InputArgs,

        /// Walk from the document end with "previous word start"
        #[arg(short, long)]
        backward: bool,
    },

    /// Delete a word and print the resulting document
    Delete {
        #[command(flatten)]
        at: PositionArgs,

        /// Delete back to the previous word start instead of forward
        #[arg(long)]
        left: bool,
    },

    /// Run editor commands by id, alias or prefix and print the result
    Exec {
        #[command(flatten)]
        at: PositionArgs,

        /// Commands to run in order (e.g. `wordend`, `deleteWordLeftJa`)
        #[arg(long = "command", value_name = "COMMAND", required = true)]
        commands: Vec<String>,
    },
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Input file (default: stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct PositionArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Zero-based line
    #[arg(short, long, default_value_t = 0)]
    line: usize,

    /// Zero-based column, in chars
    #[arg(short, long, default_value_t = 0)]
    column: usize,
}

impl PositionArgs {
    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = !cli.no_color && std::io::stdout().is_terminal();

    let settings = build_settings(&cli)?;
    log::debug!("settings: {settings:?}");

    match &cli.command {
        Commands::Classify(input) => {
            let buffer = read_input(input)?;
            print_classes(&buffer, &settings, color);
        }
        Commands::Runs(input) => {
            let buffer = read_input(input)?;
            print_runs(&buffer, &settings, color);
        }
        Commands::Next(at) | Commands::Prev(at) => {
            let buffer = read_input(&at.input)?;
            let start = checked_position(&buffer, at.position())?;
            let separators = settings.separators();
            let target = if matches!(cli.command, Commands::Next(_)) {
                next_word_end(&buffer, start, &separators)
            } else {
                prev_word_start(&buffer, start, &separators)
            };
            println!("{target}");
            print_caret(&buffer, target);
        }
        Commands::Walk { input, backward } => {
            let buffer = read_input(input)?;
            for pos in walk(&buffer, &settings, *backward) {
                println!("{pos}");
            }
        }
        Commands::Delete { at, left } => {
            let buffer = read_input(&at.input)?;
            let mut editor = Editor::with_settings(buffer, settings);
            editor
                .set_cursor(at.position())
                .context("Invalid cursor position")?;
            if *left {
                editor.delete_word_left()?;
            } else {
                editor.delete_word_right()?;
            }
            print!("{}", editor.text());
        }
        Commands::Exec { at, commands } => {
            let buffer = read_input(&at.input)?;
            let mut editor = Editor::with_settings(buffer, settings);
            editor
                .set_cursor(at.position())
                .context("Invalid cursor position")?;
            let mut edited = false;
            for name in commands {
                let cmd = editor
                    .execute_named(name)
                    .with_context(|| format!("Failed to run '{name}'"))?;
                log::info!("ran {cmd}");
                edited |= cmd.is_edit();
            }
            if edited {
                println!("revision {}", editor.buffer().revision);
            }
            for sel in editor.selections() {
                println!("{} {}", sel.anchor, sel.active);
            }
            print!("{}", editor.text());
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn build_settings(cli: &Cli) -> Result<EditorSettings> {
    let registry = create_settings_registry();
    let mut settings = EditorSettings::default();
    if let Some(separators) = &cli.separators {
        settings.word_separators = separators.clone();
    }
    for option in &cli.options {
        registry
            .apply_assignment(option, &mut settings)
            .map_err(JawordError::from)
            .with_context(|| format!("Invalid option '{option}'"))?;
    }
    Ok(settings)
}

fn read_input(input: &InputArgs) -> Result<TextBuffer> {
    let text = match &input.file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };
    log::info!("read {} chars", text.chars().count());
    Ok(TextBuffer::from(text.as_str()))
}

fn checked_position(buffer: &TextBuffer, pos: Position) -> Result<Position> {
    if !buffer.is_valid(pos) {
        bail!(
            "Position {pos} is outside the document ({} lines)",
            buffer.line_count()
        );
    }
    Ok(pos)
}

/// Positions visited by repeating a scan until it stops moving
fn walk(buffer: &TextBuffer, settings: &EditorSettings, backward: bool) -> Vec<Position> {
    let separators = settings.separators();
    let mut pos = if backward {
        buffer.end_position()
    } else {
        Position::origin()
    };
    let mut visited = Vec::new();
    loop {
        let next = if backward {
            prev_word_start(buffer, pos, &separators)
        } else {
            next_word_end(buffer, pos, &separators)
        };
        if next == pos {
            return visited;
        }
        visited.push(next);
        pos = next;
    }
}

fn print_classes(buffer: &TextBuffer, settings: &EditorSettings, color: bool) {
    let separators = settings.separators();
    for line in 0..buffer.line_count() {
        for (column, ch) in buffer.line_text(line).chars().enumerate() {
            let class = classify_char(ch, &separators);
            println!("{}\t{ch:?}\t{}", Position::new(line, column), paint(class, color));
        }
    }
}

fn print_runs(buffer: &TextBuffer, settings: &EditorSettings, color: bool) {
    let separators = settings.separators();
    for line in 0..buffer.line_count() {
        let chars: Vec<char> = buffer.line_text(line).chars().collect();
        for run in class_runs(buffer, line, &separators) {
            let text: String = chars[run.start..run.end].iter().collect();
            println!(
                "{line}:{}-{}\t{}\t{text:?}",
                run.start,
                run.end,
                paint(run.class, color)
            );
        }
    }
}

/// The line holding `pos`, with a caret under its display column
fn print_caret(buffer: &TextBuffer, pos: Position) {
    let text = buffer.line_text(pos.line);
    let before: String = text.chars().take(pos.column).collect();
    println!("{text}");
    println!("{}^", " ".repeat(before.width()));
}

/// Class name, colored when writing to a terminal
fn paint(class: CharClass, color: bool) -> String {
    let name = class.name();
    if !color {
        return name.to_string();
    }
    let styled: StyledContent<&str> = match class {
        CharClass::Alnum => name.blue(),
        CharClass::Whitespace => name.dark_grey(),
        CharClass::Punctuation => name.yellow(),
        CharClass::Hiragana => name.green(),
        CharClass::Katakana => name.cyan(),
        CharClass::Other => name.magenta(),
        CharClass::Separator => name.red(),
        CharClass::Invalid => name.dark_red(),
    };
    styled.to_string()
}
