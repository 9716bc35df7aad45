use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tour_lessons::{
    blocks_for_lang, find_lesson, run_lesson, BlockParser, CodeBlock, Printer, TourError,
    DEFAULT_LESSON, LESSONS,
};
use tour_support::{docs_context, io_context, lesson_context};

const RUN_AFTER_HELP: &str = "\
Subcommands:
  tour-cli run [LESSON]...    Run lessons in order (defaults to `basics`).
  tour-cli list               List available lessons.
  tour-cli blocks <FILE>      Print fenced code blocks found in a Markdown file.

Without arguments the `basics` lesson runs once.";

#[derive(Parser)]
#[command(
    name = "tour-cli",
    version,
    about = "Walk through small language feature lessons.",
    after_help = RUN_AFTER_HELP
)]
struct RunCli {
    /// Lessons to run, in order.
    #[arg(value_name = "LESSON")]
    lessons: Vec<String>,

    /// Run every lesson in registry order.
    #[arg(long, conflicts_with = "lessons")]
    all: bool,
}

#[derive(Parser)]
#[command(name = "tour-cli list", version, about = "List available lessons.")]
struct ListCli {}

#[derive(Parser)]
#[command(
    name = "tour-cli blocks",
    version,
    about = "Print fenced code blocks found in a Markdown file."
)]
struct BlocksCli {
    /// Markdown document to scan.
    input: PathBuf,

    /// Only print blocks tagged with this language.
    #[arg(long, value_name = "LANG")]
    lang: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut raw: Vec<OsString> = std::env::args_os().collect();
    if raw.get(1).map(|arg| arg == "list").unwrap_or(false) {
        raw.remove(1);
        return handle_list(ListCli::parse_from(raw));
    }
    if raw.get(1).map(|arg| arg == "blocks").unwrap_or(false) {
        raw.remove(1);
        return handle_blocks(BlocksCli::parse_from(raw));
    }
    if raw.get(1).map(|arg| arg == "run").unwrap_or(false) {
        raw.remove(1);
    }

    let run_cli = RunCli::parse_from(raw);
    run_lessons(run_cli)
}

fn lesson_names(cli: &RunCli) -> Vec<String> {
    if cli.all {
        LESSONS.iter().map(|lesson| lesson.name.to_string()).collect()
    } else if cli.lessons.is_empty() {
        vec![DEFAULT_LESSON.to_string()]
    } else {
        cli.lessons.clone()
    }
}

fn run_lessons(cli: RunCli) -> Result<()> {
    let names = lesson_names(&cli);
    // Reject unknown names before any lesson writes to stdout.
    if let Some(missing) = names.iter().find(|name| find_lesson(name).is_none()) {
        bail!(unknown_lesson_message(missing));
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let mut printer = Printer::new(&mut handle);
    for name in &names {
        run_lesson(name, &mut printer).with_context(|| lesson_context(name))?;
    }
    printer.flush().with_context(|| io_context("flush"))?;
    Ok(())
}

fn unknown_lesson_message(name: &str) -> String {
    let error = TourError::UnknownLesson {
        name: name.to_string(),
    };
    let known = LESSONS
        .iter()
        .map(|lesson| lesson.name)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{error} (available: {known})")
}

fn handle_list(_cli: ListCli) -> Result<()> {
    let width = LESSONS
        .iter()
        .map(|lesson| lesson.name.len())
        .max()
        .unwrap_or(0);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for lesson in LESSONS {
        writeln!(handle, "{:<width$}  {}", lesson.name, lesson.summary)
            .with_context(|| io_context("write"))?;
    }
    Ok(())
}

fn handle_blocks(cli: BlocksCli) -> Result<()> {
    let display = cli.input.display().to_string();
    let contents = fs::read_to_string(&cli.input)
        .with_context(|| docs_context("read", &display))?;

    let blocks = match cli.lang.as_deref() {
        Some(lang) => blocks_for_lang(&contents, lang),
        None => BlockParser::new().parse(&contents),
    }
    .with_context(|| docs_context("parse", &display))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_blocks(&mut handle, &blocks).with_context(|| io_context("write"))?;
    Ok(())
}

fn write_blocks(out: &mut dyn Write, blocks: &[CodeBlock]) -> io::Result<()> {
    for block in blocks {
        let lang = block.lang.as_deref().unwrap_or("text");
        writeln!(out, "--- {lang} (line {})", block.line)?;
        if !block.code.is_empty() {
            writeln!(out, "{}", block.code)?;
        }
    }
    out.flush()
}
