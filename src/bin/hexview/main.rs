// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Hexview: dumps a file, or part of one, as a hex and ASCII table

mod error;

use error::{Error, Result};
use gumdrop::*;
use hexview::{layout::MAX_LEN, prelude::*, sink::Stdout};
use owo_colors::OwoColorize;
use std::{
    fs::read,
    path::{Path, PathBuf},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses a hexadecimal string into a usize
fn parse_hex(value: &str) -> std::result::Result<usize, std::num::ParseIntError> {
    usize::from_str_radix(value.trim_start_matches("0x"), 16)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Options, Hash)]
struct Arguments {
    #[options(help = "File to dump.", required, free)]
    pub file: PathBuf,
    #[options(help = "Print this help message.")]
    help: bool,
    #[options(help = "Start dumping at offset (hex).", parse(try_from_str = "parse_hex"))]
    pub offset: usize,
    #[options(help = "Number of bytes to dump. Defaults to the rest of the file.")]
    pub length: Option<usize>,
    #[options(help = "Print a note under each table.")]
    pub note: Option<String>,
    #[options(no_short, help = "Name of the emitter, shown in logs.", meta = "NAME")]
    pub name: Option<String>,
    #[options(help = "Color each byte by its kind.")]
    pub color: bool,
    #[options(no_short, help = "Color for 0x00 bytes.", meta = "COLOR")]
    pub zero: Option<Color>,
    #[options(no_short, help = "Color for printable bytes.", meta = "COLOR")]
    pub graphic: Option<Color>,
    #[options(no_short, help = "Color for whitespace.", meta = "COLOR")]
    pub whitespace: Option<Color>,
    #[options(no_short, help = "Color for other control characters.", meta = "COLOR")]
    pub control: Option<Color>,
    #[options(no_short, help = "Color for bytes above 0x7f.", meta = "COLOR")]
    pub high: Option<Color>,
}

impl Arguments {
    /// The color classes to render with, if coloring was asked for
    fn classes(&self) -> Option<ByteClass> {
        let picked = [
            self.zero,
            self.graphic,
            self.whitespace,
            self.control,
            self.high,
        ];
        if !self.color && picked.iter().all(Option::is_none) {
            return None;
        }
        let default = ByteClass::default();
        Some(ByteClass {
            zero: self.zero.unwrap_or(default.zero),
            graphic: self.graphic.unwrap_or(default.graphic),
            whitespace: self.whitespace.unwrap_or(default.whitespace),
            control: self.control.unwrap_or(default.control),
            high: self.high.unwrap_or(default.high),
        })
    }
}

/// Picks the requested bytes out of the file
fn select<'a>(file: &Path, contents: &'a [u8], offset: usize, length: Option<usize>) -> Result<&'a [u8]> {
    let end = match length {
        Some(length) => offset.saturating_add(length),
        None => contents.len().max(offset),
    };
    contents.get(offset..end).ok_or_else(|| Error::OutOfBounds {
        file: file.to_path_buf(),
        range: offset..end,
        len: contents.len(),
    })
}

/// Renders `span` as one table per [MAX_LEN] bytes.
///
/// When there's more than one table, each is noted with its range in the file
/// unless a note was given.
fn dump<S: Sink, M: ColorMapper>(hv: &Emitter<S, M>, options: &Arguments, span: &[u8]) -> Result<()> {
    let target = options.file.display().to_string();
    let site = call_site!();
    if span.len() <= MAX_LEN {
        return Ok(hv.render(&request(&target, site, options.note.as_deref()), span)?);
    }
    for (index, chunk) in span.chunks(MAX_LEN).enumerate() {
        let start = options.offset + index * MAX_LEN;
        info!(start, len = chunk.len(), "dumping chunk");
        let range = format!("{start:#x}..{:#x}", start + chunk.len());
        let note = options.note.as_deref().unwrap_or(&range);
        hv.render(&request(&target, site, Some(note)), chunk)?;
    }
    Ok(())
}

/// Labels a table, stamped with the caller's `site`
fn request<'a>(target: &'a str, site: CallSite<'a>, note: Option<&'a str>) -> Request<'a> {
    let request = Request::new(target, site);
    match note {
        Some(note) => request.note(note),
        None => request,
    }
}

fn run(options: Arguments) -> Result<()> {
    let contents = read(&options.file)?;
    let span = select(&options.file, &contents, options.offset, options.length)?;
    let name = options.name.clone().unwrap_or_else(|| "hexview".to_string());
    let hv = Emitter::with_mapper(name, Stdout, options.classes());
    dump(&hv, &options, span)
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let options = Arguments::parse_args_default_or_exit();
    if let Err(e) = run(options) {
        eprintln!("{}", e.bold().red());
        std::process::exit(1);
    }
}
