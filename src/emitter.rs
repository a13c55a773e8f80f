// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Renders spans of memory as hex and ASCII tables
//!
//! Every table has the same shape:
//! ```text
//!
//! [  Hexview  ]
//! target  buf
//! file    src/main.rs
//! in      main -> L12
//! start   0x55d0c8a4e2b0
//! len     20
//! ------+------------------------------------------------
//!         00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f
//! ------+------------------------------------------------
//!  0000 : 48 65 6c 6c 6f 2c 20 77 6f 72 6c 64 21 00 01 02       Hello,.world!...
//!  0010 : 03 04 05 06                                           ....
//! ------+------------------------------------------------
//! ```
//! Lines end in `\r\n`. Each piece of the table is handed to the [Sink] as
//! soon as it is formatted, so nothing larger than one fragment is buffered.
//!
//! # Sharing
//! An [Emitter] holds no mutable state, and is [Sync] whenever its sink and
//! color mapper are. Fragments from concurrent renders through one sink are
//! not kept apart, so callers sharing an Emitter across threads must
//! serialize their calls to [Emitter::render] if they want readable output.


use crate::{
    color::{Color, ColorMapper},
    error::{Error, Result},
    layout::{filler, Row, Tiling, FIELD_WIDTH, HEADER_WIDTH, LABEL_WIDTH, MAX_LEN, ROW_WIDTH},
    sink::Sink,
    site::Request,
};
use std::fmt::{self, Display, Formatter, Write};
use tracing::{debug, trace};

/// Initial capacity of the fragment scratch buffer; long notes may grow it
const SCRATCH: usize = 128;

/// Holds the output [Sink] and optional [ColorMapper] used to render tables
///
/// # Examples
/// ```rust
/// # use hexview::{prelude::*, sink::Capture};
/// # fn main() -> Result<()> {
/// let capture = Capture::default();
/// let hv = Emitter::new("demo", capture.clone());
/// let buf = *b"Hello, world!";
/// hv_print!(hv, buf)?;
/// assert!(capture.text().contains(" 0000 : 48 65 6c 6c 6f"));
/// # Ok(())
/// # }
/// ```
pub struct Emitter<S, M = fn(u8) -> Color> {
    name: String,
    sink: S,
    mapper: Option<M>,
}

impl<S: Sink> Emitter<S> {
    /// Constructs an Emitter which renders without color
    pub fn new(name: impl Into<String>, sink: S) -> Self {
        Emitter {
            name: name.into(),
            sink,
            mapper: None,
        }
    }
}

// public interface
impl<S: Sink, M: ColorMapper> Emitter<S, M> {
    /// Constructs an Emitter from all of its parts.
    ///
    /// If `mapper` is [None], tables are rendered without any escape sequences.
    pub fn with_mapper(name: impl Into<String>, sink: S, mapper: Option<M>) -> Self {
        Emitter {
            name: name.into(),
            sink,
            mapper,
        }
    }

    /// Replaces the color mapper, keeping the name and sink
    ///
    /// # Examples
    /// ```rust
    /// # use hexview::{prelude::*, sink::Capture};
    /// let hv = Emitter::new("demo", Capture::default()).color(ByteClass::default());
    /// assert!(hv.is_colored());
    /// ```
    pub fn color<N: ColorMapper>(self, mapper: N) -> Emitter<S, N> {
        Emitter {
            name: self.name,
            sink: self.sink,
            mapper: Some(mapper),
        }
    }

    /// Discards the current configuration, replacing every part of it
    pub fn init(&mut self, name: impl Into<String>, sink: S, mapper: Option<M>) -> &mut Self {
        *self = Emitter::with_mapper(name, sink, mapper);
        self
    }

    /// Gets the Emitter's name. The name is never printed in a table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the Emitter's sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns true if tables will be colored
    pub fn is_colored(&self) -> bool {
        self.mapper.is_some()
    }

    /// Renders `span` as a table, labelled with the `request`.
    ///
    /// Spans longer than [MAX_LEN] are refused with
    /// [Error::LengthOutOfRange] before anything reaches the sink. Errors
    /// returned by the sink stop the render immediately.
    pub fn render(&self, request: &Request<'_>, span: &[u8]) -> Result<()> {
        self.draw(request, span.as_ptr(), span)
    }

    /// Renders `len` bytes of live memory starting at `start`.
    ///
    /// This is the only place Hexview reads memory it was not handed as a
    /// slice. Spans longer than [MAX_LEN] are refused before any memory is
    /// read.
    ///
    /// # Safety
    ///
    /// Nothing is checked. `start..start + len` must be readable, initialized
    /// memory which nothing writes to until this returns, and `start` must be
    /// non-null unless `len` is 0. Anything else is undefined behavior.
    pub unsafe fn render_raw(&self, request: &Request<'_>, start: *const u8, len: usize) -> Result<()> {
        if len > MAX_LEN {
            return Err(Error::LengthOutOfRange { len, max: MAX_LEN });
        }
        let span: &[u8] = match len {
            0 => &[],
            // SAFETY: upheld by the caller
            _ => unsafe { std::slice::from_raw_parts(start, len) },
        };
        self.draw(request, start, span)
    }
}

// private
impl<S: Sink, M: ColorMapper> Emitter<S, M> {
    fn draw(&self, request: &Request<'_>, start: *const u8, span: &[u8]) -> Result<()> {
        if span.len() > MAX_LEN {
            return Err(Error::LengthOutOfRange {
                len: span.len(),
                max: MAX_LEN,
            });
        }
        let tiling = Tiling::new(span.len());
        debug!(
            emitter = %self.name,
            label = request.target,
            len = span.len(),
            rows = tiling.rows,
            hole = tiling.hole,
            "rendering table"
        );
        let mut pen = Pen::new(&self.sink);
        pen.basic_info(request, start, span.len())?;
        pen.top_bar()?;
        for row in tiling.iter() {
            self.draw_row(&mut pen, span, row)?;
        }
        pen.splitter()
    }

    fn draw_row(&self, pen: &mut Pen<'_, S>, span: &[u8], row: Row) -> Result<()> {
        trace!(row = row.index, cols = row.cols);
        let bytes = &span[row.range()];
        pen.emit(format_args!(" {:0w$x} :", row.offset(), w = HEADER_WIDTH))?;

        for &byte in bytes {
            match &self.mapper {
                Some(mapper) => pen.emit(format_args!("{}", mapper.color_of(byte).paint(Hex(byte)))),
                None => pen.emit(format_args!("{}", Hex(byte))),
            }?;
        }
        pen.repeat(' ', filler(row.cols))?;

        for &byte in bytes {
            let ch = if byte.is_ascii_graphic() { byte as char } else { '.' };
            match &self.mapper {
                Some(mapper) => pen.emit(format_args!("{}", mapper.color_of(byte).paint(ch))),
                None => pen.emit(format_args!("{ch}")),
            }?;
        }
        pen.emit(format_args!("\r\n"))
    }
}

impl<S, M> std::fmt::Debug for Emitter<S, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("name", &self.name)
            .field("colored", &self.mapper.is_some())
            .finish_non_exhaustive()
    }
}

/// One hex field, ` xx`
struct Hex(u8);

impl Display for Hex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, " {:02x}", self.0)
    }
}

/// Formats fragments into a scratch buffer, and hands them to a [Sink]
struct Pen<'s, S: Sink> {
    sink: &'s S,
    scratch: String,
}

impl<'s, S: Sink> Pen<'s, S> {
    fn new(sink: &'s S) -> Self {
        Pen {
            sink,
            scratch: String::with_capacity(SCRATCH),
        }
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.scratch.clear();
        self.scratch.write_fmt(args)?;
        self.sink.write(self.scratch.as_bytes())
    }

    fn repeat(&mut self, ch: char, len: usize) -> Result<()> {
        self.scratch.clear();
        self.scratch.extend(std::iter::repeat(ch).take(len));
        self.sink.write(self.scratch.as_bytes())
    }

    fn basic_info(&mut self, request: &Request<'_>, start: *const u8, len: usize) -> Result<()> {
        let site = &request.site;
        self.emit(format_args!("\r\n[  Hexview  ]\r\n"))?;
        self.emit(format_args!("target  {}\r\n", request.target))?;
        self.emit(format_args!("file    {}\r\n", site.file))?;
        self.emit(format_args!("in      {} -> L{}\r\n", site.function, site.line))?;
        self.emit(format_args!("start   {start:p}\r\n"))?;
        self.emit(format_args!("len     {len}\r\n"))?;
        if let Some(note) = request.note {
            self.emit(format_args!("note    {note}\r\n"))?;
        }
        Ok(())
    }

    /// `------+` and a run of dashes over the hex columns
    fn splitter(&mut self) -> Result<()> {
        self.repeat('-', HEADER_WIDTH + 2)?;
        self.repeat('+', 1)?;
        self.repeat('-', FIELD_WIDTH * ROW_WIDTH)?;
        self.emit(format_args!("\r\n"))
    }

    /// Column indices, between two splitters
    fn top_bar(&mut self) -> Result<()> {
        self.splitter()?;
        self.repeat(' ', LABEL_WIDTH)?;
        for col in 0..ROW_WIDTH {
            self.emit(format_args!(" {col:02x}"))?;
        }
        self.emit(format_args!("\r\n"))?;
        self.splitter()
    }
}
