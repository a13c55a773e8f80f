// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Destinations for rendered fragments
//!
//! A [Sink] receives every fragment of a table, in order, one call per
//! fragment. The buffer it is handed is scratch space which is reused for the
//! next fragment, so a sink must copy anything it wants to keep.

use crate::error::Result;
use std::{
    io::Write,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Performs the actual I/O for a stream of rendered fragments
pub trait Sink {
    /// Writes one fragment. Returning [Err] stops the render.
    fn write(&self, buf: &[u8]) -> Result<()>;
}

impl<F> Sink for F
where
    F: Fn(&[u8]),
{
    fn write(&self, buf: &[u8]) -> Result<()> {
        self(buf);
        Ok(())
    }
}

/// Writes fragments to the process' standard output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Stdout;

impl Sink for Stdout {
    fn write(&self, buf: &[u8]) -> Result<()> {
        Ok(std::io::stdout().lock().write_all(buf)?)
    }
}

/// Writes fragments to any [std::io::Write]r
#[derive(Debug, Default)]
pub struct IoSink<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> IoSink<W> {
    /// Wraps a writer
    pub fn new(writer: W) -> Self {
        IoSink {
            writer: Mutex::new(writer),
        }
    }
    /// Unwraps the writer
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> Sink for IoSink<W> {
    fn write(&self, buf: &[u8]) -> Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(writer.write_all(buf)?)
    }
}

/// Collects fragments in memory.
///
/// Clones share the same buffer, so one handle can be given to an
/// [Emitter](crate::Emitter) while another reads the result.
///
/// # Examples
/// ```rust
/// # use hexview::sink::{Capture, Sink};
/// # fn main() -> hexview::error::Result<()> {
/// let capture = Capture::default();
/// capture.clone().write(b"hello")?;
/// assert_eq!(b"hello", capture.contents().as_slice());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Capture {
    buffer: Arc<Mutex<Vec<u8>>>,
    fragments: Arc<Mutex<usize>>,
}

impl Capture {
    fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
    /// Copies out everything written so far
    pub fn contents(&self) -> Vec<u8> {
        self.buffer().clone()
    }
    /// Everything written so far, lossily decoded as UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buffer()).into_owned()
    }
    /// Empties the buffer, returning what it held
    pub fn take(&self) -> Vec<u8> {
        *self.fragments.lock().unwrap_or_else(PoisonError::into_inner) = 0;
        std::mem::take(&mut *self.buffer())
    }
    /// Number of fragments written since creation or the last [Capture::take]
    pub fn fragments(&self) -> usize {
        *self.fragments.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for Capture {
    fn write(&self, buf: &[u8]) -> Result<()> {
        self.buffer().extend_from_slice(buf);
        *self.fragments.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_sink() {
        let seen = Mutex::new(vec![]);
        let sink = |buf: &[u8]| seen.lock().unwrap().push(buf.to_vec());
        sink.write(b"ab").unwrap();
        sink.write(b"c").unwrap();
        assert_eq!(vec![b"ab".to_vec(), b"c".to_vec()], *seen.lock().unwrap());
    }

    #[test]
    fn io_sink() {
        let sink = IoSink::new(Vec::new());
        sink.write(b"0123").unwrap();
        sink.write(b"4567").unwrap();
        assert_eq!(b"01234567", sink.into_inner().as_slice());
    }

    #[test]
    fn io_sink_refusal() {
        let mut buf = [0u8; 2];
        let sink = IoSink::new(&mut buf[..]);
        sink.write(b"xy").unwrap();
        sink.write(b"z").expect_err("a full slice should refuse more bytes");
    }

    #[test]
    fn capture_take() {
        let capture = Capture::default();
        let handle = capture.clone();
        handle.write(b"one").unwrap();
        handle.write(b"two").unwrap();
        assert_eq!(2, capture.fragments());
        assert_eq!("onetwo", capture.text());
        assert_eq!(b"onetwo".to_vec(), capture.take());
        assert!(capture.contents().is_empty());
        assert_eq!(0, capture.fragments());
    }
}
