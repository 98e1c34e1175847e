//! Output sinks.
//!
//! A [`Sink`] receives one logical line per call. Spacing is the one place a
//! single write carries several newlines: `"\n\n"` is one write producing two
//! blank lines.
//!
//! Writer-backed sinks follow `puts` rules: a newline is appended unless the
//! line already ends with one, and an empty line writes nothing.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::sync::lock_recover;

/// Destination for rendered lines.
pub trait Sink {
    /// Write one line.
    ///
    /// # Errors
    ///
    /// Any I/O failure of the underlying destination.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

fn write_terminated<W: Write>(writer: &mut W, line: &str) -> io::Result<()> {
    if line.is_empty() {
        return Ok(());
    }
    writer.write_all(line.as_bytes())?;
    if !line.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Lines go to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_terminated(&mut handle, line)?;
        handle.flush()
    }
}

/// Lines go to any [`Write`] implementation.
#[derive(Debug, Default)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrow the writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        write_terminated(&mut self.writer, line)
    }
}

/// Records every write verbatim.
///
/// Clones share one buffer, so a test can keep a handle while the reporter
/// owns another.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every write so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        lock_recover(&self.lines).clone()
    }

    /// Number of writes so far.
    #[must_use]
    pub fn len(&self) -> usize {
        lock_recover(&self.lines).len()
    }

    /// True when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Everything written, joined the way a writer sink would print it.
    #[must_use]
    pub fn contents(&self) -> String {
        let mut out = Vec::new();
        for line in lock_recover(&self.lines).iter() {
            // Writing to a Vec cannot fail.
            let _ = write_terminated(&mut out, line);
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        lock_recover(&self.lines).clear();
    }
}

impl Sink for BufferSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        lock_recover(&self.lines).push(line.to_string());
        Ok(())
    }
}
