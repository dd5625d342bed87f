//! Output stream ownership and document framing.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{DeviceOptions, OutputTarget};
use crate::error::TikzResult;

enum Sink {
    File(File),
    Console(io::Stdout),
    Memory(Vec<u8>),
    /// Accepts `budget` more bytes, then fails like a closed pipe.
    #[cfg(test)]
    Failing { budget: usize },
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::File(f) => f.write(buf),
            Sink::Console(out) => out.write(buf),
            Sink::Memory(v) => v.write(buf),
            #[cfg(test)]
            Sink::Failing { budget } => {
                if buf.len() > *budget {
                    return Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader closed"));
                }
                *budget -= buf.len();
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::File(f) => f.flush(),
            Sink::Console(out) => out.flush(),
            Sink::Memory(_) => Ok(()),
            #[cfg(test)]
            Sink::Failing { .. } => Ok(()),
        }
    }
}

/// Owns the output stream for one device session.
///
/// Statements are written straight through in call order; nothing is
/// buffered across calls.
pub(crate) struct DocumentWriter {
    sink: Option<Sink>,
    /// Regular file created for this session, removed by `discard`.
    path: Option<PathBuf>,
    memory: Option<Vec<u8>>,
}

impl DocumentWriter {
    /// Open the output stream.
    pub(crate) fn create(target: &OutputTarget) -> TikzResult<Self> {
        let (sink, path) = match target {
            OutputTarget::File(path) => {
                let file = File::create(path)?;
                // Device nodes and pipes are never removed on discard.
                let owned = file.metadata().map(|m| m.is_file()).unwrap_or(false);
                (Sink::File(file), owned.then(|| path.clone()))
            }
            OutputTarget::Console => (Sink::Console(io::stdout()), None),
            OutputTarget::Memory => (Sink::Memory(Vec::new()), None),
        };
        Ok(Self {
            sink: Some(sink),
            path,
            memory: None,
        })
    }

    /// Writer whose stream fails after `budget` bytes.
    #[cfg(test)]
    pub(crate) fn failing(budget: usize) -> Self {
        Self {
            sink: Some(Sink::Failing { budget }),
            path: None,
            memory: None,
        }
    }

    pub(crate) fn write(&mut self, text: &str) -> TikzResult<()> {
        for line in text.lines() {
            log::trace!(target: "tikz", "{}", line);
        }
        let sink = self
            .sink
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "output stream closed"))?;
        sink.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Header comment and, for standalone output, the document preamble.
    pub(crate) fn begin_document(&mut self, options: &DeviceOptions) -> TikzResult<()> {
        self.write(&format!(
            "% Created by tikz-device {}\n",
            env!("CARGO_PKG_VERSION")
        ))?;
        if options.standalone {
            self.write(&options.document_declaration)?;
            self.write(&options.packages)?;
            self.write("\\begin{document}\n\n")?;
        }
        Ok(())
    }

    pub(crate) fn end_document(&mut self, options: &DeviceOptions) -> TikzResult<()> {
        if options.standalone {
            self.write("\n")?;
            self.write(&options.footer)?;
        }
        Ok(())
    }

    /// Flush and release the stream. In-memory output stays available
    /// through [`DocumentWriter::take_memory`].
    pub(crate) fn finish(&mut self) -> TikzResult<()> {
        match self.sink.take() {
            Some(Sink::Memory(buf)) => {
                self.memory = Some(buf);
                Ok(())
            }
            Some(mut sink) => {
                sink.flush()?;
                Ok(())
            }
            None => Ok(()),
        }
    }

    pub(crate) fn take_memory(&mut self) -> Option<String> {
        self.memory
            .take()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
    }

    /// Drop the stream after a failed open, removing a partially written file.
    pub(crate) fn discard(mut self) {
        self.sink = None;
        if let Some(path) = self.path.take() {
            if let Err(err) = std::fs::remove_file(&path) {
                log::warn!(target: "tikz", "could not remove {}: {}", path.display(), err);
            }
        }
    }
}
