// src/output/sink.rs
// =============================================================================
// Where the formatted result ends up: the terminal or a file.
//
// A file is overwritten if it exists and written as UTF-8 exactly as
// given, with no trailing newline added. A failed write is not retried.
// =============================================================================

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::console::Console;
use crate::error::SinkError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => OutputSink::File(path.to_path_buf()),
            None => OutputSink::Stdout,
        }
    }

    // Writes the formatted result
    //
    // The console is only used for the Stdout case.
    pub fn write<W: Write>(&self, console: &mut Console<W>, content: &str) -> Result<(), SinkError> {
        match self {
            OutputSink::Stdout => console.say(content),
            OutputSink::File(path) => {
                fs::write(path, content).map_err(|source| SinkError::Write {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), "saved output");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::console::tests::FailingWriter;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    fn console() -> Console<Vec<u8>> {
        Console::new(Vec::new(), true)
    }

    #[test]
    fn test_from_path() {
        assert_eq!(OutputSink::from_path(None), OutputSink::Stdout);
        let sink = OutputSink::from_path(Some(Path::new("out.txt")));
        assert_eq!(sink, OutputSink::File(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_write_file_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("urls.txt");
        let content = "http://a.com/ü\nhttp://a.com/b";

        OutputSink::File(path.clone()).write(&mut console(), content).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_write_file_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("urls.txt");
        fs::write(&path, "old content that is longer").unwrap();

        OutputSink::File(path.clone()).write(&mut console(), "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_file_bad_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("urls.txt");

        let error = OutputSink::File(path.clone()).write(&mut console(), "x").unwrap_err();

        assert_eq!(error.path(), Some(path.as_path()));
    }

    #[test]
    fn test_write_stdout() {
        let mut console = console();
        OutputSink::Stdout.write(&mut console, "http://a.com/").unwrap();
        console.say("done").unwrap();
    }

    #[test]
    fn test_write_stdout_failure_is_reported() {
        let mut console = Console::new(FailingWriter(ErrorKind::Other), false);
        let error = OutputSink::Stdout.write(&mut console, "http://a.com/").unwrap_err();
        assert!(matches!(error, SinkError::Stdout(_)));
    }
}
