//! Reading source documents and writing rendered output for the CLI.

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use super::error::InfraError;

const STDIN_MARKER: &str = "-";

/// A document loaded from disk or stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// File name used for format detection; `None` for stdin without a hint.
    pub file_name: Option<String>,
    pub text: String,
}

/// Load `path`, or stdin when it is `-`. Invalid UTF-8 is replaced rather than rejected.
pub fn read_document(path: &Path) -> Result<SourceDocument, InfraError> {
    if path.as_os_str() == STDIN_MARKER {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        return Ok(SourceDocument {
            file_name: None,
            text: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    let bytes = fs::read(path)?;
    Ok(SourceDocument {
        file_name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Write `content` to `destination`, or stdout when none is given.
pub fn write_output(destination: Option<&Path>, content: &str) -> Result<(), InfraError> {
    match destination {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_file_name_and_lossy_text() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("Report.CSV");
        fs::write(&path, b"a,b\n\xff").expect("write");

        let document = read_document(&path).expect("read");
        assert_eq!(document.file_name.as_deref(), Some("Report.CSV"));
        assert_eq!(document.text, "a,b\n\u{fffd}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let err = read_document(&dir.path().join("absent.md")).expect_err("missing");
        assert!(matches!(err, InfraError::Io(_)));
    }

    #[test]
    fn writes_output_creating_parent_directories() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("nested/out.html");

        write_output(Some(path.as_path()), "<p>x</p>").expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read back"), "<p>x</p>");
    }
}
