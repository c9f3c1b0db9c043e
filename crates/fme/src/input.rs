//! Document input and output.
//!
//! Documents are read from a file or stdin and written to a file or stdout.

use std::io::{self, Read, Write};
use std::path::Path;

/// Read the document from `path`, or from stdin when `None`.
pub(crate) fn read_document(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut content = String::new();
            io::stdin().lock().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

/// Write the document to `path`, or to stdout when `None`.
pub(crate) fn write_document(path: Option<&Path>, content: &str) -> io::Result<()> {
    match path {
        Some(path) => std::fs::write(path, content),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("post.html");

        write_document(Some(&path), "Hello ((world)).").unwrap();
        assert_eq!(read_document(Some(&path)).unwrap(), "Hello ((world)).");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_document(Some(Path::new("/nonexistent/post.html"))).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
