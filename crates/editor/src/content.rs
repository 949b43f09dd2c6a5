//! Startup content seeding.
//!
//! Before the first frame the buffer is seeded either from a file (read in
//! small chunks, each inserted at the cursor) or with the default title
//! string. A failing content source is a distinct, reported condition (not
//! an internal buffer error) and falls back to the default seed so the
//! editor never starts empty-and-broken.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use direct_edit_buffer::TextBuffer;
use thiserror::Error;

/// The default seed text, doubling as the window title.
pub const DEFAULT_TITLE: &str = "Direct Edit";

/// Read granularity for file seeding.
const READ_CHUNK: usize = 64;

/// Errors from the startup content source.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The file could not be opened or read.
    #[error("failed to read startup content: {0}")]
    Io(#[from] io::Error),
}

/// Seeds the buffer from a file, inserting `READ_CHUNK`-sized pieces at the
/// cursor until the source is exhausted.
///
/// Returns the number of bytes inserted. On error the buffer may hold a
/// partial prefix; [`seed`] discards it before falling back.
pub fn seed_from_path(buffer: &mut TextBuffer, path: &Path) -> Result<usize, ContentError> {
    let mut file = File::open(path)?;
    let mut chunk = [0u8; READ_CHUNK];
    let mut total = 0;

    loop {
        let n = file.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        buffer.insert(&chunk[..n]);
        total += n;
    }

    Ok(total)
}

/// Seeds the buffer with the default title.
pub fn seed_default(buffer: &mut TextBuffer) {
    buffer.insert(DEFAULT_TITLE.as_bytes());
}

/// Seeds the buffer from `path` when given, falling back to the default
/// title when the source fails (or no path was given).
///
/// Returns `true` if the file content was used.
pub fn seed(buffer: &mut TextBuffer, path: Option<&Path>) -> bool {
    if let Some(path) = path {
        match seed_from_path(buffer, path) {
            Ok(bytes) => {
                log::info!("seeded {} bytes from {}", bytes, path.display());
                return true;
            }
            Err(err) => {
                log::warn!(
                    "{} ({}); falling back to default content",
                    err,
                    path.display()
                );
                // Drop any partially-read prefix before reseeding.
                *buffer = TextBuffer::new();
            }
        }
    }

    seed_default(buffer);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_seed_default() {
        let mut buffer = TextBuffer::new();
        seed_default(&mut buffer);
        assert_eq!(buffer.content(), DEFAULT_TITLE);
        assert_eq!(buffer.cursor(), DEFAULT_TITLE.len());
    }

    #[test]
    fn test_seed_from_file_spans_chunks() {
        // Longer than one READ_CHUNK so the loop runs more than once.
        let text = "line one\n".repeat(20);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let mut buffer = TextBuffer::new();
        let loaded = seed_from_path(&mut buffer, file.path()).unwrap();
        assert_eq!(loaded, text.len());
        assert_eq!(buffer.content(), text);
        assert_eq!(buffer.cursor(), text.len());
    }

    #[test]
    fn test_seed_missing_file_falls_back() {
        let mut buffer = TextBuffer::new();
        let used_file = seed(&mut buffer, Some(Path::new("/no/such/file")));
        assert!(!used_file);
        assert_eq!(buffer.content(), DEFAULT_TITLE);
    }

    #[test]
    fn test_seed_without_path_uses_default() {
        let mut buffer = TextBuffer::new();
        assert!(!seed(&mut buffer, None));
        assert_eq!(buffer.content(), DEFAULT_TITLE);
    }

    #[test]
    fn test_seed_with_file_uses_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"from disk").unwrap();

        let mut buffer = TextBuffer::new();
        assert!(seed(&mut buffer, Some(file.path())));
        assert_eq!(buffer.content(), "from disk");
    }
}
