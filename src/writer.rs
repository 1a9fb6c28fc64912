//! Writing PLA tables to disk
//!
//! Files are created (or truncated) with [`File::create`] and written through a
//! [`BufWriter`]. The handle is dropped on every return path, including early
//! returns on a write error; a partially written file may remain in that case.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::pla::{write_pla, TableSummary};

/// Write `contents` to `path`, replacing any existing file
pub fn write_string_to_file<P: AsRef<Path>>(contents: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    info!(path = %path.display(), bytes = contents.len(), "wrote PLA file");
    Ok(())
}

/// Generate the PLA table for `weights` and stream it directly to `path`
///
/// The dimensions are validated before the file is created, so invalid input
/// leaves the filesystem untouched.
pub fn write_pla_file<P: AsRef<Path>>(weights: &[i64], n: usize, path: P) -> Result<TableSummary> {
    crate::weights::validate_dimensions(weights, n)?;
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let summary = write_pla(weights, n, &mut writer)?;
    writer.flush()?;
    info!(
        path = %path.display(),
        rows = summary.emitted_rows,
        "wrote PLA file"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneratorError;
    use crate::pla::generate_pla;
    use std::fs;

    #[test]
    fn test_write_string_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.pla");
        fs::write(&path, "stale contents that are longer than the new ones\n").unwrap();

        write_string_to_file(".e\n", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), ".e\n");
    }

    #[test]
    fn test_streamed_file_matches_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sac.pla");
        let weights = [3, -1, -1, 2];

        let summary = write_pla_file(&weights, 4, &path).unwrap();
        let expected = generate_pla(&weights, 4).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
        assert_eq!(summary.total_rows, 16);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.pla");
        let err = write_string_to_file(".e\n", &path).unwrap_err();
        assert!(matches!(err, GeneratorError::Io(_)));
    }

    #[test]
    fn test_invalid_weights_create_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pla");
        let err = write_pla_file(&[1, 2, 3], 2, &path).unwrap_err();
        assert!(matches!(err, GeneratorError::DimensionMismatch { .. }));
        assert!(!path.exists());
    }
}
