//! Parser module — heuristic extraction of C function definitions.

pub mod c;
pub mod classify;
pub mod extract;

use crate::error::ScanError;
use crate::model::FunctionSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

pub use c::ScanOutcome;

/// Scan one source file into `functions`.
///
/// The file is read line by line and decoded lossily; a read error part way
/// through ends the scan and keeps whatever was already recorded.
pub fn scan_file(path: &Path, functions: &mut FunctionSet) -> Result<ScanOutcome, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = BufReader::new(file)
        .split(b'\n')
        .map_while(|chunk| match chunk {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(err) => {
                debug!("read error in {}: {}", path.display(), err);
                None
            }
        });

    Ok(c::scan_lines(&path.to_string_lossy(), lines, functions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scans_file_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("math.c");
        fs::write(&path, "#include <stdio.h>\n\n// Adds two numbers\nint add(int a, int b) {\n    return a + b;\n}\n").unwrap();

        let mut set = FunctionSet::default();
        let outcome = scan_file(&path, &mut set).unwrap();
        assert_eq!(outcome, ScanOutcome::Complete);
        let funcs = set.as_slice();
        assert_eq!(funcs.len(), 1);
        assert_eq!(funcs[0].line, 4);
        assert_eq!(funcs[0].file, path.to_string_lossy());
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = TempDir::new().unwrap();
        let mut set = FunctionSet::default();
        let err = scan_file(&dir.path().join("nope.c"), &mut set).unwrap_err();
        assert!(matches!(err, ScanError::Open { .. }));
        assert!(set.is_empty());
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.c");
        fs::write(&path, b"// caf\xe9 helper\nvoid cafe(void) {\n").unwrap();

        let mut set = FunctionSet::default();
        scan_file(&path, &mut set).unwrap();
        assert_eq!(set.as_slice()[0].name, "cafe");
        assert!(set.as_slice()[0].description.starts_with("caf"));
    }

    #[test]
    fn crlf_line_endings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dos.c");
        fs::write(&path, "// dos\r\nint f(int x) {\r\n").unwrap();

        let mut set = FunctionSet::default();
        scan_file(&path, &mut set).unwrap();
        assert_eq!(set.as_slice()[0].description, "dos");
        assert_eq!(set.as_slice()[0].line, 2);
    }
}
