//! Plain-text export.
//!
//! Writes the raw input, not the statistics, to a UTF-8 text file with no
//! header and no trailer.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};

use camino::Utf8Path;

use crate::error::{ExportError, ExportResult};

/// File name used when no export path is configured.
pub const DEFAULT_EXPORT_FILE: &str = "worddash-text.txt";

/// Write `text` verbatim to `path`.
///
/// Refuses to replace an existing file unless `overwrite` is set. Returns
/// the number of bytes written.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn export_text(text: &str, path: &Utf8Path, overwrite: bool) -> ExportResult<usize> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path.as_std_path()).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            ExportError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            ExportError::Write {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| ExportError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(%path, bytes = text.len(), "exported text");
    Ok(text.len())
}
