//! Export resolved mechanisms to JSON.
//!
//! The file records the query next to the mechanisms so a result can be
//! traced back to its inputs later.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::domain::FocalMechanism;
use crate::error::{AppError, ErrorKind};
use crate::resolver::FocmecRequest;

#[derive(Debug, Serialize)]
struct ResultFile<'a> {
    tool: &'static str,
    request: &'a FocmecRequest,
    mechanisms: &'a [FocalMechanism],
}

pub fn write_mechanisms_json(
    path: &Path,
    request: &FocmecRequest,
    mechanisms: &[FocalMechanism],
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to create export JSON '{}': {e}", path.display()),
        )
    })?;

    let out = ResultFile {
        tool: "focmec",
        request,
        mechanisms,
    };
    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write export JSON: {e}")))?;

    tracing::info!(file = %path.display(), n = mechanisms.len(), "exported mechanisms");
    Ok(())
}
