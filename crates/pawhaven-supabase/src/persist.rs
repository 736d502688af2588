// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! On-disk session persistence.
//!
//! The browser SDK keeps its session in localStorage; this client keeps a
//! JSON file under the XDG data dir instead. The file is best-effort state,
//! never authoritative: an unreadable or corrupt file is treated as
//! signed-out, not as an error.

use std::path::Path;

use pawhaven_core::{PawhavenError, Session};
use tracing::warn;

/// Reads the persisted session, returning `None` for a missing or
/// unparseable file.
pub fn read_session(path: &Path) -> Option<Session> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring corrupt session file");
            None
        }
    }
}

/// Writes the session to disk, creating parent directories as needed.
pub fn write_session(path: &Path, session: &Session) -> Result<(), PawhavenError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PawhavenError::Auth {
            message: format!("failed to create session dir: {e}"),
            source: Some(Box::new(e)),
        })?;
    }
    let json = serde_json::to_string_pretty(session).map_err(|e| PawhavenError::Internal(
        format!("failed to serialize session: {e}"),
    ))?;
    std::fs::write(path, json).map_err(|e| PawhavenError::Auth {
        message: format!("failed to write session file: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Removes the persisted session file. Missing files are not an error.
pub fn remove_session(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %e, "failed to remove session file");
        }
    }
}
