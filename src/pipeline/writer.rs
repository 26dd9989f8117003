//! JSON rendering and atomic output

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::error::{ConvertError, Stage};
use super::member::MemberRecord;

/// Render members as a pretty-printed JSON array (2-space indent, non-ASCII
/// kept literal) with a trailing newline.
pub fn render_json(members: &[MemberRecord]) -> Result<String, ConvertError> {
    let mut json = serde_json::to_string_pretty(members)
        .map_err(|e| ConvertError::failure(Stage::Serialize, "Failed to serialize members", e))?;
    json.push('\n');
    Ok(json)
}

/// Replace `path` with `contents` in one step.
///
/// The document goes to a temporary file next to `path` and is renamed over
/// it, so readers never see a partial file and a failed write leaves the old
/// file untouched.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), ConvertError> {
    let write_err = |e: std::io::Error| {
        ConvertError::failure(
            Stage::Write,
            format!("Failed to write JSON file: {}", path.display()),
            e,
        )
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // Temp files are created owner-only; the site build needs to read it
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
