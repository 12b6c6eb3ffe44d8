//! Container format gate

use crate::ClipError;
use std::path::Path;

/// Check that `path` carries one of the accepted container extensions.
///
/// Comparison is ASCII case-insensitive; a leading dot in `accepted` entries
/// is ignored. Runs before the clip is opened.
pub fn check_container<S: AsRef<str>>(path: &Path, accepted: &[S]) -> Result<(), ClipError> {
    let extension = path.extension().and_then(|e| e.to_str());

    let allowed = extension.is_some_and(|ext| {
        accepted
            .iter()
            .any(|a| a.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
    });

    if allowed {
        Ok(())
    } else {
        Err(ClipError::UnsupportedFormat {
            extension: extension.map(str::to_string),
        })
    }
}
