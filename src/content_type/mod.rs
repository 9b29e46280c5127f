//! Content type guessing
//!
//! The platform database (`mime_guess`) is asked first. When it has no
//! answer the lowercased extension is looked up in a static audio/video/image
//! table, and anything still unknown becomes `application/octet-stream`.

mod table;

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

use table::AV_MIME_TYPES;

static AV_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| AV_MIME_TYPES.iter().copied().collect());

/// Guess the content type of `filename`. Never fails.
pub fn guess_mime_type(filename: &str) -> String {
    guess_with(filename, platform_lookup)
}

/// Same as [`guess_mime_type`] with an injectable primary lookup.
pub fn guess_with<F>(filename: &str, primary: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(mime_type) = primary(filename) {
        return mime_type;
    }

    table_lookup(filename)
        .map(str::to_string)
        .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string())
}

/// Look `filename` up in the platform MIME database.
pub fn platform_lookup(filename: &str) -> Option<String> {
    mime_guess::from_path(filename)
        .first()
        .map(|mime_type| mime_type.essence_str().to_string())
}

/// Look `filename` up in the static extension table, ignoring case.
pub fn table_lookup(filename: &str) -> Option<&'static str> {
    let lowered = filename.to_lowercase();
    let extension = extension_of(&lowered);
    AV_TABLE.get(extension.as_str()).copied()
}

/// Extension of the final path component including the leading dot, or an
/// empty string. A dot that starts the file name does not begin an extension.
fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_platform(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_table_values_used_without_platform_answer() {
        assert_eq!(guess_with("song.mp3", no_platform), "audio/mpeg");
        assert_eq!(guess_with("clip.mov", no_platform), "video/quicktime");
        assert_eq!(guess_with("photo.png", no_platform), "image/png");
        assert_eq!(guess_with("raw.h264", no_platform), "video/h264");
    }

    #[test]
    fn test_every_table_entry_resolves() {
        for (extension, mime_type) in AV_MIME_TYPES {
            let filename = format!("file{extension}");
            assert_eq!(guess_with(&filename, no_platform), *mime_type, "{filename}");
        }
    }

    #[test]
    fn test_table_has_no_duplicate_extensions() {
        assert_eq!(AV_TABLE.len(), AV_MIME_TYPES.len());
        assert!(AV_MIME_TYPES
            .iter()
            .all(|(ext, _)| ext.starts_with('.') && *ext == ext.to_lowercase()));
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(guess_mime_type("file.xyz123"), "application/octet-stream");
        assert_eq!(guess_with("file.xyz123", no_platform), "application/octet-stream");
        assert_eq!(guess_with("README", no_platform), "application/octet-stream");
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(guess_mime_type("IMAGE.PNG"), guess_mime_type("image.png"));
        assert_eq!(guess_with("IMAGE.PNG", no_platform), "image/png");
        assert_eq!(guess_with("Clip.MoV", no_platform), "video/quicktime");
    }

    #[test]
    fn test_primary_lookup_wins() {
        let primary = |_: &str| Some("text/x-custom".to_string());
        assert_eq!(guess_with("song.mp3", primary), "text/x-custom");
    }

    #[test]
    fn test_platform_lookup_known_types() {
        assert_eq!(guess_mime_type("image.png"), "image/png");
        assert_eq!(guess_mime_type("index.html"), "text/html");
    }

    #[test]
    fn test_extension_uses_final_component() {
        assert_eq!(extension_of("archive.d/readme"), "");
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of("dir/track.mp3"), ".mp3");
        assert_eq!(table_lookup("music.v2/track.MP3"), Some("audio/mpeg"));
        assert_eq!(table_lookup(".mp3"), None);
    }
}
