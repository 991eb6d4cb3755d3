//! Validation for author-uploaded audio files.
//!
//! Rejections are returned as human-readable messages rather than errors;
//! callers branch on message-or-`None` and surface the text as-is.

/// Audio filename extensions and the declared mime types each may carry.
const AUDIO_FORMATS: &[(&str, &[&str])] = &[
    ("mp3", &["audio/mpeg", "audio/mp3"]),
    ("ogg", &["audio/ogg"]),
    ("wav", &["audio/wav", "audio/x-wav"]),
    ("flac", &["audio/flac"]),
    ("m4a", &["audio/mp4", "audio/x-m4a"]),
];

/// An audio file as received from the upload widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioUpload {
    pub filename: String,
    /// Declared mime type, e.g. `"audio/mpeg"`
    pub mime_type: String,
    pub size_bytes: u64,
}

/// Checks an uploaded audio file, returning a rejection message or `None`
/// when the file is acceptable.
pub fn validate_audio_upload(upload: Option<&AudioUpload>) -> Option<&'static str> {
    let Some(upload) = upload else {
        return Some("No audio file was uploaded.");
    };
    if upload.size_bytes == 0 {
        return Some("No audio file was uploaded.");
    }
    if !upload.mime_type.starts_with("audio/") {
        return Some("This file is not recognized as an audio file.");
    }

    let extension = upload
        .filename
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase());
    let extension_matches = extension
        .as_deref()
        .and_then(|extension| {
            AUDIO_FORMATS
                .iter()
                .find(|(known, _)| *known == extension)
        })
        .is_some_and(|(_, mime_types)| mime_types.contains(&upload.mime_type.as_str()));

    if !extension_matches {
        log::warn!(
            "Declared type {} does not fit uploaded filename {}",
            upload.mime_type,
            upload.filename
        );
        return Some("This audio format does not match the filename extension.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(filename: &str, mime_type: &str) -> AudioUpload {
        AudioUpload {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            size_bytes: 52_428,
        }
    }

    #[test]
    fn missing_file_is_rejected() {
        assert_eq!(
            validate_audio_upload(None),
            Some("No audio file was uploaded.")
        );
    }

    #[test]
    fn empty_file_is_rejected() {
        let mut file = upload("recording.mp3", "audio/mpeg");
        file.size_bytes = 0;
        assert_eq!(
            validate_audio_upload(Some(&file)),
            Some("No audio file was uploaded.")
        );
    }

    #[test]
    fn non_audio_mime_type_is_rejected() {
        let file = upload("recording.mp3", "video/mp4");
        assert_eq!(
            validate_audio_upload(Some(&file)),
            Some("This file is not recognized as an audio file.")
        );
    }

    #[test]
    fn extension_mismatch_is_rejected() {
        let file = upload("video.mp4", "audio/mpeg");
        assert_eq!(
            validate_audio_upload(Some(&file)),
            Some("This audio format does not match the filename extension.")
        );
    }

    #[test]
    fn matching_audio_upload_is_accepted() {
        assert_eq!(validate_audio_upload(Some(&upload("recording.mp3", "audio/mpeg"))), None);
        assert_eq!(validate_audio_upload(Some(&upload("RECORDING.MP3", "audio/mp3"))), None);
        assert_eq!(validate_audio_upload(Some(&upload("take2.flac", "audio/flac"))), None);
    }

    #[test]
    fn extensionless_filename_is_a_mismatch() {
        let file = upload("recording", "audio/mpeg");
        assert_eq!(
            validate_audio_upload(Some(&file)),
            Some("This audio format does not match the filename extension.")
        );
    }
}
