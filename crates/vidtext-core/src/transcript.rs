use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::{
    error::{Result, VidtextError},
    types::Transcript,
};

/// Load a transcript from disk.
///
/// Accepts Whisper-style JSON (`segments` with `start`/`end`/`text`) as
/// written by [`save_transcript_json`], or plain text with one segment per
/// line.
pub async fn load_transcript(path: &Path) -> Result<Transcript> {
    let content = fs::read_to_string(path).await?;

    let transcript = match serde_json::from_str::<Transcript>(&content) {
        Ok(transcript) => transcript,
        Err(err) => {
            debug!(path = %path.display(), %err, "not a JSON transcript, reading as plain text");
            Transcript::from_lines(&content)
        }
    };

    if transcript.plain_text().trim().is_empty() {
        return Err(VidtextError::TranscriptEmpty {
            path: path.to_path_buf(),
        });
    }

    debug!(
        path = %path.display(),
        segments = transcript.segments.len(),
        language = %transcript.language,
        "loaded transcript"
    );
    Ok(transcript)
}

/// Save the transcript as plain text, segments separated by newlines
pub async fn save_transcript_text(transcript: &Transcript, path: &Path) -> Result<()> {
    fs::write(path, transcript.plain_text()).await?;
    Ok(())
}

/// Save the transcript as pretty-printed JSON
pub async fn save_transcript_json(transcript: &Transcript, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(transcript)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Segment;

    #[tokio::test]
    async fn loads_plain_text_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("captions.txt");
        std::fs::write(&path, "so today we talk about rust\n\nand why it is fast\n").unwrap();

        let transcript = load_transcript(&path).await.unwrap();
        assert_eq!(transcript.segments.len(), 2);
        assert_eq!(
            transcript.plain_text(),
            "so today we talk about rust\nand why it is fast"
        );
    }

    #[tokio::test]
    async fn loads_whisper_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.json");
        std::fs::write(
            &path,
            r#"{"text": "Hello. World.", "language": "en", "segments": [
                {"start": 0.0, "end": 1.0, "text": "Hello."},
                {"start": 1.0, "end": 2.0, "text": "World."}
            ]}"#,
        )
        .unwrap();

        let transcript = load_transcript(&path).await.unwrap();
        assert_eq!(transcript.language, "en");
        assert_eq!(transcript.plain_text(), "Hello.\nWorld.");
    }

    #[tokio::test]
    async fn loads_json_text_without_segments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.json");
        std::fs::write(&path, "{\n\"text\": \"Hello world.\",\n\"language\": \"en\"\n}").unwrap();

        let transcript = load_transcript(&path).await.unwrap();
        assert_eq!(transcript.language, "en");
        assert!(transcript.segments.is_empty());
        assert_eq!(transcript.plain_text(), "Hello world.");
    }

    #[tokio::test]
    async fn empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "  \n \n").unwrap();

        assert!(matches!(
            load_transcript(&path).await,
            Err(VidtextError::TranscriptEmpty { .. })
        ));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_transcript(&dir.path().join("nope.txt")).await,
            Err(VidtextError::IoError(_))
        ));
    }

    #[tokio::test]
    async fn saved_json_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let transcript = Transcript {
            text: String::new(),
            segments: vec![Segment {
                start: 0.5,
                end: 2.0,
                text: "Ownership rules.".into(),
            }],
            language: "en".into(),
        };

        save_transcript_json(&transcript, &path).await.unwrap();
        assert_eq!(load_transcript(&path).await.unwrap(), transcript);

        let txt = dir.path().join("out.txt");
        save_transcript_text(&transcript, &txt).await.unwrap();
        assert_eq!(std::fs::read_to_string(&txt).unwrap(), "Ownership rules.");
    }
}
