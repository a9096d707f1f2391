use crate::Transcript;

/// Render the transcript body as-is: one caption line per line, no timestamps
pub fn render_text(transcript: &Transcript) -> String {
    transcript.text.clone()
}

/// Render the full transcript record as pretty-printed JSON
pub fn render_json(transcript: &Transcript) -> String {
    serde_json::to_string_pretty(transcript).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transcript() -> Transcript {
        Transcript {
            video_id: "test123test".to_string(),
            title: "Test Video".to_string(),
            language: "en".to_string(),
            auto_generated: false,
            text: "Hello world\nThis is a test".to_string(),
        }
    }

    #[test]
    fn test_render_text() {
        let t = sample_transcript();
        assert_eq!(render_text(&t), "Hello world\nThis is a test");
    }

    #[test]
    fn test_render_json() {
        let t = sample_transcript();
        let json: serde_json::Value = serde_json::from_str(&render_json(&t)).unwrap();
        assert_eq!(json["video_id"], "test123test");
        assert_eq!(json["title"], "Test Video");
        assert_eq!(json["language"], "en");
        assert_eq!(json["auto_generated"], false);
        assert_eq!(json["text"], "Hello world\nThis is a test");
    }
}
