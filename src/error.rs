use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of the transcript retrieval pipeline.
///
/// Every variant is terminal for the in-flight operation; nothing is retried
/// and no partial results are produced. The `Display` text is what the CLI
/// shows the user verbatim.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not a valid YouTube video reference")]
    Precondition,

    #[error("watch page fetch failed: {status}")]
    PageFetchFailed { status: StatusCode },

    #[error("could not extract InnerTube API key from watch page")]
    CredentialNotFound,

    #[error("player API failed: {status}")]
    ApiRequestFailed { status: StatusCode },

    #[error("no captions available; enable them with the CC button under the player")]
    NoCaptionsAvailable,

    #[error("transcript fetch failed: {status}")]
    TranscriptFetchFailed { status: StatusCode },

    #[error("transcript is empty")]
    EmptyTranscript,

    #[error("title not found")]
    TitleNotFound,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_carrying_messages() {
        let err = Error::ApiRequestFailed {
            status: StatusCode::FORBIDDEN,
        };
        assert_eq!(err.to_string(), "player API failed: 403 Forbidden");

        let err = Error::TranscriptFetchFailed {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "transcript fetch failed: 404 Not Found");
    }

    #[test]
    fn test_empty_transcript_message() {
        assert_eq!(Error::EmptyTranscript.to_string(), "transcript is empty");
    }
}
