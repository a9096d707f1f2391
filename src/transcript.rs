use log::debug;
use serde::Deserialize;

use crate::Transcript;
use crate::error::Error;
use crate::innertube::{self, CaptionTrack, USER_AGENT};

/// One timed caption event from the json3 payload. Events without `segs`
/// carry positioning or styling only and contribute no text.
#[derive(Debug, Deserialize)]
struct CaptionEvent {
    segs: Option<Vec<CaptionSeg>>,
}

#[derive(Debug, Deserialize)]
struct CaptionSeg {
    #[serde(default)]
    utf8: String,
}

#[derive(Debug, Deserialize)]
struct CaptionPayload {
    #[serde(default)]
    events: Vec<CaptionEvent>,
}

/// Order tracks by preference: the preferred language first, then
/// human-authored over auto-generated. The sort is stable, so tracks tied on
/// both keys keep their original relative order.
pub fn sort_tracks(tracks: &mut [CaptionTrack], preferred_lang: &str) {
    tracks.sort_by_key(|t| (t.language_code != preferred_lang, t.is_auto_generated()));
}

/// Fetch the best available caption track for a video and flatten it into
/// newline-separated text with no timestamps.
pub async fn retrieve_transcript(
    client: &reqwest::Client,
    video_id: &str,
    preferred_lang: &str,
) -> Result<Transcript, Error> {
    let data = innertube::discover(client, video_id).await?;

    let mut tracks = data.tracks;
    if tracks.is_empty() {
        return Err(Error::NoCaptionsAvailable);
    }

    sort_tracks(&mut tracks, preferred_lang);
    let track = &tracks[0];
    debug!(
        "Using caption track: lang={} auto_generated={}",
        track.language_code,
        track.is_auto_generated()
    );

    let text = fetch_track_text(client, &track.base_url).await?;

    Ok(Transcript {
        video_id: video_id.to_string(),
        title: data.title.unwrap_or_default(),
        language: track.language_code.clone(),
        auto_generated: track.is_auto_generated(),
        text,
    })
}

/// Fetch a video's title. Runs discovery only; no track is selected.
pub async fn video_title(client: &reqwest::Client, video_id: &str) -> Result<String, Error> {
    let data = innertube::discover(client, video_id).await?;
    match data.title {
        Some(title) if !title.is_empty() => Ok(title),
        _ => Err(Error::TitleNotFound),
    }
}

/// Advisory probe: does the video have at least one caption track? Any
/// failure along the way degrades to `false` rather than propagating.
pub async fn captions_available(client: &reqwest::Client, video_id: &str) -> bool {
    match innertube::discover(client, video_id).await {
        Ok(data) => !data.tracks.is_empty(),
        Err(e) => {
            debug!("Availability probe failed: {e}");
            false
        }
    }
}

async fn fetch_track_text(client: &reqwest::Client, base_url: &str) -> Result<String, Error> {
    let url = format!("{base_url}&fmt=json3");
    debug!("Fetching caption payload: {url}");

    let resp = client.get(&url).header("User-Agent", USER_AGENT).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::TranscriptFetchFailed { status });
    }

    let payload: CaptionPayload = resp.json().await?;
    assemble(&payload.events)
}

/// Flatten caption events into one line of text per event, in source order.
/// Seg texts join with single spaces and whitespace runs collapse, so segs
/// carrying their own padding don't leave double spaces behind.
fn assemble(events: &[CaptionEvent]) -> Result<String, Error> {
    let lines: Vec<String> = events
        .iter()
        .filter_map(|event| event.segs.as_ref())
        .map(|segs| {
            let joined = segs.iter().map(|s| s.utf8.as_str()).collect::<Vec<_>>().join(" ");
            joined.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(Error::EmptyTranscript);
    }

    Ok(lines.join("\n"))
}
