use serde::Deserialize;
use tokio::process::Command;

use super::Song;
use crate::Error;

#[derive(Deserialize)]
struct YtDlpOutput {
    title: Option<String>,
    uploader: Option<String>,
    channel: Option<String>,
    thumbnail: Option<String>,
    duration: Option<f64>,
    webpage_url: Option<String>,
    original_url: Option<String>,
}

fn search_target(query: &str) -> String {
    let query = query.trim();
    if query.starts_with("http://") || query.starts_with("https://") {
        query.to_string()
    } else {
        format!("ytsearch1:{query}")
    }
}

fn into_song(info: YtDlpOutput, query: &str) -> Song {
    let url = info
        .webpage_url
        .or(info.original_url)
        .unwrap_or_else(|| query.to_string());

    Song {
        title: info.title.unwrap_or_else(|| query.to_string()),
        author: info
            .uploader
            .or(info.channel)
            .unwrap_or_else(|| "Unknown".to_string()),
        url,
        thumbnail: info.thumbnail,
        duration: info.duration.map(|d| d.max(0.0) as u64),
    }
}

/// Resolves a URL or a free-text search to the first matching video.
pub async fn get_song_info(query: &str) -> Result<Song, Error> {
    let target = search_target(query);

    let output = Command::new("yt-dlp")
        .args([
            "-j",
            "-f",
            "bestaudio",
            "--no-playlist",
            "--no-warnings",
            &target,
        ])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("yt-dlp failed: {}", stderr.trim()).into());
    }

    if output.stdout.iter().all(u8::is_ascii_whitespace) {
        return Err(format!("no results for {query}").into());
    }

    let info: YtDlpOutput = serde_json::from_slice(&output.stdout)?;
    Ok(into_song(info, query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_target() {
        assert_eq!(search_target("lofi beats"), "ytsearch1:lofi beats");
        assert_eq!(
            search_target(" https://youtu.be/abc "),
            "https://youtu.be/abc"
        );
    }

    #[test]
    fn test_into_song_prefers_uploader_and_webpage_url() {
        let info: YtDlpOutput = serde_json::from_str(
            r#"{
                "title": "Track",
                "uploader": "Band",
                "channel": "BandVEVO",
                "thumbnail": "https://i.ytimg.com/x.jpg",
                "duration": 213.6,
                "webpage_url": "https://www.youtube.com/watch?v=x",
                "original_url": "https://youtu.be/x"
            }"#,
        )
        .unwrap();

        let song = into_song(info, "track");
        assert_eq!(song.title, "Track");
        assert_eq!(song.author, "Band");
        assert_eq!(song.url, "https://www.youtube.com/watch?v=x");
        assert_eq!(song.duration, Some(213));
        assert_eq!(song.thumbnail.as_deref(), Some("https://i.ytimg.com/x.jpg"));
    }

    #[test]
    fn test_into_song_fallbacks() {
        let info: YtDlpOutput = serde_json::from_str("{}").unwrap();
        let song = into_song(info, "some query");
        assert_eq!(song.title, "some query");
        assert_eq!(song.author, "Unknown");
        assert_eq!(song.url, "some query");
        assert!(song.duration.is_none());
    }
}
