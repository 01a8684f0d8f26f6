//! Playback URL derivation for configured streams.
//!
//! A stream declares one source URL and a transport. Players on the console
//! side want the same feed in HLS, FLV and RTMP flavours where the media
//! server can provide them, so the alternates are synthesized from the source
//! and the media server's public host. This is plain string manipulation; no
//! network access happens here.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::config::StreamingConfig;
use crate::store::Stream;

/// Stream name used when nothing usable can be extracted from a source URL.
pub const FALLBACK_STREAM_NAME: &str = "stream";

lazy_static! {
    // Last path component with a trailing extension stripped.
    static ref LAST_COMPONENT: Regex =
        Regex::new(r"([^/]+?)(?:\.[^./]+)?$").expect("stream name pattern must compile");
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayUrls {
    pub hls: Option<String>,
    pub flv: Option<String>,
    pub rtmp: Option<String>,
}

impl PlayUrls {
    pub fn for_stream(stream: &Stream, streaming: &StreamingConfig) -> Self {
        derive_play_urls(stream.stream_type.as_str(), &stream.url, streaming)
    }
}

/// Extract the stream name token from a source URL.
pub fn stream_name(source: &str) -> String {
    match Url::parse(source) {
        Ok(url) => url
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .last()
            .map(str::to_string),
        Err(_) => LAST_COMPONENT
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
    }
    .unwrap_or_else(|| FALLBACK_STREAM_NAME.to_string())
}

fn media_server_url(streaming: &StreamingConfig, name: &str, ext: &str) -> String {
    format!(
        "http://{}:{}/live/{}.{}",
        streaming.server_ip, streaming.hls_port, name, ext
    )
}

/// Compute alternate playback URLs for a source of the given transport.
///
/// `kind` is the wire value of the stream type; unrecognized kinds play the
/// source as HLS.
pub fn derive_play_urls(kind: &str, source: &str, streaming: &StreamingConfig) -> PlayUrls {
    match kind {
        "hls" => PlayUrls {
            hls: Some(source.to_string()),
            flv: source
                .contains(".m3u8")
                .then(|| source.replacen(".m3u8", ".flv", 1)),
            rtmp: None,
        },
        "rtmp" => {
            let name = stream_name(source);
            PlayUrls {
                hls: Some(media_server_url(streaming, &name, "m3u8")),
                flv: Some(media_server_url(streaming, &name, "flv")),
                rtmp: Some(source.replacen("localhost", &streaming.server_ip, 1)),
            }
        }
        "flv" => PlayUrls {
            hls: source
                .contains(".flv")
                .then(|| media_server_url(streaming, &stream_name(source), "m3u8")),
            flv: Some(source.to_string()),
            rtmp: None,
        },
        _ => PlayUrls {
            hls: Some(source.to_string()),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn streaming() -> StreamingConfig {
        StreamingConfig {
            server_ip: "10.0.0.5".to_string(),
            hls_port: 9000,
            rtmp_port: 1935,
        }
    }

    #[test]
    fn hls_source_gets_flv_sibling() {
        let urls = derive_play_urls("hls", "http://x/live/s.m3u8", &streaming());
        assert_eq!(urls.hls.as_deref(), Some("http://x/live/s.m3u8"));
        assert_eq!(urls.flv.as_deref(), Some("http://x/live/s.flv"));
        assert_eq!(urls.rtmp, None);
    }

    #[test]
    fn hls_source_without_playlist_marker_has_no_flv() {
        let urls = derive_play_urls("hls", "http://x/live/s", &streaming());
        assert_eq!(urls.hls.as_deref(), Some("http://x/live/s"));
        assert_eq!(urls.flv, None);
    }

    #[test]
    fn rtmp_source_is_republished_through_media_server() {
        let urls = derive_play_urls("rtmp", "rtmp://localhost/live/main", &streaming());
        assert_eq!(
            urls.hls.as_deref(),
            Some("http://10.0.0.5:9000/live/main.m3u8")
        );
        assert_eq!(urls.flv.as_deref(), Some("http://10.0.0.5:9000/live/main.flv"));
        assert_eq!(urls.rtmp.as_deref(), Some("rtmp://10.0.0.5/live/main"));
    }

    #[test]
    fn rtmp_source_on_remote_host_keeps_its_address() {
        let urls = derive_play_urls("rtmp", "rtmp://media.example.com:1935/app/key", &streaming());
        assert_eq!(
            urls.rtmp.as_deref(),
            Some("rtmp://media.example.com:1935/app/key")
        );
        assert_eq!(urls.flv.as_deref(), Some("http://10.0.0.5:9000/live/key.flv"));
    }

    #[test]
    fn flv_source_gets_hls_from_full_segment_name() {
        let urls = derive_play_urls("flv", "http://localhost:8086/live/guest.flv", &streaming());
        assert_eq!(urls.flv.as_deref(), Some("http://localhost:8086/live/guest.flv"));
        assert_eq!(
            urls.hls.as_deref(),
            Some("http://10.0.0.5:9000/live/guest.flv.m3u8")
        );
        assert_eq!(urls.rtmp, None);
    }

    #[test]
    fn flv_source_without_marker_has_no_hls() {
        let urls = derive_play_urls("flv", "http://x/live/feed", &streaming());
        assert_eq!(urls.hls, None);
        assert_eq!(urls.flv.as_deref(), Some("http://x/live/feed"));
    }

    #[test]
    fn unknown_kind_plays_source_as_hls() {
        let urls = derive_play_urls("webrtc", "http://x/whep/abc", &streaming());
        assert_eq!(urls.hls.as_deref(), Some("http://x/whep/abc"));
        assert_eq!(urls.flv, None);
        assert_eq!(urls.rtmp, None);
    }

    #[test]
    fn stream_name_uses_last_non_empty_segment() {
        assert_eq!(stream_name("rtmp://localhost/live/main"), "main");
        assert_eq!(stream_name("http://x/live/s.m3u8"), "s.m3u8");
        assert_eq!(stream_name("http://x/live/room/"), "room");
    }

    #[test]
    fn stream_name_on_unparseable_input_strips_extension() {
        assert_eq!(stream_name("live/side.m3u8"), "side");
        assert_eq!(stream_name("archive.tar.gz"), "archive.tar");
    }

    #[test]
    fn malformed_sources_degrade_to_fallback_name() {
        assert_eq!(stream_name(""), FALLBACK_STREAM_NAME);
        assert_eq!(stream_name("not a url/"), FALLBACK_STREAM_NAME);
        assert_eq!(stream_name("rtmp://host"), FALLBACK_STREAM_NAME);

        let urls = derive_play_urls("rtmp", "not a url/", &streaming());
        assert_eq!(
            urls.hls.as_deref(),
            Some("http://10.0.0.5:9000/live/stream.m3u8")
        );
        assert_eq!(urls.rtmp.as_deref(), Some("not a url/"));
    }
}
