use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery transport declared for a stream source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    Hls,
    Rtmp,
    Flv,
}

impl StreamType {
    /// Parse the wire value. Matching is exact: `"HLS"` is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hls" => Some(StreamType::Hls),
            "rtmp" => Some(StreamType::Rtmp),
            "flv" => Some(StreamType::Flv),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StreamType::Hls => "hls",
            StreamType::Rtmp => "rtmp",
            StreamType::Flv => "flv",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub stream_type: StreamType,
    pub description: String,
    pub enabled: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateStream {
    pub name: String,
    pub url: String,
    pub stream_type: StreamType,
    pub description: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStream {
    pub name: Option<String>,
    pub url: Option<String>,
    pub stream_type: Option<StreamType>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_type_parse_is_exact() {
        assert_eq!(StreamType::parse("rtmp"), Some(StreamType::Rtmp));
        assert_eq!(StreamType::parse("HLS"), None);
        assert_eq!(StreamType::parse("webrtc"), None);
        assert_eq!(StreamType::Flv.as_str(), "flv");
    }

    #[test]
    fn stream_serializes_type_field() {
        let now = Utc::now();
        let stream = Stream {
            id: "s".into(),
            name: "n".into(),
            url: "http://x/live/a.flv".into(),
            stream_type: StreamType::Flv,
            description: String::new(),
            enabled: true,
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&stream).unwrap();
        assert_eq!(value["type"], "flv");
        assert!(value.get("createdAt").is_some());
    }
}
