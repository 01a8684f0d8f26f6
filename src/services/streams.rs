use std::sync::Arc;

use serde::Deserialize;
use url::Url;

use crate::error::{AppError, AppResult};
use crate::i18n;
use crate::store::{CreateStream, Stream, StreamRepository, StreamType, UpdateStream};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateStreamRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub stream_type: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStreamRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub stream_type: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

pub struct StreamService;

impl StreamService {
    /// The source must parse as an absolute URL (any scheme).
    pub fn validate_url(url: &str) -> AppResult<()> {
        Url::parse(url)
            .map(|_| ())
            .map_err(|_| AppError::Validation(i18n::t("validation.stream_url_invalid")))
    }

    pub fn parse_type(value: &str) -> AppResult<StreamType> {
        StreamType::parse(value)
            .ok_or_else(|| AppError::Validation(i18n::t("validation.stream_type_invalid")))
    }

    /// Validate a create request and normalize its string fields.
    pub fn prepare_create(request: CreateStreamRequest) -> AppResult<CreateStream> {
        let name = request.name.as_deref().map(str::trim).unwrap_or_default();
        let url = request.url.as_deref().map(str::trim).unwrap_or_default();
        let stream_type = request.stream_type.as_deref().unwrap_or_default();

        if name.is_empty() || url.is_empty() || stream_type.is_empty() {
            return Err(AppError::Validation(i18n::t(
                "validation.stream_required_fields",
            )));
        }

        Self::validate_url(url)?;
        let stream_type = Self::parse_type(stream_type)?;

        Ok(CreateStream {
            name: name.to_string(),
            url: url.to_string(),
            stream_type,
            description: request
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            enabled: request.enabled.unwrap_or(true),
        })
    }

    /// Validate the provided subset of fields; absent fields stay `None`.
    pub fn prepare_update(request: UpdateStreamRequest) -> AppResult<UpdateStream> {
        let url = request.url.map(|u| u.trim().to_string());
        if let Some(ref url) = url {
            Self::validate_url(url)?;
        }

        let stream_type = request
            .stream_type
            .as_deref()
            .map(Self::parse_type)
            .transpose()?;

        Ok(UpdateStream {
            name: request.name.map(|n| n.trim().to_string()),
            url,
            stream_type,
            description: request.description.map(|d| d.trim().to_string()),
            enabled: request.enabled,
        })
    }

    pub async fn create(state: &Arc<AppState>, request: CreateStreamRequest) -> AppResult<Stream> {
        let data = Self::prepare_create(request)?;
        let stream = StreamRepository::create(&state.store, data).await;
        tracing::info!("Stream created: {} ({})", stream.id, stream.stream_type.as_str());
        Ok(stream)
    }

    pub async fn get(state: &Arc<AppState>, id: &str) -> AppResult<Stream> {
        StreamRepository::find_by_id(&state.store, id)
            .await
            .ok_or(AppError::StreamNotFound)
    }

    /// Unknown ids are reported before the payload is validated.
    pub async fn update(
        state: &Arc<AppState>,
        id: &str,
        request: UpdateStreamRequest,
    ) -> AppResult<Stream> {
        Self::get(state, id).await?;

        let update = Self::prepare_update(request)?;
        StreamRepository::update(&state.store, id, update)
            .await
            .ok_or(AppError::StreamNotFound)
    }

    pub async fn delete(state: &Arc<AppState>, id: &str) -> AppResult<Stream> {
        let stream = StreamRepository::delete(&state.store, id)
            .await
            .ok_or(AppError::StreamNotFound)?;
        tracing::info!("Stream deleted: {}", stream.id);
        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(name: &str, url: &str, kind: &str) -> CreateStreamRequest {
        CreateStreamRequest {
            name: Some(name.to_string()),
            url: Some(url.to_string()),
            stream_type: Some(kind.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn create_trims_and_defaults() {
        let data =
            StreamService::prepare_create(create_request("  Test  ", " http://x/live/s.m3u8 ", "hls"))
                .unwrap();
        assert_eq!(data.name, "Test");
        assert_eq!(data.url, "http://x/live/s.m3u8");
        assert_eq!(data.stream_type, StreamType::Hls);
        assert_eq!(data.description, "");
        assert!(data.enabled);
    }

    #[test]
    fn create_requires_name_url_and_type() {
        let err = StreamService::prepare_create(CreateStreamRequest {
            name: Some("n".into()),
            url: Some("http://x".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = StreamService::prepare_create(create_request("   ", "http://x", "hls")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn create_rejects_relative_url_and_unknown_type() {
        assert!(matches!(
            StreamService::prepare_create(create_request("n", "live/s.m3u8", "hls")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            StreamService::prepare_create(create_request("n", "http://x/s", "dash")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn absolute_urls_of_any_scheme_are_accepted() {
        tokio_test::assert_ok!(StreamService::validate_url("rtmp://localhost/live/main"));
        tokio_test::assert_ok!(StreamService::validate_url("http://localhost:8086/live/side.m3u8"));
        tokio_test::assert_err!(StreamService::validate_url("/live/main"));
    }

    #[test]
    fn update_validates_only_provided_fields() {
        let update = StreamService::prepare_update(UpdateStreamRequest {
            name: Some(" Renamed ".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(update.name.as_deref(), Some("Renamed"));
        assert!(update.url.is_none());
        assert!(update.stream_type.is_none());

        assert!(StreamService::prepare_update(UpdateStreamRequest {
            url: Some("nope".into()),
            ..Default::default()
        })
        .is_err());
        assert!(StreamService::prepare_update(UpdateStreamRequest {
            stream_type: Some("RTMP".into()),
            ..Default::default()
        })
        .is_err());
    }
}
