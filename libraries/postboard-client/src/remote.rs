//! Live access to the remote REST API.

use crate::backend::Backend;
use crate::error::{ClientError, Result};
use crate::types::ClientConfig;
use async_trait::async_trait;
use postboard_core::{Resource, ResourceKind};
use postboard_store::Stored;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP access to the `/users` and `/posts` endpoints.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RemoteApi {
    http: Client,
    base_url: String,
}

impl RemoteApi {
    /// Create an API handle from the client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        // The probe sets its own per-request timeout; dispatch is bounded
        // only when a request timeout is configured.
        let mut builder =
            Client::builder().user_agent(format!("Postboard/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    /// Normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/{}", self.base_url, kind.path())
    }

    fn entity_url(&self, kind: ResourceKind, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, kind.path(), id)
    }

    /// Check whether the collection endpoint answers with a 2xx within `timeout`.
    ///
    /// The error carries the reason, for logging only.
    pub async fn probe(
        &self,
        kind: ResourceKind,
        timeout: Duration,
    ) -> std::result::Result<(), String> {
        let url = self.collection_url(kind);
        debug!(url = %url, timeout_ms = timeout.as_millis() as u64, "Probing remote API");

        let response = self
            .http
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    format!("timed out after {}ms", timeout.as_millis())
                } else {
                    e.to_string()
                }
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(format!("probe returned HTTP {}", status.as_u16()))
        }
    }
}

/// Turn a non-success response into a `ServerError`.
async fn server_error(response: Response) -> ClientError {
    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    ClientError::ServerError {
        status: status.as_u16(),
        message: error_text,
    }
}

/// Decode a response body, mapping 404 on an entity lookup to `NotFound`.
async fn read_json<T: DeserializeOwned>(
    response: Response,
    kind: ResourceKind,
    id: Option<i64>,
) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response.json::<T>().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse {} response: {}", kind.path(), e))
        })
    } else if status == StatusCode::NOT_FOUND {
        match id {
            Some(id) => Err(ClientError::not_found(kind, id)),
            None => Err(server_error(response).await),
        }
    } else {
        Err(server_error(response).await)
    }
}

/// Decode the body of a live update.
///
/// A full entity is returned as sent by the server. Some APIs echo only the
/// submitted fields plus the id; such a body is completed from the patch that
/// was sent, and fields neither sent nor echoed are left empty.
fn updated_entity<R: Resource>(id: i64, sent: R::Patch, body: Value) -> Result<R> {
    if let Ok(entity) = R::deserialize(&body) {
        return Ok(entity);
    }

    let parse_error = |e: serde_json::Error| {
        ClientError::ParseError(format!(
            "Failed to parse {} update response: {}",
            R::KIND.path(),
            e
        ))
    };

    if !body.is_object() {
        return Err(ClientError::ParseError(format!(
            "Failed to parse {} update response: expected an object",
            R::KIND.path()
        )));
    }

    let id = body.get("id").and_then(Value::as_i64).unwrap_or(id);
    let echoed = <R::Patch as Deserialize>::deserialize(&body).map_err(parse_error)?;
    debug!(id, "Completing partial update response from the sent fields");

    let mut entity = R::from_patch(id, sent);
    entity.apply_patch(echoed);
    Ok(entity)
}

#[async_trait]
impl<R: Stored> Backend<R> for RemoteApi {
    async fn get_all(&self) -> Result<Vec<R>> {
        let url = self.collection_url(R::KIND);
        debug!(url = %url, "Fetching collection");

        let response = self.http.get(&url).send().await?;
        let entities: Vec<R> = read_json(response, R::KIND, None).await?;

        debug!(count = entities.len(), "Fetched collection");
        Ok(entities)
    }

    async fn get_by_id(&self, id: i64) -> Result<R> {
        let url = self.entity_url(R::KIND, id);
        debug!(url = %url, id, "Fetching entity");

        let response = self.http.get(&url).send().await?;
        read_json(response, R::KIND, Some(id)).await
    }

    async fn get_by_user_id(&self, user_id: i64) -> Result<Vec<R>> {
        // Users own nothing; answer like the fallback store does
        if !R::KIND.has_owner() {
            debug!(resource = %R::KIND, user_id, "Collection has no owner, nothing to filter");
            return Ok(Vec::new());
        }

        let url = self.collection_url(R::KIND);
        debug!(url = %url, user_id, "Fetching collection filtered by user");

        let response = self
            .http
            .get(&url)
            .query(&[("userId", user_id)])
            .send()
            .await?;
        read_json(response, R::KIND, None).await
    }

    async fn create(&self, data: R::New) -> Result<R> {
        let url = self.collection_url(R::KIND);
        debug!(url = %url, "Creating entity");

        let response = self.http.post(&url).json(&data).send().await?;
        read_json(response, R::KIND, None).await
    }

    async fn update(&self, id: i64, patch: R::Patch) -> Result<R> {
        let url = self.entity_url(R::KIND, id);
        debug!(url = %url, id, "Updating entity");

        let response = self.http.put(&url).json(&patch).send().await?;
        let body: Value = read_json(response, R::KIND, Some(id)).await?;
        updated_entity(id, patch, body)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = self.entity_url(R::KIND, id);
        debug!(url = %url, id, "Deleting entity");

        let response = self.http.delete(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status == StatusCode::NOT_FOUND {
            // Already gone, that's fine
            Ok(())
        } else {
            Err(server_error(response).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(RemoteApi::new(&ClientConfig::new("https://example.com")).is_ok());
        assert!(RemoteApi::new(&ClientConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(RemoteApi::new(&ClientConfig::new("")).is_err());
        assert!(RemoteApi::new(&ClientConfig::new("not-a-url")).is_err());
        assert!(RemoteApi::new(&ClientConfig::new("ftp://example.com")).is_err());
        assert!(RemoteApi::new(&ClientConfig::new("http://")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let api = RemoteApi::new(&ClientConfig::new("https://example.com/")).expect("valid url");
        assert_eq!(api.base_url(), "https://example.com");
        assert_eq!(
            api.entity_url(ResourceKind::Posts, 3),
            "https://example.com/posts/3"
        );
    }
}
