use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::models::{ProMatch, TeamMatch, TeamProfile};
use super::source::MatchSource;
use super::FORM_WINDOW;

/// Client for the public OpenDota REST API.
/// Docs: <https://docs.opendota.com>
#[derive(Clone)]
pub struct OpenDotaClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenDotaClient {
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(OpenDotaClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))
            .with_context(|| format!("Invalid OpenDota URL for '{}'", path))?;
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("api_key", key);
        }
        Ok(url)
    }

    /// `Ok(None)` for any status other than 200; `Err` for transport and
    /// decoding failures.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.endpoint(path)?;
        debug!("OpenDota GET /{}", path);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .context("OpenDota request failed")?;

        if resp.status() != StatusCode::OK {
            warn!("OpenDota /{} returned {}, using empty result", path, resp.status());
            return Ok(None);
        }

        let body = resp
            .json::<T>()
            .await
            .context("Failed to parse OpenDota response")?;
        Ok(Some(body))
    }

    async fn get_or_empty<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        match self.get_json(path).await {
            Ok(body) => body,
            Err(e) => {
                warn!("OpenDota /{} failed, using empty result: {:#}", path, e);
                None
            }
        }
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Vec<T> {
        let mut items: Vec<T> = self.get_or_empty(path).await.unwrap_or_default();
        items.truncate(FORM_WINDOW);
        items
    }
}

#[async_trait]
impl MatchSource for OpenDotaClient {
    fn name(&self) -> &str {
        "OpenDota"
    }

    async fn pro_matches(&self) -> Vec<ProMatch> {
        self.get_list("proMatches").await
    }

    async fn team_matches(&self, team_id: u64) -> Vec<TeamMatch> {
        self.get_list(&format!("teams/{}/matches", team_id)).await
    }

    async fn team_profile(&self, team_id: u64) -> Option<TeamProfile> {
        self.get_or_empty(&format!("teams/{}", team_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::StatusCode as AxumStatus,
        response::{IntoResponse, Response},
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    async fn pro_matches_handler() -> Json<serde_json::Value> {
        let matches: Vec<_> = (1..=7)
            .map(|i| {
                json!({
                    "match_id": i,
                    "radiant_team_id": 100 + i,
                    "radiant_name": format!("Team {}", 100 + i),
                    "dire_team_id": 200 + i,
                    "dire_name": format!("Team {}", 200 + i),
                })
            })
            .collect();
        Json(json!(matches))
    }

    async fn team_matches_handler(Path(id): Path<u64>) -> Response {
        match id {
            1 => {
                let matches: Vec<_> = (0..8)
                    .map(|i| json!({ "match_id": i, "radiant": true, "radiant_win": i % 2 == 0 }))
                    .collect();
                Json(json!(matches)).into_response()
            }
            2 => (AxumStatus::INTERNAL_SERVER_ERROR, "boom").into_response(),
            3 => "definitely not json".into_response(),
            _ => (AxumStatus::TOO_MANY_REQUESTS, "slow down").into_response(),
        }
    }

    async fn team_profile_handler(
        Path(id): Path<u64>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Response {
        if id == 404 {
            return (AxumStatus::NOT_FOUND, "").into_response();
        }
        Json(json!({
            "team_id": id,
            "name": params.get("api_key").cloned().unwrap_or_else(|| "no key".into()),
            "tag": "TAG",
        }))
        .into_response()
    }

    async fn spawn_stub() -> String {
        let app = Router::new()
            .route("/api/proMatches", get(pro_matches_handler))
            .route("/api/teams/:id/matches", get(team_matches_handler))
            .route("/api/teams/:id", get(team_profile_handler));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    fn client(base: &str, key: Option<&str>) -> OpenDotaClient {
        OpenDotaClient::new(base, key, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_pro_matches_truncated_to_window() {
        let base = spawn_stub().await;
        let matches = client(&base, None).pro_matches().await;
        assert_eq!(matches.len(), FORM_WINDOW);
        assert_eq!(matches[0].match_id, Some(1));
        assert_eq!(matches[0].radiant_name.as_deref(), Some("Team 101"));
        assert_eq!(matches[4].dire_team_id, Some(205));
    }

    #[tokio::test]
    async fn test_team_matches_keep_order() {
        let base = spawn_stub().await;
        let matches = client(&base, None).team_matches(1).await;
        let ids: Vec<_> = matches.iter().map(|m| m.match_id).collect();
        assert_eq!(ids, vec![Some(0), Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(matches[1].radiant_win, Some(false));
    }

    #[tokio::test]
    async fn test_non_200_yields_empty() {
        let base = spawn_stub().await;
        let c = client(&base, None);
        assert!(c.team_matches(2).await.is_empty());
        assert!(c.team_matches(99).await.is_empty());
        assert!(c.team_profile(404).await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_yields_empty() {
        let base = spawn_stub().await;
        assert!(client(&base, None).team_matches(3).await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_yields_empty() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let c = client(&format!("http://{}/api", addr), None);
        assert!(c.pro_matches().await.is_empty());
        assert!(c.team_profile(1).await.is_none());
    }

    #[tokio::test]
    async fn test_api_key_forwarded_when_configured() {
        let base = spawn_stub().await;
        let with_key = client(&base, Some("s3cret")).team_profile(7).await.unwrap();
        assert_eq!(with_key.name.as_deref(), Some("s3cret"));
        assert_eq!(with_key.team_id, Some(7));

        let blank_key = client(&base, Some("   ")).team_profile(7).await.unwrap();
        assert_eq!(blank_key.name.as_deref(), Some("no key"));
    }

    #[tokio::test]
    async fn test_endpoint_building() {
        let c = client("https://api.opendota.com/api/", Some("k y"));
        let url = c.endpoint("teams/15/matches").unwrap();
        assert_eq!(url.as_str(), "https://api.opendota.com/api/teams/15/matches?api_key=k+y");

        let c = client("https://api.opendota.com/api", None);
        assert_eq!(
            c.endpoint("proMatches").unwrap().as_str(),
            "https://api.opendota.com/api/proMatches"
        );
    }
}
