// ABOUTME: HTTP client for the SCM Config and Reporting APIs.
// ABOUTME: Basic-auth reqwest wrapper with vendor status-code mapping.

use super::error::{Error, Result};
use super::types::{
    ActiveTunnel, ItemsEnvelope, NodeRecord, NodeStatus, Org, Site, TunnelStatus, UplinkStatus,
};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

const CONFIG_API: &str = "api/scm.config/1.0";
const REPORTING_API: &str = "api/scm.reporting/1.0";

/// Client for one SCM realm, authenticated with HTTP basic auth.
pub struct ScmClient {
    http: reqwest::Client,
    base_url: String,
    realm: String,
    username: String,
    password: String,
}

impl ScmClient {
    pub fn new(realm: &str, username: &str, password: &str) -> Result<Self> {
        Self::with_base_url(&format!("https://{realm}"), realm, username, password)
    }

    /// Build a client against an explicit base URL. The normal constructor
    /// derives it from the realm; tests point this at a local server.
    pub fn with_base_url(
        base_url: &str,
        realm: &str,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            realm: realm.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    // Config API

    pub async fn orgs(&self) -> Result<Vec<Org>> {
        self.get_items(CONFIG_API, "orgs").await
    }

    pub async fn sites(&self) -> Result<Vec<Site>> {
        self.get_items(CONFIG_API, "sites").await
    }

    pub async fn nodes(&self) -> Result<Vec<NodeRecord>> {
        self.get_items(CONFIG_API, "nodes").await
    }

    pub async fn active_tunnels(&self) -> Result<Vec<ActiveTunnel>> {
        self.get_items(CONFIG_API, "sshtunnel").await
    }

    // Reporting API

    pub async fn uplinks_status(&self) -> Result<Vec<UplinkStatus>> {
        self.get_items(REPORTING_API, "uplinks").await
    }

    pub async fn nodes_status(&self) -> Result<Vec<NodeStatus>> {
        self.get_items(REPORTING_API, "nodes").await
    }

    // Tunnel lifecycle

    pub async fn start_tunnel(&self, node_id: &str) -> Result<()> {
        let path = tunnel_path(node_id);
        let resp = self
            .http
            .post(self.url(CONFIG_API, &path))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|source| self.network(source))?;
        self.check_status(&resp, &path)
    }

    pub async fn tunnel_status(&self, node_id: &str) -> Result<TunnelStatus> {
        self.get_json(CONFIG_API, &tunnel_path(node_id)).await
    }

    pub async fn stop_tunnel(&self, node_id: &str) -> Result<()> {
        let path = tunnel_path(node_id);
        let resp = self
            .http
            .delete(self.url(CONFIG_API, &path))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|source| self.network(source))?;
        self.check_status(&resp, &path)
    }

    // Plumbing

    fn url(&self, api: &str, resource: &str) -> String {
        format!("{}/{}/{}", self.base_url, api, resource)
    }

    fn network(&self, source: reqwest::Error) -> Error {
        Error::Network {
            realm: self.realm.clone(),
            source,
        }
    }

    async fn get_items<T: DeserializeOwned>(&self, api: &str, resource: &str) -> Result<Vec<T>> {
        let envelope: ItemsEnvelope<T> = self.get_json(api, resource).await?;
        Ok(envelope.items)
    }

    async fn get_json<T: DeserializeOwned>(&self, api: &str, resource: &str) -> Result<T> {
        let resp = self
            .http
            .get(self.url(api, resource))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|source| self.network(source))?;

        self.check_status(&resp, resource)?;
        let path = resource.to_string();
        resp.json::<T>().await.map_err(|e| Error::Decode {
            path,
            reason: e.to_string(),
        })
    }

    fn check_status(&self, resp: &Response, path: &str) -> Result<()> {
        match resp.status() {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => Err(Error::AuthenticationFailed {
                realm: self.realm.clone(),
            }),
            StatusCode::BAD_GATEWAY => Err(Error::ApiNotEnabled {
                realm: self.realm.clone(),
            }),
            s => Err(Error::UnexpectedStatus {
                status: s.as_u16(),
                path: path.to_string(),
            }),
        }
    }
}

fn tunnel_path(node_id: &str) -> String {
    format!("sshtunnel/{}", urlencoding::encode(node_id))
}
