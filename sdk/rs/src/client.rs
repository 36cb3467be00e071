use std::collections::HashMap;
use url::Url;

use astarte_config::AstarteService;

use crate::{auth::TOKEN_TTL_SECS, Call, RealmKey, Response};

/// An authenticated handle to a set of Astarte APIs. Bound to the service
/// URLs and realm key it was constructed with; every executed call carries
/// a freshly signed short-lived token.
pub struct AstarteClient {
    urls: HashMap<AstarteService, Url>,
    key: RealmKey,
    http: reqwest::blocking::Client,
}

impl AstarteClient {
    pub fn new(urls: HashMap<AstarteService, Url>, key: RealmKey) -> eyre::Result<Self> {
        if urls.is_empty() {
            eyre::bail!("at least one service URL is required");
        }

        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("astartectl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(AstarteClient { urls, key, http })
    }

    /// The services this client was configured for.
    pub fn services(&self) -> Vec<AstarteService> {
        let mut services: Vec<AstarteService> = self.urls.keys().copied().collect();
        services.sort_by_key(|s| s.to_string());
        services
    }

    pub fn url_for(&self, service: AstarteService) -> eyre::Result<&Url> {
        self.urls
            .get(&service)
            .ok_or_else(|| eyre::eyre!("client has no URL configured for the {service} API"))
    }

    /// Builds an endpoint URL for one service from path segments. Segments
    /// are percent-encoded, so resource names are safe to pass through.
    pub fn endpoint(&self, service: AstarteService, segments: &[&str]) -> eyre::Result<Url> {
        let mut url = self.url_for(service)?.clone();
        url.path_segments_mut()
            .map_err(|_| eyre::eyre!("{service} URL cannot host API paths"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Signs a fresh token covering every service this client is bound to.
    pub fn generate_token(&self) -> eyre::Result<String> {
        self.key.generate_token(&self.services(), TOKEN_TTL_SECS)
    }

    /// Executes a call, consuming it. Non-2xx responses are errors carrying
    /// the status and the response body.
    pub fn execute(&self, call: Call) -> eyre::Result<Response> {
        let token = self.generate_token()?;

        log::debug!("{} {}", call.method, call.url);

        let mut request = self
            .http
            .request(call.method.clone(), call.url.clone())
            .bearer_auth(&token);
        if let Some(body) = &call.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .map_err(|e| eyre::eyre!("request to {} failed: {e}", call.url))?;

        let status = response.status();
        let body = response.text().unwrap_or_default();
        if !status.is_success() {
            eyre::bail!(
                "{} {} returned {}: {}",
                call.method,
                call.url,
                status,
                body.trim()
            );
        }

        Ok(Response::new(status.as_u16(), body))
    }
}
