use http::Method;
use serde_json::Value;
use url::Url;

/// A fully specified, not yet executed API request. Immutable once built,
/// consumed exactly once by [`crate::AstarteClient::execute`].
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
}

impl Call {
    pub fn new(method: Method, url: Url) -> Self {
        Call {
            method,
            url,
            body: None,
        }
    }

    pub fn with_body(method: Method, url: Url, body: Value) -> Self {
        Call {
            method,
            url,
            body: Some(body),
        }
    }

    /// Renders the call as an equivalent curl invocation, used by the
    /// `--to-curl` dry-run mode.
    pub fn to_curl(&self, token: &str) -> String {
        let mut curl = format!(
            "curl -X {} \"{}\" -H \"Authorization: Bearer {}\"",
            self.method, self.url, token
        );
        if let Some(body) = &self.body {
            curl.push_str(" -H \"Content-Type: application/json\" -d '");
            curl.push_str(&body.to_string());
            curl.push('\'');
        }
        curl
    }
}
