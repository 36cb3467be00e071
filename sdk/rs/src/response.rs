use serde::de::DeserializeOwned;
use serde_json::Value;

/// The outcome of an executed [`crate::Call`]: status code plus the raw
/// response body. Astarte wraps every successful reply in a `data`
/// envelope; [`Response::parse`] unwraps it.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Response {
            status,
            body: body.into(),
        }
    }

    /// Returns the JSON value under the `data` envelope.
    pub fn parse(&self) -> eyre::Result<Value> {
        let value: Value = serde_json::from_str(&self.body)
            .map_err(|e| eyre::eyre!("malformed API response: {e}"))?;
        value
            .get("data")
            .cloned()
            .ok_or_else(|| eyre::eyre!("API response carries no data"))
    }

    /// Deserializes the `data` envelope into a typed value.
    pub fn parse_as<T: DeserializeOwned>(&self) -> eyre::Result<T> {
        let data = self.parse()?;
        serde_json::from_value(data).map_err(|e| eyre::eyre!("unexpected API response shape: {e}"))
    }
}
