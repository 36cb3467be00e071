use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::*;

/// One of the Astarte management APIs a command can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AstarteService {
    AppEngine,
    Pairing,
    RealmManagement,
}

impl AstarteService {
    /// Path suffix appended to the Astarte base URL when deriving this
    /// service's URL.
    pub fn url_suffix(&self) -> &'static str {
        match self {
            AstarteService::AppEngine => APPENGINE_URL_SUFFIX,
            AstarteService::Pairing => PAIRING_URL_SUFFIX,
            AstarteService::RealmManagement => REALM_MANAGEMENT_URL_SUFFIX,
        }
    }

    /// JWT authorization claim this service checks.
    pub fn claim(&self) -> &'static str {
        match self {
            AstarteService::AppEngine => APPENGINE_CLAIM,
            AstarteService::Pairing => PAIRING_CLAIM,
            AstarteService::RealmManagement => REALM_MANAGEMENT_CLAIM,
        }
    }
}

impl std::str::FromStr for AstarteService {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SERVICE_NAME_APPENGINE => Ok(AstarteService::AppEngine),
            SERVICE_NAME_PAIRING => Ok(AstarteService::Pairing),
            SERVICE_NAME_REALM_MANAGEMENT | "realmmanagement" => {
                Ok(AstarteService::RealmManagement)
            }
            _ => Err(eyre::eyre!(
                "Invalid service {s}, must be one of: {SERVICE_NAME_APPENGINE}, {SERVICE_NAME_PAIRING}, {SERVICE_NAME_REALM_MANAGEMENT}",
            )),
        }
    }
}

impl fmt::Display for AstarteService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstarteService::AppEngine => write!(f, "{SERVICE_NAME_APPENGINE}"),
            AstarteService::Pairing => write!(f, "{SERVICE_NAME_PAIRING}"),
            AstarteService::RealmManagement => write!(f, "{SERVICE_NAME_REALM_MANAGEMENT}"),
        }
    }
}
