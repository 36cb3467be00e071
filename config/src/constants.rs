// Path suffixes appended to the Astarte base URL when no per-service
// override is given.
pub const APPENGINE_URL_SUFFIX: &str = "/appengine";
pub const PAIRING_URL_SUFFIX: &str = "/pairing";
pub const REALM_MANAGEMENT_URL_SUFFIX: &str = "/realmmanagement";

// Authorization claim names recognized by each Astarte API.
pub const APPENGINE_CLAIM: &str = "a_aea";
pub const PAIRING_CLAIM: &str = "a_pa";
pub const REALM_MANAGEMENT_CLAIM: &str = "a_rma";

pub const SERVICE_NAME_APPENGINE: &str = "appengine";
pub const SERVICE_NAME_PAIRING: &str = "pairing";
pub const SERVICE_NAME_REALM_MANAGEMENT: &str = "realm-management";
