use std::collections::HashMap;
use url::Url;

use crate::service::AstarteService;

/// Resolves the base URL for one service: an explicit override wins
/// verbatim, otherwise the Astarte base URL plus the service's fixed
/// suffix is used.
pub fn resolve_service_url(
    service: AstarteService,
    override_url: Option<&str>,
    base_url: Option<&str>,
) -> eyre::Result<Url> {
    if let Some(override_url) = override_url {
        return Url::parse(override_url)
            .map_err(|e| eyre::eyre!("invalid {service} URL {override_url}: {e}"));
    }

    match base_url {
        Some(base) => {
            let joined = format!("{}{}", base.trim_end_matches('/'), service.url_suffix());
            Url::parse(&joined).map_err(|e| eyre::eyre!("invalid astarte URL {base}: {e}"))
        }
        None => Err(eyre::eyre!(
            "no URL available for the {service} API, set astarte-url or {service}-url"
        )),
    }
}

/// Resolves every service a command group needs into its base URL.
pub fn resolve_service_urls(
    services: &[AstarteService],
    overrides: &HashMap<AstarteService, String>,
    base_url: Option<&str>,
) -> eyre::Result<HashMap<AstarteService, Url>> {
    services
        .iter()
        .map(|&service| {
            resolve_service_url(
                service,
                overrides.get(&service).map(String::as_str),
                base_url,
            )
            .map(|url| (service, url))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_over_base() {
        let url = resolve_service_url(
            AstarteService::Pairing,
            Some("https://pairing.internal.example.com"),
            Some("https://api.astarte.example.com"),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://pairing.internal.example.com/");
    }

    #[test]
    fn test_override_without_base() {
        let url = resolve_service_url(
            AstarteService::AppEngine,
            Some("https://appengine.internal.example.com"),
            None,
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://appengine.internal.example.com/");
    }

    #[test]
    fn test_derived_from_base() {
        let url = resolve_service_url(
            AstarteService::RealmManagement,
            None,
            Some("https://api.astarte.example.com"),
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.astarte.example.com/realmmanagement"
        );
    }

    #[test]
    fn test_derived_from_base_with_trailing_slash() {
        let url = resolve_service_url(
            AstarteService::AppEngine,
            None,
            Some("https://api.astarte.example.com/"),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://api.astarte.example.com/appengine");
    }

    #[test]
    fn test_no_override_no_base() {
        let err = resolve_service_url(AstarteService::Pairing, None, None).unwrap_err();
        assert!(err.to_string().contains("pairing"));
    }

    #[test]
    fn test_invalid_override() {
        assert!(resolve_service_url(AstarteService::Pairing, Some("not a url"), None).is_err());
    }

    #[test]
    fn test_resolve_many_mixed() {
        let mut overrides = HashMap::new();
        overrides.insert(
            AstarteService::Pairing,
            "https://pairing.internal.example.com".to_string(),
        );

        let urls = resolve_service_urls(
            &[AstarteService::AppEngine, AstarteService::Pairing],
            &overrides,
            Some("https://api.astarte.example.com"),
        )
        .unwrap();

        assert_eq!(
            urls[&AstarteService::AppEngine].as_str(),
            "https://api.astarte.example.com/appengine"
        );
        assert_eq!(
            urls[&AstarteService::Pairing].as_str(),
            "https://pairing.internal.example.com/"
        );
    }

    #[test]
    fn test_resolve_many_missing_base() {
        let err = resolve_service_urls(
            &[AstarteService::RealmManagement],
            &HashMap::new(),
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("realm-management"));
    }
}
