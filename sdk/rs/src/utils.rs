use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// How a device is addressed in AppEngine API paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceIdentifierType {
    DeviceId,
    Alias,
}

/// An Astarte device ID is the URL-safe unpadded base64 encoding of a
/// 128-bit identifier.
pub fn is_valid_device_id(id: &str) -> bool {
    match URL_SAFE_NO_PAD.decode(id) {
        Ok(bytes) => bytes.len() == 16,
        Err(_) => false,
    }
}

/// Resolves how to interpret a device identifier. With no forced type,
/// anything that is a syntactically valid device ID is treated as one and
/// everything else as an alias.
pub fn resolve_device_identifier_type(
    identifier: &str,
    forced: Option<&str>,
) -> eyre::Result<DeviceIdentifierType> {
    match forced {
        None => {
            if is_valid_device_id(identifier) {
                Ok(DeviceIdentifierType::DeviceId)
            } else {
                Ok(DeviceIdentifierType::Alias)
            }
        }
        Some("device-id") => {
            if !is_valid_device_id(identifier) {
                eyre::bail!(
                    "required to evaluate the device identifier as an Astarte device ID, but {identifier} isn't a valid one"
                );
            }
            Ok(DeviceIdentifierType::DeviceId)
        }
        Some("alias") => Ok(DeviceIdentifierType::Alias),
        Some(other) => eyre::bail!(
            "{other} is not a valid device identifier type. Valid options are [device-id alias]"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 22 base64url chars, 16 bytes once decoded.
    const VALID_DEVICE_ID: &str = "olFkumNuZ_J0f_d6-8XCDg";

    #[test]
    fn test_valid_device_id() {
        assert!(is_valid_device_id(VALID_DEVICE_ID));
    }

    #[test]
    fn test_invalid_device_ids() {
        assert!(!is_valid_device_id("too_short"));
        assert!(!is_valid_device_id("not/base64url/but22char"));
        assert!(!is_valid_device_id(""));
    }

    #[test]
    fn test_autodiscover_device_id() {
        assert_eq!(
            resolve_device_identifier_type(VALID_DEVICE_ID, None).unwrap(),
            DeviceIdentifierType::DeviceId
        );
    }

    #[test]
    fn test_autodiscover_alias() {
        assert_eq!(
            resolve_device_identifier_type("kitchen-sensor", None).unwrap(),
            DeviceIdentifierType::Alias
        );
    }

    #[test]
    fn test_forced_device_id_rejects_invalid() {
        assert!(resolve_device_identifier_type("kitchen-sensor", Some("device-id")).is_err());
    }

    #[test]
    fn test_forced_alias_accepts_anything() {
        assert_eq!(
            resolve_device_identifier_type(VALID_DEVICE_ID, Some("alias")).unwrap(),
            DeviceIdentifierType::Alias
        );
    }

    #[test]
    fn test_unknown_forced_type() {
        assert!(resolve_device_identifier_type(VALID_DEVICE_ID, Some("mac")).is_err());
    }
}
