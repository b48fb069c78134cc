//! Read-only configuration profiles.
//!
//! An orchestration command context carries a resource's identity and its
//! attribute dictionary over the wire. [`ResourceProfile`] wraps that
//! snapshot and resolves attribute keys through the same prefix convention
//! the writable entity uses, without ever mutating the dictionary.

use crate::error::StandardsError;

/// Snapshot of a resource as supplied by an orchestration command context.
#[derive(Debug, Clone, Default)]
pub struct ResourceContext {
    pub address: String,
    pub family: String,
    pub fullname: String,
    pub name: String,
    /// Wire order is preserved; lookups scan linearly.
    pub attributes: Vec<(String, String)>,
}

/// Read-only attribute view over a [`ResourceContext`].
#[derive(Debug, Clone)]
pub struct ResourceProfile {
    context: ResourceContext,
    namespace_prefix: String,
    shell_type_prefix: String,
}

impl ResourceProfile {
    pub fn from_context(
        shell_name: &str,
        shell_type: &str,
        context: ResourceContext,
    ) -> Result<Self, StandardsError> {
        if shell_name.is_empty() {
            return Err(StandardsError::FirstGenShell);
        }
        Ok(Self {
            namespace_prefix: format!("{shell_name}."),
            shell_type_prefix: format!("{shell_type}."),
            context,
        })
    }

    pub fn context(&self) -> &ResourceContext {
        &self.context
    }

    /// Namespace-level attribute, e.g. `attribute("User")`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.lookup(&format!("{}{}", self.namespace_prefix, name))
    }

    /// Shell-type-level attribute, e.g. the license server of a virtual
    /// traffic-generator chassis.
    pub fn shell_attribute(&self, name: &str) -> Option<&str> {
        self.lookup(&format!("{}{}", self.shell_type_prefix, name))
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.context
            .attributes
            .iter()
            .find(|e| e.0 == key)
            .map(|e| e.1.as_str())
    }

    /// Trunk ports the controller should enable, as `(address, port)` pairs.
    pub fn add_trunk_ports(&self) -> Result<Vec<(String, String)>, StandardsError> {
        parse_port_pairs(self.attribute("Enable Full Trunk Ports").unwrap_or(""))
    }

    /// Trunk ports the controller should disable, as `(address, port)` pairs.
    pub fn remove_trunk_ports(&self) -> Result<Vec<(String, String)>, StandardsError> {
        parse_port_pairs(self.attribute("Disable Full Trunk Ports").unwrap_or(""))
    }
}

/// Parse a `"address::port;address::port;"` list into pairs.
///
/// Trailing separators are tolerated; an empty list is fine. A segment
/// without exactly one `::` separator is a typed error.
pub fn parse_port_pairs(ports: &str) -> Result<Vec<(String, String)>, StandardsError> {
    let ports = ports.trim().trim_matches(';');
    if ports.is_empty() {
        return Ok(Vec::new());
    }
    ports
        .split(';')
        .map(|pair| {
            let parts: Vec<&str> = pair.split("::").collect();
            match parts[..] {
                [address, port] if !address.trim().is_empty() && !port.trim().is_empty() => {
                    Ok((address.trim().to_string(), port.trim().to_string()))
                }
                _ => Err(StandardsError::MalformedPortPair {
                    pair: pair.trim().to_string(),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ResourceContext {
        ResourceContext {
            address: "192.168.10.2".to_string(),
            family: "CS_SDNController".to_string(),
            fullname: "odl".to_string(),
            name: "odl".to_string(),
            attributes: vec![
                ("OdlShell.User".to_string(), "admin".to_string()),
                ("OdlShell.Scheme".to_string(), "https".to_string()),
                (
                    "OdlShell.Enable Full Trunk Ports".to_string(),
                    "sw1::Gi0/1;sw2::Gi0/2;".to_string(),
                ),
                ("CS_SDNController.License Server".to_string(), "lic1".to_string()),
            ],
        }
    }

    fn profile() -> ResourceProfile {
        ResourceProfile::from_context("OdlShell", "CS_SDNController", context()).unwrap()
    }

    #[test]
    fn empty_shell_name_is_rejected() {
        let err = ResourceProfile::from_context("", "CS_SDNController", context()).unwrap_err();
        assert_eq!(err, StandardsError::FirstGenShell);
    }

    #[test]
    fn namespace_lookup() {
        let profile = profile();
        assert_eq!(profile.attribute("User"), Some("admin"));
        assert_eq!(profile.attribute("Scheme"), Some("https"));
        assert_eq!(profile.attribute("Password"), None);
    }

    #[test]
    fn shell_type_lookup() {
        assert_eq!(profile().shell_attribute("License Server"), Some("lic1"));
    }

    #[test]
    fn trunk_ports_parse_into_pairs() {
        let pairs = profile().add_trunk_ports().unwrap();
        assert_eq!(
            pairs,
            vec![
                ("sw1".to_string(), "Gi0/1".to_string()),
                ("sw2".to_string(), "Gi0/2".to_string()),
            ]
        );
    }

    #[test]
    fn missing_trunk_attribute_is_an_empty_list() {
        assert!(profile().remove_trunk_ports().unwrap().is_empty());
    }

    #[test]
    fn port_pairs_tolerate_trailing_separator() {
        assert_eq!(
            parse_port_pairs("a::1;").unwrap(),
            vec![("a".to_string(), "1".to_string())]
        );
        assert!(parse_port_pairs("").unwrap().is_empty());
        assert!(parse_port_pairs(" ; ").unwrap().is_empty());
    }

    #[test]
    fn malformed_pair_is_a_typed_error() {
        let err = parse_port_pairs("sw1-Gi0/1").unwrap_err();
        assert_eq!(
            err,
            StandardsError::MalformedPortPair {
                pair: "sw1-Gi0/1".to_string()
            }
        );
        assert!(parse_port_pairs("a::b::c").is_err());
    }
}
