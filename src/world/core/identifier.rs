//! Namespaced identifiers (`namespace:path`)
//!
//! Namespaces allow `[a-z0-9_.-]`, paths additionally allow `/`. Text without
//! a namespace, or with an empty one (`:mud`), falls back to
//! [`DEFAULT_NAMESPACE`].

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_NAMESPACE;
use crate::error::{DripError, DripResult};

/// A validated `namespace:path` identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Create an identifier from its two halves, validating both
    pub fn new(namespace: &str, path: &str) -> DripResult<Self> {
        let value = || format!("{}:{}", namespace, path);

        if let Some(c) = namespace.chars().find(|&c| !is_namespace_char(c)) {
            return Err(DripError::InvalidIdentifier {
                value: value(),
                reason: format!("illegal character '{}' in namespace", c),
            });
        }
        if path.is_empty() {
            return Err(DripError::InvalidIdentifier {
                value: value(),
                reason: "empty path".to_string(),
            });
        }
        if let Some(c) = path.chars().find(|&c| !is_path_char(c)) {
            return Err(DripError::InvalidIdentifier {
                value: value(),
                reason: format!("illegal character '{}' in path", c),
            });
        }

        let namespace = if namespace.is_empty() {
            DEFAULT_NAMESPACE
        } else {
            namespace
        };

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Identifier in the default namespace
    pub fn vanilla(path: &str) -> DripResult<Self> {
        Self::new(DEFAULT_NAMESPACE, path)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl FromStr for Identifier {
    type Err = DripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }
}

impl TryFrom<&str> for Identifier {
    type Error = DripError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_default_namespace() {
        let id: Identifier = "mud".parse().expect("valid identifier");
        assert_eq!(id.namespace(), "minecraft");
        assert_eq!(id.path(), "mud");
        assert_eq!(id.to_string(), "minecraft:mud");

        let id: Identifier = ":packed_ice".parse().expect("valid identifier");
        assert_eq!(id, Identifier::vanilla("packed_ice").expect("valid identifier"));
    }

    #[test]
    fn test_explicit_namespace() {
        let id = Identifier::try_from("ringlings:gem").expect("valid identifier");
        assert_eq!(id.namespace(), "ringlings");
        assert_eq!(id.path(), "gem");
    }

    #[test]
    fn test_path_allows_slash() {
        let id: Identifier = "my-mod.extra:ores/deep_gem".parse().expect("valid identifier");
        assert_eq!(id.namespace(), "my-mod.extra");
        assert_eq!(id.path(), "ores/deep_gem");
    }

    #[test]
    fn test_rejects_bad_identifiers() {
        for bad in ["Minecraft:mud", "minecraft:Mud", "a/b:mud", "minecraft:", "", "x:y:z", "water lily"] {
            let result = bad.parse::<Identifier>();
            assert!(
                matches!(result, Err(DripError::InvalidIdentifier { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_ordering_groups_by_namespace() {
        let mut ids: Vec<Identifier> = ["ringlings:gem", "minecraft:mud", "minecraft:blue_ice"]
            .iter()
            .map(|s| s.parse().expect("valid identifier"))
            .collect();
        ids.sort();
        let names: Vec<String> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            ["minecraft:blue_ice", "minecraft:mud", "ringlings:gem"]
        );
    }

    #[test]
    fn test_serde_as_map_key() {
        let mut map = BTreeMap::new();
        map.insert(Identifier::vanilla("ice").expect("valid identifier"), 1u8);
        let json = serde_json::to_string(&map).expect("serializes");
        assert_eq!(json, r#"{"minecraft:ice":1}"#);

        let back: BTreeMap<Identifier, u8> =
            serde_json::from_str(r#"{"ice":2}"#).expect("deserializes");
        assert_eq!(back.get(&Identifier::vanilla("ice").expect("valid identifier")), Some(&2));

        let bad = serde_json::from_str::<BTreeMap<Identifier, u8>>(r#"{"ICE":2}"#);
        assert!(bad.is_err());
    }
}
