// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt;
use std::str::FromStr;

use crate::error::TesterError;

/// A namespace-qualified schema type in Clark notation, `{namespace}local`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsoluteType(String);

impl AbsoluteType {
    pub fn new(namespace: impl AsRef<str>, local_name: impl AsRef<str>) -> Self {
        AbsoluteType(format!(
            "{{{}}}{}",
            namespace.as_ref(),
            local_name.as_ref()
        ))
    }

    /// Whether `name` already carries a brace-delimited namespace marker.
    pub fn is_qualified(name: &str) -> bool {
        name.starts_with('{') && name.contains('}')
    }

    pub fn namespace(&self) -> &str {
        match self.0.find('}') {
            Some(end) => &self.0[1..end],
            None => "",
        }
    }

    pub fn local_name(&self) -> &str {
        match self.0.find('}') {
            Some(end) => &self.0[end + 1..],
            None => &self.0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbsoluteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AbsoluteType {
    type Err = TesterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_qualified(s) {
            return Err(TesterError::Generic {
                msg: format!("Type '{}' is not namespace-qualified", s),
            });
        }
        Ok(AbsoluteType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_clark_notation() {
        let abs_type = AbsoluteType::new("urn:x", "local");
        assert_eq!(abs_type.as_str(), "{urn:x}local");
        assert_eq!(abs_type.namespace(), "urn:x");
        assert_eq!(abs_type.local_name(), "local");
        assert_eq!(abs_type.to_string(), "{urn:x}local");
    }

    #[test]
    fn test_detects_qualified_names() {
        assert!(AbsoluteType::is_qualified("{urn:y}local"));
        assert!(!AbsoluteType::is_qualified("local"));
        assert!(!AbsoluteType::is_qualified("{urn:y"));
    }

    #[test]
    fn test_parses_qualified_names_only() {
        let abs_type = "{urn:y}local".parse::<AbsoluteType>().unwrap();
        assert_eq!(abs_type.namespace(), "urn:y");
        assert!("local".parse::<AbsoluteType>().is_err());
    }
}
