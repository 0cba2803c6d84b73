//! Hook names.

use crate::error::HookNameError;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, borrow::Cow, fmt, str::FromStr};

/// Identifier of an extension point.
///
/// Names are not namespaced. Two plugins registering under the same name is
/// allowed and both listeners fire. A `HookName` is never empty and never
/// contains whitespace; that is checked once, here, so registration itself
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HookName(Cow<'static, str>);

impl HookName {
    /// Build a hook name from a string literal.
    ///
    /// Evaluated in a `const`, an invalid name is a compile error:
    ///
    /// ```rust,ignore
    /// const BEFORE_SAVE: HookName = HookName::from_static("beforeSave");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or contains ASCII whitespace or control bytes.
    pub const fn from_static(name: &'static str) -> Self {
        assert!(!name.is_empty(), "hook name must not be empty");
        let bytes = name.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            assert!(
                !bytes[i].is_ascii_whitespace() && !bytes[i].is_ascii_control(),
                "hook name must not contain whitespace"
            );
            i += 1;
        }
        Self(Cow::Borrowed(name))
    }

    /// Build a hook name from a runtime string.
    pub fn new(name: impl Into<String>) -> Result<Self, HookNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(HookNameError::Empty);
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(HookNameError::Whitespace(name));
        }
        Ok(Self(Cow::Owned(name)))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HookName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the registry look names up by `&str`.
impl Borrow<str> for HookName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for HookName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HookName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl FromStr for HookName {
    type Err = HookNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for HookName {
    type Error = HookNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for HookName {
    type Error = HookNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HookName> for String {
    fn from(name: HookName) -> Self {
        name.0.into_owned()
    }
}

/// Well-known hook names shared by hosts and plugins.
pub mod hooks {
    use super::HookName;

    /// Announced by the host after the processor returns, with the output record.
    pub const AFTER_PROCESS: HookName = HookName::from_static("afterProcess");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(HookName::new(""), Err(HookNameError::Empty));
        assert!(matches!(
            HookName::new("after process"),
            Err(HookNameError::Whitespace(_))
        ));
        assert!(matches!(
            "tab\there".parse::<HookName>(),
            Err(HookNameError::Whitespace(_))
        ));
    }

    #[test]
    fn static_and_owned_names_are_equal() {
        let owned = HookName::new("afterProcess").unwrap();
        assert_eq!(owned, hooks::AFTER_PROCESS);
        assert_eq!(owned, "afterProcess");
    }

    #[test]
    fn lookup_by_str() {
        let mut table = HashMap::new();
        table.insert(hooks::AFTER_PROCESS, 1);
        assert_eq!(table.get("afterProcess"), Some(&1));
        assert_eq!(table.get("beforeProcess"), None);
    }

    #[test]
    fn serde_validates() {
        let name: HookName = serde_json::from_str("\"onSave\"").unwrap();
        assert_eq!(name.as_str(), "onSave");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"onSave\"");
        assert!(serde_json::from_str::<HookName>("\"\"").is_err());
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn from_static_panics_on_empty() {
        let _ = HookName::from_static("");
    }
}
