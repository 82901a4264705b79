use std::{
    fmt::{self, Display},
    str::FromStr,
};

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tabled::Tabled;
use typed_builder::TypedBuilder;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Visibility keyword that may lead a method declaration.
pub enum AccessModifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
}

impl AccessModifier {
    /// Returns the keyword as it appears in source.
    pub fn as_str(self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Protected => "protected",
            AccessModifier::Private => "private",
        }
    }
}

/// Raised when a string is not one of the three access modifier keywords.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not an access modifier (expected public, protected or private)")]
pub struct UnknownAccessModifier(pub String);

impl FromStr for AccessModifier {
    type Err = UnknownAccessModifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(AccessModifier::Public),
            "protected" => Ok(AccessModifier::Protected),
            "private" => Ok(AccessModifier::Private),
            other => Err(UnknownAccessModifier(other.to_string())),
        }
    }
}

impl Serialize for AccessModifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccessModifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

impl Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Tabled, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
/// A single `type name` pair from a method's parameter list.
pub struct Argument {
    /// * `type_name`: declared type of the argument
    #[serde(rename = "type")]
    #[tabled(rename = "Type")]
    type_name: String,
    /// * `name`: argument name
    #[tabled(rename = "Name")]
    name:      String,
}

impl Argument {
    /// Creates an argument from its type and name.
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name:      name.into(),
        }
    }

    /// Returns the declared type.
    pub fn type_name(&self) -> &str {
        self.type_name.as_ref()
    }

    /// Returns the argument name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}

#[derive(Serialize, Deserialize, TypedBuilder, Clone, Debug, PartialEq, Eq)]
#[builder(field_defaults(setter(into)))]
#[builder(doc)]
#[serde(rename_all = "camelCase")]
/// Structured view of a method declaration.
pub struct MethodDescriptor {
    /// * `access_modifier`: leading visibility keyword, absent when the
    ///   declaration has none
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_modifier: Option<AccessModifier>,
    /// * `return_type`: declared return type
    return_type:     String,
    /// * `method_name`: name of the method
    method_name:     String,
    /// * `arguments`: parameters in declaration order
    #[builder(default)]
    #[serde(default)]
    arguments:       Vec<Argument>,
}

impl MethodDescriptor {
    /// Returns the access modifier, if one was declared.
    pub fn access_modifier(&self) -> Option<AccessModifier> {
        self.access_modifier
    }

    /// Returns the return type.
    pub fn return_type(&self) -> &str {
        self.return_type.as_ref()
    }

    /// Returns the method name.
    pub fn method_name(&self) -> &str {
        self.method_name.as_ref()
    }

    /// Returns the arguments in declaration order.
    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }
}

impl Display for MethodDescriptor {
    /// Writes the canonical form `[modifier ]type name(t1 n1, t2 n2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(modifier) = self.access_modifier {
            write!(f, "{modifier} ")?;
        }
        write!(
            f,
            "{} {}({})",
            self.return_type,
            self.method_name,
            self.arguments.iter().join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_omits_missing_modifier() {
        let descriptor = MethodDescriptor::builder()
            .return_type("Vector3")
            .method_name("distort")
            .arguments(vec![Argument::new("int", "x"), Argument::new("float", "magnitude")])
            .build();

        assert_eq!(descriptor.to_string(), "Vector3 distort(int x, float magnitude)");
    }

    #[test]
    fn display_includes_modifier_and_empty_arguments() {
        let descriptor = MethodDescriptor::builder()
            .access_modifier(AccessModifier::Public)
            .return_type("DateTime")
            .method_name("getCurrentDateTime")
            .build();

        assert_eq!(descriptor.to_string(), "public DateTime getCurrentDateTime()");
        assert!(descriptor.arguments().is_empty());
    }

    #[test]
    fn access_modifier_rejects_other_keywords() {
        assert_eq!("protected".parse::<AccessModifier>(), Ok(AccessModifier::Protected));
        let err = "static".parse::<AccessModifier>().unwrap_err();
        assert_eq!(err, UnknownAccessModifier("static".to_string()));
        assert!("Public".parse::<AccessModifier>().is_err());
    }

    #[test]
    fn arguments_compare_by_type_and_name() {
        assert_eq!(Argument::new("int", "x"), Argument::new("int", "x"));
        assert_ne!(Argument::new("int", "x"), Argument::new("long", "x"));
        assert_ne!(Argument::new("int", "x"), Argument::new("int", "y"));
    }
}
