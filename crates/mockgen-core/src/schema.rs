use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named record type: the unit the synthesizer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InterfaceInfo {
    pub name: String,
    /// Top-level fields in declaration order.
    pub properties: Vec<PropertyInfo>,
}

impl InterfaceInfo {
    pub fn new(name: impl Into<String>, properties: Vec<PropertyInfo>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|property| property.name == name)
    }
}

/// A single field description. Nested shapes live in [`PropertyShape`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInfo {
    pub name: String,
    #[serde(default)]
    pub is_optional: bool,
    /// Pins the field to one exact token, whatever its kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal_value: Option<String>,
    #[serde(flatten)]
    pub shape: PropertyShape,
}

/// Kind-specific payload of a field, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PropertyShape {
    String,
    Number,
    Boolean,
    Date,
    Array {
        /// Absent element type means the array is always empty.
        #[serde(
            rename = "elementType",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        element_type: Option<Box<PropertyInfo>>,
    },
    Object {
        #[serde(default)]
        fields: Vec<PropertyInfo>,
    },
    Union {
        #[serde(default)]
        alternatives: Vec<PropertyInfo>,
    },
    LiteralSet {
        #[serde(rename = "literalValues", default)]
        literal_values: Vec<String>,
    },
    Dynamic,
    /// Also the landing spot for kinds this version does not know about.
    #[serde(other)]
    Unresolved,
}

/// Bare structural tag of a [`PropertyShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
    String,
    Number,
    Boolean,
    Date,
    Array,
    Object,
    Union,
    LiteralSet,
    Dynamic,
    Unresolved,
}

impl PropertyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Array => "array",
            Self::Object => "object",
            Self::Union => "union",
            Self::LiteralSet => "literalSet",
            Self::Dynamic => "dynamic",
            Self::Unresolved => "unresolved",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PropertyShape {
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::String => PropertyKind::String,
            Self::Number => PropertyKind::Number,
            Self::Boolean => PropertyKind::Boolean,
            Self::Date => PropertyKind::Date,
            Self::Array { .. } => PropertyKind::Array,
            Self::Object { .. } => PropertyKind::Object,
            Self::Union { .. } => PropertyKind::Union,
            Self::LiteralSet { .. } => PropertyKind::LiteralSet,
            Self::Dynamic => PropertyKind::Dynamic,
            Self::Unresolved => PropertyKind::Unresolved,
        }
    }
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, shape: PropertyShape) -> Self {
        Self {
            name: name.into(),
            is_optional: false,
            literal_value: None,
            shape,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, PropertyShape::String)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, PropertyShape::Number)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, PropertyShape::Boolean)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, PropertyShape::Date)
    }

    pub fn array(name: impl Into<String>, element: PropertyInfo) -> Self {
        Self::new(
            name,
            PropertyShape::Array {
                element_type: Some(Box::new(element)),
            },
        )
    }

    pub fn object(name: impl Into<String>, fields: Vec<PropertyInfo>) -> Self {
        Self::new(name, PropertyShape::Object { fields })
    }

    pub fn union(name: impl Into<String>, alternatives: Vec<PropertyInfo>) -> Self {
        Self::new(name, PropertyShape::Union { alternatives })
    }

    pub fn literal_set<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            PropertyShape::LiteralSet {
                literal_values: values.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn dynamic(name: impl Into<String>) -> Self {
        Self::new(name, PropertyShape::Dynamic)
    }

    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::new(name, PropertyShape::Unresolved)
    }

    /// Marks the field as optional.
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Pins the field to a single literal token.
    pub fn pinned(mut self, value: impl Into<String>) -> Self {
        self.literal_value = Some(value.into());
        self
    }

    pub fn kind(&self) -> PropertyKind {
        self.shape.kind()
    }
}
