use crate::KnownAttribute;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A name-value pair for an HTML attribute.
///
/// Attributes are written in the order they are supplied. Nothing here
/// de-duplicates them or escapes their values; the writer decides that.
pub struct Attribute {
    /// The name of the attribute.
    pub name: String,
    /// The value of the attribute.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with a free-form name, used verbatim.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a new attribute from a well-known identifier.
    ///
    /// The identifier is rendered in its lowercase form.
    pub fn known(attribute: KnownAttribute, value: impl Into<String>) -> Self {
        Attribute {
            name: attribute.as_str().to_owned(),
            value: value.into(),
        }
    }

    /// Create an attribute only if `value` is present and non-empty.
    pub fn optional(name: impl Into<String>, value: Option<&str>) -> Option<Self> {
        value
            .filter(|v| !v.is_empty())
            .map(|v| Attribute::new(name, v))
    }
}

/// Trait for types that can be converted into an [`Attribute`].
pub trait IntoAttribute {
    /// Convert this value into an [`Attribute`].
    fn into_attribute(self) -> Attribute;
}
impl IntoAttribute for Attribute {
    fn into_attribute(self) -> Attribute {
        self
    }
}
impl IntoAttribute for (&str, &str) {
    fn into_attribute(self) -> Attribute {
        Attribute::new(self.0, self.1)
    }
}
impl IntoAttribute for (&str, String) {
    fn into_attribute(self) -> Attribute {
        Attribute::new(self.0, self.1)
    }
}
impl IntoAttribute for (String, &str) {
    fn into_attribute(self) -> Attribute {
        Attribute::new(self.0, self.1)
    }
}
impl IntoAttribute for (String, String) {
    fn into_attribute(self) -> Attribute {
        Attribute::new(self.0, self.1)
    }
}
impl IntoAttribute for (KnownAttribute, &str) {
    fn into_attribute(self) -> Attribute {
        Attribute::known(self.0, self.1)
    }
}
impl IntoAttribute for (KnownAttribute, String) {
    fn into_attribute(self) -> Attribute {
        Attribute::known(self.0, self.1)
    }
}

/// Convenience function for creating an [`Attribute`] from anything that
/// implements [`IntoAttribute`].
pub fn attr(value: impl IntoAttribute) -> Attribute {
    value.into_attribute()
}

/// Build an ordered attribute list, skipping entries whose value is absent or empty.
///
/// This is how the typed element helpers turn their optional parameters into
/// attributes: an empty value never becomes an empty attribute.
pub(crate) fn present<'a>(
    entries: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
) -> Vec<Attribute> {
    entries
        .into_iter()
        .filter_map(|(name, value)| Attribute::optional(name, value))
        .collect()
}
