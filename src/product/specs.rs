use crate::product::lenient;
use serde::Deserialize;

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
/// A single specification (title-value pair) of a Product.
pub struct SpecificationItem {
    /// The name (key) of the specification.
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    /// The value of the specification.
    #[serde(default, deserialize_with = "lenient::text")]
    pub value: String,
}

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
/// A titled group of specifications.
pub struct SpecificationSection {
    /// Title of the group.
    /// For example: `General`, `Display`, `Battery` etc.
    #[serde(default, deserialize_with = "lenient::text")]
    pub section_title: String,
    /// The specifications.
    #[serde(default)]
    pub items: Vec<SpecificationItem>,
}
