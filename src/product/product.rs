use crate::product::{lenient, Pricing, Reviews, SpecificationSection};
use serde::Deserialize;

/// Upstream body: the record is wrapped in a `content` object.
#[derive(Deserialize, Debug)]
pub(crate) struct ProductResponse {
    pub content: ProductRecord,
}

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
/// The details of a storefront Product.
///
/// Every optional field gates its own section of the rendered page. A record
/// without `pricing` is treated as not found.
pub struct ProductRecord {
    /// Product name
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    /// Plain text description, shown verbatim.
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Product photos.
    pub images: Option<Images>,
    /// Highlights of the product.
    pub highlights: Option<Vec<String>>,
    /// Aggregate rating and the top review.
    pub reviews: Option<Reviews>,
    /// Prices offered by online sellers.
    pub pricing: Option<Pricing>,
    /// Specifications of the product, grouped by section.
    pub specifications: Option<Vec<SpecificationSection>>,
}

impl ProductRecord {
    /// Decodes the upstream JSON body.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<ProductResponse>(body).map(|response| response.content)
    }

    /// Pricing with at least one offer. An empty offer list counts as missing.
    pub fn listed_pricing(&self) -> Option<&Pricing> {
        self.pricing
            .as_ref()
            .filter(|pricing| pricing.primary().is_some())
    }
}

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
/// URLs to the photos of a Product.
pub struct Images {
    /// Full size photos. The first is the primary image.
    #[serde(default)]
    pub full_size: Vec<String>,
}

impl Images {
    pub fn primary(&self) -> Option<&str> {
        self.full_size.first().map(String::as_str)
    }

    /// The two photos stacked next to the primary one.
    pub fn secondary(&self) -> &[String] {
        let end = self.full_size.len().min(3);
        self.full_size.get(1..end).unwrap_or_default()
    }

    /// Everything after the secondary photos.
    pub fn thumbnails(&self) -> &[String] {
        self.full_size.get(3..).unwrap_or_default()
    }
}
