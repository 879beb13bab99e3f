use crate::product::lenient;
use serde::Deserialize;

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
/// Pricing information of a Product.
pub struct Pricing {
    /// Offers from online sellers. The first one is the headline price.
    #[serde(default)]
    pub online: Vec<PriceOffer>,
}

impl Pricing {
    /// The headline offer, if the seller list is not empty.
    pub fn primary(&self) -> Option<&PriceOffer> {
        self.online.first()
    }

    /// Number of offers beyond the headline one.
    pub fn additional_offers(&self) -> usize {
        self.online.len().saturating_sub(1)
    }
}

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
/// A single price offered for a Product by an online seller.
pub struct PriceOffer {
    /// Price before tax.
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    /// Tax on top of `price`.
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_tax: f64,
    /// What the buyer pays.
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_total: f64,
    /// Currency code, e.g. `USD`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub currency: String,
    /// Shipping or delivery note, e.g. `Free delivery by Mon`.
    pub details: Option<String>,
}

impl PriceOffer {
    /// The delivery note, treating an empty string like a missing one.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref().filter(|details| !details.is_empty())
    }
}
