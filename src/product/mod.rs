mod lenient;
mod offer;
mod product;
mod reviews;
mod specs;

pub use offer::{PriceOffer, Pricing};
pub use product::{Images, ProductRecord};
pub use reviews::{star_count, Reviews, TopReview};
pub use specs::{SpecificationItem, SpecificationSection};
