//! Server-rendered storefront product page.
//!
//! `ProductView` fetches a product from the shopping API and renders it
//! to an HTML document, or reports `ProductPage::NotFound` when the
//! product has no pricing. `server::router` hosts it over HTTP.

mod client;
pub mod config;
mod product;
pub mod server;
mod view;
pub use client::ProductClient;
pub use config::Config;
use header::{HeaderMap, HeaderValue};
pub use product::{
    star_count, Images, PriceOffer, Pricing, ProductRecord, Reviews, SpecificationItem,
    SpecificationSection, TopReview,
};
use reqwest::header;
pub use url::Url;
pub use view::{render_error, render_not_found, render_record, ProductPage, ProductView};

/// Builds the default headers for the client.
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        )),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}
