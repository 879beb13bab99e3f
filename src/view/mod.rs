mod layout;
mod sections;

use crate::{ProductClient, ProductRecord};
use eyre::Result;
use tracing::{debug, info};

pub use layout::{render_error, render_not_found};

/// Outcome of rendering a product page.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductPage {
    /// A complete HTML document.
    Found(String),
    /// The product has no pricing. Callers show their not-found view.
    NotFound,
}

impl ProductPage {
    pub fn is_found(&self) -> bool {
        matches!(self, ProductPage::Found(_))
    }

    /// The rendered document, if the product was found.
    pub fn document(&self) -> Option<&str> {
        match self {
            ProductPage::Found(document) => Some(document),
            ProductPage::NotFound => None,
        }
    }
}

/// Renders storefront product pages.
///
/// Holds no per-request state, so one instance can serve any number of
/// concurrent requests.
///
/// ```no_run
/// use std::time::Duration;
/// use product_page::{ProductClient, ProductView, Url};
///
/// #[tokio::main]
/// async fn main() -> eyre::Result<()> {
///     let client = ProductClient::new(Url::parse("http://localhost:3000")?, Duration::from_secs(10))?;
///     let page = ProductView::new(client).render("B0CHX3QBCH").await?;
///     println!("{}", page.document().unwrap_or("not found"));
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ProductView {
    client: ProductClient,
}

impl ProductView {
    pub fn new(client: ProductClient) -> Self {
        Self { client }
    }

    /// Fetches the product `id` and renders its page.
    ///
    /// Fetch failures are returned as errors. A product without pricing, or
    /// one the API rejects, is `ProductPage::NotFound`.
    pub async fn render(&self, id: &str) -> Result<ProductPage> {
        let Some(record) = self.client.fetch(id).await? else {
            info!(id, "product API does not know the product");
            return Ok(ProductPage::NotFound);
        };
        let page = render_record(&record);
        match &page {
            ProductPage::Found(_) => debug!(id, title = %record.title, "rendered product"),
            ProductPage::NotFound => info!(id, "product has no pricing"),
        }
        Ok(page)
    }
}

/// Renders an already fetched record.
pub fn render_record(record: &ProductRecord) -> ProductPage {
    let Some((offer, additional_offers)) = record
        .listed_pricing()
        .and_then(|pricing| Some((pricing.primary()?, pricing.additional_offers())))
    else {
        return ProductPage::NotFound;
    };

    let content = format!(
        r#"{title}{rating}<section class="product"><div class="media">{images}</div><div class="details">{pricing}<hr>{description}{highlights}</div></section>{reviews}{specifications}"#,
        title = sections::title(record),
        rating = sections::rating(record.reviews.as_ref()),
        images = sections::images(record.images.as_ref()),
        pricing = sections::pricing(offer, additional_offers),
        description = sections::description(record),
        highlights = sections::highlights(record.highlights.as_deref()),
        reviews = sections::reviews(record.reviews.as_ref()),
        specifications = sections::specifications(record.specifications.as_deref()),
    );

    ProductPage::Found(layout::build_page(&record.title, &content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Images, PriceOffer, Pricing, Reviews};

    fn widget() -> ProductRecord {
        ProductRecord {
            title: "Widget".into(),
            description: "A widget.".into(),
            pricing: Some(Pricing {
                online: vec![PriceOffer {
                    price: 10.0,
                    price_tax: 1.0,
                    price_total: 11.0,
                    currency: "USD".into(),
                    details: Some("Ships in 2 days".into()),
                }],
            }),
            reviews: Some(Reviews {
                rating: 4.4,
                top_review: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn renders_widget() {
        let page = render_record(&widget());
        assert!(page.is_found());
        let html = page.document().unwrap();
        assert!(html.contains("<h1>Widget</h1>"));
        assert!(html.contains("11 USD"));
        assert!(html.contains("(10 USD + 1 USD tax)"));
        assert!(html.contains("Ships in 2 days"));
        assert!(html.contains("A widget."));
        assert!(html.contains("Reviews (4.4)"));
        assert!(!html.contains("top-review\""));
        assert!(!html.contains("more prices"));
    }

    #[test]
    fn missing_pricing_is_not_found() {
        let record = ProductRecord {
            pricing: None,
            ..widget()
        };
        assert_eq!(render_record(&record), ProductPage::NotFound);

        let record = ProductRecord {
            pricing: Some(Pricing { online: vec![] }),
            ..widget()
        };
        assert_eq!(render_record(&record), ProductPage::NotFound);
    }

    #[test]
    fn description_follows_pricing() {
        let record = ProductRecord {
            images: Some(Images {
                full_size: vec!["https://img.test/a.jpg".into()],
            }),
            ..widget()
        };
        let html = render_record(&record).document().unwrap().to_string();
        let pricing = html.find("Product Details").unwrap();
        let description = html.find("A widget.").unwrap();
        assert!(pricing < description);
        assert!(html.contains(r#"src="https://img.test/a.jpg""#));
    }
}
