//! One function per page section. Each returns an empty string when the
//! field backing it is missing, except the reviews section which always
//! renders something.

use super::layout::{filled_stars, html_escape, number, star_row};
use crate::{Images, PriceOffer, ProductRecord, Reviews, SpecificationSection};

pub(crate) fn title(record: &ProductRecord) -> String {
    format!("<h1>{}</h1>", html_escape(&record.title))
}

pub(crate) fn rating(reviews: Option<&Reviews>) -> String {
    reviews
        .map(|reviews| format!(r#"<div class="stars rating">{}</div>"#, star_row(reviews.rating)))
        .unwrap_or_default()
}

pub(crate) fn images(images: Option<&Images>) -> String {
    let Some(images) = images else {
        return String::new();
    };
    let Some(primary) = images.primary() else {
        return String::new();
    };

    format!(
        r#"<div class="gallery"><img class="primary" src="{}" alt=""><div class="secondary">{}</div></div><div class="thumbnails">{}</div>"#,
        html_escape(primary),
        image_tags(images.secondary()),
        image_tags(images.thumbnails()),
    )
}

fn image_tags(urls: &[String]) -> String {
    urls.iter()
        .map(|url| format!(r#"<img src="{}" alt="">"#, html_escape(url)))
        .collect()
}

/// Headline price, its breakdown, the count of other offers and the
/// delivery note.
///
/// Nothing at all is shown when the headline offer has no delivery note,
/// even though the figures themselves are known.
pub(crate) fn pricing(offer: &PriceOffer, additional_offers: usize) -> String {
    let Some(details) = offer.details() else {
        return String::new();
    };
    let currency = html_escape(&offer.currency);

    let more_prices = match additional_offers {
        0 => String::new(),
        more => format!(r#"<p class="more-prices">+ {more} more prices</p>"#),
    };

    format!(
        r#"<div class="pricing"><h3>Product Details</h3><p class="price">{total} {currency}</p><div class="price-lines"><p class="breakdown">({price} {currency} + {tax} {currency} tax)</p>{more_prices}</div><p class="shipping">{details}</p></div>"#,
        total = number(offer.price_total),
        price = number(offer.price),
        tax = number(offer.price_tax),
        details = html_escape(details),
    )
}

pub(crate) fn description(record: &ProductRecord) -> String {
    format!(
        r#"<p class="description">{}</p>"#,
        html_escape(&record.description)
    )
}

pub(crate) fn highlights(highlights: Option<&[String]>) -> String {
    let Some(highlights) = highlights else {
        return String::new();
    };
    let items: String = highlights
        .iter()
        .map(|highlight| format!("<li>{}</li>", html_escape(highlight)))
        .collect();
    format!(
        r#"<div class="highlights"><h3>Product Highlights</h3><hr><ul>{items}</ul></div>"#
    )
}

pub(crate) fn reviews(reviews: Option<&Reviews>) -> String {
    let Some(reviews) = reviews else {
        return r#"<section class="reviews"><hr><h3>Reviews</h3><h4>No Reviews yet</h4></section>"#
            .to_string();
    };

    let top_review = reviews
        .top_review
        .as_ref()
        .map(|review| {
            format!(
                r#"<div class="top-review"><div><p class="author">{author} says:</p><h5>{title}</h5></div><div class="stars">{stars}</div><p class="review-text">&quot;{text}&quot;</p></div>"#,
                author = html_escape(&review.author),
                title = html_escape(&review.title),
                stars = filled_stars(crate::star_count(review.rating)),
                text = html_escape(&review.text),
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section class="reviews"><hr><h3>Reviews ({rating})</h3><h4>Top Reviews</h4>{top_review}</section>"#,
        rating = number(reviews.rating),
    )
}

pub(crate) fn specifications(specifications: Option<&[SpecificationSection]>) -> String {
    let Some(sections) = specifications else {
        return String::new();
    };
    let groups: String = sections
        .iter()
        .map(|section| {
            let items: String = section
                .items
                .iter()
                .map(|item| {
                    format!(
                        r#"<div class="spec-item"><h5>{}</h5><p>{}</p></div>"#,
                        html_escape(&item.title),
                        html_escape(&item.value)
                    )
                })
                .collect();
            format!(
                r#"<div class="spec-group"><h4>{}</h4>{items}</div>"#,
                html_escape(&section.section_title)
            )
        })
        .collect();
    format!(
        r#"<section class="specifications"><hr><h3>Specifications</h3><div class="spec-groups">{groups}</div></section>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SpecificationItem, TopReview};

    fn offer(details: Option<&str>) -> PriceOffer {
        PriceOffer {
            price: 10.0,
            price_tax: 1.0,
            price_total: 11.0,
            currency: "USD".into(),
            details: details.map(Into::into),
        }
    }

    #[test]
    fn more_prices_counts_other_offers() {
        let headline = offer(Some("Ships today"));
        assert!(!pricing(&headline, 0).contains("more prices"));
        for more in 1..=3 {
            let html = pricing(&headline, more);
            assert!(html.contains(&format!("+ {more} more prices")));
        }
    }

    #[test]
    fn pricing_block_needs_delivery_note() {
        for details in [None, Some("")] {
            assert_eq!(pricing(&offer(details), 1), "");
        }

        let html = pricing(&offer(Some("Ships in 2 days")), 0);
        assert!(html.contains("11 USD"));
        assert!(html.contains("(10 USD + 1 USD tax)"));
        assert!(html.contains("Ships in 2 days"));
    }

    #[test]
    fn missing_reviews_show_placeholder() {
        let html = reviews(None);
        assert!(html.contains("<h3>Reviews</h3>"));
        assert!(html.contains("No Reviews yet"));
    }

    #[test]
    fn top_review_card() {
        let html = reviews(Some(&Reviews {
            rating: 3.9,
            top_review: Some(TopReview {
                author: "ada".into(),
                title: "Solid <b>buy</b>".into(),
                text: "Works as described".into(),
                rating: 4.6,
            }),
        }));
        assert!(html.contains("Reviews (3.9)"));
        assert!(html.contains("ada says:"));
        assert!(html.contains("Solid &lt;b&gt;buy&lt;/b&gt;"));
        assert!(html.contains("&quot;Works as described&quot;"));
        assert_eq!(html.matches("star filled").count(), 5);
        assert_eq!(html.matches("star empty").count(), 0);
    }

    #[test]
    fn absent_sections_render_nothing() {
        assert_eq!(rating(None), "");
        assert_eq!(images(None), "");
        assert_eq!(images(Some(&Images { full_size: vec![] })), "");
        assert_eq!(highlights(None), "");
        assert_eq!(specifications(None), "");
    }

    #[test]
    fn specifications_grouped_by_section() {
        let sections = vec![
            SpecificationSection {
                section_title: "General".into(),
                items: vec![SpecificationItem {
                    title: "Weight".into(),
                    value: "1 kg".into(),
                }],
            },
            SpecificationSection {
                section_title: "Battery".into(),
                items: vec![],
            },
        ];
        let html = specifications(Some(&sections));
        assert_eq!(html.matches(r#"class="spec-group""#).count(), 2);
        assert!(html.contains("<h4>General</h4>"));
        assert!(html.contains("<h5>Weight</h5><p>1 kg</p>"));
    }
}
