//! Page shell and shared markup helpers.

use crate::star_count;

pub(crate) fn build_page(title: &str, content: &str) -> String {
    let title = html_escape(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1a1a1a;}}
.page{{padding:0 48px 48px;}}
h1{{font-size:24px;}}
h3{{font-size:24px;font-weight:700;}}
hr{{margin:20px 0;border:none;border-top:1px solid #e0e0e0;}}
.stars{{display:flex;gap:4px;}}
.star{{font-size:20px;}}
.star.filled{{color:#eab308;}}
.star.empty{{color:#e5e7eb;}}
.product{{display:flex;flex-wrap:wrap;gap:40px;margin-top:20px;}}
.gallery{{display:flex;gap:16px;}}
.primary{{width:320px;height:320px;padding:20px;object-fit:contain;border:1px solid #e0e0e0;border-radius:6px;}}
.secondary{{display:flex;flex-direction:column;justify-content:space-between;}}
.secondary img{{width:148px;height:148px;object-fit:contain;border:1px solid #e0e0e0;border-radius:6px;}}
.thumbnails{{display:flex;gap:24px;padding:8px 0;overflow-x:auto;max-width:480px;}}
.thumbnails img{{width:80px;height:80px;object-fit:contain;}}
.details{{flex:1;padding-top:40px;}}
.breakdown,.shipping{{font-size:14px;color:#4b5563;}}
.more-prices{{font-size:14px;color:#1b66d2;}}
.shipping{{margin-top:20px;}}
.highlights li{{list-style:disc;margin-left:20px;}}
.top-review{{margin-top:8px;padding:20px;border:1px solid #e0e0e0;border-radius:8px;}}
.top-review .author{{font-weight:700;text-transform:capitalize;}}
.spec-groups{{display:flex;flex-wrap:wrap;gap:20px;}}
.spec-item{{font-size:14px;}}
.not-found{{display:flex;flex-direction:column;align-items:center;gap:20px;padding:48px;}}
</style>
</head>
<body>
<div class="page">{content}</div>
</body>
</html>"#
    )
}

/// Row of `round(rating)` filled stars followed by empty ones up to five.
pub(crate) fn star_row(rating: f64) -> String {
    let filled = star_count(rating);
    let mut stars = filled_stars(filled);
    for _ in filled..5 {
        stars.push_str(r#"<span class="star empty">&#9733;</span>"#);
    }
    stars
}

/// Only the filled part of a star row.
pub(crate) fn filled_stars(count: usize) -> String {
    r#"<span class="star filled">&#9733;</span>"#.repeat(count)
}

/// Shortest decimal form of a price or rating: `10` not `10.0`, `4.4` stays
/// `4.4`. Never switches to exponent notation, so `1e21` is written out in
/// full.
pub(crate) fn number(value: f64) -> String {
    value.to_string()
}

/// Body of the page shown when the product does not exist.
pub fn render_not_found() -> String {
    build_page(
        "Product not found",
        r#"<div class="not-found"><h1>Whoops...</h1><h2>It looks like the product could not be found!</h2></div>"#,
    )
}

/// Body of the page shown when the product could not be loaded.
pub fn render_error() -> String {
    build_page(
        "Something went wrong",
        r#"<div class="not-found"><h1>Something went wrong</h1><h2>The product could not be loaded. Please try again later.</h2></div>"#,
    )
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            html_escape(r#"<b class="x">Tom & Jerry's</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;"
        );
    }

    #[test]
    fn star_row_has_five_stars() {
        let row = star_row(3.6);
        assert_eq!(row.matches("star filled").count(), 4);
        assert_eq!(row.matches("star empty").count(), 1);

        let row = star_row(9.0);
        assert_eq!(row.matches("star filled").count(), 5);
        assert_eq!(row.matches("star empty").count(), 0);
    }

    #[test]
    fn numbers_keep_their_shape() {
        assert_eq!(number(10.0), "10");
        assert_eq!(number(4.4), "4.4");
        assert_eq!(number(19.99), "19.99");
        assert_eq!(number(1e21), "1000000000000000000000");
    }

    #[test]
    fn page_title_is_escaped() {
        let page = build_page("<Widget>", "");
        assert!(page.contains("<title>&lt;Widget&gt;</title>"));
    }
}
