// crates/travelrec-core/src/render.rs

//! # Card rendering
//!
//! Produces the HTML fragment that replaces the contents of the results
//! container: either a single message element or one `.result-card` per
//! item. Front ends (the wasm bindings, the CLI's `--html` mode) inject
//! the returned string as-is.

use crate::model::DisplayItem;

/// Shown when a classified keyword produced no items.
pub const EMPTY_RESULTS_MESSAGE: &str =
    "No recommendations found. Try \"beach\", \"temple\", or \"country\".";

/// Shown when the keyword could not be classified.
pub const PROMPT_MESSAGE: &str =
    "Please enter \"beach\", \"temple\", or \"country\" to see recommendations.";

/// Initial helper text, also restored by the clear action.
pub const IDLE_MESSAGE: &str = "Recommendations will appear here after you search.";

/// Shown when the dataset could not be loaded or parsed.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Unable to load recommendations. Please try again later.";

/// Escape text the way DOM `textContent` assignment would.
///
/// Quotes are escaped too so the same routine is safe inside attribute
/// values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A single message element, replacing any previous results.
pub fn render_message(message: &str) -> String {
    format!("<div class=\"no-results\">{}</div>", escape(message))
}

/// One card per item; an empty list renders the guidance message instead.
pub fn render_recommendations(items: &[DisplayItem]) -> String {
    if items.is_empty() {
        return render_message(EMPTY_RESULTS_MESSAGE);
    }

    let mut out = String::new();
    for item in items {
        let title = match item.country() {
            Some(country) => format!("{}, {}", item.name(), country),
            None => item.name().to_owned(),
        };
        out.push_str("<div class=\"result-card\">");
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape(item.image_url()),
            escape(item.name())
        ));
        out.push_str("<div class=\"result-body\">");
        out.push_str(&format!("<h3>{}</h3>", escape(&title)));
        out.push_str(&format!("<p>{}</p>", escape(item.description())));
        // Static action with no bound behavior.
        out.push_str("<button class=\"visit-btn\" type=\"button\">Visit</button>");
        out.push_str("</div></div>");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Beach, City, DisplayItem};

    #[test]
    fn empty_list_renders_no_results_message() {
        let html = render_recommendations(&[]);
        assert!(html.contains("No recommendations found"));
        assert!(html.contains("class=\"no-results\""));
        assert!(!html.contains("result-card"));
    }

    #[test]
    fn renders_one_card_per_item_with_title_text() {
        let beach = Beach {
            name: "Bora Bora".into(),
            description: "Lagoon.".into(),
            image_url: "images/bora_bora.jpg".into(),
        };
        let city = City {
            name: "Sydney".into(),
            description: "Harbour city.".into(),
            image_url: "images/sydney.jpg".into(),
        };
        let items = vec![
            DisplayItem::from_beach(&beach),
            DisplayItem::from_city(&city, "Australia"),
        ];

        let html = render_recommendations(&items);
        assert_eq!(html.matches("result-card").count(), 2);
        assert!(html.contains("<h3>Bora Bora</h3>"));
        assert!(html.contains("<h3>Sydney, Australia</h3>"));
        assert!(html.contains("src=\"images/sydney.jpg\""));
        assert_eq!(html.matches(">Visit</button>").count(), 2);
    }

    #[test]
    fn escapes_text_content() {
        let beach = Beach {
            name: "Fisherman's <Cove>".into(),
            description: "Sand & surf.".into(),
            image_url: "images/cove.jpg".into(),
        };
        let html = render_recommendations(&[DisplayItem::from_beach(&beach)]);
        assert!(html.contains("Fisherman&#39;s &lt;Cove&gt;"));
        assert!(html.contains("Sand &amp; surf."));
        assert!(!html.contains("<Cove>"));
    }

    #[test]
    fn message_element_is_escaped() {
        let html = render_message("a < b");
        assert_eq!(html, "<div class=\"no-results\">a &lt; b</div>");
    }
}
