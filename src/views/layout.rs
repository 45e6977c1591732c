use crate::render::{el, Document, Element, Node};

pub const SITE_NAME: &str = "The Daily Harvest";

pub fn header() -> Element {
    el("header").class("app-header")
        .child(el("h1").text(SITE_NAME))
        .child(
            el("nav")
                .child(el("a").attr("href", "/").text("Home"))
                .child(el("a").attr("href", "/products").text("Products"))
                .child(el("a").attr("href", "/cart").text("Cart"))
                .child(el("a").attr("href", "/login").child(el("button").attr("type", "button").text("Admin Login"))),
        )
}

pub fn footer() -> Element {
    el("footer").class("app-footer").child(el("p").text(format!("© 2025 {SITE_NAME}. All rights reserved.")))
}

/// Header, `main` content and footer inside the `.app` container.
pub fn page(title: &str, main: impl IntoIterator<Item = Node>) -> Document {
    Document::new(format!("{title} | {SITE_NAME}")).push(
        el("div").class("app")
            .child(header())
            .child(el("main").class("main-content").children(main))
            .child(footer()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_links() {
        let header: Node = header().into();
        assert_eq!(header.count_elements("a"), 4);
        assert_eq!(header.count_elements("button"), 1);
        let html = header.to_html();
        assert!(html.contains("<h1>The Daily Harvest</h1>"));
        assert!(html.contains("<a href=\"/login\"><button type=\"button\">Admin Login</button></a>"));
    }

    #[test]
    fn test_footer_text() {
        let footer: Node = footer().into();
        assert!(footer.text_content().contains("2025 The Daily Harvest"));
        assert!(footer.text_content().contains("All rights reserved"));
    }
}
