use crate::render::{el, Document, Node};
use crate::services::sale::SaleView;
use crate::views::layout::page;

pub fn render(sale: &SaleView, catalog_size: Option<usize>) -> Document {
    let mut portal = el("div").class("admin-portal")
        .child(el("h2").text("Welcome to the admin portal."))
        .child(
            el("form").attr("method", "post").attr("action", "/admin/sale")
                .child(el("label").attr("for", "sale-percent").text("Set Sale Percent (% off for all products):"))
                .child(el("input").attr("id", "sale-percent").attr("type", "text").attr("name", "percent").attr("value", sale.input.as_str()))
                .child(el("button").attr("type", "submit").text("Submit")),
        )
        .child(
            el("form").attr("method", "post").attr("action", "/admin/sale/end")
                .child(el("button").attr("type", "submit").text("End Sale")),
        )
        .child(el("p").class("sale-message").text(sale.message.as_str()));

    if let Some(error) = &sale.error {
        portal = portal.child(el("p").class("error").text(error.as_str()));
    }

    let catalog_line = match catalog_size {
        None => "Catalog is loading.".to_string(),
        Some(n) => format!("Catalog has {n} products."),
    };
    portal = portal
        .child(
            el("form").attr("method", "post").attr("action", "/admin/catalog/reload")
                .child(el("p").text(catalog_line))
                .child(el("button").attr("type", "submit").text("Reload Catalog")),
        )
        .child(el("a").attr("href", "/").text("Back to Storefront"));

    page("Admin", [Node::from(portal)])
}
