use crate::domain::aggregates::{Product, Review};
use crate::render::{el, Document, Node};
use crate::views::layout::page;

/// Review modal for one product, shown over the catalog.
pub fn render(product: &Product, reviews: &[Review], error: Option<&str>) -> Document {
    let list = if reviews.is_empty() {
        el("p").text("No reviews yet.")
    } else {
        el("ul").class("reviews-list").children(reviews.iter().map(review_item))
    };

    let mut form = el("form").attr("method", "post").attr("action", format!("/reviews/{}", product.id()))
        .child(el("h3").text("Leave a Review"))
        .child(el("input").attr("type", "text").attr("name", "author").attr("placeholder", "Your name").flag("required"))
        .child(el("textarea").attr("name", "comment").attr("placeholder", "Your review").flag("required"))
        .child(el("button").attr("type", "submit").text("Submit"));
    if let Some(error) = error {
        form = form.child(el("p").class("error").text(error));
    }

    let modal = el("div").class("modal-backdrop")
        .child(
            el("div").class("modal-content")
                .child(el("h2").text(format!("Reviews for {}", product.name())))
                .child(list)
                .child(form)
                .child(el("a").class("close-button").attr("href", "/products").text("Close")),
        );

    page("Reviews", [Node::from(modal)])
}

fn review_item(review: &Review) -> Node {
    el("li").class("review")
        .child(el("strong").text(review.author.as_str()))
        .child(el("span").class("review-date").text(review.display_date()))
        .child(el("p").text(review.comment.as_str()))
        .into()
}
