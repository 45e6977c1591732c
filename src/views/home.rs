use crate::render::{el, Document, Node};
use crate::views::layout::{page, SITE_NAME};

pub fn render() -> Document {
    page("Home", [
        Node::from(el("h2").text(format!("Welcome to the {SITE_NAME}!"))),
        Node::from(el("p").text("Check out our products page for some great deals.")),
    ])
}
