use crate::render::{el, Document, Node};
use crate::services::LoginForm;
use crate::views::layout::page;

pub fn render(form: &LoginForm) -> Document {
    let mut container = el("div").class("login-container")
        .child(el("h2").text("Admin Login"))
        .child(
            el("form").attr("method", "post").attr("action", "/login")
                .child(el("input").attr("type", "text").attr("name", "username").attr("placeholder", "Username")
                    .attr("value", form.username.as_str()).flag("autofocus"))
                .child(el("input").attr("type", "password").attr("name", "password").attr("placeholder", "Password"))
                .child(el("button").attr("type", "submit").text("Login")),
        );
    if let Some(error) = form.error {
        container = container.child(el("p").class("error").text(error));
    }
    page("Login", [Node::from(container)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::LoginOutcome;

    #[test]
    fn test_blank_form() {
        let html = render(&LoginForm::default()).to_html();
        assert!(html.contains("<h2>Admin Login</h2>"));
        assert!(html.contains("placeholder=\"Username\""));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("class=\"login-container\""));
        assert!(!html.contains("Invalid credentials"));
    }

    #[test]
    fn test_rejected_form_keeps_input_and_shows_error() {
        let mut form = LoginForm::new("wrong\"user", "pw");
        assert_eq!(form.submit(), LoginOutcome::Rejected);
        let html = render(&form).to_html();
        assert!(html.contains("Invalid credentials"));
        assert!(html.contains("value=\"wrong&quot;user\""));
    }
}
