//! Sale Aggregate

use crate::domain::events::{DomainEvent, SaleEvent};
use crate::domain::value_objects::SalePercent;

/// Process-wide sale setting plus the admin form's input text.
#[derive(Clone, Debug)]
pub struct Sale {
    percent: SalePercent,
    input: String,
    events: Vec<DomainEvent>,
}

impl Default for Sale {
    fn default() -> Self {
        Self { percent: SalePercent::NONE, input: "0".to_string(), events: vec![] }
    }
}

impl Sale {
    pub fn new() -> Self { Self::default() }
    pub fn percent(&self) -> SalePercent { self.percent }
    pub fn input(&self) -> &str { &self.input }

    /// Parses `input` as a decimal and stores it, whatever its sign or size.
    pub fn submit(&mut self, input: &str) -> Result<SalePercent, SaleError> {
        self.input = input.to_string();
        let percent = parse_percent(input).ok_or_else(|| SaleError::InvalidInput(input.to_string()))?;
        self.percent = percent;
        self.raise_event(DomainEvent::Sale(SaleEvent::Started { percent }));
        Ok(percent)
    }

    pub fn end(&mut self) {
        self.percent = SalePercent::NONE;
        self.input = "0".to_string();
        self.raise_event(DomainEvent::Sale(SaleEvent::Ended));
    }

    pub fn message(&self) -> String {
        if self.percent.is_active() {
            format!("All products are {}% off!", self.percent)
        } else {
            "No sale active.".to_string()
        }
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}

/// Plain decimal or scientific notation, any magnitude that fits an `f64`.
fn parse_percent(input: &str) -> Option<SalePercent> {
    input.trim().parse::<f64>().ok().and_then(SalePercent::new)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaleError {
    #[error("Invalid input: \"{0}\". Please enter a valid number.")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_for(input: &str) -> String {
        let mut sale = Sale::new();
        sale.submit(input).unwrap();
        sale.message()
    }

    #[test]
    fn test_default_state() {
        let sale = Sale::new();
        assert_eq!(sale.message(), "No sale active.");
        assert_eq!(sale.input(), "0");
    }

    #[test]
    fn test_display_rule() {
        assert_eq!(message_for("25"), "All products are 25% off!");
        assert_eq!(message_for("15.5"), "All products are 15.5% off!");
        assert_eq!(message_for("100"), "All products are 100% off!");
        assert_eq!(message_for("250"), "All products are 250% off!");
        assert_eq!(message_for("0"), "No sale active.");
        assert_eq!(message_for("-10"), "No sale active.");
        assert_eq!(message_for("1e30"), "All products are 1000000000000000000000000000000% off!");
        assert_eq!(message_for("100000000000000000000000000000"), "All products are 100000000000000000000000000000% off!");
        assert!(message_for("1e-40").starts_with("All products are 0.0000"));
        assert_eq!(message_for("-1e30"), "No sale active.");
        assert_eq!(message_for(" 12.50 "), "All products are 12.5% off!");
    }

    #[test]
    fn test_invalid_input_keeps_previous_value() {
        let mut sale = Sale::new();
        sale.submit("20").unwrap();
        let err = sale.submit("abc").unwrap_err();
        assert_eq!(err, SaleError::InvalidInput("abc".into()));
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("abc"));
        assert_eq!(sale.message(), "All products are 20% off!");
        assert_eq!(sale.input(), "abc");
        assert!(sale.submit("").is_err());
        assert!(sale.submit("NaN").is_err());
        assert!(sale.submit("inf").is_err());
        assert!(sale.submit("1e999").is_err());
    }

    #[test]
    fn test_end_sale() {
        let mut sale = Sale::new();
        sale.submit("50").unwrap();
        sale.end();
        assert_eq!(sale.message(), "No sale active.");
        assert_eq!(sale.input(), "0");
        assert_eq!(sale.take_events().last(), Some(&DomainEvent::Sale(SaleEvent::Ended)));
    }
}
