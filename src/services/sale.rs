use std::sync::{Arc, Mutex};

use crate::domain::aggregates::Sale;
use crate::domain::value_objects::SalePercent;
use crate::services::{lock, publish};

/// Process-wide sale setting shared by every admin page.
#[derive(Clone, Debug, Default)]
pub struct SaleService {
    sale: Arc<Mutex<Sale>>,
}

/// What the admin form shows after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaleView {
    pub input: String,
    pub message: String,
    pub error: Option<String>,
}

impl SaleService {
    pub fn new() -> Self { Self::default() }

    pub fn view(&self) -> SaleView { Self::view_of(&lock(&self.sale), None) }

    pub fn percent(&self) -> SalePercent { lock(&self.sale).percent() }

    pub fn submit(&self, input: &str) -> Result<SaleView, SaleView> {
        let mut sale = lock(&self.sale);
        let result = sale.submit(input);
        publish(sale.take_events());
        match result {
            Ok(_) => Ok(Self::view_of(&sale, None)),
            Err(error) => {
                tracing::debug!(%error, "sale percent rejected");
                Err(Self::view_of(&sale, Some(error.to_string())))
            }
        }
    }

    pub fn end_sale(&self) -> SaleView {
        let mut sale = lock(&self.sale);
        sale.end();
        publish(sale.take_events());
        Self::view_of(&sale, None)
    }

    fn view_of(sale: &Sale, error: Option<String>) -> SaleView {
        SaleView { input: sale.input().to_string(), message: sale.message(), error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_between_clones() {
        let admin = SaleService::new();
        let other = admin.clone();
        admin.submit("25").unwrap();
        assert_eq!(other.view().message, "All products are 25% off!");
        assert_eq!(other.end_sale().input, "0");
        assert!(!admin.percent().is_active());
    }

    #[test]
    fn test_invalid_submission_reports_input() {
        let admin = SaleService::new();
        let view = admin.submit("xyz").unwrap_err();
        assert_eq!(view.error.as_deref(), Some("Invalid input: \"xyz\". Please enter a valid number."));
        assert_eq!(view.message, "No sale active.");
        assert_eq!(view.input, "xyz");
    }
}
