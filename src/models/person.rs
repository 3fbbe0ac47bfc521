use serde::Serialize;

/// One row of the ledger: what a person owes and how much they drank today.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub name: String,
    pub debt: f64,
    pub paid: bool,
    pub drunk_today_ml: u32,
}

impl Person {
    /// A freshly inserted row: no debt, not paid, nothing drunk.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            debt: 0.0,
            paid: false,
            drunk_today_ml: 0,
        }
    }

    pub fn with_debt(mut self, debt: f64) -> Self {
        self.debt = debt;
        self
    }

    pub fn with_paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    pub fn with_ml(mut self, ml: u32) -> Self {
        self.drunk_today_ml = ml;
        self
    }
}
