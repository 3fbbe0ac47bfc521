//! In-memory ledger table and the operations applied to it between a load and
//! a save. Nothing here touches storage; callers persist the result.

use crate::errors::{AppError, AppResult};
use crate::models::drink::DrinkSize;
use crate::models::person::Person;
use crate::models::ranking::Ranking;
use std::collections::BTreeSet;

/// Result of a bulk debt charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeOutcome {
    /// Number of records that received the charge.
    Charged(usize),
    /// Nothing was selected: the ledger was left untouched.
    NoSelection,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    people: Vec<Person>,
}

impl Ledger {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn into_people(self) -> Vec<Person> {
        self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// First record with the given name. Names are not enforced unique.
    pub fn find(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.people.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn push(&mut self, person: Person) {
        self.people.push(person);
    }

    /// Remove every record whose name is in `names`; returns how many rows went away.
    pub fn remove(&mut self, names: &BTreeSet<String>) -> usize {
        let before = self.people.len();
        self.people.retain(|p| !names.contains(&p.name));
        before - self.people.len()
    }

    /// Add `amount` to the debt of every selected record and clear its paid
    /// flag. New debt always invalidates a previous payment.
    pub fn add_debt(&mut self, names: &BTreeSet<String>, amount: f64) -> AppResult<ChargeOutcome> {
        if names.is_empty() {
            return Ok(ChargeOutcome::NoSelection);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::InvalidAmount(format!(
                "charge must be greater than zero, got {amount}"
            )));
        }

        let mut charged = 0;
        for person in self.people.iter_mut().filter(|p| names.contains(&p.name)) {
            person.debt += amount;
            person.paid = false;
            charged += 1;
        }

        Ok(ChargeOutcome::Charged(charged))
    }

    /// Set the paid flag of every selected record. Debt is left as it is.
    pub fn set_paid(&mut self, names: &BTreeSet<String>, paid: bool) -> usize {
        let mut touched = 0;
        for person in self.people.iter_mut().filter(|p| names.contains(&p.name)) {
            person.paid = paid;
            touched += 1;
        }
        touched
    }

    /// Add a cup to the first record named `name`. Returns false when nobody
    /// matches, in which case the ledger is unchanged.
    pub fn record_drink(&mut self, name: &str, size: DrinkSize) -> bool {
        match self.people.iter_mut().find(|p| p.name == name) {
            Some(person) => {
                person.drunk_today_ml = person.drunk_today_ml.saturating_add(size.ml());
                true
            }
            None => false,
        }
    }

    pub fn reset_daily(&mut self) {
        for person in &mut self.people {
            person.drunk_today_ml = 0;
        }
    }

    /// Overwrite individual cells of every record named `name`.
    pub fn edit(
        &mut self,
        name: &str,
        debt: Option<f64>,
        paid: Option<bool>,
        ml: Option<u32>,
    ) -> AppResult<usize> {
        if let Some(d) = debt
            && (!d.is_finite() || d < 0.0)
        {
            return Err(AppError::InvalidAmount(format!(
                "debt cannot be negative, got {d}"
            )));
        }

        let mut touched = 0;
        for person in self.people.iter_mut().filter(|p| p.name == name) {
            if let Some(d) = debt {
                person.debt = d;
            }
            if let Some(p) = paid {
                person.paid = p;
            }
            if let Some(m) = ml {
                person.drunk_today_ml = m;
            }
            touched += 1;
        }

        if touched == 0 {
            return Err(AppError::UnknownPerson(name.to_string()));
        }
        Ok(touched)
    }

    /// Sum of debt still owed by people not marked as paid.
    pub fn outstanding_total(&self) -> f64 {
        self.people
            .iter()
            .filter(|p| !p.paid)
            .map(|p| p.debt)
            .sum()
    }

    pub fn rank(&self) -> Ranking<'_> {
        Ranking::new(&self.people)
    }
}
