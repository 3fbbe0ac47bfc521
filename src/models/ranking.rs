use crate::models::person::Person;
use std::cmp::Reverse;

/// Today's hydration ranking: people ordered by millilitres drunk, highest
/// first. Ties keep the ledger order.
///
/// The ranking only stores an index order; records are borrowed from the
/// ledger while iterating, and `iter()` can be called any number of times.
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    people: &'a [Person],
    order: Vec<usize>,
}

impl<'a> Ranking<'a> {
    pub fn new(people: &'a [Person]) -> Self {
        let mut order: Vec<usize> = (0..people.len()).collect();
        // sort_by_key is stable
        order.sort_by_key(|&i| Reverse(people[i].drunk_today_ml));
        Self { people, order }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Person> + '_ {
        let people = self.people;
        self.order.iter().map(move |&i| &people[i])
    }

    pub fn leader(&self) -> Option<&'a Person> {
        self.order.first().map(|&i| &self.people[i])
    }

    /// False when nobody drank anything today (or the ledger is empty).
    pub fn has_activity(&self) -> bool {
        self.leader().is_some_and(|p| p.drunk_today_ml > 0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
