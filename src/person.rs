//! A `Person` is one vertex of the contact graph.
//!
//! People live in an arena owned by [`Graph`](crate::graph::Graph) and refer to one another by
//! [`PersonId`], an index into that arena. The identifier string a caller supplies is only used
//! to look up the `PersonId`; it is never used to link people together.
//!
//! A person carries the demographic data it was created with, a mutable infection flag, and
//! `degrees_apart`: the cached hop count to the nearest infected person as of the last
//! recomputation.

use std::fmt::{Display, Formatter};

use crate::error::TracerError;

/// Index of a person in the graph's arena. Stable for the lifetime of the graph, since people
/// are never removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub(crate) usize);

impl PersonId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    id: PersonId,
    identifier: String,
    name: String,
    age: u32,
    severity_level: f64,
    infected: bool,
    degrees_apart: Option<usize>,
}

impl Person {
    pub(crate) fn new(
        id: PersonId,
        identifier: String,
        name: String,
        age: u32,
        severity_level: f64,
    ) -> Self {
        Person {
            id,
            identifier,
            name,
            age,
            severity_level,
            infected: false,
            degrees_apart: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// How severe the illness would be for this person if infected, in `[0, 1]`.
    #[must_use]
    pub fn severity_level(&self) -> f64 {
        self.severity_level
    }

    #[must_use]
    pub fn infected(&self) -> bool {
        self.infected
    }

    /// The cached degrees apart, or `None` if it was never computed or the person is not
    /// reachable from any infected person.
    #[must_use]
    pub fn degrees_apart(&self) -> Option<usize> {
        self.degrees_apart
    }

    pub(crate) fn toggle_infection(&mut self) {
        self.infected = !self.infected;
    }

    pub(crate) fn set_infected(&mut self) {
        self.infected = true;
    }

    /// Returns the smallest number of hops between this person and an infected person.
    ///
    /// # Errors
    ///
    /// Returns [`TracerError::NotComputed`] if no degree is cached.
    pub fn get_degree(&self) -> Result<usize, TracerError> {
        self.degrees_apart.ok_or_else(|| TracerError::NotComputed {
            identifier: self.identifier.clone(),
        })
    }

    /// Clears the cached degree, or seeds it with `0` when `to_zero` is set.
    pub(crate) fn reset_degree(&mut self, to_zero: bool) {
        self.degrees_apart = if to_zero { Some(0) } else { None };
    }

    /// The local propagation step: records `distance` if nothing is cached yet or if it is
    /// strictly smaller than the cached value. Returns whether the cache changed.
    pub(crate) fn relax(&mut self, distance: usize) -> bool {
        match self.degrees_apart {
            Some(current) if current <= distance => false,
            _ => {
                self.degrees_apart = Some(distance);
                true
            }
        }
    }
}
