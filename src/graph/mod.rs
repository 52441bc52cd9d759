//! A module for modeling a social contact graph.
//!
//! People are vertices keyed by a caller-supplied identifier. Contacts are undirected, weighted
//! edges: the weight (the contact level) describes how intense or long the contact was and is
//! ignored when measuring distance. After marking people infected, call
//! [`Graph::recompute_degrees`] to refresh every person's degrees apart, the number of hops to
//! the nearest infected person.
//!
//! ```rust
//! use contact_tracer::graph::Graph;
//!
//! let mut graph = Graph::new();
//! for (id, name) in [("A", "Ann"), ("B", "Bo"), ("C", "Cy")] {
//!     graph.add_vertex(id, name, 30, 0.5).unwrap();
//! }
//! graph.add_edge("A", "B", 0.8).unwrap();
//! graph.add_edge("B", "C", 0.1).unwrap();
//!
//! graph.set_infected(["A"]).unwrap();
//! graph.recompute_degrees();
//! assert_eq!(graph.get_degree("C").unwrap(), 2);
//! ```
//!
//! The graph is not synchronized. Mutation and recomputation must not overlap.

mod adjacency;
mod projection;
mod propagation;

pub use adjacency::Contact;
use adjacency::Adjacency;
pub use projection::PersonView;
pub use propagation::PropagationStrategy;

use log::{debug, info, trace};

use crate::config::GraphConfig;
use crate::error::TracerError;
use crate::hashing::{HashMap, HashMapExt, HashSet};
use crate::person::{Person, PersonId};

#[derive(Debug, Default)]
pub struct Graph {
    people: Vec<Person>,
    identifiers: HashMap<String, PersonId>,
    adjacency: Adjacency,
    config: GraphConfig,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Graph {
            people: Vec::new(),
            identifiers: HashMap::new(),
            adjacency: Adjacency::default(),
            config: GraphConfig::default(),
        }
    }

    /// An empty graph that propagates with `config.propagation`. Logging settings in the
    /// config are kept but not applied; see [`GraphConfig::init_logging`].
    #[must_use]
    pub fn with_config(config: &GraphConfig) -> Self {
        Graph {
            config: config.clone(),
            ..Graph::new()
        }
    }

    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    #[must_use]
    pub fn propagation_strategy(&self) -> PropagationStrategy {
        self.config.propagation
    }

    pub fn set_propagation_strategy(&mut self, strategy: PropagationStrategy) {
        self.config.propagation = strategy;
    }

    // Lookups

    /// Returns the arena id for `identifier`, if such a person exists.
    #[must_use]
    pub fn person_id(&self, identifier: &str) -> Option<PersonId> {
        self.identifiers.get(identifier).copied()
    }

    fn lookup(&self, identifier: &str) -> Result<PersonId, TracerError> {
        self.person_id(identifier)
            .ok_or_else(|| TracerError::unknown_vertex(identifier))
    }

    #[must_use]
    pub fn get_person(&self, identifier: &str) -> Option<&Person> {
        self.person_id(identifier).map(|id| &self.people[id.0])
    }

    /// Every person, in the order they were added.
    #[must_use]
    pub fn get_people(&self) -> &[Person] {
        &self.people
    }

    /// The set of every person's name. Distinct people may share a name.
    #[must_use]
    pub fn get_names(&self) -> HashSet<&str> {
        self.people.iter().map(Person::name).collect()
    }

    /// Returns the people in contact with `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`TracerError::UnknownVertex`] if no such person exists.
    pub fn get_neighbours(&self, identifier: &str) -> Result<Vec<&Person>, TracerError> {
        let id = self.lookup(identifier)?;
        Ok(self.neighbours_of(id).collect())
    }

    pub(crate) fn neighbours_of(&self, id: PersonId) -> impl Iterator<Item = &Person> + '_ {
        self.adjacency
            .get_list(id)
            .iter()
            .map(|contact| &self.people[contact.neighbor.0])
    }

    /// Returns the contacts of `identifier` along with their contact levels.
    ///
    /// # Errors
    ///
    /// Returns [`TracerError::UnknownVertex`] if no such person exists.
    pub fn get_contacts(&self, identifier: &str) -> Result<&[Contact], TracerError> {
        let id = self.lookup(identifier)?;
        Ok(self.adjacency.get_list(id))
    }

    /// Returns the contact level between two people.
    ///
    /// # Errors
    ///
    /// Returns [`TracerError::UnknownVertex`] if either person does not exist, or
    /// [`TracerError::NotAdjacent`] if they have no contact.
    pub fn get_weight(&self, identifier1: &str, identifier2: &str) -> Result<f64, TracerError> {
        let id1 = self.lookup(identifier1)?;
        let id2 = self.lookup(identifier2)?;
        self.adjacency
            .get_contact(id1, id2)
            .map(|contact| contact.contact_level)
            .ok_or_else(|| TracerError::NotAdjacent {
                identifier1: identifier1.to_string(),
                identifier2: identifier2.to_string(),
            })
    }

    /// Returns the contact level between two people, or `0.0` if they have no contact.
    ///
    /// # Errors
    ///
    /// Returns [`TracerError::UnknownVertex`] if either person does not exist.
    pub fn get_contact_level(
        &self,
        identifier1: &str,
        identifier2: &str,
    ) -> Result<f64, TracerError> {
        let id1 = self.lookup(identifier1)?;
        let id2 = self.lookup(identifier2)?;
        Ok(self
            .adjacency
            .get_contact(id1, id2)
            .map_or(0.0, |contact| contact.contact_level))
    }

    /// Returns the cached degrees apart of `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`TracerError::UnknownVertex`] if no such person exists, or
    /// [`TracerError::NotComputed`] if no degree is cached for them.
    pub fn get_degree(&self, identifier: &str) -> Result<usize, TracerError> {
        let id = self.lookup(identifier)?;
        self.people[id.0].get_degree()
    }

    /// Identifiers of everyone currently infected.
    #[must_use]
    pub fn infected(&self) -> Vec<&str> {
        self.people
            .iter()
            .filter(|person| person.infected())
            .map(Person::identifier)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Number of undirected contacts.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    // Mutation

    /// Adds a person. If a person with `identifier` already exists nothing changes and the
    /// existing id is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TracerError::InvalidSeverityLevel`] if `severity_level` is not in `[0, 1]`.
    pub fn add_vertex(
        &mut self,
        identifier: &str,
        name: &str,
        age: u32,
        severity_level: f64,
    ) -> Result<PersonId, TracerError> {
        if let Some(id) = self.person_id(identifier) {
            debug!("person '{identifier}' already exists; keeping the original");
            return Ok(id);
        }
        if !(0.0..=1.0).contains(&severity_level) {
            return Err(TracerError::InvalidSeverityLevel(severity_level));
        }

        let id = PersonId(self.people.len());
        self.people.push(Person::new(
            id,
            identifier.to_string(),
            name.to_string(),
            age,
            severity_level,
        ));
        self.adjacency.push_vertex();
        self.identifiers.insert(identifier.to_string(), id);
        trace!("added person '{identifier}' as {id}");
        Ok(id)
    }

    /// Records a contact between two existing people, overwriting any previous level between
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`TracerError`] if:
    ///
    /// * `identifier1` and `identifier2` are the same
    /// * either person does not exist
    /// * `contact_level` is negative, infinite, or NaN
    pub fn add_edge(
        &mut self,
        identifier1: &str,
        identifier2: &str,
        contact_level: f64,
    ) -> Result<(), TracerError> {
        if identifier1 == identifier2 {
            return Err(TracerError::CannotMakeEdgeToSelf {
                identifier: identifier1.to_string(),
            });
        }
        let id1 = self.lookup(identifier1)?;
        let id2 = self.lookup(identifier2)?;
        if contact_level.is_infinite() || contact_level.is_nan() || contact_level.is_sign_negative()
        {
            return Err(TracerError::InvalidContactLevel(contact_level));
        }

        match self.adjacency.insert_symmetric(id1, id2, contact_level) {
            Some(previous) => trace!(
                "contact '{identifier1}' - '{identifier2}' changed from {previous} to {contact_level}"
            ),
            None => trace!("contact '{identifier1}' - '{identifier2}' at {contact_level}"),
        }
        Ok(())
    }

    /// Marks every listed person infected. Infection flags of people not listed are left
    /// alone, and degrees are not recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`TracerError::UnknownVertex`] for the first identifier that does not exist. In
    /// that case no flag is changed.
    pub fn set_infected<I, S>(&mut self, identifiers: I) -> Result<(), TracerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = identifiers
            .into_iter()
            .map(|identifier| self.lookup(identifier.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        for id in &ids {
            self.people[id.0].set_infected();
        }
        debug!("marked {} people infected", ids.len());
        Ok(())
    }

    /// Flips the infection flag of one person.
    ///
    /// # Errors
    ///
    /// Returns [`TracerError::UnknownVertex`] if no such person exists.
    pub fn toggle_infection(&mut self, identifier: &str) -> Result<(), TracerError> {
        let id = self.lookup(identifier)?;
        let person = &mut self.people[id.0];
        person.toggle_infection();
        debug!("'{identifier}' infected: {}", person.infected());
        Ok(())
    }

    /// Refreshes every person's degrees apart from the current infection flags.
    ///
    /// Infected people get `0`, everyone else the hop count of the shortest path to the
    /// nearest infected person, and people unreachable from any infected person are left
    /// without a degree. The result depends only on the current people, contacts and flags.
    pub fn recompute_degrees(&mut self) {
        self.reset_degrees();

        let mut seeds = Vec::new();
        for person in &mut self.people {
            if person.infected() {
                person.reset_degree(true);
                seeds.push(person.id());
            }
        }

        self.config
            .propagation
            .run(&mut self.people, &self.adjacency, &seeds);

        let reached = self
            .people
            .iter()
            .filter(|person| person.degrees_apart().is_some())
            .count();
        info!(
            "recomputed degrees ({:?}): {} seeds reached {} of {} people",
            self.config.propagation,
            seeds.len(),
            reached,
            self.people.len()
        );
    }

    fn reset_degrees(&mut self) {
        for person in &mut self.people {
            person.reset_degree(false);
        }
    }
}
