//! Contact tracing over a social graph
//!
//! `contact-tracer` models a network of people for contact tracing. People are vertices and
//! weighted, undirected edges record how much contact two people had. Given the set of people
//! currently infected, the graph computes every person's *degrees apart*: the minimum number
//! of hops to the nearest infected person.
//!
//! A typical caller
//! * builds a [`Graph`] with [`Graph::add_vertex`] and [`Graph::add_edge`],
//! * marks people infected with [`Graph::set_infected`] or [`Graph::toggle_infection`],
//! * calls [`Graph::recompute_degrees`] once per simulated step, and
//! * reads the results through [`Graph::project`] or [`Graph::get_degree`].
//!
//! Loading people from files and drawing the graph are left to the caller.
pub mod config;
pub mod error;
pub mod graph;
pub mod hashing;
pub mod log;
pub mod person;

pub use config::GraphConfig;
pub use error::TracerError;
pub use graph::{Contact, Graph, PersonView, PropagationStrategy};
pub use person::{Person, PersonId};

// Re-exports for convenience
pub use crate::log::{debug, error, info, trace, warn};
pub use hashing::{HashMap, HashMapExt, HashSet, HashSetExt};
