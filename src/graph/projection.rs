//! The read-only view handed to code that draws or steps the graph. It carries no colour or
//! layout information; consumers decide how to present degrees and infection themselves.

use crate::graph::Graph;
use crate::person::Person;

/// A snapshot of one person as seen by downstream consumers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonView {
    pub identifier: String,
    pub name: String,
    pub infected: bool,
    /// `None` when not computed or unreachable from every infected person.
    pub degrees_apart: Option<usize>,
    /// Names of this person's contacts. Contact levels are available through
    /// [`Graph::get_contact_level`].
    pub neighbour_names: Vec<String>,
}

impl Graph {
    /// Returns one [`PersonView`] per person, in the order people were added.
    #[must_use]
    pub fn project(&self) -> Vec<PersonView> {
        self.get_people()
            .iter()
            .map(|person| self.view(person))
            .collect()
    }

    fn view(&self, person: &Person) -> PersonView {
        PersonView {
            identifier: person.identifier().to_string(),
            name: person.name().to_string(),
            infected: person.infected(),
            degrees_apart: person.degrees_apart(),
            neighbour_names: self
                .neighbours_of(person.id())
                .map(|neighbour| neighbour.name().to_string())
                .collect(),
        }
    }
}
