/*!

`Adjacency` stores one adjacency list per person, indexed by `PersonId`, in the same arena order
as the people themselves. An adjacency list is just a list of `Contact`s.

Contacts are undirected. `Adjacency` only ever inserts them in pairs, so
`b ∈ list(a) ⟺ a ∈ list(b)` with the same contact level on both sides. Validation of the
endpoints and the level is the responsibility of `Graph`.

*/

use crate::person::PersonId;

/// One side of an undirected contact. The owning person is implicit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// The person on the other side of the contact.
    pub neighbor: PersonId,
    /// Intensity or duration of the contact.
    pub contact_level: f64,
}

/// The underlying storage type representing the adjacency list
pub(super) type AdjacencyList = Vec<Contact>;

#[derive(Default, Debug)]
pub(super) struct Adjacency {
    adjacency_lists: Vec<AdjacencyList>,
    edge_count: usize,
}

impl Adjacency {
    /// Makes room for the person just appended to the arena.
    pub(super) fn push_vertex(&mut self) {
        self.adjacency_lists.push(AdjacencyList::new());
    }

    /// Sets the contact level between `a` and `b` on both sides, overwriting a previous
    /// level. Returns the previous level, if any.
    pub(super) fn insert_symmetric(
        &mut self,
        a: PersonId,
        b: PersonId,
        contact_level: f64,
    ) -> Option<f64> {
        let previous = self.upsert(a, b, contact_level);
        let mirrored = self.upsert(b, a, contact_level);
        debug_assert_eq!(previous.is_some(), mirrored.is_some());
        if previous.is_none() {
            self.edge_count += 1;
        }
        previous
    }

    fn upsert(&mut self, person: PersonId, neighbor: PersonId, contact_level: f64) -> Option<f64> {
        let edges = &mut self.adjacency_lists[person.0];
        match edges.iter_mut().find(|contact| contact.neighbor == neighbor) {
            Some(contact) => Some(std::mem::replace(&mut contact.contact_level, contact_level)),
            None => {
                edges.push(Contact {
                    neighbor,
                    contact_level,
                });
                None
            }
        }
    }

    /// Returns the contact from `person` to `neighbor`, or `None` if they are not adjacent.
    pub(super) fn get_contact(&self, person: PersonId, neighbor: PersonId) -> Option<&Contact> {
        self.adjacency_lists
            .get(person.0)
            .and_then(|edges| edges.iter().find(|contact| contact.neighbor == neighbor))
    }

    /// Returns the contacts of `person`. Empty for an unknown id.
    pub(super) fn get_list(&self, person: PersonId) -> &[Contact] {
        match self.adjacency_lists.get(person.0) {
            Some(edges) => edges,
            None => &[],
        }
    }

    /// Number of undirected contacts.
    pub(super) fn edge_count(&self) -> usize {
        self.edge_count
    }
}
