//! Degree-of-separation propagation.
//!
//! Both walks start from people whose cache has already been seeded with `0` and write into
//! `Person::degrees_apart` through [`Person::relax`], so a cache only ever moves to a strictly
//! smaller value. They produce identical caches for every graph.
//!
//! * [`PropagationStrategy::BreadthFirst`] is a multi-source breadth-first search with one work
//!   queue holding every seed. Each person is relaxed at most once, so the walk is linear in
//!   people plus contacts.
//! * [`PropagationStrategy::ExhaustivePaths`] follows every simple path out of every seed,
//!   keeping the minimum seen at each person. Its cost grows with the number of simple paths,
//!   which is exponential in the worst case. Use it only on small graphs.

use std::collections::VecDeque;

use log::{debug, trace};
use serde::Deserialize;

use crate::graph::adjacency::Adjacency;
use crate::hashing::{HashSet, HashSetExt};
use crate::person::{Person, PersonId};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagationStrategy {
    #[default]
    BreadthFirst,
    ExhaustivePaths,
}

impl PropagationStrategy {
    pub(super) fn run(self, people: &mut [Person], adjacency: &Adjacency, seeds: &[PersonId]) {
        match self {
            PropagationStrategy::BreadthFirst => breadth_first(people, adjacency, seeds),
            PropagationStrategy::ExhaustivePaths => {
                for &seed in seeds {
                    let mut visited = HashSet::new();
                    propagate(people, adjacency, seed, 0, &mut visited, true);
                }
            }
        }
    }
}

fn breadth_first(people: &mut [Person], adjacency: &Adjacency, seeds: &[PersonId]) {
    let mut queue: VecDeque<PersonId> = seeds.iter().copied().collect();

    while let Some(current) = queue.pop_front() {
        let Some(distance) = people[current.0].degrees_apart() else {
            continue;
        };
        for contact in adjacency.get_list(current) {
            if people[contact.neighbor.0].relax(distance + 1) {
                trace!("{} is {} degrees apart", contact.neighbor, distance + 1);
                queue.push_back(contact.neighbor);
            }
        }
    }
    debug!("breadth-first propagation from {} seeds finished", seeds.len());
}

/// Records `distance` at `person` if it improves the cache, then continues with
/// `distance + 1` into every neighbour not already on the current path.
///
/// `visited` holds the people on the path from the seed to `person`. Entries are removed on
/// the way back up, so sibling branches never block one another; only ancestors do.
fn propagate(
    people: &mut [Person],
    adjacency: &Adjacency,
    person: PersonId,
    distance: usize,
    visited: &mut HashSet<PersonId>,
    is_root: bool,
) {
    // Only seeds start at zero; every recursive call is one hop further out.
    debug_assert!(is_root || distance > 0);

    if people[person.0].relax(distance) {
        trace!("{person} is {distance} degrees apart");
    }

    visited.insert(person);
    for contact in adjacency.get_list(person) {
        if !visited.contains(&contact.neighbor) {
            propagate(
                people,
                adjacency,
                contact.neighbor,
                distance + 1,
                visited,
                false,
            );
        }
    }
    visited.remove(&person);
}
