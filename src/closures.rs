use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::term_store::TermStore;
use crate::TermID;

/// Every ancestor reachable through any parent, breadth-first, each once.
/// The term itself is not included. Terminates on cyclic input since every
/// term is expanded at most once.
pub fn get_ancestor_closure<S: TermStore>(store: &S, term_id: &str) -> Result<Vec<TermID>> {
    let mut closure = Vec::new();
    let mut seen: HashSet<TermID> = HashSet::from([term_id.to_string()]);
    let mut queue: VecDeque<TermID> = VecDeque::from([term_id.to_string()]);

    while let Some(current) = queue.pop_front() {
        for parent in store.lookup(&current)?.parents {
            if seen.insert(parent.clone()) {
                closure.push(parent.clone());
                queue.push_back(parent);
            }
        }
    }
    Ok(closure)
}
