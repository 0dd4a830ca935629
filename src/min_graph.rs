use std::collections::HashSet;

use tracing::debug;

use crate::ancestors::get_chain;
use crate::enums::IsA;
use crate::error::{HpoError, Result};
use crate::structs::MinGraphNode;
use crate::term_store::TermStore;
use crate::utils::{count_chain_elements, get_sorted_index};
use crate::TermID;

/// Minimised ancestor graph for `term_ids`, for drawing a small node graph.
///
/// Each input term is linked to the first ancestor on its chain that more
/// input chains share than anything seen so far on that chain, so edges run
/// through common branching points. Inputs are walked from least to most
/// shared (ties keep input order), which makes the output deterministic.
///
/// With a single input the term is returned with all of its immediate
/// parents as an [`IsA::Terms`] edge, followed by one root node per parent.
pub fn get_min_graph<S: TermStore>(store: &S, term_ids: &[TermID]) -> Result<Vec<MinGraphNode>> {
    match term_ids {
        [] => Err(HpoError::InvalidArgument(
            "min graph needs at least one term".to_string(),
        )),
        [term_id] => single_term_graph(store, term_id),
        _ => multi_term_graph(store, term_ids),
    }
}

fn single_term_graph<S: TermStore>(store: &S, term_id: &str) -> Result<Vec<MinGraphNode>> {
    let term = store.lookup(term_id)?;
    let mut seen: HashSet<&str> = HashSet::from([term_id]);
    let parents: Vec<TermID> = term
        .parents
        .iter()
        .filter(|parent| seen.insert(parent.as_str()))
        .cloned()
        .collect();

    let mut result = vec![MinGraphNode::root(term_id)];
    result.extend(parents.iter().map(|parent| MinGraphNode::root(parent)));
    if !parents.is_empty() {
        result[0].is_a = Some(IsA::Terms(parents));
    }
    Ok(result)
}

fn multi_term_graph<S: TermStore>(store: &S, term_ids: &[TermID]) -> Result<Vec<MinGraphNode>> {
    let chains = term_ids
        .iter()
        .map(|term_id| get_chain(store, term_id))
        .collect::<Result<Vec<_>>>()?;
    let counts = count_chain_elements(&chains);
    let count_of = |term: &str| counts.get(term).copied().unwrap_or(0);

    let mut result: Vec<MinGraphNode> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for idx in get_sorted_index(term_ids, &counts) {
        let (term, ancestors) = match chains[idx].split_first() {
            Some(split) => split,
            None => continue,
        };
        if seen.insert(term.as_str()) {
            result.push(MinGraphNode::root(term));
        }

        let mut best = count_of(term.as_str());
        for ancestor in ancestors {
            let count = count_of(ancestor.as_str());
            if count <= best {
                continue;
            }
            best = count;
            if let Some(last) = result.last_mut() {
                if last.is_a.is_none() {
                    last.is_a = Some(IsA::from(ancestor.as_str()));
                }
            }
            if seen.insert(ancestor.as_str()) {
                result.push(MinGraphNode::root(ancestor));
            }
        }
    }

    debug!(
        inputs = term_ids.len(),
        nodes = result.len(),
        "built minimised graph"
    );
    Ok(result)
}
