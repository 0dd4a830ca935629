use std::collections::HashSet;

use crate::error::{HpoError, Result};
use crate::term_store::TermStore;
use crate::TermID;

/// Ancestors of `term_id` from nearest to farthest, following only the
/// first listed parent at each step. Fails on a revisited term instead of
/// looping.
pub fn get_ancestors<S: TermStore>(store: &S, term_id: &str) -> Result<Vec<TermID>> {
    let mut ancestors = Vec::new();
    let mut visited: HashSet<TermID> = HashSet::from([term_id.to_string()]);
    let mut current = store.lookup(term_id)?;

    while let Some(parent) = current.first_parent().cloned() {
        if !visited.insert(parent.clone()) {
            return Err(HpoError::CycleDetected(parent));
        }
        current = store.lookup(&parent)?;
        ancestors.push(parent);
    }
    Ok(ancestors)
}

/// `[term] + get_ancestors(term)`
pub fn get_chain<S: TermStore>(store: &S, term_id: &str) -> Result<Vec<TermID>> {
    let mut chain = vec![term_id.to_string()];
    chain.extend(get_ancestors(store, term_id)?);
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::Term;
    use crate::term_store::InMemoryTermStore;
    use crate::test_utils::test_constants::{DIAMOND_TERMS, SIMPLE_TERMS};
    use rstest::rstest;

    #[rstest]
    #[case("R", vec![])]
    #[case("A", vec!["R"])]
    #[case("C", vec!["A", "R"])]
    fn test_get_ancestors(#[case] term: &str, #[case] expected: Vec<&str>) {
        let store = InMemoryTermStore::new(SIMPLE_TERMS.clone());
        assert_eq!(get_ancestors(&store, term).unwrap(), expected);
    }

    #[test]
    fn test_only_first_parent_is_followed() {
        let store = InMemoryTermStore::new(DIAMOND_TERMS.clone());
        assert_eq!(get_ancestors(&store, "X").unwrap(), vec!["P1", "R"]);
    }

    #[test]
    fn test_tail_equals_parent_ancestors() {
        let store = InMemoryTermStore::new(SIMPLE_TERMS.clone());
        for term in SIMPLE_TERMS.iter() {
            let ancestors = get_ancestors(&store, &term.id).unwrap();
            if let Some(parent) = term.first_parent() {
                assert_eq!(&ancestors[0], parent);
                assert_eq!(ancestors[1..], get_ancestors(&store, parent).unwrap()[..]);
            } else {
                assert!(ancestors.is_empty());
            }
        }
    }

    #[test]
    fn test_missing_term() {
        let store = InMemoryTermStore::new(SIMPLE_TERMS.clone());
        assert!(matches!(get_ancestors(&store, "Z"), Err(HpoError::NotFound(id)) if id == "Z"));
    }

    #[test]
    fn test_missing_parent() {
        let store = InMemoryTermStore::new(vec![Term::new("A", "a", &["GONE"])]);
        assert!(matches!(get_ancestors(&store, "A"), Err(HpoError::NotFound(id)) if id == "GONE"));
    }

    #[test]
    fn test_cycle_is_detected() {
        let store = InMemoryTermStore::new(vec![
            Term::new("A", "a", &["B"]),
            Term::new("B", "b", &["C"]),
            Term::new("C", "c", &["A"]),
        ]);
        assert!(matches!(get_ancestors(&store, "A"), Err(HpoError::CycleDetected(id)) if id == "A"));
        assert!(matches!(
            get_ancestors(&store, "B"),
            Err(HpoError::CycleDetected(_))
        ));
    }

    #[test]
    fn test_get_chain() {
        let store = InMemoryTermStore::new(SIMPLE_TERMS.clone());
        assert_eq!(get_chain(&store, "C").unwrap(), vec!["C", "A", "R"]);
    }
}
