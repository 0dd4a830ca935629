use std::collections::HashMap;

use tracing::warn;

use crate::error::{HpoError, Result};
use crate::structs::Term;
use crate::TermID;

/// Point lookup of term records by identifier.
pub trait TermStore {
    fn lookup(&self, term_id: &str) -> Result<Term>;
}

impl<S: TermStore + ?Sized> TermStore for &S {
    fn lookup(&self, term_id: &str) -> Result<Term> {
        (**self).lookup(term_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryTermStore {
    terms: HashMap<TermID, Term>,
}

impl InMemoryTermStore {
    pub fn new(terms: Vec<Term>) -> InMemoryTermStore {
        let mut store = InMemoryTermStore::default();
        for term in terms {
            store.insert(term);
        }
        store
    }

    /// Later records overwrite earlier ones with the same id.
    pub fn insert(&mut self, term: Term) {
        if let Some(previous) = self.terms.insert(term.id.clone(), term) {
            warn!(id = %previous.id, "duplicate term id, keeping the later record");
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl TermStore for InMemoryTermStore {
    fn lookup(&self, term_id: &str) -> Result<Term> {
        self.terms
            .get(term_id)
            .cloned()
            .ok_or_else(|| HpoError::NotFound(term_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let store = InMemoryTermStore::new(vec![
            Term::new("R", "root", &[]),
            Term::new("A", "a", &["R"]),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("A").unwrap().parents, vec!["R".to_string()]);
        assert!(matches!(store.lookup("Z"), Err(HpoError::NotFound(id)) if id == "Z"));
    }

    #[test]
    fn test_duplicate_id_overwrites() {
        let store = InMemoryTermStore::new(vec![
            Term::new("A", "first", &[]),
            Term::new("A", "second", &["R"]),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("A").unwrap().name, "second");
    }

    #[test]
    fn test_lookup_through_reference() {
        let store = InMemoryTermStore::new(vec![Term::new("R", "root", &[])]);
        let by_ref: &InMemoryTermStore = &store;
        assert!(TermStore::lookup(&by_ref, "R").is_ok());
    }
}
