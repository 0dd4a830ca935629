use serde::{Deserialize, Serialize};

use crate::TermID;

/// Target of a minimised graph edge.
///
/// The general minimiser always produces `Term`; the single-term query
/// lists every immediate parent and produces `Terms`. Serialises untagged,
/// so JSON sees either a string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IsA {
    Term(TermID),
    Terms(Vec<TermID>),
}

impl IsA {
    /// All targets, whichever shape the edge has.
    pub fn targets(&self) -> Vec<&str> {
        match self {
            IsA::Term(term) => vec![term.as_str()],
            IsA::Terms(terms) => terms.iter().map(|t| t.as_str()).collect(),
        }
    }
}

impl From<&str> for IsA {
    fn from(term: &str) -> Self {
        IsA::Term(term.to_string())
    }
}

#[cfg(feature = "python")]
impl pyo3::ToPyObject for IsA {
    fn to_object(&self, py: pyo3::Python) -> pyo3::PyObject {
        match self {
            IsA::Term(term) => term.to_object(py),
            IsA::Terms(terms) => terms.to_object(py),
        }
    }
}
