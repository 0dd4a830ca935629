use serde::{Deserialize, Serialize};

use crate::enums::IsA;
use crate::TermID;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermID,
    pub name: String,
    pub def: Option<String>,
    pub alt_ids: Vec<TermID>,
    pub parents: Vec<TermID>, // is_a, in source order
}

impl Term {
    pub fn new(id: &str, name: &str, parents: &[&str]) -> Term {
        Term {
            id: id.to_string(),
            name: name.to_string(),
            def: None,
            alt_ids: Vec::new(),
            parents: parents.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn first_parent(&self) -> Option<&TermID> {
        self.parents.first()
    }
}

/// One node of a minimised ancestor graph. `is_a: None` marks a root of
/// the minimised structure, which is not necessarily an ontology root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinGraphNode {
    pub id: TermID,
    pub is_a: Option<IsA>,
}

impl MinGraphNode {
    pub fn root(id: &str) -> MinGraphNode {
        MinGraphNode {
            id: id.to_string(),
            is_a: None,
        }
    }

    pub fn with_parent(id: &str, parent: &str) -> MinGraphNode {
        MinGraphNode {
            id: id.to_string(),
            is_a: Some(IsA::from(parent)),
        }
    }
}

#[cfg(feature = "python")]
impl<'a> pyo3::IntoPy<pyo3::PyObject> for &'a MinGraphNode {
    fn into_py(self, py: pyo3::Python) -> pyo3::PyObject {
        use pyo3::types::PyDict;
        use pyo3::ToPyObject;

        let node_dict = PyDict::new(py);
        node_dict
            .set_item("id", &self.id)
            .expect("Failed to set item in node_dict");
        node_dict
            .set_item("is_a", self.is_a.to_object(py))
            .expect("Failed to set item in node_dict");
        node_dict.into()
    }
}
