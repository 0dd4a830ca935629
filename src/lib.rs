use std::fmt;
use std::path::Path;

pub mod ancestors;
pub mod closures;
pub mod db_query;
pub mod enums;
pub mod error;
pub mod file_io;
pub mod min_graph;
pub mod structs;
pub mod term_store;
pub mod utils;


#[cfg(feature = "python")]
use pyo3::prelude::*;

use db_query::SqliteTermStore;
use error::Result;
use structs::MinGraphNode;
use term_store::{InMemoryTermStore, TermStore};

pub use enums::IsA;
pub use error::HpoError;
pub use structs::Term;

pub type TermID = String;

/// Ancestor queries over a term store.
pub struct RustHpo<S: TermStore> {
    store: S,
}

impl<S: TermStore> RustHpo<S> {
    pub fn new(store: S) -> RustHpo<S> {
        RustHpo { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get_ancestors(&self, term_id: &str) -> Result<Vec<TermID>> {
        ancestors::get_ancestors(&self.store, term_id)
    }

    pub fn get_ancestor_closure(&self, term_id: &str) -> Result<Vec<TermID>> {
        closures::get_ancestor_closure(&self.store, term_id)
    }

    pub fn get_min_graph(&self, term_ids: &[TermID]) -> Result<Vec<MinGraphNode>> {
        min_graph::get_min_graph(&self.store, term_ids)
    }
}

impl RustHpo<SqliteTermStore> {
    /// Opens a database written by [`db_query::load_obo_into_db`].
    pub fn open(db_path: &Path) -> Result<RustHpo<SqliteTermStore>> {
        Ok(RustHpo::new(SqliteTermStore::open(db_path)?))
    }
}

impl RustHpo<InMemoryTermStore> {
    pub fn from_obo(obo_path: &Path) -> Result<RustHpo<InMemoryTermStore>> {
        let terms = file_io::read_obo_file(obo_path)?;
        Ok(RustHpo::new(InMemoryTermStore::new(terms)))
    }
}

impl<S: TermStore + fmt::Debug> fmt::Debug for RustHpo<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RustHpo {{ store: {:?} }}", self.store)
    }
}

#[cfg(feature = "python")]
#[pyclass]
pub struct Hpo {
    hpo: RustHpo<SqliteTermStore>,
}

#[cfg(feature = "python")]
#[pymethods]
impl Hpo {
    #[new]
    fn new(db: &str) -> PyResult<Self> {
        let hpo = RustHpo::open(Path::new(db))?;
        Ok(Hpo { hpo })
    }

    fn get_ancestors(&self, hpo_id: &str) -> PyResult<Vec<TermID>> {
        Ok(self.hpo.get_ancestors(hpo_id)?)
    }

    fn get_ancestor_closure(&self, hpo_id: &str) -> PyResult<Vec<TermID>> {
        Ok(self.hpo.get_ancestor_closure(hpo_id)?)
    }

    fn get_min_graph(&self, py: Python, hpo_list: Vec<TermID>) -> PyResult<Vec<PyObject>> {
        let nodes = self.hpo.get_min_graph(&hpo_list)?;
        Ok(nodes.iter().map(|node| node.into_py(py)).collect())
    }
}

#[cfg(feature = "python")]
#[pyfunction]
fn load_obo(obo: &str, db: &str) -> PyResult<usize> {
    Ok(db_query::load_obo_into_db(Path::new(obo), Path::new(db))?)
}

#[cfg(feature = "python")]
#[pymodule]
fn hpograph(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<Hpo>()?;
    m.add_function(wrap_pyfunction!(load_obo, m)?)?;
    Ok(())
}
