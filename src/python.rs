use numpy::PyReadonlyArray2;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::apriori::{mine, mine_and_publish, Corpus, MiningConfig, MiningResult, ResultStore};
use crate::error::MiningError;

fn to_py_err(error: MiningError) -> PyErr {
    match error {
        MiningError::InvariantViolation(_) | MiningError::Source(_) => {
            PyRuntimeError::new_err(error.to_string())
        }
        _ => PyValueError::new_err(error.to_string()),
    }
}

fn to_json(result: &MiningResult) -> PyResult<String> {
    result
        .to_json()
        .map_err(|e| PyRuntimeError::new_err(format!("Failed to encode result: {}", e)))
}

#[pyfunction]
#[pyo3(name = "mine")]
fn mine_py(
    transactions: Vec<Vec<String>>,
    min_support: f64,
    min_confidence: f64,
) -> PyResult<String> {
    let config = MiningConfig::new(min_support, min_confidence).map_err(to_py_err)?;
    let corpus = Corpus::from_transactions(transactions);
    let result = mine(&corpus, &config).map_err(to_py_err)?;
    to_json(&result)
}

#[pyfunction]
#[pyo3(name = "mine_dense")]
fn mine_dense_py<'py>(
    transactions: PyReadonlyArray2<'py, i32>,
    labels: Vec<String>,
    min_support: f64,
    min_confidence: f64,
) -> PyResult<String> {
    let config = MiningConfig::new(min_support, min_confidence).map_err(to_py_err)?;
    let corpus = Corpus::from_dense(transactions.as_array(), &labels).map_err(to_py_err)?;
    let result = mine(&corpus, &config).map_err(to_py_err)?;
    to_json(&result)
}

/// Keeps the most recent result between calls
#[pyclass(name = "MiningSession")]
struct MiningSession {
    store: ResultStore,
}

#[pymethods]
impl MiningSession {
    #[new]
    fn new() -> Self {
        Self {
            store: ResultStore::new(),
        }
    }

    fn run(
        &self,
        transactions: Vec<Vec<String>>,
        min_support: f64,
        min_confidence: f64,
    ) -> PyResult<String> {
        let config = MiningConfig::new(min_support, min_confidence).map_err(to_py_err)?;
        let corpus = Corpus::from_transactions(transactions);
        let result = mine_and_publish(&corpus, &config, &self.store).map_err(to_py_err)?;
        to_json(&result)
    }

    fn last_result(&self) -> PyResult<Option<String>> {
        self.store.get().map(|result| to_json(&result)).transpose()
    }
}

#[pymodule]
fn basketminer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine_py, m)?)?;
    m.add_function(wrap_pyfunction!(mine_dense_py, m)?)?;
    m.add_class::<MiningSession>()?;
    Ok(())
}
