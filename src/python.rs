//! Python bindings, built with the `python` feature.
//!
//! The extension module is named `_latest_version` and exposes
//! `find_executables`, `get_version`, `find_latest_command` and the
//! `ExecutableInfo` class. Every call runs on its own current-thread tokio
//! runtime with the GIL released. Failures raise `RuntimeError` carrying
//! the error message.

use crate::{ExecutableInfo, LookupError, ProbeError};
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use std::future::Future;
use std::path::Path;

/// Python view of [`ExecutableInfo`].
#[pyclass(name = "ExecutableInfo", module = "latest_version", frozen)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyExecutableInfo {
    #[pyo3(get)]
    path: String,
    #[pyo3(get)]
    version: String,
}

#[pymethods]
impl PyExecutableInfo {
    #[new]
    fn new(path: String, version: String) -> Self {
        Self { path, version }
    }

    fn __repr__(&self) -> String {
        format!(
            "ExecutableInfo(path={:?}, version={:?})",
            self.path, self.version
        )
    }
}

impl From<ExecutableInfo> for PyExecutableInfo {
    fn from(info: ExecutableInfo) -> Self {
        Self {
            version: info.version().to_string(),
            path: info.into_path().to_string_lossy().into_owned(),
        }
    }
}

fn block_on<F: Future>(future: F) -> PyResult<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| PyRuntimeError::new_err(format!("failed to start runtime: {e}")))?;
    Ok(runtime.block_on(future))
}

fn lookup_error(e: LookupError) -> PyErr {
    PyRuntimeError::new_err(e.to_string())
}

fn version_error(e: ProbeError) -> PyErr {
    PyRuntimeError::new_err(e.to_string())
}

/// Every executable named `command` on `PATH`, as path strings.
#[pyfunction]
#[pyo3(name = "find_executables")]
fn py_find_executables(py: Python<'_>, command: &str) -> PyResult<Vec<String>> {
    let paths = py
        .allow_threads(|| crate::find_executables(command))
        .map_err(lookup_error)?;
    Ok(paths
        .into_iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect())
}

/// Version of the executable at `path`.
#[pyfunction]
#[pyo3(name = "get_version")]
fn py_get_version(py: Python<'_>, path: &str) -> PyResult<PyExecutableInfo> {
    py.allow_threads(|| block_on(crate::get_version(Path::new(path))))?
        .map(PyExecutableInfo::from)
        .map_err(version_error)
}

/// The newest installation of `command` on `PATH`.
#[pyfunction]
#[pyo3(name = "find_latest_command")]
fn py_find_latest_command(py: Python<'_>, command: &str) -> PyResult<PyExecutableInfo> {
    py.allow_threads(|| block_on(crate::find_latest_command(command)))?
        .map(PyExecutableInfo::from)
        .map_err(lookup_error)
}

#[pymodule]
fn _latest_version(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyExecutableInfo>()?;
    m.add_function(wrap_pyfunction!(py_find_executables, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_version, m)?)?;
    m.add_function(wrap_pyfunction!(py_find_latest_command, m)?)?;
    Ok(())
}
