use crate::core::{FunctionSignature, Language};
use crate::errors::AnalysisError;
use std::path::Path;

pub mod python;

pub use python::PythonAnalyzer;

/// Turns source text into the function signatures the rules inspect.
///
/// Implementations report every function definition at any nesting depth,
/// in source order. Malformed input is an `Err`, never a panic.
pub trait Analyzer: Send + Sync {
    fn extract(&self, source: &str, path: &Path) -> Result<Vec<FunctionSignature>, AnalysisError>;
    fn language(&self) -> Language;
}
