use crate::analyzers::{Analyzer, PythonAnalyzer};
use crate::config::RulesConfig;
use crate::core::{FileReport, FunctionSignature, Issue, RuleKind};
use crate::errors::AnalysisError;
use crate::evaluator::evaluate_function;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Scores one file: parse, evaluate every function, compute the percentage
/// of clean functions.
///
/// Failures to read or parse are contained in the returned report (score 0,
/// not ok) so sibling files are unaffected.
pub struct FileScorer {
    analyzer: Box<dyn Analyzer>,
    rules: RulesConfig,
}

impl FileScorer {
    pub fn new(analyzer: Box<dyn Analyzer>, rules: RulesConfig) -> Self {
        Self { analyzer, rules }
    }

    pub fn python(rules: RulesConfig) -> Self {
        Self::new(Box::new(PythonAnalyzer::new()), rules)
    }

    pub fn score_path(&self, path: &Path) -> FileReport {
        match read_source(path) {
            Ok(source) => self.score_source(path, &source),
            Err(err) => failure(path, err),
        }
    }

    pub fn score_source(&self, path: &Path, source: &str) -> FileReport {
        match self.analyzer.extract(source, path) {
            Ok(signatures) => self.score_signatures(path, &signatures),
            Err(err) => failure(path, err),
        }
    }

    pub fn score_signatures(&self, path: &Path, signatures: &[FunctionSignature]) -> FileReport {
        let verdicts = signatures
            .iter()
            .map(|sig| evaluate_function(sig, &self.rules))
            .collect();
        let report = FileReport::from_verdicts(path, verdicts);
        log::debug!(
            "{}: {}/{} functions clean ({:.1}%)",
            path.display(),
            report.ok_functions,
            report.total_functions,
            report.score
        );
        report
    }
}

impl Default for FileScorer {
    fn default() -> Self {
        Self::python(RulesConfig::default())
    }
}

fn read_source(path: &Path) -> Result<String, AnalysisError> {
    let bytes = std::fs::read(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = bytes.strip_prefix(UTF8_BOM).map(<[u8]>::to_vec).unwrap_or(bytes);
    String::from_utf8(bytes).map_err(|e| AnalysisError::Encoding {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Issue line 0 means the failure concerns the whole file.
fn failure(path: &Path, err: AnalysisError) -> FileReport {
    log::warn!("{}: {}", path.display(), err);
    let issue = Issue::error(RuleKind::Parse, err.line().unwrap_or(0), err.to_string());
    FileReport::parse_failure(path, issue)
}
