//! Report values produced by the file scorer and the group aggregator.
//!
//! Every report is computed once from its inputs and never mutated
//! afterwards. Scores are plain percentages; rendering is left to writers.

use super::{FunctionVerdict, Issue};
use crate::scoring::{completeness_score, Grade};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub total_functions: usize,
    pub ok_functions: usize,
    pub score: f64,
    pub grade: Grade,
    /// No function in the file has an issue.
    pub clean: bool,
    pub functions: Vec<FunctionVerdict>,
    /// Set when the file could not be analysed at all.
    pub parse_errors: Vec<Issue>,
}

impl FileReport {
    pub fn from_verdicts(path: impl Into<PathBuf>, functions: Vec<FunctionVerdict>) -> Self {
        let total_functions = functions.len();
        let ok_functions = functions.iter().filter(|f| f.ok).count();
        let score = completeness_score(ok_functions, total_functions);
        Self {
            path: path.into(),
            total_functions,
            ok_functions,
            score,
            grade: Grade::from_score(score),
            clean: functions.iter().all(|f| f.issues.is_empty()),
            functions,
            parse_errors: Vec::new(),
        }
    }

    pub fn parse_failure(path: impl Into<PathBuf>, issue: Issue) -> Self {
        Self {
            path: path.into(),
            total_functions: 0,
            ok_functions: 0,
            score: 0.0,
            grade: Grade::from_score(0.0),
            clean: false,
            functions: Vec::new(),
            parse_errors: vec![issue],
        }
    }

    pub fn ok(&self) -> bool {
        self.clean && self.parse_errors.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.parse_errors.len() + self.functions.iter().map(|f| f.issues.len()).sum::<usize>()
    }

    pub fn failing_functions(&self) -> impl Iterator<Item = &FunctionVerdict> {
        self.functions.iter().filter(|f| !f.ok)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupStatus {
    Empty,
    Pass,
    Fail,
}

impl std::fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupStatus::Empty => write!(f, "EMPTY"),
            GroupStatus::Pass => write!(f, "PASS"),
            GroupStatus::Fail => write!(f, "FAIL"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupReport {
    pub label: String,
    /// The requested target does not exist on disk.
    pub missing: bool,
    pub files: Vec<FileReport>,
    pub file_count: usize,
    pub ok_files: usize,
    pub failing_files: usize,
    pub score_sum: f64,
    pub average_score: f64,
    pub grade: Grade,
    pub clean: bool,
    pub status: GroupStatus,
}

impl GroupReport {
    pub fn from_reports(label: impl Into<String>, files: Vec<FileReport>, missing: bool) -> Self {
        let file_count = files.len();
        let ok_files = files.iter().filter(|f| f.ok()).count();
        let score_sum: f64 = files.iter().map(|f| f.score).sum();
        let average_score = if file_count == 0 {
            0.0
        } else {
            score_sum / file_count as f64
        };
        let clean = files.iter().all(|f| f.clean);
        let status = if file_count == 0 {
            GroupStatus::Empty
        } else if clean && average_score >= 100.0 {
            GroupStatus::Pass
        } else {
            GroupStatus::Fail
        };

        Self {
            label: label.into(),
            missing,
            file_count,
            ok_files,
            failing_files: file_count - ok_files,
            score_sum,
            average_score,
            grade: Grade::from_score(average_score),
            clean,
            status,
            files,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    pub groups: Vec<GroupReport>,
    pub total_files: usize,
    pub ok_files: usize,
    pub failing_files: usize,
}

impl RunSummary {
    pub fn from_groups(groups: Vec<GroupReport>) -> Self {
        let total_files = groups.iter().map(|g| g.file_count).sum();
        let ok_files = groups.iter().map(|g| g.ok_files).sum();
        let failing_files = groups.iter().map(|g| g.failing_files).sum();
        Self {
            groups,
            total_files,
            ok_files,
            failing_files,
        }
    }

    pub fn success(&self) -> bool {
        self.failing_files == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RuleKind;

    fn verdict(ok: bool) -> FunctionVerdict {
        let issues = if ok {
            vec![]
        } else {
            vec![Issue::error(
                RuleKind::AnnotationCompleteness,
                1,
                "missing return annotation",
            )]
        };
        FunctionVerdict::new("f", 1, issues)
    }

    #[test]
    fn test_file_report_without_functions_is_vacuously_clean() {
        let report = FileReport::from_verdicts("empty.py", vec![]);
        assert_eq!(report.score, 100.0);
        assert!(report.clean);
        assert!(report.ok());
        assert_eq!(report.grade, Grade::A);
    }

    #[test]
    fn test_file_report_parse_failure_scores_zero() {
        let issue = Issue::error(RuleKind::Parse, 3, "syntax error");
        let report = FileReport::parse_failure("broken.py", issue);
        assert_eq!(report.score, 0.0);
        assert!(!report.ok());
        assert_eq!(report.issue_count(), 1);
    }

    #[test]
    fn test_group_status_transitions() {
        let empty = GroupReport::from_reports("g", vec![], false);
        assert_eq!(empty.status, GroupStatus::Empty);
        assert_eq!(empty.average_score, 0.0);

        let pass = GroupReport::from_reports(
            "g",
            vec![FileReport::from_verdicts("a.py", vec![verdict(true)])],
            false,
        );
        assert_eq!(pass.status, GroupStatus::Pass);

        let fail = GroupReport::from_reports(
            "g",
            vec![FileReport::from_verdicts("a.py", vec![verdict(false)])],
            false,
        );
        assert_eq!(fail.status, GroupStatus::Fail);
        assert_eq!(fail.failing_files, 1);
    }

    #[test]
    fn test_run_summary_success_requires_no_failing_files() {
        let ok_group = GroupReport::from_reports(
            "a",
            vec![FileReport::from_verdicts("a.py", vec![verdict(true)])],
            false,
        );
        let empty_group = GroupReport::from_reports("b", vec![], true);
        let summary = RunSummary::from_groups(vec![ok_group.clone(), empty_group]);
        assert!(summary.success());
        assert_eq!(summary.total_files, 1);

        let bad_group = GroupReport::from_reports(
            "c",
            vec![FileReport::from_verdicts("c.py", vec![verdict(false)])],
            false,
        );
        let summary = RunSummary::from_groups(vec![ok_group, bad_group]);
        assert!(!summary.success());
        assert_eq!(summary.failing_files, 1);
        assert_eq!(summary.ok_files, 1);
    }
}
