//! Group aggregation: score the files of each group and fold the results
//! into group and run totals.
//!
//! Scoring may run on rayon's pool, but reports are always folded in the
//! listing order of the tasks, so identical inputs produce identical
//! summaries regardless of scheduling.

use crate::core::{FileReport, GroupReport, RunSummary};
use crate::scoring::FileScorer;
use rayon::prelude::*;
use std::path::PathBuf;

/// A labelled, ordered list of files analysed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTask {
    pub label: String,
    pub files: Vec<PathBuf>,
    /// The requested target does not exist.
    pub missing: bool,
}

impl GroupTask {
    pub fn new(label: impl Into<String>, files: Vec<PathBuf>) -> Self {
        Self {
            label: label.into(),
            files,
            missing: false,
        }
    }

    pub fn missing(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            files: Vec::new(),
            missing: true,
        }
    }
}

/// Score every file of one group sequentially, in listing order.
pub fn aggregate_group(task: &GroupTask, scorer: &FileScorer) -> GroupReport {
    let reports = task.files.iter().map(|path| scorer.score_path(path)).collect();
    fold_group(task, reports)
}

pub fn fold_group(task: &GroupTask, reports: Vec<FileReport>) -> GroupReport {
    let report = GroupReport::from_reports(task.label.clone(), reports, task.missing);
    log::debug!(
        "group {}: {} file(s), average {:.1}%, {}",
        report.label,
        report.file_count,
        report.average_score,
        report.status
    );
    report
}

/// Analyse all groups and build the run summary.
pub fn analyze_groups(tasks: &[GroupTask], scorer: &FileScorer, parallel: bool) -> RunSummary {
    let groups = if parallel {
        analyze_parallel(tasks, scorer)
    } else {
        tasks
            .iter()
            .map(|task| aggregate_group(task, scorer))
            .collect()
    };

    let summary = RunSummary::from_groups(groups);
    log::info!(
        "analysed {} file(s) in {} group(s): {} ok, {} failing",
        summary.total_files,
        summary.groups.len(),
        summary.ok_files,
        summary.failing_files
    );
    summary
}

/// Scores all files of all groups as one flat parallel batch, then splits
/// the ordered results back into their groups.
fn analyze_parallel(tasks: &[GroupTask], scorer: &FileScorer) -> Vec<GroupReport> {
    let jobs: Vec<(usize, &PathBuf)> = tasks
        .iter()
        .enumerate()
        .flat_map(|(index, task)| task.files.iter().map(move |path| (index, path)))
        .collect();

    // Indexed parallel iterators collect in input order.
    let scored: Vec<(usize, FileReport)> = jobs
        .par_iter()
        .map(|(index, path)| (*index, scorer.score_path(path)))
        .collect();

    let mut per_group: Vec<Vec<FileReport>> = tasks.iter().map(|_| Vec::new()).collect();
    for (index, report) in scored {
        per_group[index].push(report);
    }

    tasks
        .iter()
        .zip(per_group)
        .map(|(task, reports)| fold_group(task, reports))
        .collect()
}
