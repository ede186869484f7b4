use crate::aggregation::GroupTask;
use crate::config::DiscoveryConfig;
use crate::core::Language;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Label of the group holding the loose files directly under the root.
pub const ROOT_GROUP_LABEL: &str = ".";

pub struct FileWalker {
    root: PathBuf,
    ignore_dirs: Vec<String>,
    ignore_patterns: Vec<glob::Pattern>,
    respect_gitignore: bool,
    max_depth: Option<usize>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_dirs: crate::config::default_ignore_dirs(),
            ignore_patterns: vec![],
            respect_gitignore: false,
            max_depth: None,
        }
    }

    pub fn from_config(root: PathBuf, config: &DiscoveryConfig) -> Self {
        Self::new(root)
            .with_ignore_dirs(config.effective_ignore_dirs())
            .with_ignore_patterns(&config.ignore_patterns)
            .with_gitignore(config.respect_gitignore)
    }

    pub fn with_ignore_dirs(mut self, dirs: Vec<String>) -> Self {
        self.ignore_dirs = dirs;
        self
    }

    /// Invalid glob patterns are logged and skipped.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Self {
        self.ignore_patterns = patterns
            .iter()
            .filter_map(|p| match glob::Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    log::warn!("Ignoring invalid pattern '{}': {}", p, e);
                    None
                }
            })
            .collect();
        self
    }

    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Python files under the root, sorted by path.
    pub fn walk(&self) -> Vec<PathBuf> {
        let ignore_dirs = self.ignore_dirs.clone();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .ignore(false)
            .parents(self.respect_gitignore)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .max_depth(self.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                if !is_dir || entry.depth() == 0 {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                !ignore_dirs.iter().any(|d| *d == name)
            })
            .build();

        let mut files: Vec<PathBuf> = walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.into_path()),
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|path| path.is_file() && self.should_process(path))
            .collect();
        files.sort();
        files
    }

    fn should_process(&self, path: &Path) -> bool {
        if Language::from_path(path) != Language::Python {
            return false;
        }
        let path_str = path.to_string_lossy();
        !self.ignore_patterns.iter().any(|p| p.matches(&path_str))
    }

    fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d == name)
    }
}

/// Build the group tasks for a run.
///
/// Explicit targets become one group each, in the order given; a missing
/// target still yields a (missing) group. Without targets, loose files under
/// `root` form the `.` group, followed by one group per subdirectory that
/// holds Python files.
pub fn discover_groups(root: &Path, targets: &[String], config: &DiscoveryConfig) -> Vec<GroupTask> {
    if !targets.is_empty() {
        return targets
            .iter()
            .map(|target| target_group(root, target, config))
            .collect();
    }

    let mut tasks = Vec::new();
    let loose = FileWalker::from_config(root.to_path_buf(), config)
        .with_max_depth(1)
        .walk();
    if !loose.is_empty() {
        tasks.push(GroupTask::new(ROOT_GROUP_LABEL, loose));
    }

    let walker = FileWalker::from_config(root.to_path_buf(), config);
    for dir in subdirectories(root) {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if walker.is_ignored_dir(&name) {
            continue;
        }
        let files = FileWalker::from_config(dir, config).walk();
        if !files.is_empty() {
            tasks.push(GroupTask::new(name, files));
        }
    }
    tasks
}

fn target_group(root: &Path, target: &str, config: &DiscoveryConfig) -> GroupTask {
    let path = root.join(target);
    if path.is_dir() {
        GroupTask::new(target, FileWalker::from_config(path, config).walk())
    } else if path.is_file() {
        let files = if Language::from_path(&path) == Language::Python {
            vec![path]
        } else {
            vec![]
        };
        GroupTask::new(target, files)
    } else {
        log::debug!("Requested target {} does not exist", path.display());
        GroupTask::missing(target)
    }
}

fn subdirectories(root: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Failed to read directory {}: {}", root.display(), e);
            return vec![];
        }
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_walk_sorts_and_prunes_ignored_dirs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "b.py");
        touch(root, "a.py");
        touch(root, "notes.txt");
        touch(root, "pkg/__pycache__/cached.py");
        touch(root, "pkg/mod.py");
        touch(root, ".venv/lib/site.py");

        let files = FileWalker::new(root.to_path_buf()).walk();
        assert_eq!(names(root, &files), vec!["a.py", "b.py", "pkg/mod.py"]);
    }

    #[test]
    fn test_ignore_patterns() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "keep.py");
        touch(root, "test_skip.py");

        let files = FileWalker::new(root.to_path_buf())
            .with_ignore_patterns(&["**/test_*.py".to_string()])
            .walk();
        assert_eq!(names(root, &files), vec!["keep.py"]);
    }

    #[test]
    fn test_discover_groups_without_targets() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "setup.py");
        touch(root, "ex1/main.py");
        touch(root, "ex0/util/helpers.py");
        touch(root, "docs/readme.md");
        touch(root, "build/gen.py");

        let tasks = discover_groups(root, &[], &DiscoveryConfig::default());
        let labels: Vec<&str> = tasks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec![".", "ex0", "ex1"]);
        assert_eq!(names(root, &tasks[0].files), vec!["setup.py"]);
        assert_eq!(names(root, &tasks[1].files), vec!["ex0/util/helpers.py"]);
    }

    #[test]
    fn test_discover_groups_with_targets_keeps_order_and_missing() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "ex1/a.py");
        touch(root, "ex0/b.py");
        touch(root, "empty/readme.md");
        touch(root, "single.py");

        let targets: Vec<String> = ["ex1", "ex7", "ex0", "empty", "single.py"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let tasks = discover_groups(root, &targets, &DiscoveryConfig::default());

        let labels: Vec<&str> = tasks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["ex1", "ex7", "ex0", "empty", "single.py"]);
        assert!(tasks[1].missing);
        assert!(tasks[1].files.is_empty());
        assert!(!tasks[3].missing);
        assert!(tasks[3].files.is_empty());
        assert_eq!(tasks[4].files.len(), 1);
    }
}
