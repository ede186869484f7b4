use crate::core::{FileReport, FunctionVerdict, GroupReport, GroupStatus, Issue, RunSummary};
use crate::formatting::{ColoredFormatter, OutputFormatter};
use crate::io::output::{OutputWriter, RenderOptions};
use std::io::Write;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const RULE_WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
    options: RenderOptions,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(options.formatting),
            options,
        }
    }

    fn write_title(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.formatter.header("Type annotation completeness")
        )?;
        writeln!(self.writer, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn write_group(&mut self, group: &GroupReport, base: Option<&Path>) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        let label = self.formatter.bold(&group.label);
        if group.missing {
            writeln!(
                self.writer,
                "{}: {}",
                label,
                self.formatter.warning("missing directory")
            )?;
            return Ok(());
        }
        if group.files.is_empty() {
            writeln!(
                self.writer,
                "{}: {}",
                label,
                self.formatter.dim("no .py files found")
            )?;
            return Ok(());
        }

        writeln!(self.writer, "{} ({})", label, plural(group.file_count, "file"))?;
        let names: Vec<String> = group.files.iter().map(|f| display_path(&f.path, base)).collect();
        let width = names.iter().map(|n| n.width()).max().unwrap_or(0);
        for (file, name) in group.files.iter().zip(&names) {
            self.write_file_line(file, name, width)?;
            self.write_file_details(file)?;
        }
        Ok(())
    }

    fn write_file_line(&mut self, file: &FileReport, name: &str, width: usize) -> anyhow::Result<()> {
        let padding = " ".repeat(width - name.width());
        let mut line = format!(
            "  {} {}{}  {} {:>5.1}%  {}",
            self.formatter.glyph(file.ok()),
            name,
            padding,
            self.formatter.score_bar(file.score, BAR_WIDTH),
            file.score,
            self.formatter.grade(file.grade),
        );
        if !file.ok() {
            let issues = plural(file.issue_count(), "issue");
            line.push_str(&format!("  {}", self.formatter.dim(&format!("({issues})"))));
        }
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn write_file_details(&mut self, file: &FileReport) -> anyhow::Result<()> {
        if self.options.verbosity == 0 {
            return Ok(());
        }
        for issue in &file.parse_errors {
            self.write_issue(issue, 6)?;
        }
        let functions: Vec<&FunctionVerdict> = if self.options.verbosity >= 2 {
            file.functions.iter().collect()
        } else {
            file.failing_functions().collect()
        };
        for function in functions {
            self.write_function(function)?;
        }
        Ok(())
    }

    fn write_function(&mut self, function: &FunctionVerdict) -> anyhow::Result<()> {
        let status = if function.ok {
            self.formatter.success("ok")
        } else {
            self.formatter.error(&plural(function.issues.len(), "issue"))
        };
        writeln!(
            self.writer,
            "      def {} (line {}): {}",
            function.name, function.line, status
        )?;
        for issue in &function.issues {
            self.write_issue(issue, 8)?;
        }
        Ok(())
    }

    fn write_issue(&mut self, issue: &Issue, indent: usize) -> anyhow::Result<()> {
        let location = if issue.line == 0 {
            String::new()
        } else {
            format!("line {}: ", issue.line)
        };
        writeln!(
            self.writer,
            "{}{}{}: {} {}",
            " ".repeat(indent),
            location,
            self.formatter.severity(issue.severity),
            issue.message,
            self.formatter.dim(&format!("[{}]", issue.rule.as_str()))
        )?;
        Ok(())
    }

    fn write_summary_table(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.header("Summary"))?;
        writeln!(self.writer, "{}", "-".repeat(RULE_WIDTH))?;

        let width = summary
            .groups
            .iter()
            .map(|g| g.label.width())
            .max()
            .unwrap_or(0);
        for group in &summary.groups {
            let status = match group.status {
                GroupStatus::Pass => self.formatter.success("PASS "),
                GroupStatus::Fail => self.formatter.error("FAIL "),
                GroupStatus::Empty => self.formatter.dim("EMPTY"),
            };
            let grade = if group.status == GroupStatus::Empty {
                "-".to_string()
            } else {
                self.formatter.grade(group.grade)
            };
            writeln!(
                self.writer,
                "  {}{}  {}  {}/{} passed  avg {:>5.1}%  {}",
                group.label,
                " ".repeat(width - group.label.width()),
                status,
                group.ok_files,
                group.file_count,
                group.average_score,
                grade
            )?;
        }
        Ok(())
    }

    fn write_verdict(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        if summary.success() {
            writeln!(
                self.writer,
                "{} {} checked, all passing",
                self.formatter.success(&self.formatter.bold("ALL GOOD:")),
                plural(summary.total_files, "file")
            )?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "{} {} of {} failing",
            self.formatter.error(&self.formatter.bold("FAILED:")),
            summary.failing_files,
            plural(summary.total_files, "file")
        )?;
        if self.options.verbosity == 0 {
            writeln!(
                self.writer,
                "{}",
                self.formatter
                    .dim("Tip: run with --verbose to list the issues of each failing file")
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_summary(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        self.write_title()?;
        let base = self.options.base.clone();
        for group in &summary.groups {
            self.write_group(group, base.as_deref())?;
        }
        self.write_summary_table(summary)?;
        self.write_verdict(summary)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn display_path(path: &Path, base: Option<&Path>) -> String {
    base.and_then(|base| pathdiff::diff_paths(path, base))
        .filter(|relative| !relative.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
