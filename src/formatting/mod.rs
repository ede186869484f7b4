use crate::core::Severity;
use crate::scoring::Grade;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

/// Whether check marks and block characters may be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,
    Always,
    Never,
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // https://no-color.org
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only output without colors.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;

    /// Pass/fail marker for a file or group line.
    fn glyph(&self, ok: bool) -> String {
        if ok {
            self.success(&self.emoji("✓", "[OK]"))
        } else {
            self.error(&self.emoji("✗", "[FAIL]"))
        }
    }

    fn grade(&self, grade: Grade) -> String {
        match grade {
            Grade::A => self.success(grade.as_str()),
            Grade::B | Grade::C => self.warning(grade.as_str()),
            Grade::D | Grade::F => self.error(grade.as_str()),
        }
    }

    fn severity(&self, severity: Severity) -> String {
        match severity {
            Severity::Error => self.error("error"),
            Severity::Warning => self.warning("warning"),
        }
    }

    /// Fixed-width bar proportional to a 0-100 score.
    fn score_bar(&self, score: f64, width: usize) -> String {
        let filled = ((score.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
        let (full, empty) = if self.emoji("█", "#") == "█" {
            ("█", "░")
        } else {
            ("#", ".")
        };
        let bar = format!("{}{}", full.repeat(filled), empty.repeat(width - filled));
        if score >= 100.0 {
            self.success(&bar)
        } else {
            self.dim(&bar)
        }
    }
}

pub struct ColoredFormatter {
    config: FormattingConfig,
    use_color: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let use_color = config.color.should_use_color();
        colored::control::set_override(use_color);
        Self { config, use_color }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.config.emoji.should_use_emoji() {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatter_is_ascii() {
        let fmt = ColoredFormatter::new(FormattingConfig::plain());
        assert_eq!(fmt.glyph(true), "[OK]");
        assert_eq!(fmt.glyph(false), "[FAIL]");
        assert_eq!(fmt.score_bar(50.0, 10), "#####.....");
        assert_eq!(fmt.score_bar(0.0, 4), "....");
        assert_eq!(fmt.grade(Grade::C), "C");
    }

    #[test]
    fn test_unicode_bar() {
        let fmt = ColoredFormatter::new(FormattingConfig::new(ColorMode::Never, EmojiMode::Always));
        assert_eq!(fmt.score_bar(75.0, 4), "███░");
        assert_eq!(fmt.glyph(true), "✓");
    }
}
