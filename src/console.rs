//! Narration sinks.
//!
//! Demos never print directly. Every narrating operation takes a
//! `&mut dyn Console`, so the binaries can write to stdout while tests
//! capture the exact lines in a [`Transcript`].

use colored::Colorize;

pub trait Console {
    fn say(&mut self, line: &str);

    fn heading(&mut self, title: &str) {
        self.say(&format!("=== {} ===", title));
    }

    fn blank(&mut self) {
        self.say("");
    }
}

/// Writes narration to standard output.
#[derive(Debug, Clone, Copy)]
pub struct Stdout {
    color: bool,
}

impl Stdout {
    pub fn new(color: bool) -> Self {
        Self {
            color: color && Self::should_use_colors(),
        }
    }

    pub fn should_use_colors() -> bool {
        std::env::var("NO_COLOR").is_err()
    }

    pub fn color(&self) -> bool {
        self.color
    }
}

/// Turns ANSI styling off process-wide when `enabled` is false, so error
/// prefixes and listings follow the same switch as headings.
pub fn apply_color(enabled: bool) {
    if !enabled || !Stdout::should_use_colors() {
        colored::control::set_override(false);
    }
}

impl Default for Stdout {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Console for Stdout {
    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn heading(&mut self, title: &str) {
        let text = format!("=== {} ===", title);
        if self.color {
            println!("{}", text.bold().cyan());
        } else {
            println!("{}", text);
        }
    }
}

/// Records narration in memory.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

}

impl Console for Transcript {
    fn say(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
