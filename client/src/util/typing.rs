//! Typing-animation script for the home greeting.
//!
//! The script is a pure state machine: the component owns a `TypingCursor`,
//! asks `next_step` for the delay and the following cursor, and renders
//! `visible` lines. Timers live in the component so this module stays testable
//! without a browser.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use std::time::Duration;

/// Delay between characters on the home page.
pub const CHAR_DELAY: Duration = Duration::from_millis(80);
/// Pause after a finished line before the line break is emitted.
pub const LINE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingScript {
    lines: Vec<String>,
    char_delay: Duration,
    line_delay: Duration,
}

/// Position within a script: the current line and how many of its characters
/// have been revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingCursor {
    pub line: usize,
    pub typed: usize,
}

/// One rendered line. `broken` is set once the trailing line break has been
/// emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedLine {
    pub text: String,
    pub broken: bool,
}

impl TypingScript {
    pub fn new(lines: Vec<String>, char_delay: Duration, line_delay: Duration) -> Self {
        Self {
            lines,
            char_delay,
            line_delay,
        }
    }

    /// The two-line greeting shown on the home page.
    pub fn greeting(user_name: &str) -> Self {
        Self::new(
            vec![format!("Hello, {user_name} !"), "It's great to see you again!".to_owned()],
            CHAR_DELAY,
            LINE_DELAY,
        )
    }

    #[must_use]
    pub fn with_delays(mut self, char_delay: Duration, line_delay: Duration) -> Self {
        self.char_delay = char_delay;
        self.line_delay = line_delay;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Delay before the next reveal and the cursor after it, or `None` once
    /// every line has been typed and broken.
    pub fn next_step(&self, cursor: TypingCursor) -> Option<(Duration, TypingCursor)> {
        let line = self.lines.get(cursor.line)?;
        if cursor.typed < line.chars().count() {
            Some((
                self.char_delay,
                TypingCursor {
                    line: cursor.line,
                    typed: cursor.typed + 1,
                },
            ))
        } else {
            Some((
                self.line_delay,
                TypingCursor {
                    line: cursor.line + 1,
                    typed: 0,
                },
            ))
        }
    }

    /// Text revealed at `cursor`.
    pub fn visible(&self, cursor: TypingCursor) -> Vec<TypedLine> {
        let mut out = self
            .lines
            .iter()
            .take(cursor.line)
            .map(|line| TypedLine {
                text: line.clone(),
                broken: true,
            })
            .collect::<Vec<_>>();
        if let Some(current) = self.lines.get(cursor.line) {
            if cursor.typed > 0 {
                out.push(TypedLine {
                    text: current.chars().take(cursor.typed).collect(),
                    broken: false,
                });
            }
        }
        out
    }
}
