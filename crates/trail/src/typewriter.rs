//! Typed-text animation state machine
//!
//! Types each string one character at a time, holds it, backspaces it and
//! moves to the next. The caller renders [`Tick::text`] and schedules the
//! next [`Typewriter::step`] after [`Tick::delay_ms`].

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypewriterOptions {
    pub strings: Vec<String>,
    pub type_speed_ms: u32,
    pub back_speed_ms: u32,
    /// Pause with the full string shown before deleting starts
    pub back_delay_ms: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            strings: vec!["Web Developer".to_string(), "UX/UI Designer".to_string()],
            type_speed_ms: 100,
            back_speed_ms: 100,
            back_delay_ms: 1000,
            looped: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
    Done,
}

pub struct Typewriter {
    opts: TypewriterOptions,
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(opts: TypewriterOptions) -> Self {
        let phase = if opts.strings.is_empty() {
            Phase::Done
        } else {
            Phase::Typing
        };
        Self {
            opts,
            index: 0,
            shown: 0,
            phase,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance one keystroke. `None` once a non-looping run has finished.
    pub fn step(&mut self) -> Option<Tick> {
        let len = self.current_len();
        let delay_ms = match self.phase {
            Phase::Done => return None,
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown < len {
                    self.opts.type_speed_ms
                } else if self.is_last() && !self.opts.looped {
                    self.phase = Phase::Done;
                    0
                } else {
                    self.phase = Phase::Deleting;
                    self.opts.back_delay_ms
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown > 0 {
                    self.opts.back_speed_ms
                } else {
                    self.index = (self.index + 1) % self.opts.strings.len();
                    self.phase = Phase::Typing;
                    self.opts.type_speed_ms
                }
            }
        };

        Some(Tick {
            text: self.visible_text(),
            delay_ms,
        })
    }

    fn is_last(&self) -> bool {
        self.index + 1 == self.opts.strings.len()
    }

    fn current_len(&self) -> usize {
        self.opts
            .strings
            .get(self.index)
            .map_or(0, |s| s.chars().count())
    }

    fn visible_text(&self) -> String {
        self.opts
            .strings
            .get(self.index)
            .map(|s| s.chars().take(self.shown).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(strings: &[&str], looped: bool) -> TypewriterOptions {
        TypewriterOptions {
            strings: strings.iter().map(|s| (*s).to_string()).collect(),
            type_speed_ms: 10,
            back_speed_ms: 20,
            back_delay_ms: 500,
            looped,
        }
    }

    fn run(tw: &mut Typewriter, n: usize) -> Vec<(String, u32)> {
        (0..n)
            .filter_map(|_| tw.step())
            .map(|t| (t.text, t.delay_ms))
            .collect()
    }

    #[test]
    fn test_types_holds_deletes_and_cycles() {
        let mut tw = Typewriter::new(opts(&["ab", "c"], true));
        let expected: Vec<(String, u32)> = [
            ("a", 10),
            ("ab", 500),
            ("a", 20),
            ("", 10),
            ("c", 500),
            ("", 10),
            ("a", 10),
        ]
        .iter()
        .map(|(s, d)| ((*s).to_string(), *d))
        .collect();
        assert_eq!(run(&mut tw, 7), expected);
    }

    #[test]
    fn test_non_looping_stops_on_last_string() {
        let mut tw = Typewriter::new(opts(&["x", "yz"], false));
        let ticks = run(&mut tw, 20);
        assert_eq!(ticks.last().map(|t| t.0.as_str()), Some("yz"));
        assert!(tw.is_done());
        assert_eq!(tw.step(), None);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut tw = Typewriter::new(opts(&["héllo"], false));
        let ticks = run(&mut tw, 2);
        assert_eq!(ticks[1].0, "hé");
    }

    #[test]
    fn test_no_strings_is_done() {
        let mut tw = Typewriter::new(opts(&[], true));
        assert!(tw.is_done());
        assert_eq!(tw.step(), None);
    }

    #[test]
    fn test_default_options() {
        let o = TypewriterOptions::default();
        assert_eq!(o.strings, vec!["Web Developer", "UX/UI Designer"]);
        assert_eq!((o.type_speed_ms, o.back_speed_ms, o.back_delay_ms), (100, 100, 1000));
        assert!(o.looped);
    }
}
