use regex::Regex;

/// Strategy for counting the callable units of a source file (RFC).
pub trait UnitCounter {
    fn count(&self, content: &str) -> usize;
}

/// Word characters and boundaries are ASCII-only and `.` stops at any line
/// terminator, so non-ASCII letters separate words.
const UNIT_PATTERN: &str = r"(?-u:\b)function(?-u:\b)|(?-u:\b)class(?-u:\b)[^\n\r\x{2028}\x{2029}]*(?-u:\b)(?-u:\w)+\s*\(";

/// Lexical approximation of the response set.
///
/// Counts every `function` keyword plus every line-local `class ... name(`
/// occurrence. Overloads, arrow-valued properties and inherited members are
/// not resolved; a `class` line matches at most once.
pub struct LexicalUnitCounter {
    pattern: Regex,
}

impl Default for LexicalUnitCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalUnitCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(UNIT_PATTERN).expect("Invalid regex"),
        }
    }
}

impl UnitCounter for LexicalUnitCounter {
    fn count(&self, content: &str) -> usize {
        self.pattern.find_iter(content).count()
    }
}

#[cfg(test)]
#[path = "units_tests.rs"]
mod tests;
