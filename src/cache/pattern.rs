//! Glob Pattern Module
//!
//! Shell-style key patterns used by `KEYS`.
//!
//! Supported syntax:
//! - `*` matches any run of characters, including none
//! - `?` matches exactly one character
//! - `[abc]`, `[a-z]` match one character from the class; `[^..]` or `[!..]` negate it
//! - `\x` matches `x` literally
//!
//! Patterns are anchored: they must match the whole key.

// == Token ==
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyChar,
    AnyRun,
    Class { negated: bool, ranges: Vec<(char, char)> },
}

impl Token {
    fn matches(&self, c: char) -> bool {
        match self {
            Token::Literal(l) => *l == c,
            Token::AnyChar => true,
            Token::AnyRun => false,
            Token::Class { negated, ranges } => {
                let hit = ranges.iter().any(|(lo, hi)| *lo <= c && c <= *hi);
                hit != *negated
            }
        }
    }
}

// == Glob Pattern ==
/// A compiled glob pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    tokens: Vec<Token>,
}

impl GlobPattern {
    /// Compiles a pattern. Compilation never fails: malformed constructs
    /// (an unterminated `[`, a trailing `\`) are taken literally.
    pub fn new(pattern: &str) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens = Vec::with_capacity(chars.len());
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '*' => {
                    // Consecutive stars collapse into one
                    if tokens.last() != Some(&Token::AnyRun) {
                        tokens.push(Token::AnyRun);
                    }
                    i += 1;
                }
                '?' => {
                    tokens.push(Token::AnyChar);
                    i += 1;
                }
                '\\' if i + 1 < chars.len() => {
                    tokens.push(Token::Literal(chars[i + 1]));
                    i += 2;
                }
                '[' => match parse_class(&chars, i + 1) {
                    Some((token, next)) => {
                        tokens.push(token);
                        i = next;
                    }
                    None => {
                        tokens.push(Token::Literal('['));
                        i += 1;
                    }
                },
                c => {
                    tokens.push(Token::Literal(c));
                    i += 1;
                }
            }
        }

        Self { tokens }
    }

    /// Returns true if the pattern matches every possible key.
    pub fn matches_all(&self) -> bool {
        self.tokens == [Token::AnyRun]
    }

    /// Matches the whole of `text` against the pattern.
    ///
    /// Backtracks only to the most recent `*`, so matching is
    /// O(pattern * text) in the worst case.
    pub fn matches(&self, text: &str) -> bool {
        if self.matches_all() {
            return true;
        }

        let text: Vec<char> = text.chars().collect();
        let (mut p, mut t) = (0, 0);
        let mut backtrack: Option<(usize, usize)> = None;

        while t < text.len() {
            match self.tokens.get(p) {
                Some(Token::AnyRun) => {
                    backtrack = Some((p, t));
                    p += 1;
                    continue;
                }
                Some(token) if token.matches(text[t]) => {
                    p += 1;
                    t += 1;
                    continue;
                }
                _ => {}
            }

            match backtrack {
                // Let the last star swallow one more character
                Some((star, start)) => {
                    p = star + 1;
                    t = start + 1;
                    backtrack = Some((star, start + 1));
                }
                None => return false,
            }
        }

        self.tokens[p..].iter().all(|token| *token == Token::AnyRun)
    }
}

/// Parses a character class starting right after `[`.
///
/// Returns the class token and the index after the closing `]`, or None if
/// the class is never closed.
fn parse_class(chars: &[char], start: usize) -> Option<(Token, usize)> {
    let mut i = start;
    let negated = matches!(chars.get(i), Some('^') | Some('!'));
    if negated {
        i += 1;
    }

    let mut ranges = Vec::new();
    // A `]` right after the opening bracket is a member, not the terminator
    let mut first = true;

    loop {
        let c = *chars.get(i)?;
        if c == ']' && !first {
            return Some((Token::Class { negated, ranges }, i + 1));
        }
        first = false;

        let lo = if c == '\\' {
            i += 1;
            *chars.get(i)?
        } else {
            c
        };
        i += 1;

        if chars.get(i) == Some(&'-') && chars.get(i + 1).is_some_and(|n| *n != ']') {
            let hi = chars[i + 1];
            i += 2;
            if lo <= hi {
                ranges.push((lo, hi));
            } else {
                ranges.push((hi, lo));
            }
        } else {
            ranges.push((lo, lo));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glob(pattern: &str, text: &str) -> bool {
        GlobPattern::new(pattern).matches(text)
    }

    #[test]
    fn test_star_matches_everything() {
        assert!(glob("*", ""));
        assert!(glob("*", "foo1"));
        assert!(GlobPattern::new("*").matches_all());
        assert!(GlobPattern::new("**").matches_all());
    }

    #[test]
    fn test_literal_is_anchored() {
        assert!(glob("foo", "foo"));
        assert!(!glob("foo", "foo1"));
        assert!(!glob("foo", "xfoo"));
        assert!(!glob("foo", "fo"));
    }

    #[test]
    fn test_prefix_suffix_infix() {
        assert!(glob("foo*", "foo1"));
        assert!(glob("foo*", "foo"));
        assert!(!glob("foo*", "bar1"));
        assert!(glob("*1", "bar1"));
        assert!(!glob("*1", "bar2"));
        assert!(glob("f*o*3", "foo3"));
        assert!(glob("a*b*c", "axxbyybzzc"));
        assert!(!glob("a*b*c", "axxbyyb"));
    }

    #[test]
    fn test_question_mark() {
        assert!(glob("foo?", "foo1"));
        assert!(!glob("foo?", "foo"));
        assert!(!glob("foo?", "foo12"));
        assert!(glob("?a?", "bar"));
        assert!(glob("h?llo", "héllo"));
    }

    #[test]
    fn test_character_classes() {
        assert!(glob("foo[12]", "foo1"));
        assert!(!glob("foo[12]", "foo3"));
        assert!(glob("foo[1-3]", "foo3"));
        assert!(glob("foo[3-1]", "foo2"));
        assert!(glob("foo[^1]", "foo2"));
        assert!(glob("foo[!1]", "foo2"));
        assert!(!glob("foo[^1]", "foo1"));
        assert!(glob("[]]", "]"));
        assert!(glob("[a-]", "-"));
    }

    #[test]
    fn test_escapes() {
        assert!(glob("foo\\*", "foo*"));
        assert!(!glob("foo\\*", "foo1"));
        assert!(glob("\\?", "?"));
        assert!(glob("foo\\", "foo\\"));
    }

    #[test]
    fn test_unterminated_class_is_literal() {
        assert!(glob("foo[", "foo["));
        assert!(glob("[ab", "[ab"));
        assert!(!glob("[ab", "a"));
    }

    #[test]
    fn test_pathological_pattern_is_fast() {
        let text = "a".repeat(200);
        let pattern = format!("{}b", "a*".repeat(50));
        assert!(!glob(&pattern, &text));
    }
}
