//! Glob-style matching of sObject API names.
//!
//! Only two metacharacters exist: `*` matches any run of characters
//! (including none) and `?` matches exactly one. Everything else is literal
//! and the pattern is anchored at both ends.

/// A compiled name pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
    case_sensitive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Any,
    One,
    Char(char),
}

impl Pattern {
    /// Compile a pattern. Matching is case-insensitive by default.
    pub fn new(pattern: &str) -> Self {
        let tokens = pattern
            .chars()
            .map(|c| match c {
                '*' => Token::Any,
                '?' => Token::One,
                c => Token::Char(c),
            })
            .collect();
        Self {
            tokens,
            case_sensitive: false,
        }
    }

    /// Toggle case-sensitive matching.
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    /// Test `name` against the whole pattern.
    pub fn matches(&self, name: &str) -> bool {
        let text: Vec<char> = name.chars().collect();
        let (mut t, mut p) = (0, 0);
        // Position of the last `*` and the text index it currently absorbs up to.
        let mut backtrack: Option<(usize, usize)> = None;

        while t < text.len() {
            match self.tokens.get(p) {
                Some(Token::Any) => {
                    backtrack = Some((p, t));
                    p += 1;
                }
                Some(Token::One) => {
                    p += 1;
                    t += 1;
                }
                Some(Token::Char(c)) if self.eq_char(*c, text[t]) => {
                    p += 1;
                    t += 1;
                }
                _ => match backtrack {
                    Some((star, absorbed)) => {
                        p = star + 1;
                        t = absorbed + 1;
                        backtrack = Some((star, absorbed + 1));
                    }
                    None => return false,
                },
            }
        }

        self.tokens[p..].iter().all(|tok| *tok == Token::Any)
    }

    fn eq_char(&self, a: char, b: char) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            a == b || a.to_lowercase().eq(b.to_lowercase())
        }
    }
}

/// Test whether `name` matches the wildcard `pattern`.
pub fn wild_test(pattern: &str, name: &str, case_sensitive: bool) -> bool {
    Pattern::new(pattern).case_sensitive(case_sensitive).matches(name)
}

/// True when `s` contains a wildcard metacharacter.
pub fn has_wildcard(s: &str) -> bool {
    s.contains(['*', '?'])
}

/// Keep the names matching at least one pattern (case-insensitive), in the
/// order of `names`.
pub fn filter_names<S: AsRef<str>>(names: &[S], patterns: &[S]) -> Vec<String> {
    let compiled: Vec<Pattern> = patterns.iter().map(|p| Pattern::new(p.as_ref())).collect();
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| compiled.iter().any(|p| p.matches(name)))
        .map(str::to_string)
        .collect()
}
