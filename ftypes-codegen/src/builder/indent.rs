//! Indentation configuration for code generation.

/// Indentation unit for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// `n` spaces per level.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// 2-space indentation, the Prettier default for TypeScript.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// 4-space indentation.
    pub const WIDE: Self = Self::Spaces(4);

    /// One level of indentation. Widths above 8 are capped.
    pub fn as_str(&self) -> &'static str {
        const SPACES: &str = "        ";
        match *self {
            Self::Spaces(n) => &SPACES[..usize::from(n).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::TYPESCRIPT.as_str(), "  ");
        assert_eq!(Indent::WIDE.as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Spaces(0).as_str(), "");
        assert_eq!(Indent::Spaces(12).as_str(), "        ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }
}
