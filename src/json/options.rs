//! Parser configuration.
//!
//! The default is [`ParseOptions::strict`]. [`ParseOptions::compatible`]
//! keeps the lenient legacy behaviour for callers that relied on it:
//!
//! - a `-` anywhere in a number is folded into a leading sign (`1-2` is `-12`)
//! - object keys and separators are consumed without checking `"` / `:`
//! - content after the root value is ignored

/// Default nesting limit for strict parsing.
pub const DEFAULT_MAX_NESTING_DEPTH: u64 = 256;

/// Nesting limit for compatible parsing.
pub const COMPATIBLE_MAX_NESTING_DEPTH: u64 = 1024;

/// Options controlling how strictly the parser validates its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting depth for arrays/objects
    pub max_nesting_depth: u64,
    /// Fail if anything but whitespace follows the root value
    pub reject_trailing_content: bool,
    /// Fail on a `-` that is neither leading nor right after the exponent marker
    pub strict_sign: bool,
    /// Require `"` before object keys and `:` after them
    pub strict_punctuation: bool,
}

impl ParseOptions {
    /// Validating options, used by default.
    pub const fn strict() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            reject_trailing_content: true,
            strict_sign: true,
            strict_punctuation: true,
        }
    }

    /// Lenient options matching the legacy parser.
    pub const fn compatible() -> Self {
        Self {
            max_nesting_depth: COMPATIBLE_MAX_NESTING_DEPTH,
            reject_trailing_content: false,
            strict_sign: false,
            strict_punctuation: false,
        }
    }

    /// Same options with a different nesting limit.
    pub const fn with_max_nesting_depth(mut self, depth: u64) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(ParseOptions::default(), ParseOptions::strict());
    }

    #[test]
    fn test_strict_options() {
        let options = ParseOptions::strict();
        assert_eq!(options.max_nesting_depth, 256);
        assert!(options.reject_trailing_content);
        assert!(options.strict_sign);
        assert!(options.strict_punctuation);
    }

    #[test]
    fn test_compatible_options() {
        let options = ParseOptions::compatible();
        assert!(!options.reject_trailing_content);
        assert!(!options.strict_sign);
        assert!(!options.strict_punctuation);
        assert!(options.max_nesting_depth > ParseOptions::strict().max_nesting_depth);
    }

    #[test]
    fn test_with_max_nesting_depth() {
        let options = ParseOptions::compatible().with_max_nesting_depth(3);
        assert_eq!(options.max_nesting_depth, 3);
        assert!(!options.strict_sign);
    }
}
