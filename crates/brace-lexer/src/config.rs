/// Tunable behavior of the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    /// String delimiters whose strings may contain `` ` ``-delimited
    /// interpolation segments.
    pub interpolation_delimiters: Vec<char>,
}

impl LexerConfig {
    /// Replace the set of interpolation-eligible string delimiters.
    pub fn with_interpolation_delimiters(mut self, delimiters: impl IntoIterator<Item = char>) -> Self {
        self.interpolation_delimiters = delimiters.into_iter().collect();
        self
    }

    /// Whether a string opened with `delimiter` may contain interpolation.
    pub fn interpolates_in(&self, delimiter: char) -> bool {
        self.interpolation_delimiters.contains(&delimiter)
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            interpolation_delimiters: vec!['"'],
        }
    }
}
