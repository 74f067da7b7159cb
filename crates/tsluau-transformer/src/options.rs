//! Lowering configuration.

/// Knobs that change the shape of lowered code without changing its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Replace member accesses with literals when the type oracle knows
    /// their compile-time value.
    pub fold_constants: bool,
    /// Emit `x += v` style statements where the target supports them.
    /// When off, every compound assignment is spelled `x = x + v`.
    pub native_compound_assignment: bool,
}

impl TransformOptions {
    /// Options with every feature enabled.
    pub fn new() -> Self {
        Self {
            fold_constants: true,
            native_compound_assignment: true,
        }
    }

    /// Set [`fold_constants`](Self::fold_constants).
    pub fn with_fold_constants(mut self, enabled: bool) -> Self {
        self.fold_constants = enabled;
        self
    }

    /// Set [`native_compound_assignment`](Self::native_compound_assignment).
    pub fn with_native_compound_assignment(mut self, enabled: bool) -> Self {
        self.native_compound_assignment = enabled;
        self
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let options = TransformOptions::default();
        assert!(options.fold_constants);
        assert!(options.native_compound_assignment);
    }

    #[test]
    fn builders() {
        let options = TransformOptions::new()
            .with_fold_constants(false)
            .with_native_compound_assignment(false);
        assert!(!options.fold_constants);
        assert!(!options.native_compound_assignment);
    }
}
