#[derive(Debug, Copy, Clone)]
pub struct Options {
    // Propagation:
    /// Run one pure-literal pass per search node.
    pub pure_literal: bool,
    // Budget:
    /// Give up with an unknown verdict after this many branching decisions.
    pub max_decisions: Option<usize>,
    // Model:
    /// Value given to variables the search left unassigned.
    pub default_polarity: bool,
}

pub const DEFAULT_OPTIONS: Options = Options {
    // Propagation:
    pure_literal: true,
    // Budget:
    max_decisions: None,
    // Model:
    default_polarity: false,
};

impl Default for Options {
    fn default() -> Self {
        DEFAULT_OPTIONS
    }
}
