//! Reader and output configuration

/// How repeated coordinates in an input file are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The last value for a coordinate wins
    #[default]
    Overwrite,
    /// Values for a coordinate are summed
    Sum,
}

/// Configuration for reading entry-list files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// How repeated coordinates are combined
    pub duplicates: DuplicatePolicy,
    /// Reject entries outside the declared shape
    pub bounds_check: bool,
    /// Memory-map files instead of reading them into a buffer
    pub use_mmap: bool,
}

impl ReaderConfig {
    /// Strict reading: bounds checked, duplicates still overwrite
    pub fn strict() -> Self {
        Self::default().with_bounds_check(true)
    }

    /// Set duplicate handling
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Enable or disable bounds checking
    pub fn with_bounds_check(mut self, bounds_check: bool) -> Self {
        self.bounds_check = bounds_check;
        self
    }

    /// Enable or disable memory mapping
    ///
    /// Has no effect without the `mmap` feature.
    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::Overwrite,
            bounds_check: false,
            use_mmap: cfg!(feature = "mmap"),
        }
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Result matrix (R x C):` followed by `(row, col, value)` lines
    #[default]
    Text,
    /// A JSON object with `rows`, `cols` and `entries`
    #[cfg(feature = "serde")]
    Json,
}
