//! Configuration for lookup table generation

/// Threading configuration for building lookup tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of threads for computation (0 = auto-detect)
    pub threads: usize,
    /// Whether to build tables in parallel (false = single-threaded)
    pub parallel: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            threads: 0, // Auto-detect CPU cores
            parallel: true,
        }
    }
}

impl GenerationConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self { threads, parallel }
    }

    /// Sequential configuration, used by quick single-value lookups
    pub fn sequential() -> Self {
        Self::new(1, false)
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches.get_one::<usize>("threads").copied().unwrap_or(0);

        let parallel = !matches.get_flag("no-parallel");

        Self::new(threads, parallel)
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1,
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            (true, n) => n,
        }
    }

    /// Configure rayon's global pool once; later calls keep the first pool
    pub fn install_thread_pool(&self) {
        let threads = self.effective_threads();
        if self.parallel && threads > 0 {
            if let Err(err) = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
            {
                log::debug!("Could not set thread count to {}: {}", threads, err);
            }
        }
    }
}
