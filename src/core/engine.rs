use crate::core::repl::run_repl;
use crate::core::solver::ScrambleSolver;
use crate::core::{CitySource, SessionSummary};
use crate::utils::error::Result;
use std::io::Write;
use tokio::io::AsyncBufRead;

/// Runs the two stages of a puzzle session: load the city list through the
/// configured source, then hand the solver to the interactive loop.
pub struct PuzzleEngine<S: CitySource> {
    source: S,
    max_results: Option<usize>,
}

impl<S: CitySource> PuzzleEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_results: None,
        }
    }

    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    pub async fn run<R, W>(&self, input: R, output: W) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin + Send,
        W: Write,
    {
        tracing::info!("Loading city list...");
        let cities = self.source.load().await?;
        tracing::info!("Loaded {} cities", cities.len());

        let solver = ScrambleSolver::new(cities).with_max_results(self.max_results);
        run_repl(&solver, input, output).await
    }
}
