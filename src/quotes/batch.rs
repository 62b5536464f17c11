use crate::config::ThrottleConfig;
use crate::error::Result;
use crate::fetch::QuoteSource;

use super::throttle::{chunk_count, Pacer};
use super::{QuoteBatch, QuoteMode, QuoteResolver, Symbol};

/// Resolves a symbol list chunk by chunk, pausing between chunks to stay
/// under the upstream rate limit.
pub struct BatchFetcher<S, P> {
    resolver: QuoteResolver<S>,
    throttle: ThrottleConfig,
    pacer: P,
}

impl<S: QuoteSource, P: Pacer> BatchFetcher<S, P> {
    pub fn new(resolver: QuoteResolver<S>, throttle: ThrottleConfig, pacer: P) -> Self {
        Self {
            resolver,
            throttle,
            pacer,
        }
    }

    /// Resolve every symbol. Symbols without a quote are kept as `None`; any
    /// error from the source aborts the whole run.
    pub fn fetch(&mut self, symbols: &[String], mode: QuoteMode) -> Result<QuoteBatch> {
        let chunk_size = self.throttle.chunk_size.max(1);
        let total_chunks = chunk_count(symbols.len(), chunk_size);
        let mut batch = QuoteBatch::new();

        for (index, chunk) in symbols.chunks(chunk_size).enumerate() {
            println!(
                "Fetching chunk {}/{}: {}",
                index + 1,
                total_chunks,
                chunk.join(", ")
            );
            log::info!("chunk {}/{} ({} symbols)", index + 1, total_chunks, chunk.len());

            let mut chunk_batch = QuoteBatch::new();
            for raw in chunk {
                let symbol = Symbol::new(raw);
                if batch.get(&symbol).is_some() || chunk_batch.get(&symbol).is_some() {
                    log::debug!("{} already resolved in this run", symbol);
                    continue;
                }
                let quote = self.resolver.resolve(&symbol, mode)?;
                chunk_batch.insert(symbol, quote);
            }
            batch.extend(chunk_batch);

            let is_last = index + 1 == total_chunks;
            if !is_last || self.throttle.pause_after_final_chunk {
                self.pacer.pause(self.throttle.pause);
            }
        }

        log::info!(
            "resolved {} of {} symbols",
            batch.len() - batch.unresolved(),
            batch.len()
        );
        Ok(batch)
    }
}
