//! ExtractionStrategy trait: one chunk in, candidates out.

use async_trait::async_trait;

use crate::error::ChunkResult;
use crate::types::{card::Candidate, chunk::TextChunk};

/// Turns one chunk into zero or more candidates.
///
/// An `Err` means a collaborator failed for this chunk only; the pipeline
/// logs it, counts it and carries on with zero candidates for the chunk.
#[async_trait]
pub trait ExtractionStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Extract candidates from a chunk.
    async fn extract(&self, chunk: &TextChunk) -> ChunkResult<Vec<Candidate>>;
}

#[async_trait]
impl<T: ExtractionStrategy + ?Sized> ExtractionStrategy for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn extract(&self, chunk: &TextChunk) -> ChunkResult<Vec<Candidate>> {
        (**self).extract(chunk).await
    }
}
