//! FIFO recommendation service

use chrono::{DateTime, Utc};

use shared::fifo::recommend;
use shared::models::FifoRecommendation;
use shared::types::Language;

use crate::error::AppResult;
use crate::external::InventoryApiClient;

/// Which backend list to enrich
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FifoListing {
    /// Batches eligible for FIFO consumption
    Eligible,
    /// All batches in backend priority order
    ByPriority,
}

#[derive(Clone)]
pub struct FifoService {
    api: InventoryApiClient,
}

impl FifoService {
    pub fn new(api: InventoryApiClient) -> Self {
        Self { api }
    }

    /// Fetch FIFO batches and attach progress and urgency badges.
    /// Backend order is preserved.
    pub async fn recommendations(
        &self,
        token: &str,
        listing: FifoListing,
        language: Language,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<FifoRecommendation>> {
        let batches = match listing {
            FifoListing::Eligible => self.api.fifo_batches(token).await?,
            FifoListing::ByPriority => self.api.batches_by_priority(token).await?,
        };

        let recommendations: Vec<FifoRecommendation> = batches
            .into_iter()
            .map(|batch| recommend(batch, now, language))
            .collect();

        let unparsed = recommendations.iter().filter(|r| r.progress.is_none()).count();
        if unparsed > 0 {
            tracing::warn!("{} FIFO batches have unparseable entry/expiry dates", unparsed);
        }

        Ok(recommendations)
    }
}
