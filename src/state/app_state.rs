use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::Mutex;

use usage_gen::{UsageReport, Result};

use crate::models::service_model::ServiceConfig;

/// Where each request's random walk draws from.
#[derive(Clone)]
pub enum RngSource {
    /// Fresh OS-seeded generator per request.
    Entropy,
    /// One seeded generator shared by all requests.
    Seeded(Arc<Mutex<StdRng>>),
}

impl RngSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RngSource::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed)))),
            None => RngSource::Entropy,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub rng: RngSource,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            rng: RngSource::from_seed(config.seed),
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }

    /// Validate the query and generate every requested series.
    pub async fn usage_report(&self, duration: &str, device: &str) -> Result<UsageReport> {
        match &self.rng {
            RngSource::Entropy => {
                let mut rng = StdRng::from_entropy();
                usage_gen::handle(duration, device, &mut rng)
            }
            RngSource::Seeded(shared) => {
                // Held only while this request generates
                let mut rng = shared.lock().await;
                usage_gen::handle(duration, device, &mut *rng)
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}
