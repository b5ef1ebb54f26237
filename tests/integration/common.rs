use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use jamf_pro_api::{ClientConfig, RetryConfig};
use wiremock::{Request, Respond, ResponseTemplate};

/// Install a test subscriber once; `RUST_LOG=debug` shows the transport logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Retry settings with millisecond backoff.
pub fn fast_retry(max_attempts: u32) -> RetryConfig {
    RetryConfig::default()
        .with_max_attempts(max_attempts)
        .with_initial_delay(Duration::from_millis(5))
        .with_max_delay(Duration::from_millis(20))
}

pub fn fast_config(max_attempts: u32) -> ClientConfig {
    ClientConfig::builder()
        .with_retry(fast_retry(max_attempts))
        .build()
}

/// Responds with `status` and a body naming the attempt, e.g. `attempt 2`.
#[derive(Clone)]
pub struct NumberedAttempts {
    pub status: u16,
    pub count: Arc<AtomicU32>,
}

impl NumberedAttempts {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            count: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }
}

impl Respond for NumberedAttempts {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let attempt = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        ResponseTemplate::new(self.status).set_body_string(format!("attempt {}", attempt))
    }
}
