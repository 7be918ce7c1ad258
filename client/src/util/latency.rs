//! Timer-backed simulated latency for the browser build.

use std::time::Duration;

use si7ati::latency::Latency;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLatency;

#[async_trait::async_trait(?Send)]
impl Latency for BrowserLatency {
    async fn wait(&self, duration: Duration) {
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = duration;
        }
    }
}
