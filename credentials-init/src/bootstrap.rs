//! Bootstrap retry loop.
//!
//! Polls the credential-initialization endpoint until it answers or the
//! attempt budget runs out. Request failures never escape this module; they
//! are logged and retried.

use common::config::RetryPolicy;
use common::models::{AttemptOutcome, AttemptRecord, BootstrapReport};
use tracing::{error, info, warn};

use crate::client::CredentialsEndpoint;

/// Runs the bootstrap loop against `endpoint`.
///
/// Any response, including an HTTP error status, ends the loop. Failed
/// attempts are followed by `policy.retry_delay`, except the last one.
pub async fn run<E>(endpoint: &E, policy: &RetryPolicy) -> BootstrapReport
where
    E: CredentialsEndpoint + ?Sized,
{
    let mut report = BootstrapReport::default();

    for attempt in 1..=policy.max_attempts {
        info!(attempt, url = %endpoint.target(), "Attempt {}: contacting web app...", attempt);

        match endpoint.create_default_credentials().await {
            Ok(response) => {
                info!(attempt, "Status: {}", response.status);
                info!(attempt, "Response: {}", response.body);
                report.attempts.push(AttemptRecord {
                    attempt,
                    outcome: AttemptOutcome::Responded(response),
                    delayed: false,
                });
                return report;
            }
            Err(e) => {
                let delayed = attempt < policy.max_attempts;
                if delayed {
                    warn!(
                        attempt,
                        code = e.code(),
                        error = %e,
                        delay_ms = policy.retry_delay.as_millis() as u64,
                        "Web app not ready yet, waiting... {}",
                        e
                    );
                } else {
                    warn!(attempt, code = e.code(), error = %e, "Web app not ready yet: {}", e);
                }

                report.attempts.push(AttemptRecord {
                    attempt,
                    outcome: AttemptOutcome::Failed {
                        error: e.to_string(),
                    },
                    delayed,
                });

                if delayed {
                    tokio::time::sleep(policy.retry_delay).await;
                }
            }
        }
    }

    error!(
        attempts = report.attempt_count(),
        "Web app did not become available in time."
    );
    report
}
