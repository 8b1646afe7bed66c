//! Provider Selector / Fallback Controller.
//!
//! Demo mode: always the deterministic path.
//! Real mode: try the remote analyzer once; on any failure (error, timeout,
//! panic, non-conforming payload) log a warning and return the Demo result.
//!
//! Callers get a schema-valid result either way and cannot tell the two
//! apart from the data. `Provenance` exists for logs and tests only.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::models::analysis::AnalysisResult;
use crate::models::profile::Profile;
use crate::recommendation::demo::analyze_demo;
use crate::recommendation::provider::{Mode, Provider, RemoteAnalyzer};
use crate::recommendation::remote::RemoteAnalysisError;
use crate::validation::result::validate_result;
use crate::validation::ValidationError;

/// Raised only when the deterministic path itself produces an invalid result.
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("demo recommendation failed its own output contract: {0}")]
    InvalidDemoResult(#[from] ValidationError),
}

/// How a result was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    Demo,
    Remote,
    Fallback {
        reason: String,
        error_type: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct Recommendation {
    pub result: AnalysisResult,
    pub provenance: Provenance,
}

#[derive(Debug, Clone)]
pub struct FallbackController {
    provider: Provider,
    remote_timeout: Duration,
}

impl FallbackController {
    pub fn new(provider: Provider, remote_timeout: Duration) -> Self {
        Self {
            provider,
            remote_timeout,
        }
    }

    /// Configured mode. Never touches the remote service.
    pub fn mode(&self) -> Mode {
        self.provider.mode()
    }

    pub async fn recommend(&self, profile: &Profile) -> Result<Recommendation, RecommendationError> {
        let remote = match &self.provider {
            Provider::Demo => {
                return Ok(Recommendation {
                    result: analyze_demo(profile)?,
                    provenance: Provenance::Demo,
                });
            }
            Provider::Real(remote) => Arc::clone(remote),
        };

        match self.call_remote(remote, profile).await {
            Ok(result) => {
                info!("Remote analysis succeeded");
                Ok(Recommendation {
                    result,
                    provenance: Provenance::Remote,
                })
            }
            Err(err) => {
                let reason = err.to_string();
                let error_type = err.kind();
                warn!(
                    error = %reason,
                    error_type,
                    "Remote analysis failed, falling back to demo mode"
                );
                Ok(Recommendation {
                    result: analyze_demo(profile)?,
                    provenance: Provenance::Fallback { reason, error_type },
                })
            }
        }
    }

    /// Runs the remote call on its own task so a panic is contained, bounded
    /// by `remote_timeout`, and re-validates whatever comes back. The task is
    /// aborted if this future is dropped first (client went away).
    async fn call_remote(
        &self,
        remote: Arc<dyn RemoteAnalyzer>,
        profile: &Profile,
    ) -> Result<AnalysisResult, RemoteAnalysisError> {
        let owned = profile.clone();
        let timeout = self.remote_timeout;

        let mut task = AbortOnDrop(tokio::spawn(async move {
            tokio::time::timeout(timeout, remote.analyze(&owned)).await
        }));

        let result = match (&mut task.0).await {
            Ok(Ok(outcome)) => outcome?,
            Ok(Err(_elapsed)) => return Err(RemoteAnalysisError::Timeout(timeout)),
            Err(_join_error) => return Err(RemoteAnalysisError::Unknown),
        };

        validate_result(&result)?;
        Ok(result)
    }
}

struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::models::analysis::PathwayType;
    use crate::models::profile::fixtures::army_infantry;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    enum Behaviour {
        Succeed,
        Fail,
        Hang,
        Panic,
        ShortPayload,
    }

    struct StubAnalyzer {
        behaviour: Behaviour,
        calls: AtomicUsize,
        /// Set when an in-flight `analyze` future is dropped before finishing.
        cancelled: AtomicBool,
    }

    impl StubAnalyzer {
        fn new(behaviour: Behaviour) -> Arc<Self> {
            Arc::new(Self {
                behaviour,
                calls: AtomicUsize::new(0),
                cancelled: AtomicBool::new(false),
            })
        }
    }

    struct CancelFlag<'a> {
        flag: &'a AtomicBool,
        armed: bool,
    }

    impl Drop for CancelFlag<'_> {
        fn drop(&mut self) {
            if self.armed {
                self.flag.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Collects everything the fmt subscriber writes.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// A valid result whose text is clearly not from the demo catalogue.
    fn remote_result() -> AnalysisResult {
        let mut result = analyze_demo(&army_infantry()).unwrap();
        result.summary = "Remote summary".to_string();
        for pathway in &mut result.pathways {
            pathway.title = format!("Remote {}", pathway.pathway_type);
        }
        result
    }

    #[async_trait]
    impl RemoteAnalyzer for StubAnalyzer {
        async fn analyze(&self, _profile: &Profile) -> Result<AnalysisResult, RemoteAnalysisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut in_flight = CancelFlag {
                flag: &self.cancelled,
                armed: true,
            };
            let outcome = match self.behaviour {
                Behaviour::Succeed => Ok(remote_result()),
                Behaviour::Fail => Err(RemoteAnalysisError::Llm(LlmError::Api {
                    status: 401,
                    message: "invalid x-api-key".to_string(),
                })),
                Behaviour::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(remote_result())
                }
                Behaviour::Panic => panic!("remote blew up"),
                Behaviour::ShortPayload => {
                    let mut result = remote_result();
                    result.pathways.pop();
                    Ok(result)
                }
            };
            in_flight.armed = false;
            outcome
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    fn controller(stub: Arc<StubAnalyzer>) -> FallbackController {
        FallbackController::new(Provider::Real(stub), Duration::from_secs(30))
    }

    fn assert_shape(result: &AnalysisResult) {
        assert_eq!(result.pathways.len(), 3);
        for kind in PathwayType::ALL {
            assert!(result.pathway(kind).is_some(), "missing {kind}");
        }
    }

    #[tokio::test]
    async fn test_demo_mode_never_calls_remote() {
        let controller = FallbackController::new(Provider::Demo, Duration::from_secs(30));
        assert_eq!(controller.mode(), Mode::Demo);

        let rec = controller.recommend(&army_infantry()).await.unwrap();
        assert_eq!(rec.provenance, Provenance::Demo);
        assert_eq!(rec.result, analyze_demo(&army_infantry()).unwrap());
    }

    #[tokio::test]
    async fn test_remote_success_is_returned_unchanged() {
        let stub = StubAnalyzer::new(Behaviour::Succeed);
        let controller = controller(stub.clone());
        assert_eq!(controller.mode(), Mode::Real);

        let rec = controller.recommend(&army_infantry()).await.unwrap();
        assert_eq!(rec.provenance, Provenance::Remote);
        assert_eq!(rec.result.summary, "Remote summary");
        assert_eq!(
            rec.result.pathway(PathwayType::MaxUpside).unwrap().title,
            "Remote max-upside"
        );
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_remote_error_falls_back_to_demo() {
        let stub = StubAnalyzer::new(Behaviour::Fail);
        let rec = controller(stub.clone())
            .recommend(&army_infantry())
            .await
            .unwrap();

        assert_shape(&rec.result);
        assert_eq!(rec.result, analyze_demo(&army_infantry()).unwrap());
        match rec.provenance {
            Provenance::Fallback { reason, error_type } => {
                assert_eq!(error_type, "Auth");
                assert!(reason.contains("invalid x-api-key"));
            }
            other => panic!("expected fallback, got {other:?}"),
        }
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1, "no retries at this layer");
    }

    #[tokio::test]
    async fn test_fallback_logs_warning_with_reason_and_type() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let stub = StubAnalyzer::new(Behaviour::Fail);
        controller(stub).recommend(&army_infantry()).await.unwrap();

        let output = logs.contents();
        assert!(output.contains("WARN"), "no warning in {output:?}");
        assert!(output.contains("Remote analysis failed, falling back to demo mode"));
        assert!(output.contains(
            "error=remote analysis call failed: API error (status 401): invalid x-api-key"
        ));
        assert!(output.contains("error_type=\"Auth\""));
    }

    #[tokio::test]
    async fn test_successful_remote_logs_no_warning() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let stub = StubAnalyzer::new(Behaviour::Succeed);
        controller(stub).recommend(&army_infantry()).await.unwrap();

        assert!(logs.contents().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_request_aborts_remote_call() {
        let stub = StubAnalyzer::new(Behaviour::Hang);
        let controller = controller(stub.clone());

        // The caller gives up long before the controller's own timeout.
        let abandoned =
            tokio::time::timeout(Duration::from_secs(1), controller.recommend(&army_infantry()))
                .await;
        assert!(abandoned.is_err());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);

        for _ in 0..10 {
            if stub.cancelled.load(Ordering::SeqCst) {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(stub.cancelled.load(Ordering::SeqCst), "remote task kept running");
    }

    #[tokio::test(start_paused = true)]
    async fn test_remote_timeout_falls_back_to_demo() {
        let stub = StubAnalyzer::new(Behaviour::Hang);
        let rec = controller(stub).recommend(&army_infantry()).await.unwrap();

        assert_shape(&rec.result);
        match rec.provenance {
            Provenance::Fallback { error_type, .. } => assert_eq!(error_type, "Timeout"),
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remote_panic_falls_back_with_unknown_reason() {
        let stub = StubAnalyzer::new(Behaviour::Panic);
        let rec = controller(stub).recommend(&army_infantry()).await.unwrap();

        assert_shape(&rec.result);
        assert_eq!(
            rec.provenance,
            Provenance::Fallback {
                reason: "Unknown error".to_string(),
                error_type: "Unknown",
            }
        );
    }

    #[tokio::test]
    async fn test_non_conforming_remote_result_falls_back() {
        let stub = StubAnalyzer::new(Behaviour::ShortPayload);
        let rec = controller(stub).recommend(&army_infantry()).await.unwrap();

        assert_shape(&rec.result);
        match rec.provenance {
            Provenance::Fallback { error_type, .. } => assert_eq!(error_type, "Schema"),
            other => panic!("expected fallback, got {other:?}"),
        }
    }
}
