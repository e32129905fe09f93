use crate::cli::ServeArgs;
use crate::infra::{
    AppState, CannedVisualAnalyzer, HeuristicGrammarChecker, InMemoryAnalysisRepository,
    PlainTextTranscriber, SidecarMediaExtractor,
};
use crate::routes::with_analysis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use podium::analysis::AnalysisService;
use podium::config::AppConfig;
use podium::error::AppError;
use podium::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // Offline collaborator set: media extraction and transcription read
    // prepared sidecar artifacts. Deployments swap in their real backends
    // through the same trait seams; no visual analyzer ships with the
    // service, so serve-mode jobs produce text-only reports.
    let repository = Arc::new(InMemoryAnalysisRepository::default());
    let service = Arc::new(AnalysisService::new(
        Arc::new(SidecarMediaExtractor),
        Arc::new(PlainTextTranscriber),
        Arc::new(HeuristicGrammarChecker),
        None::<Arc<CannedVisualAnalyzer>>,
        repository,
    ));

    let app = with_analysis_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "presentation coaching service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
