use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, Encoder, HistogramVec,
    IntCounter, IntCounterVec, TextEncoder,
};

lazy_static! {
    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .unwrap();

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]
    )
    .unwrap();

    // Game Metrics
    pub static ref ANSWERS_SUBMITTED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "answers_submitted_total",
        "Total number of answers graded",
        &["game_id", "correct"]
    )
    .unwrap();

    // Stats store Metrics
    pub static ref OUTCOMES_RECORDED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "outcomes_recorded_total",
        "Total number of question outcomes recorded",
        &["game_id"]
    )
    .unwrap();

    pub static ref STATS_LOAD_FALLBACKS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "stats_load_fallbacks_total",
        "Stats loads that fell back to an empty mapping",
        &["reason"]
    )
    .unwrap();

    pub static ref STATS_WRITE_FAILURES_TOTAL: IntCounter = register_int_counter!(
        "stats_write_failures_total",
        "Stats writes rejected by the storage provider"
    )
    .unwrap();
}

/// Renders all metrics in Prometheus text format
pub fn render_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| prometheus::Error::Msg(format!("Failed to convert metrics to UTF-8: {}", e)))
}

pub fn record_answer_graded(game_id: &str, correct: bool) {
    let correct_label = if correct { "true" } else { "false" };
    ANSWERS_SUBMITTED_TOTAL
        .with_label_values(&[game_id, correct_label])
        .inc();
}

pub fn record_stats_fallback(reason: &str) {
    STATS_LOAD_FALLBACKS_TOTAL.with_label_values(&[reason]).inc();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        let _ = HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/health", "200"])
            .get();
        let _ = STATS_WRITE_FAILURES_TOTAL.get();
    }

    #[test]
    fn test_render_metrics() {
        record_answer_graded("definite-articles-1", true);

        let output = render_metrics().unwrap();
        assert!(output.contains("answers_submitted_total"));
    }
}
