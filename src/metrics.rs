use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Histogram, register_counter, register_counter_vec, register_histogram,
};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter = register_counter!(
        "gateway_generate_requests_total",
        "Total number of /generate requests"
    )
    .unwrap();
    pub static ref RATE_LIMITED: Counter = register_counter!(
        "gateway_rate_limited_total",
        "Requests rejected by the local limiter"
    )
    .unwrap();
    pub static ref GENERATION_FAILURES: CounterVec = register_counter_vec!(
        "gateway_generation_failures_total",
        "Failed generations by outcome",
        &["outcome"]
    )
    .unwrap();
    pub static ref GIF_FALLBACKS: Counter = register_counter!(
        "gateway_gif_fallbacks_total",
        "Giphy failures that fell back to Tenor"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "gateway_generate_latency_seconds",
        "Generation latency in seconds"
    )
    .unwrap();
}
