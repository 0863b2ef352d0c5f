//! Backend API configuration constants and types.

/// Relative endpoint paths served by the analysis backend.
pub struct ApiEndpoints {
    /// Full historical Brent price series (parallel date/price arrays)
    pub prices: &'static str,
    /// Detected structural breaks with quantitative impact values
    pub change_points: &'static str,
    /// Curated geopolitical and economic event annotations
    pub events: &'static str,
}

/// Default values for the REST client
pub struct ClientDefaults {
    /// Request timeout for one-shot dashboard fetches (seconds)
    pub timeout_secs: u64,
    pub user_agent: &'static str,
}

/// The Master Configuration Struct
pub struct ApiConfig {
    /// Base URL used when no `--api-base` override is given
    pub default_base_url: &'static str,
    pub client: ClientDefaults,
    pub endpoints: ApiEndpoints,
}

pub const API: ApiConfig = ApiConfig {
    default_base_url: "http://127.0.0.1:5000",
    client: ClientDefaults {
        // One-shot startup fetches, so a single generous timeout and no retries
        timeout_secs: 30,
        user_agent: "brent-scope/0.1",
    },
    endpoints: ApiEndpoints {
        prices: "/api/brent-oil-data",
        change_points: "/api/change-points",
        events: "/api/events",
    },
};
