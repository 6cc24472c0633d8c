pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, json_format: bool) -> Self {
        Self {
            environment: environment.into(),
            json_format,
        }
    }

    /// `LOG_FORMAT=json` switches JSON output on; it never switches it off.
    pub fn with_log_format(mut self, log_format: Option<&str>) -> Self {
        self.json_format |= log_format.is_some_and(|f| f.eq_ignore_ascii_case("json"));
        self
    }

    pub fn with_log_format_from_env(self) -> Self {
        let log_format = std::env::var(LOG_FORMAT_VAR).ok();
        self.with_log_format(log_format.as_deref())
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        let environment =
            std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        Self::new(environment, false).with_log_format_from_env()
    }
}
