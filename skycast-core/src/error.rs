use thiserror::Error;

/// Failures surfaced by fetching and normalizing a forecast.
///
/// None of these are fatal for a dashboard: each maps to a message the
/// user sees before being asked for another city.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The query was empty after trimming; no request is sent.
    #[error("City name must not be empty")]
    EmptyQuery,

    /// The data source answered with a non-success status (unknown or misspelled city).
    #[error("No forecast found for '{query}' (HTTP {status})")]
    NotFound { query: String, status: u16 },

    /// Network fault, timeout or unreadable body.
    #[error("Weather service unavailable: {0}")]
    Transient(String),

    /// The response body is missing required sections or contains invalid values.
    #[error("Malformed forecast response: {0}")]
    Malformed(String),
}

impl WeatherError {
    /// Text shown to the user by the dashboards.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::EmptyQuery => "Please enter a city name.".to_string(),
            WeatherError::NotFound { .. } => {
                "City not found. Please check the spelling and try again.".to_string()
            }
            // Malformed responses are reported the same way as transport faults.
            WeatherError::Transient(msg) | WeatherError::Malformed(msg) => {
                format!("Failed to fetch weather data: {msg}")
            }
        }
    }

    /// Whether resubmitting the same city could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WeatherError::Transient(_) | WeatherError::Malformed(_))
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key in its query string.
        let err = err.without_url();
        let mut msg = err.to_string();
        if let Some(cause) = std::error::Error::source(&err) {
            msg.push_str(&format!(": {cause}"));
        }

        if err.is_timeout() {
            WeatherError::Transient(format!("request timed out: {msg}"))
        } else {
            WeatherError::Transient(msg)
        }
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_mentions_spelling() {
        let err = WeatherError::NotFound { query: "Lndon".into(), status: 400 };
        assert!(err.user_message().contains("check the spelling"));
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("Lndon"));
    }

    #[test]
    fn malformed_is_reported_like_transient() {
        let malformed = WeatherError::Malformed("missing field `forecast`".into());
        let transient = WeatherError::Transient("connection refused".into());

        assert!(malformed.user_message().starts_with("Failed to fetch weather data"));
        assert!(transient.user_message().starts_with("Failed to fetch weather data"));
        assert!(malformed.is_retryable());
        assert!(transient.is_retryable());
    }

    #[test]
    fn json_errors_become_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(WeatherError::from(err), WeatherError::Malformed(_)));
    }
}
