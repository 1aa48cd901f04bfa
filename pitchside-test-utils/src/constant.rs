//! Test configuration constants for football-data client setup.

/// User agent sent by the test client.
pub static TEST_USER_AGENT: &str =
    "pitchside-tests/1.0 (+https://github.com/pitchside-predictor/pitchside)";

/// Placeholder API token, mock endpoints expect it in the `X-Auth-Token` header.
pub static TEST_API_TOKEN: &str = "test_api_token";

/// Competition code used by fixtures unless a test overrides it.
pub static TEST_COMPETITION_CODE: &str = "PL";

/// Season year used by fixtures unless a test overrides it.
pub static TEST_SEASON_YEAR: i32 = 2025;
