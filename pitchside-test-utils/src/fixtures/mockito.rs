//! football-data.org mock endpoint creation utilities.
//!
//! Endpoints only match requests carrying the test API token, so a client that forgets
//! the `X-Auth-Token` header gets mockito's 501 instead of the payload.

use football_data::{client::AUTH_HEADER, model::competition::CompetitionTeams};
use mockito::{Matcher, Mock};

use crate::{constant::TEST_API_TOKEN, fixtures::FootballFixtures};

impl<'a> FootballFixtures<'a> {
    /// Create a mock HTTP endpoint for a competition season's teams.
    ///
    /// Sets up `GET /competitions/{code}/teams?season={season}` returning the payload as
    /// JSON. The mock verifies it was called exactly `expected_requests` times.
    pub fn create_teams_endpoint(
        &mut self,
        competition_code: &str,
        season: i32,
        payload: &CompetitionTeams,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::to_string(payload).unwrap();

        self.create_teams_endpoint_with_body(competition_code, season, 200, &body, expected_requests)
    }

    /// Create a mock teams endpoint returning an arbitrary status and body.
    ///
    /// Used for error responses and payloads that do not deserialize.
    pub fn create_teams_endpoint_with_body(
        &mut self,
        competition_code: &str,
        season: i32,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/competitions/{}/teams", competition_code);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_header(AUTH_HEADER, TEST_API_TOKEN)
            .match_query(Matcher::UrlEncoded("season".into(), season.to_string()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
