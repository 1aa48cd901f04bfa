use crate::{client::Client, error::Error, model::competition::CompetitionTeams};

/// Endpoints under `/competitions`
pub struct CompetitionEndpoints<'a> {
    client: &'a Client,
}

impl<'a> CompetitionEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the competition, season and teams for a competition season.
    ///
    /// # Arguments
    /// - `competition_code` - League code such as `PL` or `CL`
    /// - `season` - Starting year of the season, e.g. `2025` for 2025/26
    ///
    /// # Returns
    /// - `Ok(CompetitionTeams)` - Parsed payload, `teams` may be empty
    /// - `Err(Error::Status)` - API answered with a non-success status
    /// - `Err(Error::Timeout)` / `Err(Error::ReqwestError)` - Transport failure
    /// - `Err(Error::MalformedPayload)` - Body missing `competition`, `season` or `teams`
    pub async fn get_teams(
        &self,
        competition_code: &str,
        season: i32,
    ) -> Result<CompetitionTeams, Error> {
        let url = format!(
            "{}/competitions/{}/teams",
            self.client.api_url, competition_code
        );

        let body = self
            .client
            .get_text(&url, &[("season", season.to_string())])
            .await?;

        serde_json::from_str(&body).map_err(|err| Error::MalformedPayload {
            url,
            message: err.to_string(),
        })
    }
}
