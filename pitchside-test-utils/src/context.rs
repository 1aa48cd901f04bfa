//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::time::Duration;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    constant::{TEST_API_TOKEN, TEST_USER_AGENT},
    error::TestError,
};

/// Test environment with an in-memory database and a mock football-data.org server.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_sync_tables().build().await?;
///
/// test.football().insert_mock_team(57).await?;
/// let app_state: AppState = test.to_app_state();
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// football-data.org client pointed at the mock server
    pub client: football_data::Client,

    /// Mock HTTP server standing in for football-data.org
    pub(crate) server: ServerGuard,
    /// Mock endpoints checked by [`TestContext::assert_mocks`]
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert the database and client into any type that can be constructed from them
    ///
    /// Lets integration tests build the application state without this crate depending
    /// on the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, football_data::Client)>,
    {
        T::from((self.db.clone(), self.client.clone()))
    }

    /// URL of the mock football-data.org server
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let client = football_data::Client::builder()
            .api_url(server.url())
            .api_token(TEST_API_TOKEN)
            .user_agent(TEST_USER_AGENT)
            .timeout(Duration::from_secs(5))
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            client,
            server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
