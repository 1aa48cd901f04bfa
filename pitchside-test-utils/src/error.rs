use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    FootballDataError(#[from] football_data::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
