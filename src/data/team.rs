use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::model::sync::TeamUpsert;

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a team or overwrites every scalar column of the existing row
    ///
    /// Association lists are not touched, see
    /// [`TeamAssociationRepository`](crate::data::association::TeamAssociationRepository).
    ///
    /// # Errors
    /// - `DbErr::Custom` if `name`, `short_name` or `tla` is missing, all are required columns
    pub async fn upsert(&self, team: &TeamUpsert) -> Result<entity::team::Model, DbErr> {
        let name = required_field(team.team_id, "name", &team.name)?;
        let short_name = required_field(team.team_id, "short_name", &team.short_name)?;
        let tla = required_field(team.team_id, "tla", &team.tla)?;

        let model = entity::team::ActiveModel {
            team_id: ActiveValue::Set(team.team_id),
            name: ActiveValue::Set(name),
            short_name: ActiveValue::Set(short_name),
            tla: ActiveValue::Set(tla),
            logo_url: ActiveValue::Set(team.logo_url.clone()),
            venue: ActiveValue::Set(team.venue.clone()),
            founded: ActiveValue::Set(team.founded),
            website: ActiveValue::Set(team.website.clone()),
            coach_name: ActiveValue::Set(team.coach_name.clone()),
            address: ActiveValue::Set(team.address.clone()),
            club_colors: ActiveValue::Set(team.club_colors.clone()),
            primary_color: ActiveValue::Set(team.primary_color.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::Team::insert(model)
            .on_conflict(
                OnConflict::column(entity::team::Column::TeamId)
                    .update_columns([
                        entity::team::Column::Name,
                        entity::team::Column::ShortName,
                        entity::team::Column::Tla,
                        entity::team::Column::LogoUrl,
                        entity::team::Column::Venue,
                        entity::team::Column::Founded,
                        entity::team::Column::Website,
                        entity::team::Column::CoachName,
                        entity::team::Column::Address,
                        entity::team::Column::ClubColors,
                        entity::team::Column::PrimaryColor,
                        entity::team::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_team_id(&self, team_id: i64) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::TeamId.eq(team_id))
            .one(self.db)
            .await
    }
}

fn required_field(team_id: i64, field: &str, value: &Option<String>) -> Result<String, DbErr> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(DbErr::Custom(format!(
            "team {} is missing required field {}",
            team_id, field
        ))),
    }
}
