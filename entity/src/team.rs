use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// football-data.org team ID
    #[sea_orm(unique)]
    pub team_id: i64,
    pub name: String,
    pub short_name: String,
    pub tla: String,
    pub logo_url: Option<String>,
    pub venue: Option<String>,
    pub founded: Option<i32>,
    pub website: Option<String>,
    pub coach_name: Option<String>,
    pub address: Option<String>,
    /// Club colors as reported by the API, e.g. "Red / White"
    pub club_colors: Option<String>,
    /// Hex color derived from `club_colors`
    pub primary_color: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_competition::Entity")]
    TeamCompetition,
    #[sea_orm(has_many = "super::team_season::Entity")]
    TeamSeason,
}

impl Related<super::team_competition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamCompetition.def()
    }
}

impl Related<super::team_season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamSeason.def()
    }
}

impl Related<super::competition::Entity> for Entity {
    fn to() -> RelationDef {
        super::team_competition::Relation::Competition.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::team_competition::Relation::Team.def().rev())
    }
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        super::team_season::Relation::Season.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::team_season::Relation::Team.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
