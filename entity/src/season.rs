use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "season")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// football-data.org season ID
    #[sea_orm(unique)]
    pub season_id: i64,
    pub start_date: Date,
    pub end_date: Date,
    pub current_matchday: Option<i32>,
    pub winner: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_season::Entity")]
    TeamSeason,
}

impl Related<super::team_season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamSeason.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        super::team_season::Relation::Team.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::team_season::Relation::Season.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
