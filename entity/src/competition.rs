use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "competition")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// football-data.org competition ID
    #[sea_orm(unique)]
    pub competition_id: i64,
    pub name: String,
    pub code: String,
    pub competition_type: String,
    pub emblem: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_competition::Entity")]
    TeamCompetition,
}

impl Related<super::team_competition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamCompetition.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        super::team_competition::Relation::Team.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::team_competition::Relation::Competition.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
