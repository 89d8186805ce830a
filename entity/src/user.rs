use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_id: String,
    #[sea_orm(default_value = 0)]
    pub violation_count: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seen_link::Entity")]
    SeenLink,
}

impl Related<super::seen_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeenLink.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
