use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chat_message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub session_id: i32,
    /// "user" or "assistant".
    pub role: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::counseling_session::Entity",
        from = "Column::SessionId",
        to = "super::counseling_session::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CounselingSession,
}

impl Related<super::counseling_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CounselingSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
