use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admin_permission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub admin_id: i32,
    /// Grant key: "manage_users", "manage_content", "manage_billing",
    /// "manage_admins".
    pub permission: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::admin_account::Entity",
        from = "Column::AdminId",
        to = "super::admin_account::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AdminAccount,
}

impl Related<super::admin_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdminAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
