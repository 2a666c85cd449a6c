use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Firebase-issued user identifier, the cross-store join key.
    #[sea_orm(unique)]
    pub uid: String,
    pub email: Option<String>,
    pub nickname: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::emotion_record::Entity")]
    EmotionRecord,
    #[sea_orm(has_many = "super::counseling_session::Entity")]
    CounselingSession,
    #[sea_orm(has_many = "super::schedule_appointment::Entity")]
    ScheduleAppointment,
    #[sea_orm(has_many = "super::quiz_result::Entity")]
    QuizResult,
    #[sea_orm(has_many = "super::subscription::Entity")]
    Subscription,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
}

impl Related<super::emotion_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmotionRecord.def()
    }
}

impl Related<super::counseling_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CounselingSession.def()
    }
}

impl Related<super::schedule_appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleAppointment.def()
    }
}

impl Related<super::quiz_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuizResult.def()
    }
}

impl Related<super::subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscription.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
