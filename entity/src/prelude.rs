pub use super::admin_account::Entity as AdminAccount;
pub use super::admin_permission::Entity as AdminPermission;
pub use super::chat_message::Entity as ChatMessage;
pub use super::content_item::Entity as ContentItem;
pub use super::counseling_session::Entity as CounselingSession;
pub use super::emotion_record::Entity as EmotionRecord;
pub use super::payment::Entity as Payment;
pub use super::quiz::Entity as Quiz;
pub use super::quiz_result::Entity as QuizResult;
pub use super::schedule_appointment::Entity as ScheduleAppointment;
pub use super::subscription::Entity as Subscription;
pub use super::subscription_plan::Entity as SubscriptionPlan;
pub use super::user::Entity as User;
