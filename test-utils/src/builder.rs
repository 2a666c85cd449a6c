use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, EmotionRecord};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(EmotionRecord)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed during database setup, in insertion
    /// order. Add tables in dependency order: referenced tables first.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for mood journal tests: User, EmotionRecord.
    pub fn with_journal_tables(self) -> Self {
        self.with_table(User).with_table(EmotionRecord)
    }

    /// Adds the tables required for counseling tests: User,
    /// CounselingSession, ChatMessage.
    pub fn with_counseling_tables(self) -> Self {
        self.with_table(User)
            .with_table(CounselingSession)
            .with_table(ChatMessage)
    }

    /// Adds the tables required for schedule tests: User,
    /// ScheduleAppointment.
    pub fn with_schedule_tables(self) -> Self {
        self.with_table(User).with_table(ScheduleAppointment)
    }

    /// Adds the tables required for quiz tests: User, Quiz, QuizResult.
    pub fn with_quiz_tables(self) -> Self {
        self.with_table(User).with_table(Quiz).with_table(QuizResult)
    }

    /// Adds the ContentItem table.
    pub fn with_content_tables(self) -> Self {
        self.with_table(ContentItem)
    }

    /// Adds the tables required for billing tests: User, SubscriptionPlan,
    /// Subscription, Payment.
    pub fn with_billing_tables(self) -> Self {
        self.with_table(User)
            .with_table(SubscriptionPlan)
            .with_table(Subscription)
            .with_table(Payment)
    }

    /// Adds the tables required for admin tests: AdminAccount,
    /// AdminPermission.
    pub fn with_admin_tables(self) -> Self {
        self.with_table(AdminAccount).with_table(AdminPermission)
    }

    /// Builds the configured test context.
    ///
    /// Connects to a fresh in-memory SQLite database and creates every
    /// configured table in insertion order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready test environment
    /// - `Err(TestError::Database)` - Connection or schema setup failure
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
