//! Best-effort Firestore dual-write.
//!
//! Every consumer-data mutation is followed by a sequential write of an
//! equivalent document to Firestore, keyed by the user's UID. The writes are
//! deliberately best-effort: a mirror failure is logged at warn level and the
//! request still succeeds. There is no atomicity across the two stores, no
//! compensation, and no reconciliation — a partial failure leaves them
//! inconsistent until the next successful write of the same document.
//!
//! The mirror is disabled entirely when Firestore configuration is absent.

pub mod firestore;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;

use crate::server::{config::Config, service::mirror::firestore::FirestoreClient};

#[derive(Clone)]
pub struct MirrorService {
    client: Option<FirestoreClient>,
}

impl MirrorService {
    /// Builds the mirror from configuration. Returns a disabled no-op service
    /// when the project id or API token is missing.
    pub fn from_config(http_client: reqwest::Client, config: &Config) -> Self {
        let client = match (&config.firestore_project_id, &config.firestore_api_token) {
            (Some(project_id), Some(token)) => Some(FirestoreClient::new(
                http_client,
                project_id.clone(),
                token.clone(),
            )),
            _ => {
                tracing::info!("Firestore mirror disabled: no project configured");
                None
            }
        };

        Self { client }
    }

    pub async fn mirror_user(&self, user: &entity::user::Model) {
        let Some(client) = &self.client else { return };

        let fields = json!({
            "uid": user.uid,
            "email": user.email,
            "nickname": user.nickname,
            "createdAt": user.created_at.to_rfc3339(),
        });

        if let Err(e) = client
            .upsert_document(&format!("users/{}", user.uid), &fields)
            .await
        {
            tracing::warn!("Mirror write failed for user {}: {}", user.uid, e);
        }
    }

    pub async fn mirror_emotion(&self, uid: &str, record: &entity::emotion_record::Model) {
        let Some(client) = &self.client else { return };

        let fields = json!({
            "recordDate": record.record_date.to_string(),
            "mood": record.mood,
            "intensity": record.intensity,
            "note": record.note,
            "updatedAt": record.updated_at.to_rfc3339(),
        });

        let path = format!("users/{}/emotions/{}", uid, record.record_date);
        if let Err(e) = client.upsert_document(&path, &fields).await {
            tracing::warn!("Mirror write failed for {}: {}", path, e);
        }
    }

    pub async fn mirror_emotion_deleted(&self, uid: &str, record_date: NaiveDate) {
        let Some(client) = &self.client else { return };

        let path = format!("users/{}/emotions/{}", uid, record_date);
        if let Err(e) = client.delete_document(&path).await {
            tracing::warn!("Mirror delete failed for {}: {}", path, e);
        }
    }

    pub async fn mirror_appointment(
        &self,
        uid: &str,
        appointment: &entity::schedule_appointment::Model,
    ) {
        let Some(client) = &self.client else { return };

        let fields = json!({
            "title": appointment.title,
            "memo": appointment.memo,
            "scheduledAt": appointment.scheduled_at.to_rfc3339(),
            "recurrenceGroupId": appointment.recurrence_group_id,
        });

        let path = format!("users/{}/appointments/{}", uid, appointment.id);
        if let Err(e) = client.upsert_document(&path, &fields).await {
            tracing::warn!("Mirror write failed for {}: {}", path, e);
        }
    }

    pub async fn mirror_appointment_deleted(&self, uid: &str, appointment_id: i32) {
        let Some(client) = &self.client else { return };

        let path = format!("users/{}/appointments/{}", uid, appointment_id);
        if let Err(e) = client.delete_document(&path).await {
            tracing::warn!("Mirror delete failed for {}: {}", path, e);
        }
    }

    pub async fn mirror_session(&self, uid: &str, session: &entity::counseling_session::Model) {
        let Some(client) = &self.client else { return };

        let fields = json!({
            "persona": session.persona,
            "title": session.title,
            "startedAt": session.started_at.to_rfc3339(),
        });

        let path = format!("users/{}/sessions/{}", uid, session.id);
        if let Err(e) = client.upsert_document(&path, &fields).await {
            tracing::warn!("Mirror write failed for {}: {}", path, e);
        }
    }

    pub async fn mirror_session_deleted(&self, uid: &str, session_id: i32) {
        let Some(client) = &self.client else { return };

        let path = format!("users/{}/sessions/{}", uid, session_id);
        if let Err(e) = client.delete_document(&path).await {
            tracing::warn!("Mirror delete failed for {}: {}", path, e);
        }
    }

    pub async fn mirror_subscription(
        &self,
        uid: &str,
        status: &str,
        expires_at: Option<DateTime<Utc>>,
    ) {
        let Some(client) = &self.client else { return };

        let fields = json!({
            "status": status,
            "expiresAt": expires_at.map(|at| at.to_rfc3339()),
        });

        let path = format!("users/{}/subscription/current", uid);
        if let Err(e) = client.upsert_document(&path, &fields).await {
            tracing::warn!("Mirror write failed for {}: {}", path, e);
        }
    }
}
