use axum::{
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{admin, auth, billing, content, counseling, emotion, quiz, schedule, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    auth::login,
    auth::logout,
    auth::me,
    user::upsert_user,
    user::get_user,
    user::update_user,
    emotion::create_record,
    emotion::list_month,
    emotion::get_record,
    emotion::update_record,
    emotion::delete_record,
    counseling::create_session,
    counseling::list_sessions,
    counseling::get_session,
    counseling::delete_session,
    counseling::send_message,
    schedule::create_appointment,
    schedule::list_appointments,
    schedule::update_appointment,
    schedule::delete_appointment,
    schedule::delete_appointment_group,
    quiz::list_quizzes,
    quiz::get_quiz,
    quiz::submit_quiz,
    quiz::list_quiz_results,
    content::list_contents,
    content::get_content,
    content::admin_list_contents,
    content::admin_create_content,
    content::admin_update_content,
    content::admin_delete_content,
    billing::list_plans,
    billing::get_subscription,
    billing::cancel_subscription,
    billing::upgrade_subscription,
    billing::confirm_payment,
    admin::list_accounts,
    admin::create_account,
    admin::delete_account,
    admin::set_permissions,
    admin::list_users,
))]
struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        // Users
        .route("/api/users", post(user::upsert_user))
        .route(
            "/api/users/{uid}",
            get(user::get_user).patch(user::update_user),
        )
        // Emotion journal
        .route(
            "/api/users/{uid}/emotions",
            post(emotion::create_record).get(emotion::list_month),
        )
        .route(
            "/api/users/{uid}/emotions/{date}",
            get(emotion::get_record)
                .patch(emotion::update_record)
                .delete(emotion::delete_record),
        )
        // Counseling chat
        .route(
            "/api/users/{uid}/sessions",
            post(counseling::create_session).get(counseling::list_sessions),
        )
        .route(
            "/api/users/{uid}/sessions/{session_id}",
            get(counseling::get_session).delete(counseling::delete_session),
        )
        .route(
            "/api/users/{uid}/sessions/{session_id}/messages",
            post(counseling::send_message),
        )
        // Schedule
        .route(
            "/api/users/{uid}/appointments",
            post(schedule::create_appointment).get(schedule::list_appointments),
        )
        .route(
            "/api/users/{uid}/appointments/{id}",
            patch(schedule::update_appointment).delete(schedule::delete_appointment),
        )
        .route(
            "/api/users/{uid}/appointments/groups/{group_id}",
            delete(schedule::delete_appointment_group),
        )
        // Quizzes
        .route("/api/quizzes", get(quiz::list_quizzes))
        .route("/api/quizzes/{slug}", get(quiz::get_quiz))
        .route(
            "/api/users/{uid}/quizzes/{slug}/submit",
            post(quiz::submit_quiz),
        )
        .route("/api/users/{uid}/quiz-results", get(quiz::list_quiz_results))
        // Content
        .route("/api/contents", get(content::list_contents))
        .route("/api/contents/{slug}", get(content::get_content))
        // Billing
        .route("/api/plans", get(billing::list_plans))
        .route(
            "/api/users/{uid}/subscription",
            get(billing::get_subscription).delete(billing::cancel_subscription),
        )
        .route(
            "/api/users/{uid}/subscription/upgrade",
            post(billing::upgrade_subscription),
        )
        .route("/api/payments/confirm", post(billing::confirm_payment))
        // Admin back office
        .route("/api/admin/auth/login", post(auth::login))
        .route("/api/admin/auth/logout", post(auth::logout))
        .route("/api/admin/auth/me", get(auth::me))
        .route(
            "/api/admin/accounts",
            get(admin::list_accounts).post(admin::create_account),
        )
        .route("/api/admin/accounts/{id}", delete(admin::delete_account))
        .route(
            "/api/admin/accounts/{id}/permissions",
            put(admin::set_permissions),
        )
        .route("/api/admin/users", get(admin::list_users))
        .route(
            "/api/admin/contents",
            get(content::admin_list_contents).post(content::admin_create_content),
        )
        .route(
            "/api/admin/contents/{slug}",
            patch(content::admin_update_content).delete(content::admin_delete_content),
        )
        // API documentation
        .route("/api/docs/openapi.json", get(openapi_json))
}
