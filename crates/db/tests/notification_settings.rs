//! Integration tests for notification settings persistence.

use morada_core::roles::ACCOUNT_ENTERPRISE;
use morada_db::models::notification::NotificationSettings;
use morada_db::models::user::CreateUser;
use morada_db::repositories::{NotificationSettingsRepo, UserRepo};
use sqlx::PgPool;

async fn seed_user(pool: &PgPool) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            username: "acme".to_string(),
            email: "acme@example.com".to_string(),
            password_hash: "$argon2id$test".to_string(),
            account_type: ACCOUNT_ENTERPRISE.to_string(),
            parent_enterprise_id: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_returns_none_before_first_save(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let stored = NotificationSettingsRepo::get(&pool, user_id).await.unwrap();
    assert!(stored.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn defaults_enable_all_domains_on_seven_days(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let defaults = NotificationSettings::defaults(user_id);

    assert!(defaults.payments_enabled && defaults.events_enabled && defaults.tasks_enabled);
    assert!(defaults.payment_days_7 && defaults.event_days_7 && defaults.task_days_7);
    assert!(!defaults.payment_days_14 && !defaults.event_days_14 && !defaults.task_days_14);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_replaces_settings_wholesale(pool: PgPool) {
    let user_id = seed_user(&pool).await;

    let mut settings = NotificationSettings::defaults(user_id);
    settings.payments_enabled = false;
    settings.task_days_14 = true;
    NotificationSettingsRepo::upsert(&pool, &settings).await.unwrap();

    // A second save with the defaults must overwrite both tweaks.
    let defaults = NotificationSettings::defaults(user_id);
    let stored = NotificationSettingsRepo::upsert(&pool, &defaults).await.unwrap();

    assert!(stored.payments_enabled);
    assert!(!stored.task_days_14);

    // Still a single row per user.
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM notification_settings WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 1);
}
