//! Integration tests for the deduplicating notifier.

mod common;

use morada_core::due::DueReminder;
use morada_core::kinds::{KIND_EVENT, KIND_PAYMENT};
use morada_reminders::notifier::notify_if_new;
use sqlx::PgPool;

fn reminder(id: i64, title: &str, days_left: i64) -> DueReminder {
    DueReminder {
        id,
        title: title.to_string(),
        days_left,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_immediate_call_is_suppressed(pool: PgPool) {
    let user = common::seed_enterprise(&pool, "acme").await;
    let r = reminder(42, "Condomínio Janeiro", 5);

    let first = notify_if_new(&pool, user.id, KIND_PAYMENT, &r).await.unwrap();
    let second = notify_if_new(&pool, user.id, KIND_PAYMENT, &r).await.unwrap();

    assert!(first, "first call must create a notification");
    assert!(!second, "second call within 24h must be suppressed");
    assert_eq!(common::notification_count(&pool, user.id).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reminder_is_created_again_after_lookback_elapses(pool: PgPool) {
    let user = common::seed_enterprise(&pool, "acme").await;
    let r = reminder(42, "Condomínio Janeiro", 5);

    assert!(notify_if_new(&pool, user.id, KIND_PAYMENT, &r).await.unwrap());

    // Simulate the 24-hour lookback window elapsing.
    sqlx::query("UPDATE notifications SET created_at = NOW() - INTERVAL '25 hours'")
        .execute(&pool)
        .await
        .unwrap();

    assert!(notify_if_new(&pool, user.id, KIND_PAYMENT, &r).await.unwrap());
    assert_eq!(common::notification_count(&pool, user.id).await, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn different_kinds_do_not_suppress_each_other(pool: PgPool) {
    let user = common::seed_enterprise(&pool, "acme").await;
    // Same reference id in two different domains (payment 42 vs event 42).
    let r = reminder(42, "Assembleia", 3);

    assert!(notify_if_new(&pool, user.id, KIND_PAYMENT, &r).await.unwrap());
    assert!(notify_if_new(&pool, user.id, KIND_EVENT, &r).await.unwrap());
    assert_eq!(common::notification_count(&pool, user.id).await, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn different_users_are_notified_independently(pool: PgPool) {
    let enterprise = common::seed_enterprise(&pool, "acme").await;
    let member = common::seed_member(&pool, "alice", Some(enterprise.id)).await;
    let r = reminder(42, "Condomínio Janeiro", 5);

    assert!(notify_if_new(&pool, enterprise.id, KIND_PAYMENT, &r).await.unwrap());
    assert!(notify_if_new(&pool, member.id, KIND_PAYMENT, &r).await.unwrap());

    assert_eq!(common::notification_count(&pool, enterprise.id).await, 1);
    assert_eq!(common::notification_count(&pool, member.id).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn message_embeds_days_left(pool: PgPool) {
    let user = common::seed_enterprise(&pool, "acme").await;
    let r = reminder(7, "Condomínio Janeiro", 5);

    notify_if_new(&pool, user.id, KIND_PAYMENT, &r).await.unwrap();

    let message: String =
        sqlx::query_scalar("SELECT message FROM notifications WHERE user_id = $1")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(message.contains("5 dia(s)"), "got: {message}");
    assert!(message.contains("Condomínio Janeiro"));
}
