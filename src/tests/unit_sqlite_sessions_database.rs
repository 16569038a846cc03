use crate::database::SessionRepository;
use crate::database::sqlite::SqliteRepository;
use crate::domain::{NewWorkSession, WorkSessionUpdate};
use crate::tests::setup_test_pool;
use chrono::NaiveDateTime;

fn draft(name: &str, time: i64) -> NewWorkSession {
    NewWorkSession {
        task_name: Some(name.to_string()),
        time_worked: Some(time),
    }
}

// a created session comes back with a store-assigned id and timestamp
#[tokio::test]
async fn test_sqlite_create_and_list() {
    let repo = SqliteRepository::new(setup_test_pool().await);

    let created = repo
        .create_session(&draft("write report", 1500))
        .await
        .expect("Should insert session");

    assert_eq!(created.task_id, 1);
    assert_eq!(created.task_name.as_deref(), Some("write report"));
    assert_eq!(created.time_worked, Some(1500));

    let latest = repo.get_latest_sessions(10).await.expect("Should query");
    assert_eq!(latest, vec![created]);
}

#[tokio::test]
async fn test_sqlite_latest_is_newest_first_and_limited() {
    let repo = SqliteRepository::new(setup_test_pool().await);

    for i in 0..15 {
        repo.create_session(&draft(&format!("task {}", i), i))
            .await
            .unwrap();
    }

    let latest = repo.get_latest_sessions(10).await.unwrap();
    let ids: Vec<i64> = latest.iter().map(|s| s.task_id).collect();

    assert_eq!(ids, (6..=15).rev().collect::<Vec<i64>>());
    assert_eq!(latest[0].task_name.as_deref(), Some("task 14"));
}

#[tokio::test]
async fn test_sqlite_empty_store_lists_nothing() {
    let repo = SqliteRepository::new(setup_test_pool().await);

    let latest = repo.get_latest_sessions(10).await.unwrap();
    assert!(latest.is_empty());
}

// nothing is validated: nulls and negative durations are stored as given
#[tokio::test]
async fn test_sqlite_accepts_nulls_and_negative_time() {
    let repo = SqliteRepository::new(setup_test_pool().await);

    let empty = repo
        .create_session(&NewWorkSession::default())
        .await
        .unwrap();
    assert_eq!(empty.task_name, None);
    assert_eq!(empty.time_worked, None);

    let negative = repo.create_session(&draft("oops", -30)).await.unwrap();
    assert_eq!(negative.time_worked, Some(-30));
}

#[tokio::test]
async fn test_sqlite_update_overwrites_name_and_time_only() {
    let pool = setup_test_pool().await;
    let repo = SqliteRepository::new(pool.clone());

    let created = repo.create_session(&draft("draft", 60)).await.unwrap();

    // backdate the row so a refreshed timestamp would be visible
    sqlx::query("UPDATE work_sessions SET time_saved = '2020-01-01 08:30:00' WHERE task_id = ?")
        .bind(created.task_id)
        .execute(&pool)
        .await
        .unwrap();

    let update = WorkSessionUpdate {
        task_name: Some("final".to_string()),
        time_worked: Some(120),
    };
    let found = repo.update_session(created.task_id, &update).await.unwrap();
    assert!(found);

    let latest = repo.get_latest_sessions(10).await.unwrap();
    let session = &latest[0];
    assert_eq!(session.task_id, created.task_id);
    assert_eq!(session.task_name.as_deref(), Some("final"));
    assert_eq!(session.time_worked, Some(120));
    assert_eq!(
        session.time_saved,
        NaiveDateTime::parse_from_str("2020-01-01 08:30:00", "%Y-%m-%d %H:%M:%S").unwrap()
    );
}

#[tokio::test]
async fn test_sqlite_update_with_missing_fields_writes_nulls() {
    let repo = SqliteRepository::new(setup_test_pool().await);
    let created = repo.create_session(&draft("named", 10)).await.unwrap();

    repo.update_session(created.task_id, &WorkSessionUpdate::default())
        .await
        .unwrap();

    let latest = repo.get_latest_sessions(10).await.unwrap();
    assert_eq!(latest[0].task_name, None);
    assert_eq!(latest[0].time_worked, None);
}

#[tokio::test]
async fn test_sqlite_update_unknown_id() {
    let repo = SqliteRepository::new(setup_test_pool().await);

    let found = repo
        .update_session(42, &WorkSessionUpdate::default())
        .await
        .unwrap();
    assert!(!found);
}

#[tokio::test]
async fn test_sqlite_delete() {
    let repo = SqliteRepository::new(setup_test_pool().await);
    let created = repo.create_session(&draft("gone", 5)).await.unwrap();

    assert!(repo.delete_session(created.task_id).await.unwrap());
    assert!(repo.get_latest_sessions(10).await.unwrap().is_empty());

    // a second delete finds nothing
    assert!(!repo.delete_session(created.task_id).await.unwrap());
}

// AUTOINCREMENT: ids of deleted rows are never handed out again
#[tokio::test]
async fn test_sqlite_ids_not_reused_after_delete() {
    let repo = SqliteRepository::new(setup_test_pool().await);

    repo.create_session(&draft("a", 1)).await.unwrap();
    let second = repo.create_session(&draft("b", 2)).await.unwrap();
    repo.delete_session(second.task_id).await.unwrap();

    let third = repo.create_session(&draft("c", 3)).await.unwrap();
    assert_eq!(third.task_id, 3);
}
