//! Tests against a live `PostgreSQL` database from config.toml.
//!
//! Run with `cargo test --test database_test -- --ignored`.

use chrono::Duration;
use chrono::Utc;
use journal_assist::models::NewJournalEntry;
use journal_assist::AppConfig;
use journal_assist::Authenticator;
use journal_assist::Database;
use journal_assist::EntryStore;
use journal_assist::JournalError;
use journal_assist::Result;
use sqlx::PgPool;
use uuid::Uuid;

async fn setup_test_db() -> Result<Database> {
    let config = AppConfig::load()?;
    let pool = PgPool::connect(config.database_url()).await?;
    let db = Database::new(pool);

    db.init_schema().await?;
    Ok(db)
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_schema_is_initialized() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(db.is_schema_initialized().await?);
    db.verify_schema_or_error().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_and_list_entries() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = Uuid::new_v4();
    let now = Utc::now();

    for days_ago in [2, 0, 1] {
        db.create_entry(
            NewJournalEntry::new(owner, format!("day -{days_ago}"), "Walked by the river")
                .created_at(now - Duration::days(days_ago)),
        )
        .await?;
    }

    let recent = db.recent_entries(owner, 2).await?;
    let titles: Vec<_> = recent.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["day -0", "day -1"]);
    assert_eq!(db.count_entries(owner).await?, 3);

    Ok(())
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_soft_delete_hides_entry() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = Uuid::new_v4();
    let entry = db
        .create_entry(NewJournalEntry::new(owner, "Draft", "Not ready yet"))
        .await?;

    db.soft_delete_entry(owner, entry.id).await?;
    assert_eq!(db.count_entries(owner).await?, 0);
    assert!(db.recent_entries(owner, 10).await?.is_empty());
    assert!(db.list_entries(owner, false).await?.is_empty());
    let deleted = db.list_entries(owner, true).await?;
    assert_eq!(deleted.len(), 1);
    assert!(deleted[0].deleted);

    db.restore_entry(owner, entry.id).await?;
    assert_eq!(db.count_entries(owner).await?, 1);

    let result = db.soft_delete_entry(Uuid::new_v4(), entry.id).await;
    assert!(matches!(result, Err(JournalError::EntryNotFound(_))));

    Ok(())
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_issue_and_authenticate_token() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = Uuid::new_v4();

    let token = db.issue_token(owner).await?;
    assert_eq!(db.authenticate(&token).await?, Some(owner));
    assert_eq!(db.authenticate("unknown").await?, None);

    Ok(())
}
