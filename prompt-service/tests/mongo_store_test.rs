use prompt_service::models::{EnhancementRecord, StatusCheck};
use prompt_service::services::{PromptDb, PromptStore};

async fn connect() -> PromptDb {
    let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into());
    let database = format!("prompt_test_{}", uuid::Uuid::new_v4().simple());

    let db = PromptDb::connect(&uri, &database)
        .await
        .expect("Failed to connect to MongoDB");
    db.initialize_indexes()
        .await
        .expect("Failed to create indexes");
    db
}

#[tokio::test]
#[ignore = "Requires MongoDB"]
async fn recent_enhancements_are_newest_first() {
    let db = connect().await;

    for prompt in ["one", "two", "three"] {
        let record = EnhancementRecord::new(
            prompt.to_string(),
            format!("{} enhanced", prompt),
            "creative".to_string(),
            "because".to_string(),
        );
        db.insert_enhancement(&record).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let records = db.recent_enhancements(2).await.unwrap();
    let prompts: Vec<&str> = records.iter().map(|r| r.original_prompt.as_str()).collect();
    assert_eq!(prompts, vec!["three", "two"]);

    db.database().drop(None).await.unwrap();
    db.close().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB"]
async fn status_checks_are_stored() {
    let db = connect().await;

    db.insert_status_check(&StatusCheck::new("probe".to_string()))
        .await
        .unwrap();
    let checks = db.status_checks(10).await.unwrap();
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].client_name, "probe");
    assert!(db.health_check().await.is_ok());

    db.database().drop(None).await.unwrap();
    db.close().await;
}
