//! Tests against a live MongoDB. Run with `--features mongo-tests`.

use crate::db::{Cat, CatRepository, Database, DbError, MongoConfig, MongoDatabase};

fn test_config(collection: &str) -> MongoConfig {
    MongoConfig {
        collection: format!("{}_{}", collection, std::process::id()),
        ..MongoConfig::default()
    }
}

#[tokio::test]
async fn connect_pings_the_server() {
    let db = MongoDatabase::connect(&test_config("ping")).await.unwrap();
    db.ping().await.unwrap();
}

#[tokio::test]
async fn insert_then_find_all_round_trips() {
    let db = MongoDatabase::connect(&test_config("roundtrip"))
        .await
        .unwrap();
    let cat = Cat::new("Mimikyu", "https://x/y.png", "rare");

    let id = db.cats().insert_one(&cat).await.unwrap();
    assert_eq!(id.len(), 24);

    let cats = db.cats().find_all().await.unwrap();
    assert!(cats.contains(&cat));

    db.cats().collection.drop().await.unwrap();
}

#[tokio::test]
async fn connect_to_unreachable_server_fails() {
    let config = MongoConfig {
        uri: "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200".to_string(),
        ..MongoConfig::default()
    };
    let err = MongoDatabase::connect(&config).await.err().unwrap();
    assert!(matches!(err, DbError::Connection { .. }));
}
