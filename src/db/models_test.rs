//! Tests for domain models.

use mongodb::bson::{Bson, doc};

use crate::db::models::*;
use crate::db::DbError;

#[test]
fn cat_serializes_with_wire_names() {
    let cat = Cat::new("Mimikyu", "https://x/y.png", "rare");
    let json = serde_json::to_value(&cat).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj.len(), 3);
    for field in CatField::ALL {
        assert_eq!(obj[field.wire_name()], cat.field(field));
    }
}

#[test]
fn to_document_uses_storage_names() {
    let cat = Cat::new("Mimikyu", "https://x/y.png", "rare");
    let doc = cat.to_document();

    assert_eq!(
        doc,
        doc! { "name": "Mimikyu", "iconurl": "https://x/y.png", "rarity": "rare" }
    );
}

#[test]
fn from_document_reads_legacy_documents() {
    // Shape written by the previous service, including the store's _id
    let doc = doc! {
        "_id": mongodb::bson::oid::ObjectId::new(),
        "name": "Tabby",
        "iconurl": "https://cdn/tabby.png",
        "rarity": "common",
    };

    let cat = Cat::from_document(&doc).unwrap();
    assert_eq!(cat, Cat::new("Tabby", "https://cdn/tabby.png", "common"));
}

#[test]
fn from_document_treats_missing_and_null_as_empty() {
    let doc = doc! { "name": "Ghost", "rarity": Bson::Null };

    let cat = Cat::from_document(&doc).unwrap();
    assert_eq!(cat.name, "Ghost");
    assert_eq!(cat.icon_url, "");
    assert_eq!(cat.rarity, "");
}

#[test]
fn from_document_rejects_non_string_field() {
    let doc = doc! { "name": "Glitch", "iconurl": "u", "rarity": 5 };

    let err = Cat::from_document(&doc).unwrap_err();
    match err {
        DbError::Decode { field, .. } => assert_eq!(field, "rarity"),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn missing_fields_lists_empty_fields_in_order() {
    let cat = Cat::new("", "https://x/y.png", "");
    assert_eq!(cat.missing_fields(), vec![CatField::Name, CatField::Rarity]);

    let full = Cat::new("a", "b", "c");
    assert!(full.missing_fields().is_empty());
}

#[test]
fn from_json_object_reads_wire_names() {
    let body = serde_json::json!({
        "name": "Mimikyu",
        "iconUrl": "https://x/y.png",
        "rarity": "rare",
        "iconurl": "ignored storage key",
    });

    let cat = Cat::from_json_object(body.as_object().unwrap()).unwrap();
    assert_eq!(cat, Cat::new("Mimikyu", "https://x/y.png", "rare"));
}

#[test]
fn from_json_object_treats_missing_and_null_as_empty() {
    let body = serde_json::json!({ "name": "Ghost", "rarity": null });

    let cat = Cat::from_json_object(body.as_object().unwrap()).unwrap();
    assert_eq!(cat.missing_fields(), vec![CatField::IconUrl, CatField::Rarity]);
}

#[test]
fn from_json_object_reports_non_string_field() {
    let body = serde_json::json!({ "name": "Glitch", "iconUrl": ["a"], "rarity": "rare" });

    let err = Cat::from_json_object(body.as_object().unwrap()).unwrap_err();
    assert_eq!(err, CatField::IconUrl);
}
