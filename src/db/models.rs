//! Domain models for the cat catalog.
//!
//! `Cat` is storage-agnostic. The mapping between its wire (JSON) keys and its
//! storage (BSON) keys is enumerated once in [`CatField`]; JSON output, JSON
//! request parsing and both directions of the document conversion all walk
//! that table.

use mongodb::bson::{Bson, Document};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::db::{DbError, DbResult};

/// Identifier assigned by the store on insertion (24-char hex for MongoDB).
pub type CatId = String;

/// A collectible cat record.
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Cat {
    /// Display name
    #[schema(example = "Mimikyu")]
    pub name: String,
    /// URL of the uploaded icon image
    #[schema(rename = "iconUrl", example = "https://storage.example.com/cats/mimikyu.png")]
    pub icon_url: String,
    /// Free-form rarity tier
    #[schema(example = "rare")]
    pub rarity: String,
}

/// One field of a [`Cat`] with its wire and storage names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatField {
    Name,
    IconUrl,
    Rarity,
}

impl CatField {
    pub const ALL: [CatField; 3] = [CatField::Name, CatField::IconUrl, CatField::Rarity];

    /// Key used in JSON request and response bodies.
    pub fn wire_name(self) -> &'static str {
        match self {
            CatField::Name => "name",
            CatField::IconUrl => "iconUrl",
            CatField::Rarity => "rarity",
        }
    }

    /// Key used in stored documents.
    ///
    /// Documents written by earlier versions of the service used the driver's
    /// default lower-cased keys, so `iconUrl` is stored as `iconurl`.
    pub fn storage_name(self) -> &'static str {
        match self {
            CatField::Name => "name",
            CatField::IconUrl => "iconurl",
            CatField::Rarity => "rarity",
        }
    }
}

impl Cat {
    pub fn new(
        name: impl Into<String>,
        icon_url: impl Into<String>,
        rarity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon_url: icon_url.into(),
            rarity: rarity.into(),
        }
    }

    pub fn field(&self, field: CatField) -> &str {
        match field {
            CatField::Name => &self.name,
            CatField::IconUrl => &self.icon_url,
            CatField::Rarity => &self.rarity,
        }
    }

    fn field_mut(&mut self, field: CatField) -> &mut String {
        match field {
            CatField::Name => &mut self.name,
            CatField::IconUrl => &mut self.icon_url,
            CatField::Rarity => &mut self.rarity,
        }
    }

    /// Fields that are empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<CatField> {
        CatField::ALL
            .into_iter()
            .filter(|f| self.field(*f).is_empty())
            .collect()
    }

    /// Read a cat from a JSON object keyed by wire names.
    ///
    /// Absent or null fields read as empty strings. A field holding any other
    /// non-string value is returned as the error.
    pub fn from_json_object(obj: &Map<String, Value>) -> Result<Self, CatField> {
        let mut cat = Cat::new("", "", "");
        for field in CatField::ALL {
            *cat.field_mut(field) = match obj.get(field.wire_name()) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(_) => return Err(field),
            };
        }
        Ok(cat)
    }

    /// Convert to the storage shape.
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        for field in CatField::ALL {
            doc.insert(field.storage_name(), self.field(field));
        }
        doc
    }

    /// Convert from the storage shape.
    ///
    /// Absent or null fields decode as empty strings; any other non-string
    /// value is a decode error.
    pub fn from_document(doc: &Document) -> DbResult<Self> {
        let mut cat = Cat::new("", "", "");
        for field in CatField::ALL {
            *cat.field_mut(field) = match doc.get(field.storage_name()) {
                None | Some(Bson::Null) => String::new(),
                Some(Bson::String(s)) => s.clone(),
                Some(other) => {
                    return Err(DbError::Decode {
                        field: field.storage_name().to_string(),
                        message: format!("expected string, found {:?}", other.element_type()),
                    });
                }
            };
        }
        Ok(cat)
    }
}

impl Serialize for Cat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CatField::ALL.len()))?;
        for field in CatField::ALL {
            map.serialize_entry(field.wire_name(), self.field(field))?;
        }
        map.end()
    }
}
