use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

/// A catalog entry. `item_id` is the sole identity field and doubles as the
/// document-store primary key; the record is never mutated after
/// construction.
///
/// The JSON shape is:
///
/// ```json
/// { "itemId": "329199", "name": "Laptop Sticker", "desc": "...", "price": 8.5 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "itemId", default)]
    pub item_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub price: f64,
}

impl Product {
    /// Decodes a stored document. A missing or mistyped field yields the
    /// zero value; decoding itself never fails. Fields other than the four
    /// product fields (notably `_id`) are ignored.
    pub fn from_document(document: &Document) -> Self {
        Self {
            item_id: document.get_str("itemId").unwrap_or_default().to_string(),
            name: document.get_str("name").unwrap_or_default().to_string(),
            desc: document.get_str("desc").unwrap_or_default().to_string(),
            price: document.get_f64("price").unwrap_or_default(),
        }
    }

    /// Encodes exactly the four product fields.
    pub fn to_document(&self) -> Document {
        doc! {
            "itemId": &self.item_id,
            "name": &self.name,
            "desc": &self.desc,
            "price": self.price,
        }
    }
}
