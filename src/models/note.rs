use diesel::{AsChangeset, Insertable, Queryable};
use serde_derive::{Deserialize, Serialize};

use crate::schema::note;

/// A persisted note, id assigned by the database.
#[derive(Clone, Debug, Queryable, Serialize)]
pub struct QueryNote {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Request body for create and update. Any `id` field a client sends is
/// dropped during deserialization; ids only ever come from the database.
#[derive(Clone, Debug, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = note)]
pub struct IncomingNote {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn incoming_note_drops_client_supplied_id() {
        let input: IncomingNote =
            serde_json::from_str(r#"{"id":42,"name":"Name 1","description":"Desc 1"}"#).unwrap();
        assert_eq!(input.name, "Name 1");
        assert_eq!(input.description, "Desc 1");
    }

    #[test]
    fn query_note_serializes_to_wire_shape() {
        let note = QueryNote {
            id: 7,
            name: "Name 1".to_string(),
            description: "Desc 1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&note).unwrap(),
            json!({"id": 7, "name": "Name 1", "description": "Desc 1"})
        );
    }

    #[test]
    fn incoming_note_requires_both_fields() {
        assert!(serde_json::from_str::<IncomingNote>(r#"{"name":"only name"}"#).is_err());
    }
}
