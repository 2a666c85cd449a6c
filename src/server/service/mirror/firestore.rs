//! Minimal Firestore REST client.
//!
//! Documents are written with `PATCH
//! /v1/projects/{project}/databases/(default)/documents/{path}` and removed
//! with `DELETE` on the same path. Plain JSON is converted to Firestore's
//! typed field encoding before the write.

use serde_json::{json, Map, Value};

const FIRESTORE_API_BASE: &str = "https://firestore.googleapis.com/v1";

#[derive(Clone)]
pub struct FirestoreClient {
    client: reqwest::Client,
    project_id: String,
    token: String,
}

impl FirestoreClient {
    pub fn new(client: reqwest::Client, project_id: String, token: String) -> Self {
        Self {
            client,
            project_id,
            token,
        }
    }

    fn document_url(&self, path: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            FIRESTORE_API_BASE, self.project_id, path
        )
    }

    /// Creates or overwrites the document at `path`.
    pub async fn upsert_document(&self, path: &str, fields: &Value) -> Result<(), reqwest::Error> {
        self.client
            .patch(self.document_url(path))
            .bearer_auth(&self.token)
            .json(&json!({ "fields": to_firestore_fields(fields) }))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    pub async fn delete_document(&self, path: &str) -> Result<(), reqwest::Error> {
        self.client
            .delete(self.document_url(path))
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Converts a JSON object into Firestore's typed `fields` map.
pub(crate) fn to_firestore_fields(value: &Value) -> Value {
    let mut fields = Map::new();

    if let Value::Object(map) = value {
        for (key, value) in map {
            fields.insert(key.clone(), to_firestore_value(value));
        }
    }

    Value::Object(fields)
}

fn to_firestore_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                // Firestore integers are strings on the wire.
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(to_firestore_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(_) => json!({ "mapValue": { "fields": to_firestore_fields(value) } }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encodes_scalars_to_typed_fields() {
        let fields = to_firestore_fields(&json!({
            "mood": "joy",
            "intensity": 7,
            "note": null,
            "published": true,
        }));

        assert_eq!(fields["mood"], json!({ "stringValue": "joy" }));
        assert_eq!(fields["intensity"], json!({ "integerValue": "7" }));
        assert_eq!(fields["note"], json!({ "nullValue": null }));
        assert_eq!(fields["published"], json!({ "booleanValue": true }));
    }

    #[test]
    fn encodes_nested_arrays_and_maps() {
        let fields = to_firestore_fields(&json!({
            "tags": ["calm", "sleep"],
            "meta": { "version": 2 },
        }));

        assert_eq!(
            fields["tags"],
            json!({ "arrayValue": { "values": [
                { "stringValue": "calm" },
                { "stringValue": "sleep" },
            ] } })
        );
        assert_eq!(
            fields["meta"],
            json!({ "mapValue": { "fields": { "version": { "integerValue": "2" } } } })
        );
    }
}
