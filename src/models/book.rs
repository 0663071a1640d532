//! Book model

use serde::{Deserialize, Serialize};
use serde_json::{Deserializer, Map, Value};
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Assigned by the store on creation; ignored on input
    pub id: i64,
    pub title: String,
    pub isbn: String,
    pub author: String,
    /// Publication year
    pub published_at: i64,
}

impl Book {
    /// Decode a request body without ever rejecting it.
    ///
    /// Only the first JSON value in the body is read; whatever follows it is
    /// ignored. Anything that is not a JSON object yields an all-zero book.
    /// Inside an object, keys match field names case-insensitively and the
    /// last matching key in document order wins. A value of the wrong type
    /// leaves that one field at its zero value while the other fields are
    /// still taken.
    pub fn from_json_lenient(body: &[u8]) -> Self {
        match Deserializer::from_slice(body).into_iter::<Value>().next() {
            Some(Ok(Value::Object(fields))) => Self::from_fields(fields),
            Some(Ok(other)) => {
                tracing::debug!("Book payload is not an object ({}), using defaults", kind(&other));
                Self::default()
            }
            Some(Err(e)) => {
                tracing::debug!("Malformed book payload, using defaults: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    fn from_fields(fields: Map<String, Value>) -> Self {
        let mut book = Self::default();

        for (key, value) in fields {
            match key.to_lowercase().as_str() {
                "id" => take_int(&mut book.id, &key, value),
                "title" => take_string(&mut book.title, &key, value),
                "isbn" => take_string(&mut book.isbn, &key, value),
                "author" => take_string(&mut book.author, &key, value),
                "published_at" => take_int(&mut book.published_at, &key, value),
                _ => {}
            }
        }

        book
    }
}

fn take_string(slot: &mut String, key: &str, value: Value) {
    match value {
        Value::String(s) => *slot = s,
        Value::Null => {}
        other => tracing::debug!("Ignoring `{}`: expected string, got {}", key, kind(&other)),
    }
}

fn take_int(slot: &mut i64, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::Number(ref n) if n.is_i64() => *slot = n.as_i64().unwrap_or_default(),
        other => tracing::debug!("Ignoring `{}`: expected integer, got {}", key, kind(&other)),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let book = Book::from_json_lenient(
            br#"{"title":"Dune","isbn":"123","author":"Herbert","published_at":1965}"#,
        );
        assert_eq!(
            book,
            Book {
                id: 0,
                title: "Dune".to_string(),
                isbn: "123".to_string(),
                author: "Herbert".to_string(),
                published_at: 1965,
            }
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let book = Book::from_json_lenient(br#"{"title":"Dune Messiah"}"#);
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.isbn, "");
        assert_eq!(book.author, "");
        assert_eq!(book.published_at, 0);
    }

    #[test]
    fn test_malformed_body_defaults() {
        assert_eq!(Book::from_json_lenient(b"{not json"), Book::default());
        assert_eq!(Book::from_json_lenient(b""), Book::default());
        assert_eq!(Book::from_json_lenient(b"[1,2,3]"), Book::default());
    }

    #[test]
    fn test_wrong_type_skips_only_that_field() {
        let book = Book::from_json_lenient(
            br#"{"title":42,"author":"Herbert","published_at":"1965","isbn":null}"#,
        );
        assert_eq!(book.title, "");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.published_at, 0);
        assert_eq!(book.isbn, "");
    }

    #[test]
    fn test_keys_match_case_insensitively() {
        let book = Book::from_json_lenient(br#"{"Title":"Dune","AUTHOR":"Herbert"}"#);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let book = Book::from_json_lenient(br#"{"title":"a"} junk"#);
        assert_eq!(book.title, "a");

        let book = Book::from_json_lenient(br#"{"title":"a"}{"title":"b"}"#);
        assert_eq!(book.title, "a");
    }

    #[test]
    fn test_last_key_in_document_order_wins() {
        let book = Book::from_json_lenient(br#"{"title":"a","Title":"b"}"#);
        assert_eq!(book.title, "b");

        let book = Book::from_json_lenient(br#"{"Title":"b","title":"a"}"#);
        assert_eq!(book.title, "a");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Book {
            id: 1,
            title: "Dune".to_string(),
            ..Book::default()
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Dune",
                "isbn": "",
                "author": "",
                "published_at": 0
            })
        );
    }
}
