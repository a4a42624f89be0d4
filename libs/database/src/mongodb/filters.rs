//! Small helpers shared by the MongoDB repositories.

use mongodb::bson::{Binary, Bson, Document, doc, spec::BinarySubtype};
use mongodb::error::{Error, ErrorKind, WriteFailure};
use uuid::Uuid;

/// Server error code for a unique index violation
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// A `Uuid` as the driver writes it inside a document.
///
/// Documents go through the raw (non human-readable) serializer, where
/// `Uuid` becomes generic binary rather than its hyphenated string.
fn uuid_bson(id: Uuid) -> Bson {
    Bson::Binary(Binary {
        subtype: BinarySubtype::Generic,
        bytes: id.as_bytes().to_vec(),
    })
}

/// `{ "_id": <id> }`, encoded the same way documents store their ids.
pub fn id_filter(id: Uuid) -> Document {
    doc! { "_id": uuid_bson(id) }
}

/// True when a write was rejected by a unique index.
pub fn is_duplicate_key(error: &Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::to_raw_document_buf;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Record {
        #[serde(rename = "_id")]
        id: Uuid,
        name: &'static str,
    }

    #[test]
    fn test_id_filter_matches_stored_id() {
        let id = Uuid::now_v7();
        let stored = to_raw_document_buf(&Record { id, name: "x" })
            .unwrap()
            .to_document()
            .unwrap();

        assert_eq!(id_filter(id).get("_id"), stored.get("_id"));
    }

    #[test]
    fn test_id_filter_is_not_a_string() {
        let id = Uuid::now_v7();
        assert_ne!(
            id_filter(id).get("_id"),
            Some(&Bson::String(id.to_string()))
        );
    }

    #[test]
    fn test_non_write_error_is_not_duplicate_key() {
        let error = Error::from(std::io::Error::other("connection reset"));
        assert!(!is_duplicate_key(&error));
    }
}
