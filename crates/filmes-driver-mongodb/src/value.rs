use bson::Bson;
use filmes_core::stmt::{Document, DocumentId, Value};

const ID_FIELD: &str = "_id";

pub fn to_bson(value: &Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(v) => Bson::Boolean(*v),
        Value::I64(v) => Bson::Int64(*v),
        Value::F64(v) => Bson::Double(*v),
        Value::String(v) => Bson::String(v.clone()),
    }
}

/// Documents are flat, so nested values are kept as their relaxed
/// extended JSON text.
pub fn from_bson(bson: &Bson) -> Value {
    match bson {
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Boolean(v) => Value::Bool(*v),
        Bson::Int32(v) => Value::I64(i64::from(*v)),
        Bson::Int64(v) => Value::I64(*v),
        Bson::Double(v) => Value::F64(*v),
        Bson::String(v) => Value::String(v.clone()),
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::String(
            dt.try_to_rfc3339_string()
                .unwrap_or_else(|_| dt.timestamp_millis().to_string()),
        ),
        other => Value::String(other.clone().into_relaxed_extjson().to_string()),
    }
}

pub fn id_from_bson(bson: &Bson) -> DocumentId {
    match bson {
        Bson::ObjectId(oid) => DocumentId::new(oid.to_hex()),
        Bson::String(v) => DocumentId::new(v.clone()),
        other => DocumentId::new(other.to_string()),
    }
}

/// The store assigns `_id`, so any id on the outgoing document is dropped.
pub fn to_bson_document(document: &Document) -> bson::Document {
    let mut doc = bson::Document::new();
    for (name, value) in &document.fields {
        if name != ID_FIELD {
            doc.insert(name.clone(), to_bson(value));
        }
    }
    doc
}

pub fn from_bson_document(doc: &bson::Document) -> Document {
    let mut document = match doc.get(ID_FIELD) {
        Some(id) => Document::with_id(id_from_bson(id)),
        None => Document::new(),
    };

    for (name, bson) in doc {
        if name != ID_FIELD {
            document.insert(name.clone(), from_bson(bson));
        }
    }

    document
}
