use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Server-assigned record identity.
///
/// Backends differ on the wire: a Spring/JPA API sends numeric ids, a
/// document store sends strings (often under `_id`). Both are kept as the
/// exact text the server sent and echoed back verbatim in update/delete paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordIdVisitor;

        impl<'de> Visitor<'de> for RecordIdVisitor {
            type Value = RecordId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or integer record id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RecordId, E> {
                if v.is_empty() {
                    return Err(E::custom("record id must not be empty"));
                }
                Ok(RecordId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RecordId, E> {
                Ok(RecordId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RecordId, E> {
                Ok(RecordId(v.to_string()))
            }
        }

        deserializer.deserialize_any(RecordIdVisitor)
    }
}

/// A resource record as returned by the API: identity plus the flat field set.
///
/// Decoding takes `_id` when present and `id` otherwise; a document that
/// carries both (Mongoose with virtuals) is not a duplicate-field error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record<R> {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: R,
}

#[derive(Deserialize)]
struct WireRecord<R> {
    #[serde(rename = "_id", default)]
    document_id: Option<RecordId>,
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(flatten)]
    fields: R,
}

impl<'de, R: Deserialize<'de>> Deserialize<'de> for Record<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireRecord::<R>::deserialize(deserializer)?;
        let id = wire
            .document_id
            .or(wire.id)
            .ok_or_else(|| de::Error::missing_field("id"))?;

        Ok(Self {
            id,
            fields: wire.fields,
        })
    }
}

impl<R> Record<R> {
    pub fn new(id: impl Into<String>, fields: R) -> Self {
        Self {
            id: RecordId::new(id),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn numeric_and_string_ids_are_accepted() {
        let numeric: Record<Named> = serde_json::from_value(json!({"id": 7, "name": "a"})).unwrap();
        assert_eq!(numeric.id.as_str(), "7");

        let mongo: Record<Named> =
            serde_json::from_value(json!({"_id": "65f0c", "name": "b"})).unwrap();
        assert_eq!(mongo.id.as_str(), "65f0c");
        assert_eq!(mongo.fields.name, "b");
    }

    #[test]
    fn underscore_id_wins_when_both_are_present() {
        let both: Record<Named> =
            serde_json::from_value(json!({"_id": "65f0c", "id": "65f0c-virtual", "name": "c"})).unwrap();
        assert_eq!(both.id.as_str(), "65f0c");
        assert_eq!(both.fields.name, "c");

        let null_mongo: Record<Named> =
            serde_json::from_value(json!({"_id": null, "id": 12, "name": "d"})).unwrap();
        assert_eq!(null_mongo.id.as_str(), "12");
    }

    #[test]
    fn missing_id_is_rejected() {
        let result = serde_json::from_value::<Record<Named>>(json!({"name": "a"}));
        assert!(result.is_err());
    }

    #[test]
    fn record_serializes_flat() {
        let record = Record::new("1", Named { name: "x".into() });
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"id": "1", "name": "x"}));
    }
}
