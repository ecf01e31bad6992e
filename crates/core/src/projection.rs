//! Entity projection.
//!
//! A [`Projector`] turns a serializable record into the JSON shape served by
//! the API. It copies a fixed list of scalar properties, projects related
//! records through nested projectors, and finally layers on computed fields
//! from an optional extra-data hook.
//!
//! Projectors are plain data and are meant to be declared as `static`s so
//! nested projectors can reference each other:
//!
//! ```
//! use conference_core::projection::Projector;
//! use serde_json::json;
//!
//! static LOCATION_LIST: Projector = Projector::new(&["name"]);
//! static CONFERENCE_DETAIL: Projector =
//!     Projector::new(&["name", "starts"]).nested(&[("location", &LOCATION_LIST)]);
//!
//! let record = json!({
//!     "id": 1,
//!     "name": "RustConf",
//!     "starts": "2026-09-01T09:00:00Z",
//!     "location": { "id": 4, "name": "Hall A", "city": "Springfield" },
//! });
//!
//! assert_eq!(
//!     CONFERENCE_DETAIL.project(&record).unwrap(),
//!     json!({
//!         "name": "RustConf",
//!         "starts": "2026-09-01T09:00:00Z",
//!         "location": { "name": "Hall A" },
//!     }),
//! );
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Hook computing additional fields from the source object.
///
/// Keys returned by the hook are inserted after the scalar and nested fields
/// and replace any key of the same name.
pub type ExtraData = fn(&Map<String, Value>) -> Map<String, Value>;

/// Which fields of a record reach the response, and how.
#[derive(Clone, Copy)]
pub struct Projector {
    properties: &'static [&'static str],
    encoders: &'static [(&'static str, &'static Projector)],
    extra: Option<ExtraData>,
}

impl fmt::Debug for Projector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nested: Vec<&str> = self.encoders.iter().map(|&(field, _)| field).collect();
        f.debug_struct("Projector")
            .field("properties", &self.properties)
            .field("nested", &nested)
            .field("extra", &self.extra.is_some())
            .finish()
    }
}

impl Projector {
    /// A projector copying `properties` verbatim, in order.
    pub const fn new(properties: &'static [&'static str]) -> Self {
        Self {
            properties,
            encoders: &[],
            extra: None,
        }
    }

    /// Project the listed relation fields through their own projectors.
    pub const fn nested(self, encoders: &'static [(&'static str, &'static Projector)]) -> Self {
        Self { encoders, ..self }
    }

    /// Attach an extra-data hook.
    pub const fn with_extra(self, extra: ExtraData) -> Self {
        Self {
            extra: Some(extra),
            ..self
        }
    }

    /// Serialize `record` and project it.
    ///
    /// Sequences project element-wise and keep their order. The only failure
    /// is a record that cannot be represented as JSON at all.
    pub fn project<T: Serialize + ?Sized>(&self, record: &T) -> Result<Value, serde_json::Error> {
        let value = serde_json::to_value(record)?;
        Ok(self.project_value(&value))
    }

    /// Project an already-serialized value.
    ///
    /// Objects are projected, arrays are projected per element and anything
    /// else (including `null` for an absent relation) passes through
    /// unchanged. The source is never modified.
    pub fn project_value(&self, value: &Value) -> Value {
        match value {
            Value::Object(source) => Value::Object(self.project_object(source)),
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.project_value(item)).collect())
            }
            other => other.clone(),
        }
    }

    fn project_object(&self, source: &Map<String, Value>) -> Map<String, Value> {
        let mut out = Map::with_capacity(self.properties.len() + self.encoders.len());

        for &property in self.properties {
            let value = source.get(property).cloned().unwrap_or(Value::Null);
            out.insert(property.to_owned(), value);
        }

        for &(field, encoder) in self.encoders {
            let value = source
                .get(field)
                .map_or(Value::Null, |related| encoder.project_value(related));
            out.insert(field.to_owned(), value);
        }

        if let Some(extra) = self.extra {
            out.extend(extra(source));
        }

        out
    }
}

/// Read the natural key of a related record.
///
/// Accepts both the related object itself (`{"abbreviation": "IL", ...}`)
/// and a value that was already reduced to its key (`"IL"`), so hooks built
/// on it keep projection idempotent.
pub fn related_key(source: &Map<String, Value>, field: &str, key: &str) -> Value {
    match source.get(field) {
        Some(Value::Object(related)) => related.get(key).cloned().unwrap_or(Value::Null),
        Some(other) => other.clone(),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static STATE_KEY: Projector = Projector::new(&["id", "name"]).with_extra(state_abbreviation);
    static LOCATION_LIST: Projector = Projector::new(&["name"]);
    static CONFERENCE: Projector =
        Projector::new(&["name", "max_attendees"]).nested(&[("location", &LOCATION_LIST)]);

    fn state_abbreviation(source: &Map<String, Value>) -> Map<String, Value> {
        let mut extra = Map::new();
        extra.insert(
            "state".to_string(),
            related_key(source, "state", "abbreviation"),
        );
        extra
    }

    #[derive(Serialize)]
    struct Row {
        id: i64,
        name: &'static str,
        secret: &'static str,
    }

    #[test]
    fn copies_only_configured_properties() {
        let projector = Projector::new(&["id", "name"]);
        let row = Row {
            id: 3,
            name: "Hall A",
            secret: "hidden",
        };

        let value = projector.project(&row).unwrap();
        assert_eq!(value, json!({"id": 3, "name": "Hall A"}));
    }

    #[test]
    fn keeps_configuration_order() {
        let projector = Projector::new(&["name", "id"]);
        let value = projector.project(&json!({"id": 1, "name": "x"})).unwrap();

        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["name", "id"]);
    }

    #[test]
    fn missing_property_renders_null() {
        let projector = Projector::new(&["name", "city"]);
        let value = projector.project(&json!({"name": "Hall A"})).unwrap();
        assert_eq!(value, json!({"name": "Hall A", "city": null}));
    }

    #[test]
    fn nested_relation_uses_its_own_projector() {
        let record = json!({
            "name": "RustConf",
            "max_attendees": 300,
            "description": "not listed",
            "location": {"id": 2, "name": "Hall A", "city": "Springfield"},
        });

        let value = CONFERENCE.project(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "RustConf",
                "max_attendees": 300,
                "location": {"name": "Hall A"},
            })
        );
    }

    #[test]
    fn null_relation_stays_null() {
        let record = json!({"name": "RustConf", "max_attendees": 1, "location": null});
        let value = CONFERENCE.project(&record).unwrap();
        assert_eq!(value["location"], Value::Null);
    }

    #[test]
    fn extra_hook_runs_last_and_overrides() {
        let record = json!({
            "id": 5,
            "name": "Illinois",
            "state": {"id": 14, "abbreviation": "IL"},
        });

        let value = STATE_KEY.project(&record).unwrap();
        assert_eq!(value, json!({"id": 5, "name": "Illinois", "state": "IL"}));
    }

    #[test]
    fn collection_preserves_input_order() {
        let rows = vec![
            json!({"name": "c", "extra": 1}),
            json!({"name": "a", "extra": 2}),
            json!({"name": "b", "extra": 3}),
        ];

        let value = LOCATION_LIST.project(&rows).unwrap();
        assert_eq!(
            value,
            json!([{"name": "c"}, {"name": "a"}, {"name": "b"}])
        );
    }

    #[test]
    fn empty_collection_projects_to_empty_array() {
        let rows: Vec<Value> = Vec::new();
        assert_eq!(LOCATION_LIST.project(&rows).unwrap(), json!([]));
    }

    #[test]
    fn projection_is_idempotent() {
        let record = json!({
            "id": 5,
            "name": "Illinois",
            "state": {"id": 14, "abbreviation": "IL"},
        });
        let once = STATE_KEY.project(&record).unwrap();
        let twice = STATE_KEY.project_value(&once);
        assert_eq!(once, twice);

        let conference = json!({
            "name": "RustConf",
            "max_attendees": 10,
            "location": {"name": "Hall A", "city": "Springfield"},
        });
        let once = CONFERENCE.project(&conference).unwrap();
        assert_eq!(CONFERENCE.project_value(&once), once);
    }

    #[test]
    fn source_is_not_mutated() {
        let record = json!({"name": "Hall A", "city": "Springfield"});
        let before = record.clone();
        let _ = LOCATION_LIST.project_value(&record);
        assert_eq!(record, before);
    }

    #[test]
    fn related_key_accepts_object_or_scalar() {
        let source = json!({"state": {"abbreviation": "IL"}});
        assert_eq!(
            related_key(source.as_object().unwrap(), "state", "abbreviation"),
            json!("IL")
        );

        let source = json!({"state": "IL"});
        assert_eq!(
            related_key(source.as_object().unwrap(), "state", "abbreviation"),
            json!("IL")
        );

        let source = json!({});
        assert_eq!(
            related_key(source.as_object().unwrap(), "state", "abbreviation"),
            Value::Null
        );
    }
}
