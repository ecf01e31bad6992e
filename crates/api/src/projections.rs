//! Response shapes for every resource.
//!
//! Each entity has a list projection (what appears in listings and when the
//! entity is nested inside another one) and a detail projection (its own
//! detail endpoint). Detail projections are applied to a view struct that
//! carries the record together with its parent, so the nested projector has
//! something to recurse into.

use conference_core::projection::{related_key, Projector};
use conference_db::models::attendee::Attendee;
use conference_db::models::conference::Conference;
use conference_db::models::location::Location;
use conference_db::models::presentation::Presentation;
use conference_db::models::state::State;
use serde::Serialize;
use serde_json::{Map, Value};

/// Prefix under which every resource is mounted.
pub const API_PREFIX: &str = "/api/v1";

// ---------------------------------------------------------------------------
// Projectors
// ---------------------------------------------------------------------------

pub static STATE: Projector = Projector::new(&["name", "abbreviation"]);

pub static LOCATION_LIST: Projector = Projector::new(&["id", "name"]).with_extra(location_href);

pub static LOCATION_DETAIL: Projector =
    Projector::new(&["id", "name", "city", "room_count", "created", "updated"])
        .with_extra(location_detail_extra);

pub static CONFERENCE_LIST: Projector =
    Projector::new(&["id", "name"]).with_extra(conference_href);

pub static CONFERENCE_DETAIL: Projector = Projector::new(&[
    "id",
    "name",
    "description",
    "max_presentations",
    "max_attendees",
    "starts",
    "ends",
    "created",
    "updated",
])
.nested(&[("location", &LOCATION_LIST)])
.with_extra(conference_href);

pub static ATTENDEE_LIST: Projector = Projector::new(&["id", "name"]).with_extra(attendee_href);

pub static ATTENDEE_DETAIL: Projector =
    Projector::new(&["id", "name", "email", "company_name", "created"])
        .nested(&[("conference", &CONFERENCE_LIST)])
        .with_extra(attendee_href);

pub static PRESENTATION_LIST: Projector =
    Projector::new(&["id", "title", "status"]).with_extra(presentation_href);

pub static PRESENTATION_DETAIL: Projector = Projector::new(&[
    "id",
    "presenter_name",
    "company_name",
    "presenter_email",
    "title",
    "synopsis",
    "status",
    "created",
])
.nested(&[("conference", &CONFERENCE_LIST)])
.with_extra(presentation_href);

/// Project `records` with `projector` and wrap them under `key`, e.g.
/// `{"locations": [...]}`.
pub fn listing<T: Serialize>(
    key: &str,
    projector: &Projector,
    records: &[T],
) -> Result<Value, serde_json::Error> {
    let mut body = Map::new();
    body.insert(key.to_string(), projector.project(records)?);
    Ok(Value::Object(body))
}

// ---------------------------------------------------------------------------
// Extra-data hooks
// ---------------------------------------------------------------------------

/// `{"href": "/api/v1/{plural}/{id}"}` when the source has a numeric id.
fn href(plural: &str, source: &Map<String, Value>) -> Map<String, Value> {
    let mut extra = Map::new();
    if let Some(id) = source.get("id").and_then(Value::as_i64) {
        extra.insert(
            "href".to_string(),
            Value::String(format!("{API_PREFIX}/{plural}/{id}")),
        );
    }
    extra
}

fn location_href(source: &Map<String, Value>) -> Map<String, Value> {
    href("locations", source)
}

/// Expose the state by abbreviation rather than as an object.
fn location_detail_extra(source: &Map<String, Value>) -> Map<String, Value> {
    let mut extra = Map::new();
    extra.insert(
        "state".to_string(),
        related_key(source, "state", "abbreviation"),
    );
    extra.extend(location_href(source));
    extra
}

fn conference_href(source: &Map<String, Value>) -> Map<String, Value> {
    href("conferences", source)
}

fn attendee_href(source: &Map<String, Value>) -> Map<String, Value> {
    href("attendees", source)
}

fn presentation_href(source: &Map<String, Value>) -> Map<String, Value> {
    href("presentations", source)
}

// ---------------------------------------------------------------------------
// Views: a record joined with its parent
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct LocationView<'a> {
    #[serde(flatten)]
    pub location: &'a Location,
    pub state: &'a State,
}

#[derive(Debug, Serialize)]
pub struct ConferenceView<'a> {
    #[serde(flatten)]
    pub conference: &'a Conference,
    pub location: &'a Location,
}

#[derive(Debug, Serialize)]
pub struct AttendeeView<'a> {
    #[serde(flatten)]
    pub attendee: &'a Attendee,
    pub conference: &'a Conference,
}

#[derive(Debug, Serialize)]
pub struct PresentationView<'a> {
    #[serde(flatten)]
    pub presentation: &'a Presentation,
    pub conference: &'a Conference,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;

    fn illinois() -> State {
        State {
            id: 14,
            name: "Illinois".to_string(),
            abbreviation: "IL".to_string(),
        }
    }

    fn hall_a() -> Location {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        Location {
            id: 7,
            name: "Hall A".to_string(),
            city: "Springfield".to_string(),
            room_count: 3,
            state_id: 14,
            created: at,
            updated: at,
        }
    }

    fn rustconf() -> Conference {
        let at = Utc.with_ymd_and_hms(2026, 9, 1, 9, 0, 0).unwrap();
        Conference {
            id: 2,
            name: "RustConf".to_string(),
            description: "Systems talks".to_string(),
            max_presentations: 20,
            max_attendees: 300,
            starts: at,
            ends: at,
            location_id: 7,
            created: at,
            updated: at,
        }
    }

    #[test]
    fn location_detail_exposes_state_abbreviation() {
        let state = illinois();
        let location = hall_a();
        let value = LOCATION_DETAIL
            .project(&LocationView {
                location: &location,
                state: &state,
            })
            .unwrap();

        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Hall A",
                "city": "Springfield",
                "room_count": 3,
                "created": "2026-01-02T03:04:05Z",
                "updated": "2026-01-02T03:04:05Z",
                "state": "IL",
                "href": "/api/v1/locations/7",
            })
        );
    }

    #[test]
    fn conference_detail_nests_location_list_projection() {
        let location = hall_a();
        let conference = rustconf();
        let value = CONFERENCE_DETAIL
            .project(&ConferenceView {
                conference: &conference,
                location: &location,
            })
            .unwrap();

        assert_eq!(
            value["location"],
            json!({"id": 7, "name": "Hall A", "href": "/api/v1/locations/7"})
        );
        assert_eq!(value["href"], "/api/v1/conferences/2");
        assert!(value.get("location_id").is_none());
    }

    #[test]
    fn detail_projection_is_idempotent() {
        let location = hall_a();
        let conference = rustconf();
        let once = CONFERENCE_DETAIL
            .project(&ConferenceView {
                conference: &conference,
                location: &location,
            })
            .unwrap();
        assert_eq!(CONFERENCE_DETAIL.project_value(&once), once);

        let state = illinois();
        let once = LOCATION_DETAIL
            .project(&LocationView {
                location: &location,
                state: &state,
            })
            .unwrap();
        assert_eq!(LOCATION_DETAIL.project_value(&once), once);
    }

    #[test]
    fn listing_wraps_under_plural_key() {
        let locations = vec![hall_a()];
        let value = listing("locations", &LOCATION_LIST, &locations).unwrap();
        assert_eq!(
            value,
            json!({"locations": [{"id": 7, "name": "Hall A", "href": "/api/v1/locations/7"}]})
        );
    }

    #[test]
    fn state_projection_hides_id() {
        let value = STATE.project(&illinois()).unwrap();
        assert_eq!(value, json!({"name": "Illinois", "abbreviation": "IL"}));
    }
}
