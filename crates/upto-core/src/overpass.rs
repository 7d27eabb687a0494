//! OSM Overpass query building and result parsing.

use crate::route_analyzer::leading_number;
use crate::trails::{
    calculate_confidence, RouteQuery, TrailCandidate, TrailLocation, TrailMetadata, TrailSource,
    TrailSuggestion, TrailWaypoint, CONFIDENCE_THRESHOLD,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Server-side timeout written into the query, in seconds.
const QUERY_TIMEOUT_S: u32 = 25;

/// An OSM tag filter; `value: None` matches any value of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsmTag {
    pub key: &'static str,
    pub value: Option<&'static str>,
}

const fn tag(key: &'static str, value: Option<&'static str>) -> OsmTag {
    OsmTag { key, value }
}

const HIKING_TAGS: &[OsmTag] = &[
    tag("route", Some("hiking")),
    tag("highway", Some("path")),
    tag("highway", Some("footway")),
    tag("sac_scale", None),
];
const CYCLING_TAGS: &[OsmTag] = &[
    tag("route", Some("bicycle")),
    tag("highway", Some("cycleway")),
];
const WINTER_TAGS: &[OsmTag] = &[tag("piste:type", None), tag("route", Some("ski"))];
const TRAIL_RUNNING_TAGS: &[OsmTag] = &[
    tag("route", Some("hiking")),
    tag("highway", Some("path")),
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(default)]
    pub geometry: Vec<OverpassPoint>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverpassPoint {
    pub lat: f64,
    pub lon: f64,
}

/// OSM tags that identify trails for an activity. Unknown activities use the hiking set.
pub fn osm_activity_tags(activity_type: &str) -> &'static [OsmTag] {
    match activity_type {
        "cycling" => CYCLING_TAGS,
        "winter-sports" => WINTER_TAGS,
        "trail-running" => TRAIL_RUNNING_TAGS,
        _ => HIKING_TAGS,
    }
}

/// Backslash-escape regex metacharacters (and quotes) in a user-supplied title.
pub fn escape_title(title: &str) -> String {
    let mut escaped = String::with_capacity(title.len());
    for ch in title.chars() {
        if matches!(
            ch,
            '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\' | '"'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Overpass QL for named ways matching the title case-insensitively.
pub fn build_overpass_query(query: &RouteQuery) -> String {
    let title = escape_title(&query.title);
    let filters = osm_activity_tags(&query.activity_type)
        .iter()
        .map(|tag| match tag.value {
            Some(value) => format!(
                "way[\"{}\"=\"{}\"][\"name\"~\"{}\",i];",
                tag.key, value, title
            ),
            None => format!("way[\"{}\"][\"name\"~\"{}\",i];", tag.key, title),
        })
        .collect::<Vec<_>>()
        .join("\n  ");

    format!(
        "[out:json][timeout:{}];\n(\n  {}\n);\nout geom;\n",
        QUERY_TIMEOUT_S, filters
    )
}

/// Turn named Overpass ways into suggestions above the confidence threshold.
pub fn process_osm_results(
    response: &OverpassResponse,
    query: &RouteQuery,
    now: DateTime<Utc>,
) -> Vec<TrailSuggestion> {
    response
        .elements
        .iter()
        .filter_map(|element| {
            let name = element.tags.get("name")?;
            let candidate = TrailCandidate {
                name: Some(name.as_str()),
                activity_type: Some(query.activity_type.as_str()),
                location_name: None,
            };
            let confidence = calculate_confidence(query, &candidate);
            (confidence > CONFIDENCE_THRESHOLD)
                .then(|| osm_suggestion(element, name, query, confidence, now))
        })
        .collect()
}

fn osm_suggestion(
    element: &OverpassElement,
    name: &str,
    query: &RouteQuery,
    confidence: f64,
    now: DateTime<Utc>,
) -> TrailSuggestion {
    let waypoints = (element.geometry.len() > 1).then(|| {
        element
            .geometry
            .iter()
            .enumerate()
            .map(|(index, point)| TrailWaypoint {
                name: format!("Point {}", index + 1),
                coordinates: [point.lat, point.lon],
                elevation: None,
            })
            .collect()
    });

    TrailSuggestion {
        id: format!("osm-{}", element.id),
        name: name.to_string(),
        source: TrailSource::Osm,
        confidence,
        activity_type: query.activity_type.clone(),
        location: TrailLocation {
            name: name.to_string(),
            coordinates: element_coordinates(element),
        },
        distance: element
            .tags
            .get("distance")
            .map(|distance| leading_number(distance))
            .filter(|distance| !distance.is_nan()),
        elevation_gain: None,
        difficulty: element
            .tags
            .get("sac_scale")
            .or_else(|| element.tags.get("difficulty"))
            .cloned(),
        description: element.tags.get("description").cloned(),
        waypoints,
        metadata: Some(TrailMetadata {
            verified: false,
            last_updated: now,
            user_rating: None,
            tags: Some(element.tags.keys().cloned().collect()),
        }),
    }
}

/// First geometry point, else the element's own position, else the origin.
fn element_coordinates(element: &OverpassElement) -> [f64; 2] {
    match element.geometry.first() {
        Some(point) => [point.lat, point.lon],
        None => [element.lat.unwrap_or(0.0), element.lon.unwrap_or(0.0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(title: &str, activity: &str) -> RouteQuery {
        RouteQuery {
            title: title.to_string(),
            activity_type: activity.to_string(),
            location: None,
        }
    }

    #[test]
    fn hiking_query_lists_every_tag() {
        let ql = build_overpass_query(&query("Lake 22", "hiking"));
        assert!(ql.starts_with("[out:json][timeout:25];"));
        assert!(ql.contains(r#"way["route"="hiking"]["name"~"Lake 22",i];"#));
        assert!(ql.contains(r#"way["highway"="footway"]["name"~"Lake 22",i];"#));
        assert!(ql.contains(r#"way["sac_scale"]["name"~"Lake 22",i];"#));
        assert!(ql.trim_end().ends_with("out geom;"));
    }

    #[test]
    fn unknown_activity_uses_hiking_tags() {
        assert_eq!(osm_activity_tags("kayaking"), osm_activity_tags("hiking"));
        assert_eq!(osm_activity_tags("winter-sports")[0].key, "piste:type");
    }

    #[test]
    fn title_metacharacters_are_escaped() {
        assert_eq!(escape_title("Mt. Si (old)"), r"Mt\. Si \(old\)");
        assert_eq!(escape_title("a|b"), r"a\|b");
    }

    #[test]
    fn named_ways_become_suggestions() {
        let response: OverpassResponse = serde_json::from_value(json!({
            "elements": [
                {
                    "id": 42,
                    "tags": {
                        "name": "Lake 22 Trail",
                        "sac_scale": "mountain_hiking",
                        "distance": "8.6 km"
                    },
                    "geometry": [
                        { "lat": 48.07, "lon": -121.75 },
                        { "lat": 48.08, "lon": -121.76 }
                    ]
                },
                { "id": 43, "tags": { "highway": "path" } },
                { "id": 44, "lat": 1.0, "lon": 2.0, "tags": { "name": "Something Else Entirely" } }
            ]
        }))
        .unwrap();

        let now = Utc::now();
        let suggestions = process_osm_results(&response, &query("lake 22 trail", "hiking"), now);
        assert_eq!(suggestions.len(), 1);

        let trail = &suggestions[0];
        assert_eq!(trail.id, "osm-42");
        assert_eq!(trail.source, TrailSource::Osm);
        assert_eq!(trail.location.coordinates, [48.07, -121.75]);
        assert_eq!(trail.distance, Some(8.6));
        assert_eq!(trail.difficulty.as_deref(), Some("mountain_hiking"));
        let waypoints = trail.waypoints.as_ref().unwrap();
        assert_eq!(waypoints[1].name, "Point 2");
        let metadata = trail.metadata.as_ref().unwrap();
        assert!(!metadata.verified);
        assert_eq!(metadata.last_updated, now);
    }

    #[test]
    fn element_without_geometry_uses_own_position() {
        let element: OverpassElement =
            serde_json::from_value(json!({ "id": 1, "lat": 46.5, "lon": 7.9 })).unwrap();
        assert_eq!(element_coordinates(&element), [46.5, 7.9]);
    }

    #[test]
    fn missing_elements_is_empty() {
        let response: OverpassResponse = serde_json::from_value(json!({ "version": 0.6 })).unwrap();
        assert!(process_osm_results(&response, &query("x", "hiking"), Utc::now()).is_empty());
    }
}
