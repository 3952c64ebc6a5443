//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so tests agree on what a "device" looks like.

#![doc(hidden)]

use crate::types::Record;

/// A device record with an id and a device id.
pub fn make_device(id: &str, device_id: &str) -> Record {
    Record::new().with("id", id).with("deviceId", device_id)
}

/// A sensor record with a type and an optional zone.
pub fn make_sensor(id: &str, kind: &str, zone: Option<&str>) -> Record {
    let record = Record::new().with("id", id).with("type", kind);
    match zone {
        Some(zone) => record.with("zone", zone),
        None => record.without("zone"),
    }
}

/// A person record.
pub fn make_person(id: &str, name: &str, role: &str) -> Record {
    Record::new().with("id", id).with("name", name).with("role", role)
}

/// The three-device fleet used throughout the ranking tests.
pub fn device_fleet() -> Vec<Record> {
    vec![
        make_device("1", "DEV-001"),
        make_device("2", "DEV-002"),
        make_device("3", "DEV-100"),
    ]
}

/// A mixed facility: sites, zones, devices, people and a rule.
pub fn facility() -> Vec<Record> {
    vec![
        Record::new().with("id", "site-1").with("name", "Headquarters").with("city", "Oslo"),
        Record::new().with("id", "site-2").with("name", "North Warehouse").with("city", "Bergen"),
        Record::new().with("id", "zone-1").with("name", "Main Lobby").with("site", "Headquarters"),
        Record::new()
            .with("id", "zone-2")
            .with("name", "Loading Dock")
            .with("site", "North Warehouse"),
        make_device("dev-1", "DEV-001"),
        make_device("dev-2", "DEV-002"),
        make_sensor("sensor-1", "motion", Some("Main Lobby")),
        make_sensor("sensor-2", "door", None),
        make_person("person-1", "Ingrid Halvorsen", "Facility manager"),
        make_person("person-2", "Lars Berg", "Security"),
        Record::new().with("id", "rule-1").with("name", "After-hours motion alert").without("site"),
    ]
}

/// Synthetic fleet of `n` devices for parallel and benchmark runs.
pub fn synthetic_fleet(n: usize) -> Vec<Record> {
    const ZONES: &[&str] = &["Main Lobby", "Loading Dock", "Server Room", "North Wing", "Parking"];
    const KINDS: &[&str] = &["motion", "door", "camera", "temperature", "badge reader"];

    (0..n)
        .map(|i| {
            Record::new()
                .with("id", i.to_string())
                .with("deviceId", format!("DEV-{:04}", i))
                .with("type", KINDS[i % KINDS.len()])
                .with("zone", ZONES[(i / 3) % ZONES.len()])
        })
        .collect()
}
