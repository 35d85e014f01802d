use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

/// Uttarakhand districts as (2011 census code, name)
pub const UTTARAKHAND: [(i64, &str); 13] = [
    (56, "Uttarkashi"),
    (57, "Chamoli"),
    (58, "Rudraprayag"),
    (59, "Tehri Garhwal"),
    (60, "Dehradun"),
    (61, "Garhwal"),
    (62, "Pithoragarh"),
    (63, "Bageshwar"),
    (64, "Almora"),
    (65, "Champawat"),
    (66, "Nainital"),
    (67, "Udham Singh Nagar"),
    (68, "Hardwar"),
];

/// A GeoJSON feature carrying the given properties and a dummy polygon
#[must_use]
pub fn feature(properties: Value) -> Value {
    json!({
        "type": "Feature",
        "properties": properties,
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[78.0, 30.0], [78.1, 30.0], [78.1, 30.1], [78.0, 30.0]]]
        }
    })
}

/// Write a feature collection to `dir/name`
pub fn write_geojson(dir: &Path, name: &str, features: Vec<Value>) -> PathBuf {
    let path = dir.join(name);
    let collection = json!({ "type": "FeatureCollection", "features": features });
    fs::write(&path, serde_json::to_vec_pretty(&collection).unwrap()).unwrap();
    path
}

/// Boundary file with every Uttarakhand district, codes stored as padded strings
pub fn uttarakhand_fixture(dir: &Path) -> PathBuf {
    let features = UTTARAKHAND
        .iter()
        .map(|(code, name)| {
            feature(json!({
                "dtcode11": format!("{code:03}"),
                "dtname": format!(" {name} "),
                "stname": "UTTARAKHAND",
            }))
        })
        .collect();
    write_geojson(dir, "UTTARAKHAND_DISTRICTS.geojson", features)
}

/// Header and data rows of a CSV file without quoted fields
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let text = fs::read_to_string(path).unwrap();
    let mut lines = text.lines();
    let header = lines
        .next()
        .unwrap()
        .split(',')
        .map(str::to_string)
        .collect();
    let rows = lines
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect();
    (header, rows)
}
