//! Example: ordered group-by over keyed records.
//!
//! Run with:
//! `cargo run --example group_by`

use std::collections::BTreeMap;

use algo_patterns::group_by;

fn record(kind: &str, name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("kind".to_string(), kind.to_string()),
        ("name".to_string(), name.to_string()),
    ])
}

fn main() {
    let records = vec![
        record("fruit", "apple"),
        record("vegetable", "leek"),
        record("fruit", "pear"),
        record("grain", "rye"),
        record("vegetable", "kale"),
    ];

    for (kind, members) in group_by(records, "kind") {
        let names: Vec<&str> = members.iter().map(|r| r["name"].as_str()).collect();
        println!("{kind}: {names:?}");
    }
}
