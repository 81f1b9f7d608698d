//! Rule table persistence: JSON export, import and file round trips.

use anyhow::Result;
use wordform::{Normalizer, RuleTable};

#[test]
fn json_export_is_sorted_and_stable() -> Result<()> {
    let mut table = RuleTable::new();
    table.add("zulu", "Z")?;
    table.add("alpha", "A")?;
    table.add("mike", "M")?;

    let json = table.to_json()?;
    let alpha = json.find("alpha").unwrap();
    let mike = json.find("mike").unwrap();
    let zulu = json.find("zulu").unwrap();
    assert!(alpha < mike && mike < zulu);

    // Exporting twice yields identical text.
    assert_eq!(json, table.to_json()?);
    Ok(())
}

#[test]
fn json_file_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("rules.json");

    let mut table = RuleTable::new();
    table.add("gee pee tee", "GPT")?;
    table.add("doctor", "Dr.")?;
    table.save_json(&path)?;

    let loaded = RuleTable::load_json(&path)?;
    assert_eq!(loaded.count(), 2);
    assert_eq!(loaded.get("GEE PEE TEE"), Some("GPT"));
    assert_eq!(loaded.get("doctor"), Some("Dr."));
    Ok(())
}

#[test]
fn loaded_rules_drive_the_normalizer() -> Result<()> {
    let json = r#"[
        {"spoken": "new york city", "written": "NYC"},
        {"spoken": "kay pop", "written": "K-pop"}
    ]"#;
    let table = RuleTable::from_json(json)?;

    let mut n = Normalizer::new();
    *n.rules_mut() = table;
    assert_eq!(
        n.normalize_sentence("we flew to new york city for kay pop night"),
        "we flew to NYC for K-pop night"
    );
    Ok(())
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.json");
    assert!(RuleTable::load_json(&path).is_err());
}

#[test]
fn malformed_json_surfaces_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(RuleTable::load_json(&path).is_err());
}
