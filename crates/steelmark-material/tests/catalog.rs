use std::collections::HashSet;
use steelmark_base::Error;
use steelmark_material::{
    Material, MaterialRecord, STEEL_S235, STEEL_S355, SteelGrade, catalog, lookup,
};

#[test]
fn s355_reads_back_declared_values() {
    let record = SteelGrade::S355.record();
    assert_eq!(record.type_identifier(), "SteelS355");
    assert_eq!(record.density(), 7800.0);
    assert_eq!(record.strength_grade(), "S355");
}

#[test]
fn s235_reads_back_declared_values() {
    let record = MaterialRecord::new("SteelS235", 7800.0, "S235");
    assert_eq!(record.type_identifier(), "SteelS235");
    assert_eq!(record.density(), 7800.0);
    assert_eq!(record.strength_grade(), "S235");
    assert_eq!(record, STEEL_S235);
}

#[test]
fn type_identifiers_are_unique() {
    let tags: HashSet<&str> = catalog().iter().map(|r| r.type_identifier()).collect();
    assert_eq!(tags.len(), catalog().len());
    assert_eq!(catalog().len(), SteelGrade::ALL.len());
}

#[test]
fn repeated_reads_are_stable() {
    let record = lookup("SteelS355").expect("built-in grade");
    for _ in 0..3 {
        assert_eq!(record.density(), STEEL_S355.density());
        assert_eq!(record.strength_grade(), "S355");
    }
    assert!(std::ptr::eq(record, SteelGrade::S355.record()));
}

#[test]
fn unknown_tag_is_rejected() {
    assert!(lookup("SteelS275").is_none());
    match "SteelS275".parse::<SteelGrade>() {
        Err(Error::UnknownMaterial(tag)) => assert_eq!(tag, "SteelS275"),
        other => panic!("unexpected parse result: {other:?}"),
    }
}

#[test]
fn grades_round_trip_through_display() -> Result<(), Error> {
    for grade in SteelGrade::ALL {
        assert_eq!(grade.to_string().parse::<SteelGrade>()?, grade);
    }
    Ok(())
}

fn describe(material: &dyn Material) -> String {
    format!(
        "{}:{}:{}",
        material.type_identifier(),
        material.strength_grade(),
        material.density()
    )
}

#[test]
fn grade_and_record_behave_alike_as_materials() {
    for grade in SteelGrade::ALL {
        assert_eq!(describe(&grade), describe(grade.record()));
    }
    assert_eq!(describe(&SteelGrade::S235), "SteelS235:S235:7800");
}

#[test]
fn record_uses_interchange_field_names() -> Result<(), serde_json::Error> {
    let value = serde_json::to_value(&STEEL_S355)?;
    assert_eq!(value["speckle_type"], "SteelS355");
    assert_eq!(value["density"], 7800.0);
    assert_eq!(value["strength"], "S355");
    assert_eq!(value.as_object().map(|o| o.len()), Some(3));
    Ok(())
}

#[test]
fn grade_serializes_as_type_identifier() -> Result<(), serde_json::Error> {
    assert_eq!(serde_json::to_string(&SteelGrade::S235)?, "\"SteelS235\"");
    Ok(())
}
