mod fixtures;

use fixtures::inheritance::*;
use pretty_assertions::assert_eq;
use std_util::prelude::*;
use stowage_core::stmt::{Row, Value};

fn address(street: &str) -> Value {
    Value::record_from_vec(vec![
        street.into(),
        "12345".into(),
        "Berlin".into(),
        Value::record_from_vec(vec!["Germany".into()]),
    ])
}

// ---------------------------------------------------------------------------
// Mapped superclass
// ---------------------------------------------------------------------------

#[test]
fn subclass_has_inherited_embedded_fields() {
    let schema = schema();

    assert!(schema.has_field(DOG, "address.street"));
    assert!(schema.has_field(DOG, "address.country.name"));
    assert!(schema.has_field(DOG, "address"));
    assert!(!schema.has_field(DOG, "address.asdfasdf"));
    assert_eq!(
        schema.column_name(DOG, "address.street").unwrap(),
        "address_street"
    );
}

#[test]
fn inherited_fields_come_first() {
    let schema = schema();
    let names = schema
        .mapping_for(DOG)
        .fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>();

    assert_eq!(names, ["id", "address", "name"]);
    assert_eq!(schema.table_for(DOG).unwrap().name, "dogs");
}

#[test]
fn mapped_superclass_is_not_queryable() {
    let schema = schema();

    assert!(!schema.has_field(ANIMAL, "address.street"));

    let err = assert_err!(schema.to_row(ANIMAL, &Default::default()));
    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: mapped superclass `Animal` has no mapping of its own"
    );
}

// ---------------------------------------------------------------------------
// Single-table inheritance
// ---------------------------------------------------------------------------

#[test]
fn subclass_shares_root_table() {
    let schema = schema();

    let vehicles = schema.table_for(VEHICLE).unwrap();
    let cars = schema.table_for(CAR).unwrap();
    assert_eq!(vehicles.id, cars.id);
    assert_eq!(vehicles.name, "vehicles");

    let columns = vehicles
        .columns
        .iter()
        .map(|column| column.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        columns,
        [
            "t",
            "id",
            "address_street",
            "address_zip",
            "address_city",
            "address_country_name",
            "brand"
        ]
    );

    // Only cars write `brand`
    assert!(vehicles.column("brand").unwrap().nullable);
    assert!(!vehicles.column("address_street").unwrap().nullable);
}

#[test]
fn subclass_inherits_root_embeddings() {
    let schema = schema();

    assert!(schema.has_field(CAR, "address.country.name"));
    assert_eq!(
        schema.column_name(CAR, "address.city").unwrap(),
        "address_city"
    );
}

#[test]
fn subclass_writes_discriminator() {
    let schema = schema();
    let car = Value::record_from_vec(vec![1_i64.into(), address("Unter den Linden"), "Tesla".into()]);

    let row = assert_ok!(schema.to_row(CAR, car.expect_record()));
    assert_eq!(row.get("t"), &Value::from("v"));
    assert_eq!(row.columns().next(), Some("t"));
    assert_eq!(row.get("address_street"), &Value::from("Unter den Linden"));

    let hydrated = assert_ok!(schema.from_row(CAR, &row));
    assert_eq!(&hydrated, car.expect_record());
}

#[test]
fn abstract_root_writes_no_discriminator() {
    let schema = schema();
    let vehicle = Value::record_from_vec(vec![1_i64.into(), address("Main St")]);

    let row = assert_ok!(schema.to_row(VEHICLE, vehicle.expect_record()));
    assert!(!row.contains("t"));

    let discriminator = schema.mapping_for(VEHICLE).discriminator.as_ref().unwrap();
    assert_eq!(discriminator.column, 0);
    assert_eq!(discriminator.value, None);
}

#[test]
fn hydrating_ignores_discriminator() {
    let schema = schema();
    let row: Row = [
        ("t", Value::from("v")),
        ("id", Value::from(7_i64)),
        ("address_street", Value::from("Elm")),
        ("address_zip", Value::from("1")),
        ("address_city", Value::from("Oslo")),
        ("address_country_name", Value::Null),
        ("brand", Value::from("Volvo")),
    ]
    .into_iter()
    .collect();

    let car = assert_ok!(schema.from_row(CAR, &row));
    assert_eq!(car.len(), 3);
    assert_eq!(car[2], Value::from("Volvo"));
}
