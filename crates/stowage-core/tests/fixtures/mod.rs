#![allow(dead_code)]

//! Hand-built schemas shared by the integration tests.

use stowage_core::schema::app::{ColumnPrefix, Field, Model, ModelId};
use stowage_core::stmt::Type;

pub mod person {
    use super::{address, country};
    use stowage_core::schema::app::{self, *};
    use stowage_core::schema::{Builder, Schema};
    use stowage_core::stmt::Type;

    pub const PERSON: ModelId = ModelId(0);
    pub const ADDRESS: ModelId = ModelId(1);
    pub const COUNTRY: ModelId = ModelId(2);
    pub const TIMESTAMPS: ModelId = ModelId(3);

    /// Schema:
    ///   Person { id, name, address: Address, timestamps: Timestamps }
    ///   Address = embeddable { street, zip, city, country: Country }
    ///   Country = embeddable { name? }
    ///   Timestamps = embeddable { createdAt }
    pub fn app() -> app::Schema {
        app::Schema::from_models([
            Model::root(
                PERSON,
                "Person",
                vec![
                    Field::primitive(PERSON.field(0), "id", Type::I64).primary_key(),
                    Field::primitive(PERSON.field(1), "name", Type::String),
                    Field::embedded(PERSON.field(2), "address", ADDRESS, ColumnPrefix::Default),
                    Field::embedded(
                        PERSON.field(3),
                        "timestamps",
                        TIMESTAMPS,
                        ColumnPrefix::Default,
                    ),
                ],
            ),
            address(ADDRESS, COUNTRY),
            country(COUNTRY),
            Model::embeddable(
                TIMESTAMPS,
                "Timestamps",
                vec![Field::primitive(TIMESTAMPS.field(0), "createdAt", Type::String)],
            ),
        ])
        .unwrap()
    }

    pub fn schema() -> Schema {
        Builder::new().build(app()).unwrap()
    }
}

pub mod prefix {
    use stowage_core::schema::app::{self, *};
    use stowage_core::stmt::Type;

    pub const IDENTIFIER: ModelId = ModelId(0);
    pub const NESTED: ModelId = ModelId(1);
    pub const PERSON_WITH_PREFIX: ModelId = ModelId(2);
    pub const PERSON_EMPTY_PREFIX: ModelId = ModelId(3);
    pub const PERSON_PREFIX_FALSE: ModelId = ModelId(4);

    /// Schema:
    ///   Identifier = embeddable { id }
    ///   NestedIdentifiers = embeddable {
    ///       nestedWithPrefix: Identifier (prefix "foo_"),
    ///       nestedWithEmptyPrefix: Identifier (prefix ""),
    ///       nestedWithPrefixFalse: Identifier (no prefix),
    ///   }
    ///   PersonWithPrefix { id: Identifier ("foobar_"), nested: NestedIdentifiers ("bloo_") }
    ///   PersonEmptyPrefix { id: Identifier (""), nested: NestedIdentifiers ("") }
    ///   PersonPrefixFalse { id: Identifier (no prefix) }
    pub fn app() -> app::Schema {
        app::Schema::from_models([
            Model::embeddable(
                IDENTIFIER,
                "Identifier",
                vec![Field::primitive(IDENTIFIER.field(0), "id", Type::String)],
            ),
            Model::embeddable(
                NESTED,
                "NestedIdentifiers",
                vec![
                    Field::embedded(
                        NESTED.field(0),
                        "nestedWithPrefix",
                        IDENTIFIER,
                        ColumnPrefix::explicit("foo_"),
                    ),
                    Field::embedded(
                        NESTED.field(1),
                        "nestedWithEmptyPrefix",
                        IDENTIFIER,
                        ColumnPrefix::explicit(""),
                    ),
                    Field::embedded(
                        NESTED.field(2),
                        "nestedWithPrefixFalse",
                        IDENTIFIER,
                        ColumnPrefix::None,
                    ),
                ],
            ),
            Model::root(
                PERSON_WITH_PREFIX,
                "PersonWithPrefix",
                vec![
                    Field::embedded(
                        PERSON_WITH_PREFIX.field(0),
                        "id",
                        IDENTIFIER,
                        ColumnPrefix::explicit("foobar_"),
                    ),
                    Field::embedded(
                        PERSON_WITH_PREFIX.field(1),
                        "nested",
                        NESTED,
                        ColumnPrefix::explicit("bloo_"),
                    ),
                ],
            ),
            Model::root(
                PERSON_EMPTY_PREFIX,
                "PersonEmptyPrefix",
                vec![
                    Field::embedded(
                        PERSON_EMPTY_PREFIX.field(0),
                        "id",
                        IDENTIFIER,
                        ColumnPrefix::explicit(""),
                    ),
                    Field::embedded(
                        PERSON_EMPTY_PREFIX.field(1),
                        "nested",
                        NESTED,
                        ColumnPrefix::explicit(""),
                    ),
                ],
            ),
            Model::root(
                PERSON_PREFIX_FALSE,
                "PersonPrefixFalse",
                vec![Field::embedded(
                    PERSON_PREFIX_FALSE.field(0),
                    "id",
                    IDENTIFIER,
                    ColumnPrefix::None,
                )],
            ),
        ])
        .unwrap()
    }
}

pub mod nesting {
    use stowage_core::schema::app::{self, *};
    use stowage_core::stmt::Type;

    pub const NESTING_1: ModelId = ModelId(0);
    pub const NESTING_2: ModelId = ModelId(1);
    pub const NESTING_3: ModelId = ModelId(2);
    pub const NESTING_4: ModelId = ModelId(3);

    /// `Nesting1 -> Nesting2 -> Nesting3 -> Nesting4 -> Nesting1`, each
    /// through a field named `nested`.
    pub fn app() -> app::Schema {
        let ids = [NESTING_1, NESTING_2, NESTING_3, NESTING_4];

        app::Schema::from_models((0..4).map(|i| {
            let id = ids[i];
            let next = ids[(i + 1) % 4];

            Model::embeddable(
                id,
                &format!("Nesting{}", i + 1),
                vec![
                    Field::primitive(id.field(0), "id", Type::String),
                    Field::embedded(id.field(1), "nested", next, ColumnPrefix::Default),
                ],
            )
        }))
        .unwrap()
    }
}

pub mod inheritance {
    use super::{address, country};
    use stowage_core::schema::app::{self, *};
    use stowage_core::schema::{Builder, Schema};
    use stowage_core::stmt::Type;

    pub const ADDRESS: ModelId = ModelId(0);
    pub const COUNTRY: ModelId = ModelId(1);
    pub const ANIMAL: ModelId = ModelId(2);
    pub const DOG: ModelId = ModelId(3);
    pub const VEHICLE: ModelId = ModelId(4);
    pub const CAR: ModelId = ModelId(5);

    /// Schema:
    ///   Animal = mapped superclass { id, address: Address }
    ///   Dog extends Animal { name }
    ///   Vehicle = abstract root, discriminator column `t` { id, address: Address }
    ///   Car extends Vehicle, discriminator `v` { brand }
    pub fn app() -> app::Schema {
        app::Schema::from_models([
            address(ADDRESS, COUNTRY),
            country(COUNTRY),
            Model::mapped_superclass(
                ANIMAL,
                "Animal",
                vec![
                    Field::primitive(ANIMAL.field(0), "id", Type::I64).primary_key(),
                    Field::embedded(ANIMAL.field(1), "address", ADDRESS, ColumnPrefix::Default),
                ],
            ),
            Model::root(
                DOG,
                "Dog",
                vec![Field::primitive(DOG.field(0), "name", Type::String)],
            )
            .extends(ANIMAL),
            Model::root(
                VEHICLE,
                "Vehicle",
                vec![
                    Field::primitive(VEHICLE.field(0), "id", Type::I64).primary_key(),
                    Field::embedded(VEHICLE.field(1), "address", ADDRESS, ColumnPrefix::Default),
                ],
            )
            .into_abstract()
            .discriminator_column("t"),
            Model::root(
                CAR,
                "Car",
                vec![Field::primitive(CAR.field(0), "brand", Type::String)],
            )
            .extends(VEHICLE)
            .discriminator_value("v"),
        ])
        .unwrap()
    }

    pub fn schema() -> Schema {
        Builder::new().build(app()).unwrap()
    }
}

pub mod event {
    use stowage_core::schema::app::{self, *};
    use stowage_core::schema::{Builder, Schema};
    use stowage_core::stmt::Type;

    pub const EVENT: ModelId = ModelId(0);
    pub const DATE_INTERVAL: ModelId = ModelId(1);

    /// Schema:
    ///   Event { id, name, period: DateInterval?, submissions: DateInterval? }
    ///   DateInterval = embeddable { start, end? }
    pub fn app() -> app::Schema {
        app::Schema::from_models([
            Model::root(
                EVENT,
                "Event",
                vec![
                    Field::primitive(EVENT.field(0), "id", Type::I64).primary_key(),
                    Field::primitive(EVENT.field(1), "name", Type::String),
                    Field::embedded(EVENT.field(2), "period", DATE_INTERVAL, ColumnPrefix::Default)
                        .nullable(),
                    Field::embedded(
                        EVENT.field(3),
                        "submissions",
                        DATE_INTERVAL,
                        ColumnPrefix::Default,
                    )
                    .nullable(),
                ],
            ),
            Model::embeddable(
                DATE_INTERVAL,
                "DateInterval",
                vec![
                    Field::primitive(DATE_INTERVAL.field(0), "start", Type::String),
                    Field::primitive(DATE_INTERVAL.field(1), "end", Type::String).nullable(),
                ],
            ),
        ])
        .unwrap()
    }

    pub fn schema() -> Schema {
        Builder::new().build(app()).unwrap()
    }
}

fn address(id: ModelId, country: ModelId) -> Model {
    Model::embeddable(
        id,
        "Address",
        vec![
            Field::primitive(id.field(0), "street", Type::String),
            Field::primitive(id.field(1), "zip", Type::String),
            Field::primitive(id.field(2), "city", Type::String),
            Field::embedded(id.field(3), "country", country, ColumnPrefix::Default),
        ],
    )
}

fn country(id: ModelId) -> Model {
    Model::embeddable(
        id,
        "Country",
        vec![Field::primitive(id.field(0), "name", Type::String).nullable()],
    )
}
