use crate::shared::metadata::{
    Endpoints, FieldMetadata, NaturalKey, ResourceMetadata, ResourceUiMetadata,
};

pub const AGROCHEMICAL_TYPES: &[&str] = &["Bio-product", "Fungicide", "Herbicide", "Insecticide"];

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("agrochemical_name", "Agrochemical Name")
        .required()
        .searchable(),
    FieldMetadata::choice("agrochemical_type", "Agrochemical Type", AGROCHEMICAL_TYPES),
    FieldMetadata::number("active_ingredient_count", "Active Ingredient Count", "1").required(),
    FieldMetadata::text("active_ingredient_name", "Active Ingredient Name").required(),
    FieldMetadata::number(
        "active_ingredient_percentage",
        "Active Ingredient Percentage",
        "0.01",
    )
    .required(),
];

pub static METADATA: ResourceMetadata = ResourceMetadata {
    key: "a002_agrochemical",
    table_name: "appAgrochemicalData",
    ui: ResourceUiMetadata {
        element_name: "Agrochemical",
        list_name: "Agrochemicals",
        title: "Agrochemical Data",
        icon: Some("flask"),
    },
    endpoints: Endpoints {
        list: "/get_agrochemicals",
        create: "/add_agrochemical",
        update: "/update_agrochemical",
        delete: "/delete_agrochemical",
        ingest: "/ingest_agrochemicals",
    },
    fields: FIELDS,
    natural_key: NaturalKey::Field("agrochemical_name"),
};
