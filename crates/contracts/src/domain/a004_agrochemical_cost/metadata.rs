use crate::shared::metadata::{
    Endpoints, FieldMetadata, NaturalKey, ResourceMetadata, ResourceUiMetadata,
};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("survey_origin", "Survey Origin").required(),
    FieldMetadata::text("survey_year", "Survey Year")
        .required()
        .placeholder("e.g. 2023"),
    FieldMetadata::text("agrochemical_item_name", "Agrochemical Item Name")
        .required()
        .searchable(),
    FieldMetadata::number("agrochemical_item_price_lc", "Price (LC)", "0.01").required(),
    FieldMetadata::text("agrochemical_item_price_unit", "Price Unit")
        .required()
        .placeholder("e.g. 1L bottle"),
];

pub static METADATA: ResourceMetadata = ResourceMetadata {
    key: "a004_agrochemical_cost",
    table_name: "appAgrochemicalCostData",
    ui: ResourceUiMetadata {
        element_name: "Agrochemical cost",
        list_name: "Agrochemical costs",
        title: "Agrochemical Cost Data",
        icon: Some("coins"),
    },
    endpoints: Endpoints {
        list: "/get_agrochemical_costs",
        create: "/add_agrochemical_cost",
        update: "/update_agrochemical_cost",
        delete: "/delete_agrochemical_cost",
        ingest: "/ingest_agrochemical_costs",
    },
    fields: FIELDS,
    natural_key: NaturalKey::Field("agrochemical_item_name"),
};
