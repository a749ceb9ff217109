use crate::shared::metadata::{
    Endpoints, FieldMetadata, NaturalKey, ResourceMetadata, ResourceUiMetadata,
};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("survey_origin", "Survey Origin").required(),
    FieldMetadata::text("survey_year", "Survey Year")
        .required()
        .placeholder("e.g. 2023"),
    FieldMetadata::text("seedling_item_name", "Seedling Item Name")
        .required()
        .searchable(),
    FieldMetadata::number("seedling_item_price_lc", "Price (LC)", "0.01").required(),
];

pub static METADATA: ResourceMetadata = ResourceMetadata {
    key: "a005_seedling_cost",
    table_name: "appSeedlingCostData",
    ui: ResourceUiMetadata {
        element_name: "Seedling cost",
        list_name: "Seedling costs",
        title: "Seedling Cost Data",
        icon: Some("sprout"),
    },
    endpoints: Endpoints {
        list: "/get_seedling_costs",
        create: "/add_seedling_cost",
        update: "/update_seedling_cost",
        delete: "/delete_seedling_cost",
        ingest: "/ingest_seedling_costs",
    },
    fields: FIELDS,
    natural_key: NaturalKey::Field("seedling_item_name"),
};
