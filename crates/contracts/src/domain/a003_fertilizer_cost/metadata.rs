use crate::shared::metadata::{
    Endpoints, FieldMetadata, NaturalKey, ResourceMetadata, ResourceUiMetadata,
};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("survey_origin", "Survey Origin").required(),
    FieldMetadata::text("survey_year", "Survey Year")
        .required()
        .placeholder("e.g. 2023"),
    FieldMetadata::text("fertilizer_item_name", "Fertilizer Item Name")
        .required()
        .searchable(),
    FieldMetadata::number("fertilizer_item_price_lc", "Price (LC)", "0.01").required(),
    FieldMetadata::text("fertilizer_item_price_unit", "Price Unit")
        .required()
        .placeholder("e.g. 50kg bag"),
];

pub static METADATA: ResourceMetadata = ResourceMetadata {
    key: "a003_fertilizer_cost",
    table_name: "appFertilizerCostData",
    ui: ResourceUiMetadata {
        element_name: "Fertilizer cost",
        list_name: "Fertilizer costs",
        title: "Fertilizers Cost Data",
        icon: Some("coins"),
    },
    endpoints: Endpoints {
        list: "/get_fertilizer_costs",
        create: "/add_fertilizer_cost",
        update: "/update_fertilizer_cost",
        delete: "/delete_fertilizer_cost",
        ingest: "/ingest_fertilizer_costs",
    },
    fields: FIELDS,
    natural_key: NaturalKey::Field("fertilizer_item_name"),
};
