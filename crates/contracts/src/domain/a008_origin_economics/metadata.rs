use crate::shared::metadata::{
    Endpoints, FieldMetadata, NaturalKey, ResourceMetadata, ResourceUiMetadata,
};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("survey_origin", "Survey Origin")
        .required()
        .searchable(),
    FieldMetadata::text("survey_year", "Survey Year")
        .required()
        .searchable()
        .placeholder("e.g. 2023"),
    FieldMetadata::number(
        "origin_living_income_benchmark_lc",
        "Living Income Benchmark (LC)",
        "0.01",
    )
    .required()
    .searchable(),
    FieldMetadata::text("origin_currency", "Currency")
        .required()
        .searchable()
        .placeholder("e.g. UGX"),
    FieldMetadata::number("origin_currency_to_usd", "Currency to USD", "0.0001")
        .required()
        .searchable(),
];

pub static METADATA: ResourceMetadata = ResourceMetadata {
    key: "a008_origin_economics",
    table_name: "appOriginEconomicsData",
    ui: ResourceUiMetadata {
        element_name: "Origin economics entry",
        list_name: "Origin economics data",
        title: "Origin Economics Data",
        icon: Some("globe"),
    },
    endpoints: Endpoints {
        list: "/get_origin_economics_data",
        create: "/add_origin_economics_data",
        update: "/update_origin_economics_data",
        delete: "/delete_origin_economics_data",
        ingest: "/ingest_origin_economics_data",
    },
    fields: FIELDS,
    natural_key: NaturalKey::Composite {
        target: "survey_year_origin",
        parts: &["survey_year", "survey_origin"],
    },
};
