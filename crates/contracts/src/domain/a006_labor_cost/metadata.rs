use crate::shared::metadata::{
    Endpoints, FieldMetadata, NaturalKey, ResourceMetadata, ResourceUiMetadata,
};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("survey_origin", "Survey Origin").required(),
    FieldMetadata::text("survey_year", "Survey Year")
        .required()
        .placeholder("e.g. 2023"),
    FieldMetadata::text("laborer_activity_name", "Activity Name")
        .required()
        .searchable(),
    FieldMetadata::number("laborer_activity_cost_per_day", "Cost per Day (LC)", "0.01")
        .required(),
];

pub static METADATA: ResourceMetadata = ResourceMetadata {
    key: "a006_labor_cost",
    table_name: "appLaborCostData",
    ui: ResourceUiMetadata {
        element_name: "Labor cost",
        list_name: "Labor costs",
        title: "Labor Cost Data",
        icon: Some("users"),
    },
    endpoints: Endpoints {
        list: "/get_labor_costs",
        create: "/add_labor_cost",
        update: "/update_labor_cost",
        delete: "/delete_labor_cost",
        ingest: "/ingest_labor_costs",
    },
    fields: FIELDS,
    natural_key: NaturalKey::Field("laborer_activity_name"),
};
