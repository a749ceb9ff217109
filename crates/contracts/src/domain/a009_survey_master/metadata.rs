use crate::shared::metadata::{
    Endpoints, FieldMetadata, NaturalKey, ResourceMetadata, ResourceUiMetadata,
};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("survey_origin", "Survey Origin")
        .required()
        .searchable(),
    FieldMetadata::text("survey_coffee_type", "Survey Coffee Type")
        .required()
        .searchable(),
    FieldMetadata::text("survey_supply_chain", "Survey Supply Chain")
        .required()
        .searchable(),
    FieldMetadata::text("survey_year", "Survey Year")
        .required()
        .searchable()
        .placeholder("e.g. 2023"),
    FieldMetadata::number(
        "total_number_of_farmers_in_the_supply_chain",
        "Total Farmers",
        "1",
    )
    .required(),
    FieldMetadata::number(
        "number_of_survey_plots_part_of_deforestation_analysis",
        "Survey Plots in Deforestation Analysis",
        "1",
    )
    .required(),
];

pub static METADATA: ResourceMetadata = ResourceMetadata {
    key: "a009_survey_master",
    table_name: "appSurveyMasterData",
    ui: ResourceUiMetadata {
        element_name: "Survey master record",
        list_name: "Survey master data",
        title: "Survey Master Data",
        icon: Some("clipboard"),
    },
    endpoints: Endpoints {
        list: "/get_survey_master_data",
        create: "/add_survey_master_data",
        update: "/update_survey_master_data",
        delete: "/delete_survey_master_data",
        ingest: "/ingest_survey_master_data",
    },
    fields: FIELDS,
    natural_key: NaturalKey::Composite {
        target: "survey_id",
        parts: &[
            "survey_origin",
            "survey_year",
            "survey_coffee_type",
            "survey_supply_chain",
        ],
    },
};
