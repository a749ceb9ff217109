use crate::shared::metadata::{
    Endpoints, FieldMetadata, NaturalKey, ResourceMetadata, ResourceUiMetadata,
};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("reported_unit_name", "Reported Unit Name")
        .required()
        .searchable(),
    FieldMetadata::number("reported_unit_amount", "Reported Unit Amount", "0.001"),
    FieldMetadata::text("reported_unit_type", "Reported Unit Type").placeholder("e.g. kg"),
];

pub static METADATA: ResourceMetadata = ResourceMetadata {
    key: "a007_unit_conversion",
    table_name: "appUnitConversionData",
    ui: ResourceUiMetadata {
        element_name: "Unit conversion",
        list_name: "Unit conversions",
        title: "Unit Conversion Data",
        icon: Some("scale"),
    },
    endpoints: Endpoints {
        list: "/get_unit_conversion_data",
        create: "/add_unit_conversion_data",
        update: "/update_unit_conversion_data",
        delete: "/delete_unit_conversion_data",
        ingest: "/ingest_unit_conversion_data",
    },
    fields: FIELDS,
    natural_key: NaturalKey::Field("reported_unit_name"),
};
