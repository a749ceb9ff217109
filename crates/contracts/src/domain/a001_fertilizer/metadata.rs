use crate::shared::metadata::{
    Endpoints, FieldMetadata, NaturalKey, ResourceMetadata, ResourceUiMetadata,
};

pub const FERTILIZER_TYPES: &[&str] = &[
    "No fertilizer",
    "Organic fertilizer",
    "Synthetic fertilizer",
    "Crop residues",
    "NPK fertilizer",
];

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("fertilizer_name", "Fertilizer Name")
        .required()
        .searchable(),
    FieldMetadata::number("n_content", "Nitrogen Content", "0.001"),
    FieldMetadata::number("p_content", "Phosphorus Content", "0.001"),
    FieldMetadata::number("k_content", "Potassium Content", "0.001"),
    FieldMetadata::choice("f_type", "Fertilizer Type", FERTILIZER_TYPES),
];

pub static METADATA: ResourceMetadata = ResourceMetadata {
    key: "a001_fertilizer",
    table_name: "appFertilizerData",
    ui: ResourceUiMetadata {
        element_name: "Fertilizer",
        list_name: "Fertilizers",
        title: "Fertilizers Data",
        icon: Some("leaf"),
    },
    endpoints: Endpoints {
        list: "/get_fertilizers",
        create: "/add_fertilizer",
        update: "/update_fertilizer",
        delete: "/delete_fertilizer",
        ingest: "/ingest_fertilizers",
    },
    fields: FIELDS,
    natural_key: NaturalKey::Field("fertilizer_name"),
};
