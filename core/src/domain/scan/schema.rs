use crate::domain::{llm::schema::ResponseSchema, scan::entities::WarningLevel};

/// Returns the declared response shape for product image analysis
pub fn get_scan_result_schema() -> ResponseSchema {
    ResponseSchema::object([
        ("isSafe", ResponseSchema::Boolean),
        ("productName", ResponseSchema::String),
        ("reasoning", ResponseSchema::String),
        ("nutritionalAnalysis", ResponseSchema::String),
        (
            "warningLevel",
            ResponseSchema::enumeration(WarningLevel::ALL.map(|level| level.as_str())),
        ),
    ])
    .with_optional("nutritionalAnalysis")
}
