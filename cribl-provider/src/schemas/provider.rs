use cribl_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

/// Attributes accepted in the document's `provider` block
pub fn provider_schema() -> ResourceSchema {
    ResourceSchema::new("provider")
        .with_description("Connection settings for the Cribl management API")
        .attribute(
            AttributeSchema::new("base_url", AttributeType::String)
                .with_description("Base URL of the leader, without /api/v1. Falls back to CRIBL_URL"),
        )
        .attribute(
            AttributeSchema::new("username", AttributeType::String)
                .with_description("Username used to log in"),
        )
        .attribute(
            AttributeSchema::new("password", AttributeType::String)
                .sensitive()
                .with_description("Password used to log in"),
        )
        .attribute(
            AttributeSchema::new("token", AttributeType::String)
                .sensitive()
                .with_description("Bearer token used instead of logging in"),
        )
        .attribute(
            AttributeSchema::new("workspace_id", AttributeType::String)
                .with_description("Cribl.Cloud workspace ID"),
        )
        .attribute(
            AttributeSchema::new("organization_id", AttributeType::String)
                .with_description("Cribl.Cloud organization ID"),
        )
        .attribute(
            AttributeSchema::new("timeout_secs", types::positive_int())
                .with_description("Request timeout in seconds"),
        )
}
