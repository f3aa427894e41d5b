use cribl_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

pub fn system_schema() -> ResourceSchema {
    ResourceSchema::new("system")
        .with_description("Build information of the Cribl leader")
        .attribute(
            AttributeSchema::new("hostname", AttributeType::String)
                .with_description("Hostname of the leader"),
        )
        .attribute(
            AttributeSchema::new("version", AttributeType::String)
                .with_description("Cribl Stream version"),
        )
        .attribute(
            AttributeSchema::new("branch", AttributeType::String)
                .with_description("Source branch of the build"),
        )
}
