use cribl_client::models::InputDatagenType;
use cribl_core::resource::Value;
use cribl_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

fn sample_type() -> AttributeType {
    AttributeType::Struct {
        name: "DatagenSample".to_string(),
        fields: vec![
            AttributeSchema::new("events_per_sec", types::positive_int())
                .required()
                .with_description("Maximum number of events to generate per second per worker node"),
            AttributeSchema::new("sample", AttributeType::String)
                .required()
                .with_description("Name of the datagen sample file"),
        ],
    }
}

pub fn input_datagen_schema() -> ResourceSchema {
    ResourceSchema::new("input_datagen")
        .with_description("Data generator source replaying sample files")
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .required()
                .with_description("Unique ID for this input"),
        )
        .attribute(
            AttributeSchema::new("type", types::enum_of(InputDatagenType::VARIANTS))
                .with_default(Value::from("datagen"))
                .with_description("Input type"),
        )
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .with_description("Description of this input"),
        )
        .attribute(
            AttributeSchema::new("environment", AttributeType::String)
                .with_description("Optionally, enable this config only on a specified Git branch"),
        )
        .attribute(
            AttributeSchema::new("samples", AttributeType::List(Box::new(sample_type())))
                .with_description("Sample files to replay and their rates"),
        )
        .attribute(
            AttributeSchema::new("disabled", AttributeType::Bool)
                .with_description("Whether the input is disabled"),
        )
        .attribute(
            AttributeSchema::new("pq_enabled", AttributeType::Bool)
                .with_description("Use a disk queue to minimize data loss when connected services block"),
        )
        .attribute(
            AttributeSchema::new("send_to_routes", AttributeType::Bool)
                .with_description("Send events to normal routing and event processing instead of a QuickConnect destination"),
        )
        .attribute(
            AttributeSchema::new("pipeline", AttributeType::String)
                .with_description("Pipeline to process data from this input before sending it through the routes"),
        )
}
