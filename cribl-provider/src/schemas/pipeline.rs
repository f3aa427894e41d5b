use cribl_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

pub fn pipeline_schema() -> ResourceSchema {
    ResourceSchema::new("pipeline")
        .with_description("Processing pipeline")
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .required()
                .with_description("Unique ID of the pipeline"),
        )
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .with_description("Description of the pipeline"),
        )
        .attribute(
            AttributeSchema::new("timeout_ms", AttributeType::Int)
                .required()
                .with_description("Time (in ms) to wait for an async function to complete processing of a data item"),
        )
        .attribute(
            AttributeSchema::new("tags", types::string_list())
                .with_description("Tags for filtering and grouping"),
        )
        .attribute(
            AttributeSchema::new("output", AttributeType::String)
                .required()
                .with_description("Output to send events to when processed by this pipeline"),
        )
}

/// Read-only listing of every pipeline on the leader
pub fn pipelines_schema() -> ResourceSchema {
    let entry = AttributeType::Struct {
        name: "PipelineSummary".to_string(),
        fields: vec![
            AttributeSchema::new("id", AttributeType::String)
                .required()
                .with_description("Pipeline ID"),
            AttributeSchema::new("timeout_ms", AttributeType::Int)
                .with_description("Async function timeout in milliseconds"),
        ],
    };

    ResourceSchema::new("pipelines")
        .with_description("All pipelines configured on the leader")
        .attribute(
            AttributeSchema::new("count", AttributeType::Int)
                .with_description("Number of pipelines returned"),
        )
        .attribute(
            AttributeSchema::new("pipelines", AttributeType::List(Box::new(entry)))
                .with_description("Pipeline IDs and timeouts"),
        )
}
