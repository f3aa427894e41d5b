//! Resource type definitions for the Cribl provider

use cribl_core::provider::ResourceType;
use cribl_core::schema::ResourceSchema;

use crate::schemas;

macro_rules! define_resource_type {
    ($name:ident, $type_name:expr, $schema:path) => {
        define_resource_type!($name, $type_name, $schema, false);
    };
    ($name:ident, $type_name:expr, $schema:path, $data_source:expr) => {
        pub struct $name;
        impl ResourceType for $name {
            fn name(&self) -> &'static str {
                $type_name
            }
            fn schema(&self) -> ResourceSchema {
                $schema()
            }
            fn is_data_source(&self) -> bool {
                $data_source
            }
        }
    };
}

define_resource_type!(PipelineType, "pipeline", schemas::pipeline_schema);
define_resource_type!(OutputS3Type, "output_s3", schemas::output_s3_schema);
define_resource_type!(InputDatagenType, "input_datagen", schemas::input_datagen_schema);
define_resource_type!(SystemType, "system", schemas::system_schema, true);
define_resource_type!(PipelinesType, "pipelines", schemas::pipelines_schema, true);

/// Returns all resource types and data sources supported by this provider
pub fn resource_types() -> Vec<Box<dyn ResourceType>> {
    vec![
        Box::new(PipelineType),
        Box::new(OutputS3Type),
        Box::new(InputDatagenType),
        Box::new(SystemType),
        Box::new(PipelinesType),
    ]
}

pub fn find_resource_type(name: &str) -> Option<Box<dyn ResourceType>> {
    resource_types().into_iter().find(|t| t.name() == name)
}
