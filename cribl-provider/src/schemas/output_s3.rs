//! S3 output (destination) schema

use cribl_client::models::{
    AwsAuthenticationMethod, Compress, CompressionLevel, Format, ObjectAcl, OnBackpressure,
    OnDiskFullBackpressure, OutputS3Type, ParquetDataPageVersion, ParquetVersion,
    ServerSideEncryption, SignatureVersion, StorageClass,
};
use cribl_core::resource::Value;
use cribl_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

pub fn output_s3_schema() -> ResourceSchema {
    ResourceSchema::new("output_s3")
        .with_description(
            "Amazon S3 destination writing staged, optionally compressed files to a bucket",
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .required()
                .with_description("Unique ID for this output"),
        )
        .attribute(
            AttributeSchema::new("default_id", AttributeType::String)
                .required()
                .write_only()
                .with_description("ID of the default output this one is declared against"),
        )
        .attribute(
            AttributeSchema::new("type", types::enum_of(OutputS3Type::VARIANTS))
                .with_default(Value::from("s3"))
                .with_description("Output type"),
        )
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .with_description("Description of this output"),
        )
        .attribute(
            AttributeSchema::new("environment", AttributeType::String)
                .with_description("Optionally, enable this config only on a specified Git branch"),
        )
        .attribute(
            AttributeSchema::new("pipeline", AttributeType::String)
                .with_description("Pipeline to process data before sending out to this output"),
        )
        .attribute(
            AttributeSchema::new("stream_tags", types::string_list())
                .with_description("Tags for filtering and grouping in Cribl"),
        )
        .attribute(
            AttributeSchema::new("system_fields", types::string_list())
                .with_description("Fields to automatically add to events, such as cribl_pipe. Supports wildcards."),
        )
        .attribute(
            AttributeSchema::new("bucket", AttributeType::String)
                .required()
                .with_description("Name of the destination S3 bucket"),
        )
        .attribute(
            AttributeSchema::new("region", AttributeType::String)
                .with_description("Region where the S3 bucket is located"),
        )
        .attribute(
            AttributeSchema::new("endpoint", AttributeType::String)
                .with_description("S3 service endpoint. If empty, defaults to AWS' Region-specific endpoint. Otherwise, it must point to S3-compatible endpoint"),
        )
        .attribute(
            AttributeSchema::new("dest_path", AttributeType::String)
                .with_description("Prefix to append to files before uploading"),
        )
        .attribute(
            AttributeSchema::new("stage_path", AttributeType::String)
                .required()
                .with_description("Filesystem location in which to buffer files, before compressing and moving to final destination"),
        )
        .attribute(
            AttributeSchema::new("add_id_to_stage_path", AttributeType::Bool)
                .with_description("Append output's ID to staging location"),
        )
        .attribute(
            AttributeSchema::new("remove_empty_dirs", AttributeType::Bool)
                .with_description("Remove empty staging directories after moving files"),
        )
        .attribute(
            AttributeSchema::new("empty_dir_cleanup_sec", AttributeType::Float)
                .with_description("How frequently, in seconds, to clean up empty directories when 'Remove empty staging dirs' is enabled"),
        )
        .attribute(
            AttributeSchema::new("base_file_name", AttributeType::String)
                .with_description("JavaScript expression to define the output filename prefix"),
        )
        .attribute(
            AttributeSchema::new("file_name_suffix", AttributeType::String)
                .with_description("JavaScript expression to define the output filename suffix"),
        )
        .attribute(
            AttributeSchema::new("partition_expr", AttributeType::String)
                .with_description("JavaScript expression defining how files are partitioned and organized"),
        )
        .attribute(
            AttributeSchema::new("partitioning_fields", types::string_list())
                .with_description("Fields to use for partitioning"),
        )
        .attribute(
            AttributeSchema::new("header_line", AttributeType::String)
                .with_description("If set, this line will be written to the beginning of each output file"),
        )
        .attribute(
            AttributeSchema::new("format", types::enum_of(Format::VARIANTS))
                .with_description("Format of the output data"),
        )
        .attribute(
            AttributeSchema::new("compress", types::enum_of(Compress::VARIANTS))
                .with_description("Choose data compression format to apply before moving files to final destination"),
        )
        .attribute(
            AttributeSchema::new("compression_level", types::enum_of(CompressionLevel::VARIANTS))
                .with_description("Compression level to apply before moving files to final destination"),
        )
        .attribute(
            AttributeSchema::new("max_file_size_mb", AttributeType::Float)
                .with_description("Maximum uncompressed output file size. Files of this size will be closed and moved to final output location"),
        )
        .attribute(
            AttributeSchema::new("max_file_open_time_sec", AttributeType::Float)
                .with_description("Maximum amount of time to write to a file. Files open for longer than this will be closed and moved to final output location"),
        )
        .attribute(
            AttributeSchema::new("max_file_idle_time_sec", AttributeType::Float)
                .with_description("Maximum amount of time to keep inactive files open. Files open for longer than this will be closed and moved to final output location"),
        )
        .attribute(
            AttributeSchema::new("max_open_files", AttributeType::Float)
                .with_description("Maximum number of files to keep open concurrently. When exceeded, Cribl will close the oldest open files and move them to the final output location"),
        )
        .attribute(
            AttributeSchema::new("max_concurrent_file_parts", AttributeType::Float)
                .with_description("Maximum number of parts to upload in parallel per file. Minimum part size is 5MB"),
        )
        .attribute(
            AttributeSchema::new("write_high_water_mark", AttributeType::Float)
                .with_description("Buffer size used to write to a file"),
        )
        .attribute(
            AttributeSchema::new("deadletter_enabled", AttributeType::Bool)
                .with_description("If a file fails to move to its final destination after the maximum number of retries, dead-letter it to prevent further errors"),
        )
        .attribute(
            AttributeSchema::new("deadletter_path", AttributeType::String)
                .with_description("Storage location for files that fail to reach their final destination after maximum retries are exceeded"),
        )
        .attribute(
            AttributeSchema::new("max_retry_num", AttributeType::Float)
                .with_description("The maximum number of times a file will attempt to move to its final destination before being dead-lettered"),
        )
        .attribute(
            AttributeSchema::new("max_closing_files_to_backpressure", AttributeType::Float)
                .with_description("Maximum number of files that can be waiting for upload before backpressure is applied"),
        )
        .attribute(
            AttributeSchema::new("on_backpressure", types::enum_of(OnBackpressure::VARIANTS))
                .with_description("Whether to block or drop events when all receivers are exerting backpressure"),
        )
        .attribute(
            AttributeSchema::new("on_disk_full_backpressure", types::enum_of(OnDiskFullBackpressure::VARIANTS))
                .with_description("Whether to block or drop events when disk space is below the global 'Min free disk space' limit"),
        )
        .attribute(
            AttributeSchema::new("aws_authentication_method", types::enum_of(AwsAuthenticationMethod::VARIANTS))
                .with_description("AWS authentication method. Choose Auto to use IAM roles"),
        )
        .attribute(
            AttributeSchema::new("aws_api_key", AttributeType::String)
                .sensitive()
                .write_only()
                .with_description("Access key. This value can be a constant or a JavaScript expression"),
        )
        .attribute(
            AttributeSchema::new("aws_secret_key", AttributeType::String)
                .sensitive()
                .write_only()
                .with_description("Secret key. This value can be a constant or a JavaScript expression"),
        )
        .attribute(
            AttributeSchema::new("aws_secret", AttributeType::String)
                .sensitive()
                .with_description("Select or create a stored secret that references your access key and secret key"),
        )
        .attribute(
            AttributeSchema::new("enable_assume_role", AttributeType::Bool)
                .with_description("Use Assume Role credentials to access S3"),
        )
        .attribute(
            AttributeSchema::new("assume_role_arn", AttributeType::String)
                .with_description("Amazon Resource Name (ARN) of the role to assume"),
        )
        .attribute(
            AttributeSchema::new("assume_role_external_id", AttributeType::String)
                .with_description("External ID to use when assuming role"),
        )
        .attribute(
            AttributeSchema::new("duration_seconds", AttributeType::Float)
                .with_description("Duration of the assumed role's session, in seconds. Minimum is 900 (15 minutes), default is 3600 (1 hour), and maximum is 43200 (12 hours)"),
        )
        .attribute(
            AttributeSchema::new("signature_version", types::enum_of(SignatureVersion::VARIANTS))
                .with_description("Signature version to use for signing S3 requests"),
        )
        .attribute(
            AttributeSchema::new("reuse_connections", AttributeType::Bool)
                .with_description("Reuse connections between requests, which can improve performance"),
        )
        .attribute(
            AttributeSchema::new("reject_unauthorized", AttributeType::Bool)
                .with_description("Reject certificates that cannot be verified against a valid CA, such as self-signed certificates"),
        )
        .attribute(
            AttributeSchema::new("verify_permissions", AttributeType::Bool)
                .with_description("Disable if you can access files within the bucket but not the bucket itself"),
        )
        .attribute(
            AttributeSchema::new("object_acl", types::enum_of(ObjectAcl::VARIANTS))
                .with_description("Object ACL to assign to uploaded objects"),
        )
        .attribute(
            AttributeSchema::new("storage_class", types::enum_of(StorageClass::VARIANTS))
                .with_description("Storage class to select for uploaded objects"),
        )
        .attribute(
            AttributeSchema::new("server_side_encryption", types::enum_of(ServerSideEncryption::VARIANTS))
                .with_description("Server-side encryption for uploaded objects"),
        )
        .attribute(
            AttributeSchema::new("kms_key_id", AttributeType::String)
                .with_description("ID or ARN of the KMS customer-managed key to use for encryption"),
        )
        .attribute(
            AttributeSchema::new("automatic_schema", AttributeType::Bool)
                .with_description("Automatically calculate the schema based on the events of each Parquet file generated"),
        )
        .attribute(
            AttributeSchema::new("parquet_version", types::enum_of(ParquetVersion::VARIANTS))
                .with_description("Determines which data types are supported and how they are represented"),
        )
        .attribute(
            AttributeSchema::new("parquet_data_page_version", types::enum_of(ParquetDataPageVersion::VARIANTS))
                .with_description("Serialization format of data pages. Note that some reader implementations use Data page V2's attributes to work more efficiently, while others ignore it"),
        )
        .attribute(
            AttributeSchema::new("parquet_page_size", AttributeType::String)
                .with_description("Target memory size for page segments, such as 1MB or 128MB. Generally, lower values improve reading speed, while higher values improve compression"),
        )
        .attribute(
            AttributeSchema::new("parquet_row_group_length", AttributeType::Float)
                .with_description("The number of rows that every group will contain. The final group can contain a smaller number of rows"),
        )
        .attribute(
            AttributeSchema::new("enable_page_checksum", AttributeType::Bool)
                .with_description("Parquet tools can use the checksum of a Parquet page to verify data integrity"),
        )
        .attribute(
            AttributeSchema::new("enable_statistics", AttributeType::Bool)
                .with_description("Statistics profile an entire file in terms of minimum/maximum values within data, numbers of nulls, etc. You can use Parquet tools to view statistics"),
        )
        .attribute(
            AttributeSchema::new("enable_write_page_index", AttributeType::Bool)
                .with_description("One page index contains statistics for one data page. Parquet readers use statistics to enable page skipping"),
        )
        .attribute(
            AttributeSchema::new("should_log_invalid_rows", AttributeType::Bool)
                .with_description("Log up to 3 rows that Cribl skips due to data mismatch"),
        )
}
