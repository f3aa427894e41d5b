use cribl_client::models::{
    AwsAuthenticationMethod, Compress, CompressionLevel, Format, ObjectAcl, OnBackpressure,
    OnDiskFullBackpressure, OutputS3, OutputS3Type, ParquetDataPageVersion, ParquetVersion,
    ServerSideEncryption, SignatureVersion, StorageClass,
};

use crate::utils::attribute_struct;

attribute_struct! {
    pub struct OutputS3Config {
        pub id: String,
        /// Declared alongside `id`; never sent to or returned by the API
        pub default_id: String,
        pub output_type as "type": OutputS3Type,
        pub description: Option<String>,
        pub environment: Option<String>,
        pub pipeline: Option<String>,
        pub stream_tags: Option<Vec<String>>,
        pub system_fields: Option<Vec<String>>,
        pub bucket: String,
        pub region: Option<String>,
        pub endpoint: Option<String>,
        pub dest_path: Option<String>,
        /// Local buffer directory before files are compressed and uploaded
        pub stage_path: String,
        pub add_id_to_stage_path: Option<bool>,
        pub remove_empty_dirs: Option<bool>,
        pub empty_dir_cleanup_sec: Option<f64>,
        pub base_file_name: Option<String>,
        pub file_name_suffix: Option<String>,
        pub partition_expr: Option<String>,
        pub partitioning_fields: Option<Vec<String>>,
        pub header_line: Option<String>,
        pub format: Option<Format>,
        pub compress: Option<Compress>,
        pub compression_level: Option<CompressionLevel>,
        pub max_file_size_mb: Option<f64>,
        pub max_file_open_time_sec: Option<f64>,
        pub max_file_idle_time_sec: Option<f64>,
        pub max_open_files: Option<f64>,
        pub max_concurrent_file_parts: Option<f64>,
        pub write_high_water_mark: Option<f64>,
        pub deadletter_enabled: Option<bool>,
        pub deadletter_path: Option<String>,
        pub max_retry_num: Option<f64>,
        pub max_closing_files_to_backpressure: Option<f64>,
        pub on_backpressure: Option<OnBackpressure>,
        pub on_disk_full_backpressure: Option<OnDiskFullBackpressure>,
        pub aws_authentication_method: Option<AwsAuthenticationMethod>,
        pub aws_api_key: Option<String>,
        pub aws_secret_key: Option<String>,
        pub aws_secret: Option<String>,
        pub enable_assume_role: Option<bool>,
        pub assume_role_arn: Option<String>,
        pub assume_role_external_id: Option<String>,
        pub duration_seconds: Option<f64>,
        pub signature_version: Option<SignatureVersion>,
        pub reuse_connections: Option<bool>,
        pub reject_unauthorized: Option<bool>,
        pub verify_permissions: Option<bool>,
        pub object_acl: Option<ObjectAcl>,
        pub storage_class: Option<StorageClass>,
        pub server_side_encryption: Option<ServerSideEncryption>,
        pub kms_key_id: Option<String>,
        pub automatic_schema: Option<bool>,
        pub parquet_version: Option<ParquetVersion>,
        pub parquet_data_page_version: Option<ParquetDataPageVersion>,
        pub parquet_page_size: Option<String>,
        pub parquet_row_group_length: Option<f64>,
        pub enable_page_checksum: Option<bool>,
        pub enable_statistics: Option<bool>,
        pub enable_write_page_index: Option<bool>,
        pub should_log_invalid_rows: Option<bool>,
    }
}

impl OutputS3Config {
    pub fn to_wire(&self) -> OutputS3 {
        OutputS3 {
            id: Some(self.id.clone()),
            output_type: Some(self.output_type),
            bucket: self.bucket.clone(),
            stage_path: self.stage_path.clone(),
            description: self.description.clone(),
            environment: self.environment.clone(),
            pipeline: self.pipeline.clone(),
            stream_tags: self.stream_tags.clone(),
            system_fields: self.system_fields.clone(),
            region: self.region.clone(),
            endpoint: self.endpoint.clone(),
            dest_path: self.dest_path.clone(),
            add_id_to_stage_path: self.add_id_to_stage_path,
            remove_empty_dirs: self.remove_empty_dirs,
            empty_dir_cleanup_sec: self.empty_dir_cleanup_sec,
            base_file_name: self.base_file_name.clone(),
            file_name_suffix: self.file_name_suffix.clone(),
            partition_expr: self.partition_expr.clone(),
            partitioning_fields: self.partitioning_fields.clone(),
            header_line: self.header_line.clone(),
            format: self.format,
            compress: self.compress,
            compression_level: self.compression_level,
            max_file_size_mb: self.max_file_size_mb,
            max_file_open_time_sec: self.max_file_open_time_sec,
            max_file_idle_time_sec: self.max_file_idle_time_sec,
            max_open_files: self.max_open_files,
            max_concurrent_file_parts: self.max_concurrent_file_parts,
            write_high_water_mark: self.write_high_water_mark,
            deadletter_enabled: self.deadletter_enabled,
            deadletter_path: self.deadletter_path.clone(),
            max_retry_num: self.max_retry_num,
            max_closing_files_to_backpressure: self.max_closing_files_to_backpressure,
            on_backpressure: self.on_backpressure,
            on_disk_full_backpressure: self.on_disk_full_backpressure,
            aws_authentication_method: self.aws_authentication_method,
            aws_api_key: self.aws_api_key.clone(),
            aws_secret_key: self.aws_secret_key.clone(),
            aws_secret: self.aws_secret.clone(),
            enable_assume_role: self.enable_assume_role,
            assume_role_arn: self.assume_role_arn.clone(),
            assume_role_external_id: self.assume_role_external_id.clone(),
            duration_seconds: self.duration_seconds,
            signature_version: self.signature_version,
            reuse_connections: self.reuse_connections,
            reject_unauthorized: self.reject_unauthorized,
            verify_permissions: self.verify_permissions,
            object_acl: self.object_acl,
            storage_class: self.storage_class,
            server_side_encryption: self.server_side_encryption,
            kms_key_id: self.kms_key_id.clone(),
            automatic_schema: self.automatic_schema,
            parquet_version: self.parquet_version,
            parquet_data_page_version: self.parquet_data_page_version,
            parquet_page_size: self.parquet_page_size.clone(),
            parquet_row_group_length: self.parquet_row_group_length,
            enable_page_checksum: self.enable_page_checksum,
            enable_statistics: self.enable_statistics,
            enable_write_page_index: self.enable_write_page_index,
            should_log_invalid_rows: self.should_log_invalid_rows,
        }
    }

    /// `prior` supplies `default_id`, which only exists on the config side,
    /// and the id when the remote record omits it.
    pub fn from_wire(wire: OutputS3, prior_id: &str, default_id: &str) -> Self {
        Self {
            id: wire.id.unwrap_or_else(|| prior_id.to_string()),
            default_id: default_id.to_string(),
            output_type: wire.output_type.unwrap_or(OutputS3Type::S3),
            bucket: wire.bucket,
            stage_path: wire.stage_path,
            description: wire.description,
            environment: wire.environment,
            pipeline: wire.pipeline,
            stream_tags: wire.stream_tags,
            system_fields: wire.system_fields,
            region: wire.region,
            endpoint: wire.endpoint,
            dest_path: wire.dest_path,
            add_id_to_stage_path: wire.add_id_to_stage_path,
            remove_empty_dirs: wire.remove_empty_dirs,
            empty_dir_cleanup_sec: wire.empty_dir_cleanup_sec,
            base_file_name: wire.base_file_name,
            file_name_suffix: wire.file_name_suffix,
            partition_expr: wire.partition_expr,
            partitioning_fields: wire.partitioning_fields,
            header_line: wire.header_line,
            format: wire.format,
            compress: wire.compress,
            compression_level: wire.compression_level,
            max_file_size_mb: wire.max_file_size_mb,
            max_file_open_time_sec: wire.max_file_open_time_sec,
            max_file_idle_time_sec: wire.max_file_idle_time_sec,
            max_open_files: wire.max_open_files,
            max_concurrent_file_parts: wire.max_concurrent_file_parts,
            write_high_water_mark: wire.write_high_water_mark,
            deadletter_enabled: wire.deadletter_enabled,
            deadletter_path: wire.deadletter_path,
            max_retry_num: wire.max_retry_num,
            max_closing_files_to_backpressure: wire.max_closing_files_to_backpressure,
            on_backpressure: wire.on_backpressure,
            on_disk_full_backpressure: wire.on_disk_full_backpressure,
            aws_authentication_method: wire.aws_authentication_method,
            aws_api_key: wire.aws_api_key,
            aws_secret_key: wire.aws_secret_key,
            aws_secret: wire.aws_secret,
            enable_assume_role: wire.enable_assume_role,
            assume_role_arn: wire.assume_role_arn,
            assume_role_external_id: wire.assume_role_external_id,
            duration_seconds: wire.duration_seconds,
            signature_version: wire.signature_version,
            reuse_connections: wire.reuse_connections,
            reject_unauthorized: wire.reject_unauthorized,
            verify_permissions: wire.verify_permissions,
            object_acl: wire.object_acl,
            storage_class: wire.storage_class,
            server_side_encryption: wire.server_side_encryption,
            kms_key_id: wire.kms_key_id,
            automatic_schema: wire.automatic_schema,
            parquet_version: wire.parquet_version,
            parquet_data_page_version: wire.parquet_data_page_version,
            parquet_page_size: wire.parquet_page_size,
            parquet_row_group_length: wire.parquet_row_group_length,
            enable_page_checksum: wire.enable_page_checksum,
            enable_statistics: wire.enable_statistics,
            enable_write_page_index: wire.enable_write_page_index,
            should_log_invalid_rows: wire.should_log_invalid_rows,
        }
    }

    /// Access keys are write-only on the API side; whatever comes back for
    /// them is ignored in favour of the prior value.
    pub fn refresh(prior: &Self, wire: OutputS3) -> Self {
        let mut refreshed = Self::merge(prior, Self::from_wire(wire, &prior.id, &prior.default_id));
        if prior.aws_api_key.is_some() {
            refreshed.aws_api_key = prior.aws_api_key.clone();
        }
        if prior.aws_secret_key.is_some() {
            refreshed.aws_secret_key = prior.aws_secret_key.clone();
        }
        refreshed
    }
}
