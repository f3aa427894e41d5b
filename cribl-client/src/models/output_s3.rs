use serde::{Deserialize, Serialize};

string_enum! {
    OutputS3Type {
        S3 => "s3",
    }
}

string_enum! {
    Compress {
        None => "none",
        Gzip => "gzip",
    }
}

string_enum! {
    CompressionLevel {
        BestSpeed => "best_speed",
        Normal => "normal",
        BestCompression => "best_compression",
    }
}

string_enum! {
    /// Serialization written to each staged file
    Format {
        Json => "json",
        Raw => "raw",
        Parquet => "parquet",
    }
}

string_enum! {
    OnBackpressure {
        Block => "block",
        Drop => "drop",
    }
}

string_enum! {
    OnDiskFullBackpressure {
        Block => "block",
        Drop => "drop",
    }
}

string_enum! {
    AwsAuthenticationMethod {
        Auto => "auto",
        Manual => "manual",
        Secret => "secret",
    }
}

string_enum! {
    SignatureVersion {
        V2 => "v2",
        V4 => "v4",
    }
}

string_enum! {
    ObjectAcl {
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
        AuthenticatedRead => "authenticated-read",
        AwsExecRead => "aws-exec-read",
        BucketOwnerRead => "bucket-owner-read",
        BucketOwnerFullControl => "bucket-owner-full-control",
    }
}

string_enum! {
    StorageClass {
        Standard => "STANDARD",
        ReducedRedundancy => "REDUCED_REDUNDANCY",
        StandardIa => "STANDARD_IA",
        OnezoneIa => "ONEZONE_IA",
        IntelligentTiering => "INTELLIGENT_TIERING",
        Glacier => "GLACIER",
        GlacierIr => "GLACIER_IR",
        DeepArchive => "DEEP_ARCHIVE",
    }
}

string_enum! {
    ServerSideEncryption {
        Aes256 => "AES256",
        AwsKms => "aws:kms",
    }
}

string_enum! {
    ParquetVersion {
        V1_0 => "PARQUET_1_0",
        V2_4 => "PARQUET_2_4",
        V2_6 => "PARQUET_2_6",
    }
}

string_enum! {
    ParquetDataPageVersion {
        V1 => "DATA_PAGE_V1",
        V2 => "DATA_PAGE_V2",
    }
}

/// S3 destination as stored under `/system/outputs`
///
/// `bucket` and `stagePath` are the only fields the API insists on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputS3 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<OutputS3Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<String>,
    #[serde(rename = "streamtags", default, skip_serializing_if = "Option::is_none")]
    pub stream_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_fields: Option<Vec<String>>,

    // Destination
    #[serde(default)]
    pub bucket: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_path: Option<String>,
    #[serde(default)]
    pub stage_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_id_to_stage_path: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_empty_dirs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_dir_cleanup_sec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_expr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partitioning_fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_line: Option<String>,

    // Format and file rotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<Compress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_level: Option<CompressionLevel>,
    #[serde(rename = "maxFileSizeMB", default, skip_serializing_if = "Option::is_none")]
    pub max_file_size_mb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_open_time_sec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_idle_time_sec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_open_files: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_file_parts: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_high_water_mark: Option<f64>,

    // Retries and backpressure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadletter_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadletter_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retry_num: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_closing_files_to_backpressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_backpressure: Option<OnBackpressure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_disk_full_backpressure: Option<OnDiskFullBackpressure>,

    // Authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_authentication_method: Option<AwsAuthenticationMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_secret_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_assume_role: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role_external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_version: Option<SignatureVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reuse_connections: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_unauthorized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_permissions: Option<bool>,

    // Object settings
    #[serde(rename = "objectACL", default, skip_serializing_if = "Option::is_none")]
    pub object_acl: Option<ObjectAcl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<StorageClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_side_encryption: Option<ServerSideEncryption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    // Parquet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_schema: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parquet_version: Option<ParquetVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parquet_data_page_version: Option<ParquetDataPageVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parquet_page_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parquet_row_group_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_page_checksum: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_statistics: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_write_page_index: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_log_invalid_rows: Option<bool>,
}

/// Type-agnostic view of any output returned by `GET /system/outputs`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputSummary {
    pub id: String,
    #[serde(rename = "type", default)]
    pub output_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn irregular_wire_names() {
        let output = OutputS3 {
            id: Some("s3_archive".to_string()),
            bucket: "logs".to_string(),
            stage_path: "$CRIBL_HOME/state/outputs/staging".to_string(),
            max_file_size_mb: Some(32.0),
            object_acl: Some(ObjectAcl::BucketOwnerFullControl),
            stream_tags: Some(vec!["prod".to_string()]),
            server_side_encryption: Some(ServerSideEncryption::AwsKms),
            ..Default::default()
        };
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["maxFileSizeMB"], json!(32.0));
        assert_eq!(value["objectACL"], json!("bucket-owner-full-control"));
        assert_eq!(value["streamtags"], json!(["prod"]));
        assert_eq!(value["serverSideEncryption"], json!("aws:kms"));
        assert_eq!(value["stagePath"], json!("$CRIBL_HOME/state/outputs/staging"));
        assert!(value.get("region").is_none());
    }

    #[test]
    fn parse_remote_output() {
        let output: OutputS3 = serde_json::from_value(json!({
            "id": "s3_archive",
            "type": "s3",
            "bucket": "logs",
            "stagePath": "/tmp/stage",
            "compress": "gzip",
            "storageClass": "GLACIER_IR",
            "maxRetryNum": 20,
            "status": {"health": "Green"}
        }))
        .unwrap();

        assert_eq!(output.output_type, Some(OutputS3Type::S3));
        assert_eq!(output.compress, Some(Compress::Gzip));
        assert_eq!(output.storage_class, Some(StorageClass::GlacierIr));
        assert_eq!(output.max_retry_num, Some(20.0));
    }
}
