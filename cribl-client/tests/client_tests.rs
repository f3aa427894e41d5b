use axum::http::{Method, StatusCode};
use serde_json::json;

use cribl_client::models::{
    Compress, DatagenSample, InputDatagen, InputDatagenType, OutputS3, Pipeline, PipelineConf,
};
use cribl_client::{ClientError, CriblClient, decode, decode_empty};
use cribl_test_utils::{MockApi, closed_port_url};

#[tokio::test]
async fn decode_accepts_only_the_expected_status() {
    let api = MockApi::new();
    api.respond(Method::GET, "/ok", StatusCode::OK, json!({"count": 0, "items": []}));
    api.respond(Method::GET, "/reset", StatusCode::RESET_CONTENT, json!({}));
    let base = api.start().await;
    let http = reqwest::Client::new();

    let ok: serde_json::Value = decode(http.get(format!("{base}/ok")).send().await, StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(ok["count"], json!(0));

    let err = decode_empty(
        http.get(format!("{base}/ok")).send().await,
        StatusCode::RESET_CONTENT,
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("200"), "{err}");
}

#[tokio::test]
async fn decode_reports_malformed_body() {
    let api = MockApi::new();
    api.respond_raw(Method::GET, "/garbage", StatusCode::OK, "not json");
    let base = api.start().await;

    let result: Result<serde_json::Value, _> = decode(
        reqwest::Client::new().get(format!("{base}/garbage")).send().await,
        StatusCode::OK,
    )
    .await;
    assert!(matches!(result, Err(ClientError::Decode(_))));
}

#[tokio::test]
async fn transport_error_is_passed_through() {
    let base = closed_port_url().await;
    let client = CriblClient::new(format!("{base}/api/v1"));

    let err = client.list_pipelines().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "{err:?}");
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn status_error_carries_api_message() {
    let api = MockApi::new();
    api.respond(
        Method::POST,
        "/api/v1/pipelines",
        StatusCode::BAD_REQUEST,
        json!({"status": "error", "message": "Pipeline p1 already exists"}),
    );
    let client = CriblClient::new(format!("{}/api/v1", api.start().await));

    let pipeline = Pipeline {
        id: "p1".to_string(),
        conf: PipelineConf::default(),
    };
    match client.create_pipeline(&pipeline).await {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Pipeline p1 already exists");
        }
        other => panic!("Expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_pipeline_unwraps_envelope() {
    let api = MockApi::new();
    api.respond(
        Method::GET,
        "/api/v1/pipelines/p1",
        StatusCode::OK,
        json!({"count": 1, "items": [{"id": "p1", "conf": {"asyncFuncTimeout": 30000, "output": "default"}}]}),
    );
    api.respond(
        Method::GET,
        "/api/v1/pipelines/empty",
        StatusCode::OK,
        json!({"count": 0, "items": []}),
    );
    let client = CriblClient::new(format!("{}/api/v1", api.start().await));

    let pipeline = client.get_pipeline("p1").await.unwrap();
    assert_eq!(pipeline.conf.async_func_timeout, Some(30000));

    assert!(client.get_pipeline("empty").await.unwrap_err().is_not_found());
    assert!(matches!(
        client.get_pipeline("missing").await,
        Err(ClientError::NotFound(_))
    ));
}

#[tokio::test]
async fn bearer_token_is_sent_on_every_call() {
    let api = MockApi::new();
    api.respond(Method::GET, "/api/v1/pipelines", StatusCode::OK, json!({"count": 0, "items": []}));
    api.respond(Method::DELETE, "/api/v1/pipelines/p1", StatusCode::OK, json!({}));
    let client =
        CriblClient::new(format!("{}/api/v1", api.start().await)).with_bearer_token("tok-123");

    client.list_pipelines().await.unwrap();
    client.delete_pipeline("p1").await.unwrap();

    let requests = api.requests();
    assert_eq!(requests.len(), 2);
    for request in requests {
        assert_eq!(request.authorization.as_deref(), Some("Bearer tok-123"));
    }
}

#[tokio::test]
async fn login_posts_credentials() {
    let api = MockApi::new();
    api.respond(
        Method::POST,
        "/api/v1/auth/login",
        StatusCode::OK,
        json!({"token": "jwt", "forcePasswordChange": false}),
    );
    let client = CriblClient::new(format!("{}/api/v1", api.start().await));

    let token = client.login("admin", "pw").await.unwrap();
    assert_eq!(token.token, "jwt");

    let requests = api.requests();
    assert_eq!(requests[0].body, Some(json!({"username": "admin", "password": "pw"})));
    assert_eq!(requests[0].authorization, None);
}

#[tokio::test]
async fn s3_output_create_requires_reset_content() {
    let api = MockApi::new();
    api.respond(Method::POST, "/api/v1/system/outputs", StatusCode::RESET_CONTENT, json!({}));
    let client = CriblClient::new(format!("{}/api/v1", api.start().await));

    let output = OutputS3 {
        id: Some("s3_archive".to_string()),
        bucket: "logs".to_string(),
        stage_path: "/tmp/stage".to_string(),
        compress: Some(Compress::Gzip),
        ..Default::default()
    };
    client.create_output_s3(&output).await.unwrap();

    let body = api.requests()[0].body.clone().unwrap();
    assert_eq!(body["compress"], json!("gzip"));
    assert_eq!(body["bucket"], json!("logs"));

    // a plain 200 is not success for this endpoint
    api.respond(Method::POST, "/api/v1/system/outputs", StatusCode::OK, json!({}));
    let err = client.create_output_s3(&output).await.unwrap_err();
    assert_eq!(err.status_code(), Some(200));
}

#[tokio::test]
async fn datagen_input_round_trip() {
    let api = MockApi::new();
    let input = InputDatagen {
        id: Some("in_gen".to_string()),
        input_type: InputDatagenType::Datagen,
        description: Some("sample traffic".to_string()),
        environment: None,
        samples: Some(vec![DatagenSample {
            events_per_sec: 10.0,
            sample: "apache_common.log".to_string(),
        }]),
        disabled: Some(false),
        pq_enabled: None,
        send_to_routes: Some(true),
        pipeline: None,
    };
    api.respond(Method::POST, "/api/v1/system/inputs", StatusCode::OK, json!({}));
    api.respond(
        Method::GET,
        "/api/v1/system/inputs/in_gen",
        StatusCode::OK,
        json!({"count": 1, "items": [serde_json::to_value(&input).unwrap()]}),
    );
    api.respond(
        Method::GET,
        "/api/v1/system/inputs",
        StatusCode::OK,
        json!({"count": 2, "items": [{"id": "in_gen", "type": "datagen"}, {"id": "in_syslog", "type": "syslog"}]}),
    );
    let client = CriblClient::new(format!("{}/api/v1", api.start().await));

    client.create_input_datagen(&input).await.unwrap();
    assert_eq!(client.get_input_datagen("in_gen").await.unwrap(), input);

    let inputs = client.list_inputs().await.unwrap();
    assert_eq!(inputs.count, 2);
    assert_eq!(inputs.items[1].input_type.as_deref(), Some("syslog"));
}

#[tokio::test]
async fn system_info_lists_build() {
    let api = MockApi::new();
    api.respond(
        Method::GET,
        "/api/v1/system/info",
        StatusCode::OK,
        json!({"count": 1, "items": [{"hostname": "leader", "BUILD": {"VERSION": "4.5.1", "BRANCH": "HEAD"}}]}),
    );
    let client = CriblClient::new(format!("{}/api/v1", api.start().await));

    let info = client.system_info().await.unwrap().into_first().unwrap();
    assert_eq!(info.hostname.as_deref(), Some("leader"));
    assert_eq!(info.build.version.as_deref(), Some("4.5.1"));
}

#[tokio::test]
async fn invalid_id_never_reaches_the_server() {
    let api = MockApi::new();
    let client = CriblClient::new(format!("{}/api/v1", api.start().await));

    assert!(matches!(
        client.delete_output("").await,
        Err(ClientError::InvalidRequest(_))
    ));
    assert!(matches!(
        client.get_pipeline("..").await,
        Err(ClientError::InvalidRequest(_))
    ));
    assert!(matches!(
        client.delete_pipeline(".").await,
        Err(ClientError::InvalidRequest(_))
    ));
    assert!(matches!(
        client.get_input_datagen("in%2Fgen").await,
        Err(ClientError::InvalidRequest(_))
    ));
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn get_by_id_rejects_a_different_object() {
    let api = MockApi::new();
    api.respond(
        Method::GET,
        "/api/v1/pipelines/p1",
        StatusCode::OK,
        json!({"count": 1, "items": [{"id": "p2", "conf": {}}]}),
    );
    api.respond(
        Method::GET,
        "/api/v1/system/outputs/s3_archive",
        StatusCode::OK,
        json!({"count": 1, "items": [{"id": "s3_other", "type": "s3", "bucket": "logs", "stagePath": "/tmp"}]}),
    );
    api.respond(
        Method::GET,
        "/api/v1/system/inputs/in_gen",
        StatusCode::OK,
        json!({"count": 1, "items": [{"id": "in_other", "type": "datagen"}]}),
    );
    let client = CriblClient::new(format!("{}/api/v1", api.start().await));

    assert!(client.get_pipeline("p1").await.unwrap_err().is_not_found());
    assert!(client.get_output_s3("s3_archive").await.unwrap_err().is_not_found());
    assert!(client.get_input_datagen("in_gen").await.unwrap_err().is_not_found());
}
