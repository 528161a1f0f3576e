use crate::helpers::TestContext;

use hyper::StatusCode;

#[tokio::test]
async fn it_should_answer_health_checks() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body_bytes, b"OK");
}

#[tokio::test]
async fn it_should_tag_every_response_with_a_request_id() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");
}
