//! End-to-end Put: SDK client -> gRPC server -> HTTP caller -> fake service bus

mod common;

use std::time::Duration;

use common::{
    refused_endpoint, sample_request, start_stack, FakeServiceBus, Reply, NOT_FOUND_BODY,
    STORED_BODY,
};
use contentservice_sdk::{PutOutcome, SdkError};
use tonic::Code;

const TIMEOUT: Duration = Duration::from_secs(5);

fn rpc_code(err: SdkError) -> Code {
    match err {
        SdkError::Rpc { code, .. } => code,
        other => panic!("expected RPC status, got {:?}", other),
    }
}

#[tokio::test]
async fn test_put_stored() {
    let bus = FakeServiceBus::start(Reply::ok(STORED_BODY)).await;
    let (mut server, client) = start_stack(bus.endpoint(), TIMEOUT, TIMEOUT).await;

    let response = client.put(sample_request()).await.unwrap();

    match response.outcome() {
        PutOutcome::Stored(result) => {
            assert_eq!(result.id, 1810448062);
            assert_eq!(result.contractor_id, 72494);
            assert_eq!(
                result.web_file_name,
                "QA01/ImageStore/ServiceBus/600/016/555/da00563b-bb38-49b1-b3ef-29dbce63fbed.png"
            );
        }
        other => panic!("expected stored, got {:?}", other),
    }
    assert!(response.error.is_none());

    let sent = bus.requests()[0].json();
    assert_eq!(sent["params"]["filecontents"], "iVBORw0KGgo=");

    server.stop();
}

#[tokio::test]
async fn test_put_bom_prefixed_response() {
    let bus = FakeServiceBus::start(Reply::with_bom(STORED_BODY)).await;
    let (mut server, client) = start_stack(bus.endpoint(), TIMEOUT, TIMEOUT).await;

    let response = client.put(sample_request()).await.unwrap();
    assert_eq!(response.result.unwrap().id, 1810448062);

    server.stop();
}

#[tokio::test]
async fn test_put_rejected_by_service_bus() {
    let bus = FakeServiceBus::start(Reply::ok(NOT_FOUND_BODY)).await;
    let (mut server, client) = start_stack(bus.endpoint(), TIMEOUT, TIMEOUT).await;

    let response = client.put(sample_request()).await.unwrap();

    assert!(response.result.is_none());
    assert_eq!(response.error.unwrap().message, "not found");

    server.stop();
}

#[tokio::test]
async fn test_put_service_bus_unreachable() {
    let (mut server, client) = start_stack(refused_endpoint(), TIMEOUT, TIMEOUT).await;

    let err = client.put(sample_request()).await.unwrap_err();
    assert_eq!(rpc_code(err), Code::Unavailable);

    server.stop();
}

#[tokio::test]
async fn test_put_malformed_response() {
    let bus = FakeServiceBus::start(Reply::ok("{\"jsonrpc\":")).await;
    let (mut server, client) = start_stack(bus.endpoint(), TIMEOUT, TIMEOUT).await;

    let err = client.put(sample_request()).await.unwrap_err();
    assert_eq!(rpc_code(err), Code::DataLoss);

    server.stop();
}

#[tokio::test]
async fn test_put_service_bus_timeout() {
    let bus = FakeServiceBus::start(Reply::Delayed {
        delay: Duration::from_secs(10),
        body: STORED_BODY.as_bytes().to_vec(),
    })
    .await;
    let (mut server, client) =
        start_stack(bus.endpoint(), Duration::from_millis(200), TIMEOUT).await;

    let err = client.put(sample_request()).await.unwrap_err();
    assert_eq!(rpc_code(err), Code::DeadlineExceeded);

    server.stop();
}

#[tokio::test]
async fn test_caller_deadline_aborts_outbound_call() {
    let bus = FakeServiceBus::start(Reply::Delayed {
        delay: Duration::from_secs(10),
        body: STORED_BODY.as_bytes().to_vec(),
    })
    .await;
    let (mut server, client) =
        start_stack(bus.endpoint(), Duration::from_secs(30), Duration::from_millis(300)).await;

    let err = client.put(sample_request()).await.unwrap_err();
    let code = rpc_code(err);
    assert!(
        matches!(code, Code::Cancelled | Code::DeadlineExceeded),
        "unexpected code {:?}",
        code
    );

    // The service bus sees the connection go away well before its reply
    let mut waited = Duration::ZERO;
    while bus.abandoned() == 0 && waited < Duration::from_secs(3) {
        tokio::time::sleep(Duration::from_millis(50)).await;
        waited += Duration::from_millis(50);
    }
    assert_eq!(bus.abandoned(), 1);

    server.stop();
}

#[tokio::test]
async fn test_concurrent_puts_are_independent() {
    let bus = FakeServiceBus::start(Reply::ok(STORED_BODY)).await;
    let (mut server, client) = start_stack(bus.endpoint(), TIMEOUT, TIMEOUT).await;

    let calls = (0..8).map(|i| {
        let client = client.clone();
        let mut request = sample_request();
        request.order_number = 600016555 + i;
        async move { client.put(request).await }
    });

    let results = futures::future::join_all(calls).await;

    assert!(results.iter().all(|r| r.is_ok()));
    let mut order_numbers: Vec<i64> = bus
        .requests()
        .iter()
        .map(|r| r.json()["params"]["ordernumber"].as_i64().unwrap())
        .collect();
    order_numbers.sort_unstable();
    assert_eq!(order_numbers, (0..8).map(|i| 600016555 + i).collect::<Vec<i64>>());

    server.stop();
}
