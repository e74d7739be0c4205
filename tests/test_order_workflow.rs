mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use labelhub::model::{Order, OrderStatus};
use labelhub::ApiError;

use common::{context_against, StubResponse, StubServer};

fn order(id: i64, status: OrderStatus) -> Order {
    Order {
        id,
        customer_id: 1,
        account_id: 1,
        status,
        order_number: 1000 + id,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_illegal_transition_issues_no_network_call() {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_seen = Arc::clone(&hits);
    let server = StubServer::spawn(Arc::new(move |_req| {
        hits_seen.fetch_add(1, Ordering::SeqCst);
        StubResponse::json(200, "{}")
    }))
    .await;

    let (ctx, _store) = context_against(&server.base_url).await;
    let completed = order(9, OrderStatus::Completed);
    let err = ctx
        .orders
        .set_status(&completed, OrderStatus::InProgress)
        .await
        .expect_err("completed is terminal");
    match err {
        ApiError::IllegalTransition { from, to } => {
            assert_eq!(from, OrderStatus::Completed);
            assert_eq!(to, OrderStatus::InProgress);
        }
        other => panic!("expected IllegalTransition, got {other:?}"),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0, "gate must act before the wire");
}

#[tokio::test]
async fn test_legal_transition_updates_via_put() {
    let puts = Arc::new(AtomicUsize::new(0));
    let puts_seen = Arc::clone(&puts);
    let server = StubServer::spawn(Arc::new(move |req| {
        assert_eq!(req.method, "PUT");
        assert_eq!(req.path, "/order/9");
        assert!(req.body.contains(r#""status":2"#));
        puts_seen.fetch_add(1, Ordering::SeqCst);
        StubResponse::json(
            200,
            r#"{"id":9,"customerId":1,"accountId":1,"status":2,"orderNumber":1009,"total":150.0,"discount":0.0,"freight":0.0,"fob":false,"items":[]}"#,
        )
    }))
    .await;

    let (ctx, _store) = context_against(&server.base_url).await;
    let in_progress = order(9, OrderStatus::InProgress);
    let updated = ctx
        .orders
        .set_status(&in_progress, OrderStatus::Completed)
        .await
        .expect("transition allowed");
    assert_eq!(updated.status, OrderStatus::Completed);
    assert_eq!(puts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_binary_endpoints_return_payload_unchanged() {
    let pdf: &[u8] = b"%PDF-1.7\x00\x01\x02 fake";
    let server = StubServer::spawn(Arc::new(move |req| {
        match req.path.as_str() {
            "/order/7/download" => StubResponse::binary(pdf.to_vec()),
            "/order/export" => {
                assert_eq!(req.query_param("StartDate"), Some("2024-01-01"));
                assert_eq!(req.query_param("EndDate"), Some("2024-01-31"));
                StubResponse::binary(vec![0xde, 0xad, 0xbe, 0xef])
            }
            "/OrderService/download" => {
                assert_eq!(req.query_param("Id"), Some("3"));
                StubResponse::binary(pdf.to_vec())
            }
            other => panic!("unexpected path {other}"),
        }
    }))
    .await;

    let (ctx, _store) = context_against(&server.base_url).await;
    let quote = ctx.orders.quote_pdf(7).await.expect("quote pdf");
    assert_eq!(quote, pdf.to_vec());

    let export = ctx
        .orders
        .export(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .await
        .expect("export");
    assert_eq!(export, vec![0xde, 0xad, 0xbe, 0xef]);

    let report = ctx.service_orders.report_pdf(3).await.expect("report pdf");
    assert_eq!(report, pdf.to_vec());
}

#[tokio::test]
async fn test_concurrent_identical_mutations_deduplicate() {
    let posts = Arc::new(AtomicUsize::new(0));
    let posts_seen = Arc::clone(&posts);
    let server = StubServer::spawn(Arc::new(move |req| {
        assert_eq!(req.method, "POST");
        posts_seen.fetch_add(1, Ordering::SeqCst);
        StubResponse::json(
            200,
            r#"{"id":1,"customerId":1,"accountId":1,"status":0,"orderNumber":1001,"total":0.0,"discount":0.0,"freight":0.0,"fob":false,"items":[]}"#,
        )
    }))
    .await;

    let (ctx, _store) = context_against(&server.base_url).await;
    let draft = order(0, OrderStatus::Quote);

    let (first, second) = tokio::join!(ctx.orders.create(&draft), ctx.orders.create(&draft));
    let results = [first, second];
    let ok_count = results.iter().filter(|r| r.is_ok()).count();
    let dup_count = results
        .iter()
        .filter(|r| matches!(r, Err(ApiError::DuplicateRequest(_))))
        .count();
    assert_eq!(ok_count, 1, "exactly one create may reach the backend");
    assert_eq!(dup_count, 1, "the double submit must be rejected locally");
    assert_eq!(posts.load(Ordering::SeqCst), 1);
}
