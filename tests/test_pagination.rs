mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use labelhub::model::ListQuery;

use common::{context_against, StubResponse, StubServer};

fn customer_json(id: i64) -> String {
    format!(r#"{{"id":{id},"corporateName":"Customer {id}"}}"#)
}

/// Static 5-row dataset served two at a time: the cursor chain must walk
/// it in exactly 3 calls (2, 2, 1) with no duplicates or gaps.
#[tokio::test]
async fn test_cursor_chain_walks_disjoint_pages() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_seen = Arc::clone(&calls);
    let server = StubServer::spawn(Arc::new(move |req| {
        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/customer");
        assert_eq!(req.query_param("PageSize"), Some("2"));
        calls_seen.fetch_add(1, Ordering::SeqCst);
        match req.query_param("Cursor") {
            None => StubResponse::json(
                200,
                format!(
                    r#"{{"cursor":"cur-1","pageSize":2,"data":[{},{}]}}"#,
                    customer_json(1),
                    customer_json(2)
                ),
            ),
            Some("cur-1") => StubResponse::json(
                200,
                format!(
                    r#"{{"cursor":"cur-2","pageSize":2,"data":[{},{}]}}"#,
                    customer_json(3),
                    customer_json(4)
                ),
            ),
            Some("cur-2") => StubResponse::json(
                200,
                format!(r#"{{"cursor":null,"pageSize":2,"data":[{}]}}"#, customer_json(5)),
            ),
            Some(other) => panic!("unexpected cursor from client: {other}"),
        }
    }))
    .await;

    let (ctx, _store) = context_against(&server.base_url).await;
    let customers = ctx
        .customers
        .list_all(&ListQuery::new().page_size(2))
        .await
        .expect("pagination succeeds");

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    let ids: Vec<i64> = customers.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

/// A dataset that fits one page issues exactly one call and no cursor.
#[tokio::test]
async fn test_single_page_stops_without_cursor() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_seen = Arc::clone(&calls);
    let server = StubServer::spawn(Arc::new(move |req| {
        calls_seen.fetch_add(1, Ordering::SeqCst);
        assert!(req.query_param("Cursor").is_none());
        StubResponse::json(
            200,
            format!(r#"{{"cursor":null,"pageSize":20,"data":[{}]}}"#, customer_json(9)),
        )
    }))
    .await;

    let (ctx, _store) = context_against(&server.base_url).await;
    let customers = ctx
        .customers
        .list_all(&ListQuery::new())
        .await
        .expect("single page");
    assert_eq!(customers.len(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// A server that keeps echoing the same cursor must not loop the client
/// forever.
#[tokio::test]
async fn test_repeated_cursor_terminates() {
    let server = StubServer::spawn(Arc::new(move |_req| {
        StubResponse::json(
            200,
            format!(r#"{{"cursor":"stuck","pageSize":1,"data":[{}]}}"#, customer_json(1)),
        )
    }))
    .await;

    let (ctx, _store) = context_against(&server.base_url).await;
    let customers = ctx
        .customers
        .list_all(&ListQuery::new().page_size(1))
        .await
        .expect("terminates");
    // first page plus the one fetched with the stuck cursor
    assert_eq!(customers.len(), 2);
}
