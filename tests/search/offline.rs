use httpmock::Method::GET;
use ugtabs_rs::{
    ErrorClass, RawSearchArgs, SearchBuilder, TabType, UgError, format_search_query, search,
    search_url,
};

use crate::common::{
    client_for, mock_search_page, search_store_json, setup_server, store_html,
};

#[tokio::test]
async fn offline_search_returns_normalized_tabs() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search.php")
            .query_param("q", "wonderwall")
            .query_param("value", "wonderwall")
            .query_param("search_type", "title")
            .query_param("type", "300")
            .query_param("page", "1");
        then.status(200)
            .header("content-type", "text/html")
            .body(store_html(&search_store_json()));
    });

    let client = client_for(&server);
    let results = SearchBuilder::new(&client, "wonderwall")
        .kind(TabType::Chords)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(results.pagination.current, 1);
    assert_eq!(results.pagination.total, 4);
    assert_eq!(results.tabs.len(), 2);

    let first = &results.tabs[0];
    assert_eq!(first.artist.as_deref(), Some("Oasis"));
    assert_eq!(first.name.as_deref(), Some("Wonderwall"));
    assert_eq!(first.slug.as_deref(), Some("oasis/wonderwall-chords-27596"));
    assert!((first.rating.unwrap() - 4.84).abs() < 1e-9);
    assert_eq!(first.number_rates, Some(23911));
    assert_eq!(first.kind.as_deref(), Some("Chords"));
    assert_eq!(first.tuning.as_deref(), Some("E A D G B E"));

    let second = &results.tabs[1];
    assert_eq!(second.number_rates, Some(1200));
    assert_eq!(second.difficulty, None);
}

#[tokio::test]
async fn space_in_query_reaches_server_decoded() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search.php")
            .query_param("q", "hotel california")
            .query_param("page", "3");
        then.status(200).body(store_html(&search_store_json()));
    });

    let client = client_for(&server);
    let raw = RawSearchArgs::new()
        .arg("q", "hotel california")
        .arg("page", "3")
        .arg("utm_source", "ignored");
    search(&client, raw).await.unwrap();
    mock.assert();
}

#[test]
fn search_url_uses_plus_for_spaces_and_php_arrays() {
    let server = setup_server();
    let client = client_for(&server);
    let raw = RawSearchArgs::new()
        .arg("q", "hello world")
        .arg("type", vec!["tabs", "chords"]);
    let args = format_search_query(&raw).unwrap();
    let url = search_url(&client, &args).unwrap();

    assert_eq!(url.path(), "/search.php");
    assert_eq!(
        url.query(),
        Some("type[]=200&type[]=300&page=1&value=hello+world&search_type=title&order=&q=hello+world")
    );
}

#[tokio::test]
async fn invalid_input_makes_no_request() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/search.php");
        then.status(200).body(store_html(&search_store_json()));
    });
    let client = client_for(&server);

    let err = search(&client, RawSearchArgs::new().arg("type", "tabs"))
        .await
        .unwrap_err();
    assert!(matches!(err, UgError::Validation(_)));

    let err = search(
        &client,
        RawSearchArgs::new().arg("q", "x").arg("type", "bogus-instrument"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, UgError::InvalidType(_)));

    mock.assert_hits(0);
}

#[tokio::test]
async fn upstream_failure_is_classified_unavailable() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/search.php");
        then.status(503).body("maintenance");
    });
    let client = client_for(&server);

    let err = SearchBuilder::new(&client, "x").fetch().await.unwrap_err();
    mock.assert();

    match &err {
        UgError::Fetch { status, url } => {
            assert_eq!(*status, 503);
            assert!(url.contains("/search.php"));
        }
        other => panic!("expected Fetch error, got {other:?}"),
    }
    assert_eq!(err.class(), ErrorClass::Unavailable);
    assert!(!err.is_caller_fault());
}

#[tokio::test]
async fn store_without_results_is_malformed() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/search.php");
        then.status(200)
            .body(store_html(r#"{"store":{"page":{"data":{"other":1}}}}"#));
    });
    let client = client_for(&server);

    let err = SearchBuilder::new(&client, "x").fetch().await.unwrap_err();
    mock.assert();
    assert!(matches!(err, UgError::MalformedPage(_)), "{err:?}");
    assert_eq!(err.class(), ErrorClass::UpstreamChanged);
}

#[tokio::test]
async fn missing_pagination_defaults_to_single_page() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/search.php");
        then.status(200)
            .body(store_html(r#"{"store":{"page":{"data":{"results":[]}}}}"#));
    });
    let client = client_for(&server);

    let results = SearchBuilder::new(&client, "nothing").fetch().await.unwrap();
    mock.assert();
    assert!(results.tabs.is_empty());
    assert_eq!(results.pagination.current, 1);
    assert_eq!(results.pagination.total, 1);
}

#[tokio::test]
async fn offline_search_replays_recorded_page() {
    let server = setup_server();
    let mock = mock_search_page(
        &server,
        "wonderwall",
        "search_php_type_300_page_1_value_wonderwall_search_type_title_order_q_wonderwall",
    );

    let client = client_for(&server);
    let results = SearchBuilder::new(&client, "wonderwall")
        .kind(TabType::Chords)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(results.tabs.len(), 3, "record with UG_RECORD=1 first");
    assert_eq!(results.pagination.total, 3);
    assert!(results.tabs.iter().all(|t| t.kind.as_deref() == Some("Chords")));
    assert!(
        results
            .tabs
            .iter()
            .any(|t| t.slug.as_deref() == Some("oasis/wonderwall-chords-27596"))
    );
    let adams = results
        .tabs
        .iter()
        .find(|t| t.artist.as_deref() == Some("Ryan Adams"))
        .unwrap();
    assert_eq!(adams.number_rates, Some(312));
    assert_eq!(adams.difficulty, None);
}
