use httpmock::Method::GET;
use url::Url;
use ugtabs_rs::{UgError, get_tab, get_tabs_list};

use crate::common::{client_for, search_store_json, setup_server, store_html};

fn tab_page_json() -> String {
    r#"{"store":{"page":{"data":{
        "tab":{"artist_name":"Oasis","song_name":"Wonderwall","type":"Chords",
               "tab_url":"https://tabs.ultimate-guitar.com/tab/oasis/wonderwall-chords-27596",
               "rating":4.83712,"votes":23911},
        "tab_view":{
            "wiki_tab":{"content":"[tab][ch]Em7[/ch] [ch]G[/ch]\r\nToday is gonna be[/tab]"},
            "meta":{"tuning":{"name":"Standard","value":"E A D G B E"}},
            "ug_difficulty":"novice"
        }
    }}}}"#
        .to_string()
}

#[tokio::test]
async fn tabs_list_keeps_raw_shape() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/search.php").query_param("q", "x");
        then.status(200).body(store_html(&search_store_json()));
    });
    let client = client_for(&server);
    let url = Url::parse(&server.url("/search.php?q=x")).unwrap();

    let page = get_tabs_list(&client, url).await.unwrap();
    mock.assert();

    assert_eq!(page.tabs.len(), 2);
    assert_eq!(page.tabs[0].artist_name.as_deref(), Some("Oasis"));
    assert_eq!(page.tabs[0].rating, Some(4.83712));
    assert_eq!(page.pagination.total, 4);
}

#[tokio::test]
async fn get_tab_merges_content_and_meta() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/tab/oasis/wonderwall-chords-27596");
        then.status(200).body(store_html(&tab_page_json()));
    });
    let client = client_for(&server);

    let tab = get_tab(&client, "tab/oasis/wonderwall-chords-27596")
        .await
        .unwrap();
    mock.assert();

    assert_eq!(tab.name.as_deref(), Some("Wonderwall"));
    assert_eq!(tab.slug.as_deref(), Some("oasis/wonderwall-chords-27596"));
    assert_eq!(tab.tuning.as_deref(), Some("E A D G B E"));
    assert_eq!(tab.difficulty.as_deref(), Some("novice"));
    assert_eq!(
        tab.raw_tabs.as_deref(),
        Some("[tab][ch]Em7[/ch] [ch]G[/ch]\r\nToday is gonna be[/tab]")
    );
    let html = tab.html_tab.unwrap();
    assert!(html.starts_with("<pre>"));
    assert!(html.contains("<span class=\"chord\">Em7</span>"));
    assert!((tab.rating.unwrap() - 4.84).abs() < 1e-9);
}

#[tokio::test]
async fn get_tab_falls_back_to_fetched_url() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/tab/a/b-1");
        then.status(200)
            .body(store_html(r#"{"store":{"page":{"data":{"tab":{"song_name":"B"}}}}}"#));
    });
    let client = client_for(&server);

    let tab = get_tab(&client, &server.url("/tab/a/b-1")).await.unwrap();
    mock.assert();
    assert_eq!(tab.slug.as_deref(), Some("a/b-1"));
    assert_eq!(tab.raw_tabs, None);
}

#[tokio::test]
async fn tab_page_without_tab_record_is_malformed() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/tab/a/b-2");
        then.status(200)
            .body(store_html(r#"{"store":{"page":{"data":{"results":[]}}}}"#));
    });
    let client = client_for(&server);

    let err = get_tab(&client, "/tab/a/b-2").await.unwrap_err();
    mock.assert();
    assert!(matches!(err, UgError::MalformedPage(_)), "{err:?}");
}
