use std::cell::RefCell;
use std::collections::VecDeque;

use quadrant_chart::core::AxisSelection;
use quadrant_chart::data::query::{available_lists_url, list_items_url, numeric_fields_url};
use quadrant_chart::data::{
    ItemsRequest, ListDataFetcher, ListTransport, item_id_from_page_url, parse_web_url,
};
use quadrant_chart::{QuadrantError, QuadrantResult};
use reqwest::Url;
use serde_json::{Value, json};

const WEB: &str = "https://contoso.sharepoint.com/sites/risk";

#[derive(Default)]
struct StubTransport {
    responses: RefCell<VecDeque<QuadrantResult<Value>>>,
    requested: RefCell<Vec<Url>>,
}

impl StubTransport {
    fn replying(responses: impl IntoIterator<Item = QuadrantResult<Value>>) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().collect()),
            requested: RefCell::default(),
        }
    }
}

impl ListTransport for StubTransport {
    fn get_json(&self, url: &Url) -> QuadrantResult<Value> {
        self.requested.borrow_mut().push(url.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(QuadrantError::Unexpected("no stub response".to_owned())))
    }
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

fn axes() -> AxisSelection {
    AxisSelection::new("Resolvability", "Opportunity").expect("valid axes")
}

#[test]
fn items_url_selects_id_title_and_both_measures() {
    let web = parse_web_url(WEB).expect("web url");
    let url = list_items_url(&web, "MA Issue Tmp", &["Resolvability", "Opportunity"], None)
        .expect("items url");

    assert_eq!(url.host_str(), Some("contoso.sharepoint.com"));
    assert_eq!(
        url.path(),
        "/sites/risk/_api/web/lists/getbytitle('MA%20Issue%20Tmp')/items"
    );
    assert_eq!(
        query_value(&url, "$select").as_deref(),
        Some("Id,Title,Resolvability,Opportunity")
    );
    assert_eq!(query_value(&url, "$filter"), None);
}

#[test]
fn items_url_filters_to_one_item_when_id_is_known() {
    let web = parse_web_url(WEB).expect("web url");
    let url = list_items_url(&web, "Risks", &["Resolvability"], Some(42)).expect("items url");
    assert_eq!(query_value(&url, "$filter").as_deref(), Some("Id eq 42"));
}

#[test]
fn list_title_quotes_are_doubled_in_the_path() {
    let web = parse_web_url(WEB).expect("web url");
    let url = list_items_url(&web, "Bob's Risks", &[], None).expect("items url");
    assert!(url.path().contains("getbytitle('Bob''s%20Risks')"), "{}", url.path());
}

#[test]
fn trailing_slash_on_the_web_url_is_not_doubled() {
    let web = parse_web_url("https://contoso.sharepoint.com/sites/risk/").expect("web url");
    let url = available_lists_url(&web).expect("lists url");
    assert_eq!(url.path(), "/sites/risk/_api/web/lists");
    assert_eq!(query_value(&url, "$orderby").as_deref(), Some("Title"));
}

#[test]
fn numeric_fields_url_filters_number_like_columns() {
    let web = parse_web_url(WEB).expect("web url");
    let url = numeric_fields_url(&web, "Risks").expect("fields url");
    assert!(url.path().ends_with("/getbytitle('Risks')/fields"));

    let filter = query_value(&url, "$filter").expect("filter");
    for needle in ["'Number'", "'Currency'", "'Decimal'", "Hidden eq false"] {
        assert!(filter.contains(needle), "{filter}");
    }
    assert_eq!(
        query_value(&url, "$select").as_deref(),
        Some("InternalName,Title")
    );
}

#[test]
fn invalid_web_url_is_rejected() {
    assert!(matches!(
        parse_web_url("not a url"),
        Err(QuadrantError::InvalidData(_))
    ));
    assert!(parse_web_url("mailto:someone@contoso.com").is_err());
}

#[test]
fn fetch_items_reads_value_payloads_in_server_order() {
    let transport = StubTransport::replying([Ok(json!({
        "value": [
            { "Id": 3, "Title": "Third", "Resolvability": 10, "Opportunity": 40 },
            { "Id": 1, "Title": null, "Resolvability": "33", "Opportunity": null }
        ]
    }))]);
    let fetcher = ListDataFetcher::new(&transport, WEB).expect("fetcher");

    let request = ItemsRequest::new("Risks").with_axes(&axes());
    let records = fetcher.fetch_items(&request).expect("records");

    let ids: Vec<i64> = records.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![3, 1]);
    assert_eq!(records[1].title, None);
    assert_eq!(records[1].measure("Resolvability"), Some(33.0));
    assert_eq!(records[1].measure("Opportunity"), None);

    let requested = transport.requested.borrow();
    assert_eq!(requested.len(), 1);
    assert_eq!(
        query_value(&requested[0], "$select").as_deref(),
        Some("Id,Title,Resolvability,Opportunity")
    );
}

#[test]
fn fetch_items_accepts_verbose_payloads() {
    let transport = StubTransport::replying([Ok(json!({
        "d": { "results": [ { "Id": 5, "Title": "Verbose" } ] }
    }))]);
    let fetcher = ListDataFetcher::new(&transport, WEB).expect("fetcher");

    let records = fetcher
        .fetch_items(&ItemsRequest::new("Risks"))
        .expect("records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title.as_deref(), Some("Verbose"));
}

#[test]
fn payload_without_rows_is_an_empty_list() {
    let transport = StubTransport::replying([Ok(json!({}))]);
    let fetcher = ListDataFetcher::new(&transport, WEB).expect("fetcher");
    let records = fetcher
        .fetch_items(&ItemsRequest::new("Risks"))
        .expect("records");
    assert!(records.is_empty());
}

#[test]
fn malformed_rows_are_unexpected_errors() {
    let transport = StubTransport::replying([Ok(json!({ "value": "nope" }))]);
    let fetcher = ListDataFetcher::new(&transport, WEB).expect("fetcher");
    let err = fetcher
        .fetch_items(&ItemsRequest::new("Risks"))
        .expect_err("bad payload");
    assert!(matches!(err, QuadrantError::Unexpected(_)));
}

#[test]
fn transport_errors_pass_through_unchanged() {
    let transport = StubTransport::replying([Err(QuadrantError::Transport {
        status: 404,
        reason: "Not Found".to_owned(),
    })]);
    let fetcher = ListDataFetcher::new(&transport, WEB).expect("fetcher");
    let err = fetcher
        .fetch_items(&ItemsRequest::new("Risks"))
        .expect_err("transport failure");
    assert_eq!(err.to_string(), "Failed to fetch list items: 404 Not Found");
}

#[test]
fn available_lists_skip_untitled_rows() {
    let transport = StubTransport::replying([Ok(json!({
        "value": [ { "Title": "Issues" }, { "Title": "" }, { "Id": "x" }, { "Title": "Risks" } ]
    }))]);
    let fetcher = ListDataFetcher::new(&transport, WEB).expect("fetcher");
    let titles: Vec<String> = fetcher
        .fetch_available_lists()
        .expect("lists")
        .into_iter()
        .map(|option| option.title)
        .collect();
    assert_eq!(titles, vec!["Issues", "Risks"]);
}

#[test]
fn measure_catalog_resolves_display_names_and_checks_axes() {
    let transport = StubTransport::replying([Ok(json!({
        "value": [
            { "InternalName": "Resolvability", "Title": "Ease of Resolution" },
            { "InternalName": "Opportunity", "Title": "" }
        ]
    }))]);
    let fetcher = ListDataFetcher::new(&transport, WEB).expect("fetcher");
    let catalog = fetcher.fetch_measure_catalog("Risks").expect("catalog");

    assert_eq!(catalog.measures.len(), 2);
    assert_eq!(catalog.display_name("Resolvability"), "Ease of Resolution");
    assert_eq!(catalog.display_name("Opportunity"), "Opportunity");
    assert_eq!(catalog.display_name("Unknown"), "Unknown");
    catalog.ensure_contains(&axes()).expect("both axes known");

    let other = AxisSelection::new("Resolvability", "Cost").expect("valid axes");
    assert_eq!(
        catalog.ensure_contains(&other),
        Err(QuadrantError::UnknownMeasure {
            list: "Risks".to_owned(),
            field: "Cost".to_owned(),
        })
    );
}

#[test]
fn page_id_parameter_must_be_an_integer() {
    assert_eq!(
        item_id_from_page_url("https://contoso.sharepoint.com/sites/risk/Page.aspx?ID=17"),
        Some(17)
    );
    assert_eq!(
        item_id_from_page_url("https://contoso.sharepoint.com/Page.aspx?foo=1&ID=%2023%20"),
        Some(23)
    );
    assert_eq!(
        item_id_from_page_url("https://contoso.sharepoint.com/Page.aspx?ID=1%20or%201%20eq%201"),
        None
    );
    assert_eq!(
        item_id_from_page_url("https://contoso.sharepoint.com/Page.aspx?id=17"),
        None
    );
    assert_eq!(item_id_from_page_url("not a url"), None);
}
