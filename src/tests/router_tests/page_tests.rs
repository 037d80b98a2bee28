use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, request, scenario_dataset, test_app};
use http::Method;

#[test]
fn home_page_loads_with_default_filters() {
    let app = test_app(scenario_dataset());

    let resp = get(&app, "/");
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/html"));

    let body = body_string(resp);
    assert!(body.contains("Melbourne Property Listings"));
    // Defaults: suburb A only, every type, two rooms.
    assert!(body.contains("Showing</strong> 2 listing based on your filter."));
    assert!(body.contains(r#"<option value="A" selected>A</option>"#));
    assert!(body.contains(r#"<option value="B">B</option>"#));
    assert!(body.contains(r#"src="/static/banner""#));
}

#[test]
fn scenario_page_shows_metrics_and_sorted_table() {
    let app = test_app(scenario_dataset());

    let body = body_string(get(
        &app,
        "/?page=home&suburb=A&type=h&type=u&min_rooms=2&applied=1",
    ));

    assert!(body.contains("$400,000"));
    assert!(body.contains("$500,000"));

    let table_start = body.find("<table").expect("table should render");
    let table_end = body.find("</table>").expect("table should close");
    let table = &body[table_start..table_end];

    let expensive = table.find("$500,000").expect("500k row");
    let cheap = table.find("$300,000").expect("300k row");
    assert!(expensive < cheap);
    assert!(!table.contains("$900,000"));

    assert!(body.contains("Total points plotted: 2"));
}

#[test]
fn empty_selection_shows_placeholders() {
    let app = test_app(scenario_dataset());

    let body = body_string(get(&app, "/?applied=1&type=h&type=u"));

    assert!(body.contains("Showing</strong> 0 listing"));
    assert_eq!(body.matches("N/A").count(), 2);
    assert!(body.contains("No listings match the current filters."));
    assert!(body.contains("Total points plotted: 0"));
    assert!(!body.contains("<circle"));
}

#[test]
fn about_page_is_static() {
    let app = test_app(scenario_dataset());

    let body = body_string(get(&app, "/?page=about"));

    assert!(body.contains("About This Dashboard"));
    assert!(!body.contains("Average Price"));
    // Sidebar still present so the selection carries over.
    assert!(body.contains("Select Suburbs"));
}

#[test]
fn unknown_path_is_not_found() {
    let app = test_app(scenario_dataset());

    let result = handle(request(Method::GET, "/nope"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn wrong_method_is_rejected() {
    let app = test_app(scenario_dataset());

    let result = handle(request(Method::POST, "/"), &app);
    assert!(matches!(result, Err(ServerError::MethodNotAllowed)));
}

#[test]
fn errors_render_as_html_pages() {
    let resp = error_to_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);

    let body = body_string(resp);
    assert!(body.contains("Error 404"));
    assert!(body.contains("Not Found"));

    let resp = error_to_response(ServerError::ExportError("disk on fire".into()));
    assert_eq!(resp.status(), 500);
    assert!(!body_string(resp).contains("disk on fire"));
}

#[test]
fn banner_is_served_with_its_content_type() {
    let app = test_app(scenario_dataset());

    let resp = get(&app, "/static/banner");
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "image/svg+xml");
    assert!(body_string(resp).starts_with("<svg"));
}

#[test]
fn strip_chart_uses_currency_ticks_and_teal_markers() {
    let app = test_app(scenario_dataset());

    // Defaults select suburb A only: prices 300,000 and 500,000.
    let body = body_string(get(&app, "/"));
    let start = body.find(r#"class="strip""#).expect("strip chart rendered");
    let end = start + body[start..].find("</svg>").expect("strip chart closed");
    let svg = &body[start..end];

    for tick in ["$300,000", "$400,000", "$500,000"] {
        assert!(svg.contains(&format!(">{tick}</text>")), "missing tick {tick}");
    }
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains(r#"fill="teal""#));
    assert!(svg.contains(r#"fill-opacity="0.5""#));
    assert!(svg.contains("Price (AUD)"));
    assert!(svg.contains("Suburb=A, Price (AUD)=$500,000"));
}
