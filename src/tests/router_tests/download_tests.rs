use crate::tests::utils::{body_bytes, body_string, get, header, scenario_dataset, test_app};

#[test]
fn csv_download_uses_fixed_name_and_numeric_prices() {
    let app = test_app(scenario_dataset());

    let resp = get(&app, "/download.csv?suburb=A&type=h&type=u&min_rooms=2&applied=1");
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "text/csv; charset=utf-8");
    assert_eq!(
        header(&resp, "Content-Disposition"),
        "attachment; filename=\"filtered_melbourne_housing.csv\""
    );

    let body = body_string(resp);
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Suburb,CouncilArea,Address,Price"));
    // Dataset order, not table order, and never currency strings.
    assert!(lines[1].contains(",500000"));
    assert!(lines[2].contains(",300000"));
    assert!(!body.contains('$'));
}

#[test]
fn csv_download_follows_the_filter() {
    let app = test_app(scenario_dataset());

    let body = body_string(get(&app, "/download.csv?suburb=B&type=h&min_rooms=4&applied=1"));
    let lines: Vec<&str> = body.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("B,Beta Council,\"3 Third St, Rear\",900000"));
}

#[test]
fn csv_download_of_empty_view_is_header_only() {
    let app = test_app(scenario_dataset());

    let body = body_string(get(&app, "/download.csv?applied=1"));
    assert_eq!(body.lines().count(), 1);
}

#[test]
fn xlsx_download_is_an_attachment() {
    let app = test_app(scenario_dataset());

    let resp = get(&app, "/download.xlsx?suburb=A&suburb=B&type=h&applied=1");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(header(&resp, "Content-Disposition").contains("filtered_melbourne_housing.xlsx"));
    assert!(body_bytes(resp).starts_with(b"PK"));
}
