use crate::tests::utils::{body_string, get, header, scenario_dataset, test_app};
use serde_json::Value;

#[test]
fn view_model_is_served_as_json() {
    let app = test_app(scenario_dataset());

    let resp = get(&app, "/api/view?suburb=A&type=h&type=u&min_rooms=2&applied=1");
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "application/json");

    let view: Value = serde_json::from_str(&body_string(resp)).expect("body should be JSON");

    assert_eq!(view["listing_count"], 2);
    assert_eq!(view["average_price"], "$400,000");
    assert_eq!(view["max_price"], "$500,000");
    assert_eq!(view["filter"]["page"], "home");
    assert_eq!(view["filter"]["min_rooms"], 2);

    let rows = view["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["price"], 500000.0);
    assert_eq!(rows[0]["price_display"], "$500,000");

    assert_eq!(view["points_plotted"], 2);
    assert_eq!(view["histogram"]["categories"][0]["label"], "A");
}

#[test]
fn view_model_for_empty_selection_uses_placeholders() {
    let app = test_app(scenario_dataset());

    let view: Value = serde_json::from_str(&body_string(get(&app, "/api/view?applied=1")))
        .expect("body should be JSON");

    assert_eq!(view["listing_count"], 0);
    assert_eq!(view["average_price"], "N/A");
    assert_eq!(view["summary"]["mean"], Value::Null);
    assert_eq!(view["points_plotted"], 0);
}
