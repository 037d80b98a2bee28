use crate::domain::{render, render_home, FilterState};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{asset_response, html_response, json_response};
use crate::spreadsheets::{export_listings_csv, export_listings_xlsx};
use crate::state::AppState;
use crate::templates;
use astra::Request;

const ROUTES: [&str; 5] = ["/", "/download.csv", "/download.xlsx", "/api/view", "/static/banner"];

/// Every request re-runs the whole pipeline: query → filter state →
/// filtered view → response.
pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query();

    tracing::debug!(method, path, query, "handling request");

    if method != "GET" {
        return Err(if ROUTES.contains(&path) {
            ServerError::MethodNotAllowed
        } else {
            ServerError::NotFound
        });
    }

    let dataset = &app.dataset;

    match path {
        "/" => {
            let state = FilterState::from_query(query, dataset);
            let view = render(dataset, &state);
            html_response(templates::pages::dashboard_page(&view, dataset, &state))
        }
        "/download.csv" => {
            let state = FilterState::from_query(query, dataset);
            let filtered = state.apply(dataset);
            tracing::info!(rows = filtered.len(), "exporting listings as CSV");
            export_listings_csv(&filtered)
        }
        "/download.xlsx" => {
            let state = FilterState::from_query(query, dataset);
            let filtered = state.apply(dataset);
            tracing::info!(rows = filtered.len(), "exporting listings as XLSX");
            export_listings_xlsx(&filtered)
        }
        "/api/view" => {
            let state = FilterState::from_query(query, dataset);
            json_response(&render_home(dataset, &state))
        }
        "/static/banner" => asset_response(&app.banner),
        _ => Err(ServerError::NotFound),
    }
}
