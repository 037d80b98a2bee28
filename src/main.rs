use crate::assets::Banner;
use crate::config::Config;
use crate::data::load_dataset;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;

mod assets;
mod config;
mod data;
mod domain;
mod errors;
mod logging;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = Config::parse_args();
    logging::init_logging(config.log_format);

    // 1️⃣ Load the listings once; every request borrows them.
    let dataset = match load_dataset(&config.data) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!(error = %e, path = %config.data.display(), "failed to load listings");
            std::process::exit(1);
        }
    };

    let report = dataset.report();
    tracing::info!(
        listings = dataset.len(),
        rows_read = report.rows_read,
        rows_dropped = report.rows_dropped,
        "listings loaded"
    );

    // 2️⃣ The banner must exist before we serve a page that points at it.
    let banner = match Banner::load(&config.banner) {
        Ok(banner) => banner,
        Err(e) => {
            tracing::error!(error = %e, "failed to load banner image");
            std::process::exit(1);
        }
    };

    let app = AppState::new(dataset, banner);

    // 3️⃣ Start the server
    tracing::info!(addr = %config.bind, workers = config.workers, "starting server");

    let server = Server::bind(&config.bind).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
