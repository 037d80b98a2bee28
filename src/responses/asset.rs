use crate::assets::Banner;
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

pub fn asset_response(banner: &Banner) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", banner.content_type().to_string())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(banner.bytes().to_vec()))
        .map_err(|_| ServerError::InternalError)
}
