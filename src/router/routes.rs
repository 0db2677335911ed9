use std::convert::Infallible;

use warp::hyper::StatusCode;
use warp::{Filter, Rejection};

use crate::config::AppConfig;

use super::custom_reply::CustomReply;
use super::route_convert::convert_route;
use super::route_index::index_route;

pub fn routes(
    config: AppConfig,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    convert_route(config)
        .or(index_route())
        .recover(handle_rejection)
        .with(warp::trace::request())
}

pub fn with_data<T: Clone + Send>(
    data: T,
) -> impl Filter<Extract = (T,), Error = Infallible> + Clone {
    warp::any().map(move || data.clone())
}

pub fn not_found_reply() -> CustomReply {
    CustomReply::text(StatusCode::NOT_FOUND, "Not Found")
}

// Wrong method on a known path is reported as 404 like any other miss.
pub async fn handle_rejection(_err: Rejection) -> Result<CustomReply, Infallible> {
    Ok(not_found_reply())
}
