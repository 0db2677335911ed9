use warp::{Filter, Rejection, Reply};

use super::custom_reply::CustomReply;

const LANDING_PAGE: &str = include_str!("landing.html");

pub async fn index_route_handler() -> Result<impl Reply, Rejection> {
    Ok(CustomReply::html(LANDING_PAGE))
}

pub fn index_route() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .and_then(index_route_handler)
}
