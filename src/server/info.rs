use super::cors;
use crate::application::info::gateway;

use warp::Filter;

pub fn info_server() -> warp::filters::BoxedFilter<(impl warp::reply::Reply,)> {
    let api_info_path = with_info_gateway()
        .and(warp::path::end())
        .and(warp::get())
        .and_then(api_info)
        .with(cors::cors_filter(vec!["GET"]))
        .boxed();

    api_info_path.boxed()
}

fn with_info_gateway() -> warp::filters::BoxedFilter<(gateway::Gateway,)> {
    let gateway = gateway::Gateway::new();

    warp::any().map(move || gateway.clone()).boxed()
}

async fn api_info(
    info_gateway: gateway::Gateway,
) -> Result<Box<dyn warp::Reply>, warp::Rejection> {
    Ok(info_gateway.api_info().await)
}
