use crate::environment;
use std::env;

pub fn cors_filter(allowed_methods: Vec<&str>) -> warp::filters::cors::Builder {
    let builder = warp::cors()
        .allow_methods(allowed_methods)
        .allow_headers(vec!["content-type"]);

    // a demo deployment has no fixed frontend host
    if environment::get_environment() == environment::Environment::Development {
        return builder.allow_any_origin();
    }

    let fe_origins: Vec<String> = accepted_fe_origins();
    let fe_origins_ref: Vec<&str> = fe_origins.iter().map(String::as_str).collect();

    builder.allow_origins(fe_origins_ref)
}

fn accepted_fe_origins() -> Vec<String> {
    // a comma separated list of host origins
    // e.g. ALLOWED_FE_ORIGINS=http://host1.com,https://host2.net
    match env::var("ALLOWED_FE_ORIGINS") {
        Ok(fe_origin) => fe_origin.split(',').map(str::to_owned).collect(),
        Err(e) => panic!("No CORS FE origins set, error: {}", e),
    }
}
