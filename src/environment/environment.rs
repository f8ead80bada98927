use std::env;

#[derive(PartialEq)]
pub enum Environment {
    Development,
    Production,
}

pub fn get_environment() -> Environment {
    let env_var_result = env::var("ENVIRONMENT");

    match env_var_result {
        Ok(env_var_str) => match env_var_str.as_str() {
            "development" => Environment::Development,
            "production" => Environment::Production,
            _ => panic!("Invalid environment set, environment: {}", env_var_str),
        },
        // unset means a local demo run
        Err(_) => Environment::Development,
    }
}
