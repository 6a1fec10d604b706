use crate::schema::ColloquyConfig;

use super::helpers::validate_range;

pub(super) fn validate_api(errors: &mut Vec<String>, config: &ColloquyConfig) {
    let api = &config.api;

    if api.model.trim().is_empty() {
        errors.push("api.model must not be empty".into());
    }

    if !(api.endpoint.starts_with("https://") || api.endpoint.starts_with("http://")) {
        errors.push(format!(
            "api.endpoint = {:?} must be an http(s) URL",
            api.endpoint
        ));
    }

    validate_range(
        errors,
        "api.connect_timeout_secs",
        api.connect_timeout_secs,
        1,
        120,
    );
    validate_range(errors, "api.timeout_secs", api.timeout_secs, 1, 600);
}
