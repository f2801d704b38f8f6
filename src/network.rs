//! Network constants for the Mailchimp Marketing API.

/// Data-center segment used when no `location` is configured.
pub const DEFAULT_LOCATION: &str = "us12";

/// Host suffix appended to the data-center segment.
pub const API_HOST_SUFFIX: &str = "api.mailchimp.com";

/// Path prefix for every v3 endpoint.
pub const API_VERSION_PREFIX: &str = "/3.0";

/// Username sent with HTTP Basic auth. Mailchimp ignores it; only the key matters.
pub const BASIC_AUTH_USER: &str = "anystring";

/// `User-Agent` header value.
pub const USER_AGENT: &str = concat!("mailchimp-v3-rust/", env!("CARGO_PKG_VERSION"));

/// Build the HTTPS base URL for a data-center segment.
pub fn base_url_for(location: &str) -> String {
    format!("https://{}.{}", location, API_HOST_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_for_location() {
        assert_eq!(base_url_for("us12"), "https://us12.api.mailchimp.com");
        assert_eq!(base_url_for("us6"), "https://us6.api.mailchimp.com");
    }
}
