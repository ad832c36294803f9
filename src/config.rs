/// Configuration constants for the CircleCI API
pub mod api {
    /// Base path for the CircleCI API v2, always with a trailing separator
    pub const BASE_PATH: &str = "api/v2/";

    /// Contexts endpoint
    pub const CONTEXT: &str = "context";

    /// Environment variables endpoint (nested under a context)
    pub const ENVIRONMENT_VARIABLE: &str = "environment-variable";

    /// Header carrying the API token
    pub const TOKEN_HEADER: &str = "circle-token";

    /// Media type requested from (and sent to) the API
    pub const JSON_MEDIA_TYPE: &str = "application/json";

    /// Owner type used when creating contexts for an organization
    pub const ORGANIZATION_OWNER_TYPE: &str = "organization";

    /// Query parameter names for listing endpoints
    pub mod params {
        pub const OWNER_ID: &str = "owner-id";
        pub const OWNER_SLUG: &str = "owner-slug";
        pub const OWNER_TYPE: &str = "owner-type";
        pub const PAGE_TOKEN: &str = "page-token";
    }

    /// Build the API server URL for a host (e.g. `https://circleci.com/api/v2/`)
    pub fn server_url(host: &str) -> String {
        format!("{}/{}", host.trim_end_matches('/'), BASE_PATH)
    }
}

/// Configuration constants for credentials and host resolution
pub mod credentials {
    /// Environment variable holding the API token
    pub const TOKEN_ENV_VAR: &str = "CIRCLECI_CLI_TOKEN";

    /// Environment variable holding the CircleCI host
    pub const HOST_ENV_VAR: &str = "CIRCLECI_CLI_HOST";

    /// Path to the CLI config file (relative to HOME)
    pub const CONFIG_FILE_PATH: &str = ".circleci/cli.yml";
}

/// Default values for CLI
pub mod defaults {
    /// Default CircleCI host
    pub const HOST: &str = "https://circleci.com";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
