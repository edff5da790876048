pub mod meta {
    pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
    pub const SERVER_NAME: &str = "SERVER_NAME";
    pub const SERVER_PORT: &str = "SERVER_PORT";
    pub const REQUEST_URI: &str = "REQUEST_URI";
    pub const SCRIPT_NAME: &str = "SCRIPT_NAME";
    pub const REQUEST_SCHEME: &str = "REQUEST_SCHEME";
    pub const HTTP_ACCEPT: &str = "HTTP_ACCEPT";
    pub const HTTP_X_FORWARDED_PROTO: &str = "HTTP_X_FORWARDED_PROTO";

    /// Keys every hosting environment must supply, in validation order.
    pub const REQUIRED: [&str; 5] = [
        REQUEST_METHOD,
        SERVER_NAME,
        SERVER_PORT,
        REQUEST_URI,
        SCRIPT_NAME,
    ];
}

pub mod scheme {
    pub const HTTP: &str = "http";
    pub const HTTPS: &str = "https";
}

pub mod port {
    pub const HTTP: i64 = 80;
    pub const HTTPS: i64 = 443;
}

pub mod media {
    pub const TEXT_HTML: &str = "text/html";
}
