pub mod records;

pub const HEALTH_CHECK: &str = "HEALTH CHECK OK!";

pub const VERSION: &str = "The actual version is 1.0.0";

pub async fn health_check() -> &'static str {
    HEALTH_CHECK
}

pub async fn version() -> &'static str {
    VERSION
}
