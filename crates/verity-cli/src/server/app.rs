//! Axum application setup.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use super::state::AppState;

/// Request body ceiling. Oversized bodies are rejected with 413 before any
/// handler runs.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the Axum router with all routes.
///
/// Route names match operation registry names one-to-one, so anything that
/// works as an endpoint works as a bulk operation under the same name.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Transforms
        .route("/onlyNumbers", post(handlers::only_numbers))
        .route("/onlyLetters", post(handlers::only_letters))
        .route(
            "/onlySpecialCharacters",
            post(handlers::only_special_characters),
        )
        .route(
            "/excludeTheseCharacters",
            post(handlers::exclude_these_characters),
        )
        .route("/onlyTheseCharacters", post(handlers::only_these_characters))
        .route("/trim", post(handlers::trim))
        // Predicates
        .route("/isInteger", post(handlers::is_integer))
        .route("/isDecimal", post(handlers::is_decimal))
        .route("/isHexadecimal", post(handlers::is_hexadecimal))
        .route("/isBinaryString", post(handlers::is_binary_string))
        .route("/isAlphaNumeric", post(handlers::is_alpha_numeric))
        .route("/isAllCaps", post(handlers::is_all_caps))
        .route("/isLowercase", post(handlers::is_lowercase))
        .route("/isBoolean", post(handlers::is_boolean))
        .route("/isEmailAddress", post(handlers::is_email_address))
        .route("/isPhoneNumber", post(handlers::is_phone_number))
        .route("/isDate", post(handlers::is_date))
        .route("/isValidStateCode", post(handlers::is_valid_state_code))
        // Comparisons and locale
        .route("/isEqual", post(handlers::is_equal))
        .route("/contains", post(handlers::contains))
        .route("/isLatLong", post(handlers::is_lat_long))
        .route("/isZipCode", post(handlers::is_zip_code))
        // External collaborators
        .route("/isUrl", post(handlers::is_url))
        .route("/isCountry", post(handlers::is_country))
        .route("/isField", post(handlers::is_field))
        // Bulk operations
        .route("/bulk", post(handlers::bulk))
        .route("/operations", get(handlers::list_operations));

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(
    state: AppState,
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let ip: std::net::IpAddr = host.parse()?;
    let addr = std::net::SocketAddr::new(ip, port);

    println!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
