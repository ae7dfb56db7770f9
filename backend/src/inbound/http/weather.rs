//! Weather HTTP handlers.
//!
//! ```text
//! POST /weather              (gateway)       body {"cep": "29902555"}
//! GET  /weather/{zipcode}    (orchestrator)
//! GET  /weather[/]           (orchestrator)  400, missing parameter
//! ```
//!
//! Both services answer through the same [`ZipcodeWeatherQuery`] port held in
//! [`HttpState`]; the gateway wires it to the remote orchestrator and the
//! orchestrator wires it to the in-process pipeline.
//!
//! [`ZipcodeWeatherQuery`]: crate::domain::ports::ZipcodeWeatherQuery

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::WeatherResultSchema;
use crate::inbound::http::state::HttpState;

/// Message returned when the orchestrator route has no zipcode segment.
pub const MISSING_ZIPCODE_MESSAGE: &str = "Parameter 'cep' is mandatory";

/// Request payload accepted by the gateway.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ZipcodeRequest {
    /// Raw postal code; eight digits, optionally hyphenated after the fifth.
    /// An absent field is treated as an empty code.
    #[serde(default)]
    #[schema(example = "29902555")]
    pub cep: String,
}

/// Body returned when the zipcode path parameter is missing.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MissingParameterResponse {
    #[schema(example = "Parameter 'cep' is mandatory")]
    pub message: String,
}

async fn answer(state: &HttpState, raw_zipcode: &str) -> ApiResult<HttpResponse> {
    let ctx = state.request_context();
    let result = state.weather.weather_for_zipcode(&ctx, raw_zipcode).await;
    match &result {
        Ok(weather) => info!(city = %weather.city, "weather resolved"),
        Err(error) => info!(
            status = error.status(),
            reason = error.message(),
            "weather lookup failed"
        ),
    }
    Ok(HttpResponse::Ok().json(result?))
}

/// Resolve the weather for a postal code sent in the request body.
#[utoipa::path(
    post,
    path = "/weather",
    description = "Validate the postal code and forward it to the orchestration service.",
    request_body = ZipcodeRequest,
    responses(
        (status = 200, description = "Converted temperatures", body = WeatherResultSchema),
        (status = 400, description = "Malformed body or upstream request failure", body = String),
        (status = 404, description = "Postal code not found", body = String),
        (status = 422, description = "Invalid postal code", body = String),
        (status = 500, description = "Upstream body could not be decoded", body = String)
    ),
    tags = ["weather"],
    operation_id = "postWeather"
)]
#[post("/weather")]
pub async fn post_weather(
    state: web::Data<HttpState>,
    payload: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request: ZipcodeRequest = match serde_json::from_slice(&payload) {
        Ok(request) => request,
        Err(error) => return Ok(HttpResponse::BadRequest().json(error.to_string())),
    };
    answer(&state, &request.cep).await
}

/// Resolve the weather for a postal code given in the path.
#[utoipa::path(
    get,
    path = "/weather/{zipcode}",
    description = "Resolve the postal code to a city and fetch its current temperatures.",
    params(("zipcode" = String, Path, description = "Postal code, `nnnnnnnn` or `nnnnn-nnn`")),
    responses(
        (status = 200, description = "Converted temperatures", body = WeatherResultSchema),
        (status = 400, description = "Upstream request failure", body = String),
        (status = 404, description = "Postal code not found", body = String),
        (status = 422, description = "Invalid postal code", body = String),
        (status = 500, description = "Upstream body could not be decoded", body = String)
    ),
    tags = ["weather"],
    operation_id = "getWeather"
)]
#[get("/weather/{zipcode}")]
pub async fn get_weather(
    state: web::Data<HttpState>,
    zipcode: web::Path<String>,
) -> ApiResult<HttpResponse> {
    answer(&state, &zipcode).await
}

/// Reject orchestrator requests that omit the zipcode segment.
#[utoipa::path(
    get,
    path = "/weather",
    responses(
        (status = 400, description = "Zipcode path parameter missing", body = MissingParameterResponse)
    ),
    tags = ["weather"],
    operation_id = "getWeatherMissingZipcode"
)]
pub async fn missing_zipcode() -> HttpResponse {
    HttpResponse::BadRequest().json(MissingParameterResponse {
        message: MISSING_ZIPCODE_MESSAGE.to_owned(),
    })
}

/// Register the gateway's weather route.
pub fn configure_gateway(cfg: &mut web::ServiceConfig) {
    cfg.service(post_weather);
}

/// Register the orchestrator's weather routes.
pub fn configure_orchestrator(cfg: &mut web::ServiceConfig) {
    cfg.service(get_weather).service(
        web::resource(["/weather", "/weather/"]).route(web::get().to(missing_zipcode)),
    );
}

#[cfg(test)]
#[path = "weather_tests.rs"]
mod tests;
