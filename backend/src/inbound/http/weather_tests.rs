//! Tests for weather HTTP handlers.

use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::domain::ports::{FixtureZipcodeWeatherQuery, MockZipcodeWeatherQuery};
use crate::domain::{ClassifiedError, TRACE_ID_HEADER, TraceId, WeatherReading, WeatherResult};
use crate::middleware::Trace;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::{Value, json};

fn state_with(query: MockZipcodeWeatherQuery) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(query), Duration::from_secs(5)))
}

fn vila_velha() -> WeatherResult {
    WeatherResult::from_reading(
        "Vila Velha",
        WeatherReading {
            temp_c: 28.5,
            temp_f: 83.3,
        },
    )
}

async fn call(
    state: web::Data<HttpState>,
    configure: fn(&mut web::ServiceConfig),
    req: actix_test::TestRequest,
) -> actix_web::dev::ServiceResponse {
    let app = actix_test::init_service(
        App::new()
            .app_data(state)
            .wrap(Trace)
            .configure(configure),
    )
    .await;
    actix_test::call_service(&app, req.to_request()).await
}

#[actix_web::test]
async fn gateway_returns_the_converted_result() {
    let mut query = MockZipcodeWeatherQuery::new();
    query
        .expect_weather_for_zipcode()
        .withf(|_, raw| raw == "29902555")
        .times(1)
        .return_once(|_, _| Ok(vila_velha()));

    let res = call(
        state_with(query),
        configure_gateway,
        actix_test::TestRequest::post()
            .uri("/weather")
            .set_json(json!({"cep": "29902555"})),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = actix_test::read_body(res).await;
    assert_eq!(
        body.as_ref(),
        br#"{"city":"Vila Velha","temp_C":28.5,"temp_F":83.3,"temp_K":301.5}"#
    );
}

#[rstest]
#[case::not_json("cep=29902555")]
#[case::wrong_type(r#"{"cep": 29902555}"#)]
#[case::truncated(r#"{"cep": "29902555""#)]
#[actix_web::test]
async fn gateway_rejects_malformed_bodies(#[case] body: &'static str) {
    let mut query = MockZipcodeWeatherQuery::new();
    query.expect_weather_for_zipcode().never();

    let res = call(
        state_with(query),
        configure_gateway,
        actix_test::TestRequest::post()
            .uri("/weather")
            .insert_header(("content-type", "application/json"))
            .set_payload(body),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert!(
        body.as_str().is_some_and(|message| !message.is_empty()),
        "body should be the parse error as a JSON string: {body}"
    );
}

#[actix_web::test]
async fn gateway_treats_a_missing_field_as_an_empty_code() {
    let mut query = MockZipcodeWeatherQuery::new();
    query
        .expect_weather_for_zipcode()
        .withf(|_, raw| raw.is_empty())
        .times(1)
        .return_once(|_, _| Err(ClassifiedError::invalid_zipcode()));

    let res = call(
        state_with(query),
        configure_gateway,
        actix_test::TestRequest::post()
            .uri("/weather")
            .set_json(json!({})),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!("invalid zipcode"));
}

#[rstest]
#[case(ClassifiedError::invalid_zipcode(), StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode")]
#[case(ClassifiedError::zipcode_not_found(), StatusCode::NOT_FOUND, "can not find zipcode")]
#[case(ClassifiedError::transport(None, "connection refused"), StatusCode::BAD_REQUEST, "connection refused")]
#[case(ClassifiedError::decode("missing field `current`"), StatusCode::INTERNAL_SERVER_ERROR, "missing field `current`")]
#[actix_web::test]
async fn orchestrator_renders_classified_errors(
    #[case] error: ClassifiedError,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let mut query = MockZipcodeWeatherQuery::new();
    query
        .expect_weather_for_zipcode()
        .times(1)
        .return_once(move |_, _| Err(error));

    let res = call(
        state_with(query),
        configure_orchestrator,
        actix_test::TestRequest::get().uri("/weather/29902555"),
    )
    .await;

    assert_eq!(res.status(), status);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!(message));
}

#[actix_web::test]
async fn orchestrator_passes_the_path_segment_through() {
    let mut query = MockZipcodeWeatherQuery::new();
    query
        .expect_weather_for_zipcode()
        .withf(|_, raw| raw == "29902-555")
        .times(1)
        .return_once(|_, _| Ok(vila_velha()));

    let res = call(
        state_with(query),
        configure_orchestrator,
        actix_test::TestRequest::get().uri("/weather/29902-555"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: WeatherResult = actix_test::read_body_json(res).await;
    assert_eq!(body, vila_velha());
}

#[rstest]
#[case("/weather")]
#[case("/weather/")]
#[actix_web::test]
async fn orchestrator_requires_a_zipcode(#[case] uri: &str) {
    let mut query = MockZipcodeWeatherQuery::new();
    query.expect_weather_for_zipcode().never();

    let res = call(
        state_with(query),
        configure_orchestrator,
        actix_test::TestRequest::get().uri(uri),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"message": "Parameter 'cep' is mandatory"}));
}

#[actix_web::test]
async fn handlers_forward_the_request_trace_id() {
    let incoming = TraceId::generate();
    let mut query = MockZipcodeWeatherQuery::new();
    query
        .expect_weather_for_zipcode()
        .withf(move |ctx, _| ctx.trace_id() == Some(incoming) && ctx.remaining().is_some())
        .times(1)
        .return_once(|_, _| Ok(vila_velha()));

    let res = call(
        state_with(query),
        configure_orchestrator,
        actix_test::TestRequest::get()
            .uri("/weather/29902555")
            .insert_header((TRACE_ID_HEADER, incoming.to_string())),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some(incoming.to_string().as_str())
    );
}

#[actix_web::test]
async fn fixture_query_serves_a_fixed_reading() {
    let state = web::Data::new(HttpState::new(
        Arc::new(FixtureZipcodeWeatherQuery),
        Duration::from_secs(1),
    ));
    let res = call(
        state,
        configure_orchestrator,
        actix_test::TestRequest::get().uri("/weather/01001000"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["city"], "São Paulo");
    assert_eq!(body["temp_K"], 298.0);
}
