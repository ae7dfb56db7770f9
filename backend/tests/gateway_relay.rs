//! Gateway behaviour in front of a live orchestrator.
//!
//! The orchestrator runs as a real `HttpServer` on an ephemeral port so the
//! gateway's outbound hop, and the trace identifier it carries, cross an
//! actual socket.

#[path = "support/providers.rs"]
mod providers;

use std::net::SocketAddr;
use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{
    App, HttpServer,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    test, web,
};
use backend::Trace;
use backend::domain::{TRACE_ID_HEADER, TraceId};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::weather::{configure_gateway, configure_orchestrator};
use backend::outbound::orchestrator::OrchestratorHttpClient;
use httpmock::Method::GET;
use httpmock::MockServer;
use serde_json::{Value, json};

use providers::{REQUEST_BUDGET, closed_port_url, endpoint, stubbed_orchestrator_state, transport};

fn gateway_state(orchestrator: &str) -> web::Data<HttpState> {
    let client = OrchestratorHttpClient::new(transport(), endpoint(orchestrator));
    web::Data::new(HttpState::new(Arc::new(client), REQUEST_BUDGET))
}

async fn init_gateway(
    orchestrator: String,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(gateway_state(&orchestrator))
            .wrap(Trace)
            .configure(configure_gateway),
    )
    .await
}

/// Run an orchestrator backed by the stubbed providers; returns its address.
fn spawn_orchestrator(providers: &MockServer) -> std::io::Result<(SocketAddr, ServerHandle)> {
    let state = stubbed_orchestrator_state(providers);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Trace)
            .configure(configure_orchestrator)
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))?;
    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| std::io::Error::other("no bound address"))?;
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    Ok((addr, handle))
}

fn post_cep(cep: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/weather")
        .set_json(json!({ "cep": cep }))
}

#[actix_web::test]
async fn relays_the_orchestrator_result_and_trace_id() {
    let providers = MockServer::start_async().await;
    let trace_id = TraceId::generate();
    let directory = providers
        .mock_async(|when, then| {
            when.method(GET)
                .path("/ws/29902-555/json/")
                .header(TRACE_ID_HEADER, trace_id.to_string());
            then.status(200)
                .body(r#"{"cep":"29902-555","localidade":"Vila Velha","uf":"ES"}"#);
        })
        .await;
    providers
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/current.json")
                .header(TRACE_ID_HEADER, trace_id.to_string());
            then.status(200)
                .body(r#"{"current":{"temp_c":28.5,"temp_f":83.3}}"#);
        })
        .await;
    let (addr, handle) = spawn_orchestrator(&providers).expect("orchestrator starts");

    let gateway = init_gateway(format!("http://{addr}")).await;
    let res = test::call_service(
        &gateway,
        post_cep("29902555")
            .insert_header((TRACE_ID_HEADER, trace_id.to_string()))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some(trace_id.to_string().as_str())
    );
    let body = test::read_body(res).await;
    assert_eq!(
        body.as_ref(),
        br#"{"city":"Vila Velha","temp_C":28.5,"temp_F":83.3,"temp_K":301.5}"#
    );
    directory.assert_hits_async(1).await;
    handle.stop(true).await;
}

#[actix_web::test]
async fn relays_orchestrator_errors_verbatim() {
    let providers = MockServer::start_async().await;
    providers
        .mock_async(|when, then| {
            when.method(GET).path("/ws/00000-000/json/");
            then.status(200).body(r#"{"erro": true}"#);
        })
        .await;
    let (addr, handle) = spawn_orchestrator(&providers).expect("orchestrator starts");

    let gateway = init_gateway(format!("http://{addr}")).await;
    let res = test::call_service(&gateway, post_cep("00000000").to_request()).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!("can not find zipcode"));
    handle.stop(true).await;
}

#[actix_web::test]
async fn invalid_zipcode_never_reaches_the_orchestrator() {
    let orchestrator = MockServer::start_async().await;
    let any = orchestrator
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200);
        })
        .await;

    let gateway = init_gateway(orchestrator.base_url()).await;
    let res = test::call_service(&gateway, post_cep("123").to_request()).await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!("invalid zipcode"));
    any.assert_hits_async(0).await;
}

#[actix_web::test]
async fn unreachable_orchestrator_is_a_bad_request() {
    let gateway = init_gateway(closed_port_url()).await;
    let res = test::call_service(&gateway, post_cep("29902-555").to_request()).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert!(
        body.as_str().is_some_and(|message| !message.is_empty()),
        "expected the transport error text: {body}"
    );
}
