use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use berth_api::{app, AppState};
use berth_store::InMemoryBookingRepository;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState::new(Arc::new(InMemoryBookingRepository::default())))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

#[tokio::test]
async fn test_list_seats_starts_empty() {
    let app = test_app();

    let (status, seats) = get(&app, "/seats").await;
    assert_eq!(status, StatusCode::OK);

    let seats = seats.as_object().unwrap();
    assert_eq!(seats.len(), 20);
    assert!(seats.values().all(|v| v == &json!(false)));
    assert!(seats.contains_key("L1"));
    assert!(seats.contains_key("U10"));
}

#[tokio::test]
async fn test_booking_flow() {
    let app = test_app();

    let (status, body) = post(&app, "/book-seat", json!({"seat": "L1", "name": "Alice"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Seat booked successfully");
    assert_eq!(
        body["booking"],
        json!({"name": "Alice", "seat": "L1", "meal": "none", "price": 500})
    );

    let (_, seats) = get(&app, "/seats").await;
    assert_eq!(seats["L1"], json!(true));

    let (status, body) = post(&app, "/meal", json!({"seat": "L1", "meal": "veg"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Meal added");
    assert_eq!(body["booking"]["meal"], "veg");
    assert_eq!(body["booking"]["price"], 650);

    // surcharge is charged again on a repeat request
    let (_, body) = post(&app, "/meal", json!({"seat": "L1", "meal": "veg"})).await;
    assert_eq!(body["booking"]["price"], 800);

    let (status, history) = get(&app, "/bookings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        history,
        json!([{"name": "Alice", "seat": "L1", "meal": "veg", "price": 800}])
    );

    let (status, body) = post(&app, "/cancel", json!({"seat": "L1"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Booking cancelled"}));

    let (_, seats) = get(&app, "/seats").await;
    assert_eq!(seats["L1"], json!(false));
    let (_, history) = get(&app, "/bookings").await;
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn test_book_seat_errors() {
    let app = test_app();

    let (status, body) = post(&app, "/book-seat", json!({"seat": "L11", "name": "Alice"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid seat number"}));

    post(&app, "/book-seat", json!({"seat": "U3", "name": "Alice"})).await;
    let (status, body) = post(&app, "/book-seat", json!({"seat": "U3", "name": "Bob"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Seat already booked"}));
}

#[tokio::test]
async fn test_missing_booking_is_not_found() {
    let app = test_app();

    let (status, body) = post(&app, "/meal", json!({"seat": "L2", "meal": "veg"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Booking not found"}));

    let (status, body) = post(&app, "/cancel", json!({"seat": "L2"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Booking not found"}));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = test_app();

    let (status, body) = post(&app, "/book-seat", json!({"seat": "L1"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/cancel")
        .body(Body::from("seat=L1"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().unwrap().contains("Content-Type"));

    // nothing was booked along the way
    let (_, history) = get(&app, "/bookings").await;
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn test_stations() {
    let app = test_app();
    let expected = json!(["Ahmedabad", "Vadodara", "Surat", "Mumbai"]);

    let (status, stations) = get(&app, "/stations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stations, expected);

    post(&app, "/book-seat", json!({"seat": "U1", "name": "Alice"})).await;
    let (_, stations) = get(&app, "/stations").await;
    assert_eq!(stations, expected);
}

#[tokio::test]
async fn test_predict_tracks_occupancy() {
    let app = test_app();

    let (status, body) = get(&app, "/predict").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"confirmation_probability": "40%"}));

    let labels: Vec<String> = (1..=10)
        .map(|n| format!("L{}", n))
        .chain((1..=10).map(|n| format!("U{}", n)))
        .collect();

    for label in &labels[..11] {
        post(&app, "/book-seat", json!({"seat": label, "name": "pax"})).await;
    }
    let (_, body) = get(&app, "/predict").await;
    assert_eq!(body["confirmation_probability"], "70%");

    for label in &labels[11..17] {
        post(&app, "/book-seat", json!({"seat": label, "name": "pax"})).await;
    }
    let (_, body) = get(&app, "/predict").await;
    assert_eq!(body["confirmation_probability"], "90%");
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/book-seat")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
