use crate::backend::BookingBackend;
use crate::configuration::Configuration;
use crate::types::{
    GalleryImageChanges, NewAppointment, NewGalleryImage, NewUnavailability,
    UnavailabilityChanges, STATUS_PENDING,
};
use crate::validation::CustomerInfo;
use axum::extract::{Query, Request, State};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_valid::Valid;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct AppState<T: BookingBackend, C: Configuration> {
    pub backend: T,
    pub configuration: C,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct BookingRequest {
    barber_name: String,
    service: String,
    date: String,
    time: String,
    #[serde(default)]
    price: String,
    duration: Option<i32>,
    #[validate(nested)]
    customer: CustomerInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BarberDateQuery {
    barber_name: String,
    date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UpdateImageRequest {
    id: Uuid,
    image_url: String,
    title: Option<String>,
    description: Option<String>,
    display_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteImageRequest {
    id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UpdateUnavailabilityRequest {
    id: Uuid,
    time_slots: Vec<String>,
    is_full_day: bool,
    reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteUnavailabilityRequest {
    id: Uuid,
}

pub fn create_app<T: BookingBackend, C: Configuration>(backend: T, configuration: C) -> Router {
    let state = AppState {
        backend,
        configuration,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public = Router::new()
        .route("/", get(get_frontend))
        .route("/gallery", get(get_gallery))
        .route("/blocked_slots", get(get_blocked_slots))
        .route("/unavailable_slots", get(get_unavailable_slots))
        .route("/book", post(submit_booking));

    let admin = Router::new()
        .route("/appointments", get(get_appointments))
        .route("/unavailability", get(get_unavailability))
        .route("/gallery/add", post(add_image))
        .route("/gallery/update", post(update_image))
        .route("/gallery/remove", post(remove_image))
        .route("/unavailability/add", post(add_unavailability))
        .route("/unavailability/update", post(update_unavailability))
        .route("/unavailability/remove", post(remove_unavailability))
        .route_layer(middleware::from_fn_with_state(
            state.configuration.password(),
            admin_auth,
        ));

    Router::new()
        .merge(public)
        .merge(admin)
        .with_state(state)
        .layer(cors)
}

async fn admin_auth(
    State(password): State<String>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    if let Some(auth_header) = request.headers().get("x-admin-password") {
        if auth_header.to_str().unwrap_or("") != password {
            return Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string()));
        }
    } else {
        return Err((StatusCode::UNAUTHORIZED, "Missing credentials".to_string()));
    }
    Ok(next.run(request).await)
}

async fn get_frontend<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let path = state.configuration.frontend_path();

    match fs::read_to_string(&path).await {
        Ok(contents) => Ok(Html(contents)),
        Err(err) => {
            let error_message = format!("Failed to read frontend file: {err}");
            Err((StatusCode::INTERNAL_SERVER_ERROR, error_message))
        }
    }
}

async fn get_gallery<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> impl IntoResponse {
    Json(state.backend.images())
}

async fn get_blocked_slots<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Query(query): Query<BarberDateQuery>,
) -> impl IntoResponse {
    Json(state.backend.blocked_slots(&query.barber_name, &query.date))
}

async fn get_unavailable_slots<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Query(query): Query<BarberDateQuery>,
) -> impl IntoResponse {
    Json(
        state
            .backend
            .unavailable_slots(&query.barber_name, &query.date),
    )
}

async fn submit_booking<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Valid(Json(booking)): Valid<Json<BookingRequest>>,
) -> impl IntoResponse {
    let appointment = NewAppointment {
        barber_name: booking.barber_name,
        customer_name: booking.customer.name,
        customer_phone: booking.customer.phone,
        customer_email: booking.customer.email,
        service: booking.service,
        date: booking.date,
        time: booking.time,
        status: STATUS_PENDING.to_string(),
        price: booking.price,
        duration: booking.duration,
    };

    match state.backend.add_appointment(appointment) {
        Some(stored) => (StatusCode::OK, Json(stored)).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Appointment can't be booked".to_string(),
        )
            .into_response(),
    }
}

async fn get_appointments<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> impl IntoResponse {
    Json(state.backend.appointments())
}

async fn get_unavailability<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Query(query): Query<BarberDateQuery>,
) -> impl IntoResponse {
    Json(
        state
            .backend
            .unavailability(&query.barber_name, &query.date),
    )
}

async fn add_image<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Json(image): Json<NewGalleryImage>,
) -> impl IntoResponse {
    match state.backend.add_image(image) {
        Some(stored) => (StatusCode::OK, Json(stored)).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Gallery image can't be added".to_string(),
        )
            .into_response(),
    }
}

async fn update_image<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Json(request): Json<UpdateImageRequest>,
) -> impl IntoResponse {
    let changes = GalleryImageChanges {
        image_url: request.image_url,
        title: request.title,
        description: request.description,
        display_order: request.display_order,
    };

    match state.backend.update_image(request.id, changes) {
        true => (StatusCode::OK, "Gallery image updated successfully".to_string()),
        false => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Gallery image can't be updated".to_string(),
        ),
    }
}

async fn remove_image<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Json(request): Json<DeleteImageRequest>,
) -> impl IntoResponse {
    match state.backend.remove_image(request.id) {
        true => (StatusCode::OK, "Gallery image removed successfully".to_string()),
        false => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Gallery image can't be removed".to_string(),
        ),
    }
}

async fn add_unavailability<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Json(entry): Json<NewUnavailability>,
) -> impl IntoResponse {
    match state.backend.add_unavailability(entry) {
        Some(stored) => (StatusCode::OK, Json(stored)).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unavailability entry can't be added".to_string(),
        )
            .into_response(),
    }
}

async fn update_unavailability<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Json(request): Json<UpdateUnavailabilityRequest>,
) -> impl IntoResponse {
    let changes = UnavailabilityChanges {
        time_slots: request.time_slots,
        is_full_day: request.is_full_day,
        reason: request.reason,
    };

    match state.backend.update_unavailability(request.id, changes) {
        true => (
            StatusCode::OK,
            "Unavailability entry updated successfully".to_string(),
        ),
        false => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unavailability entry can't be updated".to_string(),
        ),
    }
}

async fn remove_unavailability<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Json(request): Json<DeleteUnavailabilityRequest>,
) -> impl IntoResponse {
    match state.backend.remove_unavailability(request.id) {
        true => (
            StatusCode::OK,
            "Unavailability entry removed successfully".to_string(),
        ),
        false => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unavailability entry can't be removed".to_string(),
        ),
    }
}
