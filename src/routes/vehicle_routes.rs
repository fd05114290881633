use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};

use crate::dto::VehicleForm;
use crate::middleware::flash::Flash;
use crate::state::AppState;
use crate::views;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/vehicle/new", get(new_vehicle_form).post(create_vehicle))
        .route("/vehicle/edit/:id", get(edit_vehicle_form).post(update_vehicle))
        .route("/vehicle/delete/:id", get(delete_vehicle))
}

// Redirección a la lista dejando un aviso en la cookie flash
fn redirect_home(state: &AppState, flash: Flash) -> Response {
    (
        [(header::SET_COOKIE, flash.to_cookie(state.secret_key()))],
        Redirect::to("/"),
    )
        .into_response()
}

// Un id no numérico o fuera de rango no puede existir en la tabla
fn parse_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

fn not_found(state: &AppState) -> Response {
    redirect_home(state, Flash::error("Veículo não encontrado"))
}

async fn list_vehicles(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let pending = Flash::from_headers(&headers, state.secret_key());

    // Si la lista falla se muestra el error y el aviso pendiente queda en la cookie
    let (vehicles, flash, consumed) = match state.vehicles.list_all().await {
        Ok(vehicles) => {
            let consumed = pending.is_some();
            (vehicles, pending, consumed)
        }
        Err(e) => (Vec::new(), Some(Flash::error(e.notice())), false),
    };

    let mut response = Html(views::vehicle_list(&vehicles, flash.as_ref())).into_response();
    if consumed {
        response
            .headers_mut()
            .append(header::SET_COOKIE, Flash::clear_cookie());
    }
    response
}

async fn new_vehicle_form() -> Html<String> {
    Html(views::vehicle_form(None, &VehicleForm::default(), None))
}

async fn create_vehicle(State(state): State<AppState>, Form(form): Form<VehicleForm>) -> Response {
    match state.vehicles.create(form.clone()).await {
        Ok(_) => redirect_home(&state, Flash::success("Veículo adicionado com sucesso!")),
        Err(e) if e.is_connection() => redirect_home(&state, Flash::error(e.notice())),
        Err(e) => Html(views::vehicle_form(None, &form, Some(&Flash::error(e.notice())))).into_response(),
    }
}

async fn edit_vehicle_form(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return not_found(&state);
    };

    match state.vehicles.get_by_id(id).await {
        Ok(Some(vehicle)) => Html(views::vehicle_form(Some(id), &VehicleForm::from(vehicle), None)).into_response(),
        Ok(None) => not_found(&state),
        Err(e) => redirect_home(&state, Flash::error(e.notice())),
    }
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(form): Form<VehicleForm>,
) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return not_found(&state);
    };

    match state.vehicles.update(id, form.clone()).await {
        Ok(()) => redirect_home(&state, Flash::success("Veículo atualizado com sucesso!")),
        Err(e) if e.is_connection() => redirect_home(&state, Flash::error(e.notice())),
        Err(e) => Html(views::vehicle_form(Some(id), &form, Some(&Flash::error(e.notice())))).into_response(),
    }
}

async fn delete_vehicle(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return not_found(&state);
    };

    match state.vehicles.delete(id).await {
        Ok(()) => redirect_home(&state, Flash::success("Veículo deletado com sucesso!")),
        Err(e) => redirect_home(&state, Flash::error(e.notice())),
    }
}
