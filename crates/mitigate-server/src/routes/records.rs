//! Generic list/add/edit/delete handlers for store-ID addressed records.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Form, Json, Router};

use mitigate_core::entities::{Record, Stored};
use mitigate_core::forms::RecordForm;

use crate::error::AppError;
use crate::state::SharedState;

pub fn routes<F: RecordForm>() -> Router<SharedState> {
    let collection = F::Record::COLLECTION;
    let name = collection.record_name();

    Router::new()
        .route(&format!("/{}", collection.as_str()), get(list::<F::Record>))
        .route(&format!("/{name}/add"), post(add::<F>))
        .route(
            &format!("/{name}/edit/{{id}}"),
            get(show::<F::Record>).post(edit::<F>),
        )
        .route(&format!("/{name}/delete/{{id}}"), get(delete::<F::Record>))
}

/// `303 See Other` back to the collection list.
pub fn to_list<R: Record>() -> Redirect {
    Redirect::to(&format!("/{}", R::COLLECTION.as_str()))
}

async fn list<R: Record>(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Stored<R>>>, AppError> {
    Ok(Json(state.service.list_records::<R>().await?))
}

async fn add<F: RecordForm>(
    State(state): State<SharedState>,
    Form(form): Form<F>,
) -> Result<Redirect, AppError> {
    let record = form.into_record()?;
    let created = state.service.create_record(&record).await?;
    let collection = F::Record::COLLECTION;
    tracing::info!(%collection, id = %created.id, "record created");
    Ok(to_list::<F::Record>())
}

async fn show<R: Record>(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Stored<R>>, AppError> {
    state
        .service
        .find_record::<R>(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(R::COLLECTION, id))
}

async fn edit<F: RecordForm>(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<F>,
) -> Result<Redirect, AppError> {
    let record = form.into_record()?;
    state.service.update_record(&id, &record).await?;
    Ok(to_list::<F::Record>())
}

async fn delete<R: Record>(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    state.service.delete_record::<R>(&id).await?;
    Ok(to_list::<R>())
}
