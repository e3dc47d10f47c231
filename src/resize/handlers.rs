use crate::app_context::AppContext;
use crate::resize::codec::ImageRsCodec;
use crate::resize::error::ResizeError;
use crate::resize::params::{OutputFormat, Quality, ResizeParams};
use crate::resize::requests::ResizeQueryParams;
use crate::resize::responses::ResizeErrorResponse;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};

pub async fn resize(
    State(app_context): State<AppContext>,
    Query(query): Query<ResizeQueryParams>,
    body: Bytes,
) -> Response {
    let format = match OutputFormat::parse(query.format.as_deref().unwrap_or("jpeg")) {
        Ok(format) => format,
        Err(err) => return error_response(err),
    };
    let params = ResizeParams {
        target_width: query.width,
        target_height: query.height,
        scale: query.scale.unwrap_or(1.0),
        max_dimension: app_context.max_dimension,
        format,
        quality: query.quality.map(Quality::new).unwrap_or_default(),
    };

    match crate::resize::process(&ImageRsCodec, &body, &params) {
        Ok(result) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, result.mime_type),
                // Output depends entirely on the request body, so there is
                // nothing meaningful for an intermediary to cache.
                (header::CACHE_CONTROL, String::from("no-store")),
            ],
            result.bytes,
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ResizeError) -> Response {
    tracing::error!(task = "resize_failed", error = %err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ResizeErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}
