use axum::{
    Router,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Request},
    routing::{get, post},
};
use keysmith_common::views::ApiErrorResponse;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info_span;
use utoipa::{
    ToSchema,
    openapi::{ComponentsBuilder, Info, License, OpenApi, RefOr, path::Operation},
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{config::KeysmithApiConfig, context::ApiContext, handlers};

const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn make(cfg: KeysmithApiConfig) -> anyhow::Result<(Router, OpenApi, ApiContext)> {
    let context = ApiContext::new(cfg);
    let (router, api) = router(context.clone())?;
    Ok((router, api, context))
}

pub(crate) fn router(context: ApiContext) -> anyhow::Result<(Router, OpenApi)> {
    let cors = cors_layer(&context.config.cors_origins)?;
    let assets = ServeDir::new(&context.config.assets_dir);

    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            x_request_id.clone(),
            MakeRequestUuid,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<_>| {
                    // Log the request ID as generated
                    let request_id = req.headers().get(REQUEST_ID_HEADER);
                    let span = info_span!(
                        "http_request",
                        method = req.method().to_string(),
                        request_id = Option::<&str>::None,
                        path = Option::<&str>::None,
                    );

                    if let Some(request_id) = request_id.and_then(|v| v.to_str().ok()) {
                        span.record("request_id", request_id);
                    };

                    if let Some(path) = req.extensions().get::<MatchedPath>() {
                        span.record("path", path.as_str())
                    } else {
                        span.record("path", req.uri().path())
                    };

                    span
                }),
        )
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(x_request_id));

    let openapi = OpenApi::builder()
        .info(
            Info::builder()
                .title("Keysmith API Reference")
                .version(env!("CARGO_PKG_VERSION"))
                .license(Some(
                    License::builder()
                        .name("Apache 2.0 License")
                        .identifier(Some(env!("CARGO_PKG_LICENSE")))
                        .build()
                ))
        )
        .components(Some(
            ComponentsBuilder::new()
                .schema_from::<ApiErrorResponse>()
                .build()
        ))
        .build();

    let (r, mut a) = OpenApiRouter::with_openapi(openapi)
        .routes(routes!(handlers::keys::generate_keys))
        .route("/", get(handlers::form::index))
        .route("/result", post(handlers::form::result))
        .route("/healthz", get(handlers::health_check))
        .with_state(context)
        .split_for_parts();

    a.paths.paths.iter_mut().for_each(|(_path, item)| {
        apply_default_errors(&mut item.get);
        apply_default_errors(&mut item.post);
    });

    let r = r.fallback_service(assets).layer(middleware);

    Ok((r, a))
}

/// Any origin when `origins` is empty, otherwise exactly the listed ones.
fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("Invalid CORS origin {origin:?}: {e}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

fn apply_default_errors(item: &mut Option<Operation>) {
    if let Some(item) = item {
        item.responses.responses.insert(
            "500".into(),
            RefOr::Ref(
                utoipa::openapi::Ref::builder()
                    .summary("Issuance failed")
                    .ref_location_from_schema_name(ApiErrorResponse::name())
                    .build()
            )
        );

        item.responses.responses.insert(
            "503".into(),
            RefOr::Ref(
                utoipa::openapi::Ref::builder()
                    .summary("Issuance timed out or no capacity")
                    .ref_location_from_schema_name(ApiErrorResponse::name())
                    .build()
            )
        );
    }
}
