use crate::diagram::Diagram;
use crate::model::NamedRecord;
use crate::output::{HtmlOutput, JsonOutput, OutputFormatter, SvgOutput};
use crate::style;
use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Everything the server hands out, rendered once before it starts.
pub struct AppState {
    pub records: Vec<NamedRecord>,
    pub page: String,
    pub svg: String,
    pub diagram_json: String,
}

impl AppState {
    pub fn build(
        records: Vec<NamedRecord>,
        diagram: &Diagram,
        title: &str,
    ) -> std::io::Result<Self> {
        Ok(Self {
            page: HtmlOutput::new(title).format_to_string(diagram)?,
            svg: SvgOutput::new().format_to_string(diagram)?,
            diagram_json: JsonOutput::new().format_to_string(diagram)?,
            records,
        })
    }
}

/// Routes for the page, the raw SVG and the JSON APIs, with permissive CORS.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/diagram.svg", get(svg_handler))
        .route("/api/diagram", get(diagram_handler))
        .route("/api/imports", get(imports_handler))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Serve the diagram over HTTP until interrupted.
pub async fn serve(
    state: AppState,
    port: u16,
    open_browser: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(state);

    let addr = format!("127.0.0.1:{}", port);
    let url = format!("http://{}", addr);

    style::status(&format!("Serving diagram at {}", style::url(&url)));
    style::hint("Press Ctrl+C to stop");

    if open_browser {
        if let Err(e) = open::that(&url) {
            style::warning(&format!("Could not open browser: {}", e));
        }
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Html(state.page.clone())
}

async fn svg_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], state.svg.clone())
}

async fn diagram_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], state.diagram_json.clone())
}

async fn imports_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.records.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{RenderOptions, Renderer};

    #[test]
    fn test_state_renders_all_views() {
        let records = vec![
            NamedRecord::new("a.b").with_imports(["a.c"]),
            NamedRecord::new("a.c"),
        ];
        let diagram = Renderer::new(RenderOptions::default()).render(&records);
        let state = AppState::build(records.clone(), &diagram, "imports.json").unwrap();

        assert!(state.page.contains("<title>imports.json</title>"));
        assert!(state.svg.starts_with("<svg"));
        assert!(state.diagram_json.contains("\"inner_radius\""));
        assert_eq!(state.records, records);
    }
}
