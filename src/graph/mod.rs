mod assets;
mod routes;

pub(crate) use assets::{DIAGRAM_CSS, PAGE_TEMPLATE};
pub use routes::{AppState, router, serve};
