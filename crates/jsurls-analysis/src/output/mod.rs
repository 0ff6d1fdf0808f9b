//! Route parameter normalisation and final output rendering.

mod format;
mod routes;

pub use format::format_output;
pub use routes::{convert_route_params, replace_template_markers, RouteConversion};
