pub(crate) mod color;
pub(crate) mod render_config;
