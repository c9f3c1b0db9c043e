//! CLI command implementations.

pub(crate) mod extract;
pub(crate) mod render;
pub(crate) mod styles;

pub(crate) use extract::ExtractArgs;
pub(crate) use render::RenderArgs;
pub(crate) use styles::StylesArgs;
