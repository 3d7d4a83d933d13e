//! Embed planning module for Chart-Embed
//!
//! Turns validated settings into pure render descriptors for the hosting
//! layer. No DOM work happens here.

mod plan;

pub use plan::{
    plan_render, ChartEmbed, EmbedScript, RenderPlan, EMBED_RUNTIME_URL, ERROR_HEADING,
    SETUP_NOTICE,
};
