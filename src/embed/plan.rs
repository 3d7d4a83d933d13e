//! Render planning for Chart-Embed
//!
//! Computes, per render pass, which of the two fragments the hosting layer
//! should build: the embed (runtime script plus chart element) or an
//! informational notice. All results are plain data; the hosting layer owns
//! element construction.

use serde::{Deserialize, Serialize};

use crate::config::{validate_settings, EmbedSettings};
use crate::core::types::{AppId, ClientId, ObjectId, Tenant};

/// Embed runtime script served from the public CDN
pub const EMBED_RUNTIME_URL: &str =
    "https://cdn.jsdelivr.net/npm/@qlik/embed-web-components@1/dist/index.min.js";

/// Notice shown while the configuration is still untouched
pub const SETUP_NOTICE: &str =
    "Use sharepoint to configure this object to embed a Qlik chart.";

/// Heading shown above configuration error messages
pub const ERROR_HEADING: &str = "Error configuring chart:";

/// Attributes of the embed runtime script tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedScript {
    pub src: String,
    pub host: String,
    pub client_id: ClientId,
    pub redirect_uri: String,
    pub auto_redirect: bool,
    pub access_token_storage: String,
}

/// Attributes of the chart element itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEmbed {
    pub ui: String,
    pub app_id: AppId,
    pub object_id: ObjectId,
}

/// Render decision for one pass
///
/// A partially valid configuration never yields a partial embed; anything
/// short of fully valid falls into one of the notice variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "fragment", rename_all = "snake_case")]
pub enum RenderPlan {
    Chart {
        script: EmbedScript,
        chart: ChartEmbed,
    },
    Unconfigured {
        notice: String,
    },
    Invalid {
        heading: String,
        message: String,
    },
}

impl RenderPlan {
    /// Checks whether this plan renders the actual embed
    pub fn is_chart(&self) -> bool {
        matches!(self, RenderPlan::Chart { .. })
    }
}

/// Plans the render pass for the given settings
///
/// The redirect URI is owned by the hosting page and passed in explicitly
/// on every call; the planner holds no state between passes.
pub fn plan_render(settings: &EmbedSettings, redirect_uri: &str) -> RenderPlan {
    let verdict = validate_settings(settings);

    if verdict.is_empty {
        return RenderPlan::Unconfigured {
            notice: SETUP_NOTICE.to_string(),
        };
    }

    if !verdict.is_valid {
        return RenderPlan::Invalid {
            heading: ERROR_HEADING.to_string(),
            message: verdict.message_text(),
        };
    }

    // A valid verdict means both identifier fields parse.
    let (Ok(tenant), Ok(app_id)) = (
        settings.tenant.parse::<Tenant>(),
        settings.app_id.parse::<AppId>(),
    ) else {
        return RenderPlan::Invalid {
            heading: ERROR_HEADING.to_string(),
            message: verdict.message_text(),
        };
    };

    RenderPlan::Chart {
        script: EmbedScript {
            src: EMBED_RUNTIME_URL.to_string(),
            host: tenant.host_name(),
            client_id: settings.client_id.clone(),
            redirect_uri: redirect_uri.to_string(),
            auto_redirect: true,
            access_token_storage: "session".to_string(),
        },
        chart: ChartEmbed {
            ui: "analytics/chart".to_string(),
            app_id,
            object_id: settings.object_id.clone(),
        },
    }
}
