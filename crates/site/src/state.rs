use crate::api_client::ApiClient;

/// API base used by the public marketing site.
pub const PUBLIC_SITE_API_BASE: &str = "http://localhost:5000";

/// API base used by the admin panel.
pub const ADMIN_PANEL_API_BASE: &str = "https://fullstack-portfolio-backend-1agw.onrender.com";

/// Shared application state for the site.
///
/// The two views keep separate clients; they are not required to point at
/// the same API.
#[derive(Clone)]
pub struct SiteState {
    pub public_api: ApiClient,
    pub admin_api: ApiClient,
}

impl SiteState {
    pub fn new(public_api: ApiClient, admin_api: ApiClient) -> Self {
        Self {
            public_api,
            admin_api,
        }
    }

    /// State wired to the compiled-in API bases.
    pub fn from_compiled_bases() -> Self {
        Self::new(
            ApiClient::new(PUBLIC_SITE_API_BASE),
            ApiClient::new(ADMIN_PANEL_API_BASE),
        )
    }
}
