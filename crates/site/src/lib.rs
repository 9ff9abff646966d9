//! DigitalPro web front end: the public marketing site and the admin panel.
//!
//! Pages are rendered on the server from per-request view state
//! ([`views::public::PublicSiteView`], [`views::admin::AdminPanelView`]).
//! All data goes through the REST API via [`api_client::ApiClient`].

pub mod api_client;
pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
