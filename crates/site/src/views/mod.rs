//! Server-side rendering of the site pages.
//!
//! Every view is a plain struct holding the state for one request and a
//! `render` method producing the full HTML document from leptos components.

pub mod admin;
pub mod public;

use std::str::FromStr;

use leptos::prelude::*;

/// One-shot confirmation shown after a successful mutation.
///
/// Carried across the post/redirect/get cycle in the `notice` query
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ContactSent,
    Subscribed,
    ProjectAdded,
    ClientAdded,
    ProjectDeleted,
    ClientDeleted,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::ContactSent => "Message Sent!",
            Self::Subscribed => "Subscribed!",
            Self::ProjectAdded => "Project Added!",
            Self::ClientAdded => "Client Added!",
            Self::ProjectDeleted => "Project Deleted!",
            Self::ClientDeleted => "Client Deleted!",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContactSent => "contact-sent",
            Self::Subscribed => "subscribed",
            Self::ProjectAdded => "project-added",
            Self::ClientAdded => "client-added",
            Self::ProjectDeleted => "project-deleted",
            Self::ClientDeleted => "client-deleted",
        }
    }
}

impl FromStr for Notice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contact-sent" => Ok(Self::ContactSent),
            "subscribed" => Ok(Self::Subscribed),
            "project-added" => Ok(Self::ProjectAdded),
            "client-added" => Ok(Self::ClientAdded),
            "project-deleted" => Ok(Self::ProjectDeleted),
            "client-deleted" => Ok(Self::ClientDeleted),
            _ => Err(()),
        }
    }
}

/// Parse an optional `notice` query value, ignoring unknown ones.
pub fn notice_from_query(raw: Option<&str>) -> Option<Notice> {
    raw.and_then(|value| value.parse().ok())
}

/// Blocking alert, dismissed with its OK button.
#[component]
pub fn AlertDialog(message: String) -> impl IntoView {
    view! {
        <dialog class="alert" open=true>
            <p>{message}</p>
            <form method="dialog">
                <button>"OK"</button>
            </form>
        </dialog>
    }
}

/// Which way the navbar link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Admin,
    Website,
}

#[component]
fn NavBar(target: NavTarget) -> impl IntoView {
    let (href, label) = match target {
        NavTarget::Admin => ("/admin", "Admin Panel"),
        NavTarget::Website => ("/", "View Website"),
    };

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a class="logo" href="/">"DigitalPro"</a>
                <a class="admin-btn" href=href>{label}</a>
            </div>
        </nav>
    }
}

/// Render `body` inside the shared document shell and navbar.
pub fn render_page(title: &str, nav: NavTarget, body: impl IntoView) -> String {
    let title = title.to_string();
    let document = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
            </head>
            <body>
                <NavBar target=nav/>
                {body}
            </body>
        </html>
    };
    format!("<!DOCTYPE html>\n{}", document.to_html())
}
