//! The admin dashboard and its delete confirmation page.

use std::str::FromStr;

use digitalpro_core::models::client::{Client, CreateClient};
use digitalpro_core::models::contact::Contact;
use digitalpro_core::models::project::{CreateProject, Project};
use digitalpro_core::models::subscriber::Subscriber;
use digitalpro_core::types::DbId;
use leptos::prelude::*;

use super::{render_page, AlertDialog, NavTarget};

/// Dashboard tab. Exactly one is rendered per page; unknown or missing
/// values fall back to [`AdminTab::Projects`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Projects,
    Clients,
    Contacts,
    Subscribers,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Projects,
        AdminTab::Clients,
        AdminTab::Contacts,
        AdminTab::Subscribers,
    ];

    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Clients => "clients",
            Self::Contacts => "contacts",
            Self::Subscribers => "subscribers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Clients => "Clients",
            Self::Contacts => "Contacts",
            Self::Subscribers => "Subscribers",
        }
    }

    /// Dashboard URL with this tab selected.
    pub fn href(self) -> String {
        format!("/admin?tab={}", self.as_str())
    }
}

impl FromStr for AdminTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "projects" => Ok(Self::Projects),
            "clients" => Ok(Self::Clients),
            "contacts" => Ok(Self::Contacts),
            "subscribers" => Ok(Self::Subscribers),
            _ => Err(()),
        }
    }
}

/// State of the admin dashboard for a single request.
#[derive(Debug, Clone, Default)]
pub struct AdminPanelView {
    pub tab: AdminTab,
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
    pub contacts: Vec<Contact>,
    pub subscribers: Vec<Subscriber>,
    pub project_form: CreateProject,
    pub client_form: CreateClient,
    pub alert: Option<String>,
}

impl AdminPanelView {
    pub fn render(self) -> String {
        let Self {
            tab,
            projects,
            clients,
            contacts,
            subscribers,
            project_form,
            client_form,
            alert,
        } = self;

        let content = match tab {
            AdminTab::Projects => {
                view! { <ProjectsTab projects=projects form=project_form/> }.into_any()
            }
            AdminTab::Clients => {
                view! { <ClientsTab clients=clients form=client_form/> }.into_any()
            }
            AdminTab::Contacts => view! { <ContactsTab contacts=contacts/> }.into_any(),
            AdminTab::Subscribers => {
                view! { <SubscribersTab subscribers=subscribers/> }.into_any()
            }
        };

        render_page(
            "Admin Dashboard",
            NavTarget::Website,
            view! {
                {alert.map(|message| view! { <AlertDialog message=message/> })}
                <main class="admin">
                    <h1>"Admin Dashboard"</h1>
                    <TabBar active=tab/>
                    {content}
                </main>
            },
        )
    }
}

#[component]
fn TabBar(active: AdminTab) -> impl IntoView {
    let links = AdminTab::ALL
        .into_iter()
        .map(|tab| {
            let class = if tab == active { "tab active" } else { "tab" };
            view! { <a class=class href={tab.href()}>{tab.label()}</a> }
        })
        .collect_view();

    view! { <nav class="tabs">{links}</nav> }
}

#[component]
fn ProjectsTab(projects: Vec<Project>, form: CreateProject) -> impl IntoView {
    let heading = format!("All Projects ({})", projects.len());
    let list = if projects.is_empty() {
        view! { <p class="empty-message">"No projects added yet"</p> }.into_any()
    } else {
        let items = projects
            .into_iter()
            .map(|project| {
                let delete_href = format!("/admin/projects/{}/delete", project.id);
                view! {
                    <li>
                        <img src={project.image} alt={project.name.clone()}/>
                        <strong>{project.name}</strong>
                        <p>{project.description}</p>
                        <a class="delete" href={delete_href}>"Delete"</a>
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="records">{items}</ul> }.into_any()
    };

    view! {
        <section class="tab-content">
            <h2>"Project Management"</h2>
            <h3>"Add New Project"</h3>
            <form method="post" action="/admin/projects">
                <input type="text" placeholder="Project Name" name="name" value={form.name}/>
                <textarea placeholder="Project Description" name="description">
                    {form.description}
                </textarea>
                <input type="text" placeholder="Image URL" name="image" value={form.image}/>
                <button type="submit" class="admin-add-btn">"Add Project"</button>
            </form>
            <h3>{heading}</h3>
            {list}
        </section>
    }
}

#[component]
fn ClientsTab(clients: Vec<Client>, form: CreateClient) -> impl IntoView {
    let heading = format!("All Clients ({})", clients.len());
    let list = if clients.is_empty() {
        view! { <p class="empty-message">"No clients added yet"</p> }.into_any()
    } else {
        let items = clients
            .into_iter()
            .map(|client| {
                let delete_href = format!("/admin/clients/{}/delete", client.id);
                view! {
                    <li>
                        <img src={client.image} alt={client.name.clone()}/>
                        <strong>{client.name}</strong>
                        <em>{client.designation}</em>
                        <p>{client.description}</p>
                        <a class="delete" href={delete_href}>"Delete"</a>
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="records">{items}</ul> }.into_any()
    };

    view! {
        <section class="tab-content">
            <h2>"Client Management"</h2>
            <h3>"Add New Client"</h3>
            <form method="post" action="/admin/clients">
                <input type="text" placeholder="Client Name" name="name" value={form.name}/>
                <textarea placeholder="Client Description / Testimonial" name="description">
                    {form.description}
                </textarea>
                <input type="text" placeholder="Designation (e.g., CEO, Web Developer)"
                    name="designation" value={form.designation}/>
                <input type="text" placeholder="Image URL" name="image" value={form.image}/>
                <button type="submit" class="admin-add-btn">"Add Client"</button>
            </form>
            <h3>{heading}</h3>
            {list}
        </section>
    }
}

#[component]
fn ContactsTab(contacts: Vec<Contact>) -> impl IntoView {
    let total = format!("Total Contacts: {}", contacts.len());
    let table = if contacts.is_empty() {
        view! { <p class="empty-message">"No contact submissions yet"</p> }.into_any()
    } else {
        let rows = contacts
            .into_iter()
            .map(|contact| {
                view! {
                    <tr>
                        <td>{contact.full_name}</td>
                        <td>{contact.email}</td>
                        <td>{contact.mobile}</td>
                        <td>{contact.city}</td>
                    </tr>
                }
            })
            .collect_view();
        view! {
            <table>
                <thead>
                    <tr><th>"Full Name"</th><th>"Email"</th><th>"Mobile"</th><th>"City"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <section class="tab-content">
            <h2>"Contact Form Submissions"</h2>
            <h3>{total}</h3>
            {table}
        </section>
    }
}

#[component]
fn SubscribersTab(subscribers: Vec<Subscriber>) -> impl IntoView {
    let total = format!("Total Subscribers: {}", subscribers.len());
    let table = if subscribers.is_empty() {
        view! { <p class="empty-message">"No subscribers yet"</p> }.into_any()
    } else {
        let rows = subscribers
            .into_iter()
            .map(|subscriber| view! { <tr><td>{subscriber.email}</td></tr> })
            .collect_view();
        view! {
            <table>
                <thead>
                    <tr><th>"Email Address"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <section class="tab-content">
            <h2>"Newsletter Subscribers"</h2>
            <h3>{total}</h3>
            {table}
        </section>
    }
}

/// Deletable collection named in the confirmation URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Project,
    Client,
}

impl DeleteTarget {
    fn collection(self) -> &'static str {
        match self {
            Self::Project => "projects",
            Self::Client => "clients",
        }
    }

    pub fn tab(self) -> AdminTab {
        match self {
            Self::Project => AdminTab::Projects,
            Self::Client => AdminTab::Clients,
        }
    }
}

/// "Are you sure?" step before a delete. Only the confirm form issues the
/// API call; cancel returns to the tab untouched.
pub fn render_delete_confirmation(target: DeleteTarget, id: DbId) -> String {
    let action = format!("/admin/{}/{id}/delete", target.collection());
    let cancel = target.tab().href();
    render_page(
        "Are you sure?",
        NavTarget::Website,
        view! {
            <main class="admin confirm">
                <h1>"Are you sure?"</h1>
                <form method="post" action={action}>
                    <button type="submit">"Confirm"</button>
                </form>
                <a class="cancel" href={cancel}>"Cancel"</a>
            </main>
        },
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use digitalpro_core::types::new_id;

    use super::*;

    #[test]
    fn unknown_or_missing_tab_falls_back_to_projects() {
        assert_eq!(AdminTab::from_query(None), AdminTab::Projects);
        assert_eq!(AdminTab::from_query(Some("settings")), AdminTab::Projects);
        assert_eq!(AdminTab::from_query(Some("contacts")), AdminTab::Contacts);
    }

    #[test]
    fn only_the_active_tab_is_rendered() {
        let view = AdminPanelView {
            tab: AdminTab::Clients,
            ..Default::default()
        };
        let html = view.render();
        assert!(html.contains("Client Management"));
        assert!(html.contains("All Clients (0)"));
        assert!(html.contains("No clients added yet"));
        assert!(!html.contains("Project Management"));
        assert!(!html.contains("Contact Form Submissions"));
        assert_eq!(html.matches("tab active").count(), 1);
    }

    #[test]
    fn contacts_tab_lists_submissions() {
        let view = AdminPanelView {
            tab: AdminTab::Contacts,
            contacts: vec![Contact {
                id: new_id(),
                full_name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                mobile: "555".into(),
                city: "London".into(),
                created_at: Utc::now(),
            }],
            ..Default::default()
        };
        let html = view.render();
        assert!(html.contains("Total Contacts: 1"));
        assert!(html.contains("<td>Ada Lovelace</td>"));
        assert!(!html.contains("No contact submissions yet"));
    }

    #[test]
    fn confirmation_posts_to_the_delete_route() {
        let id = new_id();
        let html = render_delete_confirmation(DeleteTarget::Client, id);
        assert!(html.contains("Are you sure?"));
        assert!(html.contains(&format!("action=\"/admin/clients/{id}/delete\"")));
        assert!(html.contains("href=\"/admin?tab=clients\""));
    }
}
