//! The public marketing page.

use digitalpro_core::models::client::Client;
use digitalpro_core::models::contact::CreateContact;
use digitalpro_core::models::project::Project;
use digitalpro_core::models::subscriber::CreateSubscriber;
use leptos::prelude::*;

use super::{render_page, AlertDialog, NavTarget};

pub const FILL_ALL_FIELDS: &str = "Please fill all fields";
pub const ENTER_EMAIL: &str = "Please enter an email";

/// State of the public page for a single request.
#[derive(Debug, Clone, Default)]
pub struct PublicSiteView {
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
    /// Values shown in the contact form.
    pub contact: CreateContact,
    /// Value shown in the newsletter form.
    pub subscribe: CreateSubscriber,
    /// Blocking alert or confirmation to display, if any.
    pub alert: Option<String>,
}

impl PublicSiteView {
    pub fn render(self) -> String {
        let Self {
            projects,
            clients,
            contact,
            subscribe,
            alert,
        } = self;

        render_page(
            "DigitalPro",
            NavTarget::Admin,
            view! {
                {alert.map(|message| view! { <AlertDialog message=message/> })}
                <Hero/>
                <About/>
                <ProjectsSection projects=projects/>
                <ClientsSection clients=clients/>
                <ContactSection form=contact/>
                <NewsletterSection form=subscribe/>
                <Footer/>
            },
        )
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1>"We Build Digital Experiences"</h1>
                <p>"Creative solutions for modern businesses"</p>
                <a class="cta-btn" href="#contact">"Get Started"</a>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section class="about">
            <h2>"Why Choose Us?"</h2>
            <div class="features-grid">
                <div class="feature-card">
                    <h3>"Innovation"</h3>
                    <p>"Cutting-edge solutions tailored to your needs"</p>
                </div>
                <div class="feature-card">
                    <h3>"Quality"</h3>
                    <p>"High-quality services and support"</p>
                </div>
                <div class="feature-card">
                    <h3>"Performance"</h3>
                    <p>"Optimized for speed and efficiency"</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <img src={project.image} alt={project.name.clone()}/>
            <h3>{project.name}</h3>
            <p>{project.description}</p>
            <button type="button" class="read-more-btn">"Read More"</button>
        </article>
    }
}

#[component]
fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    let cards = if projects.is_empty() {
        view! { <p class="empty-state">"No projects yet"</p> }.into_any()
    } else {
        projects
            .into_iter()
            .map(|project| view! { <ProjectCard project=project/> })
            .collect_view()
            .into_any()
    };

    view! {
        <section id="projects" class="projects">
            <h2>"Our Projects"</h2>
            <div class="projects-grid">{cards}</div>
        </section>
    }
}

#[component]
fn ClientCard(client: Client) -> impl IntoView {
    view! {
        <article class="client-card">
            <img src={client.image} alt={client.name.clone()}/>
            <blockquote class="client-description">{client.description}</blockquote>
            <h4>{client.name}</h4>
            <p class="client-designation">{client.designation}</p>
        </article>
    }
}

#[component]
fn ClientsSection(clients: Vec<Client>) -> impl IntoView {
    let cards = if clients.is_empty() {
        view! { <p class="empty-state">"No clients yet"</p> }.into_any()
    } else {
        clients
            .into_iter()
            .map(|client| view! { <ClientCard client=client/> })
            .collect_view()
            .into_any()
    };

    view! {
        <section id="clients" class="clients">
            <h2>"Happy Clients"</h2>
            <div class="clients-grid">{cards}</div>
        </section>
    }
}

#[component]
fn ContactSection(form: CreateContact) -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <h2>"Get a Free Consultation"</h2>
            <form class="contact-form" method="post" action="/contact">
                <input class="form-input" type="text" placeholder="Full Name"
                    name="fullName" value={form.full_name}/>
                <input class="form-input" type="email" placeholder="Enter Email Address"
                    name="email" value={form.email}/>
                <input class="form-input" type="tel" placeholder="Mobile Number"
                    name="mobile" value={form.mobile}/>
                <input class="form-input" type="text" placeholder="Area, City"
                    name="city" value={form.city}/>
                <button type="submit" class="submit-btn">"Get Quick Quote"</button>
            </form>
        </section>
    }
}

#[component]
fn NewsletterSection(form: CreateSubscriber) -> impl IntoView {
    view! {
        <section class="newsletter">
            <h2>"Subscribe to our Newsletter"</h2>
            <p>"Get the latest updates and offers"</p>
            <form class="newsletter-form" method="post" action="/subscribe">
                <input class="newsletter-input" type="email" placeholder="Enter your email"
                    name="email" value={form.email}/>
                <button type="submit" class="newsletter-btn">"Subscribe"</button>
            </form>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2026 DigitalPro. All rights reserved."</p>
            <div class="footer-links">
                <a href="#home">"Home"</a>
                <a href="#projects">"Projects"</a>
                <a href="#clients">"Clients"</a>
                <a href="#contact">"Contact"</a>
            </div>
        </footer>
    }
}
