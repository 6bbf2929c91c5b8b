//! Landing page: account menu, featured repository widgets, and the
//! certificate galleries.

use leptos::prelude::*;

use crate::components::auth_menu::AuthMenu;
use crate::components::gallery::GallerySection;
use crate::components::repo_widget::RepoWidget;
use crate::state::gallery::Gallery;

/// Repositories featured on the landing page, one widget each.
fn featured_repositories() -> Vec<(String, String)> {
    [
        ("octocat", "Hello-World"),
        ("octocat", "Spoon-Knife"),
        ("octocat", "git-consortium"),
    ]
    .into_iter()
    .map(|(username, repo)| (username.to_owned(), repo.to_owned()))
    .collect()
}

/// Certificate galleries shown in the gallery section. The first entry is
/// activated on load.
fn certificate_galleries() -> Vec<Gallery> {
    vec![
        Gallery {
            id: "python".to_owned(),
            title: "Python".to_owned(),
            images: vec![
                "/images/certificates/python-basics.png".to_owned(),
                "/images/certificates/python-advanced.png".to_owned(),
                "/images/certificates/python-data.png".to_owned(),
            ],
        },
        Gallery {
            id: "golang".to_owned(),
            title: "Go".to_owned(),
            images: vec![
                "/images/certificates/go-fundamentals.png".to_owned(),
                "/images/certificates/go-web.png".to_owned(),
            ],
        },
        Gallery {
            id: "devops".to_owned(),
            title: "DevOps".to_owned(),
            images: vec![
                "/images/certificates/docker.png".to_owned(),
                "/images/certificates/kubernetes.png".to_owned(),
            ],
        },
    ]
}

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let widgets = featured_repositories()
        .into_iter()
        .map(|(username, repo)| view! { <RepoWidget username=username repo=repo/> })
        .collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <header class="site-header">
                <h1 class="site-header__title">"Projects & Certificates"</h1>
                <AuthMenu/>
            </header>
            <main class="home-page__main">
                <section class="home-page__repos">
                    <h2 class="home-page__section-title">"Repositories"</h2>
                    <div class="home-page__widgets">{widgets}</div>
                </section>
                <section class="home-page__galleries">
                    <h2 class="home-page__section-title">"Certificates"</h2>
                    <GallerySection galleries=certificate_galleries()/>
                </section>
            </main>
        </div>
    }
}
