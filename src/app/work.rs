use std::sync::Arc;

use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use crate::content::{Project, GLOBAL_PROJECT_CACHE};
use crate::gallery::ModalState;

use super::image::FadeInImage;

#[cfg(feature = "ssr")]
use crate::content::load_projects;

/// How many tech tags a card shows before collapsing into a "+N more" chip.
const CARD_TECH_LIMIT: usize = 4;

#[server(input = GetUrl)]
pub async fn get_projects_server() -> Result<Vec<Project>, ServerFnError> {
    load_projects()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn WorkSection() -> impl IntoView {
    let projects = Resource::new(
        || (),
        move |_| async move {
            let cache = &*GLOBAL_PROJECT_CACHE;
            if let Some(hit) = cache.get("") {
                return hit.clone();
            }
            let list = get_projects_server().await.unwrap_or_else(|e| {
                log::warn!("couldn't load projects: {e}");
                Vec::new()
            });
            // only cache fetches on the browser
            #[cfg(feature = "hydrate")]
            cache.insert(String::new(), list.clone());
            list
        },
    );

    view! {
        <section id="work" class="py-24 px-6 bg-brightBlack/20">
            <div class="max-w-6xl mx-auto">
                <div class="mb-16 section-content">
                    <p class="text-sm font-light tracking-widest uppercase text-muted mb-4">
                        "Portfolio"
                    </p>
                    <h2 class="text-4xl lg:text-5xl font-light mb-8">"Selected Projects"</h2>
                    <p class="text-lg font-light text-muted max-w-2xl">
                        "A selection of my most impactful work, spanning web development, mobile, games, AI and automation."
                    </p>
                </div>

                <Transition fallback=move || {
                    view! {
                        <div class="space-y-12">
                            <div class="loading-skeleton h-64 rounded-lg"></div>
                            <div class="loading-skeleton h-64 rounded-lg"></div>
                            <div class="loading-skeleton h-64 rounded-lg"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        let projects = projects.await;
                        view! {
                            <div class="space-y-20">
                                {projects
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, project)| {
                                        let project = Arc::new(project);
                                        view! { <ProjectCard index project /> }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
                </Transition>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(index: usize, project: Arc<Project>) -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    let open_from_image = {
        let project = Arc::clone(&project);
        move |_| modal.update(|m| m.open(Arc::clone(&project)))
    };
    let open_from_button = {
        let project = Arc::clone(&project);
        move |_| modal.update(|m| m.open(Arc::clone(&project)))
    };

    // Image and text swap sides on every other row.
    let layout = if index % 2 == 1 {
        "flex flex-col lg:flex-row-reverse gap-8 lg:gap-12 lg:items-center"
    } else {
        "flex flex-col lg:flex-row gap-8 lg:gap-12 lg:items-center"
    };

    let extra_tech = project.tech.len().saturating_sub(CARD_TECH_LIMIT);

    view! {
        <div class="group section-content">
            <div class=layout>
                <div class="lg:w-1/2">
                    <div
                        class="relative overflow-hidden rounded-lg bg-brightBlack/40 cursor-pointer aspect-[4/3] hover:scale-[1.01] transition-transform duration-150"
                        on:click=open_from_image
                    >
                        <FadeInImage
                            src=project.image.clone()
                            alt=project.title.clone()
                            class="w-full h-full object-cover object-center grayscale group-hover:grayscale-0 transition-all duration-300"
                        />
                    </div>
                </div>

                <div class="lg:w-1/2 flex flex-col justify-center">
                    <div class="mb-6">
                        <div class="flex items-center gap-4 mb-2">
                            <span class="text-xs font-light tracking-widest uppercase text-muted">
                                {project.category.clone()}
                            </span>
                            <span class="text-xs text-muted">{project.year.clone()}</span>
                        </div>
                        <h3 class="text-2xl lg:text-3xl font-light mb-4 leading-tight">
                            {project.title.clone()}
                        </h3>
                    </div>

                    <p class="text-muted font-light leading-relaxed mb-8">
                        {project.summary.clone()}
                    </p>

                    <div class="flex flex-wrap gap-2 mb-8">
                        {project
                            .tech
                            .iter()
                            .take(CARD_TECH_LIMIT)
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 text-xs font-light tracking-wide bg-brightBlack/60 rounded-full">
                                        {tech.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                        {(extra_tech > 0)
                            .then(|| {
                                view! {
                                    <span class="px-3 py-1 text-xs font-light tracking-wide bg-brightBlack/40 text-muted rounded-full">
                                        {format!("+{extra_tech} more")}
                                    </span>
                                }
                            })}
                    </div>

                    <button
                        class="self-start border border-muted/40 group-hover:border-foreground px-6 py-2 rounded-md text-sm font-light tracking-wide transition-all duration-150"
                        on:click=open_from_button
                    >
                        "View Details ↗"
                    </button>
                </div>
            </div>
        </div>
    }
}
