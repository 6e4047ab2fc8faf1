use std::sync::Arc;
use std::time::Duration;

use leptos::either::Either;
use leptos::ev;
use leptos::leptos_dom::helpers::{
    set_timeout_with_handle, window_event_listener, TimeoutHandle, WindowListenerHandle,
};
use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use crate::content::{Project, ViewMode, GLOBAL_DETAIL_CACHE};
use crate::gallery::{ModalState, Tab, CLEAR_DELAY_MS};

use super::hooks::{set_scroll_lock, use_reduced_motion};
use super::image::FadeInImage;

#[cfg(feature = "ssr")]
use crate::content::get_detail;

#[server(input = GetUrl)]
pub async fn get_project_detail_server(slug: String) -> Result<String, ServerFnError> {
    get_detail(slug)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Overlay dialog with the active project's details and image gallery.
///
/// The markup stays mounted while the deferred project clear is pending so
/// the exit transition has content to fade out; `is_open` only drives the
/// visibility classes.
#[component]
pub fn ProjectModal(state: RwSignal<ModalState>) -> impl IntoView {
    let clear_timer = StoredValue::new_local(None::<TimeoutHandle>);
    let esc_listener = StoredValue::new_local(None::<WindowListenerHandle>);
    let reduced_motion = use_reduced_motion();

    let request_close = move || {
        let Some(token) = state.try_update(|m| m.close()) else {
            return;
        };
        if let Some(prev) = clear_timer.try_update_value(|t| t.take()).flatten() {
            prev.clear();
        }
        let deferred = move || {
            clear_timer.set_value(None);
            state.update(|m| m.clear_project(token));
        };
        if let Ok(handle) = set_timeout_with_handle(deferred, Duration::from_millis(CLEAR_DELAY_MS))
        {
            clear_timer.set_value(Some(handle));
        }
    };

    // Escape closes the modal; the listener exists only while it is open.
    Effect::new(move |_| {
        let open = state.with(|m| m.is_open());
        if open {
            if esc_listener.with_value(|l| l.is_none()) {
                let handle = window_event_listener(ev::keydown, move |ev| {
                    if ev.key() == "Escape" {
                        request_close();
                    }
                });
                esc_listener.set_value(Some(handle));
            }
        } else if let Some(handle) = esc_listener.try_update_value(|l| l.take()).flatten() {
            handle.remove();
        }
    });

    Effect::watch(
        move || state.with(|m| m.is_open()),
        move |open, _, _| set_scroll_lock(*open),
        false,
    );

    on_cleanup(move || {
        if let Some(pending) = clear_timer.try_update_value(|t| t.take()).flatten() {
            pending.clear();
        }
        if let Some(handle) = esc_listener.try_update_value(|l| l.take()).flatten() {
            handle.remove();
        }
    });

    let active_slug = Memo::new(move |_| state.with(|m| m.project().map(|p| p.slug.clone())));
    let detail = Resource::new(
        move || active_slug.get(),
        |slug| async move {
            let Some(slug) = slug else {
                return None;
            };
            let cache = &*GLOBAL_DETAIL_CACHE;
            if let Some(hit) = cache.get(&slug) {
                return hit.clone();
            }
            let fetched = get_project_detail_server(slug.clone()).await.ok();
            // only cache fetches on the browser
            #[cfg(feature = "hydrate")]
            cache.insert(slug, fetched.clone());
            fetched
        },
    );

    view! {
        {move || {
            let snap = state.get();
            let is_open = snap.is_open();
            let tab = snap.tab();
            let view_mode = snap.view_mode();
            let index = snap.image_index();
            let images = snap.images().to_vec();
            let project = snap.project().cloned();
            let no_motion = reduced_motion.get();

            project
                .map(|project| {
                    let gallery_count = project
                        .gallery
                        .first()
                        .map(|c| c.images.len())
                        .unwrap_or(0);
                    let overlay_class = format!(
                        "fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm {} {}",
                        if no_motion { "" } else { "transition-opacity duration-200" },
                        if is_open { "opacity-100" } else { "opacity-0 pointer-events-none" },
                    );
                    let details_project = Arc::clone(&project);
                    let gallery_project = Arc::clone(&project);

                    view! {
                        <div class=overlay_class on:click=move |_| request_close()>
                            <div
                                class="modal-panel relative w-full max-w-6xl max-h-[90vh] bg-background border border-muted/30 rounded-2xl shadow-2xl overflow-hidden"
                                on:click=|ev| ev.stop_propagation()
                            >
                                <button
                                    class="absolute top-3 right-3 z-20 p-2 px-3 bg-brightBlack/60 hover:bg-brightBlack rounded-full transition-all duration-200 hover:scale-110"
                                    aria-label="Close"
                                    on:click=move |_| request_close()
                                >
                                    "✕"
                                </button>

                                <div class="sticky top-0 z-10 border-b border-muted/30 bg-brightBlack/40 backdrop-blur-sm">
                                    <div class="flex">
                                        <button
                                            class=tab_class(tab == Tab::Details)
                                            on:click=move |_| state.update(|m| m.select_tab(Tab::Details))
                                        >
                                            "ℹ️ Project Details"
                                        </button>
                                        {project
                                            .has_gallery()
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class=tab_class(tab == Tab::Gallery)
                                                        on:click=move |_| state.update(|m| m.select_tab(Tab::Gallery))
                                                    >
                                                        {format!("🖼️ Project Images ({gallery_count})")}
                                                    </button>
                                                }
                                            })}
                                    </div>
                                </div>

                                <div class="overflow-y-auto max-h-[calc(90vh-60px)]">
                                    {match tab {
                                        Tab::Details => {
                                            Either::Left(
                                                view! { <DetailsTab project=details_project detail /> },
                                            )
                                        }
                                        Tab::Gallery => {
                                            Either::Right(
                                                view! {
                                                    <GalleryTab
                                                        state
                                                        project=gallery_project
                                                        view_mode
                                                        index
                                                        images
                                                    />
                                                },
                                            )
                                        }
                                    }}
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

fn tab_class(selected: bool) -> String {
    format!(
        "flex items-center gap-2 px-6 py-4 text-sm font-medium transition-all duration-200 {}",
        if selected {
            "text-foreground border-b-2 border-cyan bg-background"
        } else {
            "text-muted hover:text-foreground hover:bg-brightBlack/30"
        },
    )
}

#[component]
fn DetailsTab(project: Arc<Project>, detail: Resource<Option<String>>) -> impl IntoView {
    view! {
        <div>
            <div class="relative p-8 pb-6">
                <div class="flex flex-col lg:flex-row lg:items-start gap-6">
                    <div class="flex-1">
                        <div class="flex items-center gap-3 mb-4">
                            <span class="px-3 py-1 text-xs font-medium bg-brightBlack/60 rounded-full">
                                {project.category.clone()}
                            </span>
                            <span class="text-sm text-muted">{project.year.clone()}</span>
                        </div>
                        <h1 class="text-3xl lg:text-4xl font-light mb-4 leading-tight">
                            {project.title.clone()}
                        </h1>
                        <p class="text-lg text-muted font-light leading-relaxed mb-6">
                            {project.description.clone()}
                        </p>

                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 mb-6 text-sm text-muted">
                            <div>"📅 " {project.duration.clone()}</div>
                            <div>"👥 " {project.team.clone()}</div>
                            <div>"🕑 " {project.year.clone()}</div>
                        </div>

                        <div class="flex flex-wrap gap-3">
                            {project
                                .live_url
                                .clone()
                                .map(|url| {
                                    view! {
                                        <a
                                            href=url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="px-4 py-2 text-sm bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 rounded-md transition-colors duration-200"
                                        >
                                            "🔗 Live Site"
                                        </a>
                                    }
                                })}
                            {project
                                .repo_url
                                .clone()
                                .map(|url| {
                                    view! {
                                        <a
                                            href=url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="px-4 py-2 text-sm border border-muted/40 hover:bg-brightBlack/30 rounded-md transition-colors duration-200"
                                        >
                                            <i class="devicon-github-plain"></i>
                                            " Source"
                                        </a>
                                    }
                                })}
                        </div>
                    </div>

                    <div class="lg:w-80 flex-shrink-0">
                        <div class="relative aspect-[4/3] rounded-xl overflow-hidden bg-brightBlack/40">
                            <FadeInImage
                                src=project.image.clone()
                                alt=project.title.clone()
                                class="w-full h-full object-cover"
                                eager=true
                            />
                        </div>
                    </div>
                </div>
            </div>

            <div class="px-8 py-6 border-b border-muted/20">
                <h2 class="text-xl font-light mb-4">"Technologies"</h2>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 text-sm border border-muted/40 rounded-full">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {(!project.features.is_empty())
                .then(|| {
                    view! {
                        <div class="px-8 py-6 border-b border-muted/20">
                            <h2 class="text-xl font-light mb-4">"Key Features"</h2>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                                {project
                                    .features
                                    .iter()
                                    .map(|feature| {
                                        view! {
                                            <div class="flex items-start gap-3">
                                                <div class="w-2 h-2 bg-cyan rounded-full mt-2 flex-shrink-0"></div>
                                                <span class="text-sm font-light">{feature.clone()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}

            <div class="px-8 py-6">
                <Transition fallback=move || {
                    view! {
                        <div class="space-y-4">
                            <div class="loading-skeleton h-6 rounded w-1/3"></div>
                            <div class="loading-skeleton h-4 rounded"></div>
                            <div class="loading-skeleton h-4 rounded w-5/6"></div>
                            <div class="loading-skeleton h-4 rounded w-2/3"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        detail
                            .await
                            .map(|html| {
                                view! {
                                    <article class="prose prose-invert max-w-none">
                                        <div inner_html=html></div>
                                    </article>
                                }
                            })
                    })}
                </Transition>
            </div>
        </div>
    }
}

#[component]
fn GalleryTab(
    state: RwSignal<ModalState>,
    project: Arc<Project>,
    view_mode: ViewMode,
    index: usize,
    images: Vec<String>,
) -> impl IntoView {
    let count = images.len();
    let current = images.get(index).cloned().unwrap_or_default();
    let main_image_class = match view_mode {
        ViewMode::Mobile => "w-full h-auto object-contain max-h-[70vh]",
        ViewMode::Desktop => "w-full h-auto object-contain max-h-[60vh]",
    };

    view! {
        <div class="p-8">
            <div class="text-center mb-6">
                <h2 class="text-2xl font-light mb-2">"Project Images"</h2>
                <p class="text-muted">"Browse every screen and section of the project"</p>

                {project
                    .has_view_toggle()
                    .then(|| {
                        view! {
                            <div class="flex justify-center mt-4 mb-6">
                                <div class="bg-brightBlack/40 rounded-lg p-1 flex">
                                    {[ViewMode::Desktop, ViewMode::Mobile]
                                        .iter()
                                        .map(|mode| {
                                            let mode = *mode;
                                            view! {
                                                <button
                                                    class=toggle_class(view_mode == mode)
                                                    on:click=move |_| state.update(|m| m.set_view_mode(mode))
                                                >
                                                    {mode.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })}
            </div>

            <div class="relative mb-6">
                <div class="relative bg-brightBlack/40 rounded-xl overflow-hidden">
                    <FadeInImage
                        src=current
                        alt=format!("{} - {} - image {}", project.title, view_mode.label(), index + 1)
                        class=main_image_class
                        eager=true
                    />

                    {(count > 1)
                        .then(|| {
                            view! {
                                <button
                                    class="absolute left-4 top-1/2 -translate-y-1/2 p-3 px-4 text-xl bg-black/60 hover:bg-black/80 rounded-full transition-all duration-200 hover:scale-110"
                                    aria-label="Previous image"
                                    on:click=move |_| state.update(|m| m.prev_image())
                                >
                                    "‹"
                                </button>
                                <button
                                    class="absolute right-4 top-1/2 -translate-y-1/2 p-3 px-4 text-xl bg-black/60 hover:bg-black/80 rounded-full transition-all duration-200 hover:scale-110"
                                    aria-label="Next image"
                                    on:click=move |_| state.update(|m| m.next_image())
                                >
                                    "›"
                                </button>
                                <div class="absolute bottom-4 right-4 px-4 py-2 bg-black/70 text-sm rounded-full">
                                    {format!("{} of {}", index + 1, count)}
                                </div>
                            }
                        })}

                    <div class="absolute top-4 left-4 px-3 py-1 bg-black/70 text-xs rounded-full">
                        {mode_badge(view_mode)}
                    </div>
                </div>
            </div>

            {(count > 1)
                .then(|| {
                    view! {
                        <div class=thumb_grid_class(view_mode)>
                            {images
                                .iter()
                                .enumerate()
                                .map(|(i, image)| {
                                    let image = image.clone();
                                    let selected = i == index;
                                    view! {
                                        <button
                                            class=format!(
                                                "relative overflow-hidden rounded-lg border-2 transition-all duration-200 hover:scale-105 {} {}",
                                                thumb_aspect(view_mode),
                                                if selected {
                                                    "border-cyan ring-2 ring-cyan/20"
                                                } else {
                                                    "border-muted/30 hover:border-muted"
                                                },
                                            )
                                            on:click=move |_| state.update(|m| m.select_image(i))
                                        >
                                            <FadeInImage
                                                src=image
                                                alt=format!("Thumbnail {}", i + 1)
                                                class="w-full h-full object-cover"
                                            />
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}

            <div class="mt-6 text-center">
                <p class="text-sm text-muted">
                    {format!("{} - image {}", mode_badge(view_mode), index + 1)}
                </p>
            </div>
        </div>
    }
}

fn toggle_class(selected: bool) -> String {
    format!(
        "px-4 py-2 rounded-md text-sm font-medium transition-all duration-200 {}",
        if selected {
            "bg-background text-foreground shadow-sm"
        } else {
            "text-muted hover:text-foreground"
        },
    )
}

fn thumb_grid_class(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Mobile => "grid gap-3 grid-cols-3 sm:grid-cols-4 md:grid-cols-5",
        ViewMode::Desktop => "grid gap-3 grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6",
    }
}

fn thumb_aspect(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Mobile => "aspect-[9/16]",
        ViewMode::Desktop => "aspect-[4/3]",
    }
}

fn mode_badge(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Desktop => "🖥️ Desktop",
        ViewMode::Mobile => "📱 Mobile",
    }
}
