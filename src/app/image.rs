use leptos::prelude::*;

/// Image that hides behind a skeleton until the browser finishes decoding
/// it, then fades in. Everything below the fold loads lazily.
#[component]
pub fn FadeInImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into, optional)] class: String,
    #[prop(optional)] eager: bool,
) -> impl IntoView {
    let (loaded, set_loaded) = signal(false);
    let img_class = move || {
        format!(
            "{class} transition-opacity duration-300 {}",
            if loaded.get() { "opacity-100" } else { "opacity-0" }
        )
    };

    view! {
        <div class="relative overflow-hidden w-full h-full">
            <div class="absolute inset-0 loading-skeleton" class:hidden=move || loaded.get()></div>
            <img
                src=src
                alt=alt
                loading=if eager { "eager" } else { "lazy" }
                decoding="async"
                class=img_class
                on:load=move |_| set_loaded.set(true)
            />
        </div>
    }
}
