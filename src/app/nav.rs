use leptos::prelude::*;

use super::hooks::{use_active_section, use_scroll_offset};

pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("work", "Work"),
    ("contact", "Contact"),
];

/// Same ids as [`NAV_ITEMS`], in document order, for the section tracker.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "work", "contact"];

/// Offset past which the bar trades transparency for a solid backdrop.
const SOLID_AT_PX: f64 = 50.0;

const SOLID_STYLE: &str = "background-color: rgba(13, 17, 23, 0.95); \
     backdrop-filter: blur(20px); border-bottom: 1px solid rgba(255, 255, 255, 0.1);";

#[component]
pub fn Navigation() -> impl IntoView {
    let scroll_y = use_scroll_offset();
    let active = use_active_section(&SECTION_IDS);
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav
            class="fixed top-0 w-full z-40 transition-all duration-300"
            style=move || { if scroll_y.get() > SOLID_AT_PX { SOLID_STYLE } else { "" } }
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4 sm:py-6">
                    <a href="#home" class="text-lg sm:text-xl font-light tracking-wide">
                        "Diogo Gapski"
                    </a>

                    <div class="hidden md:flex space-x-8 lg:space-x-12">
                        {NAV_ITEMS
                            .iter()
                            .map(|(id, label)| {
                                let id = *id;
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        class="nav-link text-sm font-light tracking-wide hover:text-cyan transition-colors duration-200"
                                        class:active=move || active.get() == Some(id)
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        class="md:hidden p-2 -mr-2 text-xl"
                        aria-label="Menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                {move || {
                    menu_open
                        .get()
                        .then(|| {
                            view! {
                                <div class="md:hidden py-4 border-t border-muted/30">
                                    {NAV_ITEMS
                                        .iter()
                                        .map(|(id, label)| {
                                            view! {
                                                <a
                                                    href=format!("#{id}")
                                                    class="block py-3 text-base font-light tracking-wide hover:text-cyan transition-colors duration-200"
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    {*label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </div>
        </nav>
    }
}
