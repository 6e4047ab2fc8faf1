use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::gallery::ModalState;

use super::about::{AboutSection, SkillsSection};
use super::contact::ContactSection;
use super::hooks::{smooth_scroll_to, use_reduced_motion};
use super::image::FadeInImage;
use super::modal::ProjectModal;
use super::work::WorkSection;

#[component]
pub fn HomePage() -> impl IntoView {
    let modal = RwSignal::new(ModalState::new());
    provide_context(modal);

    view! {
        <Title text="Full-Stack Developer" />
        <Hero />
        <AboutSection />
        <SkillsSection />
        <WorkSection />
        <ContactSection />
        <Footer />
        <ProjectModal state=modal />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let reduced_motion = use_reduced_motion();

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center relative px-6">
            <div class="max-w-6xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="section-content">
                        <p class="text-xs sm:text-sm font-light tracking-widest uppercase text-muted mb-6">
                            "Full-Stack Developer & AI Specialist"
                        </p>
                        <h1 class="text-5xl lg:text-7xl font-light leading-tight mb-8">
                            "Diogo Luis"
                            <br />
                            <span class="font-extralight text-muted">"Gapski Fernandes"</span>
                        </h1>
                        <p class="text-lg font-light text-muted leading-relaxed mb-12 max-w-lg">
                            "Versatile developer focused on complete solutions: from high-impact landing pages to full AI and automation systems. I turn ideas into working software."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <button
                                class="bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 px-8 py-3 rounded-md text-sm font-light tracking-wide transition-all duration-200"
                                on:click=move |_| smooth_scroll_to("work")
                            >
                                "View Work →"
                            </button>
                            <button
                                class="border border-muted/40 hover:bg-brightBlack/30 px-8 py-3 rounded-md text-sm font-light tracking-wide transition-all duration-200"
                                on:click=move |_| smooth_scroll_to("contact")
                            >
                                "Get in Touch"
                            </button>
                        </div>
                    </div>
                    <div class="relative">
                        <div class="relative w-80 h-80 mx-auto">
                            <div class="absolute inset-0 bg-brightBlack/40 rounded-full"></div>
                            <div class="relative w-full h-full rounded-full overflow-hidden">
                                <FadeInImage
                                    src="/profile.jpg"
                                    alt="Diogo Luis Gapski Fernandes"
                                    class="w-full h-full object-cover"
                                    eager=true
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <div
                class=move || {
                    if reduced_motion.get() {
                        "absolute bottom-8 left-1/2 -translate-x-1/2 text-muted"
                    } else {
                        "absolute bottom-8 left-1/2 -translate-x-1/2 text-muted animate-bounce"
                    }
                }
                aria-hidden="true"
            >
                "⌄"
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.year())
        .unwrap_or(2025);

    view! {
        <footer class="py-12 px-6 border-t border-muted/30">
            <div class="max-w-6xl mx-auto text-center">
                <p class="text-sm font-light text-muted">
                    {format!("© {year} Diogo Luis Gapski Fernandes. Built with attention to detail.")}
                </p>
            </div>
        </footer>
    }
}
