use leptos::prelude::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 section-content">
                    <p class="text-sm font-light tracking-widest uppercase text-muted mb-4">"Contact"</p>
                    <h2 class="text-4xl lg:text-5xl font-light mb-8">"Let's build something great"</h2>
                    <p class="text-lg font-light text-muted max-w-2xl mx-auto">
                        "Need a site, a landing page, an automation system or any other digital solution? Let's talk about how I can help your project take off."
                    </p>
                </div>

                <div class="max-w-4xl mx-auto section-content">
                    <div class="grid md:grid-cols-2 gap-12">
                        <div>
                            <h3 class="text-xl font-light mb-8">"Contact Information"</h3>
                            <div class="space-y-6">
                                <div>
                                    <p class="text-sm text-muted">"Email"</p>
                                    <p class="font-light">"diogo.lgapski@gmail.com"</p>
                                </div>
                                <div>
                                    <p class="text-sm text-muted">"Phone"</p>
                                    <p class="font-light">"+55 41 99677-4152"</p>
                                </div>
                                <div>
                                    <p class="text-sm text-muted">"Location"</p>
                                    <p class="font-light">"Curitiba, Brazil"</p>
                                </div>
                            </div>

                            <div class="flex space-x-6 mt-12 text-2xl">
                                <a
                                    href="https://github.com/diogogapski"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-muted hover:text-foreground transition-colors duration-200"
                                    aria-label="GitHub"
                                >
                                    <i class="devicon-github-plain"></i>
                                </a>
                                <a
                                    href="https://www.linkedin.com/in/diogo-gapski-fernandes-a83601206/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-muted hover:text-blue transition-colors duration-200"
                                    aria-label="LinkedIn"
                                >
                                    <i class="devicon-linkedin-plain"></i>
                                </a>
                            </div>
                        </div>

                        <div>
                            <h3 class="text-xl font-light mb-8">"Send a message"</h3>
                            <div class="space-y-4">
                                <a
                                    href="mailto:diogo.lgapski@gmail.com"
                                    class="block w-full text-center bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 px-6 py-3 rounded-md text-sm font-light tracking-wide transition-all duration-200"
                                >
                                    "📧 Send Email"
                                </a>
                                <a
                                    href="tel:+5541996774152"
                                    class="block w-full text-center border border-muted/40 hover:bg-brightBlack/30 px-6 py-3 rounded-md text-sm font-light tracking-wide transition-all duration-200"
                                >
                                    "📞 Call Now"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
