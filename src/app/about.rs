use leptos::prelude::*;

const FOCUS_AREAS: [&str; 8] = [
    "Web Development",
    "Landing Pages",
    "AI Systems",
    "Automation",
    "Digital Games",
    "Mobile Apps",
    "APIs & Backend",
    "UI/UX Design",
];

const FRONTEND_SKILLS: [&str; 8] = [
    "HTML5 & CSS3",
    "JavaScript (ES6+)",
    "React & Next.js",
    "Tailwind CSS",
    "UI/UX Design",
    "Responsive Design",
    "TypeScript",
    "Framer Motion",
];

const BACKEND_SKILLS: [&str; 8] = [
    "Python",
    "Node.js",
    "REST APIs",
    "GraphQL",
    "SQL & NoSQL",
    "Process Automation",
    "Systems Integration",
    "Cloud Services",
];

struct SoftSkill {
    title: &'static str,
    blurb: &'static str,
    icon: &'static str,
}

const SOFT_SKILLS: [SoftSkill; 8] = [
    SoftSkill {
        title: "Problem Solving",
        blurb: "Analytical ability to identify, diagnose and resolve complex problems efficiently and creatively.",
        icon: "💡",
    },
    SoftSkill {
        title: "Teamwork",
        blurb: "Collaborative experience on multidisciplinary projects, effective communication and technical leadership.",
        icon: "🤝",
    },
    SoftSkill {
        title: "Project Management",
        blurb: "Planning, organizing and delivering software projects with a focus on deadlines and quality.",
        icon: "🎯",
    },
    SoftSkill {
        title: "Continuous Learning",
        blurb: "Self-taught and adaptable, keeping up with new technologies and market trends.",
        icon: "📚",
    },
    SoftSkill {
        title: "Technical Communication",
        blurb: "Explaining complex concepts clearly to different audiences and stakeholders.",
        icon: "💬",
    },
    SoftSkill {
        title: "Data Analysis",
        blurb: "Interpreting metrics, generating insights and making decisions grounded in data.",
        icon: "📊",
    },
    SoftSkill {
        title: "Technical Writing",
        blurb: "Clear documentation, user manuals and detailed technical specifications.",
        icon: "📝",
    },
    SoftSkill {
        title: "Performance Tuning",
        blurb: "Finding bottlenecks and shipping improvements that raise efficiency and speed.",
        icon: "⚡",
    },
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-24 px-6 bg-brightBlack/20">
            <div class="max-w-6xl mx-auto">
                <div class="mb-16 section-content">
                    <p class="text-sm font-light tracking-widest uppercase text-muted mb-4">"About"</p>
                    <h2 class="text-4xl lg:text-5xl font-light mb-8">"A Complete Developer"</h2>
                </div>

                <div class="grid lg:grid-cols-2 gap-16">
                    <div class="section-content">
                        <p class="text-lg font-light text-muted leading-relaxed mb-8">
                            "Trained in Digital Game Programming at the Federal Institute of Paraná (2022-2025), I specialize in building robust web systems, intelligent automations and advanced agents that solve real problems end to end. I work mainly with Next.js, React, Node.js, Python and N8N, building everything from complete applications to autonomous flows running in production around the clock."
                        </p>
                        <p class="text-lg font-light text-muted leading-relaxed mb-12">
                            "Across projects I have built hands-on experience in design, advanced scraping, API integrations, data analysis, applied AI, business automation and full-stack development. The goal is always the same: efficient, scalable solutions that are genuinely useful to the people using them."
                        </p>

                        <div class="space-y-8">
                            <div>
                                <h3 class="text-xl font-light mb-4">"Education"</h3>
                                <div class="border-l-2 border-muted/30 pl-6 space-y-4">
                                    <div>
                                        <h4 class="font-medium mb-1">"Technical Degree, Digital Game Programming"</h4>
                                        <p class="text-muted text-sm">"Federal Institute of Paraná (IFPR)"</p>
                                        <p class="text-muted text-sm">"2022 - 2025"</p>
                                    </div>
                                    <div>
                                        <h4 class="font-medium mb-1">"B.Sc. Computer Science"</h4>
                                        <p class="text-muted text-sm">"Federal Institute of Paraná (IFPR)"</p>
                                        <p class="text-muted text-sm">"In progress"</p>
                                    </div>
                                </div>
                            </div>

                            <div>
                                <h3 class="text-xl font-light mb-4">"Focus Areas"</h3>
                                <div class="grid grid-cols-2 gap-3">
                                    {FOCUS_AREAS
                                        .iter()
                                        .map(|area| {
                                            view! {
                                                <div class="text-sm text-muted py-2 px-3 bg-background rounded border border-muted/30">
                                                    {*area}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="section-content">
                        <h3 class="text-xl font-light mb-8">"Tech Stack"</h3>
                        <div class="space-y-8">
                            <SkillList title="Frontend & Design" skills=&FRONTEND_SKILLS />
                            <SkillList title="Backend & Automation" skills=&BACKEND_SKILLS />

                            <div>
                                <h4 class="font-medium mb-4">"Professional Experience"</h4>
                                <div class="space-y-4">
                                    <div class="border-l-2 border-muted/30 pl-6">
                                        <h5 class="font-medium text-sm">"Full-Stack Web Developer"</h5>
                                        <p class="text-muted text-sm">"Black-Academy"</p>
                                        <p class="text-muted text-xs">"Responsive sites, landing pages and digital marketing"</p>
                                    </div>
                                    <div class="border-l-2 border-muted/30 pl-6">
                                        <h5 class="font-medium text-sm">"Mobile Developer"</h5>
                                        <p class="text-muted text-sm">"PlayInformática"</p>
                                        <p class="text-muted text-xs">"Android apps, APIs and systems integration"</p>
                                    </div>
                                    <div class="border-l-2 border-muted/30 pl-6">
                                        <h5 class="font-medium text-sm">"Freelance Full-Stack"</h5>
                                        <p class="text-muted text-sm">"Various projects"</p>
                                        <p class="text-muted text-xs">"Complete automation and development solutions"</p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillList(title: &'static str, skills: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-medium mb-6">{title}</h4>
            <div class="space-y-3">
                {skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="flex items-center space-x-3">
                                <div class="w-2 h-2 bg-cyan rounded-full flex-shrink-0"></div>
                                <span class="text-sm text-muted font-light">{*skill}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 section-content">
                    <p class="text-sm font-light tracking-widest uppercase text-muted mb-4">
                        "Competencies"
                    </p>
                    <h2 class="text-4xl lg:text-5xl font-light mb-8">"Professional Skills"</h2>
                    <p class="text-lg font-light text-muted max-w-2xl mx-auto">
                        "Soft skills and complementary abilities that add value to projects and teams."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SOFT_SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="group bg-brightBlack/20 p-8 rounded-2xl border border-muted/30 hover:border-muted/60 hover:-translate-y-1 transition-all duration-200 h-full">
                                    <div class="w-16 h-16 rounded-2xl bg-brightBlack/60 flex items-center justify-center text-3xl mb-6 group-hover:scale-110 transition-transform duration-200">
                                        {skill.icon}
                                    </div>
                                    <h3 class="text-xl font-medium mb-4">{skill.title}</h3>
                                    <p class="text-muted font-light leading-relaxed text-sm">
                                        {skill.blurb}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
