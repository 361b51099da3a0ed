use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::scroll_fade::{fade_in, hero_fade, section_fade, section_progress};
use crate::Route;

#[derive(Clone, PartialEq)]
struct Fades {
    nav: f64,
    hero: f64,
    about: [f64; 3],
    survey: [f64; 3],
    contact: [f64; 3],
}

impl Default for Fades {
    fn default() -> Self {
        Self {
            nav: 0.0,
            hero: 1.0,
            about: [0.0; 3],
            survey: [0.0; 3],
            contact: [0.0; 3],
        }
    }
}

fn node_progress(node: &NodeRef, viewport: f64) -> f64 {
    node.cast::<web_sys::Element>()
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            section_progress(rect.top(), rect.height(), viewport)
        })
        .unwrap_or(0.0)
}

fn compute_fades(
    window: &web_sys::Window,
    about: &NodeRef,
    survey: &NodeRef,
    contact: &NodeRef,
) -> Fades {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);

    let hero_progress = if viewport > 0.0 {
        (scroll_y / viewport).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let staged = |node: &NodeRef| {
        let progress = node_progress(node, viewport);
        [
            section_fade(progress, 0),
            section_fade(progress, 1),
            section_fade(progress, 2),
        ]
    };
    // the contact section reveals and then stays
    let contact_progress = node_progress(contact, viewport);
    let contact_fades = [
        fade_in(contact_progress, (0.15, 0.25)),
        fade_in(contact_progress, (0.18, 0.28)),
        fade_in(contact_progress, (0.21, 0.31)),
    ];

    Fades {
        nav: (scroll_y / 300.0).clamp(0.0, 1.0),
        hero: hero_fade(hero_progress),
        about: staged(about),
        survey: staged(survey),
        contact: contact_fades,
    }
}

fn overlay_style(opacity: f64) -> String {
    let pointer_events = if opacity > 0.05 { "auto" } else { "none" };
    format!("opacity: {opacity:.3}; pointer-events: {pointer_events};")
}

fn opacity_style(opacity: f64) -> String {
    format!("opacity: {opacity:.3};")
}

fn scroll_to(target: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(target))
        {
            element.scroll_into_view();
        }
    })
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let fades = use_state(Fades::default);
    let about_ref = use_node_ref();
    let survey_ref = use_node_ref();
    let contact_ref = use_node_ref();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        let fades = fades.clone();
        let about_ref = about_ref.clone();
        let survey_ref = survey_ref.clone();
        let contact_ref = contact_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let callback = Closure::<dyn Fn()>::new({
                    let window = window.clone();
                    let fades = fades.clone();
                    let about_ref = about_ref.clone();
                    let survey_ref = survey_ref.clone();
                    let contact_ref = contact_ref.clone();
                    move || {
                        fades.set(compute_fades(&window, &about_ref, &survey_ref, &contact_ref));
                    }
                });
                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .unwrap();
                // Initial check
                fades.set(compute_fades(&window, &about_ref, &survey_ref, &contact_ref));
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <nav class="top-nav" style={opacity_style(fades.nav)}>
                <div class="nav-content">
                    <span class="nav-logo">{"💀 BoneStack"}</span>
                    <div class="nav-links">
                        <a href="#about" onclick={scroll_to("about")}>{"About"}</a>
                        <a href="#survey" onclick={scroll_to("survey")}>{"Survey"}</a>
                        <a href="#contact" onclick={scroll_to("contact")}>{"Contact"}</a>
                    </div>
                </div>
            </nav>

            <section class="hero" style={overlay_style(fades.hero)}>
                <div class="hero-content">
                    <div class="hero-mark">{"💀"}</div>
                    <h1>{"Transform Your Skull"}</h1>
                    <div class="scroll-hint">{"↓"}</div>
                </div>
            </section>
            <div class="hero-spacer"></div>

            <section id="about" ref={about_ref} class="pin-section">
                <div class="pin-content" style={overlay_style(fades.about[0].max(fades.about[2]))}>
                    <h2 style={opacity_style(fades.about[0])}>{"About BoneStack"}</h2>
                    <p class="section-lead" style={opacity_style(fades.about[1])}>
                        {"A comprehensive educational platform providing customized stacks to morph into your dream self."}
                    </p>
                    <div class="feature-grid" style={opacity_style(fades.about[2])}>
                        <div class="feature-card">
                            <div class="feature-icon">{"🧠"}</div>
                            <h3>{"Educational"}</h3>
                            <p>{"Detailed anatomical models and expert insights"}</p>
                        </div>
                        <div class="feature-card">
                            <div class="feature-icon">{"🔍"}</div>
                            <h3>{"Customized"}</h3>
                            <p>{"Fully customized towards YOU and your needs"}</p>
                        </div>
                        <div class="feature-card">
                            <div class="feature-icon">{"🛡"}</div>
                            <h3>{"Research-Based"}</h3>
                            <p>{"Latest findings in cranial morphology studies"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="survey" ref={survey_ref} class="pin-section">
                <div class="pin-content" style={overlay_style(fades.survey[0].max(fades.survey[2]))}>
                    <h2 style={opacity_style(fades.survey[0])}>{"Start Your Journey"}</h2>
                    <p class="section-lead" style={opacity_style(fades.survey[1])}>
                        {"Ready to change your bones?"}
                    </p>
                    <div style={opacity_style(fades.survey[2])}>
                        <Link<Route> to={Route::Survey} classes="forward-link">
                            <button class="cta-button">{"Start Survey"}</button>
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section id="contact" ref={contact_ref} class="contact-section">
                <div class="contact-inner">
                    <h2 style={opacity_style(fades.contact[0])}>{"Contact"}</h2>
                    <p class="section-lead" style={opacity_style(fades.contact[1])}>
                        {"Interested in learning more about BoneStack or contributing to our research? We'd love to hear from you."}
                    </p>
                    <div style={opacity_style(fades.contact[2])}>
                        <a href="mailto:hello@bonestack.example">
                            <button class="cta-button">{"Get in Touch"}</button>
                        </a>
                    </div>
                </div>

                <div class="disclaimer">
                    {"📚 Educational content only. Not a substitute for professional medical advice. Always consult with qualified healthcare providers for health-related concerns."}
                </div>

                <footer class="landing-footer">
                    <div class="footer-content">
                        <span class="footer-brand">{"💀 © 2025 BoneStack"}</span>
                        <div class="footer-links">
                            <a href="#">{"Privacy"}</a>
                            <a href="#">{"Terms"}</a>
                            <a href="#">{"Research Ethics"}</a>
                        </div>
                    </div>
                </footer>
            </section>

            <style>
                {r#"
.landing-page {
    background: #ffffff;
    color: #000000;
    overflow-x: hidden;
}

.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid #f3f3f3;
}

.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    font-weight: 500;
}

.nav-links {
    display: flex;
    gap: 2rem;
}

.nav-links a {
    color: #000;
    text-decoration: none;
    font-size: 0.875rem;
    transition: color 0.2s ease;
}

.nav-links a:hover {
    color: #666;
}

.hero {
    position: fixed;
    inset: 0;
    height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
}

.hero-mark {
    font-size: 7rem;
    margin-bottom: 2rem;
}

.hero h1 {
    font-size: 1.875rem;
    font-weight: 300;
    letter-spacing: 0.05em;
    margin: 0;
}

.scroll-hint {
    position: absolute;
    bottom: 3rem;
    left: 50%;
    transform: translateX(-50%);
    color: #9ca3af;
    animation: bounce 1.5s infinite;
}

@keyframes bounce {
    0%, 100% { transform: translate(-50%, 0); }
    50% { transform: translate(-50%, -8px); }
}

.hero-spacer {
    height: 100vh;
}

.pin-section {
    height: 100vh;
    position: relative;
}

.pin-content {
    position: fixed;
    inset: 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 0 1.5rem;
}

.pin-content h2,
.contact-section h2 {
    font-size: 3rem;
    font-weight: 300;
    margin: 0 0 2rem;
}

.section-lead {
    font-size: 1.25rem;
    color: #4b5563;
    line-height: 1.7;
    max-width: 640px;
    margin: 0 0 3rem;
}

.feature-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 3rem;
    max-width: 900px;
}

.feature-card {
    text-align: center;
}

.feature-icon {
    background: #f9fafb;
    border-radius: 1.5rem;
    width: 5rem;
    height: 5rem;
    margin: 0 auto 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
}

.feature-card h3 {
    font-size: 1.125rem;
    font-weight: 500;
    margin: 0 0 0.5rem;
}

.feature-card p {
    color: #4b5563;
    font-size: 0.875rem;
    margin: 0;
}

.cta-button {
    background: #000;
    color: #fff;
    border: none;
    border-radius: 9999px;
    padding: 1.25rem 3rem;
    font-size: 1.125rem;
    cursor: pointer;
    transition: background 0.2s ease, transform 0.2s ease;
}

.cta-button:hover {
    background: #1f2937;
    transform: scale(1.05);
}

.forward-link {
    text-decoration: none;
}

.contact-section {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    background: #ffffff;
    position: relative;
    z-index: 10;
}

.contact-inner {
    flex: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 5rem 1.5rem;
}

.disclaimer {
    background: #f9fafb;
    border: 1px solid #e5e7eb;
    border-radius: 1rem;
    max-width: 760px;
    margin: 0 auto 3rem;
    padding: 1.25rem 2rem;
    text-align: center;
    color: #4b5563;
    font-size: 0.9rem;
}

.landing-footer {
    border-top: 1px solid #e5e7eb;
    padding: 2rem 1.5rem;
}

.footer-content {
    max-width: 1200px;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.footer-brand {
    font-size: 0.875rem;
    color: #4b5563;
}

.footer-links {
    display: flex;
    gap: 1.5rem;
}

.footer-links a {
    color: #4b5563;
    text-decoration: none;
    font-size: 0.875rem;
    transition: color 0.2s ease;
}

.footer-links a:hover {
    color: #000;
}

@media (max-width: 768px) {
    .nav-links {
        gap: 1rem;
    }

    .pin-content h2,
    .contact-section h2 {
        font-size: 2rem;
    }

    .feature-grid {
        grid-template-columns: 1fr;
        gap: 2rem;
    }

    .footer-content {
        flex-direction: column;
        gap: 1rem;
    }
}
                "#}
            </style>
        </div>
    }
}
