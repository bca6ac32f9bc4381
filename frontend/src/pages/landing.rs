use yew::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::components::count_up::CountUpNumber;
use crate::components::layout::{Grid, Stack, StackDirection};
use crate::components::magnetic::MagneticWrapper;
use crate::components::parallax::ParallaxContainer;
use crate::components::reveal::{Reveal, SectionReveal};
use crate::hooks::use_reduced_motion::use_motion_preference;
use crate::motion::variant::{Direction, Variant};
use crate::pages::faq::FaqSection;
use crate::pages::packages::PackagesSection;

const BADGES: [&str; 5] = [
    "Official exam blueprint",
    "Instant scoring",
    "Video explanations",
    "National ranking",
    "Mobile friendly",
];

const BENEFITS: [(&str, &str); 3] = [
    ("Realistic try-outs", "Timed sections and official scoring rules, so exam day feels familiar."),
    ("Know your weak spots", "Every answer is tagged by topic and your dashboard shows where points are lost."),
    ("Learn from mistakes", "Step-by-step explanations and short videos for every question."),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("Nadia", "Accepted to Universitas Indonesia", "The try-outs were harder than the real test, which is exactly what I needed."),
    ("Rizky", "Civil service exam, top 5%", "Seeing my ranking every week kept me studying even when I did not feel like it."),
    ("Putri", "IELTS 7.5", "The listening explanations finally made the tricky questions click."),
];

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <ParallaxContainer class="hero-glow" offset={120.0} speed={0.6}>
                <div class="hero-glow-shape" />
            </ParallaxContainer>
            <div class="hero-content">
                <AnimatedText
                    tag="h1"
                    variant={Variant::RevealText}
                    text="Pass your exam with confidence"
                />
                <Reveal delay={0.3}>
                    <p class="hero-subtitle">
                        {"Realistic try-outs, instant scores and explanations for every question."}
                    </p>
                </Reveal>
                <Reveal variant={Variant::Scale} delay={0.5}>
                    <Stack direction={StackDirection::Horizontal} class="hero-actions">
                        <MagneticWrapper>
                            <a href="#packages" class="hero-cta">{"Start practicing"}</a>
                        </MagneticWrapper>
                        <a href="#faq" class="hero-secondary">{"Questions?"}</a>
                    </Stack>
                </Reveal>
            </div>
        </header>
    }
}

#[function_component(Badges)]
fn badges() -> Html {
    html! {
        <Reveal variant={Variant::Scale} stagger={true} class="badge-row">
            { for BADGES.iter().map(|badge| html! { <span class="badge">{ *badge }</span> }) }
        </Reveal>
    }
}

#[function_component(Stats)]
fn stats() -> Html {
    html! {
        <section class="stats-section">
            <Grid columns={3}>
                <div class="stat">
                    <CountUpNumber end={120000.0} suffix="+" class="stat-value" />
                    <span class="stat-label">{"students practicing"}</span>
                </div>
                <div class="stat">
                    <CountUpNumber end={98.5} decimals={1} suffix="%" class="stat-value" />
                    <span class="stat-label">{"would recommend us"}</span>
                </div>
                <div class="stat">
                    <CountUpNumber end={35000.0} class="stat-value" />
                    <span class="stat-label">{"questions with explanations"}</span>
                </div>
            </Grid>
        </section>
    }
}

#[function_component(Benefits)]
fn benefits() -> Html {
    html! {
        <section id="benefits" class="benefits-section">
            <Reveal>
                <h2>{"Why students prepare with us"}</h2>
            </Reveal>
            <Grid columns={3}>
                { for BENEFITS.iter().enumerate().map(|(index, (title, body))| html! {
                    <Reveal variant={Variant::Feature} delay={index as f64 * 0.1} class="benefit-card">
                        <h3>{ *title }</h3>
                        <p>{ *body }</p>
                    </Reveal>
                }) }
            </Grid>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials-section">
            <Reveal direction={Direction::Left} variant={Variant::Fade}>
                <h2>{"What our students say"}</h2>
            </Reveal>
            <Reveal variant={Variant::Testimonial} stagger={true} stagger_delay={0.15} trigger_once={false} class="testimonial-track">
                { for TESTIMONIALS.iter().map(|(name, result, quote)| html! {
                    <figure class="testimonial">
                        <blockquote>{ *quote }</blockquote>
                        <figcaption>
                            <strong>{ *name }</strong>
                            <span>{ *result }</span>
                        </figcaption>
                    </figure>
                }) }
            </Reveal>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let preference = use_motion_preference();

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

    html! {
        <div class={classes!("landing-page", preference.prefers_high_contrast.then(|| "high-contrast"))}>
            <Hero />
            <Badges />
            <Stats />
            <Benefits />
            <PackagesSection />
            <Testimonials />
            <FaqSection />
            <SectionReveal id="register" variant={Variant::Bounce} class="final-cta">
                <h2>{"Your next try-out starts now"}</h2>
                <MagneticWrapper strength={0.3}>
                    <a href="#packages" class="hero-cta">{"Create free account"}</a>
                </MagneticWrapper>
            </SectionReveal>
            <style>
                {r#"
                    .landing-page {
                        color: #1f2937;
                        overflow-x: hidden;
                    }

                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 6rem 2rem 4rem;
                        text-align: center;
                    }

                    .hero h1 {
                        font-size: clamp(2.2rem, 6vw, 4rem);
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }

                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        z-index: -1;
                    }

                    .hero-glow-shape {
                        width: 480px;
                        height: 480px;
                        margin: 0 auto;
                        border-radius: 50%;
                        background: radial-gradient(circle, rgba(59, 145, 181, 0.25), transparent 70%);
                    }

                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 36rem;
                        margin: 0 auto 2rem;
                    }

                    .hero-actions {
                        justify-content: center;
                        align-items: center;
                    }

                    .hero-cta, .package-cta {
                        display: inline-block;
                        padding: 0.9rem 2rem;
                        border-radius: 999px;
                        background: #3b91b5;
                        color: white;
                        font-weight: 600;
                        text-decoration: none;
                    }

                    .hero-secondary {
                        color: #3b91b5;
                        text-decoration: none;
                    }

                    .badge-row {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        padding: 0 2rem 3rem;
                    }

                    .badge {
                        padding: 0.4rem 1rem;
                        border-radius: 999px;
                        background: rgba(59, 145, 181, 0.1);
                        color: #1e6d8c;
                        font-size: 0.9rem;
                    }

                    .grid {
                        display: grid;
                        grid-template-columns: repeat(var(--grid-columns), minmax(0, 1fr));
                    }

                    @media (max-width: 768px) {
                        .grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .stats-section, .benefits-section, .packages-section,
                    .testimonials-section, .faq-section, .final-cta {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                    }

                    .stat {
                        text-align: center;
                    }

                    .stat-value {
                        display: block;
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: #3b91b5;
                    }

                    .benefit-card, .package-card, .testimonial {
                        padding: 2rem;
                        border-radius: 20px;
                        background: white;
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.06);
                    }

                    .packages-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }

                    .package-card.highlighted {
                        border: 2px solid #3b91b5;
                    }

                    .package-badge {
                        font-size: 0.8rem;
                        font-weight: 600;
                        color: #3b91b5;
                        text-transform: uppercase;
                    }

                    .price-display {
                        font-weight: 700;
                        margin: 1rem 0;
                    }

                    .price-lg .price-amount {
                        font-size: 2rem;
                        margin-left: 0.25rem;
                    }

                    .price-currency, .price-period {
                        font-size: 0.9rem;
                        font-weight: 400;
                        color: #6b7280;
                    }

                    .testimonial-track {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }

                    .faq-item {
                        border-bottom: 1px solid #e5e7eb;
                    }

                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        padding: 1.25rem 0;
                        background: none;
                        border: none;
                        font-size: 1.1rem;
                        cursor: pointer;
                        text-align: left;
                    }

                    .faq-answer-inner {
                        padding-bottom: 1.25rem;
                        color: #4b5563;
                    }

                    .final-cta {
                        text-align: center;
                    }

                    .high-contrast .hero-subtitle, .high-contrast .stat-label,
                    .high-contrast .faq-answer-inner {
                        color: #111827;
                    }

                    .animated-word {
                        white-space: pre;
                    }
                "#}
            </style>
        </div>
    }
}
