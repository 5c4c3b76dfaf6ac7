use yew::prelude::*;

use crate::animation::{
    motion_classes, stagger_style, Reveal, BUTTON, CARD, HERO_IMAGE, SECTION_HEADER, STAGGERED,
    STAGGER_DELAY_MS, STAGGER_STEP_MS,
};
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::nav::Header;
use crate::pages::content::{
    Plan, FEATURES, PLANS, TESTIMONIALS, TESTIMONIAL_STARS,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Header />
            <Hero />
            <Features />
            <Testimonials />
            <Pricing />
            <CallToAction />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    badge: AttrValue,
    title: AttrValue,
    subtitle: AttrValue,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <Reveal motions={SECTION_HEADER} class="section-header">
            <span class="badge">{props.badge.clone()}</span>
            <h2>{props.title.clone()}</h2>
            <p class="section-subtitle">{props.subtitle.clone()}</p>
        </Reveal>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let item = |index: usize| stagger_style(index, STAGGER_STEP_MS, STAGGER_DELAY_MS);

    html! {
        <section class="hero">
            <div class="container hero-grid">
                <Reveal motions={STAGGERED} class="hero-copy">
                    <span class="badge fx-item" style={item(0)}>{"🚀 New: AI-Powered Automation"}</span>
                    <h1 class="fx-item" style={item(1)}>
                        {"Streamline Your "}
                        <span class="highlight fx-grow">{"Workflow"}</span>
                    </h1>
                    <p class="hero-subtitle fx-item" style={item(2)}>
                        {"Boost productivity by 300% with our intelligent automation platform. Connect your tools, automate repetitive tasks, and focus on what matters most."}
                    </p>
                    <div class="hero-actions fx-item" style={item(3)}>
                        <button class={classes!("btn", "btn-primary", "btn-lg", motion_classes(BUTTON, false))}>
                            {"Start Free Trial"}
                        </button>
                        <button class={classes!("btn", "btn-outline", "btn-lg", motion_classes(BUTTON, false))}>
                            {"Watch Demo"}
                        </button>
                    </div>
                    <div class="hero-checks fx-item" style={item(4)}>
                        <span class="check fx-grow">{"✓ 14-day free trial"}</span>
                        <span class="check fx-grow">{"✓ No credit card required"}</span>
                    </div>
                </Reveal>
                <div class={classes!("hero-image", motion_classes(HERO_IMAGE, false))}>
                    <img src="/assets/dashboard.svg" alt="StreamLine Dashboard" width="800" height="600" />
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section id="features" class="section">
            <div class="container">
                <SectionHeader
                    badge="Features"
                    title="Everything you need to succeed"
                    subtitle="Powerful features designed to transform how your team works together"
                />
                <Reveal motions={STAGGERED} class="card-grid four">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <div class="fx-item" style={stagger_style(index, STAGGER_STEP_MS, STAGGER_DELAY_MS)}>
                            <div class={classes!("card", "feature-card", motion_classes(CARD, false))}>
                                <div class="feature-icon fx-grow">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p class="card-description">{feature.description}</p>
                            </div>
                        </div>
                    }) }
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="section section-muted">
            <div class="container">
                <SectionHeader
                    badge="Testimonials"
                    title="Loved by teams worldwide"
                    subtitle="See what our customers have to say about StreamLine"
                />
                <Reveal motions={STAGGERED} class="card-grid three">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <div class="fx-item" style={stagger_style(index, STAGGER_STEP_MS, STAGGER_DELAY_MS)}>
                            <div class={classes!("card", "testimonial-card", motion_classes(CARD, false))}>
                                <div class="stars">
                                    { for (0..TESTIMONIAL_STARS).map(|star| html! {
                                        <span class="star pop-in" style={stagger_style(index + star, 100, 0)}>{"★"}</span>
                                    }) }
                                </div>
                                <p class="quote">{format!("\"{}\"", testimonial.quote)}</p>
                                <div class="author">
                                    <span class="avatar fx-grow">{testimonial.initials}</span>
                                    <div>
                                        <p class="author-name">{testimonial.name}</p>
                                        <p class="author-role">{testimonial.role}</p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }) }
                </Reveal>
            </div>
        </section>
    }
}

fn plan_card(index: usize, plan: &Plan) -> Html {
    let button_class = if plan.popular { "btn-primary" } else { "btn-outline" };

    html! {
        <div class="fx-item" style={stagger_style(index, STAGGER_STEP_MS, STAGGER_DELAY_MS)}>
            <div class={classes!("card", "plan-card", plan.popular.then(|| "popular"), motion_classes(CARD, false))}>
                if plan.popular {
                    <span class="badge badge-primary popular-badge pop-in">{"Most Popular"}</span>
                }
                <div class="plan-header">
                    <h3>{plan.name}</h3>
                    <p class="card-description">{plan.description}</p>
                    <div class="plan-price">
                        <span class="price fx-grow">{plan.price}</span>
                        <span class="per-month">{"/month"}</span>
                    </div>
                </div>
                <ul class="plan-features">
                    { for plan.features.iter().enumerate().map(|(feature_index, feature)| html! {
                        <li class="on-mount fx-fade-left" style={stagger_style(index + feature_index, 100, 0)}>
                            <span class="check">{"✓"}</span>
                            <span>{*feature}</span>
                        </li>
                    }) }
                </ul>
                <button class={classes!("btn", "btn-block", button_class, motion_classes(BUTTON, false))}>
                    {plan.cta()}
                </button>
            </div>
        </div>
    }
}

#[function_component(Pricing)]
fn pricing() -> Html {
    html! {
        <section id="pricing" class="section">
            <div class="container">
                <SectionHeader
                    badge="Pricing"
                    title="Simple, transparent pricing"
                    subtitle="Choose the perfect plan for your team size and needs"
                />
                <Reveal motions={STAGGERED} class="card-grid three">
                    { for PLANS.iter().enumerate().map(|(index, plan)| plan_card(index, plan)) }
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    let item = |index: usize| stagger_style(index, STAGGER_STEP_MS, STAGGER_DELAY_MS);

    html! {
        <section class="section cta-section">
            <Reveal motions={STAGGERED} class="container cta-content">
                <h2 class="fx-item" style={item(0)}>{"Ready to streamline your workflow?"}</h2>
                <p class="fx-item" style={item(1)}>
                    {"Join thousands of teams who have already transformed their productivity with StreamLine. Start your free trial today and see the difference in just 24 hours."}
                </p>
                <div class="cta-actions fx-item" style={item(2)}>
                    <button class={classes!("btn", "btn-secondary", "btn-lg", motion_classes(BUTTON, false))}>
                        {"Start Free Trial"}
                    </button>
                    <a href="#contact" class={classes!("btn", "btn-outline-light", "btn-lg", motion_classes(BUTTON, false))}>
                        {"Schedule Demo"}
                    </a>
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section id="contact" class="section section-muted">
            <div class="container">
                <SectionHeader
                    badge="Contact Us"
                    title="Let's Start a Conversation"
                    subtitle="Ready to transform your workflow? Get in touch with our team to discuss your needs and see how StreamLine can help."
                />
                <ContactForm />
            </div>
        </section>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #fff;
        color: #0f172a;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .section {
        padding: 5rem 0;
    }
    .section-muted {
        background: #f8fafc;
    }
    .section-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-header h2 {
        font-size: 2.75rem;
        font-weight: 700;
        margin: 1rem 0;
    }
    .section-subtitle, .hero-subtitle {
        font-size: 1.25rem;
        color: #64748b;
        max-width: 800px;
        margin: 0 auto;
    }
    .badge {
        display: inline-block;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: #f1f5f9;
        font-size: 0.85rem;
        font-weight: 600;
    }
    .badge-primary {
        background: #2563eb;
        color: #fff;
    }

    /* Header */
    .site-header {
        position: sticky;
        top: 0;
        z-index: 50;
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(8px);
        border-bottom: 1px solid #e2e8f0;
        transition: box-shadow 0.3s ease;
    }
    .site-header.scrolled {
        box-shadow: 0 4px 16px rgba(15, 23, 42, 0.08);
    }
    .header-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        height: 4rem;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        text-decoration: none;
        color: inherit;
    }
    .brand-mark {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 2rem;
        height: 2rem;
        border-radius: 0.5rem;
        background: #2563eb;
        transition: transform 0.5s ease;
    }
    .brand:hover .brand-mark {
        transform: rotate(360deg);
    }
    .brand-name {
        font-size: 1.25rem;
        font-weight: 700;
    }
    .header-nav {
        display: flex;
        gap: 1.5rem;
    }
    .nav-link {
        color: #475569;
        text-decoration: none;
        font-size: 0.9rem;
        font-weight: 500;
    }
    .nav-link:hover {
        color: #2563eb;
    }
    .header-actions {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 4px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        width: 22px;
        height: 2px;
        background: #0f172a;
    }

    /* Buttons */
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        border: 2px solid transparent;
        font-weight: 600;
        cursor: pointer;
        text-decoration: none;
    }
    .btn:disabled {
        opacity: 0.5;
        cursor: not-allowed;
    }
    .btn-lg {
        padding: 0.75rem 2rem;
        font-size: 1.1rem;
    }
    .btn-block {
        width: 100%;
    }
    .btn-primary {
        background: #2563eb;
        color: #fff;
    }
    .btn-secondary {
        background: #fff;
        color: #2563eb;
    }
    .btn-outline {
        background: transparent;
        border-color: #cbd5e1;
        color: #0f172a;
    }
    .btn-outline-light {
        background: transparent;
        border-color: rgba(255, 255, 255, 0.6);
        color: #fff;
    }
    .btn-ghost {
        background: transparent;
        color: #0f172a;
    }

    /* Hero */
    .hero {
        padding: 8rem 0;
        background: linear-gradient(135deg, #f8fafc, #fff);
    }
    .hero-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .hero-copy h1 {
        font-size: 4rem;
        font-weight: 800;
        line-height: 1.1;
        margin: 1rem 0;
    }
    .hero-copy .highlight {
        display: inline-block;
        color: #2563eb;
    }
    .hero-subtitle {
        margin: 0 0 2rem 0;
    }
    .hero-actions, .cta-actions {
        display: flex;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .hero-checks {
        display: flex;
        gap: 2rem;
        font-size: 0.9rem;
        color: #64748b;
    }
    .check {
        display: inline-block;
        color: #22c55e;
    }
    .hero-image img {
        width: 100%;
        height: auto;
        border-radius: 1rem;
        box-shadow: 0 25px 50px rgba(15, 23, 42, 0.25);
    }

    /* Cards */
    .card-grid {
        display: grid;
        gap: 2rem;
    }
    .card-grid.four {
        grid-template-columns: repeat(4, 1fr);
    }
    .card-grid.three {
        grid-template-columns: repeat(3, 1fr);
    }
    .card {
        position: relative;
        height: 100%;
        padding: 1.5rem;
        border-radius: 0.75rem;
        background: #fff;
        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
    }
    .card-description {
        color: #64748b;
    }
    .feature-icon {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 3rem;
        height: 3rem;
        border-radius: 0.5rem;
        background: rgba(37, 99, 235, 0.1);
        font-size: 1.5rem;
    }
    .stars {
        color: #facc15;
        display: flex;
        gap: 0.25rem;
    }
    .quote {
        font-size: 1rem;
        color: #334155;
        margin: 1rem 0;
    }
    .author {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .avatar {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        background: rgba(37, 99, 235, 0.1);
        font-size: 0.85rem;
        font-weight: 600;
    }
    .author-name {
        font-weight: 600;
        margin: 0;
    }
    .author-role {
        font-size: 0.85rem;
        color: #64748b;
        margin: 0;
    }
    .plan-card {
        border: 2px solid #e2e8f0;
        box-shadow: none;
    }
    .plan-card.popular {
        border-color: #2563eb;
    }
    .popular-badge {
        position: absolute;
        top: -0.9rem;
        left: 50%;
        transform: translateX(-50%);
    }
    .plan-header {
        text-align: center;
    }
    .plan-price {
        margin-top: 1rem;
    }
    .price {
        font-size: 2.5rem;
        font-weight: 700;
    }
    .per-month {
        color: #64748b;
    }
    .plan-features {
        list-style: none;
        padding: 0;
        margin: 1.5rem 0;
    }
    .plan-features li {
        display: flex;
        gap: 0.75rem;
        margin-bottom: 0.75rem;
    }

    /* CTA */
    .cta-section {
        background: #2563eb;
        color: #fff;
        text-align: center;
    }
    .cta-content h2 {
        font-size: 2.75rem;
        font-weight: 700;
    }
    .cta-content p {
        font-size: 1.25rem;
        opacity: 0.9;
        max-width: 600px;
        margin: 1rem auto 2rem;
    }
    .cta-actions {
        justify-content: center;
    }

    /* Contact */
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: start;
    }
    .contact-channels {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        margin: 2rem 0;
    }
    .contact-channel {
        display: flex;
        gap: 1rem;
        transition: transform 0.3s ease;
    }
    .contact-channel:hover {
        transform: translateX(5px);
    }
    .contact-channel h4 {
        margin: 0;
    }
    .contact-channel a {
        color: #64748b;
        text-decoration: none;
        white-space: pre-line;
    }
    .channel-icon {
        display: flex;
        align-items: center;
        justify-content: center;
        flex-shrink: 0;
        width: 3rem;
        height: 3rem;
        border-radius: 0.5rem;
        background: rgba(37, 99, 235, 0.1);
    }
    .response-card {
        background: linear-gradient(135deg, rgba(37, 99, 235, 0.05), rgba(37, 99, 235, 0.1));
        box-shadow: none;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .form-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
    }
    .form-label {
        display: block;
        margin-bottom: 0.5rem;
        font-size: 0.9rem;
        font-weight: 500;
        color: #374151;
    }
    .form-control {
        position: relative;
    }
    .form-input {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem 1rem;
        border-radius: 0.5rem;
        border: 2px solid;
        font: inherit;
        outline: none;
        resize: none;
        transition: border-color 0.2s ease, transform 0.2s ease, box-shadow 0.2s ease;
    }
    .form-input:focus {
        transform: scale(1.02);
    }
    .field-default {
        border-color: #d1d5db;
    }
    .field-default:focus {
        border-color: #2563eb;
        box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.2);
    }
    .field-error {
        border-color: #ef4444;
    }
    .field-error:focus {
        box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.2);
    }
    .field-success {
        border-color: #22c55e;
    }
    .field-success:focus {
        box-shadow: 0 0 0 3px rgba(34, 197, 94, 0.2);
    }
    .field-icon.success {
        position: absolute;
        right: 0.75rem;
        top: 0.85rem;
        color: #22c55e;
    }
    .field-message, .form-failure {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-top: 0.5rem;
        font-size: 0.85rem;
        color: #dc2626;
    }
    .form-failure {
        padding: 0.75rem 1rem;
        border-radius: 0.5rem;
        background: #fef2f2;
    }
    .button-content {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .loading-spinner {
        display: inline-block;
        width: 18px;
        height: 18px;
        border: 3px solid rgba(255, 255, 255, 0.3);
        border-radius: 50%;
        border-top-color: #fff;
        animation: spin 1s linear infinite;
    }
    .contact-success {
        text-align: center;
        padding: 5rem 0;
    }
    .success-badge {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 4rem;
        height: 4rem;
        margin-bottom: 1.5rem;
        border-radius: 50%;
        background: #dcfce7;
        color: #16a34a;
        font-size: 2rem;
        animation: pulse 0.6s ease;
    }
    .success-progress {
        width: 100%;
        height: 0.5rem;
        border-radius: 9999px;
        background: #bbf7d0;
        overflow: hidden;
    }
    .success-progress-bar {
        height: 100%;
        background: #16a34a;
        animation-name: drain;
        animation-timing-function: linear;
        animation-fill-mode: forwards;
    }

    /* Footer */
    .site-footer {
        background: #0f172a;
        color: #cbd5e1;
        padding: 4rem 0 2rem;
    }
    .site-footer .brand-name, .site-footer h3 {
        color: #fff;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .footer-column ul {
        list-style: none;
        padding: 0;
    }
    .footer-link {
        margin-bottom: 0.5rem;
        transition: transform 0.3s ease;
    }
    .footer-link:hover {
        transform: translateX(5px);
    }
    .site-footer a {
        color: inherit;
        text-decoration: none;
    }
    .site-footer a:hover {
        color: #fff;
    }
    .social-links, .legal-links {
        display: flex;
        gap: 1rem;
    }
    .footer-bottom {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-top: 3rem;
        padding-top: 2rem;
        border-top: 1px solid #1e293b;
        font-size: 0.85rem;
    }

    /* Motion */
    .fx-fade-up, .fx-fade-left, .fx-fade-right, .fx-fade {
        opacity: 0;
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .fx-fade-up { transform: translateY(60px); }
    .fx-fade-left { transform: translateX(-60px); }
    .fx-fade-right { transform: translateX(60px); }
    .fx-fade-up.revealed, .fx-fade-left.revealed, .fx-fade-right.revealed, .fx-fade.revealed {
        opacity: 1;
        transform: none;
    }
    .fx-stagger .fx-item {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.5s ease-out, transform 0.5s ease-out;
    }
    .fx-stagger.revealed .fx-item {
        opacity: 1;
        transform: none;
    }
    .on-mount.fx-slide-down {
        animation: slideDown 0.6s ease-out both;
    }
    .on-mount.fx-fade {
        animation: fadeScale 0.8s ease-out 0.2s both;
    }
    .on-mount.fx-fade-left {
        opacity: 1;
        animation: fadeLeft 0.4s ease-out both;
    }
    .on-mount.fx-float img {
        animation: float 3s ease-in-out infinite;
    }
    .fx-lift, .fx-grow {
        transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
    }
    .fx-lift:hover {
        transform: translateY(-5px) scale(1.02);
    }
    .fx-grow:hover {
        transform: scale(1.05);
    }
    .fx-grow:active {
        transform: scale(0.95);
    }
    .pop-in {
        animation: popIn 0.3s cubic-bezier(0.34, 1.56, 0.64, 1) both;
    }

    @keyframes slideDown {
        from { transform: translateY(-100px); opacity: 0; }
        to { transform: translateY(0); opacity: 1; }
    }
    @keyframes fadeScale {
        from { transform: scale(0.8); opacity: 0; }
        to { transform: scale(1); opacity: 1; }
    }
    @keyframes fadeLeft {
        from { transform: translateX(-20px); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-10px); }
    }
    @keyframes popIn {
        from { transform: translateY(-10px) scale(0.8); opacity: 0; }
        to { transform: none; opacity: 1; }
    }
    @keyframes pulse {
        0%, 100% { transform: scale(1); }
        50% { transform: scale(1.2); }
    }
    @keyframes drain {
        from { width: 100%; }
        to { width: 0; }
    }
    @keyframes spin { to { transform: rotate(360deg); } }

    @media (max-width: 950px) {
        .hero-grid, .contact-grid, .form-row {
            grid-template-columns: 1fr;
        }
        .card-grid.four, .card-grid.three, .footer-grid {
            grid-template-columns: 1fr 1fr;
        }
    }
    @media (max-width: 768px) {
        .hero-copy h1 {
            font-size: 2.5rem;
        }
        .header-nav, .desktop-only {
            display: none;
        }
        .header-nav.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 4rem;
            left: 0;
            right: 0;
            padding: 1rem 1.5rem;
            background: #fff;
            border-bottom: 1px solid #e2e8f0;
        }
        .burger-menu {
            display: flex;
        }
        .card-grid.four, .card-grid.three, .footer-grid {
            grid-template-columns: 1fr;
        }
        .footer-bottom {
            flex-direction: column;
            gap: 1rem;
        }
    }
"#;
