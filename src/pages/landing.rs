use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact::{CallButton, EmailButton};
use crate::config;
use crate::Route;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

/// Categories shown in the services grid. Ordering is the display order.
static SERVICES: [Service; 7] = [
    Service {
        icon: "electrical-icon",
        title: "Electrical Services",
        description: "Safe, reliable solutions for wiring, panel upgrades, lighting, and repairs.",
    },
    Service {
        icon: "appliance-icon",
        title: "Appliance Repair",
        description: "Fast, dependable repairs for refrigerators, ovens, washers, dryers, and more.",
    },
    Service {
        icon: "hvac-icon",
        title: "HVAC Services",
        description: "Installation, repair, and maintenance of heating, cooling, and ventilation systems.",
    },
    Service {
        icon: "roofing-icon",
        title: "Roofing Services",
        description: "Quality roof inspections, repairs, replacements, and installations.",
    },
    Service {
        icon: "plumbing-icon",
        title: "Plumbing Services",
        description: "Leak detection, water heater installs, drain cleaning, and more.",
    },
    Service {
        icon: "locksmith-icon",
        title: "Locksmith Services",
        description: "24/7 emergency lockouts, rekeying, and security upgrades.",
    },
    Service {
        icon: "pest-icon",
        title: "Pest Control",
        description: "Targeted treatments to eliminate and prevent pests safely.",
    },
];

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    icon: String,
    title: String,
    description: String,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card">
            <div class="service-icon-circle">
                <i class={classes!("service-icon", props.icon.clone())}></i>
            </div>
            <h3>{ &props.title }</h3>
            <p>{ &props.description }</p>
            <CallButton label={"Call Now".to_string()} classes={classes!("small")} />
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
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
        <div class="landing-page">
            <section id="hero" class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1>{"Get Connected With Trusted Service Providers Fast"}</h1>
                    <p class="hero-subtitle">
                        {"Insurance, home services, and financial help — one call away."}
                    </p>
                    <div class="hero-cta-group">
                        <CallButton label={"Call Now".to_string()} />
                        <EmailButton label={"Email Us".to_string()} />
                    </div>
                </div>
            </section>

            <section id="about" class="about-section">
                <h2>{"Who We Are"}</h2>
                <div class="about-content">
                    <div class="about-image">
                        <img
                            src="https://images.unsplash.com/photo-1748346674126-8c0df10f2f61?fm=jpg&q=80&w=1080"
                            alt="Professional services team"
                            loading="lazy"
                        />
                    </div>
                    <div class="about-text">
                        <p>
                            {"At Ghulam Shabeer Services, we connect people with trusted service \
                              providers across the United States. Whether you need insurance, home \
                              repair, or financial help, we make it easy to reach the right experts."}
                        </p>
                        <p>
                            {"Our commitment to excellence and customer satisfaction has made us a \
                              trusted partner for thousands of homeowners and businesses nationwide."}
                        </p>
                    </div>
                </div>
            </section>

            <section id="services" class="services-section">
                <h2>{"Our Services"}</h2>
                <div class="services-grid">
                    {
                        for SERVICES.iter().map(|service| html! {
                            <ServiceCard
                                icon={service.icon.to_string()}
                                title={service.title.to_string()}
                                description={service.description.to_string()}
                            />
                        })
                    }
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <h2>{"How It Works"}</h2>
                <div class="steps-grid">
                    <div class="step">
                        <i class="step-icon search-icon"></i>
                        <h3>{"Step 1 – Search for your service"}</h3>
                        <p>{"Tell us what type of service you need and we'll match you with the right professionals"}</p>
                    </div>
                    <div class="step">
                        <i class="step-icon phone-icon"></i>
                        <h3>{"Step 2 – Call our dedicated phone line"}</h3>
                        <p>{"Speak with our friendly representatives who will understand your specific needs"}</p>
                    </div>
                    <div class="step">
                        <i class="step-icon people-icon"></i>
                        <h3>{"Step 3 – Get connected to licensed providers"}</h3>
                        <p>{"We'll connect you instantly with trusted, licensed professionals in your area"}</p>
                    </div>
                </div>
            </section>

            <section id="why-choose-us" class="why-choose-us">
                <h2>{"Why Choose Us"}</h2>
                <div class="trust-grid">
                    <div class="trust-item">
                        <i class="check-icon"></i>
                        <span>{"Fast and reliable connections"}</span>
                    </div>
                    <div class="trust-item">
                        <i class="check-icon"></i>
                        <span>{"Services available nationwide"}</span>
                    </div>
                    <div class="trust-item">
                        <i class="check-icon"></i>
                        <span>{"100% free to call and connect"}</span>
                    </div>
                    <div class="trust-item">
                        <i class="check-icon"></i>
                        <span>{"Trusted providers only"}</span>
                    </div>
                </div>
            </section>

            <section id="call-to-action" class="cta-section">
                <div class="cta-panel">
                    <h2>{"Need help now? Call us today and get connected instantly."}</h2>
                    <div class="cta-phone-display">
                        <a class="cta-phone" href={config::tel_href()}>
                            { config::PHONE_DISPLAY }
                        </a>
                        <p>{"Available 24/7 for immediate assistance"}</p>
                    </div>
                    <div class="cta-buttons">
                        <CallButton label={"Click to Call".to_string()} classes={classes!("large")} />
                        <EmailButton label={"Email Us".to_string()} classes={classes!("large")} />
                    </div>
                    <div class="cta-perks">
                        <span><i class="check-icon"></i>{"Free consultation"}</span>
                        <span><i class="check-icon"></i>{"Instant connection"}</span>
                        <span><i class="check-icon"></i>{"Trusted professionals"}</span>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-content">
                    <div class="footer-column">
                        <h3>{"Ghulam Shabeer Services"}</h3>
                        <p>{"Connecting customers with trusted service providers nationwide."}</p>
                        <div class="social-links">
                            <a href="#" class="social-link">{"Facebook"}</a>
                            <a href="#" class="social-link">{"LinkedIn"}</a>
                            <a href="#" class="social-link">{"WhatsApp"}</a>
                        </div>
                    </div>
                    <div class="footer-column">
                        <h4>{"Contact Information"}</h4>
                        <a href={config::tel_href()} class="footer-contact-link">
                            { config::PHONE_DISPLAY }
                        </a>
                        <a href={config::mailto_href()} class="footer-contact-link">
                            { config::CONTACT_EMAIL }
                        </a>
                    </div>
                    <div class="footer-column">
                        <h4>{"Quick Links"}</h4>
                        <Link<Route> to={Route::Privacy} classes="footer-link">
                            {"Privacy Policy"}
                        </Link<Route>>
                        <Link<Route> to={Route::Terms} classes="footer-link">
                            {"Terms of Service"}
                        </Link<Route>>
                    </div>
                </div>
                <div class="footer-copyright">
                    <p>{"© 2025 Ghulam Shabeer Ahmad – Connecting Customers with Services Nationwide"}</p>
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn service_list_is_well_formed() {
        assert_eq!(SERVICES.len(), 7);

        let titles: HashSet<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), SERVICES.len(), "service titles must be unique");

        for service in &SERVICES {
            assert!(!service.title.is_empty());
            assert!(!service.description.is_empty());
            assert!(service.icon.ends_with("-icon"));
        }
    }
}
