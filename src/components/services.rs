use yew::prelude::*;

use crate::components::section_title::{reveal_class, SectionTitle};
use crate::config;
use crate::content::SERVICES;
use crate::visibility::{use_reveal, TrackerConfig};

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    index: usize,
    visible: bool,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let Some(service) = SERVICES.get(props.index) else {
        return html! {};
    };

    html! {
        <div
            class={classes!("service-card", reveal_class(props.visible, "from-below"))}
            style={config::stagger_delay(props.index)}
        >
            <div class="service-card__icon">{service.icon}</div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <a href="#contact" class="service-card__link">
                {"Learn More"}
                <span class="arrow">{"→"}</span>
            </a>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), TrackerConfig::default());

    html! {
        <section id="services" ref={node} class="services">
            <div class="floating-blob floating-blob--top"></div>
            <div class="floating-blob floating-blob--bottom"></div>

            <div class="container">
                <SectionTitle
                    title="Our Services"
                    subtitle="What We Offer"
                    description="We provide comprehensive home transformation services to bring your vision to life"
                    visible={visible}
                />

                <div class="services__grid">
                    {
                        (0..SERVICES.len()).map(|index| html! {
                            <ServiceCard key={index} index={index} visible={visible} />
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .services {
                    position: relative;
                    padding: 5rem 0;
                    background: #f9fafb;
                    overflow: hidden;
                }

                .services__grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .service-card {
                    background: #fff;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition-duration: 500ms;
                }

                .service-card.is-visible:hover {
                    transform: translateY(-0.5rem);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }

                .service-card__icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    background: #FFF9C4;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    margin-bottom: 1rem;
                    transition: background 300ms ease;
                }

                .service-card:hover .service-card__icon {
                    background: #FFD700;
                }

                .service-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .service-card p {
                    color: #4b5563;
                }

                .service-card__link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    margin-top: 1rem;
                    color: #F9A825;
                    font-weight: 500;
                    text-decoration: none;
                }

                .service-card__link .arrow {
                    transition: transform 0.3s ease;
                }

                .service-card:hover .arrow {
                    transform: translateX(4px);
                }

                @media (max-width: 1024px) {
                    .services__grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 640px) {
                    .services__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
