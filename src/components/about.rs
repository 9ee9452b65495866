use yew::prelude::*;

use crate::components::section_title::{reveal_class, SectionTitle};
use crate::config;
use crate::content::STATS;
use crate::visibility::{use_reveal, TrackerConfig};

#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), TrackerConfig::default());

    html! {
        <section id="about" ref={node} class="about">
            <div class="container">
                <SectionTitle
                    title="About Us"
                    subtitle="Our Story"
                    description="Learn about our team and our commitment to excellence"
                    visible={visible}
                />

                <div class="about__body">
                    <div class={classes!("about__image", reveal_class(visible, "from-left"))}>
                        <div class="about__image-accent"></div>
                        <img
                            src="https://images.pexels.com/photos/3760529/pexels-photo-3760529.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
                            alt="Team at work"
                        />
                    </div>

                    <div class={classes!("about__text", reveal_class(visible, "from-right"))}>
                        <h3>{"Transforming Houses into Dream Homes Since 2004"}</h3>
                        <p>
                            {"At Home Transformations, we believe that everyone deserves to live in a space that reflects their personality and meets their needs. Our journey began when our founder, Michael Reynolds, recognized the need for a renovation company that truly understood the dreams and aspirations of homeowners."}
                        </p>
                        <p>
                            {"What started as a small team of dedicated craftsmen has grown into a full-service home transformation company with over 50 skilled professionals. Our team includes interior designers, carpenters, painters, electricians, plumbers, and project managers who work together seamlessly to bring your vision to life."}
                        </p>
                        <p>
                            {"We take pride in our attention to detail, commitment to quality, and adherence to schedules and budgets. Our goal is not just to meet your expectations but to exceed them, creating spaces that inspire and delight."}
                        </p>
                        <div class="about__actions">
                            <a href="#contact" class="btn btn--primary">{"Contact Us"}</a>
                            <a href="#testimonials" class="btn btn--light">{"Read Testimonials"}</a>
                        </div>
                    </div>
                </div>

                <div class="about__stats">
                    {
                        STATS.iter().enumerate().map(|(index, stat)| html! {
                            <div
                                key={index}
                                class={classes!("stat", reveal_class(visible, "from-below"))}
                                style={config::stagger_delay(index)}
                            >
                                <div class="stat__icon">{stat.icon}</div>
                                <div class="stat__value">{stat.value}</div>
                                <div class="stat__label">{stat.label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .about {
                    padding: 5rem 0;
                    background: #f9fafb;
                }

                .about__body {
                    display: flex;
                    gap: 3rem;
                    margin-top: 3rem;
                }

                .about__image,
                .about__text {
                    flex: 1;
                }

                .about__image {
                    position: relative;
                }

                .about__image-accent {
                    position: absolute;
                    top: -1rem;
                    left: -1rem;
                    width: 6rem;
                    height: 6rem;
                    background: #FFD700;
                    z-index: 0;
                }

                .about__image img {
                    position: relative;
                    z-index: 1;
                    width: 100%;
                    height: auto;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .about__text h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .about__text p {
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }

                .about__actions {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .about__stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    margin-top: 5rem;
                }

                .stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .stat__icon {
                    color: #FFD700;
                    font-size: 2rem;
                    margin-bottom: 0.5rem;
                }

                .stat__value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                }

                .stat__label {
                    color: #6b7280;
                }

                @media (max-width: 1024px) {
                    .about__body {
                        flex-direction: column;
                    }
                }

                @media (max-width: 768px) {
                    .about__stats {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
