use yew::prelude::*;

use crate::components::section_title::reveal_class;
use crate::visibility::{use_reveal, TrackerConfig};

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), TrackerConfig::default());

    html! {
        <section id="home" ref={node} class="hero">
            <div class="hero__background">
                <div class="hero__shade"></div>
                <img
                    src="https://images.pexels.com/photos/1732414/pexels-photo-1732414.jpeg"
                    alt="Modern home interior"
                />
            </div>

            <div class="hero__content container">
                <h1 class={reveal_class(visible, "from-below")}>
                    {"Transform Your "}<span class="accent">{"Home"}</span>
                    <br />
                    {"Into Your "}<span class="accent">{"Dream Space"}</span>
                </h1>
                <p class={reveal_class(visible, "from-below")} style="transition-delay: 300ms;">
                    {"From concept to completion, we bring your vision to life with expert craftsmanship and attention to detail."}
                </p>
                <div class={classes!("hero__actions", reveal_class(visible, "from-below"))} style="transition-delay: 500ms;">
                    <a href="#services" class="btn btn--primary">{"Our Services"}</a>
                    <a href="#contact" class="btn btn--outline">{"Get a Quote"}</a>
                </div>
            </div>

            <div class="hero__scroll-indicator">
                <div class="mouse">
                    <div class="mouse__wheel"></div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .hero__background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .hero__background img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero__shade {
                    position: absolute;
                    inset: 0;
                    background: #000;
                    opacity: 0.6;
                    z-index: 1;
                }

                .hero__content {
                    position: relative;
                    z-index: 2;
                    text-align: center;
                    color: #fff;
                }

                .hero__content h1 {
                    font-size: 3.75rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    transition-duration: 1000ms;
                }

                .hero__content p {
                    font-size: 1.25rem;
                    color: #f3f4f6;
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                    transition-duration: 1000ms;
                }

                .hero__actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    transition-duration: 1000ms;
                }

                .accent {
                    color: #FFEE58;
                }

                .hero__scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 2;
                    animation: bounce 1s infinite;
                }

                .mouse {
                    width: 2rem;
                    height: 3rem;
                    border: 2px solid #fff;
                    border-radius: 9999px;
                    display: flex;
                    justify-content: center;
                }

                .mouse__wheel {
                    width: 0.25rem;
                    height: 0.75rem;
                    margin-top: 0.5rem;
                    background: #fff;
                    border-radius: 9999px;
                    animation: wheel 1.5s ease-in-out infinite;
                }

                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, -25%); }
                    50% { transform: translate(-50%, 0); }
                }

                @keyframes wheel {
                    0% { opacity: 1; transform: translateY(0); }
                    100% { opacity: 0; transform: translateY(12px); }
                }

                @media (max-width: 768px) {
                    .hero__content h1 {
                        font-size: 2.25rem;
                    }

                    .hero__content p {
                        font-size: 1.1rem;
                    }

                    .hero__actions {
                        flex-direction: column;
                        align-items: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}
