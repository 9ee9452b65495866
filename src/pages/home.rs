use yew::prelude::*;

use crate::components::{
    about::About,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    portfolio::Portfolio,
    services::Services,
    splash::Splash,
    testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <Splash>
                <Hero />
                <Services />
                <Portfolio />
                <About />
                <Testimonials />
                <Contact />
                <Footer />
            </Splash>

            <style>
                {r#"
                .home {
                    font-family: Inter, ui-sans-serif, system-ui, sans-serif;
                    color: #1f2937;
                    overflow-x: hidden;
                }

                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .reveal {
                    opacity: 0;
                    transition-property: all;
                    transition-duration: 700ms;
                    transition-timing-function: ease;
                }

                .reveal.from-below { transform: translateY(2.5rem); }
                .reveal.from-left { transform: translateX(-2.5rem); }
                .reveal.from-right { transform: translateX(2.5rem); }
                .reveal.from-small { transform: scale(0.95); }

                .reveal.is-visible {
                    opacity: 1;
                    transform: none;
                }

                .btn {
                    display: inline-block;
                    font-weight: 500;
                    padding: 0.75rem 2rem;
                    border-radius: 0.375rem;
                    text-decoration: none;
                    cursor: pointer;
                    transition: background-color 300ms ease, border-color 300ms ease;
                }

                .btn--primary {
                    background: #FFD700;
                    color: #111827;
                    border: none;
                }

                .btn--primary:hover {
                    background: #FDD835;
                }

                .btn--outline {
                    background: transparent;
                    color: #fff;
                    border: 2px solid #fff;
                }

                .btn--outline:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .btn--light {
                    background: #fff;
                    color: #1f2937;
                    border: 1px solid #d1d5db;
                }

                .btn--light:hover {
                    background: #f3f4f6;
                }

                .btn--block {
                    width: 100%;
                }

                .floating-blob {
                    position: absolute;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 9999px;
                    background: #FFF59D;
                    filter: blur(24px);
                    opacity: 0.2;
                    mix-blend-mode: multiply;
                    animation: float 20s ease-in-out infinite;
                    pointer-events: none;
                }

                .floating-blob--top {
                    top: 5rem;
                    left: 2.5rem;
                }

                .floating-blob--bottom {
                    bottom: 5rem;
                    right: 2.5rem;
                    background: #FFF176;
                    animation-delay: -10s;
                }

                @keyframes float {
                    0%, 100% { transform: translate(0, 0); }
                    50% { transform: translate(2rem, -2rem); }
                }
                "#}
            </style>
        </div>
    }
}
