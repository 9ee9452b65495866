use chrono::Datelike;
use log::info;
use web_sys::{HtmlInputElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::content::{NAV_LINKS, SERVICES, SOCIAL_LINKS};

/// Services linked from the footer; the rest only appear in the grid.
const FOOTER_SERVICES: [usize; 5] = [0, 1, 2, 3, 5];

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let newsletter_email = use_state(String::new);

    let on_email_input = {
        let newsletter_email = newsletter_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            newsletter_email.set(input.value());
        })
    };

    let on_subscribe = {
        let newsletter_email = newsletter_email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Newsletter signup for {}", *newsletter_email);
            newsletter_email.set(String::new());
        })
    };

    html! {
        <footer class="footer">
            <div class="container footer__inner">
                <div class="footer__grid">
                    <div>
                        <div class="footer__brand">
                            <span class="footer__logo">{"⌂"}</span>
                            <span>{config::BUSINESS_NAME}</span>
                        </div>
                        <p class="footer__muted">
                            {"Transforming houses into dream homes with quality craftsmanship and exceptional service."}
                        </p>
                        <div class="footer__social">
                            {
                                SOCIAL_LINKS.iter().map(|(name, glyph)| html! {
                                    <a key={*name} href="#" class="footer__link" aria-label={*name}>{*glyph}</a>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            {
                                NAV_LINKS.iter().map(|(href, label)| html! {
                                    <li key={*href}><a href={*href} class="footer__link">{*label}</a></li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div>
                        <h3>{"Our Services"}</h3>
                        <ul>
                            {
                                FOOTER_SERVICES.iter().filter_map(|i| SERVICES.get(*i)).map(|service| html! {
                                    <li key={service.title}><a href="#services" class="footer__link">{service.title}</a></li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div>
                        <h3>{"Newsletter"}</h3>
                        <p class="footer__muted">
                            {"Subscribe to our newsletter for tips, news, and promotions."}
                        </p>
                        <form class="newsletter" onsubmit={on_subscribe}>
                            <input
                                type="email"
                                placeholder="Your email address"
                                required=true
                                value={(*newsletter_email).clone()}
                                oninput={on_email_input}
                            />
                            <button type="submit" aria-label="Subscribe">{"✉"}</button>
                        </form>
                        <p class="footer__muted footer__small">
                            {"By subscribing, you agree to our Privacy Policy and consent to receive updates."}
                        </p>
                    </div>
                </div>

                <hr />

                <div class="footer__bottom">
                    <p class="footer__muted footer__small">
                        {format!("© {} {}. All rights reserved.", current_year(), config::BUSINESS_NAME)}
                    </p>
                    <div class="footer__legal">
                        <a href="#" class="footer__link footer__small">{"Privacy Policy"}</a>
                        <a href="#" class="footer__link footer__small">{"Terms of Service"}</a>
                        <a href="#" class="footer__link footer__small">{"Sitemap"}</a>
                    </div>
                </div>
            </div>

            <button
                class="scroll-top"
                onclick={Callback::from(|_: MouseEvent| scroll_to_top())}
                aria-label="Scroll to top"
            >
                {"↑"}
            </button>

            <style>
                {r#"
                .footer {
                    background: #111827;
                    color: #fff;
                }

                .footer__inner {
                    padding-top: 4rem;
                    padding-bottom: 2rem;
                }

                .footer__grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .footer h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .footer ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .footer__brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .footer__logo {
                    color: #FFD700;
                }

                .footer__muted {
                    color: #9ca3af;
                    margin-bottom: 1rem;
                }

                .footer__small {
                    font-size: 0.875rem;
                }

                .footer__link {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer__link:hover {
                    color: #FFD700;
                }

                .footer__social,
                .footer__legal {
                    display: flex;
                    gap: 1rem;
                }

                .newsletter {
                    display: flex;
                    margin-bottom: 1rem;
                }

                .newsletter input {
                    flex: 1;
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0.375rem 0 0 0.375rem;
                    color: #1f2937;
                }

                .newsletter button {
                    background: #FFD700;
                    border: none;
                    padding: 0.5rem 1rem;
                    border-radius: 0 0.375rem 0.375rem 0;
                    cursor: pointer;
                }

                .footer hr {
                    border: none;
                    border-top: 1px solid #1f2937;
                    margin: 2rem 0;
                }

                .footer__bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .scroll-top {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    background: #FFD700;
                    color: #111827;
                    border: none;
                    border-radius: 9999px;
                    width: 3rem;
                    height: 3rem;
                    font-size: 1.25rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .scroll-top:hover {
                    background: #FDD835;
                }

                @media (max-width: 1024px) {
                    .footer__grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .footer__grid {
                        grid-template-columns: 1fr;
                    }

                    .footer__bottom {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_services_exist() {
        for index in FOOTER_SERVICES {
            assert!(SERVICES.get(index).is_some());
        }
    }

    #[test]
    fn year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
