use gloo_timers::callback::Timeout;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::section_title::{reveal_class, SectionTitle};
use crate::config;
use crate::content::{CONTACT_DETAILS, MAP_EMBED_URL, SERVICE_OPTIONS};
use crate::visibility::{use_reveal, TrackerConfig};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InquiryError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please include a short message about your project.")]
    MissingMessage,
}

impl ContactInquiry {
    pub fn validate(&self) -> Result<(), InquiryError> {
        if self.name.trim().is_empty() {
            return Err(InquiryError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(InquiryError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(InquiryError::MissingMessage);
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), TrackerConfig::default());
    let inquiry = use_state(ContactInquiry::default);
    let error = use_state(|| None::<InquiryError>);
    let submitted = use_state(|| false);
    // Dropping the handle cancels the pending hide.
    let confirmation_timer = use_mut_ref(|| None::<Timeout>);

    let setter = |apply: fn(&mut ContactInquiry, String)| {
        let inquiry = inquiry.clone();
        Callback::from(move |value: String| {
            let mut next = (*inquiry).clone();
            apply(&mut next, value);
            inquiry.set(next);
        })
    };

    let on_name = setter(|form, value| form.name = value)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_email = setter(|form, value| form.email = value)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_phone = setter(|form, value| form.phone = value)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_service = setter(|form, value| form.service = value)
        .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());
    let on_message = setter(|form, value| form.message = value)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value());

    let on_submit = {
        let inquiry = inquiry.clone();
        let error = error.clone();
        let submitted = submitted.clone();
        let confirmation_timer = confirmation_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(e) = inquiry.validate() {
                error.set(Some(e));
                return;
            }

            // No backend: the inquiry only goes to the console.
            match serde_json::to_string(&*inquiry) {
                Ok(json) => info!("Contact inquiry received: {}", json),
                Err(e) => warn!("Failed to serialize contact inquiry: {}", e),
            }

            error.set(None);
            inquiry.set(ContactInquiry::default());
            submitted.set(true);

            let submitted = submitted.clone();
            *confirmation_timer.borrow_mut() = Some(Timeout::new(
                config::CONTACT_CONFIRMATION_MS,
                move || submitted.set(false),
            ));
        })
    };

    html! {
        <section id="contact" ref={node} class="contact">
            <div class="container">
                <SectionTitle
                    title="Contact Us"
                    subtitle="Get In Touch"
                    description="Let's discuss your project and bring your vision to life"
                    visible={visible}
                />

                <div class="contact__body">
                    <div class={classes!("contact__form-wrapper", reveal_class(visible, "from-left"))}>
                        <div class="card">
                            <h3>{"Send Us a Message"}</h3>

                            {
                                if *submitted {
                                    html! {
                                        <div class="alert alert--success">
                                            {"Thank you for your message! We'll get back to you shortly."}
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                if let Some(e) = &*error {
                                    html! { <div class="alert alert--error">{e.to_string()}</div> }
                                } else {
                                    html! {}
                                }
                            }

                            <form onsubmit={on_submit}>
                                <div class="form-row">
                                    <div class="form-field">
                                        <label for="name">{"Your Name"}</label>
                                        <input type="text" id="name" required=true value={inquiry.name.clone()} oninput={on_name} />
                                    </div>
                                    <div class="form-field">
                                        <label for="email">{"Email Address"}</label>
                                        <input type="email" id="email" required=true value={inquiry.email.clone()} oninput={on_email} />
                                    </div>
                                </div>
                                <div class="form-field">
                                    <label for="phone">{"Phone Number"}</label>
                                    <input type="tel" id="phone" value={inquiry.phone.clone()} oninput={on_phone} />
                                </div>
                                <div class="form-field">
                                    <label for="service">{"Service Interested In"}</label>
                                    <select id="service" onchange={on_service}>
                                        <option value="" selected={inquiry.service.is_empty()}>{"Select a service"}</option>
                                        {
                                            SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                                                <option
                                                    key={*value}
                                                    value={*value}
                                                    selected={inquiry.service == *value}
                                                >
                                                    {*label}
                                                </option>
                                            }).collect::<Html>()
                                        }
                                    </select>
                                </div>
                                <div class="form-field">
                                    <label for="message">{"Your Message"}</label>
                                    <textarea id="message" rows="5" required=true value={inquiry.message.clone()} oninput={on_message}></textarea>
                                </div>
                                <button type="submit" class="btn btn--primary btn--block">{"Send Message"}</button>
                            </form>
                        </div>
                    </div>

                    <div class={classes!("contact__info", reveal_class(visible, "from-right"))}>
                        <h3>{"Contact Information"}</h3>
                        <div class="contact__details">
                            {
                                CONTACT_DETAILS.iter().enumerate().map(|(index, detail)| html! {
                                    <div
                                        key={index}
                                        class={classes!("contact-detail", reveal_class(visible, "from-below"))}
                                        style={config::stagger_delay(index)}
                                    >
                                        <div class="contact-detail__icon">{detail.icon}</div>
                                        <div>
                                            <h4>{detail.title}</h4>
                                            {
                                                detail.lines.iter().map(|line| html! {
                                                    <div class="contact-detail__line">{*line}</div>
                                                }).collect::<Html>()
                                            }
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>

                        <div class="contact__map">
                            <iframe
                                src={MAP_EMBED_URL}
                                width="100%"
                                height="100%"
                                style="border: 0;"
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                                title="Home Transformations Location"
                            ></iframe>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact {
                    padding: 5rem 0;
                }

                .contact__body {
                    display: flex;
                    gap: 3rem;
                    margin-top: 3rem;
                }

                .contact__form-wrapper,
                .contact__info {
                    flex: 1;
                }

                .card {
                    background: #fff;
                    padding: 2rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .contact h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .alert {
                    padding: 0.75rem 1rem;
                    border-radius: 0.25rem;
                    margin-bottom: 1rem;
                }

                .alert--success {
                    background: #dcfce7;
                    border: 1px solid #4ade80;
                    color: #15803d;
                }

                .alert--error {
                    background: #fee2e2;
                    border: 1px solid #f87171;
                    color: #b91c1c;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .form-field {
                    margin-bottom: 1rem;
                }

                .form-field label {
                    display: block;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }

                .form-field input,
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                    font: inherit;
                }

                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #FFD700;
                }

                .contact__details {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }

                .contact-detail {
                    display: flex;
                    align-items: flex-start;
                    transition-duration: 500ms;
                }

                .contact-detail__icon {
                    color: #FFD700;
                    font-size: 1.5rem;
                    margin-right: 1rem;
                    margin-top: 0.25rem;
                }

                .contact-detail h4 {
                    font-weight: 600;
                    font-size: 1.125rem;
                    margin-bottom: 0.25rem;
                }

                .contact-detail__line {
                    color: #4b5563;
                }

                .contact__map {
                    height: 16rem;
                    background: #e5e7eb;
                    border-radius: 0.5rem;
                    overflow: hidden;
                }

                @media (max-width: 1024px) {
                    .contact__body {
                        flex-direction: column;
                    }
                }

                @media (max-width: 768px) {
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactInquiry {
        ContactInquiry {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            service: "painting".to_string(),
            message: "Two bedrooms need repainting.".to_string(),
        }
    }

    #[test]
    fn complete_inquiry_is_accepted() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn phone_and_service_are_optional() {
        let inquiry = ContactInquiry {
            service: String::new(),
            ..filled()
        };
        assert!(inquiry.validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let inquiry = ContactInquiry {
            name: "   ".to_string(),
            ..filled()
        };
        assert_eq!(inquiry.validate(), Err(InquiryError::MissingName));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["", "jane", "jane@", "@example.com", "jane@example", "jane@.com", "a@b@c.com"] {
            let inquiry = ContactInquiry {
                email: email.to_string(),
                ..filled()
            };
            assert_eq!(inquiry.validate(), Err(InquiryError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn blank_message_is_rejected() {
        let inquiry = ContactInquiry {
            message: "\n".to_string(),
            ..filled()
        };
        assert_eq!(inquiry.validate(), Err(InquiryError::MissingMessage));
    }

    #[test]
    fn inquiry_serializes_for_logging() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["service"], "painting");
    }
}
