use yew::prelude::*;

use crate::components::section_title::{reveal_class, SectionTitle};
use crate::content::TESTIMONIALS;
use crate::visibility::{use_reveal, TrackerConfig};

/// How many testimonials the wide layout shows side by side.
const GRID_COUNT: usize = 3;

pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

pub fn prev_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    index: usize,
    visible: bool,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let Some(testimonial) = TESTIMONIALS.get(props.index) else {
        return html! {};
    };

    html! {
        <div class={classes!("testimonial", reveal_class(props.visible, "from-small"))}>
            <div class="testimonial__mark">{"❝"}</div>
            <p class="testimonial__quote">{testimonial.quote}</p>
            <div class="testimonial__author">
                <img src={testimonial.image} alt={testimonial.name} />
                <div>
                    <h4>{testimonial.name}</h4>
                    <p>{testimonial.role}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), TrackerConfig::default());
    let active_slide = use_state(|| 0usize);
    let len = TESTIMONIALS.len();

    let on_prev = {
        let active_slide = active_slide.clone();
        Callback::from(move |_: MouseEvent| active_slide.set(prev_slide(*active_slide, len)))
    };
    let on_next = {
        let active_slide = active_slide.clone();
        Callback::from(move |_: MouseEvent| active_slide.set(next_slide(*active_slide, len)))
    };

    html! {
        <section id="testimonials" ref={node} class="testimonials">
            <div class="container">
                <SectionTitle
                    title="Testimonials"
                    subtitle="What Our Clients Say"
                    description="Read what our satisfied clients have to say about their experience"
                    visible={visible}
                />

                <div class="testimonials__grid">
                    {
                        (0..GRID_COUNT.min(len)).map(|index| html! {
                            <TestimonialCard key={index} index={index} visible={visible} />
                        }).collect::<Html>()
                    }
                </div>

                <div class="testimonials__carousel">
                    <TestimonialCard index={*active_slide} visible={visible} />

                    <div class="carousel__dots">
                        {
                            (0..len).map(|index| {
                                let onclick = {
                                    let active_slide = active_slide.clone();
                                    Callback::from(move |_: MouseEvent| active_slide.set(index))
                                };
                                html! {
                                    <button
                                        key={index}
                                        class={classes!("carousel__dot", (*active_slide == index).then(|| "active"))}
                                        onclick={onclick}
                                        aria-label={format!("Go to testimonial {}", index + 1)}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="carousel__arrows">
                        <button class="carousel__arrow" onclick={on_prev} aria-label="Previous testimonial">
                            {"‹"}
                        </button>
                        <button class="carousel__arrow" onclick={on_next} aria-label="Next testimonial">
                            {"›"}
                        </button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .testimonials {
                    padding: 5rem 0;
                    background: #f9fafb;
                }

                .testimonials__grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .testimonials__carousel {
                    display: none;
                    margin-top: 3rem;
                }

                .testimonial {
                    background: #fff;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    padding: 1.5rem;
                    transition-duration: 500ms;
                }

                .testimonial__mark {
                    color: #FFD700;
                    font-size: 2.5rem;
                    margin-bottom: 1.5rem;
                }

                .testimonial__quote {
                    color: #4b5563;
                    font-style: italic;
                    margin-bottom: 1.5rem;
                }

                .testimonial__author {
                    display: flex;
                    align-items: center;
                }

                .testimonial__author img {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    object-fit: cover;
                    margin-right: 1rem;
                }

                .testimonial__author h4 {
                    font-weight: 700;
                }

                .testimonial__author p {
                    color: #6b7280;
                    font-size: 0.875rem;
                }

                .carousel__dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }

                .carousel__dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: #d1d5db;
                    cursor: pointer;
                }

                .carousel__dot.active {
                    background: #FFD700;
                }

                .carousel__arrows {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 1.5rem;
                }

                .carousel__arrow {
                    background: #fff;
                    border: none;
                    border-radius: 9999px;
                    width: 2.5rem;
                    height: 2.5rem;
                    font-size: 1.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .carousel__arrow:hover {
                    color: #FFD700;
                }

                @media (max-width: 768px) {
                    .testimonials__grid {
                        display: none;
                    }

                    .testimonials__carousel {
                        display: block;
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

    #[test]
    fn next_wraps_to_first() {
        assert_eq!(next_slide(0, 5), 1);
        assert_eq!(next_slide(4, 5), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        assert_eq!(prev_slide(3, 5), 2);
        assert_eq!(prev_slide(0, 5), 4);
    }

    #[test]
    fn full_cycle_returns_home() {
        let len = TESTIMONIALS.len();
        let mut slide = 0;
        for _ in 0..len {
            slide = next_slide(slide, len);
        }
        assert_eq!(slide, 0);
        for _ in 0..len {
            slide = prev_slide(slide, len);
        }
        assert_eq!(slide, 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        assert_eq!(next_slide(0, 0), 0);
        assert_eq!(prev_slide(0, 0), 0);
    }
}
