use yew::prelude::*;

use crate::components::section_title::{reveal_class, SectionTitle};
use crate::config;
use crate::content::{Category, Project, PROJECTS};
use crate::visibility::{use_reveal, TrackerConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Only(Category),
}

pub const FILTERS: [Filter; 5] = [
    Filter::All,
    Filter::Only(Category::Kitchen),
    Filter::Only(Category::Bathroom),
    Filter::Only(Category::LivingRoom),
    Filter::Only(Category::Exterior),
];

impl Filter {
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All Projects",
            Filter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => project.category == *category,
        }
    }
}

/// Projects shown for `filter`, in catalogue order.
pub fn visible_projects(filter: Filter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|project| filter.matches(project)).collect()
}

#[derive(Properties, PartialEq)]
struct PortfolioItemProps {
    id: u32,
    position: usize,
    visible: bool,
}

#[function_component(PortfolioItem)]
fn portfolio_item(props: &PortfolioItemProps) -> Html {
    let hovered = use_state(|| false);

    let Some(project) = PROJECTS.iter().find(|project| project.id == props.id) else {
        return html! {};
    };

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div
            class={classes!("project-card", reveal_class(props.visible, "from-below"))}
            style={config::stagger_delay(props.position)}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <div class="project-card__media">
                <div class={classes!("project-card__layer", (*hovered).then(|| "faded"))}>
                    <img src={project.before_image} alt={format!("{} - Before", project.title)} />
                    <span class="project-card__badge">{"Before"}</span>
                </div>
                <div class={classes!("project-card__layer", (!*hovered).then(|| "faded"))}>
                    <img src={project.after_image} alt={format!("{} - After", project.title)} />
                    <span class="project-card__badge">{"After"}</span>
                </div>
            </div>
            <div class="project-card__body">
                <p class="project-card__category">{project.category.label()}</p>
                <h3>{project.title}</h3>
            </div>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), TrackerConfig::default());
    let active_filter = use_state(|| Filter::All);

    let projects = visible_projects(*active_filter);

    html! {
        <section id="portfolio" ref={node} class="portfolio">
            <div class="floating-blob floating-blob--top"></div>
            <div class="floating-blob floating-blob--bottom"></div>

            <div class="container">
                <SectionTitle
                    title="Our Portfolio"
                    subtitle="Recent Projects"
                    description="Explore our collection of stunning home transformations"
                    visible={visible}
                />

                <div class="portfolio__filters">
                    {
                        FILTERS.iter().map(|filter| {
                            let filter = *filter;
                            let onclick = {
                                let active_filter = active_filter.clone();
                                Callback::from(move |_: MouseEvent| active_filter.set(filter))
                            };
                            html! {
                                <button
                                    key={filter.label()}
                                    class={classes!("filter-button", (*active_filter == filter).then(|| "active"))}
                                    onclick={onclick}
                                >
                                    {filter.label()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="portfolio__grid">
                    {
                        projects.iter().enumerate().map(|(position, project)| html! {
                            <PortfolioItem
                                key={project.id}
                                id={project.id}
                                position={position}
                                visible={visible}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .portfolio {
                    position: relative;
                    padding: 5rem 0;
                    overflow: hidden;
                }

                .portfolio__filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin: 2.5rem 0 3rem;
                }

                .filter-button {
                    padding: 0.5rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #f3f4f6;
                    color: #4b5563;
                    cursor: pointer;
                    transition: all 300ms ease;
                }

                .filter-button:hover {
                    background: #e5e7eb;
                }

                .filter-button.active {
                    background: #FFD700;
                    color: #fff;
                }

                .portfolio__grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .project-card {
                    overflow: hidden;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition-duration: 500ms;
                }

                .project-card.is-visible:hover {
                    transform: translateY(-0.5rem);
                }

                .project-card__media {
                    position: relative;
                    height: 16rem;
                    overflow: hidden;
                }

                .project-card__layer {
                    position: absolute;
                    inset: 0;
                    opacity: 1;
                    transition: opacity 500ms ease;
                }

                .project-card__layer.faded {
                    opacity: 0;
                }

                .project-card__layer img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 700ms ease;
                }

                .project-card__layer img:hover {
                    transform: scale(1.05);
                }

                .project-card__badge {
                    position: absolute;
                    top: 0.5rem;
                    left: 0.5rem;
                    background: #FFD700;
                    color: #111827;
                    font-size: 0.75rem;
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.25rem;
                }

                .project-card__body {
                    padding: 1rem;
                    background: #fff;
                }

                .project-card__category {
                    color: #F9A825;
                    font-size: 0.875rem;
                    margin-bottom: 0.25rem;
                }

                .project-card__body h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                }

                @media (max-width: 1024px) {
                    .portfolio__grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .portfolio__grid {
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

    fn titles(filter: Filter) -> Vec<&'static str> {
        visible_projects(filter).iter().map(|p| p.title).collect()
    }

    #[test]
    fn all_keeps_catalogue_order() {
        let ids: Vec<u32> = visible_projects(Filter::All).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn category_filter_selects_matching_projects() {
        assert_eq!(
            titles(Filter::Only(Category::Kitchen)),
            vec!["Modern Kitchen Remodel", "Contemporary Kitchen Design"]
        );
        assert_eq!(
            titles(Filter::Only(Category::Bathroom)),
            vec!["Bathroom Transformation", "Luxury Bathroom Upgrade"]
        );
        assert_eq!(titles(Filter::Only(Category::Exterior)), vec!["House Façade Update"]);
    }

    #[test]
    fn living_room_filter_is_not_empty() {
        assert_eq!(
            titles(Filter::Only(Category::LivingRoom)),
            vec!["Living Room Renovation"]
        );
    }

    #[test]
    fn every_project_is_reachable_from_some_category() {
        let total: usize = FILTERS
            .iter()
            .filter(|f| **f != Filter::All)
            .map(|f| visible_projects(*f).len())
            .sum();
        assert_eq!(total, PROJECTS.len());
    }

    #[test]
    fn filter_labels() {
        let labels: Vec<&str> = FILTERS.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["All Projects", "Kitchen", "Bathroom", "Living Room", "Exterior"]
        );
    }
}
