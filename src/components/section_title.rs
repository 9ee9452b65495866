use yew::prelude::*;

/// Reveal classes for an element gated on a section's visibility flag.
/// `from` picks the hidden pose: `from-below`, `from-left`, `from-right`
/// or `from-small`.
pub fn reveal_class(visible: bool, from: &'static str) -> Classes {
    classes!("reveal", from, visible.then(|| "is-visible"))
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub description: AttrValue,
    pub visible: bool,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    let SectionTitleProps { title, subtitle, description, visible } = props;

    html! {
        <div class="section-title">
            <p class={classes!("section-title__subtitle", reveal_class(*visible, "from-below"))}>
                {subtitle}
            </p>
            <h2 class={reveal_class(*visible, "from-below")} style="transition-delay: 150ms;">
                {title}
            </h2>
            <p class={classes!("section-title__description", reveal_class(*visible, "from-below"))} style="transition-delay: 300ms;">
                {description}
            </p>
            <style>
                {r#"
                .section-title {
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }
                .section-title__subtitle {
                    color: #FFD700;
                    text-transform: uppercase;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .section-title h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .section-title__description {
                    color: #4b5563;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_pose_until_visible() {
        let hidden = reveal_class(false, "from-left");
        assert!(hidden.contains("reveal"));
        assert!(hidden.contains("from-left"));
        assert!(!hidden.contains("is-visible"));

        assert!(reveal_class(true, "from-left").contains("is-visible"));
    }
}
