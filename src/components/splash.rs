use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashPhase {
    Showing,
    Fading,
    Hidden,
}

impl SplashPhase {
    /// How long this phase lasts before [`SplashPhase::next`].
    pub fn duration_ms(self) -> Option<u32> {
        match self {
            SplashPhase::Showing => Some(config::SPLASH_DURATION_MS),
            SplashPhase::Fading => Some(config::SPLASH_FADE_MS),
            SplashPhase::Hidden => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            SplashPhase::Showing => SplashPhase::Fading,
            SplashPhase::Fading | SplashPhase::Hidden => SplashPhase::Hidden,
        }
    }

    pub fn content_loaded(self) -> bool {
        self != SplashPhase::Showing
    }
}

#[derive(Properties, PartialEq)]
pub struct SplashProps {
    #[prop_or_default]
    pub children: Children,
}

/// Loader shown over the page until the content has had time to settle.
#[function_component(Splash)]
pub fn splash(props: &SplashProps) -> Html {
    let phase = use_state(|| SplashPhase::Showing);

    {
        let phase_handle = phase.clone();
        use_effect_with_deps(
            move |current: &SplashPhase| {
                let current = *current;
                let timeout = current.duration_ms().map(|ms| {
                    Timeout::new(ms, move || phase_handle.set(current.next()))
                });
                move || drop(timeout)
            },
            *phase,
        );
    }

    let loader = match *phase {
        SplashPhase::Hidden => html! {},
        current => html! {
            <div class={classes!("splash", (current == SplashPhase::Fading).then(|| "splash--fading"))}>
                <div class="spinner">
                    <div class="spinner__ring spinner__ring--outer"></div>
                    <div class="spinner__ring spinner__ring--middle"></div>
                    <div class="spinner__ring spinner__ring--inner"></div>
                </div>
                <h2>{config::BUSINESS_NAME}</h2>
                <p>{config::TAGLINE}</p>
            </div>
        },
    };

    html! {
        <>
            {loader}
            <div class={classes!("page-content", phase.content_loaded().then(|| "loaded"))}>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .splash {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: #fff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    opacity: 1;
                    transition: opacity 1000ms ease;
                }

                .splash--fading {
                    opacity: 0;
                    pointer-events: none;
                }

                .splash h2 {
                    margin-top: 1.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .splash p {
                    margin-top: 0.5rem;
                    color: #6b7280;
                }

                .spinner {
                    position: relative;
                    width: 6rem;
                    height: 6rem;
                }

                .spinner__ring {
                    position: absolute;
                    border-radius: 9999px;
                    animation: spin 10s linear infinite;
                }

                .spinner__ring--outer {
                    inset: 0;
                    border-top: 4px solid #FFD700;
                }

                .spinner__ring--middle {
                    inset: 0.5rem;
                    border-right: 4px solid #FFEE58;
                    animation-direction: reverse;
                }

                .spinner__ring--inner {
                    inset: 1rem;
                    border-bottom: 4px solid #FFF176;
                }

                @keyframes spin {
                    to { transform: rotate(360deg); }
                }

                .page-content {
                    opacity: 0;
                    transition: opacity 1000ms ease;
                }

                .page-content.loaded {
                    opacity: 1;
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_then_stop() {
        let mut phase = SplashPhase::Showing;
        let mut waited = 0;
        while let Some(ms) = phase.duration_ms() {
            waited += ms;
            phase = phase.next();
        }
        assert_eq!(phase, SplashPhase::Hidden);
        assert_eq!(waited, config::SPLASH_DURATION_MS + config::SPLASH_FADE_MS);
        assert_eq!(phase.next(), SplashPhase::Hidden);
    }

    #[test]
    fn content_shows_once_fading_starts() {
        assert!(!SplashPhase::Showing.content_loaded());
        assert!(SplashPhase::Fading.content_loaded());
        assert!(SplashPhase::Hidden.content_loaded());
    }
}
