use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"We couldn't find that page."}</p>
            <Link<Route> to={Route::Home} classes="btn btn--primary">
                {"Back to the home page"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    font-family: Inter, ui-sans-serif, system-ui, sans-serif;
                }

                .not-found h1 {
                    font-size: 4rem;
                    font-weight: 700;
                    color: #FFD700;
                }

                .not-found .btn {
                    display: inline-block;
                    padding: 0.75rem 2rem;
                    border-radius: 0.375rem;
                    background: #FFD700;
                    color: #111827;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
