use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{BRAND, NAV_SCROLL_THRESHOLD};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <span class="nav-logo">{BRAND}</span>
            <button class="nav-download">{"앱 다운로드"}</button>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 1.5rem;
                    background: transparent;
                    border-bottom: 1px solid transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.8);
                    border-bottom-color: var(--gray-100);
                    backdrop-filter: blur(24px);
                    -webkit-backdrop-filter: blur(24px);
                }
                .nav-logo {
                    font-size: 1.25rem;
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    color: var(--gray-900);
                }
                .nav-download {
                    border-radius: 0.75rem;
                    background: var(--gray-900);
                    padding: 0.625rem 1.25rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: white;
                    transition: all 0.2s ease;
                }
                .nav-download:hover {
                    background: var(--gray-800);
                }
                .nav-download:active {
                    transform: scale(0.97);
                }
                @media (min-width: 640px) {
                    .top-nav {
                        padding: 1rem 3rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
