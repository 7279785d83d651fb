use yew::prelude::*;

use crate::config::BRAND;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <span class="footer-logo">{BRAND}</span>
                <span class="footer-tagline">{"실패를 자산으로."}</span>
            </div>
            <p class="footer-copy">{format!("© 2025 {}. All rights reserved.", BRAND)}</p>
            <style>
                {r#"
                .site-footer {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    border-top: 1px solid var(--gray-100);
                    padding: 3rem 1.5rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .footer-logo {
                    font-size: 1.25rem;
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    color: var(--gray-900);
                }
                .footer-tagline {
                    font-size: 0.875rem;
                    color: var(--gray-400);
                }
                .footer-copy {
                    margin: 0;
                    font-size: 0.75rem;
                    color: var(--gray-400);
                }
                "#}
            </style>
        </footer>
    }
}
