use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{INSTAGRAM_URL, TIKTOK_PROFILE_URL};
use crate::Route;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <div class="site-footer-col site-footer-brand">
                    <span class="site-footer-logo">{"Western Vintage"}</span>
                    <span class="brand-dot"></span>
                </div>
                <div class="site-footer-col">
                    <h4 class="site-footer-heading">{"Socials"}</h4>
                    <ul class="site-footer-links">
                        <li><a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a></li>
                        <li><a href={TIKTOK_PROFILE_URL} target="_blank" rel="noopener noreferrer">{"TikTok"}</a></li>
                    </ul>
                </div>
                <div class="site-footer-col">
                    <h4 class="site-footer-heading">{"Discover"}</h4>
                    <ul class="site-footer-links">
                        <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Events}>{"Events"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(245, 240, 230, 0.12);
                        padding: 4rem 2.5rem 3rem;
                        color: #f5f0e6;
                        background: #0d0b09;
                    }
                    .site-footer-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 2rem;
                    }
                    .site-footer-logo {
                        font-size: 1.5rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .brand-dot {
                        display: inline-block;
                        width: 8px;
                        height: 8px;
                        margin-left: 0.4rem;
                        border-radius: 50%;
                        background: #c9a86a;
                    }
                    .site-footer-heading {
                        font-size: 0.8rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #c9a86a;
                        margin-bottom: 1rem;
                    }
                    .site-footer-links {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .site-footer-links li {
                        margin-bottom: 0.5rem;
                    }
                    .site-footer-links a {
                        color: rgba(245, 240, 230, 0.8);
                        text-decoration: none;
                    }
                    .site-footer-links a:hover {
                        color: #f5f0e6;
                    }
                    @media (max-width: 768px) {
                        .site-footer-inner {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
