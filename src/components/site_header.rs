use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config::{INSTAGRAM_URL, TIKTOK_PROFILE_URL};
use crate::Route;

#[function_component(SocialIcons)]
pub fn social_icons() -> Html {
    html! {
        <div class="social-icons">
            <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="social-icon" aria-label="Instagram">
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zm0-2.163c-3.259 0-3.667.014-4.947.072-4.358.2-6.78 2.618-6.98 6.98-.059 1.281-.073 1.689-.073 4.948 0 3.259.014 3.668.072 4.948.2 4.358 2.618 6.78 6.98 6.98 1.281.058 1.689.072 4.948.072 3.259 0 3.668-.014 4.948-.072 4.354-.2 6.782-2.618 6.979-6.98.059-1.28.073-1.689.073-4.948 0-3.259-.014-3.667-.072-4.947-.196-4.354-2.617-6.78-6.979-6.98-1.281-.059-1.69-.073-4.949-.073zm0 5.838c-3.403 0-6.162 2.759-6.162 6.162s2.759 6.163 6.162 6.163 6.162-2.759 6.162-6.163c0-3.403-2.759-6.162-6.162-6.162zm0 10.162c-2.209 0-4-1.79-4-4 0-2.209 1.791-4 4-4s4 1.791 4 4c0 2.21-1.791 4-4 4zm6.406-11.845c-.796 0-1.441.645-1.441 1.44s.645 1.44 1.441 1.44c.795 0 1.439-.645 1.439-1.44s-.644-1.44-1.439-1.44z" fill="currentColor"/>
                </svg>
            </a>
            <a href={TIKTOK_PROFILE_URL} target="_blank" rel="noopener noreferrer" class="social-icon" aria-label="TikTok">
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M19.59 6.69a4.83 4.83 0 0 1-3.77-4.25V2h-3.45v13.67a2.89 2.89 0 0 1-5.2 1.74 2.89 2.89 0 0 1 2.31-4.64 2.93 2.93 0 0 1 .88.13V9.4a6.84 6.84 0 0 0-1-.05A6.33 6.33 0 0 0 5 20.1a6.34 6.34 0 0 0 10.86-4.43v-7a8.16 8.16 0 0 0 4.77 1.52v-3.4a4.85 4.85 0 0 1-1-.1z" fill="currentColor"/>
                </svg>
            </a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    #[prop_or_default]
    pub class: Classes,
    /// Show the dropdown with Home and Events behind the hamburger.
    #[prop_or(true)]
    pub menu: bool,
    #[prop_or_default]
    pub header_ref: NodeRef,
    /// Brand block on the left.
    pub children: Children,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let menu_node = use_node_ref();

    {
        let menu_open = menu_open.clone();
        use_click_away(menu_node.clone(), move |_: Event| {
            if *menu_open {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header ref={props.header_ref.clone()} class={classes!("site-header", props.class.clone())}>
            <div class="brand-name">
                { for props.children.iter() }
            </div>
            <nav class="header-menu">
                <SocialIcons />
                <div class="hamburger-wrap" ref={menu_node}>
                    <button type="button" class="hamburger-menu" aria-label="Menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    {
                        if props.menu && *menu_open {
                            html! {
                                <div class="header-dropdown">
                                    <div onclick={close_menu.clone()}>
                                        <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                                    </div>
                                    <div onclick={close_menu.clone()}>
                                        <Link<Route> to={Route::Events}>{"Events"}</Link<Route>>
                                    </div>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </nav>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.5rem 2.5rem;
                        z-index: 10;
                        color: #f5f0e6;
                    }
                    .brand-name {
                        font-family: 'Courier New', monospace;
                        font-size: 1.1rem;
                        letter-spacing: 0.12em;
                        text-transform: uppercase;
                    }
                    .brand-name a {
                        color: inherit;
                        text-decoration: none;
                    }
                    .cursor {
                        animation: blink 1s step-end infinite;
                    }
                    @keyframes blink {
                        50% { opacity: 0; }
                    }
                    .header-menu {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .social-icons {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-icon {
                        color: inherit;
                        opacity: 0.85;
                        transition: opacity 0.2s ease;
                    }
                    .social-icon:hover {
                        opacity: 1;
                    }
                    .hamburger-wrap {
                        position: relative;
                    }
                    .hamburger-menu {
                        background: none;
                        border: none;
                        cursor: pointer;
                        display: flex;
                        flex-direction: column;
                        gap: 5px;
                        padding: 0.25rem;
                    }
                    .hamburger-menu span {
                        display: block;
                        width: 26px;
                        height: 2px;
                        background: #f5f0e6;
                    }
                    .header-dropdown {
                        position: absolute;
                        right: 0;
                        top: calc(100% + 0.75rem);
                        background: rgba(15, 12, 10, 0.95);
                        border: 1px solid rgba(245, 240, 230, 0.15);
                        border-radius: 6px;
                        min-width: 160px;
                        padding: 0.5rem 0;
                    }
                    .header-dropdown a {
                        display: block;
                        padding: 0.6rem 1.25rem;
                        color: #f5f0e6;
                        text-decoration: none;
                        letter-spacing: 0.08em;
                    }
                    .header-dropdown a:hover {
                        background: rgba(201, 168, 106, 0.15);
                    }
                    @media (max-width: 768px) {
                        .site-header {
                            padding: 1rem 1.25rem;
                        }
                        .social-icons {
                            display: none;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
