use yew::prelude::*;

use crate::components::about::About;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::projects::Projects;
use crate::components::services::Services;
use crate::content::{Section, BRAND};
use crate::utils::events::use_window_scroll;
use crate::utils::scroll::scroll_to_section;

/// Scroll distance after which the nav bar turns opaque.
const NAV_SOLID_AFTER: f64 = 50.0;

#[function_component(Nav)]
fn nav() -> Html {
    let solid = use_state(|| false);
    {
        let solid = solid.clone();
        use_window_scroll(Callback::from(move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(scroll_y) = window.scroll_y() {
                    solid.set(scroll_y > NAV_SOLID_AFTER);
                }
            }
        }));
    }

    html! {
        <nav class={classes!("site-nav", solid.then_some("solid"))}>
            <button class="nav-logo" onclick={Callback::from(|_: MouseEvent| scroll_to_section(Section::Hero.id()))}>
                {BRAND}
            </button>
            <div class="nav-links">
                { for Section::ALL.iter().skip(1).map(|section| {
                    let id = section.id();
                    html! {
                        <button key={id} onclick={Callback::from(move |_: MouseEvent| scroll_to_section(id))}>
                            {section.name()}
                        </button>
                    }
                }) }
            </div>
        </nav>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="portfolio">
            <Nav />
            <main>
                <Hero />
                <About />
                <Services />
                <Projects />
            </main>
            <Footer />
        </div>
    }
}
