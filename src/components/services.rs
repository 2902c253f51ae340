use yew::prelude::*;

use crate::animation::sequencer::{card, fade_in_up};
use crate::animation::{use_reveal, AnimationSequencer, ObserverOptions};
use crate::content::{Section, SERVICES};

#[function_component(Services)]
pub fn services() -> Html {
    let hovered = use_state(|| None::<usize>);
    let section = use_reveal(ObserverOptions::with_threshold(0.1));
    let grid = use_reveal(ObserverOptions::with_threshold(0.15));

    let header = AnimationSequencer::new(fade_in_up());
    let cards = AnimationSequencer::new(card()).delay_children(0);

    html! {
        <section ref={section.node.clone()} id={Section::Services.id()} class="services-section">
            <div class={classes!("services-pattern", section.state.is_visible().then_some("shown"))}></div>

            <div class="services-inner">
                <div class="services-header">
                    <h2 key={section.key("title")} class="section-title" style={header.style(0, section.state)}>
                        {"Our "}<span class="accent">{"Services"}</span>
                    </h2>
                    <p key={section.key("lead")} class="section-lead" style={header.style(1, section.state)}>
                        {"Transforming ideas into digital reality with our comprehensive suite of services"}
                    </p>
                </div>

                <div ref={grid.node.clone()} class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| {
                        let on_enter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
                        };
                        let on_leave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        let icon_class = if *hovered == Some(i) { "service-icon active" } else { "service-icon" };
                        html! {
                            <div
                                key={grid.key(service.title)}
                                class="service-card-wrapper"
                                style={cards.style(i, grid.state)}
                                onmouseenter={on_enter}
                                onmouseleave={on_leave}
                            >
                                <div class="service-card">
                                    <div class="service-card-bg" style={format!("background: {};", service.gradient)}></div>
                                    <div class="service-icon-box">
                                        <svg class={icon_class} fill="none" stroke="currentColor" viewBox="0 0 24 24" stroke-width="1.5">
                                            <path stroke-linecap="round" stroke-linejoin="round" d={service.icon} />
                                        </svg>
                                    </div>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <button class="service-more">
                                        <span>{"Learn More"}</span>
                                        <svg class="service-more-arrow" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 8l4 4m0 0l-4 4m4-4H3" />
                                        </svg>
                                    </button>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
