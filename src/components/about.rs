use yew::prelude::*;

use crate::animation::sequencer::{card, fade_in_up, scale_in};
use crate::animation::{use_reveal, AnimationSequencer, ObserverOptions};
use crate::content::{Section, HIGHLIGHTS, TIMELINE, VALUES};
use crate::utils::events::use_window_scroll;
use crate::utils::scroll::{parallax_offset, scroll_progress_of};

const MAX_BACKGROUND_SHIFT: f64 = 50.0;

#[function_component(About)]
pub fn about() -> Html {
    let container = use_node_ref();
    let background_shift = use_state(|| 0.0_f64);

    // Background drifts down as the section scrolls through the viewport
    {
        let container = container.clone();
        let background_shift = background_shift.clone();
        use_window_scroll(Callback::from(move |_| {
            if let Some(element) = container.cast::<web_sys::Element>() {
                let shift = parallax_offset(scroll_progress_of(&element), MAX_BACKGROUND_SHIFT);
                background_shift.set(shift);
            }
        }));
    }

    let content = use_reveal(ObserverOptions::default());
    let timeline = use_reveal(ObserverOptions::with_threshold(0.15));
    let values = use_reveal(ObserverOptions::with_threshold(0.1));

    let fade = AnimationSequencer::new(fade_in_up());
    let video = AnimationSequencer::new(scale_in());
    let value_cards = AnimationSequencer::new(card()).delay_children(0);

    html! {
        <section ref={container} id={Section::About.id()} class="about-section">
            <div
                class="about-pattern"
                style={format!("transform: translateY({:.2}%);", *background_shift)}
            ></div>

            <div class="about-inner">
                <div ref={content.node.clone()} class="about-grid">
                    <div class="about-intro" style={fade.style(0, content.state)}>
                        <h2 class="section-title">
                            {"About "}<span class="accent">{"Me"}</span>
                        </h2>

                        <div class="about-video" style={video.style(1, content.state)}>
                            <div class="about-video-shade"></div>
                            <video poster="/video-thumbnail.jpg" autoplay=true muted=true loop=true playsinline=true>
                                <source src="/111.mp4" type="video/mp4" />
                                <p>{"Your browser doesn't support HTML5 video."}</p>
                            </video>
                            <div class="about-video-caption">
                                <h3>{"My Story"}</h3>
                                <p>{"Watch how I turned my passion into profession"}</p>
                            </div>
                        </div>

                        <div class="about-highlights">
                            { for HIGHLIGHTS.iter().enumerate().map(|(i, highlight)| html! {
                                <div
                                    key={content.key(highlight.text)}
                                    class="about-highlight"
                                    style={fade.style(i + 2, content.state)}
                                >
                                    <span class="about-highlight-icon">{highlight.icon}</span>
                                    <span>{highlight.text}</span>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div ref={timeline.node.clone()} class="about-timeline">
                        <h3>{"My Journey"}</h3>
                        <div class="timeline-track">
                            { for TIMELINE.iter().enumerate().map(|(i, entry)| html! {
                                <div
                                    key={timeline.key(entry.year)}
                                    class="timeline-entry"
                                    style={fade.style(i, timeline.state)}
                                >
                                    <div class="timeline-dot">
                                        <span>{entry.icon}</span>
                                    </div>
                                    <div class="timeline-card">
                                        <span class="timeline-year">{entry.year}</span>
                                        <h4>{entry.title}</h4>
                                        <p>{entry.description}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>

                <div ref={values.node.clone()} class="about-values">
                    <h3 class="section-subtitle" style={fade.style(0, values.state)}>
                        {"Core "}<span class="accent">{"Values"}</span>
                    </h3>
                    <div class="values-grid">
                        { for VALUES.iter().enumerate().map(|(i, value)| html! {
                            <div
                                key={values.key(value.title)}
                                class="value-card-wrapper"
                                style={value_cards.style(i, values.state)}
                            >
                                <div class="value-card">
                                    <div class="value-card-bg" style={format!("background: {};", value.background)}></div>
                                    <div class="value-card-body">
                                        <div class="value-icon"><span>{value.icon}</span></div>
                                        <h4>{value.title}</h4>
                                        <p>{value.description}</p>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
