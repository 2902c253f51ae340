use yew::prelude::*;

use crate::animation::sequencer::{fade_in_up, scale_in, slide_in_left, Transition};
use crate::animation::{AnimationSequencer, RevealState};
use crate::content::{Section, OWNER_NAME, ROLES, STATS};
use crate::utils::events::use_pointer_position;
use crate::utils::particles::scatter;
use crate::utils::scroll::{pointer_glow, scroll_to_section};
use crate::utils::typewriter::use_typewriter;

const PARTICLE_COUNT: usize = 20;
const PARTICLE_SEED: u64 = 0x5eed;

/// Flips to visible right after the first render. The visible style carries
/// the entrance animation, which plays whether or not the hidden pose was
/// ever painted.
#[hook]
fn use_mounted() -> RevealState {
    let state = use_state(|| RevealState::Hidden);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                state.set(RevealState::Visible);
                || ()
            },
            (),
        );
    }
    *state
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let (x, y) = use_pointer_position();
    let role = use_typewriter(&ROLES);
    let mounted = use_mounted();
    let particles = use_memo(|_| scatter(PARTICLE_COUNT, PARTICLE_SEED), ());

    let content = fade_in_up();
    let content = crate::animation::Variants {
        hidden: content.hidden.y(50.0),
        transition: Transition::tween(800),
        ..content
    };
    let name = slide_in_left(50.0);
    let name = crate::animation::Variants {
        transition: name.transition.delayed(300),
        ..name
    };
    let stats = AnimationSequencer::new(fade_in_up())
        .stagger(300)
        .delay_children(0);
    let profile = scale_in();

    let on_connect = Callback::from(|_: MouseEvent| scroll_to_section(Section::Contact.id()));

    html! {
        <section id={Section::Hero.id()} class="hero-section">
            <div class="hero-background">
                <div class="hero-gradient"></div>
                <div class="hero-glow" style={pointer_glow(x, y)}></div>
            </div>

            <div class="hero-particles">
                { for particles.iter().map(|p| html! {
                    <div class="hero-particle" style={p.style()}></div>
                }) }
            </div>

            <div class="hero-content">
                <div class="hero-text" style={content.style(mounted)}>
                    <div class="hero-header">
                        <div style={name.style(mounted)}>
                            <h1 class="hero-title">{OWNER_NAME}</h1>
                        </div>
                        <h2 class="hero-role">{role}<span class="hero-caret">{"|"}</span></h2>
                    </div>

                    <div class="hero-stats">
                        { for STATS.iter().enumerate().map(|(i, stat)| html! {
                            <div key={stat.label} class="hero-stat" style={stats.style(i, mounted)}>
                                <span class="hero-stat-icon">{stat.icon}</span>
                                <div class="hero-stat-number">{stat.number}</div>
                                <div class="hero-stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>

                    <button class="hero-cta" onclick={on_connect}>
                        <span>{"Let's Connect"}</span>
                        <div class="hero-cta-fill"></div>
                    </button>
                </div>

                <div class="hero-profile" style={profile.style(mounted)}>
                    <div class="hero-profile-image">
                        <img src="/Profile.jpeg" alt={OWNER_NAME} loading="lazy" />
                    </div>
                    <div class="hero-badge">
                        <span>{"🏆"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
