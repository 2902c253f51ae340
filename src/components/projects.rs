use web_sys::Element;
use yew::prelude::*;

use crate::animation::sequencer::{fade_in_up, project_card};
use crate::animation::{use_reveal, AnimationSequencer, ObserverOptions, Reveal};
use crate::content::{Project, Section, PROJECTS};
use crate::filter::{label, CategoryFilter, CATEGORIES};
use crate::utils::events::use_element_scroll;
use crate::utils::scroll::{scroll_by_pages, CarouselScroll};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    index: usize,
    reveal: Reveal,
    on_view: Callback<Project>,
}

#[function_component(ProjectCard)]
fn project_card_view(props: &ProjectCardProps) -> Html {
    let sequencer = AnimationSequencer::new(project_card());
    let project = props.project.clone();
    let on_view = {
        let on_view = props.on_view.clone();
        let project = project.clone();
        Callback::from(move |_: MouseEvent| on_view.emit(project.clone()))
    };

    html! {
        <div class="project-card" style={sequencer.style(props.index, props.reveal.state)}>
            <div class="project-image">
                <img src={project.image} alt={project.title} />
                <div class="project-image-shade"></div>
            </div>
            <div class="project-info">
                <div class="project-category">{label(project.category)}</div>
                <h3>{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-tags">
                    { for project.tags.iter().map(|tag| html! {
                        <span key={*tag} class="project-tag">{*tag}</span>
                    }) }
                </div>
                <button class="project-view" onclick={on_view}>{"View Project"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectDetailProps {
    project: Project,
    on_close: Callback<()>,
}

#[function_component(ProjectDetail)]
fn project_detail(props: &ProjectDetailProps) -> Html {
    let project = &props.project;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let testimonial = &project.testimonial;

    html! {
        <div class="project-detail-backdrop" onclick={close.clone()}>
            <div class="project-detail" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="project-detail-close" onclick={close} aria-label="Close">{"×"}</button>
                <video class="project-detail-video" src={project.video} poster={project.image} controls=true muted=true>
                    <p>{"Your browser doesn't support HTML5 video."}</p>
                </video>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                {
                    if let Some(stats) = &project.stats {
                        html! {
                            <div class="project-detail-stats">
                                <div><strong>{stats.users}</strong><span>{"Users"}</span></div>
                                <div><strong>{stats.transactions}</strong><span>{"Transactions"}</span></div>
                                <div><strong>{stats.revenue}</strong><span>{"Revenue"}</span></div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <blockquote class="project-testimonial">
                    <p>{testimonial.text}</p>
                    <footer>
                        <img src={testimonial.avatar} alt={testimonial.author} />
                        <div>
                            <cite>{testimonial.author}</cite>
                            <span>{testimonial.role}</span>
                        </div>
                    </footer>
                </blockquote>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let filter = use_state(CategoryFilter::default);
    let selected = use_state(|| None::<Project>);
    let can_scroll = use_state(|| (false, true));
    let carousel = use_node_ref();

    let reveal = use_reveal(ObserverOptions::with_threshold(0.1).root_margin("100px"));
    let header = AnimationSequencer::new(fade_in_up());
    let buttons = AnimationSequencer::new(project_card());

    let update_buttons = {
        let can_scroll = can_scroll.clone();
        Callback::from(move |element: Element| {
            let scroll = CarouselScroll::of(&element);
            can_scroll.set((scroll.can_scroll_left(), scroll.can_scroll_right()));
        })
    };
    use_element_scroll(carousel.clone(), update_buttons.clone());

    // Re-check the buttons whenever the filtered list changes
    {
        let carousel = carousel.clone();
        let update_buttons = update_buttons.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = carousel.cast::<Element>() {
                    update_buttons.emit(element);
                }
                || ()
            },
            filter.selection().clone(),
        );
    }

    let scroll_by = |pages: f64| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(element) = carousel.cast::<Element>() {
                scroll_by_pages(&element, pages);
            }
        })
    };

    let on_view = {
        let selected = selected.clone();
        Callback::from(move |project: Project| {
            log::info!("Opening project {}", project.id);
            selected.set(Some(project));
        })
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let visible = filter.visible(&PROJECTS);
    let (can_left, can_right) = *can_scroll;

    html! {
        <section ref={reveal.node.clone()} id={Section::Projects.id()} class="projects-section">
            <div class={classes!("projects-pattern", reveal.state.is_visible().then_some("shown"))}></div>

            <div class="projects-inner">
                <div class="projects-header">
                    <h2 class="section-title" style={header.style(0, reveal.state)}>
                        {"Our "}<span class="accent">{"Projects"}</span>
                    </h2>

                    <div class="projects-filters">
                        { for CATEGORIES.iter().enumerate().map(|(i, category)| {
                            let onclick = {
                                let filter = filter.clone();
                                let category = *category;
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*filter).clone();
                                    next.select(category);
                                    filter.set(next);
                                })
                            };
                            let class = classes!(
                                "filter-button",
                                filter.is_active(category).then_some("active")
                            );
                            html! {
                                <button
                                    key={reveal.key(category)}
                                    class={class}
                                    onclick={onclick}
                                    style={buttons.style(i + 1, reveal.state)}
                                >
                                    {label(category)}
                                </button>
                            }
                        }) }
                    </div>
                </div>

                <div class="projects-carousel">
                    <div ref={carousel.clone()} class="projects-track">
                        { for visible.iter().enumerate().map(|(i, project)| html! {
                            <ProjectCard
                                key={format!("{}-{}-{}", project.id, filter.selection().as_str(), reveal.generation)}
                                project={(*project).clone()}
                                index={i}
                                reveal={reveal.clone()}
                                on_view={on_view.clone()}
                            />
                        }) }
                    </div>

                    if can_left {
                        <button class="carousel-nav prev" onclick={scroll_by(-1.0)} aria-label="Previous projects">
                            <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                            </svg>
                        </button>
                    }
                    if can_right {
                        <button class="carousel-nav next" onclick={scroll_by(1.0)} aria-label="Next projects">
                            <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                            </svg>
                        </button>
                    }
                </div>
            </div>

            if let Some(project) = (*selected).clone() {
                <ProjectDetail project={project} on_close={on_close} />
            }
        </section>
    }
}
