//! Staggered entrance transitions.
//!
//! A [`Variants`] pair describes the hidden and visible pose of one kind of
//! element. [`AnimationSequencer`] turns (reveal state, child index) into an
//! inline style with a per-index start delay.
//!
//! Entrances run as the `reveal-enter` keyframe animation, which starts from
//! the hidden pose passed in `--enter-opacity` and `--enter-transform`. A
//! keyframe animation plays on a freshly mounted node, so re-keyed children
//! replay it. Exits are plain transitions back to the hidden pose.

use super::reveal::RevealState;
use super::spring::SpringConfig;

/// Keyframes declared in `styles.css`.
pub const ENTER_KEYFRAMES: &str = "reveal-enter";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate({}px, {}px)", self.x, self.y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotate));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
    Spring(SpringConfig),
}

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::CubicBezier(a, b, c, d) => format!("cubic-bezier({}, {}, {}, {})", a, b, c, d),
            Easing::Spring(spring) => spring.css_easing(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub fn tween(duration_ms: u32) -> Self {
        Self {
            delay_ms: 0,
            duration_ms,
            easing: Easing::EaseOut,
        }
    }

    /// A spring runs for as long as it takes to settle.
    pub fn spring(config: SpringConfig) -> Self {
        Self {
            delay_ms: 0,
            duration_ms: config.settle_ms(),
            easing: Easing::Spring(config),
        }
    }

    pub fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn css(&self) -> String {
        let easing = self.easing.css();
        format!(
            "opacity {d}ms {e}, transform {d}ms {e}",
            d = self.duration_ms,
            e = easing
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variants {
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
}

impl Variants {
    pub fn pose(&self, state: RevealState) -> Pose {
        match state {
            RevealState::Hidden => self.hidden,
            RevealState::Visible => self.visible,
        }
    }

    /// Style for a single element that is not part of a staggered list.
    /// Only the transition's own delay applies.
    pub fn style(&self, state: RevealState) -> String {
        AnimationSequencer::new(*self).delay_children(0).style(0, state)
    }
}

/// Opacity 0, 20px down.
pub fn fade_in_up() -> Variants {
    Variants {
        hidden: Pose::REST.opacity(0.0).y(20.0),
        visible: Pose::REST,
        transition: Transition::tween(600),
    }
}

/// Opacity 0, scaled to 80%.
pub fn scale_in() -> Variants {
    Variants {
        hidden: Pose::REST.opacity(0.0).scale(0.8),
        visible: Pose::REST,
        transition: Transition::tween(500),
    }
}

/// Slides in from the left.
pub fn slide_in_left(distance: f64) -> Variants {
    Variants {
        hidden: Pose::REST.opacity(0.0).x(-distance),
        visible: Pose::REST,
        transition: Transition::tween(800),
    }
}

/// Cards in the services and values grids.
pub fn card() -> Variants {
    Variants {
        hidden: Pose::REST.opacity(0.0).y(50.0).scale(0.9),
        visible: Pose::REST,
        transition: Transition::spring(SpringConfig::with_stiffness(100.0)),
    }
}

/// Project cards and filter buttons.
pub fn project_card() -> Variants {
    Variants {
        hidden: Pose::REST.opacity(0.0).y(20.0).scale(0.95),
        visible: Pose::REST,
        transition: Transition::spring(SpringConfig::new(50.0, 15.0, 1.0)),
    }
}

/// Plays `variants` across an ordered list of children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSequencer {
    pub variants: Variants,
    pub stagger_ms: u32,
    pub delay_children_ms: u32,
    reduced_motion: bool,
}

impl AnimationSequencer {
    pub fn new(variants: Variants) -> Self {
        let config = crate::config::site();
        Self {
            variants,
            stagger_ms: config.stagger_ms,
            delay_children_ms: config.delay_children_ms,
            reduced_motion: config.reduced_motion,
        }
    }

    pub fn stagger(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub fn delay_children(mut self, delay_ms: u32) -> Self {
        self.delay_children_ms = delay_ms;
        self
    }

    pub fn reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    /// Start delay for child `index`. Children snap back together when
    /// hidden so a replay starts from a uniform pose.
    pub fn delay_ms(&self, index: usize, state: RevealState) -> u32 {
        if self.reduced_motion || !state.is_visible() {
            return 0;
        }
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_children_ms
            .saturating_add(self.variants.transition.delay_ms)
            .saturating_add(index.saturating_mul(self.stagger_ms))
    }

    pub fn pose(&self, state: RevealState) -> Pose {
        self.variants.pose(state)
    }

    pub fn transition(&self, index: usize, state: RevealState) -> Transition {
        let mut transition = self.variants.transition.delayed(self.delay_ms(index, state));
        if self.reduced_motion {
            transition.duration_ms = 0;
        }
        transition
    }

    /// Inline CSS for child `index`.
    pub fn style(&self, index: usize, state: RevealState) -> String {
        let pose = self.pose(state);
        let transition = self.transition(index, state);
        let mut style = format!("opacity: {}; transform: {};", pose.opacity, pose.transform());
        match state {
            RevealState::Hidden => {
                style.push_str(&format!(" transition: {};", transition.css()));
            }
            RevealState::Visible if !self.reduced_motion => {
                let from = self.variants.hidden;
                style.push_str(&format!(
                    " --enter-opacity: {}; --enter-transform: {}; animation: {} {}ms {} {}ms backwards;",
                    from.opacity,
                    from.transform(),
                    ENTER_KEYFRAMES,
                    transition.duration_ms,
                    transition.easing.css(),
                    transition.delay_ms
                ));
            }
            RevealState::Visible => {}
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::reveal::{Reveal, RevealController};

    #[test]
    fn test_delays_strictly_increase_with_index() {
        let sequencer = AnimationSequencer::new(fade_in_up())
            .stagger(100)
            .delay_children(200)
            .reduced_motion(false);
        let delays: Vec<u32> = (0..6)
            .map(|i| sequencer.delay_ms(i, RevealState::Visible))
            .collect();
        assert_eq!(delays[0], 200);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(delays[5], 700);
    }

    #[test]
    fn test_hidden_children_reset_together() {
        let sequencer = AnimationSequencer::new(card()).reduced_motion(false);
        for i in 0..5 {
            assert_eq!(sequencer.delay_ms(i, RevealState::Hidden), 0);
            assert_eq!(sequencer.pose(RevealState::Hidden), card().hidden);
        }
    }

    #[test]
    fn test_hidden_pose_is_faded_offset_and_shrunk() {
        let hidden = project_card().hidden;
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.y, 20.0);
        assert_eq!(hidden.scale, 0.95);
        assert_eq!(project_card().visible, Pose::REST);
    }

    #[test]
    fn test_reduced_motion_collapses_timing() {
        let sequencer = AnimationSequencer::new(card()).reduced_motion(true);
        let transition = sequencer.transition(3, RevealState::Visible);
        assert_eq!(transition.delay_ms, 0);
        assert_eq!(transition.duration_ms, 0);
    }

    #[test]
    fn test_style_output() {
        let sequencer = AnimationSequencer::new(fade_in_up())
            .stagger(100)
            .delay_children(0)
            .reduced_motion(false);
        let hidden = sequencer.style(2, RevealState::Hidden);
        assert!(hidden.starts_with("opacity: 0; transform: translate(0px, 20px);"));
        assert!(hidden.contains("transition: opacity 600ms ease-out"));
        assert!(!hidden.contains("animation"));
        let visible = sequencer.style(2, RevealState::Visible);
        assert!(visible.starts_with("opacity: 1; transform: none;"));
        assert!(visible.contains("--enter-opacity: 0; --enter-transform: translate(0px, 20px);"));
        assert!(visible.contains("animation: reveal-enter 600ms ease-out 200ms backwards;"));
    }

    #[test]
    fn test_reduced_motion_renders_static_pose() {
        let sequencer = AnimationSequencer::new(card()).reduced_motion(true);
        assert_eq!(
            sequencer.style(4, RevealState::Visible),
            "opacity: 1; transform: none;"
        );
    }

    #[test]
    fn test_single_element_uses_only_its_own_delay() {
        let name = slide_in_left(50.0);
        let name = Variants {
            transition: name.transition.delayed(300),
            ..name
        };
        let sequencer = AnimationSequencer::new(name).delay_children(0).reduced_motion(false);
        assert_eq!(sequencer.delay_ms(0, RevealState::Visible), 300);
        if !crate::config::site().reduced_motion {
            assert!(name
                .style(RevealState::Visible)
                .contains("animation: reveal-enter 800ms ease-out 300ms backwards;"));
        }
    }

    #[test]
    fn test_every_new_key_enters_from_hidden_pose() {
        let variants = card();
        let sequencer = AnimationSequencer::new(variants).reduced_motion(false);
        let titles = ["Web Development", "Mobile Apps", "UI/UX Design"];
        let mut controller = RevealController::new(false);
        let mut first_styles: Vec<(String, String)> = Vec::new();

        for signal in [false, true, false, true] {
            controller.observe(signal);
            let reveal = Reveal {
                node: yew::NodeRef::default(),
                state: controller.state(),
                generation: controller.generation(),
            };
            for (i, title) in titles.iter().enumerate() {
                let key = reveal.key(title);
                if !first_styles.iter().any(|(seen, _)| *seen == key) {
                    first_styles.push((key, sequencer.style(i, reveal.state)));
                }
            }
        }
        assert_eq!(first_styles.len(), titles.len() * 4);

        let hidden = variants.hidden;
        let static_hidden = format!("opacity: {}; transform: {};", hidden.opacity, hidden.transform());
        let enter_from_hidden = format!(
            "--enter-opacity: {}; --enter-transform: {};",
            hidden.opacity,
            hidden.transform()
        );
        for (key, style) in &first_styles {
            let starts_hidden = style.starts_with(&static_hidden)
                || (style.contains(&enter_from_hidden)
                    && style.contains("animation: reveal-enter ")
                    && style.ends_with(" backwards;"));
            assert!(starts_hidden, "{} first rendered as {}", key, style);
        }

        // The replayed entrance keeps its stagger
        let replayed: Vec<&String> = first_styles
            .iter()
            .filter(|(key, _)| key.ends_with("-3"))
            .map(|(_, style)| style)
            .collect();
        for (i, style) in replayed.iter().enumerate() {
            let delay = sequencer.delay_ms(i, RevealState::Visible);
            assert!(style.ends_with(&format!(" {}ms backwards;", delay)));
        }
    }

    #[test]
    fn test_transform_composition() {
        let pose = Pose::REST.x(-50.0).scale(0.8);
        assert_eq!(pose.transform(), "translate(-50px, 0px) scale(0.8)");
    }
}
