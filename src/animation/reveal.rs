use yew::prelude::*;

use super::visibility::{use_in_view, ObserverOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RevealState::Hidden => "hidden",
            RevealState::Visible => "visible",
        }
    }
}

/// Maps an in-view signal onto a reveal state.
///
/// `generation` counts state flips so callers can re-key animated children
/// and have them start over from the hidden pose on every replay.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealController {
    trigger_once: bool,
    state: RevealState,
    generation: u32,
}

impl RevealController {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            trigger_once,
            state: RevealState::Hidden,
            generation: 0,
        }
    }

    /// Apply the latest signal. Returns true if the state changed.
    pub fn observe(&mut self, in_view: bool) -> bool {
        let next = match (self.trigger_once, self.state, in_view) {
            (true, RevealState::Visible, _) => RevealState::Visible,
            (_, _, true) => RevealState::Visible,
            (_, _, false) => RevealState::Hidden,
        };
        if next == self.state {
            return false;
        }
        self.state = next;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Everything a section needs to drive one reveal chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub node: NodeRef,
    pub state: RevealState,
    pub generation: u32,
}

impl Reveal {
    /// Key for an animated child that must replay when the state flips.
    pub fn key(&self, base: impl std::fmt::Display) -> String {
        format!("{}-{}", base, self.generation)
    }
}

#[hook]
pub fn use_reveal(options: ObserverOptions) -> Reveal {
    let node = use_node_ref();
    let controller = use_mut_ref(|| RevealController::new(options.trigger_once));
    let in_view = use_in_view(node.clone(), options);

    let (state, generation) = {
        let mut controller = controller.borrow_mut();
        if controller.observe(in_view) {
            log::debug!("reveal -> {}", controller.state().as_str());
        }
        (controller.state(), controller.generation())
    };

    Reveal {
        node,
        state,
        generation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let controller = RevealController::new(false);
        assert_eq!(controller.state(), RevealState::Hidden);
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_mirrors_signal_without_trigger_once() {
        let mut controller = RevealController::new(false);
        for signal in [true, false, false, true, true, false] {
            controller.observe(signal);
            assert_eq!(controller.state().is_visible(), signal);
        }
    }

    #[test]
    fn test_trigger_once_is_monotonic() {
        let mut controller = RevealController::new(true);
        assert!(!controller.observe(false));
        assert!(controller.observe(true));
        for signal in [false, true, false, false] {
            assert!(!controller.observe(signal));
            assert_eq!(controller.state(), RevealState::Visible);
        }
        assert_eq!(controller.generation(), 1);
    }

    #[test]
    fn test_generation_counts_flips_only() {
        let mut controller = RevealController::new(false);
        controller.observe(false);
        assert_eq!(controller.generation(), 0);
        controller.observe(true);
        controller.observe(true);
        assert_eq!(controller.generation(), 1);
        controller.observe(false);
        controller.observe(true);
        assert_eq!(controller.generation(), 3);
    }

    #[test]
    fn test_reveal_key_changes_with_generation() {
        let mut reveal = Reveal {
            node: NodeRef::default(),
            state: RevealState::Hidden,
            generation: 0,
        };
        let first = reveal.key("Web Development");
        reveal.generation = 2;
        assert_ne!(first, reveal.key("Web Development"));
        assert_eq!(reveal.key(4), "4-2");
    }
}
