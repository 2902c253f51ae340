pub mod reveal;
pub mod sequencer;
pub mod spring;
pub mod visibility;

pub use reveal::{use_reveal, Reveal, RevealController, RevealState};
pub use sequencer::{AnimationSequencer, Pose, Transition, Variants};
pub use visibility::{use_in_view, InViewTracker, ObserverOptions};
