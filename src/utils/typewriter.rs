use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Types each phrase out, holds it, erases it, then moves on to the next,
/// looping forever.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    phrases: Vec<&'static str>,
    index: usize,
    shown: usize,
    phase: Phase,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
}

impl Typewriter {
    pub fn new(phrases: &[&'static str]) -> Self {
        Self {
            phrases: phrases.to_vec(),
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            type_ms: 80,
            delete_ms: 40,
            hold_ms: 2000,
        }
    }

    fn current(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or("")
    }

    pub fn text(&self) -> String {
        self.current().chars().take(self.shown).collect()
    }

    /// Advance one step. Returns how long to wait before the next step.
    pub fn tick(&mut self) -> u32 {
        if self.phrases.is_empty() {
            return self.hold_ms;
        }
        let len = self.current().chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                    return self.hold_ms;
                }
                self.type_ms
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.delete_ms
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
                self.delete_ms
            }
        }
    }
}

/// Current typewriter text, advanced on a timer owned by the component.
#[hook]
pub fn use_typewriter(phrases: &'static [&'static str]) -> String {
    let writer = use_state(|| Typewriter::new(phrases));
    {
        let current = (*writer).clone();
        let writer = writer.clone();
        use_effect_with_deps(
            move |current: &Typewriter| {
                let mut next = current.clone();
                let delay = next.tick();
                let timeout = Timeout::new(delay, move || writer.set(next));
                move || drop(timeout)
            },
            current,
        );
    }
    writer.text()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_text(writer: &mut Typewriter, target: &str, max_ticks: usize) -> bool {
        for _ in 0..max_ticks {
            writer.tick();
            if writer.text() == target {
                return true;
            }
        }
        false
    }

    #[test]
    fn test_types_one_char_per_tick() {
        let mut writer = Typewriter::new(&["Developer"]);
        assert_eq!(writer.text(), "");
        writer.tick();
        assert_eq!(writer.text(), "D");
        writer.tick();
        assert_eq!(writer.text(), "De");
    }

    #[test]
    fn test_holds_full_phrase() {
        let mut writer = Typewriter::new(&["Hi", "Yo"]);
        assert_eq!(writer.tick(), writer.type_ms);
        assert_eq!(writer.tick(), writer.hold_ms);
        assert_eq!(writer.text(), "Hi");
    }

    #[test]
    fn test_cycles_through_phrases_and_loops() {
        let mut writer = Typewriter::new(&["Developer", "Designer", "Problem Solver"]);
        assert!(run_until_text(&mut writer, "Developer", 20));
        assert!(run_until_text(&mut writer, "Designer", 40));
        assert!(run_until_text(&mut writer, "Problem Solver", 60));
        assert!(run_until_text(&mut writer, "Developer", 60));
    }

    #[test]
    fn test_every_tick_produces_a_new_state() {
        // The hook re-arms its timer only when the state changes
        let mut writer = Typewriter::new(&["Hi", "Yo"]);
        for _ in 0..30 {
            let before = writer.clone();
            writer.tick();
            assert_ne!(before, writer);
        }
    }

    #[test]
    fn test_empty_phrase_list() {
        let mut writer = Typewriter::new(&[]);
        writer.tick();
        assert_eq!(writer.text(), "");
    }
}
