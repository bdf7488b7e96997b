use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, AddEventListenerOptions};
use yew::prelude::*;

/// Topbar styling kicks in past this many pixels.
pub const RESTYLE_THRESHOLD: f64 = 100.0;
/// Scrolling down past this point hides the topbar.
pub const HIDE_THRESHOLD: f64 = 300.0;
/// The back-to-top control appears past this point.
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

/// Derived scroll state, recomputed from each raw `scrollY` sample.
///
/// The three outputs are independent; they only share the sample source.
/// Hide/reveal is direction-sensitive: the topbar hides while moving down
/// past [`HIDE_THRESHOLD`] and reveals on any upward movement, rather than
/// flipping on a plain threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAffordances {
    last_y: f64,
    /// Topbar has left its resting style.
    pub scrolled: bool,
    /// Topbar is translated out of view.
    pub hidden: bool,
    pub show_back_to_top: bool,
}

impl Default for ScrollAffordances {
    fn default() -> Self {
        ScrollAffordances {
            last_y: 0.0,
            scrolled: false,
            hidden: false,
            show_back_to_top: false,
        }
    }
}

impl ScrollAffordances {
    /// Feed one `scrollY` sample and recompute the derived state.
    pub fn sample(&mut self, y: f64) {
        if y > RESTYLE_THRESHOLD {
            self.scrolled = true;
            self.hidden = y > self.last_y && y > HIDE_THRESHOLD;
        } else {
            self.scrolled = false;
            self.hidden = false;
        }

        self.show_back_to_top = y > BACK_TO_TOP_THRESHOLD;
        self.last_y = y;
    }
}

/// Raw read-through fraction of the document, clamped to [0, 1].
pub fn scroll_fraction(scroll_y: f64, viewport_height: f64, document_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Exponential follower that smooths the reading-progress fraction.
///
/// Each sample moves the value a fixed proportion of the remaining distance
/// toward the target, so the bar approaches monotonically and never
/// overshoots, unlike applying the raw fraction as a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressFollower {
    value: f64,
    /// Proportion of the remaining distance covered per sample, in (0, 1].
    alpha: f64,
}

impl ProgressFollower {
    pub fn new(alpha: f64) -> Self {
        ProgressFollower {
            value: 0.0,
            alpha: alpha.clamp(0.01, 1.0),
        }
    }

    /// Advance toward `target` and return the smoothed value.
    pub fn follow(&mut self, target: f64) -> f64 {
        let target = target.clamp(0.0, 1.0);
        self.value += (target - self.value) * self.alpha;
        // Snap once the remaining distance is imperceptible.
        if (target - self.value).abs() < 0.001 {
            self.value = target;
        }
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Default for ProgressFollower {
    fn default() -> Self {
        ProgressFollower::new(0.3)
    }
}

/// Subscribe to window scroll with a passive listener, feeding each sample to
/// `on_sample`. Returns the cleanup registration through `use_effect_with`.
#[hook]
fn use_scroll_samples(on_sample: Callback<f64>) {
    use_effect_with((), move |_| {
        let listener_window = window();

        let closure = {
            let listener_window = listener_window.clone();
            Closure::wrap(Box::new(move || {
                if let Some(win) = listener_window.as_ref() {
                    let y = win.scroll_y().unwrap_or(0.0);
                    on_sample.emit(y);
                }
            }) as Box<dyn Fn()>)
        };

        if let Some(win) = listener_window.as_ref() {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            let _ = win.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &options,
            );
        }

        move || {
            if let Some(win) = listener_window.as_ref() {
                let _ = win.remove_event_listener_with_callback(
                    "scroll",
                    closure.as_ref().unchecked_ref(),
                );
            }
            drop(closure);
        }
    });
}

/// Topbar/back-to-top affordances for the current window scroll position.
///
/// The evolving machine lives in a ref so the scroll closure keeps its
/// direction memory across renders; the returned snapshot only re-renders the
/// caller when a derived flag actually changes.
#[hook]
pub fn use_scroll_affordances() -> ScrollAffordances {
    let snapshot = use_state_eq(ScrollAffordances::default);
    let machine = use_mut_ref(ScrollAffordances::default);

    let on_sample = {
        let snapshot = snapshot.clone();
        let machine = machine.clone();
        Callback::from(move |y: f64| {
            let mut machine = machine.borrow_mut();
            machine.sample(y);
            snapshot.set(*machine);
        })
    };

    use_scroll_samples(on_sample);

    *snapshot
}

/// Smoothed reading-progress fraction for the current document.
#[hook]
pub fn use_reading_progress() -> f64 {
    let progress = use_state_eq(|| 0.0f64);
    let follower = use_mut_ref(ProgressFollower::default);

    let on_sample = {
        let progress = progress.clone();
        let follower = follower.clone();
        Callback::from(move |y: f64| {
            let Some(win) = window() else { return };
            let viewport = win
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0);
            let document_height = win
                .document()
                .and_then(|doc| doc.document_element())
                .map(|el| f64::from(el.scroll_height()))
                .unwrap_or(0.0);

            let target = scroll_fraction(y, viewport, document_height);
            progress.set(follower.borrow_mut().follow(target));
        })
    };

    use_scroll_samples(on_sample);

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(samples: &[f64]) -> Vec<ScrollAffordances> {
        let mut state = ScrollAffordances::default();
        samples
            .iter()
            .map(|y| {
                state.sample(*y);
                state
            })
            .collect()
    }

    #[test]
    fn restyle_and_hide_follow_the_documented_sequence() {
        let states = run(&[0.0, 150.0, 400.0, 250.0]);

        let scrolled: Vec<bool> = states.iter().map(|s| s.scrolled).collect();
        let hidden: Vec<bool> = states.iter().map(|s| s.hidden).collect();

        assert_eq!(scrolled, vec![false, true, true, true]);
        // Hides only on the downward move past 300, reveals on the way up.
        assert_eq!(hidden, vec![false, false, true, false]);
    }

    #[test]
    fn holding_position_while_deep_reveals_the_topbar() {
        // Equal consecutive samples count as "not scrolling down".
        let states = run(&[0.0, 400.0, 400.0]);
        assert!(states[1].hidden);
        assert!(!states[2].hidden);
    }

    #[test]
    fn returning_under_the_threshold_resets_both_flags() {
        let states = run(&[0.0, 400.0, 50.0]);
        assert!(!states[2].scrolled);
        assert!(!states[2].hidden);
    }

    #[test]
    fn scrolling_down_between_thresholds_keeps_topbar_visible() {
        // 100 < y <= 300: restyled but never hidden, regardless of direction.
        let states = run(&[0.0, 150.0, 250.0]);
        assert!(states[2].scrolled);
        assert!(!states[2].hidden);
    }

    #[test]
    fn back_to_top_appears_past_five_hundred() {
        let states = run(&[0.0, 500.0, 501.0, 200.0]);
        let visible: Vec<bool> = states.iter().map(|s| s.show_back_to_top).collect();
        assert_eq!(visible, vec![false, false, true, false]);
    }

    #[test]
    fn fraction_is_clamped_and_safe_on_short_documents() {
        assert_eq!(scroll_fraction(0.0, 800.0, 2000.0), 0.0);
        assert_eq!(scroll_fraction(600.0, 800.0, 2000.0), 0.5);
        assert_eq!(scroll_fraction(5000.0, 800.0, 2000.0), 1.0);
        // Viewport taller than the document: nothing to scroll through.
        assert_eq!(scroll_fraction(100.0, 800.0, 600.0), 0.0);
    }

    #[test]
    fn follower_approaches_without_overshoot() {
        let mut follower = ProgressFollower::new(0.3);
        let mut previous = 0.0;
        for _ in 0..50 {
            let value = follower.follow(1.0);
            assert!(value >= previous);
            assert!(value <= 1.0);
            previous = value;
        }
        assert_eq!(follower.value(), 1.0);
    }

    #[test]
    fn follower_tracks_a_falling_target_monotonically() {
        let mut follower = ProgressFollower::new(0.5);
        for _ in 0..30 {
            follower.follow(0.8);
        }
        let mut previous = follower.value();
        for _ in 0..30 {
            let value = follower.follow(0.2);
            assert!(value <= previous);
            assert!(value >= 0.2);
            previous = value;
        }
    }
}
