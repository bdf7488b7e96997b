//! Named animation presets consumed declaratively by the components.
//!
//! The catalog is data, not logic: each preset is a timing/easing/spring
//! description that renders to an inline CSS fragment. Components attach the
//! fragments to elements; the browser runs the transitions.

/// Timing curve of a preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Emphasized deceleration curve used by the entrance animations.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            },
        }
    }
}

/// The signature deceleration curve shared by most entrance presets.
pub const EMPHASIZED: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);

/// One named transition preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    /// Inline style fragment driving a CSS animation with this timing.
    pub fn animation_style(&self, keyframes: &str) -> String {
        format!(
            "animation: {} {}ms {} {}ms both;",
            keyframes,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        )
    }

    pub const fn delayed_by(mut self, delay_ms: u32) -> Transition {
        self.delay_ms = delay_ms;
        self
    }
}

pub const FADE_IN: Transition = Transition {
    duration_ms: 500,
    delay_ms: 0,
    easing: Easing::EaseOut,
};

pub const FADE_IN_UP: Transition = Transition {
    duration_ms: 600,
    delay_ms: 0,
    easing: EMPHASIZED,
};

pub const SCALE_IN: Transition = Transition {
    duration_ms: 500,
    delay_ms: 0,
    easing: EMPHASIZED,
};

pub const HERO_ENTRANCE: Transition = Transition {
    duration_ms: 800,
    delay_ms: 0,
    easing: EMPHASIZED,
};

/// Per-item delay step of a staggered list entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub step_ms: u32,
    pub base_delay_ms: u32,
}

impl Stagger {
    /// Delay for the item at `index`.
    pub fn delay_for(&self, index: usize) -> u32 {
        self.base_delay_ms + self.step_ms * index as u32
    }

    /// Entrance transition for the item at `index`.
    pub fn item(&self, index: usize) -> Transition {
        FADE_IN_UP.delayed_by(self.delay_for(index))
    }
}

pub const STAGGER: Stagger = Stagger { step_ms: 100, base_delay_ms: 100 };
pub const STAGGER_FAST: Stagger = Stagger { step_ms: 50, base_delay_ms: 50 };
pub const STAGGER_SLOW: Stagger = Stagger { step_ms: 150, base_delay_ms: 200 };

/// Spring parameter set, exposed to CSS as custom properties so the
/// stylesheet's spring-approximation curves can read them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringConfig {
    pub fn css_vars(&self) -> String {
        format!(
            "--spring-stiffness: {}; --spring-damping: {};",
            self.stiffness, self.damping
        )
    }
}

pub const SPRING_GENTLE: SpringConfig = SpringConfig { stiffness: 120.0, damping: 14.0 };
pub const SPRING_BOUNCY: SpringConfig = SpringConfig { stiffness: 400.0, damping: 10.0 };
pub const SPRING_STIFF: SpringConfig = SpringConfig { stiffness: 300.0, damping: 30.0 };
pub const SPRING_SLOW: SpringConfig = SpringConfig { stiffness: 100.0, damping: 20.0 };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_delays_grow_linearly_with_index() {
        assert_eq!(STAGGER.delay_for(0), 100);
        assert_eq!(STAGGER.delay_for(3), 400);
        assert_eq!(STAGGER_FAST.delay_for(2), 150);
    }

    #[test]
    fn animation_style_renders_the_full_timing() {
        let style = STAGGER.item(1).animation_style("fade-in-up");
        assert_eq!(
            style,
            "animation: fade-in-up 600ms cubic-bezier(0.22, 1, 0.36, 1) 200ms both;"
        );
    }

    #[test]
    fn named_easings_render_to_css_keywords() {
        assert_eq!(Easing::EaseOut.css(), "ease-out");
        assert_eq!(Easing::EaseInOut.css(), "ease-in-out");
        assert_eq!(Easing::Linear.css(), "linear");
    }

    #[test]
    fn spring_presets_expose_their_parameters_as_css_vars() {
        assert_eq!(
            SPRING_BOUNCY.css_vars(),
            "--spring-stiffness: 400; --spring-damping: 10;"
        );
        assert!(SPRING_GENTLE.stiffness < SPRING_STIFF.stiffness);
        assert!(SPRING_SLOW.damping > SPRING_BOUNCY.damping);
    }
}
