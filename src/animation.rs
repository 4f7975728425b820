//! Page animations described as data and handed to an [`Animator`].
//!
//! Pages declare *what* moves; the browser implementation lives in
//! `app::browser` and turns each call into Web Animations.

/// A visual state an element animates from or to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationProps {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl AnimationProps {
    pub const REST: AnimationProps = AnimationProps {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub const fn offset_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub const fn offset_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub const fn rotated(self, rotate: f64) -> Self {
        Self { rotate, ..self }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            self.x, self.y, self.scale, self.rotate
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    Back,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "cubic-bezier(0.22, 1, 0.36, 1)",
            Easing::Back => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationOptions {
    pub duration_ms: f64,
    pub delay_ms: f64,
    /// Extra delay added per matched element, in document order.
    pub stagger_ms: f64,
    pub easing: Easing,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_ms: 800.0,
            delay_ms: 0.0,
            stagger_ms: 0.0,
            easing: Easing::EaseOut,
        }
    }
}

impl AnimationOptions {
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_ms + self.stagger_ms * index as f64
    }
}

/// Tween from one state to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: AnimationProps,
    pub to: AnimationProps,
}

pub trait Animator {
    /// Animates every element matching the `target` selector.
    fn animate(&self, target: &str, tween: &Tween, options: &AnimationOptions);
}

/// One step of a page's entrance sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub target: &'static str,
    pub tween: Tween,
    pub options: AnimationOptions,
}

impl Entrance {
    pub const fn fade_up(target: &'static str, delay_ms: f64, stagger_ms: f64) -> Self {
        Self {
            target,
            tween: Tween {
                from: AnimationProps::hidden().offset_y(40.0),
                to: AnimationProps::REST,
            },
            options: AnimationOptions {
                duration_ms: 800.0,
                delay_ms,
                stagger_ms,
                easing: Easing::EaseOut,
            },
        }
    }

    pub const fn pop_in(target: &'static str, delay_ms: f64, stagger_ms: f64) -> Self {
        Self {
            target,
            tween: Tween {
                from: AnimationProps::hidden().scaled(0.8).rotated(-8.0),
                to: AnimationProps::REST,
            },
            options: AnimationOptions {
                duration_ms: 700.0,
                delay_ms,
                stagger_ms,
                easing: Easing::Back,
            },
        }
    }

    pub const fn slide_in(target: &'static str, from_x: f64, delay_ms: f64) -> Self {
        Self {
            target,
            tween: Tween {
                from: AnimationProps::hidden().offset_x(from_x),
                to: AnimationProps::REST,
            },
            options: AnimationOptions {
                duration_ms: 900.0,
                delay_ms,
                stagger_ms: 0.0,
                easing: Easing::EaseOut,
            },
        }
    }
}

pub fn run_entrance<A: Animator + ?Sized>(animator: &A, plan: &[Entrance]) {
    for step in plan {
        animator.animate(step.target, &step.tween, &step.options);
    }
}

/// Section revealed once it scrolls into view.
pub fn reveal(target: &str) -> (String, Tween, AnimationOptions) {
    (
        target.to_string(),
        Tween {
            from: AnimationProps::hidden().offset_y(60.0),
            to: AnimationProps::REST,
        },
        AnimationOptions {
            duration_ms: 900.0,
            stagger_ms: 120.0,
            ..Default::default()
        },
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Enter,
    Leave,
}

/// Lift applied to cards under the pointer.
pub fn hover_tween(hover: Hover) -> (Tween, AnimationOptions) {
    let lifted = AnimationProps::REST.offset_y(-8.0).scaled(1.03);
    let tween = match hover {
        Hover::Enter => Tween {
            from: AnimationProps::REST,
            to: lifted,
        },
        Hover::Leave => Tween {
            from: lifted,
            to: AnimationProps::REST,
        },
    };
    (
        tween,
        AnimationOptions {
            duration_ms: 300.0,
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingAnimator {
        calls: RefCell<Vec<(String, Tween, AnimationOptions)>>,
    }

    impl Animator for RecordingAnimator {
        fn animate(&self, target: &str, tween: &Tween, options: &AnimationOptions) {
            self.calls
                .borrow_mut()
                .push((target.to_string(), *tween, *options));
        }
    }

    #[test]
    fn test_run_entrance_preserves_plan_order() {
        let plan = [
            Entrance::fade_up(".hero", 0.0, 0.0),
            Entrance::pop_in(".card", 300.0, 100.0),
        ];
        let animator = RecordingAnimator::default();
        run_entrance(&animator, &plan);

        let calls = animator.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, ".hero");
        assert_eq!(calls[1].0, ".card");
        assert_eq!(calls[1].1.to, AnimationProps::REST);
        assert_eq!(calls[0].1.from.opacity, 0.0);
    }

    #[test]
    fn test_stagger_delay() {
        let opts = Entrance::pop_in(".card", 300.0, 100.0).options;
        assert_eq!(opts.delay_for(0), 300.0);
        assert_eq!(opts.delay_for(3), 600.0);
    }

    #[test]
    fn test_hover_tweens_mirror_each_other() {
        let (enter, _) = hover_tween(Hover::Enter);
        let (leave, _) = hover_tween(Hover::Leave);
        assert_eq!(enter.from, leave.to);
        assert_eq!(enter.to, leave.from);
    }

    #[test]
    fn test_transform_string() {
        let props = AnimationProps::hidden().offset_y(40.0).scaled(0.5);
        assert_eq!(props.transform(), "translate(0px, 40px) scale(0.5) rotate(0deg)");
    }
}
