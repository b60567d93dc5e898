use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::events::WindowListener;

/// Pointer location as a percentage of the viewport, each axis in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl PointerPosition {
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        Self {
            x: percent(client_x, width),
            y: percent(client_y, height),
        }
    }
}

fn percent(value: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 || !value.is_finite() {
        return 50.0;
    }
    (value / extent * 100.0).clamp(0.0, 100.0)
}

/// How far the hero has been scrolled out, as a fraction of one viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    /// `None` once the hero is a full viewport away; callers keep the last
    /// value in that case.
    pub fn from_scroll(scroll_y: f64, viewport_height: f64) -> Option<Self> {
        if viewport_height.is_nan() || viewport_height <= 0.0 || scroll_y >= viewport_height {
            return None;
        }
        Some(Self((scroll_y / viewport_height).max(0.0)))
    }
}

/// Offsets for the hero's diamond and floating badges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub pointer: PointerPosition,
    pub scroll: ScrollProgress,
}

impl HeroParallax {
    pub fn diamond_shift_x(&self) -> f64 {
        (self.pointer.x - 50.0) * 0.05
    }

    pub fn diamond_shift_y(&self) -> f64 {
        (self.pointer.y - 50.0) * 0.1 + self.scroll.0 * 30.0
    }

    pub fn diamond_brightness(&self) -> f64 {
        100.0 + self.pointer.x * 0.2
    }

    pub fn diamond_style(&self) -> String {
        format!(
            "transform: rotate(45deg) translateY({:.2}px) translateX({:.2}px); filter: brightness({:.1}%);",
            self.diamond_shift_y(),
            self.diamond_shift_x(),
            self.diamond_brightness()
        )
    }

    pub fn floating_shift(&self, index: usize) -> f64 {
        self.scroll.0 * (10.0 + index as f64 * 5.0)
    }

    pub fn floating_style(&self, index: usize) -> String {
        format!("transform: translateY({:.2}px);", self.floating_shift(index))
    }
}

fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Tracks pointer and scroll for the hero while the calling component is
/// mounted.
#[hook]
pub fn use_hero_parallax() -> HeroParallax {
    let pointer = use_state(PointerPosition::default);
    let scroll = use_state(ScrollProgress::default);

    {
        let pointer = pointer.clone();
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let on_move = WindowListener::new("mousemove", move |e| {
                    let Some(e) = e.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    if let Some((w, h)) = viewport_size() {
                        pointer.set(PointerPosition::from_client(
                            e.client_x() as f64,
                            e.client_y() as f64,
                            w,
                            h,
                        ));
                    }
                });

                let update_scroll = move || {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let (Ok(scroll_y), Some((_, h))) = (window.scroll_y(), viewport_size()) else {
                        return;
                    };
                    if let Some(progress) = ScrollProgress::from_scroll(scroll_y, h) {
                        scroll.set(progress);
                    }
                };
                update_scroll();
                let on_scroll = WindowListener::passive("scroll", move |_| update_scroll());

                move || {
                    drop(on_move);
                    drop(on_scroll);
                }
            },
            (),
        );
    }

    HeroParallax {
        pointer: *pointer,
        scroll: *scroll,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pointer_is_percent_of_viewport() {
        let p = PointerPosition::from_client(480.0, 270.0, 1920.0, 1080.0);
        assert!(approx(p.x, 25.0));
        assert!(approx(p.y, 25.0));
    }

    #[test]
    fn pointer_is_clamped() {
        let p = PointerPosition::from_client(-40.0, 5000.0, 800.0, 600.0);
        assert_eq!(p, PointerPosition { x: 0.0, y: 100.0 });

        let p = PointerPosition::from_client(10.0, 10.0, 0.0, f64::NAN);
        assert_eq!(p, PointerPosition { x: 50.0, y: 50.0 });
    }

    #[test]
    fn diamond_offsets_stay_within_multiplier_range() {
        let corners = [
            PointerPosition { x: 0.0, y: 0.0 },
            PointerPosition { x: 100.0, y: 100.0 },
            PointerPosition::from_client(1e9, -1e9, 1024.0, 768.0),
        ];
        for pointer in corners {
            let hero = HeroParallax {
                pointer,
                scroll: ScrollProgress::default(),
            };
            assert!((-2.5..=2.5).contains(&hero.diamond_shift_x()));
            assert!((-5.0..=5.0).contains(&hero.diamond_shift_y()));
            assert!((100.0..=120.0).contains(&hero.diamond_brightness()));
        }

        let top_left = HeroParallax {
            pointer: PointerPosition { x: 0.0, y: 0.0 },
            scroll: ScrollProgress::default(),
        };
        assert!(approx(top_left.diamond_shift_x(), -2.5));
        assert!(approx(top_left.diamond_shift_y(), -5.0));
        assert!(approx(top_left.diamond_brightness(), 100.0));
    }

    #[test]
    fn scroll_progress_only_inside_first_viewport() {
        assert_eq!(ScrollProgress::from_scroll(0.0, 800.0), Some(ScrollProgress(0.0)));
        assert_eq!(ScrollProgress::from_scroll(400.0, 800.0), Some(ScrollProgress(0.5)));
        assert_eq!(ScrollProgress::from_scroll(800.0, 800.0), None);
        assert_eq!(ScrollProgress::from_scroll(100.0, 0.0), None);
    }

    #[test]
    fn floating_badges_shift_more_with_index() {
        let hero = HeroParallax {
            pointer: PointerPosition { x: 50.0, y: 50.0 },
            scroll: ScrollProgress::from_scroll(500.0, 1000.0).unwrap(),
        };
        assert!(approx(hero.floating_shift(0), 5.0));
        assert!(approx(hero.floating_shift(1), 7.5));
        assert!(approx(hero.floating_shift(2), 10.0));
        assert!(approx(hero.diamond_shift_y(), 15.0));
        assert_eq!(hero.floating_style(2), "transform: translateY(10.00px);");
    }

    #[test]
    fn diamond_style_keeps_rotation() {
        let hero = HeroParallax {
            pointer: PointerPosition { x: 100.0, y: 50.0 },
            scroll: ScrollProgress::default(),
        };
        assert_eq!(
            hero.diamond_style(),
            "transform: rotate(45deg) translateY(0.00px) translateX(2.50px); filter: brightness(120.0%);"
        );
    }
}
