//! Presentation collaborator of the browsing session.
//!
//! The session does not render anything itself. After appending quotes it asks a
//! `Presenter` to (a) flush pending rendering work and then (b) play an entrance
//! animation on the newly appended elements only. `EntranceAnimation` describes that
//! animation as data: from/to frames, duration, per-element stagger and easing.
//!
//! `ConsolePresenter` is the terminal implementation: it reveals each new quote on
//! stdout once its stagger delay has elapsed, marking favorites.
use std::collections::HashSet;
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use quote_common::{Quote, QuoteId};
use tokio::task::JoinHandle;

/// Visual state of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// 0.0 is invisible, 1.0 fully visible.
    pub opacity: f32,
    /// Vertical offset in pixels, positive is downward.
    pub offset_y: f32,
    /// Uniform scale factor.
    pub scale: f32,
}

impl Frame {
    /// Interpolate between `self` and `to` at `t` in `[0, 1]`.
    pub fn lerp(&self, to: &Frame, t: f32) -> Frame {
        Frame {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }
}

/// Timing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Fast start, slow finish: `1 - (1 - t)^power`.
    EaseOut(i32),
}

impl Easing {
    /// Map linear progress `t` to eased progress. Input is clamped to `[0, 1]`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut(power) => 1.0 - (1.0 - t).powi(*power),
        }
    }
}

/// One-shot entrance animation applied to a run of freshly appended elements.
#[derive(Debug, Clone, PartialEq)]
pub struct EntranceAnimation {
    /// Initial frame.
    pub from: Frame,
    /// Final frame.
    pub to: Frame,
    /// Duration of a single element's animation.
    pub duration: Duration,
    /// Delay between the starts of consecutive elements.
    pub stagger: Duration,
    /// Timing curve.
    pub easing: Easing,
}

impl Default for EntranceAnimation {
    fn default() -> Self {
        Self {
            from: Frame {
                opacity: 0.0,
                offset_y: 30.0,
                scale: 0.98,
            },
            to: Frame {
                opacity: 1.0,
                offset_y: 0.0,
                scale: 1.0,
            },
            duration: Duration::from_millis(800),
            stagger: Duration::from_millis(100),
            easing: Easing::EaseOut(3),
        }
    }
}

impl EntranceAnimation {
    /// Time at which the element at `index` (within the animated run) starts moving.
    pub fn start_delay(&self, index: usize) -> Duration {
        self.stagger * index as u32
    }

    /// Frame of the element at `index` once `elapsed` has passed since scheduling.
    pub fn frame_at(&self, index: usize, elapsed: Duration) -> Frame {
        let start = self.start_delay(index);
        if elapsed < start {
            return self.from;
        }
        if self.duration.is_zero() {
            return self.to;
        }
        let progress = (elapsed - start).as_secs_f32() / self.duration.as_secs_f32();
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.apply(progress))
    }

    /// Time until the last of `count` elements has finished.
    pub fn total_duration(&self, count: usize) -> Duration {
        match count {
            0 => Duration::ZERO,
            n => self.start_delay(n - 1) + self.duration,
        }
    }
}

/// Rendering side the browsing session sequences after an append.
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Resolve once rendering work caused by the last state change is done.
    async fn flush(&self);

    /// Schedule `animation` on `quotes`, which start at position `first_index` of the
    /// displayed list. Must return without waiting for the animation to finish.
    fn animate_entrance(&self, first_index: usize, quotes: &[Quote], animation: &EntranceAnimation);
}

/// One displayed row: 1-based position, favorite marker and the quote itself.
pub fn format_line(index: usize, quote: &Quote, favorite: bool) -> String {
    let marker = if favorite { '*' } else { ' ' };
    format!("{:>3}. {} {}", index + 1, marker, quote)
}

/// Presenter writing to stdout.
///
/// Quotes flagged through [`ConsolePresenter::set_favorites`] get the favorite marker.
/// Callers that print after an append should await [`ConsolePresenter::finished`]
/// first, so their output does not interleave with the reveal.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    favorites: Mutex<HashSet<QuoteId>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl ConsolePresenter {
    /// Create a new console presenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ids rendered with the favorite marker.
    pub fn set_favorites(&self, ids: &[QuoteId]) {
        *self.favorites.lock().unwrap_or_else(PoisonError::into_inner) =
            ids.iter().copied().collect();
    }

    /// Resolve once the last scheduled reveal has printed everything.
    pub async fn finished(&self) {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = pending {
            if let Err(e) = handle.await {
                warn!("Entrance animation task failed: {}", e);
            }
        }
    }

    fn entrance_lines(
        &self,
        first_index: usize,
        quotes: &[Quote],
        animation: &EntranceAnimation,
    ) -> Vec<(Duration, String)> {
        let favorites = self.favorites.lock().unwrap_or_else(PoisonError::into_inner);
        quotes
            .iter()
            .enumerate()
            .map(|(i, quote)| {
                let line = format_line(first_index + i, quote, favorites.contains(&quote.id));
                (animation.start_delay(i), line)
            })
            .collect()
    }
}

#[async_trait]
impl Presenter for ConsolePresenter {
    async fn flush(&self) {
        tokio::task::yield_now().await;
        if let Err(e) = std::io::stdout().flush() {
            warn!("Failed to flush stdout: {}", e);
        }
    }

    fn animate_entrance(&self, first_index: usize, quotes: &[Quote], animation: &EntranceAnimation) {
        let lines = self.entrance_lines(first_index, quotes, animation);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let task = handle.spawn(async move {
                    let mut waited = Duration::ZERO;
                    for (delay, line) in lines {
                        tokio::time::sleep(delay.saturating_sub(waited)).await;
                        waited = delay;
                        println!("{}", line);
                    }
                });
                *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(task);
            }
            Err(_) => {
                for (_, line) in lines {
                    println!("{}", line);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_default_animation_parameters() {
        let animation = EntranceAnimation::default();
        assert_eq!(animation.duration, Duration::from_millis(800));
        assert_eq!(animation.stagger, Duration::from_millis(100));
        assert_eq!(animation.from.opacity, 0.0);
        assert_eq!(animation.from.offset_y, 30.0);
        assert_eq!(animation.from.scale, 0.98);
        assert_eq!(animation.to.scale, 1.0);
    }

    #[test]
    fn test_ease_out() {
        let easing = Easing::EaseOut(3);
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert!(close(easing.apply(0.5), 0.875));
        assert_eq!(easing.apply(2.0), 1.0);
        assert!(close(Easing::Linear.apply(0.25), 0.25));
    }

    #[test]
    fn test_frame_at_respects_stagger() {
        let animation = EntranceAnimation::default();

        // Third element starts at 200ms.
        assert_eq!(animation.frame_at(2, Duration::from_millis(150)), animation.from);
        assert_eq!(animation.frame_at(2, Duration::from_millis(1000)), animation.to);

        let mid = animation.frame_at(2, Duration::from_millis(600));
        assert!(close(mid.opacity, 0.875));
        assert!(close(mid.offset_y, 30.0 * 0.125));
        assert!(mid.scale > 0.98 && mid.scale < 1.0);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let animation = EntranceAnimation {
            duration: Duration::ZERO,
            ..EntranceAnimation::default()
        };
        assert_eq!(animation.frame_at(0, Duration::ZERO), animation.to);
    }

    #[test]
    fn test_total_duration() {
        let animation = EntranceAnimation::default();
        assert_eq!(animation.total_duration(0), Duration::ZERO);
        assert_eq!(animation.total_duration(1), Duration::from_millis(800));
        assert_eq!(animation.total_duration(9), Duration::from_millis(1600));
    }

    #[test]
    fn test_format_line() {
        let quote = Quote::new(4, "Less is more.", "Mies");
        assert_eq!(format_line(0, &quote, true), "  1. * #4 \"Less is more.\" — Mies");
        assert_eq!(format_line(11, &quote, false), " 12.   #4 \"Less is more.\" — Mies");
    }

    #[test]
    fn test_console_lines_mark_favorites() {
        let presenter = ConsolePresenter::new();
        presenter.set_favorites(&[8]);
        let quotes = vec![Quote::new(7, "a", "x"), Quote::new(8, "b", "y")];

        let lines = presenter.entrance_lines(9, &quotes, &EntranceAnimation::default());
        assert_eq!(lines[0], (Duration::ZERO, format_line(9, &quotes[0], false)));
        assert_eq!(lines[1], (Duration::from_millis(100), format_line(10, &quotes[1], true)));
    }

    #[tokio::test]
    async fn test_console_finished_waits_for_reveal() {
        let presenter = ConsolePresenter::new();
        let quotes = vec![Quote::new(1, "a", "x"), Quote::new(2, "b", "y")];
        let animation = EntranceAnimation {
            stagger: Duration::from_millis(20),
            ..EntranceAnimation::default()
        };

        presenter.animate_entrance(0, &quotes, &animation);
        assert!(presenter.pending.lock().unwrap().is_some());

        let started = std::time::Instant::now();
        presenter.finished().await;
        assert!(started.elapsed() >= Duration::from_millis(15));
        assert!(presenter.pending.lock().unwrap().is_none());

        // Nothing pending: returns at once.
        presenter.finished().await;
    }
}
