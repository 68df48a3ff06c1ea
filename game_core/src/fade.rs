use crate::params::Params;
use crate::render::Color;

/// Text overlay that fades linearly to transparent, then expires
#[derive(Debug, Clone, PartialEq)]
pub struct TimedFadeText {
    pub text: String,
    pub color: Color,
    pub fade_start: f32,
    pub duration: f32,
}

impl TimedFadeText {
    pub fn new(text: impl Into<String>, color: Color, now: f32) -> Self {
        Self::with_duration(text, color, now, Params::FADE_DURATION)
    }

    pub fn with_duration(text: impl Into<String>, color: Color, now: f32, duration: f32) -> Self {
        Self {
            text: text.into(),
            color,
            fade_start: now,
            duration,
        }
    }

    pub fn should_render(&self, now: f32) -> bool {
        now - self.fade_start < self.duration
    }

    /// 255 at `fade_start`, 0 at `fade_start + duration`
    pub fn alpha(&self, now: f32) -> u8 {
        if self.duration <= 0.0 {
            return 0;
        }
        let remaining = 1.0 - (now - self.fade_start) / self.duration;
        (255.0 * remaining).clamp(0.0, 255.0) as u8
    }

    pub fn color_at(&self, now: f32) -> Color {
        self.color.with_alpha(self.alpha(now))
    }
}
