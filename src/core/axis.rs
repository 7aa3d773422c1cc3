use serde::{Deserialize, Serialize};

use crate::core::Series;
use crate::error::{PlotError, PlotResult};

/// Symbolic or literal point used by window repositioning.
///
/// `Origin` and `Center` resolve against the current limits (lower-left
/// corner and midpoint of the visible window).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnchorPoint {
    Origin,
    Center,
    At(f64, f64),
}

/// Current x/y display limits of one subplot.
///
/// Set unconditionally by the first series added to the subplot and only ever
/// widened afterwards, so every stored series stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisWindow {
    /// Limits for the first series on a subplot, padded by the margin
    /// fraction. The y floor drops below zero only when the payload itself
    /// carries a negative value.
    #[must_use]
    pub fn fit_first(series: &Series, margin: f64) -> Self {
        let x_min = series.x().min();
        let x_peak = series.x().max_abs();
        let y_peak = series.y().max_abs();

        let y_min = if series.y().has_negative() {
            -y_peak * (1.0 + margin)
        } else {
            0.0
        };

        Self {
            x_min: x_min * (1.0 - margin),
            x_max: x_peak * (1.0 + margin),
            y_min,
            y_max: y_peak * (1.0 + margin),
        }
    }

    /// Widens the window to keep a subsequent series visible; never narrows.
    ///
    /// The y floor only moves when the incoming payload has a negative value
    /// or the floor is already negative. Positive-only data on top of a
    /// zero-floored window leaves the floor at zero.
    pub fn widen_for(&mut self, series: &Series, margin: f64) {
        self.x_min = self.x_min.min(series.x().min());
        self.x_max = self.x_max.max(series.x().max_abs());

        let y_reach = series.y().max_abs() * (1.0 + margin);
        self.y_max = self.y_max.max(y_reach);
        if series.y().has_negative() || self.y_min < 0.0 {
            self.y_min = self.y_min.min(-y_reach);
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            self.x_min + self.width() / 2.0,
            self.y_min + self.height() / 2.0,
        )
    }

    #[must_use]
    pub fn resolve(&self, anchor: AnchorPoint) -> (f64, f64) {
        match anchor {
            AnchorPoint::Origin => (self.x_min, self.y_min),
            AnchorPoint::Center => self.center(),
            AnchorPoint::At(x, y) => (x, y),
        }
    }

    /// Shifts both axes so `from` lands where `to` currently sits.
    pub fn translate(&mut self, from: AnchorPoint, to: AnchorPoint) {
        let from = self.resolve(from);
        let to = self.resolve(to);
        let dx = from.0 - to.0;
        let dy = from.1 - to.1;
        self.x_min += dx;
        self.x_max += dx;
        self.y_min += dy;
        self.y_max += dy;
    }

    /// Rescales the limits about their midpoints so the displayed
    /// width:height ratio matches `rx:ry`. Only the short axis grows.
    pub fn apply_aspect(&mut self, rx: f64, ry: f64) -> PlotResult<()> {
        if rx == 0.0 || ry == 0.0 || !rx.is_finite() || !ry.is_finite() {
            return Err(PlotError::InvalidConfig(format!(
                "aspect ratio components must be finite and non-zero, got ({rx}, {ry})"
            )));
        }
        let dx = self.width();
        let dy = self.height();
        if dx <= 0.0 || dy <= 0.0 {
            return Err(PlotError::InvalidConfig(
                "aspect rescale requires a non-degenerate window".to_owned(),
            ));
        }

        let ratio = rx / ry;
        let gx = if ratio * dy / dx < 1.0 {
            1.0
        } else {
            ratio * dy / dx
        };
        let gy = if dx / (ratio * dy) < 1.0 {
            1.0
        } else {
            dx / (ratio * dy)
        };

        let (x_min, x_max) = (self.x_min, self.x_max);
        self.x_min = 0.5 * (x_min * (1.0 + gx) + x_max * (1.0 - gx));
        self.x_max = 0.5 * (x_min * (1.0 - gx) + x_max * (1.0 + gx));

        let (y_min, y_max) = (self.y_min, self.y_max);
        self.y_min = 0.5 * (y_min * (1.0 + gy) + y_max * (1.0 - gy));
        self.y_max = 0.5 * (y_min * (1.0 - gy) + y_max * (1.0 + gy));
        Ok(())
    }
}
