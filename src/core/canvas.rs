use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{
    AnchorPoint, AxisWindow, GridShape, ReferenceLine, Series, Shape, SubplotId, SubplotTarget,
};

/// Default proportional padding applied beyond a series' data range when
/// auto-scaling axis limits.
pub const DEFAULT_MARGIN_FRACTION: f64 = 0.15;

/// Legend anchor inside a subplot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LegendAnchor {
    #[default]
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
}

/// Why a configuration call was skipped instead of applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    NoSuchSubplot(SubplotId),
    LegendAlreadyShown(SubplotId),
    DegenerateAspect,
    DegenerateShape,
}

/// Structured outcome of one fallible configuration call.
///
/// Operator mistakes never abort the session: the call reports, skips, and
/// the canvas stays as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpOutcome {
    Applied,
    Skipped(SkipReason),
}

impl OpOutcome {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    #[must_use]
    pub const fn is_skipped(self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// Per-subplot state: series, display window, labels, overlays, legend flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubplotState {
    id: SubplotId,
    series: Vec<Series>,
    axis: AxisWindow,
    x_label: Option<String>,
    y_label: Option<String>,
    title: Option<String>,
    legend: Option<LegendAnchor>,
    shapes: Vec<Shape>,
    reference_lines: Vec<ReferenceLine>,
    frame_on: bool,
}

impl SubplotState {
    fn new(id: SubplotId) -> Self {
        Self {
            id,
            series: Vec::new(),
            // Display-library default window until the first series fits it.
            axis: AxisWindow {
                x_min: 0.0,
                x_max: 1.0,
                y_min: 0.0,
                y_max: 1.0,
            },
            x_label: None,
            y_label: None,
            title: None,
            legend: None,
            shapes: Vec::new(),
            reference_lines: Vec::new(),
            frame_on: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> SubplotId {
        self.id
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn axis(&self) -> AxisWindow {
        self.axis
    }

    #[must_use]
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    #[must_use]
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn legend(&self) -> Option<LegendAnchor> {
        self.legend
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn reference_lines(&self) -> &[ReferenceLine] {
        &self.reference_lines
    }

    #[must_use]
    pub fn frame_on(&self) -> bool {
        self.frame_on
    }

    #[must_use]
    pub fn has_series(&self) -> bool {
        !self.series.is_empty()
    }
}

/// The canvas manager: a fixed grid of subplots, an append-only series store,
/// and axis-limit bookkeeping. Renderers borrow it read-only and compose
/// scenes from its state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    shape: GridShape,
    margin: f64,
    subplots: IndexMap<SubplotId, SubplotState>,
}

impl Canvas {
    #[must_use]
    pub fn new(shape: GridShape) -> Self {
        let subplots = shape
            .iter()
            .map(|id| (id, SubplotState::new(id)))
            .collect();
        Self {
            shape,
            margin: DEFAULT_MARGIN_FRACTION,
            subplots,
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Toggles the outer frame of every subplot.
    pub fn set_frame_visibility(&mut self, frame_on: bool) {
        for subplot in self.subplots.values_mut() {
            subplot.frame_on = frame_on;
        }
    }

    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    #[must_use]
    pub fn subplot(&self, id: SubplotId) -> Option<&SubplotState> {
        self.subplots.get(&id)
    }

    /// All subplots in row-major order.
    pub fn subplots(&self) -> impl Iterator<Item = &SubplotState> {
        self.subplots.values()
    }

    /// Subplots that currently hold at least one series.
    pub fn populated(&self) -> impl Iterator<Item = &SubplotState> {
        self.subplots.values().filter(|state| state.has_series())
    }

    /// Appends a series to a subplot and rescales that subplot's window.
    ///
    /// The first series on a subplot sets the limits unconditionally; later
    /// ones only widen them.
    pub fn add_series(&mut self, id: impl Into<SubplotId>, series: Series) -> OpOutcome {
        let id = id.into();
        let margin = self.margin;
        let Some(state) = self.valid_subplot_mut(id, "add_series") else {
            return OpOutcome::Skipped(SkipReason::NoSuchSubplot(id));
        };

        if state.series.is_empty() {
            state.axis = AxisWindow::fit_first(&series, margin);
        } else {
            state.axis.widen_for(&series, margin);
        }
        debug!(
            row = id.row,
            col = id.col,
            name = series.name(),
            frames = series.frame_count(),
            "add series"
        );
        state.series.push(series);
        OpOutcome::Applied
    }

    /// Draws a vertical reference line on one subplot or on every subplot
    /// that has data.
    pub fn add_reference_line(&mut self, target: SubplotTarget, line: ReferenceLine) -> OpOutcome {
        let ids = match self.resolve_target(target, "add_reference_line") {
            Ok(ids) => ids,
            Err(reason) => return OpOutcome::Skipped(reason),
        };
        for id in ids {
            if let Some(state) = self.subplots.get_mut(&id) {
                state.reference_lines.push(line.clone());
            }
        }
        OpOutcome::Applied
    }

    /// Stores a geometric overlay for one-time rendering on a subplot.
    /// Shapes never affect axis limits.
    pub fn add_shape(&mut self, id: impl Into<SubplotId>, shape: Shape) -> OpOutcome {
        let id = id.into();
        if let Err(err) = shape.validate() {
            warn!(row = id.row, col = id.col, error = %err, "skipping degenerate shape");
            return OpOutcome::Skipped(SkipReason::DegenerateShape);
        }
        let Some(state) = self.valid_subplot_mut(id, "add_shape") else {
            return OpOutcome::Skipped(SkipReason::NoSuchSubplot(id));
        };
        state.shapes.push(shape);
        OpOutcome::Applied
    }

    /// Sets axis labels and optionally a title.
    pub fn label_axes(
        &mut self,
        target: SubplotTarget,
        x_label: &str,
        y_label: &str,
        title: Option<&str>,
    ) -> OpOutcome {
        let ids = match self.resolve_target(target, "label_axes") {
            Ok(ids) => ids,
            Err(reason) => return OpOutcome::Skipped(reason),
        };
        for id in ids {
            if let Some(state) = self.subplots.get_mut(&id) {
                state.x_label = Some(x_label.to_owned());
                state.y_label = Some(y_label.to_owned());
                if let Some(title) = title {
                    state.title = Some(title.to_owned());
                }
            }
        }
        OpOutcome::Applied
    }

    /// Translates the visible window so `from` lands where `to` currently
    /// sits. Symbolic anchors resolve against the current limits.
    pub fn reposition(
        &mut self,
        target: SubplotTarget,
        from: AnchorPoint,
        to: AnchorPoint,
    ) -> OpOutcome {
        let ids = match self.resolve_target(target, "reposition") {
            Ok(ids) => ids,
            Err(reason) => return OpOutcome::Skipped(reason),
        };
        for id in ids {
            if let Some(state) = self.subplots.get_mut(&id) {
                state.axis.translate(from, to);
            }
        }
        OpOutcome::Applied
    }

    /// Rescales window limits around their midpoints to match `rx:ry`.
    /// A zero ratio component is reported and skipped.
    pub fn set_aspect(&mut self, target: SubplotTarget, rx: f64, ry: f64) -> OpOutcome {
        let ids = match self.resolve_target(target, "set_aspect") {
            Ok(ids) => ids,
            Err(reason) => return OpOutcome::Skipped(reason),
        };
        for id in ids {
            let Some(state) = self.subplots.get_mut(&id) else {
                continue;
            };
            let mut adjusted = state.axis;
            if let Err(err) = adjusted.apply_aspect(rx, ry) {
                warn!(row = id.row, col = id.col, error = %err, "skipping aspect change");
                return OpOutcome::Skipped(SkipReason::DegenerateAspect);
            }
            state.axis = adjusted;
        }
        OpOutcome::Applied
    }

    /// Attaches a legend to each targeted subplot. Idempotent per subplot:
    /// a second request is informational and leaves the first anchor alone.
    pub fn show_legend(&mut self, target: SubplotTarget, anchor: LegendAnchor) -> OpOutcome {
        let ids = match self.resolve_target(target, "show_legend") {
            Ok(ids) => ids,
            Err(reason) => return OpOutcome::Skipped(reason),
        };
        let mut skipped = None;
        let mut applied = false;
        for id in ids {
            let Some(state) = self.subplots.get_mut(&id) else {
                continue;
            };
            if state.legend.is_some() {
                info!(row = id.row, col = id.col, "legend already shown for this subplot");
                skipped.get_or_insert(SkipReason::LegendAlreadyShown(id));
                continue;
            }
            state.legend = Some(anchor);
            applied = true;
        }
        match (applied, skipped) {
            (false, Some(reason)) => OpOutcome::Skipped(reason),
            _ => OpOutcome::Applied,
        }
    }

    fn valid_subplot_mut(&mut self, id: SubplotId, op: &str) -> Option<&mut SubplotState> {
        if !self.shape.contains(id) {
            warn!(
                row = id.row,
                col = id.col,
                op,
                "no such subplot exists to enter data, skipping"
            );
            return None;
        }
        self.subplots.get_mut(&id)
    }

    fn resolve_target(
        &self,
        target: SubplotTarget,
        op: &str,
    ) -> Result<Vec<SubplotId>, SkipReason> {
        match target {
            SubplotTarget::One(id) => {
                if !self.shape.contains(id) {
                    warn!(
                        row = id.row,
                        col = id.col,
                        op,
                        "no such subplot exists to enter data, skipping"
                    );
                    return Err(SkipReason::NoSuchSubplot(id));
                }
                Ok(vec![id])
            }
            SubplotTarget::All => Ok(self.populated().map(SubplotState::id).collect()),
        }
    }
}
