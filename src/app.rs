//! Grid configuration and the hand-off to a host toolkit.
//!
//! [`GridConfig`] carries the options a [`Grid`] is built with. [`Window`]
//! packages a resolved layout for display, and [`Host`] is implemented by
//! whatever runs the window: a real toolkit, or the headless
//! [`Pilot`](crate::testing::Pilot) in tests.

use std::collections::HashMap;

use crate::control::ControlId;
use crate::error::Result;
use crate::geometry::{Region, Size};
use crate::grid::{Grid, GridLayout, SpanPolicy};
use crate::layout::{LayoutEngine, SpatialMap};

// ---------------------------------------------------------------------------
// GridConfig
// ---------------------------------------------------------------------------

/// Configuration for a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Optional window title.
    pub title: Option<String>,
    /// How non-rectangular repetitions are treated.
    pub span_policy: SpanPolicy,
    /// Size of one grid cell, in host units.
    pub cell_size: Size,
    /// Gap between adjacent rows and columns.
    pub spacing: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            title: None,
            span_policy: SpanPolicy::Strict,
            cell_size: Size::new(10, 1),
            spacing: 0,
        }
    }
}

impl GridConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the span policy (builder).
    pub fn with_span_policy(mut self, policy: SpanPolicy) -> Self {
        self.span_policy = policy;
        self
    }

    /// Set the cell size (builder).
    pub fn with_cell_size(mut self, width: i32, height: i32) -> Self {
        self.cell_size = Size::new(width, height);
        self
    }

    /// Set the spacing between tracks (builder).
    pub fn with_spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }
}

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// A resolved layout ready to be shown by a [`Host`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Window title.
    pub title: Option<String>,
    /// Shape and placements.
    pub layout: GridLayout,
    /// Size of one cell.
    pub cell_size: Size,
    /// Gap between tracks.
    pub spacing: u16,
}

impl Window {
    /// Package `layout` with the display options of `config`.
    pub fn new(config: &GridConfig, layout: GridLayout) -> Self {
        Self {
            title: config.title.clone(),
            layout,
            cell_size: config.cell_size,
            spacing: config.spacing,
        }
    }

    /// Total size of the window contents.
    pub fn size(&self) -> Size {
        let gap = i32::from(self.spacing);
        let track = |count: usize, cell: i32| {
            let n = count as i32;
            n * cell + (n - 1).max(0) * gap
        };
        Size::new(
            track(self.layout.ncols(), self.cell_size.width),
            track(self.layout.nrows(), self.cell_size.height),
        )
    }

    /// The screen region of every control.
    ///
    /// Fails with [`GridError::Layout`](crate::GridError::Layout) when the
    /// grid has more tracks than the layout engine can address.
    pub fn regions(&self) -> Result<HashMap<ControlId, Region>> {
        let mut engine = LayoutEngine::new();
        engine.sync_layout(&self.layout, self.cell_size, self.spacing)?;
        engine.compute(self.size());
        Ok(engine.get_all_layouts())
    }

    /// A hit-test map over [`regions`](Self::regions), in placement order.
    pub fn spatial_map(&self) -> Result<SpatialMap> {
        let regions = self.regions()?;
        let ordered: Vec<(ControlId, Region)> = self
            .layout
            .placements()
            .iter()
            .filter_map(|p| regions.get(&p.control).map(|&r| (p.control, r)))
            .collect();
        let mut map = SpatialMap::new();
        map.update_ordered(&ordered);
        Ok(map)
    }
}

// ---------------------------------------------------------------------------
// Host
// ---------------------------------------------------------------------------

/// A toolkit that can display a [`Window`] and drive a grid's signals.
///
/// `run` blocks until the host is done, typically when its window closes.
pub trait Host {
    /// Error reported by the host.
    type Error;

    /// Show `window` and run until finished.
    fn run(&mut self, grid: &Grid, window: Window) -> std::result::Result<(), Self::Error>;
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Token;
    use pretty_assertions::assert_eq;

    fn grid_with(config: GridConfig) -> Grid {
        Grid::with_config(
            vec![
                vec![Token::from("Title"), Token::LEFT],
                vec![Token::button("a"), Token::button("b")],
            ],
            config,
        )
        .unwrap()
    }

    struct Recorder {
        titles: Vec<Option<String>>,
    }

    impl Host for Recorder {
        type Error = String;

        fn run(&mut self, grid: &Grid, window: Window) -> std::result::Result<(), String> {
            if window.layout.placements().len() != grid.placements().len() {
                return Err("layout mismatch".into());
            }
            self.titles.push(window.title);
            Ok(())
        }
    }

    // ── GridConfig builder ───────────────────────────────────────────

    #[test]
    fn config_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.title, None);
        assert_eq!(config.span_policy, SpanPolicy::Strict);
        assert_eq!(config.cell_size, Size::new(10, 1));
        assert_eq!(config.spacing, 0);
    }

    #[test]
    fn config_builder_chain() {
        let config = GridConfig::new()
            .with_title("Demo")
            .with_span_policy(SpanPolicy::FirstRun)
            .with_cell_size(8, 2)
            .with_spacing(1);
        assert_eq!(config.title.as_deref(), Some("Demo"));
        assert_eq!(config.span_policy, SpanPolicy::FirstRun);
        assert_eq!(config.cell_size, Size::new(8, 2));
        assert_eq!(config.spacing, 1);
    }

    // ── Window ───────────────────────────────────────────────────────

    #[test]
    fn window_size_includes_spacing() {
        let grid = grid_with(GridConfig::new().with_cell_size(10, 1).with_spacing(2));
        assert_eq!(grid.window().size(), Size::new(22, 4));
    }

    #[test]
    fn window_regions_follow_spans() {
        let grid = grid_with(GridConfig::new().with_cell_size(10, 1));
        let regions = grid.window().regions().unwrap();
        let title = grid.resolve("Title").unwrap();
        let b = grid.resolve("b").unwrap();
        assert_eq!(regions[&title], Region::new(0, 0, 20, 1));
        assert_eq!(regions[&b], Region::new(10, 1, 10, 1));
    }

    #[test]
    fn spatial_map_hit() {
        let grid = grid_with(GridConfig::default());
        let map = grid.window().spatial_map().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.control_at(crate::geometry::Offset::new(15, 0)), grid.resolve("Title").ok());
        assert_eq!(map.control_at(crate::geometry::Offset::new(3, 1)), grid.resolve("a").ok());
        assert_eq!(map.control_at(crate::geometry::Offset::new(30, 0)), None);
    }

    #[test]
    fn regions_cover_window() {
        let grid = grid_with(GridConfig::new().with_cell_size(10, 1).with_spacing(2));
        let window = grid.window();
        let regions = window.regions().unwrap();
        let size = window.size();
        assert!(regions
            .values()
            .all(|r| r.x >= 0 && r.y >= 0 && r.right() <= size.width && r.bottom() <= size.height));
    }

    #[test]
    fn regions_past_addressable_tracks_fail() {
        let mut controls = crate::control::Controls::new();
        let far = controls.insert(crate::control::ControlSpec::label("far"));
        let ncols = i16::MAX as usize + 1;
        let layout = GridLayout::new(
            1,
            ncols,
            vec![crate::grid::Placement {
                control: far,
                row: 0,
                col: ncols - 1,
                rowspan: 1,
                colspan: 1,
            }],
        );
        let window = Window::new(&GridConfig::new().with_cell_size(1, 1), layout);
        assert!(matches!(window.regions(), Err(crate::GridError::Layout { .. })));
        assert!(matches!(window.spatial_map(), Err(crate::GridError::Layout { .. })));
    }

    // ── Host ─────────────────────────────────────────────────────────

    #[test]
    fn run_passes_window_to_host() {
        let grid = grid_with(GridConfig::new().with_title("Demo"));
        let mut host = Recorder { titles: Vec::new() };
        assert_eq!(grid.run(&mut host), Ok(()));
        assert_eq!(host.titles, vec![Some("Demo".to_string())]);
    }
}
