//! Resistance-surface rasterization.
//!
//! The burn order is an explicit priority list, not incidental draw order:
//! levels are visited from highest precedence to lowest and a cell is
//! assigned by the first level that covers its center. Cells no level
//! touches receive the default fill, so the grid has no no-data sentinel.
//!
//! Priority, highest first:
//! 1. habitat-core membership → lowest cost
//! 2. semi-natural green space → low cost
//! 3. everything else → default (high) cost

use geo::{BoundingRect, Intersects, MultiPolygon, Point};
use greenway_structures::{
    ClassMatcher, CoreSet, Crs, GridTransform, LandCoverLayer, ResistanceGrid,
};
use ndarray::Array2;
use tracing::{debug, info};

use crate::error::{ConnectivityError, ConnectivityResult};

/// Rasterization parameters.
#[derive(Debug, Clone)]
pub struct RasterParams {
    /// Cell edge length in CRS units (meters).
    pub cell_size_m: f64,
    /// Cost for cells inside a habitat core (priority 1).
    pub core_cost: f32,
    /// Cost for semi-natural green space (priority 2).
    pub green_cost: f32,
    /// Fill cost for untouched cells.
    pub default_cost: f32,
    /// Tags that qualify as semi-natural green space.
    pub green: ClassMatcher,
}

/// World-coordinate bounding extent of the raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    fn is_degenerate(&self) -> bool {
        !(self.maxx > self.minx && self.maxy > self.miny)
    }

    fn expand_to(&mut self, other: Extent) {
        self.minx = self.minx.min(other.minx);
        self.miny = self.miny.min(other.miny);
        self.maxx = self.maxx.max(other.maxx);
        self.maxy = self.maxy.max(other.maxy);
    }
}

/// One level of the burn-priority list.
struct PriorityLevel<'a> {
    name: &'a str,
    cost: f32,
    shapes: Vec<&'a MultiPolygon<f64>>,
}

/// Rasterizes land cover plus habitat cores into a resistance grid.
///
/// All inputs must share `target_crs` exactly; mismatch is fatal. The
/// extent defaults to the bounding box of all burned geometries.
pub fn rasterize(
    landcover: &LandCoverLayer,
    cores: &CoreSet,
    target_crs: &Crs,
    params: &RasterParams,
    extent: Option<Extent>,
) -> ConnectivityResult<ResistanceGrid> {
    target_crs.ensure_matches(&landcover.crs, "rasterizer (land cover)")?;
    target_crs.ensure_matches(&cores.crs, "rasterizer (cores)")?;

    let core_shapes: Vec<MultiPolygon<f64>> = cores
        .cores
        .iter()
        .map(|c| MultiPolygon(vec![c.geometry.clone()]))
        .collect();
    let green_shapes: Vec<&MultiPolygon<f64>> = landcover
        .features
        .iter()
        .filter(|f| params.green.matches(f))
        .map(|f| &f.geometry)
        .collect();

    let extent = match extent {
        Some(e) => e,
        None => derive_extent(landcover, &core_shapes)?,
    };
    if extent.is_degenerate() {
        return Err(ConnectivityError::EmptyExtent);
    }

    let width = ((extent.maxx - extent.minx) / params.cell_size_m).ceil() as usize;
    let height = ((extent.maxy - extent.miny) / params.cell_size_m).ceil() as usize;
    if width == 0 || height == 0 {
        return Err(ConnectivityError::EmptyExtent);
    }
    let transform = GridTransform::new(extent.minx, extent.maxy, params.cell_size_m);

    let mut data = Array2::from_elem((height, width), params.default_cost);
    let mut assigned = Array2::from_elem((height, width), false);

    let levels = [
        PriorityLevel {
            name: "core habitat",
            cost: params.core_cost,
            shapes: core_shapes.iter().collect(),
        },
        PriorityLevel {
            name: "semi-natural green",
            cost: params.green_cost,
            shapes: green_shapes,
        },
    ];

    for level in &levels {
        let mut burned = 0usize;
        for shape in &level.shapes {
            burned += burn_shape(shape, level.cost, &transform, &mut data, &mut assigned);
        }
        debug!(level = level.name, cost = level.cost, cells = burned, "burned priority level");
    }

    info!(
        width,
        height,
        cell_size_m = params.cell_size_m,
        "rasterized resistance surface"
    );
    Ok(ResistanceGrid::new(data, transform, target_crs.clone()))
}

/// Burns one geometry into every still-unassigned cell whose center it
/// covers. Returns the number of cells written.
fn burn_shape(
    shape: &MultiPolygon<f64>,
    cost: f32,
    transform: &GridTransform,
    data: &mut Array2<f32>,
    assigned: &mut Array2<bool>,
) -> usize {
    let Some(rect) = shape.bounding_rect() else {
        return 0;
    };
    let (rows, cols) = data.dim();

    // Scan only the cells under the geometry's bounding box.
    let (row_hi, col_lo) = transform.world_to_cell(Point::new(rect.min().x, rect.min().y));
    let (row_lo, col_hi) = transform.world_to_cell(Point::new(rect.max().x, rect.max().y));
    let r0 = row_lo.max(0) as usize;
    let r1 = (row_hi.max(0) as usize).min(rows.saturating_sub(1));
    let c0 = col_lo.max(0) as usize;
    let c1 = (col_hi.max(0) as usize).min(cols.saturating_sub(1));

    let mut burned = 0usize;
    for row in r0..=r1 {
        for col in c0..=c1 {
            if assigned[(row, col)] {
                continue;
            }
            let center: Point<f64> = transform.cell_center(row, col).into();
            if shape.intersects(&center) {
                data[(row, col)] = cost;
                assigned[(row, col)] = true;
                burned += 1;
            }
        }
    }
    burned
}

fn derive_extent(
    landcover: &LandCoverLayer,
    core_shapes: &[MultiPolygon<f64>],
) -> ConnectivityResult<Extent> {
    let mut extent: Option<Extent> = None;
    let rects = landcover
        .features
        .iter()
        .map(|f| &f.geometry)
        .chain(core_shapes.iter())
        .filter_map(|mp| mp.bounding_rect());
    for rect in rects {
        let e = Extent {
            minx: rect.min().x,
            miny: rect.min().y,
            maxx: rect.max().x,
            maxy: rect.max().y,
        };
        match &mut extent {
            Some(current) => current.expand_to(e),
            None => extent = Some(e),
        }
    }
    extent.ok_or(ConnectivityError::EmptyExtent)
}
