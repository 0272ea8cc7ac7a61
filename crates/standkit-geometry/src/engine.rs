//! # Geometry Engine
//!
//! The single pure entry point, plus the memoizing wrapper an application
//! layer is expected to hold onto across recomputations.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

use crate::dimensions::DimensionModel;
use crate::front_view::FrontViewGeometry;
use crate::layout::ViewLayout;
use crate::side_view::SideViewGeometry;
use crate::snapshot::GeometrySnapshot;
use crate::top_view::TopViewGeometry;

/// Computes the complete geometry snapshot for `dims`.
///
/// Pure and total: equal models produce bit-identical snapshots, and
/// degenerate inputs produce defined fallbacks rather than NaN. The side
/// view is solved first; the front and top views are projections of it.
pub fn compute_geometry(dims: &DimensionModel) -> GeometrySnapshot {
    let layout = ViewLayout::from_model(dims);
    let side = SideViewGeometry::solve(dims, &layout);
    let front = FrontViewGeometry::project(dims, &side, &layout);
    let top = TopViewGeometry::project(dims, &side, &layout);
    GeometrySnapshot::assemble(&layout, side, front, top)
}

/// Memoizing wrapper around [`compute_geometry`].
///
/// Holds the last model/snapshot pair and recomputes only when the model
/// value changes. Consecutive calls with an equal model hand back the same
/// `Arc`, so consumers can cheaply test "did anything change" by pointer.
#[derive(Debug, Default)]
pub struct GeometryEngine {
    cache: Mutex<Option<(DimensionModel, Arc<GeometrySnapshot>)>>,
}

impl GeometryEngine {
    /// Creates an engine with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshot for `dims`, reusing the cached one when the
    /// model is unchanged
    pub fn compute(&self, dims: &DimensionModel) -> Arc<GeometrySnapshot> {
        let mut slot = self.cache.lock();
        if let Some((cached_dims, snapshot)) = slot.as_ref() {
            if cached_dims == dims {
                return Arc::clone(snapshot);
            }
        }
        debug!("Dimension model changed, recomputing geometry");
        let snapshot = Arc::new(compute_geometry(dims));
        *slot = Some((dims.clone(), Arc::clone(&snapshot)));
        snapshot
    }

    /// Drops any cached snapshot
    pub fn invalidate(&self) {
        *self.cache.lock() = None;
    }
}
