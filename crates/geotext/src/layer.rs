//! A collection of labels drawn tile by tile.

use crate::capability::GeographicText;
use crate::draw::draw_frame;
use crate::frame::{CullReason, FrameOutcome, compute_frame};
use crate::geo::{Globe, Sector};
use crate::label::Label;
use crate::measure::TextMeasurer;
use crate::tile::TileContext;
use ahash::AHashMap as HashMap;
use geotext_core::profiling::{profile_function, profile_scope};
use geotext_render::TextRasterizer;

/// Handle to a label owned by a [`SurfaceTextLayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelId(u64);

impl LabelId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Counts from one [`SurfaceTextLayer::draw_tile`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerDrawStats {
    /// Labels that issued both passes.
    pub drawn: usize,
    /// Labels that were too small for the tile or whose text measured empty.
    pub culled: usize,
    /// Visible labels skipped because their footprint misses the tile.
    pub outside: usize,
}

/// Owns labels and draws the ones touching a tile, lowest priority first.
pub struct SurfaceTextLayer {
    labels: HashMap<LabelId, Label>,
    next_id: u64,
    measurer: Box<dyn TextMeasurer>,
    globe: Globe,
}

impl SurfaceTextLayer {
    pub fn new(measurer: impl TextMeasurer + 'static) -> Self {
        Self::with_globe(measurer, Globe::default())
    }

    pub fn with_globe(measurer: impl TextMeasurer + 'static, globe: Globe) -> Self {
        Self {
            labels: HashMap::new(),
            next_id: 0,
            measurer: Box::new(measurer),
            globe,
        }
    }

    pub fn globe(&self) -> &Globe {
        &self.globe
    }

    pub fn add(&mut self, label: Label) -> LabelId {
        let id = LabelId(self.next_id);
        self.next_id += 1;
        self.labels.insert(id, label);
        id
    }

    pub fn remove(&mut self, id: LabelId) -> Option<Label> {
        self.labels.remove(&id)
    }

    pub fn get(&self, id: LabelId) -> Option<&Label> {
        self.labels.get(&id)
    }

    pub fn get_mut(&mut self, id: LabelId) -> Option<&mut Label> {
        self.labels.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (LabelId, &Label)> {
        self.labels.iter().map(|(id, label)| (*id, label))
    }

    /// Visible labels whose footprint touches `sector`, in draw order.
    ///
    /// Measures any label whose text bounds are not cached yet.
    pub fn labels_in_tile(&mut self, sector: &Sector) -> Vec<LabelId> {
        self.partition_for_tile(sector).0
    }

    /// Draw-ordered ids touching `sector`, plus counts of labels with an empty footprint and
    /// of labels that miss `sector`. Hidden labels are not counted.
    fn partition_for_tile(&mut self, sector: &Sector) -> (Vec<LabelId>, usize, usize) {
        profile_function!();

        let measurer = &*self.measurer;
        let globe = self.globe;
        let mut ids = Vec::new();
        let mut empty = 0;
        let mut outside = 0;
        for (id, label) in self.labels.iter_mut() {
            if !label.is_visible() {
                continue;
            }
            let footprint = label.footprint(measurer, &globe);
            if footprint.is_empty() {
                empty += 1;
            } else if footprint.intersects(sector) {
                ids.push(*id);
            } else {
                outside += 1;
            }
        }
        self.sort_for_drawing(&mut ids);
        (ids, empty, outside)
    }

    /// Draw every visible label touching `tile`.
    pub fn draw_tile<R: TextRasterizer + ?Sized>(
        &mut self,
        tile: &TileContext,
        rasterizer: &mut R,
    ) -> LayerDrawStats {
        profile_function!();

        let (ids, empty, outside) = self.partition_for_tile(&tile.sector);
        let mut stats = LayerDrawStats {
            culled: empty,
            outside,
            ..Default::default()
        };

        for id in ids {
            profile_scope!("draw_label");
            let Some(label) = self.labels.get(&id) else {
                continue;
            };
            let Some(bounds) = label.cached_text_bounds() else {
                continue;
            };
            match compute_frame(label, bounds, &self.globe, tile) {
                FrameOutcome::Visible(frame) => {
                    draw_frame(label, &frame, tile, rasterizer);
                    stats.drawn += 1;
                }
                FrameOutcome::Culled(CullReason::Hidden) => {}
                FrameOutcome::Culled(_) => stats.culled += 1,
            }
        }

        tracing::trace!(
            drawn = stats.drawn,
            culled = stats.culled,
            outside = stats.outside,
            "Drew tile {:?}",
            tile.sector
        );
        stats
    }

    fn sort_for_drawing(&self, ids: &mut [LabelId]) {
        ids.sort_by(|a, b| {
            let pa = self.labels.get(a).map_or(0.0, |label| label.priority());
            let pb = self.labels.get(b).map_or(0.0, |label| label.priority());
            pa.total_cmp(&pb).then(a.cmp(b))
        });
    }
}

impl std::fmt::Debug for SurfaceTextLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceTextLayer")
            .field("labels", &self.labels.len())
            .field("next_id", &self.next_id)
            .field("globe", &self.globe)
            .finish_non_exhaustive()
    }
}
