use std::collections::BTreeMap;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document};

use crate::battle::BattleObject;
use crate::beam::Beam;
use crate::browser::{DocumentLookup, WebNode};
use crate::config::SceneConfig;
use crate::dom::{ElementLookup, element_at_point};
use crate::error::EngineError;
use crate::metric::{Viewport, interval_sequence};
use crate::point::Point;
use crate::polygon::{polygons_overlap, validate};
use crate::render::Surface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Identifier for a fired beam.
pub type BeamId = u32;

/// Identifier for a battle object.
pub type ObjectId = u32;

/// Scene state: the viewport, battle objects, and fired beams.
///
/// Hit-testing goes through [`ElementLookup`] and drawing through
/// [`Surface`], so any host can drive it.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub config: SceneConfig,
    pub viewport: Viewport,
    objects: BTreeMap<ObjectId, BattleObject>,
    beams: BTreeMap<BeamId, Beam>,
    next_id: u32,
}

impl EngineCore {
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        Self { config, ..Self::default() }
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    // --- Viewport ---

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    // --- Objects ---

    pub fn add_object(&mut self, object: BattleObject) -> ObjectId {
        let id = self.allocate_id();
        self.objects.insert(id, object);
        id
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Option<BattleObject> {
        self.objects.remove(&id)
    }

    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&BattleObject> {
        self.objects.get(&id)
    }

    // --- Beams ---

    /// Create a beam from the configured length and color and start it lasing.
    pub fn fire(&mut self, start: Point, angle_deg: f64, half_width: f64) -> BeamId {
        let mut beam = Beam::with_config(start, angle_deg, half_width, &self.config.beam);
        beam.set_lasing(true);
        let id = self.allocate_id();
        log::debug!("beam {id} fired from ({}, {}) at {angle_deg}°", start.x, start.y);
        self.beams.insert(id, beam);
        id
    }

    /// Stop a beam from lasing. Returns `false` if the beam is unknown.
    pub fn stop(&mut self, id: BeamId) -> bool {
        match self.beams.get_mut(&id) {
            Some(beam) => {
                beam.set_lasing(false);
                true
            }
            None => false,
        }
    }

    pub fn remove_beam(&mut self, id: BeamId) -> Option<Beam> {
        self.beams.remove(&id)
    }

    #[must_use]
    pub fn beam(&self, id: BeamId) -> Option<&Beam> {
        self.beams.get(&id)
    }

    fn require_beam(&self, id: BeamId) -> Result<&Beam, EngineError> {
        self.beams.get(&id).ok_or(EngineError::UnknownBeam(id))
    }

    // --- Queries ---

    /// Probe points spread over the beam on a `sample_gap` grid, restricted
    /// to the viewport.
    ///
    /// The grid runs along the beam axis from the emitter to the tip and
    /// across it from edge to edge; both ends of each axis are always
    /// included.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownBeam`] if `id` is not registered.
    pub fn beam_samples(&self, id: BeamId) -> Result<Vec<Point>, EngineError> {
        let beam = self.require_beam(id)?;
        let gap = self.config.sample_gap;
        let (sin, cos) = beam.angle().to_radians().sin_cos();

        let along = axis_stops(0.0, beam.length(), gap);
        let across = axis_stops(-beam.half_width(), beam.half_width(), gap);

        let start = beam.start();
        let mut out = Vec::with_capacity(along.len() * across.len());
        for d in &along {
            for w in &across {
                let p = Point::new(start.x + d * sin + w * cos, start.y + d * cos - w * sin);
                if self.viewport.contains(p) {
                    out.push(p);
                }
            }
        }
        Ok(out)
    }

    /// Battle objects whose rectangle overlaps the beam quad, touching
    /// edges included.
    ///
    /// Decided geometrically, so beams narrower than a pixel still strike
    /// whatever they cross.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownBeam`] if `id` is not registered and
    /// [`EngineError::Geometry`] if the beam has non-finite corners.
    pub fn struck_objects(&self, id: BeamId) -> Result<Vec<ObjectId>, EngineError> {
        let beam = self.require_beam(id)?;
        validate(beam.corners())?;
        Ok(self
            .objects
            .iter()
            .filter(|(_, obj)| polygons_overlap(&obj.outline(), beam.corners()))
            .map(|(id, _)| *id)
            .collect())
    }

    /// Distinct DOM elements under the beam's sample points, in sample order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownBeam`] if `id` is not registered.
    pub fn resolve_targets<L>(&self, lookup: &L, id: BeamId) -> Result<Vec<L::Node>, EngineError>
    where
        L: ElementLookup,
        L::Node: PartialEq,
    {
        let mut out: Vec<L::Node> = Vec::new();
        for p in self.beam_samples(id)? {
            if let Some(node) = element_at_point(lookup, p) {
                if !out.contains(&node) {
                    out.push(node);
                }
            }
        }
        log::debug!("beam {id} resolved {} targets", out.len());
        Ok(out)
    }

    // --- Render ---

    /// Clear the viewport, outline every object, then fill lasing beams on top.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &S) {
        surface.clear_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
        for obj in self.objects.values() {
            obj.draw(surface);
        }
        for beam in self.beams.values().filter(|b| b.is_lasing()) {
            beam.draw(surface);
        }
    }
}

fn axis_stops(from: f64, to: f64, gap: f64) -> Vec<f64> {
    let mut stops = vec![from];
    stops.extend(interval_sequence(from, to, gap));
    if to > from {
        stops.push(to);
    }
    stops
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Route `log` output to the browser console.
///
/// # Errors
///
/// Returns `Err` if a logger is already installed.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() -> Result<(), JsValue> {
    console_log::init_with_level(log::Level::Debug).map_err(to_js)
}

/// The full engine. Wraps `EngineCore` and owns the browser canvas context
/// and document.
#[wasm_bindgen]
pub struct Engine {
    ctx: CanvasRenderingContext2d,
    lookup: DocumentLookup,
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine drawing to `ctx` and hit-testing against `document`.
    ///
    /// `config` is an optional JSON [`SceneConfig`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if `config` is present but invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(ctx: CanvasRenderingContext2d, document: Document, config: Option<String>) -> Result<Engine, JsValue> {
        let config = match config {
            Some(raw) => SceneConfig::from_json(&raw).map_err(to_js)?,
            None => SceneConfig::default(),
        };
        Ok(Self { ctx, lookup: DocumentLookup::new(document), core: EngineCore::new(config) })
    }

    #[wasm_bindgen(js_name = setViewport)]
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.core.set_viewport(width, height);
    }

    #[wasm_bindgen(js_name = addObject)]
    pub fn add_object(&mut self, x: f64, y: f64, w: f64, h: f64) -> ObjectId {
        self.core.add_object(BattleObject::new(x, y, w, h))
    }

    #[wasm_bindgen(js_name = removeObject)]
    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        self.core.remove_object(id).is_some()
    }

    pub fn fire(&mut self, x: f64, y: f64, angle_deg: f64, half_width: f64) -> BeamId {
        self.core.fire(Point::new(x, y), angle_deg, half_width)
    }

    pub fn stop(&mut self, id: BeamId) -> bool {
        self.core.stop(id)
    }

    #[wasm_bindgen(js_name = removeBeam)]
    pub fn remove_beam(&mut self, id: BeamId) -> bool {
        self.core.remove_beam(id).is_some()
    }

    /// Closed outline of a beam as flat `[x0, y0, x1, y1, …]`.
    #[wasm_bindgen(js_name = beamVertices)]
    pub fn beam_vertices(&self, id: BeamId) -> Option<Vec<f64>> {
        self.core
            .beam(id)
            .map(|beam| beam.vertices().iter().flat_map(|p| [p.x, p.y]).collect())
    }

    /// Ids of battle objects the beam overlaps.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an unknown beam or non-finite beam geometry.
    pub fn struck(&self, id: BeamId) -> Result<Vec<ObjectId>, JsValue> {
        self.core.struck_objects(id).map_err(to_js)
    }

    /// DOM nodes under the beam.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an unknown beam.
    pub fn targets(&self, id: BeamId) -> Result<js_sys::Array, JsValue> {
        let nodes = self.core.resolve_targets(&self.lookup, id).map_err(to_js)?;
        Ok(nodes.into_iter().map(WebNode::into_node).collect())
    }

    /// Draw the current state to the canvas.
    pub fn render(&self) {
        self.core.draw(&self.ctx);
    }
}
