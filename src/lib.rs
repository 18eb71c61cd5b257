//! Beam geometry, containment, and hit-testing for a canvas battle scene.
//!
//! This crate is compiled to WebAssembly and runs in the browser next to a
//! 2D canvas. It computes the oriented quads ("laser beams") and rectangles
//! that make up the scene, answers containment and rasterization queries for
//! them, and resolves which DOM element sits beneath a point the beam
//! sweeps over. Drawing and DOM access go through small traits so the whole
//! engine is testable without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`point`] | `Point` and `Line` value types |
//! | [`transform`] | Translate along an angle, toward a point, rotate about a pivot |
//! | [`metric`] | Distance, viewport bounds, interval sequences |
//! | [`polygon`] | Ray-casting containment and integer-grid rasterization |
//! | [`dom`] | Element-at-point resolution that skips empty wrappers |
//! | [`browser`] | `web_sys` adapter for the [`dom`] traits |
//! | [`render`] | Drawing surface abstraction over `CanvasRenderingContext2d` |
//! | [`beam`] | Laser beam quad generator |
//! | [`battle`] | Axis-aligned battle object targets |
//! | [`engine`] | Scene state and the browser-facing [`engine::Engine`] |
//! | [`config`] | JSON-backed beam and scene settings |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants |

pub mod battle;
pub mod beam;
pub mod browser;
pub mod config;
pub mod consts;
pub mod dom;
pub mod engine;
pub mod error;
pub mod metric;
pub mod point;
pub mod polygon;
pub mod render;
pub mod transform;
