//! Phasemine Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Phasemine
//! parser and classification engine. It includes:
//!
//! - **Geometry**: Points, bounding boxes and polygons ([`geometry`] module)
//! - **Path**: Absolute drawing commands produced by the path parser ([`path`] module)
//! - **Curve**: Bezier flattening by De Casteljau evaluation ([`curve`] module)
//! - **Diagram**: Phase diagram records and element-pair fingerprints ([`diagram`] module)
//! - **Error**: Geometry failures ([`error`] module)

pub mod curve;
pub mod diagram;
pub mod error;
pub mod geometry;
pub mod path;
