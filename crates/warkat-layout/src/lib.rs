// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// warkat-layout: The typesetting engine.
//
// Text flows through phrase protection, greedy wrapping, bold-range detection
// and the rich line renderer (plain or justified, with the underline
// sequencer watching every word). Block renderers compose those into letter
// sections, the engine walks a `LetterTemplate`, and the auto-scale
// controller re-runs the whole pass at smaller type until it fits the page.

pub mod autoscale;
pub mod blocks;
pub mod bold;
pub mod context;
pub mod engine;
pub mod fill;
pub mod metrics;
pub mod protect;
pub mod recording;
pub mod rich;
pub mod surface;
pub mod template;
pub mod underline;
pub mod wrap;

pub use autoscale::{AutoScaler, RenderedDocument, content_weight};
pub use context::{RenderAssets, RenderContext, ScaleAttempt};
pub use engine::{LetterEngine, PassReport};
pub use metrics::FontWeight;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Align, DrawingSurface};
pub use template::{Block, LetterTemplate, SignatureBlock, SignatureColumn};
