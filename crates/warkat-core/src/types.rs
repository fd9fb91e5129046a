// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: paper and page geometry, application records, and the
// identities of the officials who sign or receive a letter.

use serde::{Deserialize, Serialize};

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum PaperSize {
    #[default]
    A4,
    /// Folio, the customary size for Indonesian government correspondence.
    F4,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            Self::A4 => (210.0, 297.0),
            Self::F4 => (215.0, 330.0),
            Self::Letter => (215.9, 279.4),
            Self::Legal => (215.9, 355.6),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }
}

/// Page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 25.0,
            right: 20.0,
            top: 12.0,
            bottom: 15.0,
        }
    }
}

/// Fixed page geometry every renderer works against.
///
/// All coordinates are millimetres measured from the top-left corner of the
/// page. Drawn content must stay within `[left, width - right]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PageGeometry {
    pub fn new(paper: PaperSize, margins: Margins) -> Self {
        let (width, height) = paper.dimensions_mm();
        Self {
            width,
            height,
            left: margins.left,
            right: margins.right,
            top: margins.top,
            bottom: margins.bottom,
        }
    }

    /// X coordinate of the right content edge.
    pub fn right_edge(&self) -> f32 {
        self.width - self.right
    }

    /// Width available between the margins.
    pub fn content_width(&self) -> f32 {
        self.right_edge() - self.left
    }

    /// Lowest Y a baseline may reach.
    pub fn safe_bottom(&self) -> f32 {
        self.height - self.bottom
    }

    /// Horizontal centre of the content area.
    pub fn center_x(&self) -> f32 {
        self.left + self.content_width() / 2.0
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::new(PaperSize::A4, Margins::default())
    }
}

/// A police official named on a letter (signer, receiving officer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Official {
    pub name: Option<String>,
    /// Rank, e.g. "AIPTU" or "AKP".
    pub rank: Option<String>,
    /// Personnel registration number.
    pub nrp: Option<String>,
    /// Position, e.g. "KEPALA KEPOLISIAN SEKTOR MEDAN BARU".
    pub title: Option<String>,
}

/// The officials involved in issuing a letter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parties {
    /// Official who signs and issues the letter.
    pub signer: Official,
    /// Officer who received the report (loss reports only).
    #[serde(default)]
    pub receiver: Option<Official>,
}

/// An application for a crowd-event permit.
///
/// Every field is optional: the persistence layer validates upstream and the
/// letter renders `-` for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermitRecord {
    /// Pre-assigned reference number; composed from `sequence` when absent.
    pub reference_number: Option<String>,
    /// Running counter for this letter type.
    pub sequence: Option<u32>,

    pub applicant_name: Option<String>,
    pub applicant_nik: Option<String>,
    pub applicant_phone: Option<String>,
    pub applicant_birth_place: Option<String>,
    pub applicant_birth_date: Option<String>,
    pub applicant_occupation: Option<String>,
    pub applicant_address: Option<String>,
    /// Organising body, when the applicant acts on behalf of one.
    pub organization: Option<String>,

    /// What is being held, e.g. "Pesta Pernikahan".
    pub event_name: Option<String>,
    /// Entertainment provided, e.g. "Keyboard / Organ Tunggal".
    pub entertainment: Option<String>,
    pub event_date: Option<String>,
    pub event_end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub guest_count: Option<u32>,
    /// Occasion ("dalam rangka"), e.g. "Pernikahan Putri Kami".
    pub purpose: Option<String>,

    /// Record creation timestamp; becomes the letter date.
    pub created_at: Option<String>,
}

/// An application for a loss-report acknowledgement letter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LossReportRecord {
    pub reference_number: Option<String>,
    pub sequence: Option<u32>,

    pub reporter_name: Option<String>,
    pub reporter_nik: Option<String>,
    pub reporter_phone: Option<String>,
    pub birth_place: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub religion: Option<String>,
    pub occupation: Option<String>,
    pub address: Option<String>,

    pub incident_date: Option<String>,
    pub incident_time: Option<String>,
    pub incident_location: Option<String>,
    /// Free-text account of how the items were lost.
    pub chronology: Option<String>,
    /// Up to five descriptions of what was lost.
    pub lost_items: Vec<String>,

    /// When the report was filed; becomes the letter date.
    pub reported_at: Option<String>,
}

/// A decoded raster image, RGB8, row-major.
///
/// Shared read-only through `Arc` between every render that needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl RasterImage {
    /// Height divided by width, used to keep the aspect ratio when placing.
    pub fn aspect(&self) -> f32 {
        if self.width == 0 {
            1.0
        } else {
            self.height as f32 / self.width as f32
        }
    }
}
