// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Engine configuration: page, typography, auto-fit search, phrase rules and the
// issuing office's letterhead. Persisted as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, WarkatError};
use crate::types::{Margins, PageGeometry, PaperSize};

/// Every tunable the engine reads. `Default` yields a working A4 setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub paper: PaperConfig,
    pub typography: Typography,
    pub autoscale: AutoScaleConfig,
    pub phrases: PhraseConfig,
    pub fill: FillConfig,
    pub office: OfficeProfile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperConfig {
    pub size: PaperSize,
    pub margins: Margins,
}

/// Base typography at scale 1.0. Every value is multiplied by the scale
/// candidate currently being tried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    /// Body text size in points.
    pub body_pt: f32,
    /// Letterhead line size in points.
    pub heading_pt: f32,
    /// Title size in points.
    pub title_pt: f32,
    /// Address line and footnote size in points.
    pub small_pt: f32,
    /// Baseline-to-baseline distance as a multiple of the font size.
    pub line_spacing: f32,
    /// Vertical space between blocks, in millimetres.
    pub block_gap_mm: f32,
    /// Blank height reserved for a handwritten signature, in millimetres.
    pub signature_space_mm: f32,
    /// Smallest inter-word gap, in millimetres. Not scaled.
    pub min_word_gap_mm: f32,
    /// Distance of underlines below the baseline, in millimetres.
    pub underline_offset_mm: f32,
    /// Stroke width of underlines and rules, in millimetres.
    pub rule_width_mm: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            body_pt: 12.0,
            heading_pt: 12.5,
            title_pt: 13.0,
            small_pt: 10.0,
            line_spacing: 1.2,
            block_gap_mm: 3.0,
            signature_space_mm: 20.0,
            min_word_gap_mm: 0.8,
            underline_offset_mm: 0.9,
            rule_width_mm: 0.3,
        }
    }
}

/// Maps a content weight to the first scale the fitter should try.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightThreshold {
    /// Inclusive upper bound of the weight band.
    pub max_weight: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScaleConfig {
    /// Known-good scales, tried in descending order below the starting scale.
    pub candidates: Vec<f32>,
    /// Weight bands in ascending `max_weight` order. Heavier content than the
    /// last band starts at the smallest candidate.
    pub thresholds: Vec<WeightThreshold>,
    /// Room kept free above the bottom margin, in millimetres.
    pub safety_margin_mm: f32,
}

impl Default for AutoScaleConfig {
    fn default() -> Self {
        Self {
            candidates: vec![1.0, 0.95, 0.9, 0.85, 0.8],
            thresholds: vec![
                WeightThreshold { max_weight: 350.0, scale: 1.0 },
                WeightThreshold { max_weight: 600.0, scale: 0.95 },
                WeightThreshold { max_weight: 900.0, scale: 0.9 },
                WeightThreshold { max_weight: 1200.0, scale: 0.85 },
            ],
            safety_margin_mm: 4.0,
        }
    }
}

/// Four-word phrase that receives a continuous underline, e.g.
/// `REMIX / HOUSE MUSIK`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderlinePhrase {
    pub first: String,
    pub separator: String,
    pub second: String,
    pub last: String,
}

impl Default for UnderlinePhrase {
    fn default() -> Self {
        Self {
            first: "REMIX".into(),
            separator: "/".into(),
            second: "HOUSE".into(),
            last: "MUSIK".into(),
        }
    }
}

/// Legally significant wording: what must not wrap, what is bold, and what is
/// underlined.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseConfig {
    /// Literal phrases kept on one line (matched case-insensitively).
    pub protected: Vec<String>,
    /// Case-insensitive regular expressions rendered in bold.
    pub bold_patterns: Vec<String>,
    pub underline: UnderlinePhrase,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            protected: vec![
                "REMIX / HOUSE MUSIK".into(),
                "Undang-Undang Nomor 2 Tahun 2002".into(),
                "30 (tiga puluh) hari".into(),
                "Pasal 220 KUHP".into(),
            ],
            bold_patterns: vec![
                r"undang-undang\s+nomor\s+\d+\s+tahun\s+\d{4}".into(),
                r"pasal\s+\d+\s+kuhp".into(),
                r"remix\s*/\s*house\s+musik".into(),
                r"\bdilarang\b".into(),
                r"\d+\s+\(\w+(\s+\w+)*\)\s+hari".into(),
                r"izin\s+(ini\s+)?dapat\s+dicabut".into(),
                r"bukan\s+merupakan\s+pengganti".into(),
            ],
            underline: UnderlinePhrase::default(),
        }
    }
}

/// Dash-fill padding after label/value rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    /// Glyph string repeated to pad out the row.
    pub glyph: String,
    /// Gap between the value and the first filler glyph, in millimetres.
    pub gap_mm: f32,
    /// Minimum span worth filling, in millimetres.
    pub epsilon_mm: f32,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            glyph: "-".into(),
            gap_mm: 1.0,
            epsilon_mm: 1.5,
        }
    }
}

/// The issuing police unit: letterhead text and signing titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeProfile {
    /// Letterhead lines, top to bottom.
    pub header_lines: Vec<String>,
    /// Street address printed under the letterhead.
    pub address: Option<String>,
    /// Where letters are issued ("Dikeluarkan di").
    pub city: String,
    /// Unit place name; its abbreviation ends every reference number.
    pub unit_name: String,
    /// Title of the unit commander who signs permits.
    pub commander_title: String,
    /// Title of the front-desk head who acknowledges loss reports.
    pub desk_title: String,
    /// Recipients listed under "Tembusan" on permits.
    pub permit_copies: Vec<String>,
}

impl Default for OfficeProfile {
    fn default() -> Self {
        Self {
            header_lines: vec![
                "KEPOLISIAN NEGARA REPUBLIK INDONESIA".into(),
                "DAERAH SUMATERA UTARA".into(),
                "RESOR KOTA BESAR MEDAN".into(),
                "SEKTOR MEDAN BARU".into(),
            ],
            address: Some("Jalan Sei Batang Hari No. 2, Medan 20122".into()),
            city: "Medan".into(),
            unit_name: "Medan Baru".into(),
            commander_title: "KEPALA KEPOLISIAN SEKTOR MEDAN BARU".into(),
            desk_title: "KEPALA SENTRA PELAYANAN KEPOLISIAN TERPADU".into(),
            permit_copies: vec![
                "Kapolrestabes Medan".into(),
                "Camat Medan Baru".into(),
                "Lurah setempat".into(),
            ],
        }
    }
}

impl EngineConfig {
    /// Load a configuration file, filling unspecified keys with defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        info!(path = %path.display(), "Loaded engine configuration");
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        debug!(path = %path.as_ref().display(), "Saved engine configuration");
        Ok(())
    }

    /// Reject configurations the fitter or the page model cannot work with.
    pub fn validate(&self) -> Result<()> {
        let scales = &self.autoscale.candidates;
        if scales.is_empty() {
            return Err(WarkatError::Config("no scale candidates configured".into()));
        }
        if let Some(bad) = scales.iter().find(|s| !(**s > 0.0 && **s <= 1.0)) {
            return Err(WarkatError::Config(format!(
                "scale candidate {bad} outside (0, 1]"
            )));
        }

        let page = self.page_geometry();
        if page.content_width() <= 0.0 || page.safe_bottom() <= page.top {
            return Err(WarkatError::Config(
                "margins leave no room for content".into(),
            ));
        }

        if self.fill.glyph.is_empty() {
            return Err(WarkatError::Config("dash-fill glyph is empty".into()));
        }
        Ok(())
    }

    pub fn page_geometry(&self) -> PageGeometry {
        PageGeometry::new(self.paper.size, self.paper.margins)
    }
}
