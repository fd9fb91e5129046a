// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The seam between built letters and the layout engine.

use tracing::instrument;
use warkat_core::Official;
use warkat_layout::{
    DrawingSurface, LetterEngine, LetterTemplate, RenderAssets, RenderedDocument, SignatureColumn,
};

use crate::text::{or_dash, present};

/// A letter whose fields are fully formatted and ready to lay out.
pub trait LetterModel {
    /// Short name for logs (`permit`, `loss-report`).
    fn kind(&self) -> &'static str;

    fn template(&self) -> LetterTemplate;

    /// Weighted size of the free-text content, for the starting scale.
    fn content_weight(&self) -> f32;

    fn reference_number(&self) -> &str;

    /// Applicant or reporter named in the output filename.
    fn subject_name(&self) -> &str;
}

/// Lay out `model` with automatic scaling.
#[instrument(skip_all, fields(kind = model.kind(), reference = model.reference_number()))]
pub fn render_letter<M, S, F>(
    engine: &LetterEngine,
    model: &M,
    assets: &RenderAssets,
    make_surface: F,
) -> RenderedDocument<S>
where
    M: LetterModel + ?Sized,
    S: DrawingSurface,
    F: FnMut() -> S,
{
    engine.render(&model.template(), model.content_weight(), assets, make_surface)
}

/// `AKP NRP 78050123`; `None` when both parts are missing.
pub fn rank_line(official: &Official) -> Option<String> {
    let rank = present(official.rank.as_deref());
    let nrp = present(official.nrp.as_deref()).map(|n| format!("NRP {n}"));
    match (rank, nrp) {
        (Some(rank), Some(nrp)) => Some(format!("{rank} {nrp}")),
        (Some(rank), None) => Some(rank.to_owned()),
        (None, nrp) => nrp,
    }
}

/// Signature column for an official. The official's own title wins over
/// `default_title`.
pub fn official_column(
    official: &Official,
    preamble: Vec<String>,
    default_title: &str,
) -> SignatureColumn {
    let title = present(official.title.as_deref()).unwrap_or(default_title);
    SignatureColumn {
        preamble,
        heading: vec![title.to_uppercase()],
        name: or_dash(official.name.as_deref()),
        detail: rank_line(official).into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn official(rank: Option<&str>, nrp: Option<&str>) -> Official {
        Official {
            name: Some("Budi Santoso".into()),
            rank: rank.map(Into::into),
            nrp: nrp.map(Into::into),
            title: None,
        }
    }

    #[test]
    fn rank_line_combines_parts() {
        assert_eq!(
            rank_line(&official(Some("AKP"), Some("78050123"))).as_deref(),
            Some("AKP NRP 78050123")
        );
        assert_eq!(rank_line(&official(None, Some("1"))).as_deref(), Some("NRP 1"));
        assert_eq!(rank_line(&official(Some(" "), None)), None);
    }

    #[test]
    fn column_falls_back_to_default_title() {
        let column = official_column(&official(Some("IPTU"), None), vec![], "Kepala Seksi");
        assert_eq!(column.heading, vec!["KEPALA SEKSI"]);
        assert_eq!(column.name, "Budi Santoso");
        assert_eq!(column.detail, vec!["IPTU"]);
    }
}
