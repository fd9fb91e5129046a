// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// warkat-letters: the two letter types Warkat issues, and the Indonesian
// formatting they share.
//
// - `permit`: SURAT IZIN for crowd events, with the applicant's statement.
// - `loss_report`: acknowledgement of a reported loss (STPLK).
// - `calendar`, `spell`, `roman`, `numbering`: dates, number words and
//   reference numbers.

pub mod abbrev;
pub mod calendar;
pub mod loss_report;
pub mod model;
pub mod numbering;
pub mod permit;
pub mod roman;
pub mod spell;
pub mod text;

pub use loss_report::LossReportFields;
pub use model::{LetterModel, render_letter};
pub use numbering::ReferenceNumber;
pub use permit::PermitFields;
