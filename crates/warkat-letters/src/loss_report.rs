// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Loss-report acknowledgement letter (`SURAT TANDA PENERIMAAN LAPORAN
// KEHILANGAN`). Always one page; a long chronology or item list is absorbed by
// the auto-scale controller.

use chrono::NaiveDate;
use tracing::{debug, warn};
use warkat_core::config::OfficeProfile;
use warkat_core::{LossReportRecord, Official, Parties};
use warkat_layout::{Block, LetterTemplate, SignatureBlock, SignatureColumn, content_weight};

use crate::calendar::{self, day_date_or_dash, time_or_dash};
use crate::model::{LetterModel, official_column, rank_line};
use crate::numbering::ReferenceNumber;
use crate::spell::with_words;
use crate::text::{DASH, join_present, or_dash, present};

pub const PREFIX: &str = "STPLK";

/// Items listed on one letter.
pub const MAX_LOST_ITEMS: usize = 5;

/// Days the acknowledgement stays valid.
pub const VALIDITY_DAYS: u64 = 30;

const RECEIVER_HEADING: &str = "YANG MENERIMA LAPORAN";

#[derive(Debug, Clone)]
pub struct LossReportFields {
    pub reference: String,
    pub office: OfficeProfile,
    pub issued_place: String,
    pub issued_date: String,
    pub report_day: String,
    pub report_date: String,
    pub report_time: String,

    pub reporter_name: String,
    pub reporter_nik: String,
    pub reporter_birth: String,
    pub gender: String,
    pub religion: String,
    pub occupation: String,
    pub address: String,
    pub phone: String,

    pub incident_date: String,
    pub incident_time: String,
    pub incident_location: String,
    pub chronology: String,
    pub lost_items: Vec<String>,

    pub receiver: SignatureColumn,
    /// Acknowledging superior, printed under the two columns.
    pub acknowledger: Option<SignatureColumn>,
}

impl LossReportFields {
    /// Format `record`. The letter is dated by the report time, or `today`.
    pub fn build(
        record: &LossReportRecord,
        parties: &Parties,
        office: &OfficeProfile,
        today: NaiveDate,
    ) -> Self {
        let reported = record.reported_at.as_deref().and_then(calendar::parse_datetime);
        let reported_on = record
            .reported_at
            .as_deref()
            .and_then(calendar::parse_date)
            .unwrap_or(today);

        let reference = match present(record.reference_number.as_deref()) {
            Some(number) => number.to_owned(),
            None => ReferenceNumber::new(PREFIX, record.sequence, reported_on, &office.unit_name)
                .to_string(),
        };
        let issued_date = calendar::long_date(reported_on);
        let preamble = vec![format!("{}, {issued_date}", office.city)];

        let (receiver, acknowledger) = match &parties.receiver {
            Some(receiver) => (
                receiver_column(receiver, preamble),
                Some(official_column(
                    &parties.signer,
                    vec!["Mengetahui".into()],
                    &office.desk_title,
                )),
            ),
            None => (
                official_column(&parties.signer, preamble, &office.desk_title),
                None,
            ),
        };

        let birth_date = present(record.birth_date.as_deref())
            .and_then(calendar::parse_date)
            .map(calendar::long_date);

        let fields = Self {
            reference,
            office: office.clone(),
            issued_place: office.city.clone(),
            report_day: calendar::day_name(reported_on).to_owned(),
            report_date: issued_date.clone(),
            report_time: reported
                .map(|dt| calendar::clock(dt.time()))
                .unwrap_or_else(|| DASH.to_owned()),
            issued_date,

            reporter_name: or_dash(record.reporter_name.as_deref()),
            reporter_nik: or_dash(record.reporter_nik.as_deref()),
            reporter_birth: join_present(
                &[record.birth_place.as_deref(), birth_date.as_deref()],
                ", ",
            ),
            gender: or_dash(record.gender.as_deref()),
            religion: or_dash(record.religion.as_deref()),
            occupation: or_dash(record.occupation.as_deref()),
            address: or_dash(record.address.as_deref()),
            phone: or_dash(record.reporter_phone.as_deref()),

            incident_date: day_date_or_dash(record.incident_date.as_deref()),
            incident_time: time_or_dash(record.incident_time.as_deref()),
            incident_location: or_dash(record.incident_location.as_deref()),
            chronology: or_dash(record.chronology.as_deref()),
            lost_items: lost_items(&record.lost_items),

            receiver,
            acknowledger,
        };
        debug!(reference = %fields.reference, items = fields.lost_items.len(), "Loss report fields built");
        fields
    }

    fn incident_paragraph(&self) -> String {
        let mut text = format!(
            "Barang tersebut hilang pada hari {} sekitar pukul {} di {}.",
            self.incident_date, self.incident_time, self.incident_location
        );
        if self.chronology != DASH {
            text.push(' ');
            text.push_str(&self.chronology);
        }
        text
    }
}

impl LetterModel for LossReportFields {
    fn kind(&self) -> &'static str {
        "loss-report"
    }

    fn template(&self) -> LetterTemplate {
        let identity = [
            ("Nama", self.reporter_name.as_str()),
            ("NIK", self.reporter_nik.as_str()),
            ("Tempat/Tgl. Lahir", self.reporter_birth.as_str()),
            ("Jenis Kelamin", self.gender.as_str()),
            ("Agama", self.religion.as_str()),
            ("Pekerjaan", self.occupation.as_str()),
            ("Alamat", self.address.as_str()),
            ("No. HP", self.phone.as_str()),
        ];

        let reporter = SignatureColumn {
            preamble: Vec::new(),
            heading: vec!["PELAPOR".into()],
            name: self.reporter_name.clone(),
            detail: Vec::new(),
        };

        LetterTemplate::new(self.kind())
            .with(Block::Letterhead {
                lines: self.office.header_lines.clone(),
                address: self.office.address.clone(),
            })
            .with(Block::Title {
                text: "SURAT TANDA PENERIMAAN LAPORAN KEHILANGAN".into(),
                subtitle: Some(format!("Nomor : {}", self.reference)),
                underline: true,
            })
            .with(Block::paragraph(format!(
                "Pada hari ini {} tanggal {} sekitar pukul {}, telah datang ke Kantor \
                 Kepolisian Sektor {} seorang pelapor dengan identitas sebagai berikut :",
                self.report_day, self.report_date, self.report_time, self.office.unit_name
            )))
            .with(Block::key_values(identity, false))
            .with(Block::Paragraph {
                text: "Melaporkan telah kehilangan barang berupa :".into(),
                justify: false,
                indent_mm: 0.0,
            })
            .with(Block::numbered("", self.lost_items.clone()))
            .with(Block::paragraph(self.incident_paragraph()))
            .with(Block::paragraph(format!(
                "Surat Tanda Penerimaan Laporan Kehilangan ini berlaku selama {} hari sejak \
                 tanggal dikeluarkan dan bukan merupakan pengganti barang atau surat yang hilang. \
                 Apabila keterangan pelapor ternyata tidak benar, pelapor dapat dituntut \
                 berdasarkan Pasal 220 KUHP.",
                with_words(VALIDITY_DAYS)
            )))
            .with(Block::paragraph(
                "Demikian surat tanda penerimaan laporan ini dibuat untuk dapat dipergunakan \
                 seperlunya.",
            ))
            .with(Block::Signature(SignatureBlock {
                left: Some(reporter),
                right: self.receiver.clone(),
                below: self.acknowledger.clone(),
            }))
    }

    /// Chronology counts once, item text twice (short wrapped lines), plus a
    /// fixed cost per item line.
    fn content_weight(&self) -> f32 {
        let items: f32 = self
            .lost_items
            .iter()
            .map(|item| content_weight(&[(item.as_str(), 2.0)]) + 40.0)
            .sum();
        content_weight(&[(self.chronology.as_str(), 1.0)]) + items
    }

    fn reference_number(&self) -> &str {
        &self.reference
    }

    fn subject_name(&self) -> &str {
        &self.reporter_name
    }
}

/// Non-blank items, at most [`MAX_LOST_ITEMS`].
fn lost_items(raw: &[String]) -> Vec<String> {
    let items: Vec<String> = raw
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect();
    if items.len() > MAX_LOST_ITEMS {
        warn!(
            given = items.len(),
            kept = MAX_LOST_ITEMS,
            "Too many lost items, truncating"
        );
    }
    items.into_iter().take(MAX_LOST_ITEMS).collect()
}

/// The receiving officer signs under a fixed heading; their own position, if
/// any, follows it.
fn receiver_column(receiver: &Official, preamble: Vec<String>) -> SignatureColumn {
    let mut heading = vec![RECEIVER_HEADING.to_owned()];
    heading.extend(present(receiver.title.as_deref()).map(str::to_uppercase));
    SignatureColumn {
        preamble,
        heading,
        name: or_dash(receiver.name.as_deref()),
        detail: rank_line(receiver).into_iter().collect(),
    }
}
