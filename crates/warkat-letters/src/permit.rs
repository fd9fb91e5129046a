// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Crowd-event permit letter (`SURAT IZIN`): the permit itself on page one and
// the applicant's statement of compliance on page two.

use chrono::NaiveDate;
use tracing::debug;
use warkat_core::config::OfficeProfile;
use warkat_core::{Parties, PermitRecord};
use warkat_layout::{Block, LetterTemplate, SignatureBlock, SignatureColumn, content_weight};

use crate::calendar::{self, date_or_dash, day_date_or_dash, time_or_dash};
use crate::model::{LetterModel, official_column};
use crate::numbering::ReferenceNumber;
use crate::spell::with_words;
use crate::text::{DASH, join_present, or_dash, present};

pub const PREFIX: &str = "SI";

const LEGAL_BASIS: [&str; 2] = [
    "Undang-Undang Nomor 2 Tahun 2002 tentang Kepolisian Negara Republik Indonesia.",
    "Peraturan Pemerintah Nomor 60 Tahun 2017 tentang Tata Cara Perizinan dan Pengawasan \
     Kegiatan Keramaian Umum, Kegiatan Masyarakat Lainnya, dan Pemberitahuan Kegiatan Politik.",
];

/// Every string the permit prints, formatted once.
#[derive(Debug, Clone)]
pub struct PermitFields {
    pub reference: String,
    pub office: OfficeProfile,
    pub issued_place: String,
    pub issued_date: String,
    pub application_date: String,

    pub applicant_name: String,
    pub applicant_birth: String,
    pub applicant_occupation: String,
    pub applicant_nik: String,
    pub applicant_phone: String,
    pub applicant_address: String,
    pub organization: String,

    pub event_name: String,
    pub entertainment: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub guest_count: String,
    pub purpose: String,

    pub signer: SignatureColumn,
}

impl PermitFields {
    /// Format `record`. The letter is dated by the record's creation time,
    /// or `today` when that is missing or unreadable.
    pub fn build(
        record: &PermitRecord,
        parties: &Parties,
        office: &OfficeProfile,
        today: NaiveDate,
    ) -> Self {
        let issued_on = record
            .created_at
            .as_deref()
            .and_then(calendar::parse_date)
            .unwrap_or(today);

        let reference = match present(record.reference_number.as_deref()) {
            Some(number) => number.to_owned(),
            None => ReferenceNumber::new(PREFIX, record.sequence, issued_on, &office.unit_name)
                .to_string(),
        };
        let issued_date = calendar::long_date(issued_on);

        let birth_date = present(record.applicant_birth_date.as_deref())
            .and_then(calendar::parse_date)
            .map(calendar::long_date);

        let signer = official_column(
            &parties.signer,
            vec![
                format!("Dikeluarkan di : {}", office.city),
                format!("Pada tanggal : {issued_date}"),
            ],
            &office.commander_title,
        );

        let fields = Self {
            reference,
            office: office.clone(),
            issued_place: office.city.clone(),
            application_date: date_or_dash(record.created_at.as_deref()),
            issued_date,

            applicant_name: or_dash(record.applicant_name.as_deref()),
            applicant_birth: join_present(
                &[record.applicant_birth_place.as_deref(), birth_date.as_deref()],
                ", ",
            ),
            applicant_occupation: or_dash(record.applicant_occupation.as_deref()),
            applicant_nik: or_dash(record.applicant_nik.as_deref()),
            applicant_phone: or_dash(record.applicant_phone.as_deref()),
            applicant_address: or_dash(record.applicant_address.as_deref()),
            organization: or_dash(record.organization.as_deref()),

            event_name: or_dash(record.event_name.as_deref()),
            entertainment: or_dash(record.entertainment.as_deref()),
            event_date: event_dates(
                record.event_date.as_deref(),
                record.event_end_date.as_deref(),
            ),
            event_time: event_times(record.start_time.as_deref(), record.end_time.as_deref()),
            location: or_dash(record.location.as_deref()),
            guest_count: record
                .guest_count
                .map(|n| format!("{} orang", with_words(u64::from(n))))
                .unwrap_or_else(|| DASH.to_owned()),
            purpose: or_dash(record.purpose.as_deref()),

            signer,
        };
        debug!(reference = %fields.reference, "Permit fields built");
        fields
    }

    fn applicant_rows(&self) -> Vec<(&str, &str)> {
        vec![
            ("Nama", self.applicant_name.as_str()),
            ("Tempat/Tgl. Lahir", self.applicant_birth.as_str()),
            ("Pekerjaan", self.applicant_occupation.as_str()),
            ("NIK", self.applicant_nik.as_str()),
            ("Alamat", self.applicant_address.as_str()),
        ]
    }

    fn permit_page(&self) -> Vec<Block> {
        let mut kepada = self.applicant_rows();
        kepada.push(("No. HP", self.applicant_phone.as_str()));
        kepada.push(("Organisasi", self.organization.as_str()));

        let untuk = vec![
            ("Kegiatan", self.event_name.as_str()),
            ("Hiburan", self.entertainment.as_str()),
            ("Dalam rangka", self.purpose.as_str()),
            ("Hari/Tanggal", self.event_date.as_str()),
            ("Waktu", self.event_time.as_str()),
            ("Tempat", self.location.as_str()),
            ("Undangan", self.guest_count.as_str()),
        ];

        let conditions = vec![
            "Pemegang izin wajib menjaga keamanan, ketertiban dan kebersihan di lokasi \
             kegiatan serta berkoordinasi dengan Bhabinkamtibmas setempat."
                .to_owned(),
            "Dilarang memutar musik REMIX / HOUSE MUSIK, menyediakan minuman keras, \
             narkoba maupun segala bentuk perjudian."
                .to_owned(),
            "Kegiatan selesai tepat pada waktunya dan tidak mengganggu ketertiban umum."
                .to_owned(),
            "Apabila ketentuan di atas dilanggar, izin ini dapat dicabut dan pemegang izin \
             dapat dituntut sesuai peraturan perundang-undangan yang berlaku."
                .to_owned(),
            "Surat izin ini bukan merupakan pengganti izin dari instansi lain yang berwenang."
                .to_owned(),
        ];

        vec![
            Block::Letterhead {
                lines: self.office.header_lines.clone(),
                address: self.office.address.clone(),
            },
            Block::Title {
                text: "SURAT IZIN".into(),
                subtitle: Some(format!("Nomor : {}", self.reference)),
                underline: true,
            },
            Block::Labeled {
                label: "Pertimbangan".into(),
                items: vec![format!(
                    "Surat permohonan Sdr. {} tanggal {} perihal permohonan izin keramaian.",
                    self.applicant_name, self.application_date
                )],
                numbered: false,
            },
            Block::numbered("Dasar", LEGAL_BASIS.iter().map(|s| (*s).to_owned()).collect()),
            Block::Centered {
                text: "MEMBERIKAN IZIN".into(),
                bold: true,
                underline: false,
            },
            Block::KeyValues {
                rows: owned_rows(&kepada),
                fill: true,
                indent_mm: 0.0,
            },
            Block::Paragraph {
                text: "Untuk menyelenggarakan kegiatan keramaian umum sebagai berikut :".into(),
                justify: false,
                indent_mm: 0.0,
            },
            Block::KeyValues {
                rows: owned_rows(&untuk),
                fill: true,
                indent_mm: 0.0,
            },
            Block::numbered("Ketentuan", conditions),
            Block::paragraph(
                "Demikian surat izin ini diberikan untuk dapat dipergunakan sebagaimana mestinya.",
            ),
            Block::Signature(SignatureBlock {
                left: None,
                right: self.signer.clone(),
                below: None,
            }),
            Block::numbered("Tembusan", self.office.permit_copies.clone()),
        ]
    }

    fn statement_page(&self) -> Vec<Block> {
        let pledges = vec![
            format!(
                "Mematuhi seluruh ketentuan yang tercantum dalam Surat Izin Nomor {}.",
                self.reference
            ),
            "Tidak memutar musik REMIX / HOUSE MUSIK serta tidak menyediakan minuman keras, \
             narkoba maupun perjudian selama kegiatan berlangsung."
                .to_owned(),
            "Bertanggung jawab penuh atas keamanan dan ketertiban selama kegiatan berlangsung."
                .to_owned(),
            "Bersedia izin ini dicabut dan dituntut sesuai peraturan perundang-undangan yang \
             berlaku apabila melanggar pernyataan ini."
                .to_owned(),
        ];

        vec![
            Block::Title {
                text: "SURAT PERNYATAAN".into(),
                subtitle: None,
                underline: true,
            },
            Block::Paragraph {
                text: "Yang bertanda tangan di bawah ini :".into(),
                justify: false,
                indent_mm: 0.0,
            },
            Block::KeyValues {
                rows: owned_rows(&self.applicant_rows()),
                fill: false,
                indent_mm: 0.0,
            },
            Block::paragraph(format!(
                "Dengan ini menyatakan bahwa dalam penyelenggaraan kegiatan {} pada {} \
                 bertempat di {}, saya bersedia :",
                self.event_name, self.event_date, self.location
            )),
            Block::numbered("", pledges),
            Block::paragraph(
                "Demikian surat pernyataan ini saya buat dengan sebenarnya tanpa ada paksaan \
                 dari pihak mana pun.",
            ),
            Block::Signature(SignatureBlock {
                left: None,
                right: SignatureColumn {
                    preamble: vec![format!("{}, {}", self.issued_place, self.issued_date)],
                    heading: vec!["Yang membuat pernyataan,".into()],
                    name: self.applicant_name.clone(),
                    detail: Vec::new(),
                },
                below: None,
            }),
        ]
    }
}

impl LetterModel for PermitFields {
    fn kind(&self) -> &'static str {
        "permit"
    }

    fn template(&self) -> LetterTemplate {
        let mut template = LetterTemplate::new(self.kind());
        template.blocks.extend(self.permit_page());
        template.push(Block::PageBreak);
        template.blocks.extend(self.statement_page());
        template
    }

    fn content_weight(&self) -> f32 {
        content_weight(&[
            (self.applicant_address.as_str(), 1.0),
            (self.organization.as_str(), 1.0),
            (self.event_name.as_str(), 1.0),
            (self.entertainment.as_str(), 1.0),
            (self.location.as_str(), 1.0),
            (self.purpose.as_str(), 1.0),
        ])
    }

    fn reference_number(&self) -> &str {
        &self.reference
    }

    fn subject_name(&self) -> &str {
        &self.applicant_name
    }
}

fn owned_rows(rows: &[(&str, &str)]) -> Vec<(String, String)> {
    rows.iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

/// `Sabtu, 24 Oktober 2026`, or a `s.d.` range when the event spans days.
fn event_dates(start: Option<&str>, end: Option<&str>) -> String {
    let first = day_date_or_dash(start);
    let last = day_date_or_dash(end);
    if last == DASH || last == first {
        first
    } else {
        format!("{first} s.d. {last}")
    }
}

/// `19.00 WIB s.d. 23.00 WIB`; an open end reads `s.d. selesai`.
fn event_times(start: Option<&str>, end: Option<&str>) -> String {
    let from = time_or_dash(start);
    if from == DASH {
        return from;
    }
    let until = time_or_dash(end);
    if until == DASH {
        format!("{from} s.d. selesai")
    } else {
        format!("{from} s.d. {until}")
    }
}
