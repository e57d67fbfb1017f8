//! Output document metadata (Info dictionary).

use crate::config::DocumentInfo;
use crate::text::encode_win_ansi;
use lopdf::{Document, Object, StringFormat, dictionary};
use std::time::SystemTime;

/// Stamp the Info dictionary onto a finalized document.
///
/// Sets Title and Creator from `info`, the crate name and version as
/// Producer, and the current time as CreationDate. Strings are encoded
/// WinAnsi so accented titles round-trip.
pub fn set_document_info(doc: &mut Document, info: &DocumentInfo) {
    let date = format_pdf_date(SystemTime::now());
    let producer = format!("docfuse {}", env!("CARGO_PKG_VERSION"));

    let info_dict = dictionary! {
        "Title" => Object::String(encode_win_ansi(&info.title), StringFormat::Literal),
        "Creator" => Object::String(encode_win_ansi(&info.creator), StringFormat::Literal),
        "Producer" => Object::String(producer.into_bytes(), StringFormat::Literal),
        "CreationDate" => Object::String(date.into_bytes(), StringFormat::Literal),
    };

    let info_id = doc.add_object(info_dict);
    doc.trailer.set("Info", Object::Reference(info_id));
}

/// Format a SystemTime as a PDF date string (`D:YYYYMMDDHHMMSSZ`, UTC).
fn format_pdf_date(time: SystemTime) -> String {
    use std::time::UNIX_EPOCH;

    let secs = time.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();

    // Civil-date conversion without a calendar crate; days since epoch
    // through the standard era/day-of-era decomposition.
    let days = secs / 86_400;
    let time_of_day = secs % 86_400;

    let z = days as i64 + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    format!(
        "D:{:04}{:02}{:02}{:02}{:02}{:02}Z",
        year,
        month,
        day,
        time_of_day / 3_600,
        (time_of_day % 3_600) / 60,
        time_of_day % 60
    )
}
