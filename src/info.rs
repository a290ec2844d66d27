use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date as PDate, Pdf, Ref, TextStr};

/// Metadata written into the PDF's document information dictionary
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Adobe Acrobat suggests a comma separated list
    pub keywords: Option<String>,
    /// Creation timestamp; the local time of writing when [None]
    pub created: Option<DateTime<FixedOffset>>,
}

impl Info {
    pub fn new() -> Info {
        Info::default()
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author<S: Into<String>>(mut self, author: S) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_keywords<S: Into<String>>(mut self, keywords: S) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Pin the creation date instead of stamping the time of writing
    pub fn created_at(mut self, created: DateTime<FixedOffset>) -> Self {
        self.created = Some(created);
        self
    }

    pub(crate) fn write(&self, id: Ref, writer: &mut Pdf) {
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        let created = self
            .created
            .unwrap_or_else(|| Local::now().fixed_offset());
        info.creation_date(pdf_date(created));
    }
}

/// Convert a timestamp to a PDF date, keeping its UTC offset
fn pdf_date(at: DateTime<FixedOffset>) -> PDate {
    let offset_seconds = at.offset().local_minus_utc();
    let offset_hours = offset_seconds / (60 * 60);
    let offset_minutes = ((offset_seconds - offset_hours * 60 * 60) / 60).abs();

    PDate::new(at.year() as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(info: &Info) -> String {
        let mut writer = Pdf::new();
        info.write(Ref::new(1), &mut writer);
        String::from_utf8_lossy(&writer.finish()).into_owned()
    }

    #[test]
    fn only_set_fields_are_written() {
        let pdf = written(&Info::new().with_title("Resumo"));
        assert!(pdf.contains("/Title (Resumo)"));
        assert!(!pdf.contains("/Author"));
        assert!(pdf.contains("/Creator (onepage v"));
        assert!(pdf.contains("/CreationDate"));
    }

    #[test]
    fn pinned_creation_date_keeps_its_offset() {
        let created = DateTime::parse_from_rfc3339("2026-02-03T04:05:06-03:30").unwrap();
        let pdf = written(&Info::new().created_at(created));
        assert!(pdf.contains("/CreationDate (D:20260203040506-03'30"), "{pdf}");
    }
}
