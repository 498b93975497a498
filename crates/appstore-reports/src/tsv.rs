//! Tab-separated report decoding.
//!
//! Report files carry a header row naming each column, followed by data rows
//! and, for some reports, trailing `Total_*` aggregate rows whose column count
//! differs from the data rows. Decoding stops at the first aggregate row.

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::DecodeError;

pub const FOOTER_PREFIX: &str = "Total_";

/// Reader settings for report tables, handed to decoders at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TsvDialect {
    pub delimiter: u8,
    pub footer_prefix: &'static str,
}

impl Default for TsvDialect {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            footer_prefix: FOOTER_PREFIX,
        }
    }
}

impl TsvDialect {
    /// Reader factory. Quote characters are plain data anywhere in a cell,
    /// including at its start.
    pub fn reader_builder(&self, flexible: bool) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(flexible)
            .quoting(false);
        builder
    }

    fn writer_builder(&self) -> WriterBuilder {
        let mut builder = WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .flexible(true)
            .quote_style(QuoteStyle::Never);
        builder
    }

    fn is_footer(&self, record: &StringRecord) -> bool {
        record
            .get(0)
            .is_some_and(|first| first.starts_with(self.footer_prefix))
    }

    /// Copies rows up to (not including) the first footer row.
    pub fn strip_footer(&self, data: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut reader = self.reader_builder(true).from_reader(data);
        let mut writer = self.writer_builder().from_writer(Vec::with_capacity(data.len()));
        let mut kept = 0_usize;

        for record in reader.records() {
            let record = record.map_err(|err| DecodeError::Tsv(err.to_string()))?;
            if self.is_footer(&record) {
                debug!(kept_rows = kept, "truncating report at footer row");
                break;
            }
            writer
                .write_record(&record)
                .map_err(|err| DecodeError::Tsv(err.to_string()))?;
            kept += 1;
        }

        writer
            .into_inner()
            .map_err(|err| DecodeError::Tsv(err.to_string()))
    }

    /// Parses the header and every data row, rejecting rows whose column
    /// count differs from the header.
    pub fn read_table(&self, data: &[u8]) -> Result<(StringRecord, Vec<StringRecord>), DecodeError> {
        let filtered = self.strip_footer(data)?;
        let mut reader = self.reader_builder(false).from_reader(filtered.as_slice());
        let mut records = reader.records();

        let header = match records.next() {
            Some(header) => header.map_err(|err| DecodeError::Tsv(err.to_string()))?,
            None => return Ok((StringRecord::new(), Vec::new())),
        };
        let rows = records
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| DecodeError::Tsv(err.to_string()))?;
        Ok((header, rows))
    }

    /// Maps each row onto `T` by exact header name.
    pub fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<Vec<T>, DecodeError> {
        let (header, rows) = self.read_table(data)?;
        let decoded = rows
            .iter()
            .map(|row| {
                row.deserialize::<T>(Some(&header))
                    .map_err(|err| DecodeError::Tsv(err.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(rows = decoded.len(), "decoded report rows");
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::scalar::{ReportDate, ReportFloat, ReportInteger};

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(rename = "Title")]
        title: String,
        #[serde(rename = "Quantity")]
        quantity: ReportInteger,
        #[serde(rename = "Partner Share")]
        partner_share: ReportFloat,
        #[serde(rename = "Start Date")]
        start_date: ReportDate,
    }

    const TABLE: &str = "Start Date\tTitle\tQuantity\tPartner Share\n\
        10/05/2020\tfoo\t1\t3.15\n\
        2020-10-06\tbar\t2\t0.7\n\
        Total_Rows\t2\n\
        Total_Amount\t4.55\n";

    #[test]
    fn stops_before_footer_rows() {
        let rows: Vec<Row> = TsvDialect::default()
            .decode(TABLE.as_bytes())
            .expect("footer rows must be skipped");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "foo");
        assert_eq!(rows[0].quantity.value(), 1);
        assert_eq!(rows[0].partner_share.value(), 3.1500000953674316);
        assert_eq!(rows[1].start_date.to_string(), "2020-10-06");
    }

    #[test]
    fn strip_footer_keeps_header_and_data() {
        let stripped = TsvDialect::default()
            .strip_footer(TABLE.as_bytes())
            .expect("well-formed table");
        let text = String::from_utf8(stripped).expect("utf-8");
        assert_eq!(text.lines().count(), 3);
        assert!(!text.contains("Total_"));
    }

    #[test]
    fn rejects_rows_with_mismatched_column_count() {
        let table = "Title\tQuantity\nfoo\t1\nbar\n";
        let err = TsvDialect::default()
            .decode::<Row>(table.as_bytes())
            .expect_err("short row must fail");
        assert!(matches!(err, DecodeError::Tsv(_)));
    }

    #[test]
    fn missing_columns_default_and_unknown_columns_are_ignored() {
        let table = "Title\tUnrelated\nfoo\tx\n";
        let rows: Vec<Row> = TsvDialect::default()
            .decode(table.as_bytes())
            .expect("partial header");
        assert_eq!(rows[0].title, "foo");
        assert_eq!(rows[0].quantity.value(), 0);
        assert!(rows[0].start_date.is_zero());
    }

    #[test]
    fn embedded_quotes_are_literal() {
        let table = "Title\tQuantity\nsay \"hi\" now\t3\n";
        let rows: Vec<Row> = TsvDialect::default()
            .decode(table.as_bytes())
            .expect("lazy quotes");
        assert_eq!(rows[0].title, "say \"hi\" now");
    }

    #[test]
    fn leading_quotes_survive_footer_stripping() {
        let table = "Title\tQuantity\n\"Best\" App\t1\nplain\t2\nTotal_Rows\t2\n";
        let dialect = TsvDialect::default();

        let stripped = dialect.strip_footer(table.as_bytes()).expect("well-formed table");
        assert_eq!(stripped, b"Title\tQuantity\n\"Best\" App\t1\nplain\t2\n");

        let rows: Vec<Row> = dialect.decode(table.as_bytes()).expect("quoted title");
        let titles: Vec<&str> = rows.iter().map(|row| row.title.as_str()).collect();
        assert_eq!(titles, ["\"Best\" App", "plain"]);
    }

    #[test]
    fn scalar_errors_surface_as_tsv_errors() {
        let table = "Title\tQuantity\nfoo\tmany\n";
        let err = TsvDialect::default()
            .decode::<Row>(table.as_bytes())
            .expect_err("non-numeric quantity");
        assert!(err.to_string().contains("cannot parse 'many' as integer"));
    }

    #[test]
    fn empty_payload_yields_no_rows() {
        let rows: Vec<Row> = TsvDialect::default().decode(b"").expect("empty payload");
        assert!(rows.is_empty());
    }
}
