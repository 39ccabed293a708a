use crate::error::{Error, RecordError};
use crate::record::Record;
use crate::stream::line_reader::LineReader;
use crate::stream::xml_writer::FragmentWriter;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// What to do with a line that does not split into exactly `name, code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Stop at the first malformed line. Output already written is kept.
    #[default]
    FailFast,
    /// Log a warning, write nothing for the line and keep going.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertReport {
    pub records: usize,
    pub skipped: usize,
    pub blank: usize,
}

/// Turns `name, code` lines into `<key>code</key>` / `<string>name</string>` pairs.
#[derive(Debug, Clone, Default)]
pub struct LineConverter {
    policy: MalformedPolicy,
    banner: bool,
    indent: usize,
}

impl LineConverter {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }
    /// Print `Name of the file:  <path>` and a blank line before the records.
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Converts one line into its key line and string line, in that order.
    pub fn convert(line: &str) -> Result<(String, String), RecordError> {
        let record = Record::parse(line)?;
        Ok((record.key_line(), record.string_line()))
    }

    pub fn convert_reader<R: BufRead, W: Write>(
        &self,
        reader: R,
        out: W,
    ) -> Result<ConvertReport, Error> {
        let mut writer = FragmentWriter::new(out).with_indent(self.indent);
        self.convert_lines(reader, &mut writer)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(BufReader::new(file))
    }

    /// Converts the file at `path`. Fails with [`Error::FileOpen`] before writing anything
    /// if it cannot be opened.
    pub fn run<P: AsRef<Path>, W: Write>(&self, path: P, out: W) -> Result<ConvertReport, Error> {
        let path = path.as_ref();
        let reader = Self::open(path)?;
        self.run_opened(path, reader, out)
    }

    /// Like [`run`](Self::run) for an input already opened with [`open`](Self::open), so callers
    /// can make sure the input exists before creating their output.
    pub fn run_opened<R: BufRead, W: Write>(
        &self,
        path: &Path,
        reader: R,
        out: W,
    ) -> Result<ConvertReport, Error> {
        info!(path = %path.display(), policy = ?self.policy, "converting");
        let mut writer = FragmentWriter::new(out).with_indent(self.indent);
        if self.banner {
            writer.write_banner(&path.display().to_string())?;
        }
        self.convert_lines(reader, &mut writer)
    }

    fn convert_lines<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut FragmentWriter<W>,
    ) -> Result<ConvertReport, Error> {
        let mut report = ConvertReport::default();
        for line in LineReader::new(reader) {
            let line = line?;
            if line.text.is_empty() {
                debug!(line = line.number, "empty line");
                report.blank += 1;
                continue;
            }
            match Record::parse(&line.text) {
                Ok(record) => {
                    debug!(line = line.number, code = %record.code, "record");
                    writer.write_record(&record)?;
                    report.records += 1;
                }
                Err(source) => match self.policy {
                    MalformedPolicy::FailFast => {
                        writer.flush()?;
                        return Err(Error::malformed(line.number, &line.text, source));
                    }
                    MalformedPolicy::Skip => {
                        warn!(line = line.number, text = %line.text, "skipping malformed line: {}", source);
                        report.skipped += 1;
                    }
                },
            }
        }
        writer.flush()?;
        info!(
            records = report.records,
            skipped = report.skipped,
            blank = report.blank,
            "conversion finished"
        );
        Ok(report)
    }
}
