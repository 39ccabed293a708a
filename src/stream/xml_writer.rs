use crate::error::Error;
use crate::record::Record;
use std::io::Write;

pub trait XmlWriter {
    fn convert_xml(&self, indent: usize) -> String;
}
impl XmlWriter for Record {
    fn convert_xml(&self, indent: usize) -> String {
        let indent_str = "\t".repeat(indent);
        let mut xml = String::new();
        xml.push_str(&format!("{}{}\n", indent_str, self.key_line()));
        xml.push_str(&format!("{}{}\n", indent_str, self.string_line()));
        xml
    }
}

/// Output sink for `<key>`/`<string>` pairs. Nothing is wrapped around them.
pub struct FragmentWriter<W: Write> {
    output: W,
    indent: usize,
}
impl<W: Write> FragmentWriter<W> {
    pub fn new(output: W) -> Self {
        FragmentWriter { output, indent: 0 }
    }
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
    pub fn write_banner(&mut self, source: &str) -> Result<(), Error> {
        writeln!(self.output, "Name of the file:  {}", source)?;
        writeln!(self.output)?;
        Ok(())
    }
    pub fn write_record(&mut self, record: &Record) -> Result<(), Error> {
        self.output
            .write_all(record.convert_xml(self.indent).as_bytes())?;
        Ok(())
    }
    pub fn flush(&mut self) -> Result<(), Error> {
        self.output.flush()?;
        Ok(())
    }
    pub fn into_inner(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod xml_writer_test {
    use super::*;

    fn record(name: &str, code: &str) -> Record {
        Record {
            name: name.to_string(),
            code: code.to_string(),
        }
    }

    #[test]
    fn test_convert_xml() {
        let record = record("Japan", "JP");
        assert_eq!(record.convert_xml(0), "<key>JP</key>\n<string>Japan</string>\n");
        assert_eq!(
            record.convert_xml(2),
            "\t\t<key>JP</key>\n\t\t<string>Japan</string>\n"
        );
    }

    #[test]
    fn test_fragment_writer() {
        let mut writer = FragmentWriter::new(vec![]);
        writer.write_banner("countrytocode.txt").unwrap();
        writer.write_record(&record("Fiji", "FJ")).unwrap();
        writer.flush().unwrap();
        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            output,
            "Name of the file:  countrytocode.txt\n\n<key>FJ</key>\n<string>Fiji</string>\n"
        );
    }

    #[test]
    fn test_fragment_writer_indent() {
        let mut writer = FragmentWriter::new(vec![]).with_indent(1);
        writer.write_record(&record("Fiji", "FJ")).unwrap();
        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "\t<key>FJ</key>\n\t<string>Fiji</string>\n");
    }
}
