//! Converts `name, code` text files into property-list `<key>`/`<string>` pairs.
//!
//! ```
//! use countryplist::convert::LineConverter;
//!
//! let mut out = vec![];
//! LineConverter::new()
//!     .convert_reader("Canada & Co, CA\n".as_bytes(), &mut out)
//!     .unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "<key>CA</key>\n<string>Canada &amp; Co</string>\n"
//! );
//! ```
pub mod convert;
pub mod error;
pub mod record;
pub mod stream;

pub use convert::{ConvertReport, LineConverter, MalformedPolicy};
pub use error::{Error, RecordError};
pub use record::Record;
