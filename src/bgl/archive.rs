use std::collections::BTreeMap;

use crate::bgl::{BglHeader, ObjectIter, Record, RecordIter, Result};

/// Borrowed, header-validated view over one archive buffer.
#[derive(Debug, Clone, Copy)]
pub struct Archive<'a> {
	/// Parsed file header.
	pub header: BglHeader,
	bytes: &'a [u8],
}

impl<'a> Archive<'a> {
	/// Validate the header and wrap `bytes`.
	pub fn parse(bytes: &'a [u8]) -> Result<Self> {
		let header = BglHeader::parse(bytes)?;
		Ok(Self { header, bytes })
	}

	pub(crate) fn from_parts(header: BglHeader, bytes: &'a [u8]) -> Self {
		Self { header, bytes }
	}

	/// Whole-file bytes.
	pub fn bytes(&self) -> &'a [u8] {
		self.bytes
	}

	/// All record descriptors in file order.
	pub fn records(&self) -> RecordIter<'a> {
		RecordIter::new(self.bytes, BglHeader::SIZE, self.header.record_count)
	}

	/// Records whose type tag equals `record_type`, in file order.
	pub fn records_of_type(&self, record_type: u32) -> impl Iterator<Item = Record> + 'a {
		self.records().filter(move |record| record.record_type == record_type)
	}

	/// Model-data records, in file order.
	pub fn model_data_records(&self) -> impl Iterator<Item = Record> + 'a {
		self.records().filter(Record::is_model_data)
	}

	/// Object entries of one model-data record.
	pub fn objects(&self, record: &Record) -> ObjectIter<'a> {
		ObjectIter::new(self.bytes, record)
	}

	/// Count readable records per type tag.
	pub fn scan_record_stats(&self) -> RecordStats {
		let mut stats = RecordStats {
			declared: self.header.record_count,
			read: 0,
			by_type: BTreeMap::new(),
		};

		for record in self.records() {
			stats.read += 1;
			*stats.by_type.entry(record.record_type).or_insert(0) += 1;
		}

		stats
	}
}

/// Record table summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStats {
	/// Record count declared in the header.
	pub declared: u32,
	/// Descriptors that fit in the buffer.
	pub read: u32,
	/// Readable descriptors per type tag.
	pub by_type: BTreeMap<u32, u32>,
}

#[cfg(test)]
mod tests;
