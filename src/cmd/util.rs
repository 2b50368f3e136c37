use bgljson::bgl::{BglError, Result};

/// Parse decimal or `0x`-prefixed hex `u32` literal.
pub(crate) fn parse_u32_literal(value: &str) -> Result<u32> {
	let parsed = if let Some(stripped) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		u32::from_str_radix(stripped, 16)
	} else {
		value.parse::<u32>()
	};

	parsed.map_err(|_| BglError::InvalidNumberLiteral { value: value.to_owned() })
}

/// Render a record type tag as fixed-width hex.
pub(crate) fn render_record_type(record_type: u32) -> String {
	format!("0x{record_type:04x}")
}
