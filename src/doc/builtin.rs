use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use phf::{phf_map, phf_set};
use regex::Regex;

use crate::doc::VItemKind;

/// Largest integer a double represents exactly, the default integer bound.
pub const SAFE_INT_MAX: i64 = 9_007_199_254_740_991;

/// Default upper byte length of free-form string types.
pub const STRING_MAX: i64 = 8192;

/// Named string predicate attached to a builtin type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
	/// Even number of hex digits.
	Hex,
	/// Binary digits only.
	Bin,
	/// Decimal digits only.
	Dec,
	/// Unix seconds as 9 to 11 digits.
	Timestamp,
	/// `YYYYMMDD` with optional `-` separators.
	Yyyymmdd,
	/// `YYMMDD` with optional `-` separators.
	Yymmdd,
	/// `HHMMSS` with optional `:` separators.
	Hhmmss,
	/// `HHMM` with optional `:` separator.
	Hhmm,
	/// Mail address.
	Email,
	/// Text parsing as a 64-bit integer.
	IntString,
	/// Text parsing as a double.
	FloatString,
	/// `true`/`false` in any case.
	BoolString,
	/// Lowercase hex UUID, versions 1 to 5.
	Uuid,
	/// ISO 3166-1 alpha-2 country code.
	CountryCode,
	/// ISO 3166-2 subdivision such as `KR-11`.
	Subdivision,
	/// Padded standard base64.
	Base64,
	/// North American style telephone number.
	Telephone,
	/// Empty, or exactly `bits / 4` hex digits.
	HexBits(usize),
}

impl Check {
	/// Whether `text` satisfies the predicate.
	pub fn matches(self, text: &str) -> bool {
		match self {
			Check::Hex => text.len() % 2 == 0 && text.bytes().all(|byte| byte.is_ascii_hexdigit()),
			Check::Bin => text.bytes().all(|byte| matches!(byte, b'0' | b'1')),
			Check::Dec => text.bytes().all(|byte| byte.is_ascii_digit()),
			Check::Timestamp => TIMESTAMP.is_match(text),
			Check::Yyyymmdd => YYYYMMDD.is_match(text),
			Check::Yymmdd => YYMMDD.is_match(text),
			Check::Hhmmss => HHMMSS.is_match(text),
			Check::Hhmm => HHMM.is_match(text),
			Check::Email => EMAIL.is_match(text),
			Check::IntString => text.parse::<i64>().is_ok(),
			Check::FloatString => text.parse::<f64>().is_ok(),
			Check::BoolString => text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false"),
			Check::Uuid => UUID.is_match(text),
			Check::CountryCode => is_country_code(text),
			Check::Subdivision => is_subdivision(text),
			Check::Base64 => STANDARD.decode(text).is_ok(),
			Check::Telephone => TELEPHONE.is_match(text),
			Check::HexBits(bits) => text.is_empty() || (text.len() == bits / 4 && text.bytes().all(|byte| byte.is_ascii_hexdigit())),
		}
	}
}

/// Defaults a builtin type name expands to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Builtin {
	/// Rule kind.
	pub kind: VItemKind,
	/// Lower integer or length bound.
	pub min: i64,
	/// Upper integer or length bound.
	pub max: i64,
	/// Lower float bound.
	pub min_float: f64,
	/// Upper float bound.
	pub max_float: f64,
	/// String predicate.
	pub check: Option<Check>,
}

const fn rule(kind: VItemKind, min: i64, max: i64) -> Builtin {
	Builtin {
		kind,
		min,
		max,
		min_float: f64::MIN,
		max_float: f64::MAX,
		check: None,
	}
}

const fn string(min: i64, max: i64, check: Check) -> Builtin {
	Builtin {
		check: Some(check),
		..rule(VItemKind::String, min, max)
	}
}

static BUILTINS: phf::Map<&'static str, Builtin> = phf_map! {
	"INT" => rule(VItemKind::Int, -SAFE_INT_MAX, SAFE_INT_MAX),
	"UINT" => rule(VItemKind::Int, 0, SAFE_INT_MAX),
	"UNIXTIME" => rule(VItemKind::Int, 0, SAFE_INT_MAX),
	"FLOAT" => rule(VItemKind::Float, 0, 0),
	"NUMBER" => rule(VItemKind::Number, 0, 0),
	"STRING" => rule(VItemKind::String, 0, STRING_MAX),
	"NONEMPTY.STRING" => rule(VItemKind::String, 1, STRING_MAX),
	"BOOL" => rule(VItemKind::Bool, 0, 0),
	"OBJECT" => rule(VItemKind::Object, 0, 0),
	"ARRAY" => rule(VItemKind::Array, 0, SAFE_INT_MAX),
	"NONEMPTY.ARRAY" => rule(VItemKind::Array, 1, SAFE_INT_MAX),
	"HEX" => string(0, STRING_MAX, Check::Hex),
	"BIN" => string(0, STRING_MAX, Check::Bin),
	"DEC" => string(0, STRING_MAX, Check::Dec),
	"TIMESTAMP" => string(0, 10, Check::Timestamp),
	"YYYYMMDD" => string(8, 10, Check::Yyyymmdd),
	"YYMMDD" => string(6, 8, Check::Yymmdd),
	"HHMMSS" => string(6, 8, Check::Hhmmss),
	"HHMM" => string(4, 5, Check::Hhmm),
	"EMAIL" => string(3, 255, Check::Email),
	"INT.STRING" => string(1, 17, Check::IntString),
	"INT_STRING" => string(1, 17, Check::IntString),
	"FLOAT.STRING" => string(1, 24, Check::FloatString),
	"FLOAT_STRING" => string(1, 24, Check::FloatString),
	"BOOL.STRING" => string(4, 5, Check::BoolString),
	"UUID" => string(36, 36, Check::Uuid),
	"ISO31661A2" => string(2, 2, Check::CountryCode),
	"ISO31662" => string(5, 5, Check::Subdivision),
	"BASE64" => string(0, STRING_MAX, Check::Base64),
	"TELEPHONE" => string(4, 20, Check::Telephone),
};

/// Resolve a builtin type name, including the `HEXnn.IF.EXIST` family.
pub fn lookup(name: &str) -> Option<Builtin> {
	BUILTINS.get(name).copied().or_else(|| hex_if_exist(name))
}

/// `HEXnn.IF.EXIST`: `nn` is a bit width, a positive multiple of 8.
fn hex_if_exist(name: &str) -> Option<Builtin> {
	let bits = name.strip_prefix("HEX")?.strip_suffix(".IF.EXIST")?;
	if bits.is_empty() || !bits.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	let bits = bits.parse::<usize>().ok().filter(|bits| *bits > 0 && bits % 8 == 0)?;
	let digits = i64::try_from(bits / 4).ok()?;
	Some(string(0, digits, Check::HexBits(bits)))
}

static COUNTRY_CODES: phf::Set<&'static str> = phf_set! {
	"GH", "GA", "GY", "GM", "GG", "GP", "GT", "GU", "GD", "GR", "GL", "GW", "GN", "NA", "NR", "NG", "AQ", "SS", "ZA", "AN", "NL",
	"NP", "NO", "NF", "NC", "NZ", "NU", "NE", "NI", "KR", "DK", "DO", "DM", "DE", "TL", "LA", "LR", "LV", "RU", "LB", "LS", "RE",
	"RO", "LU", "RW", "LY", "LT", "LI", "MG", "MQ", "MH", "YT", "MO", "MW", "MY", "ML", "IM", "MX", "MC", "MA", "MU", "MR", "MZ",
	"ME", "MS", "MD", "MV", "MT", "MN", "UM", "VI", "US", "MM", "FM", "VU", "BH", "BB", "VA", "BS", "BD", "BM", "BJ", "VE", "VN",
	"BE", "BY", "BZ", "BA", "BW", "BO", "BI", "BF", "BV", "BT", "MP", "MK", "BG", "BR", "BN", "WS", "SA", "GS", "SM", "ST", "PM",
	"EH", "SN", "RS", "SC", "LC", "VC", "KN", "SH", "SO", "SB", "SD", "SR", "LK", "SJ", "SE", "CH", "ES", "SK", "SI", "SY", "SL",
	"SX", "SG", "AE", "AW", "AM", "AR", "AS", "IS", "HT", "IE", "AZ", "AF", "AD", "AL", "DZ", "AO", "AG", "AI", "ER", "SZ", "EE",
	"EC", "ET", "SV", "VG", "IO", "GB", "YE", "OM", "AU", "AT", "HN", "AX", "WF", "JO", "UG", "UY", "UZ", "UA", "IQ", "IR", "IL",
	"EG", "IT", "ID", "IN", "JP", "JM", "ZM", "JE", "GQ", "KP", "GE", "CN", "CF", "DJ", "GI", "ZW", "TD", "CZ", "CL", "CM", "CV",
	"KZ", "QA", "KH", "CA", "KE", "KY", "KM", "CR", "CC", "CI", "CO", "CG", "CD", "CU", "KW", "CK", "HR", "CX", "KG", "KI", "CY",
	"TW", "TJ", "TZ", "TH", "TC", "TR", "TG", "TK", "TO", "TM", "TV", "TN", "TT", "PA", "PY", "PK", "PG", "PW", "PS", "FO", "PE",
	"PT", "FK", "PL", "PR", "GF", "TF", "PF", "FR", "FJ", "FI", "PH", "PN", "HM", "HU", "HK",
};

fn is_country_code(text: &str) -> bool {
	text.len() == 2 && COUNTRY_CODES.contains(text.to_ascii_uppercase().as_str())
}

fn is_subdivision(text: &str) -> bool {
	text.len() >= 4 && text.as_bytes()[2] == b'-' && text.get(..2).is_some_and(is_country_code)
}

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{9,11}$").expect("timestamp regex is valid"));

static YYYYMMDD: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[1-2][0-9]{3}-?(0[1-9]|1[0-2])-?(0[1-9]|[1-2][0-9]|3[0-1])$").expect("date regex is valid"));

static YYMMDD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{2}-?(0[1-9]|1[0-2])-?(0[1-9]|[1-2][0-9]|3[0-1])$").expect("short date regex is valid"));

static HHMMSS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-1][0-9]|2[0-3]):?([0-5][0-9]):?([0-5][0-9])$").expect("time regex is valid"));

static HHMM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-1][0-9]|2[0-3]):?([0-5][0-9])$").expect("short time regex is valid"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[\w.\-]*[a-zA-Z0-9]+[\w.\-]*[a-zA-Z0-9]+[\w.\-]+@([a-zA-Z0-9]+\.)+[a-zA-Z0-9]{2,8}$").expect("email regex is valid")
});

static UUID: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89abAB][0-9a-f]{3}-[0-9a-f]{12}$").expect("uuid regex is valid"));

static TELEPHONE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(\+\d{1,2}\s)?\(?\d{3}\)?[\s.\-]?\d{3}[\s.\-]?\d{4}$").expect("telephone regex is valid"));
