use std::ffi::CStr;

use dconv::{atod, fallback, parse, parse_cstr, parse_partial, parse_range, Error, Reason};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn bits(input: &str) -> u64 {
	parse(input).unwrap_or_else(|error| panic!("{input}: {error}")).to_bits()
}

#[rstest]
#[case("0.1", 0x3fb9_9999_9999_999a)]
#[case("9007199254740993", 0x4340_0000_0000_0000)]
#[case("9007199254740995", 0x4340_0000_0000_0002)]
#[case("5e-324", 0x0000_0000_0000_0001)]
#[case("1e309", 0x7ff0_0000_0000_0000)]
#[case("1e-400", 0x0000_0000_0000_0000)]
#[case("-0", 0x8000_0000_0000_0000)]
#[case("0", 0x0000_0000_0000_0000)]
#[case("Infinity", 0x7ff0_0000_0000_0000)]
#[case("INF", 0x7ff0_0000_0000_0000)]
#[case("-infinity", 0xfff0_0000_0000_0000)]
#[case("1.7976931348623157e308", 0x7fef_ffff_ffff_ffff)]
#[case("2.2250738585072014e-308", 0x0010_0000_0000_0000)]
#[case("2.2250738585072011e-308", 0x000f_ffff_ffff_ffff)]
fn known_values(#[case] input: &str, #[case] expected: u64) {
	assert_eq!(bits(input), expected, "{input}");
}

#[rstest]
#[case(1999, 20000, f64::INFINITY)]
#[case(1999, 2000, 1.0)]
#[case(2999, 3002, 100.0)]
#[case(1999, -20000, 0.0)]
fn leading_fraction_zeros_offset_the_exponent(#[case] zeros: usize, #[case] exponent: i64, #[case] expected: f64) {
	let input = format!("0.{}1e{exponent}", "0".repeat(zeros));
	assert_eq!(bits(&input), expected.to_bits(), "0.<{zeros} zeros>1e{exponent}");
	assert_eq!(fallback::convert(input.as_bytes()).map(|(value, _)| value.to_bits()), Ok(expected.to_bits()));
}

#[test]
fn nan_keeps_its_sign() {
	let positive = parse("NaN").unwrap();
	let negative = parse("-nan").unwrap();
	assert!(positive.is_nan() && positive.is_sign_positive());
	assert!(negative.is_nan() && negative.is_sign_negative());
}

#[test]
fn negative_zero_is_distinguishable() {
	let zero = parse("-0").unwrap();
	assert_eq!(zero, 0.0);
	assert!(zero.is_sign_negative());
	assert!(parse("0").unwrap().is_sign_positive());
}

#[rstest]
#[case("00", Reason::LeadingZero)]
#[case("-01", Reason::LeadingZero)]
#[case("1.", Reason::MissingFractionDigits)]
#[case("1e", Reason::MissingExponentDigits)]
#[case("1e+", Reason::MissingExponentDigits)]
#[case(".5", Reason::MissingDigits)]
#[case("+1", Reason::MissingDigits)]
#[case("", Reason::MissingDigits)]
#[case("-", Reason::MissingDigits)]
#[case(" 1", Reason::MissingDigits)]
#[case("infin", Reason::InvalidToken)]
#[case("na", Reason::InvalidToken)]
fn rejected_literals(#[case] input: &str, #[case] reason: Reason) {
	assert_eq!(parse_partial(input.as_bytes()), Err(Error::Syntax { offset: 0, reason }));
	assert_eq!(atod(input), None);
}

#[test]
fn partial_consumption_reports_the_end() {
	assert_eq!(parse_partial(b"3.25,4.5"), Ok((3.25, 4)));
	assert_eq!(parse_partial(b"1e5e5"), Ok((1e5, 3)));
	assert_eq!(parse_partial(b"-inf]"), Ok((f64::NEG_INFINITY, 4)));
	assert_eq!(parse_partial(b"infinityx"), Ok((f64::INFINITY, 8)));
	assert_eq!(parse_partial(b"1.5E-3 "), Ok((1.5e-3, 6)));
}

#[test]
fn whole_input_must_be_consumed() {
	assert_eq!(parse("12"), Ok(12.0));
	assert_eq!(parse("12 "), Err(Error::TrailingCharacters { offset: 2 }));
	assert_eq!(parse(b"0.5x".as_slice()), Err(Error::TrailingCharacters { offset: 3 }));
	assert_eq!(parse(String::from("-2e-2")), Ok(-0.02));
}

#[test]
fn nul_terminated_input() {
	let input: &CStr = c"6.02214076e23";
	assert_eq!(parse_cstr(input), Ok((6.02214076e23, 13)));

	let input: &CStr = c"42";
	assert_eq!(parse_cstr(input), Ok((42.0, 2)));

	let input: &CStr = c"";
	assert_eq!(
		parse_cstr(input),
		Err(Error::Syntax { offset: 0, reason: Reason::MissingDigits })
	);
}

#[test]
fn ranges_report_absolute_positions() {
	let input = b"[1.5, -2e3, 00]";
	assert_eq!(parse_range(input, 1..4), Ok((1.5, 4)));
	assert_eq!(parse_range(input, 6..input.len()), Ok((-2e3, 10)));
	assert_eq!(
		parse_range(input, 12..input.len()),
		Err(Error::Syntax { offset: 12, reason: Reason::LeadingZero })
	);
}

#[test]
fn range_end_bounds_the_literal() {
	let input = b"123456";
	assert_eq!(parse_range(input, 0..3), Ok((123.0, 3)));
	assert_eq!(parse_range(input, 2..4), Ok((34.0, 4)));
	assert_eq!(
		parse_range(b"1e10", 0..2),
		Err(Error::Syntax { offset: 0, reason: Reason::MissingExponentDigits })
	);
	assert_eq!(
		parse_range(input, 3..3),
		Err(Error::Syntax { offset: 3, reason: Reason::MissingDigits })
	);
}

#[test]
fn invalid_ranges_are_rejected() {
	let input = b"1.0";
	assert_eq!(parse_range(input, 0..4), Err(Error::OutOfBounds { start: 0, end: 4, len: 3 }));
	#[allow(clippy::reversed_empty_ranges)]
	let reversed = 2..1;
	assert_eq!(parse_range(input, reversed), Err(Error::OutOfBounds { start: 2, end: 1, len: 3 }));
}

#[test]
fn errors_describe_themselves() {
	let error = parse("1.").unwrap_err();
	assert_eq!(error.to_string(), "invalid decimal literal at byte 0: expected a digit after the decimal point");
	assert_eq!(error.offset(), 0);

	let error = parse("7up").unwrap_err();
	assert_eq!(error.to_string(), "unexpected trailing characters at byte 1");
	assert_eq!(error.offset(), 1);
}

#[test]
fn regressions() {
	for &(input, expected) in REGRESSIONS {
		assert_eq!(bits(input), expected.to_bits(), "{input}");

		let (exact, consumed) = fallback::convert(input.as_bytes()).unwrap();
		assert_eq!(consumed, input.len(), "{input}");
		assert_eq!(exact.to_bits(), expected.to_bits(), "{input}");
	}
}

const REGRESSIONS: &[(&str, f64)] = &[
	("12.345", 12.345),
	("12.345e19", 1.2345e20),
	("1e20", 1e20),
	("0e-19", 0.0),
	("5.9e-76", 5.9e-76),
	("1e-324", 0.0),
	("42.0000000000000000001", 42.0),
	("42.00000000000000000001", 42.0),
	("42.000000000000000000001", 42.0),
	("179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368", 1.7976931348623157e308),
	("0", 0.0),
	("-0", -0.0),
	("0e-10", 0.0),
	("-0e-10", -0.0),
	("0e-1000000", 0.0),
	("-0e-1000000", -0.0),
	("1", 1.0),
	("1.1", 1.1),
	("1.1e1", 11.0),
	("1234.1234", 1234.1234),
	("1234.12345678", 1234.12345678),
	("1234.123456789012", 1234.123456789012),
	("1.797693134862315708145274237317e+10", 17976931348.623158),
	("1.797693134862315708145274237317e+308", 1.7976931348623157e308),
	("0e+999", 0.0),
	("0e1", 0.0),
	("0e12345", 0.0),
	("0e2", 0.0),
	("0e-2", 0.0),
	("0e-999", 0.0),
	("10000e-329", 0.0),
	("1e-325", 0.0),
	("20000e-328", 0.0),
	("2e-324", 0.0),
	("90000e-329", 0.0),
	("1e0", 1.0),
	("17976931348623157e292", 1.7976931348623157e308),
	("17976931348623158e292", 1.7976931348623157e308),
	("1e1", 10.0),
	("1e2", 100.0),
	("10141204801825834086073718800384e0", 1.0141204801825834e31),
	("1014120480182583464902367222169599999e-5", 1.0141204801825834e31),
	("1014120480182583464902367222169600001e-5", 1.0141204801825835e31),
	("10141204801825834649023672221696e0", 1.0141204801825835e31),
	("10141204801825835211973625643008e0", 1.0141204801825835e31),
	("104110013277974872254e-225", 1.0411001327797486e-205),
	("12345e0", 12345.0),
	("12345e1", 123450.0),
	("12345e2", 1234500.0),
	("12345678901234e0", 12345678901234.0),
	("12345678901234e1", 123456789012340.0),
	("12345678901234e2", 1234567890123400.0),
	("123456789012345e0", 123456789012345.0),
	("123456789012345e1", 1234567890123450.0),
	("123456789012345e2", 1.23456789012345e16),
	("1234567890123456789012345e108", 1.2345678901234568e132),
	("1234567890123456789012345e109", 1.234567890123457e133),
	("1234567890123456789012345e110", 1.2345678901234568e134),
	("1234567890123456789012345e111", 1.2345678901234567e135),
	("1234567890123456789012345e112", 1.2345678901234567e136),
	("1234567890123456789012345e113", 1.2345678901234567e137),
	("1234567890123456789012345e114", 1.2345678901234568e138),
	("1234567890123456789012345e115", 1.2345678901234568e139),
	("1234567890123456789052345e108", 1.2345678901234568e132),
	("1234567890123456789052345e109", 1.234567890123457e133),
	("1234567890123456789052345e110", 1.2345678901234568e134),
	("1234567890123456789052345e111", 1.2345678901234567e135),
	("1234567890123456789052345e112", 1.2345678901234567e136),
	("1234567890123456789052345e113", 1.2345678901234567e137),
	("1234567890123456789052345e114", 1.2345678901234568e138),
	("1234567890123456789052345e115", 1.2345678901234568e139),
	("123456789012345e-1", 12345678901234.5),
	("123456789012345e-2", 1234567890123.45),
	("123456789012345e20", 1.23456789012345e34),
	("123456789012345e-20", 1.23456789012345e-06),
	("123456789012345e22", 1.23456789012345e36),
	("123456789012345e-22", 1.23456789012345e-08),
	("123456789012345e23", 1.23456789012345e37),
	("123456789012345e-23", 1.23456789012345e-09),
	("123456789012345e-25", 1.23456789012345e-11),
	("123456789012345e35", 1.23456789012345e49),
	("123456789012345e36", 1.23456789012345e50),
	("123456789012345e37", 1.23456789012345e51),
	("123456789012345e39", 1.23456789012345e53),
	("123456789012345e-39", 1.23456789012345e-25),
	("123456789012345e-5", 1234567890.12345),
	("12345678901234e-1", 1234567890123.4),
	("12345678901234e-2", 123456789012.34),
	("12345678901234e20", 1.2345678901234e33),
	("12345678901234e-20", 1.2345678901234e-07),
	("12345678901234e22", 1.2345678901234e35),
	("12345678901234e-22", 1.2345678901234e-09),
	("12345678901234e23", 1.2345678901234e36),
	("12345678901234e-23", 1.2345678901234e-10),
	("12345678901234e-25", 1.2345678901234e-12),
	("12345678901234e30", 1.2345678901234e43),
	("12345678901234e31", 1.2345678901234e44),
	("12345678901234e32", 1.2345678901234e45),
	("12345678901234e35", 1.2345678901234e48),
	("12345678901234e36", 1.2345678901234e49),
	("12345678901234e37", 1.2345678901234e50),
	("12345678901234e-39", 1.2345678901234e-26),
	("12345678901234e-5", 123456789.01234),
	("123456789e108", 1.23456789e116),
	("123456789e109", 1.23456789e117),
	("123456789e110", 1.23456789e118),
	("123456789e111", 1.23456789e119),
	("123456789e112", 1.23456789e120),
	("123456789e113", 1.23456789e121),
	("123456789e114", 1.23456789e122),
	("123456789e115", 1.23456789e123),
	("12345e-1", 1234.5),
	("12345e-2", 123.45),
	("12345e20", 1.2345e24),
	("12345e-20", 1.2345e-16),
	("12345e22", 1.2345e26),
	("12345e-22", 1.2345e-18),
	("12345e23", 1.2345e27),
	("12345e-23", 1.2345e-19),
	("12345e-25", 1.2345e-21),
	("12345e30", 1.2345e34),
	("12345e31", 1.2345e35),
	("12345e32", 1.2345e36),
	("12345e35", 1.2345e39),
	("12345e36", 1.2345e40),
	("12345e37", 1.2345e41),
	("12345e-39", 1.2345e-35),
	("12345e-5", 0.12345),
	("123400000e299", 1.234e307),
	("1234e304", 1.234e307),
	("123400000e300", 1.234e308),
	("1234e305", 1.234e308),
	("170000000e300", 1.7e308),
	("17e307", 1.7e308),
	("1e-1", 0.1),
	("1e-2", 0.01),
	("1e-20", 1e-20),
	("1e22", 1e22),
	("1e-22", 1e-22),
	("1e23", 1e23),
	("1e-23", 1e-23),
	("1e-25", 1e-25),
	("100000e303", 1e308),
	("1e308", 1e308),
	("1e35", 1e35),
	("1e36", 1e36),
	("1e37", 1e37),
	("1e-39", 1e-39),
	("1e-5", 1e-05),
	("2e0", 2.0),
	("22250738585072011e-324", 2.225073858507201e-308),
	("2e1", 20.0),
	("2e2", 200.0),
	("2e-1", 0.2),
	("2e-2", 0.02),
	("2e20", 2e20),
	("2e-20", 2e-20),
	("2e22", 2e22),
	("2e-22", 2e-22),
	("2e23", 2e23),
	("2e-23", 2e-23),
	("2e-25", 2e-25),
	("2e35", 2e35),
	("2e36", 2e36),
	("2e37", 2e37),
	("2e-39", 2e-39),
	("2e-5", 2e-05),
	("358416272e-33", 3.58416272e-25),
	("30000e-328", 5e-324),
	("3e-324", 5e-324),
	("5445618932859895362967233318697132813618813095743952975439298223406969961560047552942717636670910728746893019786283454139917900193169748259349067524939840552682198095012176093045431437495773903922425632551857520884625114624126588173520906670968542074438852601438992904761759703022688483745081090292688986958251711580854575674815074162979705098246243690189880319928315307816832576838178256307401454285988871020923752587330172447966674453785790265533466496640456213871241930958703059911787722565044368663670643970181259143319016472430928902201239474588139233890135329130660705762320235358869874608541509790266400643191187286648422874774910682648288516244021893172769161449825765517353755844373640588822904791244190695299838293263075467057383813882521706545084301049855505888186560731e-1035", 5.445618932859895e-255),
	("5708990770823838890407843763683279797179383808e0", 5.708990770823839e45),
	("5708990770823839207320493820740630171355185151999e-3", 5.708990770823839e45),
	("5708990770823839207320493820740630171355185152001e-3", 5.70899077082384e45),
	("5708990770823839207320493820740630171355185152e0", 5.70899077082384e45),
	("5708990770823839524233143877797980545530986496e0", 5.70899077082384e45),
	("72057594037927928e0", 7.205759403792793e16),
	("7205759403792793199999e-5", 7.205759403792793e16),
	("7205759403792793200001e-5", 7.205759403792794e16),
	("72057594037927932e0", 7.205759403792794e16),
	("72057594037927936e0", 7.205759403792794e16),
	("89255e-22", 8.9255e-18),
	("9e0", 9.0),
	("9e1", 90.0),
	("9e2", 900.0),
	("9223372036854774784e0", 9.223372036854775e18),
	("922337203685477529599999e-5", 9.223372036854775e18),
	("922337203685477529600001e-5", 9.223372036854776e18),
	("9223372036854775296e0", 9.223372036854776e18),
	("9223372036854775808e0", 9.223372036854776e18),
	("9e-1", 0.9),
	("9e-2", 0.09),
	("9e20", 9e20),
	("9e-20", 9e-20),
	("9e22", 9e22),
	("9e-22", 9e-22),
	("9e23", 9e23),
	("9e-23", 9e-23),
	("9e-25", 9e-25),
	("9e35", 9e35),
	("9e36", 9e36),
	("9e37", 9e37),
	("9e-39", 9e-39),
	("9e-5", 9e-05),
	("1000000e303", f64::INFINITY),
	("17976931348623159e292", f64::INFINITY),
	("180000000e300", f64::INFINITY),
	("18e307", f64::INFINITY),
	("1e309", f64::INFINITY),
];
