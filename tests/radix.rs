use expsolver::util::{
    num::{to_bit_pattern, truncate_to_int},
    radix::{to_binary, to_hex},
};
use proptest::prelude::*;

#[test]
fn output_line_for_a_shifted_hex_literal() {
    let value = truncate_to_int(expsolver::solve("$ff>>4").unwrap());
    let bits = to_bit_pattern(value);
    assert_eq!(format!("{value}, 0x{}, %{}", to_hex(bits), to_binary(bits, false)),
               "15, 0xf, %01111");
}

#[test]
fn negative_values_print_their_bit_pattern() {
    let bits = to_bit_pattern(-1);
    assert_eq!(to_hex(bits), "ffffffff");
    assert_eq!(to_binary(bits, false), format!("0{}", "1".repeat(32)));
    assert_eq!(to_binary(bits, true), ["1111"; 8].join("_"));
}

#[test]
fn grouping_pads_to_whole_nibbles() {
    assert_eq!(to_binary(1, true), "0001");
    assert_eq!(to_binary(16, true), "0001_0000");
    assert_eq!(to_binary(32, true), "0010_0000");
    assert_eq!(to_binary(255, true), "1111_1111");
}

#[test]
fn truncation_saturates() {
    assert_eq!(truncate_to_int(2.9), 2);
    assert_eq!(truncate_to_int(-2.9), -2);
    assert_eq!(truncate_to_int(1e12), i32::MAX);
    assert_eq!(truncate_to_int(-1e12), i32::MIN);
    assert_eq!(truncate_to_int(f64::NAN), 0);
}

proptest! {
    #[test]
    fn grouped_binary_reads_back(value in any::<u32>()) {
        let grouped = to_binary(value, true);
        prop_assert_eq!(grouped.split('_').count() * 4, grouped.replace('_', "").len());
        prop_assert_eq!(u32::from_str_radix(&grouped.replace('_', ""), 2).unwrap(), value);
        prop_assert_eq!(u32::from_str_radix(&to_binary(value, false), 2).unwrap(), value);
        prop_assert_eq!(u32::from_str_radix(&to_hex(value), 16).unwrap(), value);
    }
}
