use crate::Opts;
use crate::constant::ColumnType;
use crate::protocol::TypeDescriptor;
use crate::protocol::value::read_value;
use crate::value::Value;

#[test]
fn default_opts() {
    let opts = Opts::default();
    assert!(!opts.strict_varint);
    assert_eq!(opts.preallocate_limit, 4096);
}

#[test]
fn huge_count_is_not_preallocated() {
    // Claims 2^30 elements but carries one
    let mut payload = (1_i32 << 30).to_be_bytes().to_vec();
    payload.extend_from_slice(&4_i32.to_be_bytes());
    payload.extend_from_slice(&7_i32.to_be_bytes());
    let mut data = (payload.len() as i32).to_be_bytes().to_vec();
    data.extend_from_slice(&payload);

    let opts = Opts {
        preallocate_limit: 16,
        ..Default::default()
    };
    let ty = TypeDescriptor::List(Box::new(TypeDescriptor::simple(ColumnType::Int)));
    assert!(read_value(&ty, &data, &opts).is_err());
}

#[test]
fn strict_varint_applies_to_decimal() {
    // scale 0, 9-byte magnitude 2^64
    let mut payload = 0_i32.to_be_bytes().to_vec();
    payload.extend_from_slice(&[0x01, 0, 0, 0, 0, 0, 0, 0, 0]);
    let mut data = (payload.len() as i32).to_be_bytes().to_vec();
    data.extend_from_slice(&payload);
    let ty = TypeDescriptor::simple(ColumnType::Decimal);

    let (value, _) = read_value(&ty, &data, &Opts::default()).unwrap();
    assert_eq!(value, Value::Decimal("0.".to_string()));

    let strict = Opts {
        strict_varint: true,
        ..Default::default()
    };
    assert!(read_value(&ty, &data, &strict).is_err());
}
