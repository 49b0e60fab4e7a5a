use crate::constant::{ColumnType, ResultKind, RowsFlags};

#[test]
fn test_result_kind_codes() {
    assert_eq!(ResultKind::from_u32(1), Some(ResultKind::Void));
    assert_eq!(ResultKind::from_u32(2), Some(ResultKind::Rows));
    assert_eq!(ResultKind::from_u32(3), Some(ResultKind::SetKeyspace));
    assert_eq!(ResultKind::from_u32(4), Some(ResultKind::Prepared));
    assert_eq!(ResultKind::from_u32(5), Some(ResultKind::SchemaChange));
    assert_eq!(ResultKind::from_u32(0), None);
    assert_eq!(ResultKind::from_u32(6), None);

    for kind in [
        ResultKind::Void,
        ResultKind::Rows,
        ResultKind::SetKeyspace,
        ResultKind::Prepared,
        ResultKind::SchemaChange,
    ] {
        assert_eq!(ResultKind::from_u32(kind as u32), Some(kind));
    }
}

#[test]
fn test_rows_flags_bits() {
    let flags = RowsFlags::from_bits_retain(0x0007);
    assert!(flags.contains(RowsFlags::GLOBAL_TABLES_SPEC));
    assert!(flags.contains(RowsFlags::HAS_MORE_PAGES));
    assert!(flags.contains(RowsFlags::NO_METADATA));

    // bits from newer protocol versions are kept, not rejected
    let flags = RowsFlags::from_bits_retain(0x0008 | 0x0002);
    assert!(flags.contains(RowsFlags::HAS_MORE_PAGES));
    assert!(!flags.contains(RowsFlags::NO_METADATA));
    assert_eq!(flags.bits(), 0x000A);
}

#[test]
fn test_column_type_codes() {
    assert_eq!(ColumnType::from_u16(0x0009), Some(ColumnType::Int));
    assert_eq!(ColumnType::from_u16(0x0021), Some(ColumnType::Map));
    assert_eq!(ColumnType::from_u16(0x0031), Some(ColumnType::Tuple));
    // date/time/smallint/tinyint/duration have no reconstruction rule
    for code in [0x0011, 0x0012, 0x0013, 0x0014, 0x0015, 0x00FF] {
        assert_eq!(ColumnType::from_u16(code), None);
    }
    assert_eq!(ColumnType::Timeuuid.name(), "timeuuid");
}
