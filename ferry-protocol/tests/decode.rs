use ferry_protocol::{parse_record, Direction, Horizon, RecordError, StatusLine, StatusWriter};
use proptest::prelude::*;

proptest! {
    #[test]
    fn arbitrary_lines_never_panic(raw in ".{0,200}") {
        let line = StatusLine::split(&raw);
        let _ = line.horizon();
        for record in line.records() {
            let _ = record;
        }
    }

    #[test]
    fn segment_count_matches_separators(records in 0usize..8, horizon in 1i64..1_000_000) {
        let mut writer = StatusWriter::new();
        writer.pad_docked(records).unwrap();
        let line = writer.finish(Horizon::from_ms(horizon).unwrap()).unwrap();

        let status = StatusLine::split(&line);
        prop_assert_eq!(status.segment_count(), records);
        prop_assert_eq!(status.horizon().map(Horizon::as_ms), Ok(horizon));
    }

    #[test]
    fn wrong_field_count_is_reported(fields in prop::collection::vec("[0-9]{1,3}", 0..8)) {
        prop_assume!(fields.len() != 4);
        let segment = fields.join(",");
        let found = segment.split(',').count();
        prop_assert_eq!(parse_record(&segment), Err(RecordError::FieldCount { found }));
    }

    #[test]
    fn moving_record_fields_survive_encoding(
        start in 0.0f64..1.0,
        end in 0.0f64..1.0,
        offset in 1u64..10_000_000,
        arriving in any::<bool>(),
    ) {
        let direction = if arriving { Direction::Arriving } else { Direction::Departing };
        let mut writer = StatusWriter::new();
        writer.record(start, end, offset, direction).unwrap();
        let line = writer.finish(Horizon::from_ms(90_000).unwrap()).unwrap();

        let record = StatusLine::split(&line).records().next().unwrap().unwrap();
        prop_assert_eq!(record.start, start);
        prop_assert_eq!(record.end, end);
        prop_assert_eq!(record.start_offset_ms, offset);
        prop_assert_eq!(record.direction, Some(direction));
    }
}
