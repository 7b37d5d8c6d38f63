#![allow(dead_code, unused)]

use radframe::record::{FieldSink, Fields};

#[derive(Debug, Default, Fields)]
struct Echo {
    #[field("Range")]
    range: u16,
    #[field("Bearing")]
    bearing: i16,
    checksum: u8,
    #[field("Strength")]
    strength: i8,
    #[field("Timestamp")]
    timestamp: u64,
    #[field("Offset")]
    offset: i32,
}

#[derive(Default)]
struct Collector(Vec<(&'static str, i128)>);

impl FieldSink for Collector {
    fn put_u16(&mut self, label: &'static str, value: u16) {
        self.0.push((label, value.into()));
    }
    fn put_i16(&mut self, label: &'static str, value: i16) {
        self.0.push((label, value.into()));
    }
    fn put_i8(&mut self, label: &'static str, value: i8) {
        self.0.push((label, value.into()));
    }
    fn put_i32(&mut self, label: &'static str, value: i32) {
        self.0.push((label, value.into()));
    }
}

#[test]
fn publish_labelled_fields_in_order() {
    let echo = Echo {
        range: 4000,
        bearing: -90,
        checksum: 0x7F,
        strength: -3,
        timestamp: 99,
        offset: -70_000,
    };

    let mut collector = Collector::default();
    echo.publish(&mut collector);

    // `checksum` has no label, and `u64` fields fall through to the default.
    assert_eq!(
        collector.0,
        [
            ("Range", 4000),
            ("Bearing", -90),
            ("Strength", -3),
            ("Offset", -70_000),
        ]
    );
}

#[test]
fn publish_target_labels() {
    #[derive(Default)]
    struct Labels(Vec<&'static str>);

    impl FieldSink for Labels {
        fn put_u8(&mut self, label: &'static str, _: u8) {
            self.0.push(label);
        }
        fn put_u16(&mut self, label: &'static str, _: u16) {
            self.0.push(label);
        }
        fn put_i8(&mut self, label: &'static str, _: i8) {
            self.0.push(label);
        }
        fn put_i16(&mut self, label: &'static str, _: i16) {
            self.0.push(label);
        }
        fn put_i32(&mut self, label: &'static str, _: i32) {
            self.0.push(label);
        }
    }

    let mut labels = Labels::default();
    radframe::record::TargetRecord::default().publish(&mut labels);

    assert_eq!(labels.0.len(), 16);
    assert_eq!(labels.0.first(), Some(&"Goal numbering"));
    assert_eq!(labels.0[4..6], ["Target Type", "Lane Number"]);
    assert_eq!(labels.0[9], "Heading angle");
    assert_eq!(
        labels.0[11..13],
        ["Radar Network X-sit Standard", "Radar Network Y-sit Standard"]
    );
    assert_eq!(labels.0.last(), Some(&"Car width"));
}
