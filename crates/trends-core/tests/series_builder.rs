// File: crates/trends-core/tests/series_builder.rs
// Purpose: Record -> series reshaping: naming, ordering, NaN filtering, label offsets.

use trends_core::{parse_records, LabelOffsets, Record, SeriesBuilder, SeriesError};

const SCENARIO: &str = "Name,2022Q1,2022Q2\nGroupA,1.234,NaNtext\nGroupB,2.5,3.5";

#[test]
fn scenario_two_groups() {
    let records = parse_records(SCENARIO).unwrap();
    let series = SeriesBuilder::default().build(&records).unwrap();
    assert_eq!(series.len(), 2);

    let a = &series[0];
    assert_eq!(a.name, "GroupA");
    assert_eq!(a.labels, vec!["2022Q1"]);
    assert_eq!(a.data.len(), 1);
    assert_eq!(a.data[0].name, "2022Q1");
    assert_eq!(a.data[0].y, 1.234);

    let b = &series[1];
    assert_eq!(b.name, "GroupB");
    assert_eq!(b.labels, vec!["2022Q1", "2022Q2"]);
    assert_eq!(b.data.iter().map(|p| p.y).collect::<Vec<_>>(), vec![2.5, 3.5]);
}

#[test]
fn labels_stay_aligned_when_a_middle_value_is_dropped() {
    let records = parse_records("Name,Q1,Q2,Q3\nA,1,,3\n").unwrap();
    let s = &SeriesBuilder::default().build(&records).unwrap()[0];
    assert_eq!(s.labels, vec!["Q1", "Q3"]);
    assert_eq!(s.labels.len(), s.data.len());
    for (label, point) in s.labels.iter().zip(&s.data) {
        assert_eq!(label, &point.name);
    }
    assert_eq!(s.data[1].y, 3.0);
}

#[test]
fn order_and_names_follow_records() {
    let records = parse_records("Q1,Name,Q2\n1,Zeta,2\n3,Alpha,4\n5,Mid,6\n").unwrap();
    let series = SeriesBuilder::default().build(&records).unwrap();
    let names = series.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    for (s, r) in series.iter().zip(&records) {
        assert_eq!(Some(s.name.as_str()), r.get("Name"));
    }
    assert_eq!(series[0].labels, vec!["Q1", "Q2"]);
}

#[test]
fn first_record_gets_its_own_label_offset() {
    let records = parse_records("Name,Q1\nA,1\nB,2\nC,3\n").unwrap();
    let builder = SeriesBuilder::new(LabelOffsets::new(-12.0, 24.0), 3.0);
    let series = builder.build(&records).unwrap();
    assert_eq!(series[0].data[0].data_label_offset, -12.0);
    assert!(series[1..].iter().all(|s| s.data[0].data_label_offset == 24.0));
    assert!(series.iter().all(|s| s.line_width == 3.0));
}

#[test]
fn record_without_values_yields_empty_series() {
    let records = parse_records("Name,Q1,Q2\nEmpty,n/a,\n").unwrap();
    let s = &SeriesBuilder::default().build(&records).unwrap()[0];
    assert_eq!(s.name, "Empty");
    assert!(s.is_empty());
    assert!(s.labels.is_empty());
}

#[test]
fn missing_name_fails_fast() {
    let records = vec![
        Record::from_iter([("Name", "A"), ("Q1", "1")]),
        Record::from_iter([("Label", "B"), ("Q1", "2")]),
    ];
    let err = SeriesBuilder::default().build(&records).unwrap_err();
    assert_eq!(err, SeriesError::MissingName { record: 1 });
}

#[test]
fn building_twice_gives_identical_output() {
    let records = parse_records(SCENARIO).unwrap();
    let builder = SeriesBuilder::default();
    assert_eq!(builder.build(&records).unwrap(), builder.build(&records).unwrap());
}

#[test]
fn category_order_survives_a_gap_in_the_first_series() {
    let records = parse_records("Name,Q1,Q2,Q3\nFriends,1,,3\nRivals,1,2,3").unwrap();
    let data = SeriesBuilder::default().build_figure(&records).unwrap();
    assert_eq!(data.categories, vec!["Q1", "Q2", "Q3"]);
    assert_eq!(data.series[0].labels, vec!["Q1", "Q3"]);
    assert_eq!(data.series[1].labels, vec!["Q1", "Q2", "Q3"]);
}
