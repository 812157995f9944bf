//! End-to-end parses of complete EML programs.

mod common;

use common::{parse_body, single_token, standard_work, varied_work, HEADER};
use eml::ast::{GroupKind, Modifier, Number, Object, Side, Work};
use eml::parse;

fn num(value: u32) -> Number {
    Number::from_integer(value).unwrap()
}

#[test]
fn empty_input_is_an_empty_session() {
    let session = parse("").unwrap();
    assert!(session.headers.is_empty());
    assert!(session.objects.is_empty());
}

#[test]
fn header_only() {
    let session = parse(HEADER).unwrap();
    assert_eq!(session.version.as_deref(), Some("1.0"));
    assert_eq!(session.weight_unit.as_deref(), Some("lbs"));
    assert_eq!(session.headers.len(), 2);
    assert!(session.objects.is_empty());
}

#[test]
fn standard_work_parses() {
    let single = single_token(r#""squat":5x5;"#);
    assert_eq!(single.name, "squat");

    let standard = standard_work(&single);
    assert_eq!(standard.sets, 5);
    assert_eq!(standard.reps.value, num(5));
    assert!(!standard.reps.is_time);
    assert!(!standard.reps.to_failure);
    assert_eq!(standard.reps.modifier, Modifier::None);
}

#[test]
fn varied_work_parses_in_order() {
    let single = single_token(r#""squat":5x(5,4,3,2,1);"#);
    let varied = varied_work(&single);

    assert_eq!(varied.sets, 5);
    assert_eq!(varied.reps.len(), 5);
    let values: Vec<Number> = varied.reps.iter().map(|rep| rep.value).collect();
    assert_eq!(values, vec![num(5), num(4), num(3), num(2), num(1)]);
    assert!(varied.reps.iter().all(|rep| rep.modifier == Modifier::None));
}

#[test]
fn asymmetric_work_parses() {
    let single = single_token(r#""sl-rdl":4x3:5x2;"#);

    let Work::Asymmetric { left, right } = &single.work else {
        panic!("expected asymmetric work, got {:?}", single.work);
    };

    let Side::Standard(left) = left else {
        panic!("expected a standard left side, got {left:?}");
    };
    assert_eq!((left.sets, left.reps.value), (4, num(3)));

    let Side::Standard(right) = right else {
        panic!("expected a standard right side, got {right:?}");
    };
    assert_eq!((right.sets, right.reps.value), (5, num(2)));
}

#[test]
fn weight_modifier_parses() {
    let single = single_token(r#""squat":5x5@120;"#);
    let standard = standard_work(&single);
    assert_eq!(standard.reps.value, num(5));
    assert_eq!(standard.reps.modifier, Modifier::Weight(num(120)));
}

#[test]
fn rpe_modifier_parses() {
    let single = single_token(r#""squat":5x5%90;"#);
    let standard = standard_work(&single);
    assert_eq!(standard.reps.modifier, Modifier::Rpe(num(90)));
}

#[test]
fn fractional_weight_parses() {
    let single = single_token(r#""squat":5x5@102.5;"#);
    let standard = standard_work(&single);
    assert_eq!(
        standard.reps.modifier,
        Modifier::Weight(Number::from_hundredths(10250).unwrap())
    );
}

#[test]
fn macro_modifier_skips_reps_with_their_own() {
    let single = single_token(r#""squat":4x(4,3@30,2,1)@120;"#);
    let varied = varied_work(&single);

    let values: Vec<Number> = varied.reps.iter().map(|rep| rep.value).collect();
    assert_eq!(values, vec![num(4), num(3), num(2), num(1)]);

    let modifiers: Vec<Modifier> = varied.reps.iter().map(|rep| rep.modifier).collect();
    assert_eq!(
        modifiers,
        vec![
            Modifier::Weight(num(120)),
            Modifier::Weight(num(30)),
            Modifier::Weight(num(120)),
            Modifier::Weight(num(120)),
        ]
    );
}

#[test]
fn failure_time_and_rpe_combine() {
    let single = single_token(r#""squat":5xFT%100;"#);
    let standard = standard_work(&single);
    assert!(standard.reps.to_failure);
    assert!(standard.reps.is_time);
    assert_eq!(standard.reps.modifier, Modifier::Rpe(num(100)));
}

#[test]
fn flags_combine_in_either_order() {
    let ft = single_token(r#""squat":5xFT;"#);
    let tf = single_token(r#""squat":5xTF;"#);
    assert_eq!(ft.work, tf.work);
}

#[test]
fn time_sets_parse() {
    let single = single_token(r#""plank":3x60T;"#);
    let standard = standard_work(&single);
    assert!(standard.reps.is_time);
    assert!(!standard.reps.to_failure);
    assert_eq!(standard.reps.value, num(60));
}

#[test]
fn varied_reps_take_inner_flags() {
    let single = single_token(r#""row":3x(5,FT,10);"#);
    let varied = varied_work(&single);
    assert!(!varied.reps[0].to_failure);
    assert!(varied.reps[1].to_failure);
    assert!(varied.reps[1].is_time);
    assert_eq!(varied.reps[2].value, num(10));
}

#[test]
fn none_work_parses() {
    let single = single_token(r#""rest":;"#);
    assert_eq!(single.work, Work::None);
}

#[test]
fn asymmetric_with_two_none_sides() {
    let single = single_token(r#""x"::;"#);
    assert_eq!(
        single.work,
        Work::Asymmetric {
            left: Side::None,
            right: Side::None,
        }
    );
}

#[test]
fn asymmetric_with_a_varied_left_side() {
    let single = single_token(r#""step-up":2x(3,4):5x1;"#);

    let Work::Asymmetric { left, right } = &single.work else {
        panic!("expected asymmetric work, got {:?}", single.work);
    };
    let Side::StandardVaried(left) = left else {
        panic!("expected a varied left side, got {left:?}");
    };
    assert_eq!(left.sets, 2);
    assert!(matches!(right, Side::Standard(_)));
}

#[test]
fn superset_parses() {
    let session = parse_body(r#"super("a":5x5;"b":4x4;);"#).unwrap();
    assert_eq!(session.objects.len(), 1);

    let Object::Group(group) = &session.objects[0] else {
        panic!("expected a group, got {:?}", session.objects[0]);
    };
    assert_eq!(group.kind, GroupKind::Super);
    assert_eq!(group.singles.len(), 2);
    assert_eq!(group.singles[0].name, "a");
    assert_eq!(group.singles[1].name, "b");
}

#[test]
fn circuit_parses() {
    let session = parse_body(r#"circuit("row":3x10;"plank":3x60T;);"#).unwrap();

    let Object::Group(group) = &session.objects[0] else {
        panic!("expected a group, got {:?}", session.objects[0]);
    };
    assert_eq!(group.kind, GroupKind::Circuit);
    assert_eq!(group.singles.len(), 2);
}

#[test]
fn group_needs_no_trailing_separator() {
    let session = parse_body(r#"super("a":5x5;)"#).unwrap();
    assert_eq!(session.objects.len(), 1);
}

#[test]
fn objects_keep_input_order() {
    let session = parse_body(r#""a":1x1;super("b":2x2;);"c":3x3;"#).unwrap();
    assert_eq!(session.objects.len(), 3);
    assert!(matches!(session.objects[0], Object::Single(_)));
    assert!(matches!(session.objects[1], Object::Group(_)));
    assert!(matches!(session.objects[2], Object::Single(_)));
}

#[test]
fn extra_separators_between_tokens_are_skipped() {
    let session = parse_body(r#""a":5x5;;;"b":3x3;"#).unwrap();
    assert_eq!(session.objects.len(), 2);
}

#[test]
fn boundary_integers_parse() {
    let single = single_token(r#""squat":21474835x21474835;"#);
    let standard = standard_work(&single);
    assert_eq!(standard.sets, 21474835);
    assert_eq!(standard.reps.value, num(21474835));
}

#[test]
fn parsing_is_deterministic() {
    let program = r#"{"version":"1.0","weight":"lbs"}"squat":4x(4,3@30,2,1)@120;super("a":5x5;"b":4xF;);"#;
    assert_eq!(parse(program), parse(program));
}
