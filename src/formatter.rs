//! Human-readable descriptions of parsed sessions.
//!
//! The canonical form a session's `Display` emits is for machines; these
//! functions render the same tree as English, using the session's weight
//! unit for load modifiers.

use crate::ast::{Group, Modifier, Object, Reps, Session, Side, Single, Standard, StandardVaried, Work};

/// Describes a whole session, one block per object.
pub fn format_session(session: &Session) -> String {
    let unit = session.weight_unit.as_deref();
    let mut lines = Vec::new();

    match (&session.version, &session.weight_unit) {
        (Some(version), Some(unit)) => lines.push(format!("EML {version}, weight in {unit}")),
        (Some(version), None) => lines.push(format!("EML {version}")),
        (None, Some(unit)) => lines.push(format!("weight in {unit}")),
        (None, None) => {}
    }

    for object in &session.objects {
        lines.push(format_object(object, unit));
    }

    lines.join("\n")
}

/// Describes one work token.
pub fn format_object(object: &Object, unit: Option<&str>) -> String {
    match object {
        Object::Single(single) => format_single(single, unit),
        Object::Group(group) => format_group(group, unit),
    }
}

fn format_group(group: &Group, unit: Option<&str>) -> String {
    let mut output = format!("{}:", group.kind.keyword());
    for single in &group.singles {
        for line in format_single(single, unit).lines() {
            output.push_str("\n  ");
            output.push_str(line);
        }
    }
    output
}

/// Describes one exercise.
pub fn format_single(single: &Single, unit: Option<&str>) -> String {
    match &single.work {
        Work::None => format!("\"{}\": no work", single.name),
        Work::Standard(standard) => {
            format!("\"{}\": {}", single.name, format_standard(standard, unit))
        }
        Work::StandardVaried(varied) => {
            format!("\"{}\": {}", single.name, format_varied(varied, unit))
        }
        Work::Asymmetric { left, right } => format!(
            "\"{}\": asymmetric\n  left: {}\n  right: {}",
            single.name,
            indented(&format_side(left, unit)),
            indented(&format_side(right, unit)),
        ),
    }
}

fn format_side(side: &Side, unit: Option<&str>) -> String {
    match side {
        Side::None => "no work".to_string(),
        Side::Standard(standard) => format_standard(standard, unit),
        Side::StandardVaried(varied) => format_varied(varied, unit),
    }
}

fn format_standard(standard: &Standard, unit: Option<&str>) -> String {
    let reps = &standard.reps;
    let mut output = if reps.is_time {
        format!("{} time sets", standard.sets)
    } else {
        format!("{} sets", standard.sets)
    };

    if reps.to_failure {
        output.push_str(" to failure");
    } else if reps.is_time {
        output.push_str(&format!(" of {} seconds", reps.value));
    } else {
        output.push_str(&format!(" of {} reps", reps.value));
    }

    output.push_str(&format_modifier(&reps.modifier, unit));
    output
}

fn format_varied(varied: &StandardVaried, unit: Option<&str>) -> String {
    let mut output = format!("{} sets", varied.sets);
    for rep in &varied.reps {
        output.push_str("\n- ");
        output.push_str(&format_reps(rep, unit));
    }
    output
}

fn format_reps(reps: &Reps, unit: Option<&str>) -> String {
    let mut output = if reps.to_failure {
        "to failure".to_string()
    } else if reps.is_time {
        format!("{} seconds", reps.value)
    } else {
        format!("{} reps", reps.value)
    };
    output.push_str(&format_modifier(&reps.modifier, unit));
    output
}

fn format_modifier(modifier: &Modifier, unit: Option<&str>) -> String {
    match modifier {
        Modifier::None => String::new(),
        Modifier::Weight(value) => match unit {
            Some(unit) => format!(" with {value} {unit}"),
            None => format!(" with {value}"),
        },
        Modifier::Rpe(value) => format!(" with RPE of {value}"),
    }
}

fn indented(text: &str) -> String {
    text.replace('\n', "\n  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn describes_standard_work() {
        let session = parse(r#"{"weight":"lbs"}"squat":5x5@120;"#).unwrap();
        assert_eq!(
            format_session(&session),
            "weight in lbs\n\"squat\": 5 sets of 5 reps with 120 lbs"
        );
    }

    #[test]
    fn describes_time_and_failure() {
        let session = parse(r#"{}"plank":3xFT;"#).unwrap();
        assert_eq!(
            format_session(&session),
            "\"plank\": 3 time sets to failure"
        );
    }

    #[test]
    fn describes_varied_work_per_set() {
        let session = parse(r#"{"weight":"kg"}"squat":3x(5,3@102.5,1);"#).unwrap();
        assert_eq!(
            format_session(&session),
            "weight in kg\n\"squat\": 3 sets\n- 5 reps\n- 3 reps with 102.50 kg\n- 1 reps"
        );
    }

    #[test]
    fn describes_groups_and_asymmetric_work() {
        let session = parse(r#"{}super("a":5x5;"sl-rdl":4x3:5x2;);"#).unwrap();
        assert_eq!(
            format_session(&session),
            "super:\n  \"a\": 5 sets of 5 reps\n  \"sl-rdl\": asymmetric\n    left: 4 sets of 3 reps\n    right: 5 sets of 2 reps"
        );
    }

    #[test]
    fn rpe_is_unitless() {
        let session = parse(r#"{"weight":"lbs"}"squat":5x5%90;"#).unwrap();
        assert_eq!(
            format_session(&session),
            "weight in lbs\n\"squat\": 5 sets of 5 reps with RPE of 90"
        );
    }
}
