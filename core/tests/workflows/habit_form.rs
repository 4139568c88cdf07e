// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Habit form workflows: a stored rule is loaded, the user edits it, and the
//! form keeps the preview in sync with every emitted rule.

use cadence_core::EditorError;
use cadence_rrule::{Edit, Frequency, MonthlyMode, Weekday, WeekdayPosition};

use crate::common::{RecordingEditor, test_config};

#[test]
fn weekly_habit_from_scratch() {
    // Arrange
    let config = test_config("FREQ=DAILY", false);
    let mut form = RecordingEditor::new(config.rule_or_default(""), false);
    assert_eq!(form.editor.preview(), "Every day");

    // Act
    let edits: Vec<Edit> = ["freq=weekly", "toggle=WE", "toggle=MO", "toggle=FR"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    form.editor.apply_all(edits).unwrap();

    // Assert
    assert_eq!(
        form.emitted(),
        vec![
            "FREQ=WEEKLY",
            "FREQ=WEEKLY;BYDAY=WE",
            "FREQ=WEEKLY;BYDAY=MO,WE",
            "FREQ=WEEKLY;BYDAY=MO,WE,FR",
        ]
    );
    assert_eq!(form.editor.preview(), "Every week on Mon, Wed, and Fri");
}

#[test]
fn monthly_habit_switching_modes() {
    // Arrange
    let mut form = RecordingEditor::new("monthly", false);
    assert_eq!(form.editor.rule(), "FREQ=MONTHLY;BYMONTHDAY=1");

    // Act
    form.editor.apply(Edit::SetMonthDay(40)).unwrap();
    let clamped = form.editor.rule().to_string();
    form.editor
        .apply(Edit::SwitchMonthlyMode(MonthlyMode::WeekdayOfMonth))
        .unwrap();
    form.editor
        .apply(Edit::SetWeekdayOfMonth(
            WeekdayPosition::Second,
            Weekday::Tuesday,
        ))
        .unwrap();

    // Assert
    assert_eq!(clamped, "FREQ=MONTHLY;BYMONTHDAY=31");
    assert_eq!(form.editor.rule(), "FREQ=MONTHLY;BYDAY=2TU");
    assert_eq!(form.editor.preview(), "Every month on the 2nd Tuesday");

    // switching back drops the weekday pair
    form.editor
        .apply(Edit::SwitchMonthlyMode(MonthlyMode::DayOfMonth))
        .unwrap();
    assert_eq!(form.editor.rule(), "FREQ=MONTHLY;BYMONTHDAY=1");
}

#[test]
fn frequency_change_resets_interval() {
    let mut form = RecordingEditor::new("FREQ=DAILY;INTERVAL=3", false);

    form.editor.apply(Edit::SetFrequency(Frequency::Yearly)).unwrap();

    assert_eq!(form.editor.rule(), "FREQ=YEARLY");
    assert_eq!(form.editor.preview(), "Every year");
}

#[test]
fn edits_that_do_not_apply_are_emitted_unchanged() {
    let mut form = RecordingEditor::new("FREQ=DAILY", false);

    form.editor
        .apply(Edit::ToggleWeekday(Weekday::Monday))
        .unwrap();
    form.editor.apply(Edit::SetMonthDay(5)).unwrap();

    assert_eq!(form.emitted(), vec!["FREQ=DAILY", "FREQ=DAILY"]);
}

#[test]
fn read_only_form() {
    // Arrange
    let mut form = RecordingEditor::new("FREQ=WEEKLY;BYDAY=SA", true);

    // Act
    let result = form.editor.apply(Edit::ToggleWeekday(Weekday::Sunday));

    // Assert
    assert_eq!(result, Err(EditorError::Disabled));
    assert!(form.emitted().is_empty());
    assert_eq!(form.editor.preview(), "Every week on Sat");
}
