//! Host-level tests for assembling clock frames.

use shift_clock::bit_inspector::inspect_word;
use shift_clock::shared_constants::SPACER_MASK;
use shift_clock::{ClockTime, DisplayWord, Error, Frame};

const REFERENCE_12_34: [&str; 5] = [
    "0010111011101010",
    "0010001000101010",
    "0010111011101110",
    "0010100000100010",
    "0010111011100010",
];

#[test]
fn twelve_thirty_four_matches_reference_output() {
    let frame = Frame::from_hours_minutes(12, 34).expect("in range");
    let rendered: Vec<_> = frame.into_iter().map(inspect_word).collect();
    assert_eq!(rendered, REFERENCE_12_34);
}

#[test]
fn frame_display_is_reference_lines() {
    let frame = Frame::from_hours_minutes(12, 34).expect("in range");
    let expected: String = REFERENCE_12_34.iter().map(|line| format!("{line}\n")).collect();
    assert_eq!(frame.to_string(), expected);
}

#[test]
fn spacer_bits_stay_clear_for_every_time() {
    for hours in 0..=99 {
        for minutes in 0..=99 {
            let frame = Frame::from_hours_minutes(hours, minutes).expect("in range");
            for (row, word) in frame.iter().enumerate() {
                assert_eq!(
                    word.bits() & SPACER_MASK,
                    0,
                    "{hours:02}:{minutes:02} row {row}"
                );
                assert!(word.spacers_clear());
            }
        }
    }
}

#[test]
fn fields_hold_each_digit_segment() {
    let frame = Frame::from_hours_minutes(9, 58).expect("in range");
    // 09:58 -> digits 0, 9, 5, 8
    let columns: Vec<[u8; 4]> = frame.iter().map(|word| word.segments()).collect();
    assert_eq!(
        columns,
        [
            [7, 7, 7, 7],
            [5, 5, 4, 5],
            [5, 7, 7, 7],
            [5, 1, 1, 5],
            [7, 1, 7, 7],
        ]
    );
}

#[test]
fn assembling_twice_gives_same_frame() {
    let first = Frame::from_hours_minutes(23, 59).expect("in range");
    let second = Frame::from_hours_minutes(23, 59).expect("in range");
    assert_eq!(first, second);
}

#[test]
fn clock_time_and_raw_values_agree() {
    let clock_time = ClockTime::new(4, 20).expect("in range");
    assert_eq!(
        Frame::try_from(clock_time),
        Frame::from_hours_minutes(4, 20)
    );
    assert_eq!(Frame::from_digits([0, 4, 2, 0]), Frame::from_clock_time(clock_time));
}

#[test]
fn three_digit_values_are_rejected() {
    assert_eq!(
        Frame::from_hours_minutes(100, 0),
        Err(Error::HoursOutOfRange { hours: 100 })
    );
    assert_eq!(
        Frame::from_hours_minutes(0, 100),
        Err(Error::MinutesOutOfRange { minutes: 100 })
    );
}

#[test]
fn display_word_bytes_match_rendering() {
    let word = DisplayWord::from_segments([1, 7, 7, 5]).expect("valid segments");
    assert_eq!(word.to_be_bytes(), [0x2E, 0xEA]);
    assert_eq!(inspect_word(word), REFERENCE_12_34[0]);
}
