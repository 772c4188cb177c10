//! Pure calculation utilities behind the study tools.

pub mod gpa;
pub mod pomodoro;

pub use gpa::{Course, GpaError, GpaSummary, LetterGrade, calculate_gpa};
pub use pomodoro::{Phase, PomodoroSettings, PomodoroTimer};
