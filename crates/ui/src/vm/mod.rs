mod copy;
mod game_vm;

pub use copy::{
    FeedbackCopy, countdown_label, feedback_copy, is_danger, summary_lines,
};
pub use game_vm::{GameVm, Screen};
