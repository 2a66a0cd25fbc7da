pub mod daily_stat;
pub mod pomodoro;
pub mod task;

pub use daily_stat::DailyStat;
pub use pomodoro::Pomodoro;
pub use task::Task;
