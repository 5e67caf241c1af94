// Task-Modul: Enthält alle Embassy Tasks
//
// Interrupt → debounce_task → Fan-out → report_task / indicator_task.
// Der Zähler wird von report_task, indicator_task und
// encoder_monitor_task nur gelesen.

pub mod button;
pub mod indicator;
pub mod monitor;
pub mod report;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use button::debounce_task;
pub use indicator::indicator_task;
pub use monitor::encoder_monitor_task;
pub use report::report_task;
pub use wifi::{connection_task, dhcp_task, net_task};
