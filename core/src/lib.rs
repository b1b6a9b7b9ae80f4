pub mod flag;
pub mod prober;
pub mod sweep;
