pub mod cash_flow;

pub use cash_flow::{entries_by_date_desc, summarize, CashFlowSummary};
