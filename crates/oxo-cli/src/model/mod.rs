pub mod search_report;
