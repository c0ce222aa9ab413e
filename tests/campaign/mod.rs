//! Campaign layer tests

pub mod card_test;
pub mod contract_test;
pub mod create_test;
pub mod format_test;
pub mod manager_test;
