pub mod master;
pub mod reduced;

pub use master::MasterTable;
pub use reduced::ReducedTable;
