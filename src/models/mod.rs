pub mod bookmark;
pub mod criteria;
pub mod department;
pub mod detail;
pub mod employee;
