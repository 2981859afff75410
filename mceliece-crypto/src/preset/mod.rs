pub mod field_tables;
