pub mod teacher;
