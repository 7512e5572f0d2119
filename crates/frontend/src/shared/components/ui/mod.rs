pub mod checkbox;
