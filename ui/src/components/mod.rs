pub mod blocks;
pub mod form;
pub mod pages;
