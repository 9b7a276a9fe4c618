pub mod contact;
pub mod pages;
pub mod project;
